use std::collections::HashMap;

use derive_getters::Getters;
use log::debug;

use super::{error::ReportError, record::Ballot, reducer::Reducer, report::Rounded};

/// Counts ballots per candidate, remembering the order candidates first appear in.
#[derive(Debug, Default)]
pub struct PollReducer {
    total_votes: u64,
    tallies: Vec<(String, u64)>,
    positions: HashMap<String, usize>,
}

impl Reducer for PollReducer {
    type Record = Ballot;
    type Summary = PollSummary;

    fn accumulate(mut self, ballot: Ballot) -> Self {
        let (_, _, candidate) = ballot.dissolve();
        let pos = match self.positions.get(&candidate) {
            Some(&pos) => pos,
            None => {
                let pos = self.tallies.len();
                self.positions.insert(candidate.clone(), pos);
                self.tallies.push((candidate, 0));
                pos
            }
        };
        self.tallies[pos].1 += 1;
        self.total_votes += 1;
        self
    }

    fn finalize(self) -> Result<PollSummary, ReportError> {
        if self.total_votes == 0 {
            return Err(ReportError::DivideByZero);
        }
        let total = self.total_votes;
        let candidates = self
            .tallies
            .into_iter()
            .map(|(name, votes)| CandidateResult {
                percentage: Rounded::percentage(votes, total),
                name,
                votes,
            })
            .collect::<Vec<_>>();
        let winner = candidates
            .iter()
            .reduce(|best, c| if c.votes > best.votes { c } else { best })
            .map(|c| c.name.clone())
            .ok_or(ReportError::DivideByZero)?;
        debug!(
            "poll over {} votes: {} candidates, winner {}",
            total,
            candidates.len(),
            winner
        );

        Ok(PollSummary {
            total_votes: total,
            candidates,
            winner,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Getters)]
pub struct CandidateResult {
    name: String,
    votes: u64,
    percentage: Rounded,
}

#[derive(Debug, Clone, PartialEq, Getters)]
pub struct PollSummary {
    total_votes: u64,
    candidates: Vec<CandidateResult>,
    winner: String,
}
