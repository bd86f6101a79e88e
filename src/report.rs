use std::fmt;

use super::{budget::BudgetSummary, poll::PollSummary};

const BUDGET_TITLE: &str = "Financial Analysis";
const BUDGET_RULE: usize = 60;
const POLL_TITLE: &str = "Election Results";
const POLL_RULE: usize = 40;

/// Two-decimal value in whole hundredths, rounded half away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rounded(i128);

impl Rounded {
    pub fn ratio(num: i128, den: i128) -> Self {
        debug_assert!(den > 0);
        let scaled = num * 100;
        let (quot, rem) = (scaled / den, scaled % den);
        let hundredths = if 2 * rem.abs() >= den {
            quot + scaled.signum()
        } else {
            quot
        };
        Self(hundredths)
    }

    pub fn percentage(part: u64, whole: u64) -> Self {
        Self::ratio(part as i128 * 100, whole as i128)
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Rounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

fn heading(f: &mut fmt::Formatter<'_>, title: &str, rule: usize) -> fmt::Result {
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "-".repeat(rule))
}

impl fmt::Display for BudgetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, BUDGET_TITLE, BUDGET_RULE)?;
        writeln!(f, "Total Months: {}", self.total_months())?;
        writeln!(f, "Total Revenue: ${}", self.total_revenue())?;
        writeln!(f, "Average Revenue Change: ${}", self.average_change())?;
        let (inc, dec) = (self.greatest_increase(), self.greatest_decrease());
        writeln!(
            f,
            "Greatest Increase in Revenue: {} ${}",
            inc.label(),
            inc.amount()
        )?;
        writeln!(
            f,
            "Greatest Decrease in Revenue: {} ${}",
            dec.label(),
            dec.amount()
        )
    }
}

impl fmt::Display for PollSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, POLL_TITLE, POLL_RULE)?;
        writeln!(f, "Total Votes: {}", self.total_votes())?;
        for candidate in self.candidates() {
            writeln!(
                f,
                "{}: {}% ({})",
                candidate.name(),
                candidate.percentage(),
                candidate.votes()
            )?;
        }
        writeln!(f, "Winner: {}", self.winner())
    }
}

#[cfg(test)]
mod tests {
    use super::Rounded;
    use crate::{
        budget::BudgetReducer, poll::PollReducer, reduce, Ballot, BudgetRecord, ReportError,
    };

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(Rounded::ratio(5, 3).to_string(), "1.67");
        assert_eq!(Rounded::ratio(1, 8).to_string(), "0.13");
        assert_eq!(Rounded::ratio(-1, 8).to_string(), "-0.13");
        assert_eq!(Rounded::ratio(1, 400).to_string(), "0.00");
        assert_eq!(Rounded::ratio(-1, 400).to_string(), "0.00");
        assert_eq!(Rounded::ratio(-7, 2).to_string(), "-3.50");
    }

    #[test]
    fn percentages() {
        assert_eq!(Rounded::percentage(3, 5).to_string(), "60.00");
        assert_eq!(Rounded::percentage(1, 3).to_string(), "33.33");
        assert_eq!(Rounded::percentage(2, 3).to_string(), "66.67");
        assert_eq!(Rounded::percentage(2, 3).to_f64(), 66.67);
    }

    #[test]
    fn budget_report() {
        let records = [("Jan", 10), ("Feb", 15), ("Mar", 5)]
            .into_iter()
            .map(|(date, revenue)| Ok::<_, ReportError>(BudgetRecord::new(date, revenue)));
        let summary = reduce::<BudgetReducer, _>(records).unwrap();
        let expected = "\
Financial Analysis
------------------------------------------------------------
Total Months: 3
Total Revenue: $30
Average Revenue Change: $1.67
Greatest Increase in Revenue: Jan $10
Greatest Decrease in Revenue: Mar $-10
";
        assert_eq!(summary.to_string(), expected);
    }

    #[test]
    fn poll_report() {
        let ballots = ["A", "B", "A", "A", "C"]
            .into_iter()
            .enumerate()
            .map(|(id, name)| Ok::<_, ReportError>(Ballot::new(id.to_string(), "Marsh", name)));
        let summary = reduce::<PollReducer, _>(ballots).unwrap();
        let expected = "\
Election Results
----------------------------------------
Total Votes: 5
A: 60.00% (3)
B: 20.00% (1)
C: 20.00% (1)
Winner: A
";
        assert_eq!(summary.to_string(), expected);
    }
}
