use std::{io::Read, path::Path};

use csv::{ReaderBuilder, Trim};
use derive_getters::{Dissolve, Getters};
use serde::{de::DeserializeOwned, Deserialize};

use super::error::ReportError;

/// A row type the summarizers know how to read.
pub trait Record: DeserializeOwned {
    fn check(&self) -> Result<(), &'static str> {
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Getters, Dissolve)]
pub struct BudgetRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Revenue")]
    revenue: i64,
}

impl BudgetRecord {
    pub fn new(date: impl Into<String>, revenue: i64) -> Self {
        Self {
            date: date.into(),
            revenue,
        }
    }
}

impl Record for BudgetRecord {}

#[derive(Debug, Clone, Deserialize, PartialEq, Getters, Dissolve)]
pub struct Ballot {
    #[serde(rename = "Voter ID")]
    voter_id: String,
    #[serde(rename = "County")]
    county: String,
    #[serde(rename = "Candidate")]
    candidate: String,
}

impl Ballot {
    pub fn new(
        voter_id: impl Into<String>,
        county: impl Into<String>,
        candidate: impl Into<String>,
    ) -> Self {
        Self {
            voter_id: voter_id.into(),
            county: county.into(),
            candidate: candidate.into(),
        }
    }
}

impl Record for Ballot {
    fn check(&self) -> Result<(), &'static str> {
        if self.candidate.is_empty() {
            return Err("empty candidate");
        }
        Ok(())
    }
}

/// Data rows are numbered from 1; the first bad row ends the stream with an error.
pub fn from_reader<T, R>(rdr: R) -> impl Iterator<Item = Result<T, ReportError>>
where
    T: Record,
    R: Read,
{
    ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(rdr)
        .into_deserialize::<T>()
        .enumerate()
        .map(|(idx, record)| {
            let row = idx + 1;
            let record = record.map_err(|e| ReportError::malformed(row, e))?;
            record.check().map_err(|e| ReportError::malformed(row, e))?;
            Ok(record)
        })
}

pub fn from_path<T>(path: &Path) -> Result<impl Iterator<Item = Result<T, ReportError>>, ReportError>
where
    T: Record,
{
    let file = std::fs::File::open(path)?;
    Ok(from_reader(file))
}
