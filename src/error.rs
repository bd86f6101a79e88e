use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("file '{}' not found", path.display())]
    FileNotFound { path: PathBuf },
    #[error("malformed record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },
    #[error("no records to summarize")]
    DivideByZero,
    #[error("csv error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ReportError {
    pub(crate) fn malformed(row: usize, reason: impl ToString) -> Self {
        Self::MalformedRecord {
            row,
            reason: reason.to_string(),
        }
    }
}
