use std::{
    fs,
    path::{Path, PathBuf},
};

use derive_getters::Getters;
use log::info;

use super::{
    budget::BudgetReducer,
    config::{Config, Dataset},
    error::ReportError,
    poll::PollReducer,
    record::{self, Ballot, BudgetRecord},
    reducer::reduce,
};

#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Outcome {
    report: String,
    output: PathBuf,
}

pub fn render(dataset: Dataset, input: &Path) -> Result<String, ReportError> {
    let report = match dataset {
        Dataset::Budget => {
            reduce::<BudgetReducer, _>(record::from_path::<BudgetRecord>(input)?)?.to_string()
        }
        Dataset::Poll => reduce::<PollReducer, _>(record::from_path::<Ballot>(input)?)?.to_string(),
    };
    Ok(report)
}

/// Summarizes `<input_dir>/<name>.csv` and writes the report under the output dir.
///
/// Nothing is written unless the whole input folds cleanly.
pub fn execute(config: &Config, dataset: Dataset, name: &str) -> Result<Outcome, ReportError> {
    let input = config.input_path(name)?;
    info!("summarizing {dataset} data from {}", input.display());
    let report = render(dataset, &input)?;

    let output = config.output_path(dataset, name);
    if let Some(dir) = output.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&output, &report)?;
    info!("wrote {}", output.display());

    Ok(Outcome { report, output })
}
