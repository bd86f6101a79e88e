use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use derive_getters::Getters;
use derive_more::Constructor;

use super::error::ReportError;

pub const DEFAULT_INPUT_DIR: &str = "raw_data";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Budget,
    Poll,
}

impl Dataset {
    pub fn output_prefix(self) -> &'static str {
        match self {
            Self::Budget => "summary",
            Self::Poll => "results",
        }
    }

    /// File names shipped with the sample data, shown when prompting.
    pub fn sample_names(self) -> [&'static str; 2] {
        match self {
            Self::Budget => ["budget_data_1", "budget_data_2"],
            Self::Poll => ["election_data_1", "election_data_2"],
        }
    }
}

impl FromStr for Dataset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "budget" => Ok(Self::Budget),
            "poll" => Ok(Self::Poll),
            other => Err(format!("unknown dataset '{other}', expected budget or poll")),
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Budget => "budget",
            Self::Poll => "poll",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Constructor, Getters)]
pub struct Config {
    input_dir: PathBuf,
    output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_DIR.into(), DEFAULT_OUTPUT_DIR.into())
    }
}

impl Config {
    /// Resolves `name` to `<input_dir>/<name>.csv`, failing when no such file exists.
    pub fn input_path(&self, name: &str) -> Result<PathBuf, ReportError> {
        let path = self.input_dir.join(format!("{name}.csv"));
        if !path.is_file() {
            return Err(ReportError::FileNotFound { path });
        }
        Ok(path)
    }

    pub fn output_path(&self, dataset: Dataset, name: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_{name}.txt", dataset.output_prefix()))
    }

    pub fn with_dirs(input_dir: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Self {
        Self::new(
            input_dir.as_ref().to_path_buf(),
            output_dir.as_ref().to_path_buf(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{Config, Dataset};
    use crate::ReportError;

    #[test]
    fn parse_dataset() {
        assert_eq!("budget".parse::<Dataset>(), Ok(Dataset::Budget));
        assert_eq!("Poll".parse::<Dataset>(), Ok(Dataset::Poll));
        assert!("ledger".parse::<Dataset>().is_err());
    }

    #[test]
    fn output_paths() {
        let config = Config::default();
        assert_eq!(
            config.output_path(Dataset::Budget, "budget_data_1"),
            PathBuf::from("output/summary_budget_data_1.txt")
        );
        assert_eq!(
            config.output_path(Dataset::Poll, "election_data_2"),
            PathBuf::from("output/results_election_data_2.txt")
        );
    }

    #[test]
    fn resolves_existing_input() {
        let config = Config::with_dirs("src/test_utils", "unused");
        assert_eq!(
            config.input_path("budget_data").unwrap(),
            PathBuf::from("src/test_utils/budget_data.csv")
        );
    }

    #[test]
    fn missing_input() {
        let config = Config::with_dirs("src/test_utils", "unused");
        match config.input_path("nope") {
            Err(ReportError::FileNotFound { path }) => {
                assert_eq!(path, PathBuf::from("src/test_utils/nope.csv"))
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
