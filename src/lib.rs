mod budget;
mod config;
mod error;
mod poll;
mod record;
mod reducer;
mod report;
mod run;

pub use self::{
    budget::{BudgetReducer, BudgetSummary, Delta, Deltas},
    config::{Config, Dataset, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR},
    error::ReportError,
    poll::{CandidateResult, PollReducer, PollSummary},
    record::{from_path, from_reader, Ballot, BudgetRecord, Record},
    reducer::{reduce, Reducer},
    report::Rounded,
    run::{execute, render, Outcome},
};
