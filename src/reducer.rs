use log::debug;

use super::error::ReportError;

const PROGRESS_EVERY: usize = 10_000;

/// A single forward fold over a record stream.
///
/// A reducer is accumulating until [`Reducer::finalize`] consumes it, after which
/// only the summary remains.
pub trait Reducer: Default {
    type Record;
    type Summary;

    fn accumulate(self, record: Self::Record) -> Self;

    fn finalize(self) -> Result<Self::Summary, ReportError>;
}

pub fn reduce<R, I>(records: I) -> Result<R::Summary, ReportError>
where
    R: Reducer,
    I: IntoIterator<Item = Result<R::Record, ReportError>>,
{
    let mut rows = 0usize;
    let state = records.into_iter().try_fold(R::default(), |state, record| {
        rows += 1;
        if rows % PROGRESS_EVERY == 0 {
            debug!("folded {rows} records so far");
        }
        record.map(|record| state.accumulate(record))
    })?;
    debug!("folded {rows} records");

    state.finalize()
}
