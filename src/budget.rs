use derive_getters::Getters;
use derive_more::{Constructor, Deref};
use log::debug;

use super::{error::ReportError, record::BudgetRecord, reducer::Reducer, report::Rounded};

#[derive(Debug, Clone, PartialEq, Eq, Constructor, Getters)]
pub struct Delta {
    label: String,
    amount: i128,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct Deltas(Vec<Delta>);

impl Deltas {
    fn first_by(&self, better: impl Fn(i128, i128) -> bool) -> Option<&Delta> {
        self.0
            .iter()
            .reduce(|best, d| if better(d.amount, best.amount) { d } else { best })
    }

    pub fn greatest_increase(&self) -> Option<&Delta> {
        self.first_by(|a, b| a > b)
    }

    pub fn greatest_decrease(&self) -> Option<&Delta> {
        self.first_by(|a, b| a < b)
    }
}

/// Month-over-month revenue fold.
///
/// The baseline before the first month is zero, so the first delta is the first
/// month's own revenue.
#[derive(Debug, Default)]
pub struct BudgetReducer {
    months: usize,
    total_revenue: i128,
    previous_revenue: i128,
    deltas: Deltas,
}

impl Reducer for BudgetReducer {
    type Record = BudgetRecord;
    type Summary = BudgetSummary;

    fn accumulate(mut self, record: BudgetRecord) -> Self {
        let (date, revenue) = record.dissolve();
        let revenue = i128::from(revenue);
        self.months += 1;
        self.total_revenue += revenue;
        self.deltas
            .0
            .push(Delta::new(date, revenue - self.previous_revenue));
        self.previous_revenue = revenue;
        self
    }

    fn finalize(self) -> Result<BudgetSummary, ReportError> {
        let (Some(increase), Some(decrease)) = (
            self.deltas.greatest_increase().cloned(),
            self.deltas.greatest_decrease().cloned(),
        ) else {
            return Err(ReportError::DivideByZero);
        };
        let change: i128 = self.deltas.iter().map(|d| d.amount).sum();
        let average_change = Rounded::ratio(change, self.deltas.len() as i128);
        debug!(
            "budget over {} months: total {}, average change {}",
            self.months, self.total_revenue, average_change
        );

        Ok(BudgetSummary {
            total_months: self.months,
            total_revenue: self.total_revenue,
            average_change,
            greatest_increase: increase,
            greatest_decrease: decrease,
            deltas: self.deltas,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Getters)]
pub struct BudgetSummary {
    total_months: usize,
    total_revenue: i128,
    average_change: Rounded,
    greatest_increase: Delta,
    greatest_decrease: Delta,
    deltas: Deltas,
}
