//! Aggregation and reporting
//!
//! Pure functions over in-memory record snapshots: the annual matrix, card
//! statement resolution, and the balance/budget dashboard numbers. All of
//! them are safe to re-run on every refreshed snapshot.

pub mod matrix;
pub mod statement;
pub mod stats;

pub use matrix::{
    aggregate, distinct_descriptions, monthly_totals, period_total, MatrixRow, MONTH_LABELS,
};
pub use statement::{
    card_usage, category_breakdown, resolve_period, statement_for, CardUsage, Statement,
    StatementPeriod,
};
pub use stats::{monthly_stats, recent_activity, BudgetSplit, MonthlyStats};
