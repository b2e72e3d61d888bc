//! Credit-card statement resolution
//!
//! A card's billing cycle is a rolling one-month window ending on its
//! statement closing day: the period for a reference month runs from the day
//! after the previous month's closing day through this month's closing day,
//! both clamped into short months. Every credit expense lands in exactly one
//! period.

use chrono::{Duration, NaiveDate};

use crate::models::{Card, ExpenseCategory, InvoicePayment, LedgerRecord, Money, YearMonth};

/// Inclusive date window of one billing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl StatementPeriod {
    /// Check if a date falls within the period (inclusive on both ends)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// A resolved statement: the cycle window plus the purchases inside it
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// The statement month being viewed
    pub reference: YearMonth,
    /// The cycle's date window
    pub period: StatementPeriod,
    /// Matching credit expenses, ascending by date
    pub records: Vec<LedgerRecord>,
    /// Sum of the matching expenses
    pub total: Money,
}

/// Aggregate limit usage for one card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardUsage {
    /// All credit purchases ever charged to the card
    pub spent: Money,
    /// All invoice payments made for the card
    pub paid: Money,
    /// Outstanding amount occupying the limit (`spent - paid`)
    pub used: Money,
    /// Remaining limit (`credit_limit - used`)
    pub available: Money,
}

/// Resolve the billing window for a card and reference month
///
/// With closing day 5 and reference March, the window is Feb 6 through
/// Mar 5. Closing days 29-31 clamp to the last day of short months; the
/// window stays gapless because the start is derived from the previous
/// month's clamped end.
pub fn resolve_period(card: &Card, reference: YearMonth) -> StatementPeriod {
    let end = reference.day_clamped(card.statement_closing_day);
    let start = reference.prev().day_clamped(card.statement_closing_day) + Duration::days(1);
    StatementPeriod { start, end }
}

/// Build the statement for a card and reference month
///
/// `credit_expenses` may contain purchases from any card; only those
/// belonging to `card` and dated inside the resolved window are kept,
/// sorted ascending by date for display.
pub fn statement_for(
    card: &Card,
    reference: YearMonth,
    credit_expenses: &[LedgerRecord],
) -> Statement {
    let period = resolve_period(card, reference);

    let mut records: Vec<LedgerRecord> = credit_expenses
        .iter()
        .filter(|rec| rec.card_id() == Some(card.id) && period.contains(rec.date))
        .cloned()
        .collect();
    records.sort_by_key(|rec| rec.date);

    let total = records.iter().map(|rec| rec.amount).sum();

    Statement {
        reference,
        period,
        records,
        total,
    }
}

/// Sum a statement's records per category, in first-occurrence order
///
/// Drives the cycle-summary pie chart.
pub fn category_breakdown(records: &[LedgerRecord]) -> Vec<(ExpenseCategory, Money)> {
    let mut breakdown: Vec<(ExpenseCategory, Money)> = Vec::new();
    for record in records {
        let category = record
            .expense_details()
            .map(|d| d.category)
            .unwrap_or_default();
        match breakdown.iter_mut().find(|(c, _)| *c == category) {
            Some((_, sum)) => *sum += record.amount,
            None => breakdown.push((category, record.amount)),
        }
    }
    breakdown
}

/// Compute how much of a card's limit is occupied
///
/// Purchases occupy the limit when made; invoice payments free it again.
pub fn card_usage(
    card: &Card,
    credit_expenses: &[LedgerRecord],
    payments: &[InvoicePayment],
) -> CardUsage {
    let spent: Money = credit_expenses
        .iter()
        .filter(|rec| rec.card_id() == Some(card.id))
        .map(|rec| rec.amount)
        .sum();
    let paid: Money = payments
        .iter()
        .filter(|p| p.card_id == card.id)
        .map(|p| p.amount)
        .sum();
    let used = spent - paid;

    CardUsage {
        spent,
        paid,
        used,
        available: card.credit_limit - used,
    }
}
