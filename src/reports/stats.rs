//! Balance and budget calculations
//!
//! Combines incomes, balance-counting expenses, and invoice payments into
//! the period totals shown on the Home dashboard, plus the 50/30/20 budget
//! suggestion and the recent-activity feed.

use chrono::NaiveDate;

use crate::models::{InvoicePayment, LedgerRecord, Money};

/// Income, expense, and balance totals for a date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthlyStats {
    pub income_total: Money,
    pub expense_total: Money,
    pub balance: Money,
}

/// 50/30/20 decomposition of a total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetSplit {
    /// 50% - needs
    pub essential: Money,
    /// 30% - wants
    pub leisure: Money,
    /// 20% - savings
    pub reserve: Money,
}

impl BudgetSplit {
    /// Split a total into the 50/30/20 buckets
    ///
    /// Pure multiplicative decomposition in integer centavos; the buckets
    /// are a suggestion, not an accounting identity, so no remainder
    /// redistribution is done.
    pub fn from_total(total: Money) -> Self {
        let cents = total.cents();
        Self {
            essential: Money::from_cents(cents * 50 / 100),
            leisure: Money::from_cents(cents * 30 / 100),
            reserve: Money::from_cents(cents * 20 / 100),
        }
    }
}

/// Compute income/expense/balance totals for `[start, end]` inclusive
///
/// Credit purchases are excluded (their `counts_toward_balance` flag is
/// false); the invoice payment that settles them enters `expense_total`
/// in the period it is paid. That keeps each credit purchase counted
/// exactly once.
pub fn monthly_stats(
    records: &[LedgerRecord],
    payments: &[InvoicePayment],
    start: NaiveDate,
    end: NaiveDate,
) -> MonthlyStats {
    let in_range = |date: NaiveDate| date >= start && date <= end;

    let income_total: Money = records
        .iter()
        .filter(|rec| rec.is_income() && in_range(rec.date))
        .map(|rec| rec.amount)
        .sum();

    let counted_expenses: Money = records
        .iter()
        .filter(|rec| rec.is_expense() && rec.counts_toward_balance() && in_range(rec.date))
        .map(|rec| rec.amount)
        .sum();

    let paid_invoices: Money = payments
        .iter()
        .filter(|p| in_range(p.date))
        .map(|p| p.amount)
        .sum();

    let expense_total = counted_expenses + paid_invoices;

    MonthlyStats {
        income_total,
        expense_total,
        balance: income_total - expense_total,
    }
}

/// Most recent records, newest first
///
/// Incomes and expenses are merged into one feed and truncated to `limit`,
/// the way the Home screen lists the latest movements.
pub fn recent_activity(records: &[LedgerRecord], limit: usize) -> Vec<LedgerRecord> {
    let mut feed: Vec<LedgerRecord> = records.to_vec();
    feed.sort_by(|a, b| b.date.cmp(&a.date));
    feed.truncate(limit);
    feed
}
