//! Monthly matrix aggregation
//!
//! Builds the description-by-month table shown on the annual "Gastos" and
//! "Entradas" screens: one row per distinct description with a 12-wide value
//! array, a yearly total, and a fixed-denominator monthly average.

use std::collections::HashMap;

use chrono::Datelike;

use crate::models::{LedgerRecord, Money};

/// pt-BR month column labels, January first
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// One row of the monthly matrix
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixRow {
    /// The bucketing description (exact string, case-sensitive)
    pub description: String,
    /// Summed amounts per month, index 0 = January
    pub monthly: [Money; 12],
    /// Sum of the twelve monthly values
    pub total: Money,
    /// `total / 12`, always over twelve months regardless of activity
    pub average: Money,
}

/// Aggregate a year's records into matrix rows
///
/// Records are bucketed by exact description match; rows appear in
/// first-occurrence order. The caller supplies records already scoped to the
/// owner and to `year`; no further date filtering happens here, only month
/// bucketing off each record's date.
pub fn aggregate(records: &[LedgerRecord], year: i32) -> Vec<MatrixRow> {
    let _ = year; // scoping is the caller's contract; kept for call-site clarity

    let mut rows: Vec<MatrixRow> = Vec::new();
    let mut index_by_description: HashMap<String, usize> = HashMap::new();

    for record in records {
        let month = record.date.month0() as usize;
        let idx = *index_by_description
            .entry(record.description.clone())
            .or_insert_with(|| {
                rows.push(MatrixRow {
                    description: record.description.clone(),
                    monthly: [Money::zero(); 12],
                    total: Money::zero(),
                    average: Money::zero(),
                });
                rows.len() - 1
            });
        rows[idx].monthly[month] += record.amount;
    }

    for row in &mut rows {
        row.total = row.monthly.iter().copied().sum();
        row.average = row.total.div(12);
    }

    rows
}

/// Column totals across all rows, index 0 = January
///
/// Drives the seasonality bar chart.
pub fn monthly_totals(rows: &[MatrixRow]) -> [Money; 12] {
    let mut totals = [Money::zero(); 12];
    for row in rows {
        for (slot, value) in totals.iter_mut().zip(row.monthly.iter()) {
            *slot += *value;
        }
    }
    totals
}

/// Total for the whole year, or for a single month column when given
pub fn period_total(rows: &[MatrixRow], month: Option<usize>) -> Money {
    match month {
        Some(m) => rows.iter().map(|row| row.monthly[m]).sum(),
        None => rows.iter().map(|row| row.total).sum(),
    }
}

/// Distinct non-blank descriptions, sorted
///
/// Feeds the entry form's suggestion list.
pub fn distinct_descriptions(records: &[LedgerRecord]) -> Vec<String> {
    let mut descriptions: Vec<String> = records
        .iter()
        .map(|r| r.description.trim())
        .filter(|d| !d.is_empty())
        .map(|d| d.to_string())
        .collect();
    descriptions.sort();
    descriptions.dedup();
    descriptions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BudgetBucket, Classification, ExpenseCategory, ExpenseDetails, PaymentMethod, UserId,
    };
    use chrono::NaiveDate;

    fn expense(description: &str, cents: i64, year: i32, month: u32, day: u32) -> LedgerRecord {
        LedgerRecord::expense(
            UserId::new(),
            description,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            ExpenseDetails::standalone(
                Classification::Variable,
                ExpenseCategory::Food,
                BudgetBucket::Essential,
                PaymentMethod::Debit,
                None,
            ),
        )
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(aggregate(&[], 2024).is_empty());
    }

    #[test]
    fn test_buckets_by_description_and_month() {
        let records = vec![
            expense("Mercado", 10_000, 2024, 1, 5),
            expense("Mercado", 5_000, 2024, 1, 20),
            expense("Mercado", 8_000, 2024, 3, 10),
            expense("Aluguel", 120_000, 2024, 1, 1),
        ];
        let rows = aggregate(&records, 2024);
        assert_eq!(rows.len(), 2);

        let mercado = &rows[0];
        assert_eq!(mercado.description, "Mercado");
        assert_eq!(mercado.monthly[0], Money::from_cents(15_000));
        assert_eq!(mercado.monthly[1], Money::zero());
        assert_eq!(mercado.monthly[2], Money::from_cents(8_000));
        assert_eq!(mercado.total, Money::from_cents(23_000));

        let aluguel = &rows[1];
        assert_eq!(aluguel.monthly[0], Money::from_cents(120_000));
    }

    #[test]
    fn test_rows_keep_first_occurrence_order() {
        let records = vec![
            expense("Zebra", 100, 2024, 1, 1),
            expense("Abacate", 100, 2024, 1, 2),
            expense("Zebra", 100, 2024, 2, 1),
        ];
        let rows = aggregate(&records, 2024);
        assert_eq!(rows[0].description, "Zebra");
        assert_eq!(rows[1].description, "Abacate");
    }

    #[test]
    fn test_descriptions_are_case_sensitive() {
        let records = vec![
            expense("mercado", 100, 2024, 1, 1),
            expense("Mercado", 100, 2024, 1, 1),
        ];
        assert_eq!(aggregate(&records, 2024).len(), 2);
    }

    #[test]
    fn test_total_and_average_identity() {
        let records = vec![
            expense("Mercado", 10_000, 2024, 1, 5),
            expense("Mercado", 2_500, 2024, 6, 5),
        ];
        let rows = aggregate(&records, 2024);
        let row = &rows[0];

        let summed: Money = row.monthly.iter().copied().sum();
        assert_eq!(row.total, summed);
        assert_eq!(row.average, row.total.div(12));
        // always divides by 12, not by months with activity
        assert_eq!(row.average, Money::from_cents(1_041));
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let records = vec![
            expense("Mercado", 10_000, 2024, 1, 5),
            expense("Aluguel", 120_000, 2024, 2, 1),
        ];
        assert_eq!(aggregate(&records, 2024), aggregate(&records, 2024));
    }

    #[test]
    fn test_monthly_totals() {
        let records = vec![
            expense("Mercado", 10_000, 2024, 1, 5),
            expense("Aluguel", 120_000, 2024, 1, 1),
            expense("Mercado", 5_000, 2024, 2, 5),
        ];
        let totals = monthly_totals(&aggregate(&records, 2024));
        assert_eq!(totals[0], Money::from_cents(130_000));
        assert_eq!(totals[1], Money::from_cents(5_000));
        assert_eq!(totals[2], Money::zero());
    }

    #[test]
    fn test_period_total() {
        let records = vec![
            expense("Mercado", 10_000, 2024, 1, 5),
            expense("Mercado", 5_000, 2024, 2, 5),
        ];
        let rows = aggregate(&records, 2024);
        assert_eq!(period_total(&rows, None), Money::from_cents(15_000));
        assert_eq!(period_total(&rows, Some(0)), Money::from_cents(10_000));
        assert_eq!(period_total(&rows, Some(5)), Money::zero());
    }

    #[test]
    fn test_distinct_descriptions() {
        let records = vec![
            expense("Mercado", 100, 2024, 1, 1),
            expense("Aluguel", 100, 2024, 1, 1),
            expense("Mercado", 100, 2024, 2, 1),
            expense("   ", 100, 2024, 2, 1),
        ];
        assert_eq!(
            distinct_descriptions(&records),
            vec!["Aluguel".to_string(), "Mercado".to_string()]
        );
    }
}
