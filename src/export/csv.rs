//! CSV export functionality
//!
//! Renders the monthly matrix and card statements as CSV for the export
//! collaborators (spreadsheet download, backup). Amounts are written as
//! plain decimals so spreadsheets parse them as numbers.

use std::io::Write;

use crate::error::LedgerResult;
use crate::models::Card;
use crate::reports::matrix::{MatrixRow, MONTH_LABELS};
use crate::reports::statement::Statement;

/// Export matrix rows to CSV
///
/// One line per description with the twelve month columns, total, and
/// average, mirroring the annual table.
pub fn export_matrix_csv<W: Write>(rows: &[MatrixRow], writer: W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["Descricao".to_string()];
    header.extend(MONTH_LABELS.iter().map(|label| label.to_string()));
    header.push("Total".to_string());
    header.push("Media".to_string());
    csv_writer.write_record(&header)?;

    for row in rows {
        let mut record = vec![row.description.clone()];
        record.extend(row.monthly.iter().map(|value| value.to_decimal_string()));
        record.push(row.total.to_decimal_string());
        record.push(row.average.to_decimal_string());
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush().map_err(crate::error::LedgerError::from)?;
    Ok(())
}

/// Export one card statement to CSV
///
/// One line per purchase in the cycle, newest last, with a trailing total
/// line.
pub fn export_statement_csv<W: Write>(
    statement: &Statement,
    card: &Card,
    writer: W,
) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["Data", "Cartao", "Descricao", "Parcela", "Categoria", "Valor"])?;

    for record in &statement.records {
        let details = record.expense_details();
        let installment = details
            .map(|d| format!("{}/{}", d.installment_index, d.installment_total))
            .unwrap_or_else(|| "1/1".to_string());
        let category = details
            .map(|d| d.category.to_string())
            .unwrap_or_default();

        csv_writer.write_record([
            record.date.format("%Y-%m-%d").to_string(),
            card.name.clone(),
            record.description.clone(),
            installment,
            category,
            record.amount.to_decimal_string(),
        ])?;
    }

    csv_writer.write_record([
        statement.reference.to_string(),
        card.name.clone(),
        "TOTAL".to_string(),
        String::new(),
        String::new(),
        statement.total.to_decimal_string(),
    ])?;

    csv_writer.flush().map_err(crate::error::LedgerError::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BudgetBucket, Classification, ExpenseCategory, ExpenseDetails, LedgerRecord, Money,
        PaymentMethod, UserId, YearMonth,
    };
    use crate::reports::{aggregate, statement_for};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_export_matrix_csv() {
        let records = vec![
            LedgerRecord::expense(
                UserId::new(),
                "Mercado",
                Money::from_cents(123_456),
                date(2024, 1, 5),
                ExpenseDetails::standalone(
                    Classification::Variable,
                    ExpenseCategory::Food,
                    BudgetBucket::Essential,
                    PaymentMethod::Debit,
                    None,
                ),
            ),
        ];
        let rows = aggregate(&records, 2024);

        let mut output = Vec::new();
        export_matrix_csv(&rows, &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert!(csv_string.starts_with("Descricao,Jan,Fev"));
        assert!(csv_string.contains("Mercado,1234.56,0.00"));
        assert!(csv_string.contains(",1234.56,102.88\n"));
    }

    #[test]
    fn test_export_matrix_csv_empty() {
        let mut output = Vec::new();
        export_matrix_csv(&[], &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert_eq!(csv_string.lines().count(), 1); // header only
    }

    #[test]
    fn test_export_statement_csv() {
        let card = Card::new(UserId::new(), "Nubank", Money::from_reais(5_000), 10, 5).unwrap();
        let expenses = vec![LedgerRecord::expense(
            UserId::new(),
            "Cinema (1/2)",
            Money::from_cents(2_500),
            date(2024, 2, 10),
            ExpenseDetails {
                classification: Classification::Variable,
                category: ExpenseCategory::Leisure,
                bucket: BudgetBucket::Leisure,
                payment_method: PaymentMethod::Credit,
                card_id: Some(card.id),
                installment_index: 1,
                installment_total: 2,
                installment_group_id: None,
                counts_toward_balance: false,
            },
        )];
        let statement = statement_for(&card, YearMonth::new(2024, 3).unwrap(), &expenses);

        let mut output = Vec::new();
        export_statement_csv(&statement, &card, &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert!(csv_string.contains("Data,Cartao,Descricao"));
        assert!(csv_string.contains("2024-02-10,Nubank,Cinema (1/2),1/2,Leisure,25.00"));
        assert!(csv_string.contains("2024-03,Nubank,TOTAL,,,25.00"));
    }
}
