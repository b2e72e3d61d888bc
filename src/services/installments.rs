//! Installment expander
//!
//! Turns one user-entered purchase into the ledger rows that get persisted.
//! A credit purchase in N installments becomes N rows: proportioned amounts,
//! due dates shifted month by month, a shared group id, and a "(i/N)" suffix
//! on the description. Everything else becomes a single row.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    add_months_clamped, BudgetBucket, CardId, Classification, ExpenseCategory, ExpenseDetails,
    InstallmentGroupId, LedgerRecord, Money, PaymentMethod, UserId,
};

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct ExpenseInput {
    pub owner_id: UserId,
    pub description: String,
    /// Total purchase value (not the per-installment value)
    pub amount: Money,
    /// Date of the purchase; installments after the first shift forward from
    /// here one month at a time
    pub date: NaiveDate,
    pub classification: Classification,
    pub category: ExpenseCategory,
    pub bucket: BudgetBucket,
    pub payment_method: PaymentMethod,
    /// Required when `payment_method` is credit
    pub card_id: Option<CardId>,
    /// Number of installments; 1 for a plain purchase
    pub installment_count: u32,
}

impl ExpenseInput {
    fn validate(&self) -> LedgerResult<()> {
        if self.description.trim().is_empty() {
            return Err(LedgerError::invalid_input("description must not be empty"));
        }
        if !self.amount.is_positive() {
            return Err(LedgerError::invalid_input(format!(
                "amount must be positive, got {}",
                self.amount
            )));
        }
        if self.installment_count < 1 {
            return Err(LedgerError::invalid_input(
                "installment count must be at least 1",
            ));
        }
        if self.payment_method == PaymentMethod::Credit && self.card_id.is_none() {
            return Err(LedgerError::invalid_input(
                "credit purchases require a card",
            ));
        }
        Ok(())
    }
}

/// Expand a purchase into the ledger records to persist
///
/// Non-credit purchases and single-installment credit purchases produce one
/// record. Credit purchases with `installment_count > 1` produce one record
/// per installment: the total is split so the parts sum back exactly (the
/// earliest installments absorb remainder centavos), each date advances one
/// calendar month with end-of-month clamping, and all rows share a freshly
/// generated group id. Credit rows never count toward the running balance;
/// the invoice payment does, later.
pub fn expand(input: &ExpenseInput) -> LedgerResult<Vec<LedgerRecord>> {
    input.validate()?;

    let description = input.description.trim();

    if input.payment_method != PaymentMethod::Credit || input.installment_count <= 1 {
        let details = ExpenseDetails::standalone(
            input.classification,
            input.category,
            input.bucket,
            input.payment_method,
            input.card_id,
        );
        return Ok(vec![LedgerRecord::expense(
            input.owner_id,
            description,
            input.amount,
            input.date,
            details,
        )]);
    }

    let group_id = InstallmentGroupId::new();
    let amounts = input.amount.split_even(input.installment_count);

    let records = amounts
        .into_iter()
        .enumerate()
        .map(|(i, amount)| {
            let details = ExpenseDetails {
                classification: input.classification,
                category: input.category,
                bucket: input.bucket,
                payment_method: PaymentMethod::Credit,
                card_id: input.card_id,
                installment_index: i as u32 + 1,
                installment_total: input.installment_count,
                installment_group_id: Some(group_id),
                counts_toward_balance: false,
            };
            LedgerRecord::expense(
                input.owner_id,
                format!("{} ({}/{})", description, i + 1, input.installment_count),
                amount,
                add_months_clamped(input.date, i as u32),
                details,
            )
        })
        .collect();

    Ok(records)
}
