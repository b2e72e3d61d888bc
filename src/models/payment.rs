//! Invoice payment model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CardId, PaymentId, UserId};
use super::money::Money;
use super::month::YearMonth;

/// A payment settling (part of) a credit-card invoice
///
/// Kept separate from expenses: the payment is what enters the running
/// balance and what frees up the card's available limit, while the credit
/// purchases themselves stay out of both until paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicePayment {
    /// Unique identifier
    pub id: PaymentId,

    /// The owning user
    pub owner_id: UserId,

    /// The card whose invoice is being paid
    pub card_id: CardId,

    /// Amount paid
    pub amount: Money,

    /// Date the payment was made
    pub date: NaiveDate,

    /// The statement period being paid
    pub reference_month: YearMonth,
}

impl InvoicePayment {
    /// Create an invoice payment, validating the amount
    pub fn new(
        owner_id: UserId,
        card_id: CardId,
        amount: Money,
        date: NaiveDate,
        reference_month: YearMonth,
    ) -> Result<Self, PaymentValidationError> {
        if !amount.is_positive() {
            return Err(PaymentValidationError::NonPositiveAmount(amount));
        }
        Ok(Self {
            id: PaymentId::new(),
            owner_id,
            card_id,
            amount,
            date,
            reference_month,
        })
    }
}

impl fmt::Display for InvoicePayment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} invoice {} {}",
            self.date.format("%Y-%m-%d"),
            self.reference_month,
            self.amount
        )
    }
}

/// Validation errors for invoice payments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentValidationError {
    NonPositiveAmount(Money),
}

impl fmt::Display for PaymentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Payment amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for PaymentValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_payment() {
        let payment = InvoicePayment::new(
            UserId::new(),
            CardId::new(),
            Money::from_cents(20_000),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            YearMonth::new(2024, 1).unwrap(),
        )
        .unwrap();
        assert_eq!(payment.amount, Money::from_cents(20_000));
        assert_eq!(payment.reference_month, YearMonth::new(2024, 1).unwrap());
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        let err = InvoicePayment::new(
            UserId::new(),
            CardId::new(),
            Money::zero(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            YearMonth::new(2024, 1).unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, PaymentValidationError::NonPositiveAmount(_)));
    }

    #[test]
    fn test_serialization() {
        let payment = InvoicePayment::new(
            UserId::new(),
            CardId::new(),
            Money::from_cents(20_000),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            YearMonth::new(2024, 1).unwrap(),
        )
        .unwrap();
        let json = serde_json::to_string(&payment).unwrap();
        let deserialized: InvoicePayment = serde_json::from_str(&json).unwrap();
        assert_eq!(payment, deserialized);
    }
}
