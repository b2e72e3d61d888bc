//! Ledger record model
//!
//! A single ledger entry: either income ("entrada") or expense ("gasto").
//! Expenses carry budgeting tags, payment method, and credit-card
//! installment metadata; the two variants share the common id, owner,
//! description, amount, and date shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CardId, InstallmentGroupId, RecordId, UserId};
use super::money::Money;

/// Budgeting tag: recurring fixed cost or variable spending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Fixed,
    #[default]
    Variable,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "Fixed"),
            Self::Variable => write!(f, "Variable"),
        }
    }
}

/// Expense category
///
/// A fixed enumerated set; entries the backend does not recognize fall back
/// to `Other` at the ingest boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ExpenseCategory {
    Housing,
    Food,
    Transport,
    Health,
    Leisure,
    Education,
    Subscriptions,
    Gift,
    PersonalCare,
    Loan,
    #[default]
    Other,
}

impl ExpenseCategory {
    /// All categories, in display order
    pub const ALL: [ExpenseCategory; 11] = [
        Self::Housing,
        Self::Food,
        Self::Transport,
        Self::Health,
        Self::Leisure,
        Self::Education,
        Self::Subscriptions,
        Self::Gift,
        Self::PersonalCare,
        Self::Loan,
        Self::Other,
    ];
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Housing => "Housing",
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Health => "Health",
            Self::Leisure => "Leisure",
            Self::Education => "Education",
            Self::Subscriptions => "Subscriptions",
            Self::Gift => "Gift",
            Self::PersonalCare => "Personal care",
            Self::Loan => "Loan",
            Self::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// 50/30/20 budget bucket an expense maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetBucket {
    #[default]
    Essential,
    Leisure,
    Reserve,
}

impl fmt::Display for BudgetBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Essential => write!(f, "Essential"),
            Self::Leisure => write!(f, "Leisure"),
            Self::Reserve => write!(f, "Reserve"),
        }
    }
}

/// How an expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Debit,
    Credit,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debit => write!(f, "Debit"),
            Self::Credit => write!(f, "Credit"),
        }
    }
}

/// Expense-only fields of a ledger record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDetails {
    /// Fixed or variable cost
    pub classification: Classification,

    /// Spending category
    pub category: ExpenseCategory,

    /// 50/30/20 bucket
    pub bucket: BudgetBucket,

    /// Debit or credit
    pub payment_method: PaymentMethod,

    /// The card charged; required for credit purchases
    pub card_id: Option<CardId>,

    /// 1-based position within an installment group (1 when standalone)
    pub installment_index: u32,

    /// Total installments in the group (1 when standalone)
    pub installment_total: u32,

    /// Shared id linking all rows of one multi-installment purchase
    pub installment_group_id: Option<InstallmentGroupId>,

    /// Whether this expense enters the running balance
    ///
    /// True for debit expenses. Credit purchases stay out of the balance
    /// until their invoice is paid, to avoid double counting.
    pub counts_toward_balance: bool,
}

impl ExpenseDetails {
    /// Details for a standalone (non-installment) expense
    pub fn standalone(
        classification: Classification,
        category: ExpenseCategory,
        bucket: BudgetBucket,
        payment_method: PaymentMethod,
        card_id: Option<CardId>,
    ) -> Self {
        Self {
            classification,
            category,
            bucket,
            payment_method,
            card_id,
            installment_index: 1,
            installment_total: 1,
            installment_group_id: None,
            counts_toward_balance: payment_method != PaymentMethod::Credit,
        }
    }

    /// Check if this expense is part of a multi-installment purchase
    pub fn is_installment(&self) -> bool {
        self.installment_total > 1
    }
}

/// Income or expense variant of a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RecordKind {
    Income,
    Expense(ExpenseDetails),
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Unique identifier, assigned at creation
    pub id: RecordId,

    /// The owning user; records are never shared across users
    pub owner_id: UserId,

    /// Free-text category/label, non-empty
    pub description: String,

    /// Positive monetary value
    pub amount: Money,

    /// Calendar date used for month/year bucketing
    pub date: NaiveDate,

    /// Income or expense payload
    pub kind: RecordKind,
}

impl LedgerRecord {
    /// Create an income record
    pub fn income(
        owner_id: UserId,
        description: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: RecordId::new(),
            owner_id,
            description: description.into(),
            amount,
            date,
            kind: RecordKind::Income,
        }
    }

    /// Create an expense record
    pub fn expense(
        owner_id: UserId,
        description: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        details: ExpenseDetails,
    ) -> Self {
        Self {
            id: RecordId::new(),
            owner_id,
            description: description.into(),
            amount,
            date,
            kind: RecordKind::Expense(details),
        }
    }

    /// Check if this is an income record
    pub fn is_income(&self) -> bool {
        matches!(self.kind, RecordKind::Income)
    }

    /// Check if this is an expense record
    pub fn is_expense(&self) -> bool {
        matches!(self.kind, RecordKind::Expense(_))
    }

    /// The expense payload, if any
    pub fn expense_details(&self) -> Option<&ExpenseDetails> {
        match &self.kind {
            RecordKind::Expense(details) => Some(details),
            RecordKind::Income => None,
        }
    }

    /// Check if this is a credit-card expense
    pub fn is_credit_expense(&self) -> bool {
        self.expense_details()
            .map(|d| d.payment_method == PaymentMethod::Credit)
            .unwrap_or(false)
    }

    /// The card charged, when this is a credit expense
    pub fn card_id(&self) -> Option<CardId> {
        self.expense_details().and_then(|d| d.card_id)
    }

    /// Whether this record enters the running balance
    ///
    /// Income always does; expenses defer to their stored flag.
    pub fn counts_toward_balance(&self) -> bool {
        match &self.kind {
            RecordKind::Income => true,
            RecordKind::Expense(details) => details.counts_toward_balance,
        }
    }

    /// Validate the record's invariants
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.description.trim().is_empty() {
            return Err(RecordValidationError::EmptyDescription);
        }
        if !self.amount.is_positive() {
            return Err(RecordValidationError::NonPositiveAmount(self.amount));
        }
        if let RecordKind::Expense(details) = &self.kind {
            if details.payment_method == PaymentMethod::Credit && details.card_id.is_none() {
                return Err(RecordValidationError::CreditWithoutCard);
            }
            if details.installment_index < 1
                || details.installment_total < 1
                || details.installment_index > details.installment_total
            {
                return Err(RecordValidationError::BadInstallmentPosition {
                    index: details.installment_index,
                    total: details.installment_total,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for LedgerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_income() { '+' } else { '-' };
        write!(
            f,
            "{} {} {}{}",
            self.date.format("%Y-%m-%d"),
            self.description,
            sign,
            self.amount
        )
    }
}

/// Validation errors for ledger records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
    CreditWithoutCard,
    BadInstallmentPosition { index: u32, total: u32 },
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description must not be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be positive, got {}", amount)
            }
            Self::CreditWithoutCard => {
                write!(f, "Credit expenses require a card reference")
            }
            Self::BadInstallmentPosition { index, total } => {
                write!(f, "Invalid installment position {}/{}", index, total)
            }
        }
    }
}

impl std::error::Error for RecordValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> UserId {
        UserId::new()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn debit_details() -> ExpenseDetails {
        ExpenseDetails::standalone(
            Classification::Variable,
            ExpenseCategory::Food,
            BudgetBucket::Essential,
            PaymentMethod::Debit,
            None,
        )
    }

    #[test]
    fn test_income_record() {
        let rec = LedgerRecord::income(owner(), "Salário", Money::from_cents(500_000), date(2024, 1, 5));
        assert!(rec.is_income());
        assert!(!rec.is_expense());
        assert!(rec.counts_toward_balance());
        assert!(rec.expense_details().is_none());
        assert!(rec.validate().is_ok());
    }

    #[test]
    fn test_debit_expense_counts_toward_balance() {
        let rec = LedgerRecord::expense(
            owner(),
            "Mercado",
            Money::from_cents(12_000),
            date(2024, 1, 10),
            debit_details(),
        );
        assert!(rec.is_expense());
        assert!(rec.counts_toward_balance());
        assert!(!rec.is_credit_expense());
        assert!(rec.validate().is_ok());
    }

    #[test]
    fn test_credit_expense_excluded_from_balance() {
        let card = CardId::new();
        let details = ExpenseDetails::standalone(
            Classification::Variable,
            ExpenseCategory::Leisure,
            BudgetBucket::Leisure,
            PaymentMethod::Credit,
            Some(card),
        );
        let rec = LedgerRecord::expense(
            owner(),
            "Cinema",
            Money::from_cents(4_500),
            date(2024, 1, 12),
            details,
        );
        assert!(rec.is_credit_expense());
        assert!(!rec.counts_toward_balance());
        assert_eq!(rec.card_id(), Some(card));
    }

    #[test]
    fn test_validate_empty_description() {
        let rec = LedgerRecord::income(owner(), "   ", Money::from_cents(100), date(2024, 1, 1));
        assert_eq!(rec.validate(), Err(RecordValidationError::EmptyDescription));
    }

    #[test]
    fn test_validate_non_positive_amount() {
        let rec = LedgerRecord::income(owner(), "Bônus", Money::zero(), date(2024, 1, 1));
        assert!(matches!(
            rec.validate(),
            Err(RecordValidationError::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_validate_credit_without_card() {
        let mut details = debit_details();
        details.payment_method = PaymentMethod::Credit;
        details.counts_toward_balance = false;
        let rec = LedgerRecord::expense(
            owner(),
            "Assinatura",
            Money::from_cents(2_990),
            date(2024, 1, 1),
            details,
        );
        assert_eq!(rec.validate(), Err(RecordValidationError::CreditWithoutCard));
    }

    #[test]
    fn test_validate_installment_position() {
        let mut details = debit_details();
        details.installment_index = 3;
        details.installment_total = 2;
        let rec = LedgerRecord::expense(
            owner(),
            "Notebook",
            Money::from_cents(100_000),
            date(2024, 1, 1),
            details,
        );
        assert!(matches!(
            rec.validate(),
            Err(RecordValidationError::BadInstallmentPosition { .. })
        ));
    }

    #[test]
    fn test_category_default_is_other() {
        assert_eq!(ExpenseCategory::default(), ExpenseCategory::Other);
    }

    #[test]
    fn test_display() {
        let rec = LedgerRecord::expense(
            owner(),
            "Mercado",
            Money::from_cents(5_000),
            date(2025, 1, 15),
            debit_details(),
        );
        assert_eq!(format!("{}", rec), "2025-01-15 Mercado -R$ 50,00");
    }

    #[test]
    fn test_serialization_round_trip() {
        let rec = LedgerRecord::expense(
            owner(),
            "Mercado",
            Money::from_cents(5_000),
            date(2025, 1, 15),
            debit_details(),
        );
        let json = serde_json::to_string(&rec).unwrap();
        let deserialized: LedgerRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, deserialized);
    }
}
