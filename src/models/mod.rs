//! Core data models for the carteira ledger
//!
//! This module contains all the data structures that represent the
//! personal-finance domain: ledger records (incomes and expenses), credit
//! cards, invoice payments, money, and calendar months.

pub mod card;
pub mod ids;
pub mod money;
pub mod month;
pub mod payment;
pub mod record;

pub use card::{Card, CardValidationError};
pub use ids::{CardId, InstallmentGroupId, PaymentId, RecordId, UserId};
pub use money::{Money, MoneyParseError};
pub use month::{add_months_clamped, MonthParseError, YearMonth};
pub use payment::{InvoicePayment, PaymentValidationError};
pub use record::{
    BudgetBucket, Classification, ExpenseCategory, ExpenseDetails, LedgerRecord, PaymentMethod,
    RecordKind, RecordValidationError,
};
