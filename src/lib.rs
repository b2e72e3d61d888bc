//! carteira - personal-finance ledger core
//!
//! This library implements the ledger and aggregation engine behind a
//! personal-finance application: incomes ("entradas"), expenses ("gastos"),
//! credit cards, installment purchases, card statements, and the dashboard
//! numbers derived from them. Persistence, authentication, and real-time
//! notification belong to the hosting application; this crate only operates
//! on in-memory snapshots it is handed.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (records, cards, payments, money, months)
//! - `ingest`: Normalization of raw backend rows into the typed model
//! - `services`: Entry-creation logic (installment expansion)
//! - `reports`: Pure aggregation (monthly matrix, statements, balances)
//! - `export`: CSV rendering of report output
//!
//! # Example
//!
//! ```rust
//! use carteira::models::{
//!     BudgetBucket, Classification, ExpenseCategory, Money, PaymentMethod, UserId,
//! };
//! use carteira::services::{expand, ExpenseInput};
//!
//! let input = ExpenseInput {
//!     owner_id: UserId::new(),
//!     description: "Notebook".to_string(),
//!     amount: Money::from_reais(3_000),
//!     date: chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
//!     classification: Classification::Variable,
//!     category: ExpenseCategory::Education,
//!     bucket: BudgetBucket::Essential,
//!     payment_method: PaymentMethod::Credit,
//!     card_id: Some(carteira::models::CardId::new()),
//!     installment_count: 10,
//! };
//! let installments = expand(&input).unwrap();
//! assert_eq!(installments.len(), 10);
//! ```

pub mod error;
pub mod export;
pub mod ingest;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{LedgerError, LedgerResult};
