//! Business logic layer
//!
//! Pure entry-creation logic that runs before anything is persisted by the
//! caller's storage layer.

pub mod installments;

pub use installments::{expand, ExpenseInput};
