//! Credit card model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CardId, UserId};
use super::money::Money;

/// A credit card with its limit and billing-cycle days
///
/// `statement_closing_day` and `due_day` are stored as raw 1-31 integers;
/// resolvers clamp them into short months (day 31 closes on Feb 28/29).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier
    pub id: CardId,

    /// The owning user
    pub owner_id: UserId,

    /// Display name ("Nubank", "Inter", ...)
    pub name: String,

    /// Total credit limit
    pub credit_limit: Money,

    /// Day of month the invoice is due (1-31)
    pub due_day: u32,

    /// Day of month the statement closes (1-31)
    pub statement_closing_day: u32,
}

impl Card {
    /// Create a card, validating its fields
    pub fn new(
        owner_id: UserId,
        name: impl Into<String>,
        credit_limit: Money,
        due_day: u32,
        statement_closing_day: u32,
    ) -> Result<Self, CardValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CardValidationError::EmptyName);
        }
        if !credit_limit.is_positive() {
            return Err(CardValidationError::NonPositiveLimit(credit_limit));
        }
        if !(1..=31).contains(&due_day) {
            return Err(CardValidationError::BadDayOfMonth(due_day));
        }
        if !(1..=31).contains(&statement_closing_day) {
            return Err(CardValidationError::BadDayOfMonth(statement_closing_day));
        }

        Ok(Self {
            id: CardId::new(),
            owner_id,
            name,
            credit_limit,
            due_day,
            statement_closing_day,
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (limit {})", self.name, self.credit_limit)
    }
}

/// Validation errors for cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardValidationError {
    EmptyName,
    NonPositiveLimit(Money),
    BadDayOfMonth(u32),
}

impl fmt::Display for CardValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Card name must not be empty"),
            Self::NonPositiveLimit(limit) => {
                write!(f, "Credit limit must be positive, got {}", limit)
            }
            Self::BadDayOfMonth(day) => write!(f, "Day of month must be 1-31, got {}", day),
        }
    }
}

impl std::error::Error for CardValidationError {}
