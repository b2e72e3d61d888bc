//! Money type for representing currency amounts
//!
//! Internally stores amounts in centavos (i64) to avoid floating-point
//! precision issues. Provides safe arithmetic operations, pt-BR parsing and
//! formatting, and the even-split operation used by installment expansion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount in BRL, stored as centavos (hundredths of a real)
///
/// Using i64 centavos avoids floating-point precision issues. The ledger is
/// single-currency; no currency code is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from centavos
    ///
    /// # Examples
    /// ```
    /// use carteira::models::Money;
    /// let amount = Money::from_cents(1050); // R$ 10,50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole reais
    pub const fn from_reais(reais: i64) -> Self {
        Self(reais * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in centavos
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole reais portion (truncated toward zero)
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Get the centavos portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Divide by a count, truncating toward zero
    ///
    /// Used for fixed-denominator averages; for installment amounts prefer
    /// [`Money::split_even`], which does not lose remainder centavos.
    pub const fn div(&self, divisor: i64) -> Self {
        Self(self.0 / divisor)
    }

    /// Split the amount into `parts` portions that sum back to the original
    ///
    /// Every portion receives the floor share; the remainder centavos are
    /// handed out one each to the earliest portions. For R$ 1,00 in 3 parts
    /// this yields 34, 33, 33 centavos.
    pub fn split_even(&self, parts: u32) -> Vec<Money> {
        assert!(parts > 0, "cannot split into zero parts");
        let parts = parts as i64;
        let base = self.0 / parts;
        let remainder = self.0 % parts;
        (0..parts)
            .map(|i| {
                if i < remainder.abs() {
                    Self(base + remainder.signum())
                } else {
                    Self(base)
                }
            })
            .collect()
    }

    /// Parse a money amount from a string
    ///
    /// Accepts pt-BR locale text ("1.234,56", "R$ 10,50", "-10,50") as well
    /// as plain decimal ("1234.56", "10") coming from numeric backend
    /// columns.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix("R$").unwrap_or(s).trim_start();
        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let cents = if s.contains(',') {
            // pt-BR format: '.' groups thousands, ',' separates centavos
            let normalized = s.replace('.', "");
            let parts: Vec<&str> = normalized.split(',').collect();
            if parts.len() != 2 {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }
            let reais: i64 = parts[0]
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;
            let cents = parse_cent_digits(parts[1])
                .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?;
            reais * 100 + cents
        } else if s.contains('.') {
            // Plain decimal format: "1234.56"
            let parts: Vec<&str> = s.split('.').collect();
            if parts.len() != 2 {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }
            let reais: i64 = parts[0]
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;
            let cents = parse_cent_digits(parts[1])
                .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?;
            reais * 100 + cents
        } else {
            // Integer format - whole reais
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format as a plain decimal string ("1234.56") for CSV and similar
    /// machine-readable outputs
    pub fn to_decimal_string(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.reais().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.reais(), self.cents_part())
        }
    }
}

/// Parse a fractional part of up to two digits into centavos
fn parse_cent_digits(digits: &str) -> Option<i64> {
    match digits.len() {
        0 => Some(0),
        1 => digits.parse::<i64>().ok().map(|c| c * 10),
        2 => digits.parse().ok(),
        _ => None,
    }
}

/// Group a digit string with '.' every three digits, pt-BR style
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(
                f,
                "-R$ {},{:02}",
                group_thousands(self.reais().abs()),
                self.cents_part()
            )
        } else {
            write!(
                f,
                "R$ {},{:02}",
                group_thousands(self.reais()),
                self.cents_part()
            )
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.reais(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_reais() {
        assert_eq!(Money::from_reais(10).cents(), 1000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "R$ 10,50");
        assert_eq!(format!("{}", Money::from_cents(0)), "R$ 0,00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-R$ 10,50");
        assert_eq!(format!("{}", Money::from_cents(5)), "R$ 0,05");
        assert_eq!(
            format!("{}", Money::from_cents(123_456_789)),
            "R$ 1.234.567,89"
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse_pt_br() {
        assert_eq!(Money::parse("10,50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("R$ 10,50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("1.234,56").unwrap().cents(), 123_456);
        assert_eq!(Money::parse("-10,50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10,5").unwrap().cents(), 1050);
    }

    #[test]
    fn test_parse_plain_decimal() {
        assert_eq!(Money::parse("1234.56").unwrap().cents(), 123_456);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse("1,234,56").is_err());
    }

    #[test]
    fn test_split_even_exact() {
        let parts = Money::from_cents(900).split_even(3);
        assert_eq!(parts, vec![Money::from_cents(300); 3]);
    }

    #[test]
    fn test_split_even_remainder_goes_first() {
        let parts = Money::from_cents(100).split_even(3);
        assert_eq!(
            parts,
            vec![
                Money::from_cents(34),
                Money::from_cents(33),
                Money::from_cents(33)
            ]
        );
        assert_eq!(parts.into_iter().sum::<Money>(), Money::from_cents(100));
    }

    #[test]
    fn test_split_even_sums_back() {
        for cents in [1, 99, 1000, 99_999, 123_457] {
            for parts in [1u32, 2, 3, 7, 12, 24] {
                let total: Money = Money::from_cents(cents).split_even(parts).into_iter().sum();
                assert_eq!(total.cents(), cents);
            }
        }
    }

    #[test]
    fn test_to_decimal_string() {
        assert_eq!(Money::from_cents(123_456).to_decimal_string(), "1234.56");
        assert_eq!(Money::from_cents(-5).to_decimal_string(), "-0.05");
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
