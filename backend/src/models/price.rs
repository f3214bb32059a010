//! Typed designer price.
//!
//! Prices travel on the wire as currency-prefixed, comma-grouped strings such
//! as `"₹2,500"`. They are parsed once when the catalog is loaded and kept as
//! an integer amount, so filters and sorts never re-parse text. The digit
//! grouping of the source string (`2,500,000` or lakh-style `25,00,000`) is
//! remembered so the price is written back the way it was read.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error raised when a formatted price string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceParseError {
    #[error("price string is empty")]
    Empty,
    #[error("price '{0}' has no numeric amount")]
    MissingAmount(String),
    #[error("price '{0}' contains an invalid amount")]
    InvalidAmount(String),
}

/// How the digits of an amount are separated for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DigitGrouping {
    /// Groups of three: `2,500,000`
    #[default]
    Thousands,
    /// Last three digits, then groups of two: `25,00,000`
    Indian,
}

impl DigitGrouping {
    /// Infer the grouping from comma-separated digits. Any two-digit group
    /// between the leading and trailing ones marks lakh-style grouping.
    fn detect(digits: &str) -> Self {
        let groups: Vec<&str> = digits.split(',').collect();
        let interior = groups.len().saturating_sub(1);
        if groups[1..interior.max(1)].iter().any(|g| g.len() == 2) {
            Self::Indian
        } else {
            Self::Thousands
        }
    }

    fn format(self, amount: u64) -> String {
        let digits = amount.to_string();
        match self {
            Self::Thousands => group_from_right(&digits, 3, 3),
            Self::Indian => group_from_right(&digits, 3, 2),
        }
    }
}

/// A price expressed as a currency symbol and a whole amount.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Price {
    currency: String,
    amount: u64,
    grouping: DigitGrouping,
}

impl Price {
    pub fn new(currency: impl Into<String>, amount: u64) -> Self {
        Self {
            currency: currency.into(),
            amount,
            grouping: DigitGrouping::Thousands,
        }
    }

    pub fn with_grouping(mut self, grouping: DigitGrouping) -> Self {
        self.grouping = grouping;
        self
    }

    pub fn grouping(&self) -> DigitGrouping {
        self.grouping
    }

    /// Whole amount with currency and separators stripped.
    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Parse a display string like `"₹2,500"`.
    ///
    /// Everything before the first ASCII digit is taken as the currency
    /// prefix; the remainder may only contain digits and `,` separators.
    pub fn parse(raw: &str) -> Result<Self, PriceParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PriceParseError::Empty);
        }

        let split = trimmed
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| PriceParseError::MissingAmount(raw.to_string()))?;
        let (currency, digits) = trimmed.split_at(split);

        if !digits.chars().all(|c| c.is_ascii_digit() || c == ',') {
            return Err(PriceParseError::InvalidAmount(raw.to_string()));
        }

        let amount = digits
            .replace(',', "")
            .parse::<u64>()
            .map_err(|_| PriceParseError::InvalidAmount(raw.to_string()))?;

        Ok(Self::new(currency.trim(), amount).with_grouping(DigitGrouping::detect(digits)))
    }
}

/// Insert `,` separators: the rightmost group holds `first` digits and every
/// group to its left holds `rest`.
fn group_from_right(digits: &str, first: usize, rest: usize) -> String {
    if digits.len() <= first {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - first);
    let mut groups = vec![tail];
    let mut remaining = head;
    while remaining.len() > rest {
        let (left, right) = remaining.split_at(remaining.len() - rest);
        groups.push(right);
        remaining = left;
    }
    groups.push(remaining);
    groups.reverse();
    groups.join(",")
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency, self.grouping.format(self.amount))
    }
}

impl FromStr for Price {
    type Err = PriceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Price::parse(s)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Price::parse(&raw).map_err(de::Error::custom)
    }
}
