use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Price;

/// Designer identifier (catalog primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct DesignerId(pub u32);

impl DesignerId {
    pub fn new(value: u32) -> Self {
        DesignerId(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DesignerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contact details published with a designer profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
}

/// An interior designer in the catalog.
///
/// Field names follow the public JSON contract, hence the camel-cased
/// `priceUnit` next to snake-cased `created_at` and `is_active`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Designer {
    pub id: DesignerId,
    pub name: String,
    pub title: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub rating: f64,
    pub projects: u32,
    pub clients: u32,
    pub price: Price,
    #[serde(rename = "priceUnit")]
    pub price_unit: String,
    pub avatar: String,
    #[serde(default)]
    pub portfolio: Vec<String>,
    pub contact: Contact,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl Designer {
    /// Numeric price amount.
    pub fn price_amount(&self) -> u64 {
        self.price.amount()
    }

    /// Last comma-separated segment of the location, trimmed.
    ///
    /// `"Mumbai, India"` yields `"India"`; a location without commas is
    /// returned whole.
    pub fn region(&self) -> &str {
        self.location
            .rsplit(',')
            .next()
            .unwrap_or(self.location.as_str())
            .trim()
    }
}
