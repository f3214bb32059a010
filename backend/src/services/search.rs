//! Advanced multi-criteria search.

use serde::{Deserialize, Serialize};

use super::query::{
    filter_by_any_tag, filter_by_keywords, filter_by_location, filter_by_min_rating,
    filter_by_price_range,
};
use crate::models::Designer;

/// Inclusive price window. Missing bounds default to 0 and unbounded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl PriceRange {
    fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Search request body.
///
/// Empty strings, empty lists, a zero rating and an empty price range all
/// count as "not provided" and leave the result set untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub price_range: Option<PriceRange>,
}

impl SearchCriteria {
    /// Run the search over `designers`, preserving their order.
    pub fn apply<'a>(&self, designers: &[&'a Designer]) -> Vec<&'a Designer> {
        let mut out = designers.to_vec();

        if let Some(keywords) = self.keywords.as_deref().filter(|k| !k.is_empty()) {
            out = filter_by_keywords(&out, keywords);
        }
        if let Some(tags) = self.tags.as_deref().filter(|t| !t.is_empty()) {
            out = filter_by_any_tag(&out, tags);
        }
        if let Some(location) = self.location.as_deref().filter(|l| !l.is_empty()) {
            out = filter_by_location(&out, location);
        }
        if let Some(min_rating) = self.min_rating.filter(|r| *r != 0.0) {
            out = filter_by_min_rating(&out, min_rating);
        }
        if let Some(range) = self.price_range.as_ref().filter(|r| !r.is_empty()) {
            out = filter_by_price_range(&out, range.min, range.max);
        }

        out
    }
}
