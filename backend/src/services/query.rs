//! Filter and sort primitives over catalog views.
//!
//! Every function takes a slice of designer references and returns a new
//! vector; inputs are never mutated and relative order is always preserved
//! by filters.

use serde::Serialize;
use std::cmp::Ordering;

use crate::models::Designer;

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Case-insensitive substring match on name, title, description or any tag.
pub fn filter_by_text<'a>(designers: &[&'a Designer], query: &str) -> Vec<&'a Designer> {
    let needle = query.to_lowercase();
    designers
        .iter()
        .copied()
        .filter(|d| {
            contains_ci(&d.name, &needle)
                || contains_ci(&d.title, &needle)
                || contains_ci(&d.description, &needle)
                || d.tags.iter().any(|t| contains_ci(t, &needle))
        })
        .collect()
}

/// Like [`filter_by_text`] but without looking at tags.
pub fn filter_by_keywords<'a>(designers: &[&'a Designer], keywords: &str) -> Vec<&'a Designer> {
    let needle = keywords.to_lowercase();
    designers
        .iter()
        .copied()
        .filter(|d| {
            contains_ci(&d.name, &needle)
                || contains_ci(&d.title, &needle)
                || contains_ci(&d.description, &needle)
        })
        .collect()
}

pub fn filter_by_location<'a>(designers: &[&'a Designer], fragment: &str) -> Vec<&'a Designer> {
    let needle = fragment.to_lowercase();
    designers
        .iter()
        .copied()
        .filter(|d| contains_ci(&d.location, &needle))
        .collect()
}

/// Keeps designers where `tag` is a case-insensitive substring of any of
/// their tags.
pub fn filter_by_tag<'a>(designers: &[&'a Designer], tag: &str) -> Vec<&'a Designer> {
    let needle = tag.to_lowercase();
    designers
        .iter()
        .copied()
        .filter(|d| d.tags.iter().any(|t| contains_ci(t, &needle)))
        .collect()
}

/// Keeps designers carrying at least one of `tags` (exact, case-insensitive).
pub fn filter_by_any_tag<'a>(designers: &[&'a Designer], tags: &[String]) -> Vec<&'a Designer> {
    let wanted: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();
    designers
        .iter()
        .copied()
        .filter(|d| {
            d.tags
                .iter()
                .map(|t| t.to_lowercase())
                .any(|t| wanted.contains(&t))
        })
        .collect()
}

pub fn filter_by_min_rating<'a>(designers: &[&'a Designer], threshold: f64) -> Vec<&'a Designer> {
    designers
        .iter()
        .copied()
        .filter(|d| d.rating >= threshold)
        .collect()
}

pub fn filter_by_max_price<'a>(designers: &[&'a Designer], ceiling: u64) -> Vec<&'a Designer> {
    designers
        .iter()
        .copied()
        .filter(|d| d.price_amount() <= ceiling)
        .collect()
}

/// Inclusive price bounds; `None` means 0 and unbounded respectively.
pub fn filter_by_price_range<'a>(
    designers: &[&'a Designer],
    min: Option<f64>,
    max: Option<f64>,
) -> Vec<&'a Designer> {
    let min = min.unwrap_or(0.0);
    let max = max.unwrap_or(f64::INFINITY);
    designers
        .iter()
        .copied()
        .filter(|d| {
            let amount = d.price_amount() as f64;
            min <= amount && amount <= max
        })
        .collect()
}

/// Field used to order designer listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Rating,
    Price,
    Projects,
}

impl SortField {
    /// Parse a field name; anything unrecognised sorts by name.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw {
            "rating" => Self::Rating,
            "price" => Self::Price,
            "projects" => Self::Projects,
            _ => Self::Name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Only `"desc"` (any case) selects descending order.
    pub fn parse_lenient(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

fn compare(field: SortField, a: &Designer, b: &Designer) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Rating => a.rating.total_cmp(&b.rating),
        SortField::Price => a.price_amount().cmp(&b.price_amount()),
        SortField::Projects => a.projects.cmp(&b.projects),
    }
}

/// Stable sort. Descending order still keeps ties in their input order.
pub fn sort_by(
    mut designers: Vec<&Designer>,
    field: SortField,
    order: SortOrder,
) -> Vec<&Designer> {
    match order {
        SortOrder::Asc => designers.sort_by(|a, b| compare(field, a, b)),
        SortOrder::Desc => designers.sort_by(|a, b| compare(field, b, a)),
    }
    designers
}

/// Listing filters after query-string normalisation.
///
/// `None` disables a filter. Text values are matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DesignerFilters {
    pub search: Option<String>,
    pub location: Option<String>,
    pub tag: Option<String>,
    pub min_rating: Option<f64>,
    pub max_price: Option<u64>,
}

impl DesignerFilters {
    /// Apply all enabled filters in a fixed order: text, location, tag,
    /// rating, price.
    pub fn apply<'a>(&self, designers: &[&'a Designer]) -> Vec<&'a Designer> {
        let mut out = designers.to_vec();
        if let Some(ref search) = self.search {
            out = filter_by_text(&out, search);
        }
        if let Some(ref location) = self.location {
            out = filter_by_location(&out, location);
        }
        if let Some(ref tag) = self.tag {
            out = filter_by_tag(&out, tag);
        }
        if let Some(min_rating) = self.min_rating {
            out = filter_by_min_rating(&out, min_rating);
        }
        if let Some(max_price) = self.max_price {
            out = filter_by_max_price(&out, max_price);
        }
        out
    }
}
