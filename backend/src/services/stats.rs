//! Aggregate statistics and facet lists over a catalog view.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::models::Designer;

/// Price summary over a set of designers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceStatistics {
    pub min: u64,
    pub max: u64,
    pub avg: f64,
}

/// Catalog-wide aggregates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_designers: usize,
    /// Mean rating rounded to two decimals
    pub average_rating: f64,
    pub total_projects: u64,
    pub total_clients: u64,
    /// Counts keyed by the last comma-separated segment of the location
    pub location_distribution: BTreeMap<String, usize>,
    pub tag_distribution: BTreeMap<String, usize>,
    pub price_statistics: PriceStatistics,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn compute_price_stats(prices: &[u64]) -> PriceStatistics {
    if prices.is_empty() {
        return PriceStatistics::default();
    }

    let sum: u128 = prices.iter().map(|&p| u128::from(p)).sum();
    PriceStatistics {
        min: prices.iter().copied().min().unwrap_or(0),
        max: prices.iter().copied().max().unwrap_or(0),
        avg: sum as f64 / prices.len() as f64,
    }
}

/// Compute [`CatalogStats`] for `designers`. An empty input yields zeros and
/// empty maps.
pub fn aggregate_stats(designers: &[&Designer]) -> CatalogStats {
    let total_designers = designers.len();

    let average_rating = if total_designers > 0 {
        let sum: f64 = designers.iter().map(|d| d.rating).sum();
        round2(sum / total_designers as f64)
    } else {
        0.0
    };

    let total_projects = designers.iter().map(|d| u64::from(d.projects)).sum();
    let total_clients = designers.iter().map(|d| u64::from(d.clients)).sum();

    let mut location_distribution = BTreeMap::new();
    let mut tag_distribution = BTreeMap::new();
    for designer in designers {
        *location_distribution
            .entry(designer.region().to_string())
            .or_insert(0) += 1;
        for tag in &designer.tags {
            *tag_distribution.entry(tag.clone()).or_insert(0) += 1;
        }
    }

    let prices: Vec<u64> = designers.iter().map(|d| d.price_amount()).collect();

    CatalogStats {
        total_designers,
        average_rating,
        total_projects,
        total_clients,
        location_distribution,
        tag_distribution,
        price_statistics: compute_price_stats(&prices),
    }
}

/// Distinct tags, sorted.
pub fn distinct_tags(designers: &[&Designer]) -> Vec<String> {
    designers
        .iter()
        .flat_map(|d| d.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct full location strings, sorted.
pub fn distinct_locations(designers: &[&Designer]) -> Vec<String> {
    designers
        .iter()
        .map(|d| d.location.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
