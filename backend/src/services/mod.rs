//! Query engine: pure functions over catalog views.
//!
//! Nothing in here touches the stores directly. Handlers fetch a view (for
//! example [`crate::db::Catalog::active`]) and pass it through these
//! functions.

pub mod query;
pub mod search;
pub mod stats;

pub use query::{
    filter_by_any_tag, filter_by_keywords, filter_by_location, filter_by_max_price,
    filter_by_min_rating, filter_by_price_range, filter_by_tag, filter_by_text, sort_by,
    DesignerFilters, SortField, SortOrder,
};
pub use search::{PriceRange, SearchCriteria};
pub use stats::{aggregate_stats, distinct_locations, distinct_tags, CatalogStats, PriceStatistics};

#[cfg(test)]
#[path = "query_tests.rs"]
mod query_tests;
