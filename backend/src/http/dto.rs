//! Data Transfer Objects for the HTTP API.
//!
//! Every successful response is an [`Envelope`]: `"success": true` plus the
//! flattened fields of an endpoint-specific payload.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::models::{Designer, DesignerId};
use crate::services::{CatalogStats, DesignerFilters, SortField, SortOrder};

/// Uniform success wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Payload carrying only `data`.
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// `GET /` payload.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub status: String,
    pub endpoints: Vec<String>,
    pub timestamp: String,
}

/// Query parameters for the designer listing.
///
/// Everything arrives as text; numeric values that fail to parse are
/// ignored rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesignerListQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub min_rating: Option<String>,
    #[serde(default)]
    pub max_price: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: Option<String>,
}

fn lowered_non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::to_lowercase)
        .filter(|v| !v.is_empty())
}

impl DesignerListQuery {
    /// Build from raw query pairs. The first value of a repeated key wins and
    /// unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "search" => &mut query.search,
                "location" => &mut query.location,
                "tag" => &mut query.tag,
                "min_rating" => &mut query.min_rating,
                "max_price" => &mut query.max_price,
                "sort_by" => &mut query.sort_by,
                "sort_order" => &mut query.sort_order,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    pub fn min_rating(&self) -> Option<f64> {
        self.min_rating.as_deref().and_then(|v| v.trim().parse().ok())
    }

    pub fn max_price(&self) -> Option<u64> {
        self.max_price.as_deref().and_then(|v| v.trim().parse().ok())
    }

    pub fn sort_by(&self) -> &str {
        self.sort_by.as_deref().unwrap_or("name")
    }

    pub fn sort_order(&self) -> &str {
        self.sort_order.as_deref().unwrap_or("asc")
    }

    pub fn sort_field(&self) -> SortField {
        SortField::parse_lenient(self.sort_by())
    }

    pub fn order(&self) -> SortOrder {
        SortOrder::parse_lenient(self.sort_order())
    }

    /// Filters to run. Zero rating or price thresholds count as unset.
    pub fn filters(&self) -> DesignerFilters {
        DesignerFilters {
            search: lowered_non_empty(&self.search),
            location: lowered_non_empty(&self.location),
            tag: lowered_non_empty(&self.tag),
            min_rating: self.min_rating().filter(|r| *r != 0.0),
            max_price: self.max_price().filter(|p| *p != 0),
        }
    }

    /// Echo of the parameters as understood by the server.
    pub fn applied(&self) -> FiltersApplied {
        FiltersApplied {
            search: lowered_non_empty(&self.search),
            location: lowered_non_empty(&self.location),
            tag: lowered_non_empty(&self.tag),
            min_rating: self.min_rating(),
            max_price: self.max_price(),
            sort_by: self.sort_by().to_string(),
            sort_order: self.sort_order().to_string(),
        }
    }
}

/// `filters_applied` block of the listing response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiltersApplied {
    pub search: Option<String>,
    pub location: Option<String>,
    pub tag: Option<String>,
    pub min_rating: Option<f64>,
    pub max_price: Option<u64>,
    pub sort_by: String,
    pub sort_order: String,
}

/// `GET /api/designers` payload.
#[derive(Debug, Clone, Serialize)]
pub struct DesignerListResponse {
    pub data: Vec<Designer>,
    pub count: usize,
    pub filters_applied: FiltersApplied,
}

/// `POST /api/designers/search` payload.
#[derive(Debug, Clone, Serialize)]
pub struct DesignerSearchResponse {
    pub data: Vec<Designer>,
    pub count: usize,
    /// The request body, echoed verbatim
    pub search_criteria: serde_json::Value,
}

/// Request body for `POST /api/shortlist`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShortlistRequest {
    /// Required; any JSON number so out-of-range or fractional ids read as
    /// "not found"
    #[serde(default)]
    pub designer_id: Option<serde_json::Number>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

pub const DEFAULT_USER_ID: &str = "default_user";

/// Shortlist mutation requested by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortlistAction {
    Add,
    Remove,
}

impl std::str::FromStr for ShortlistAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            _ => Err("Invalid action. Use 'add' or 'remove'".to_string()),
        }
    }
}

impl ShortlistRequest {
    pub fn action(&self) -> &str {
        self.action.as_deref().unwrap_or("add")
    }

    pub fn user_id(&self) -> &str {
        self.user_id.as_deref().unwrap_or(DEFAULT_USER_ID)
    }
}

/// Catalog id for a JSON number. Integral floats such as `1.0` count;
/// negative, fractional and out-of-range values do not.
pub fn designer_id_from_number(raw: &serde_json::Number) -> Option<DesignerId> {
    let value = match raw.as_u64() {
        Some(n) => u32::try_from(n).ok()?,
        None => {
            let f = raw.as_f64()?;
            if f.fract() != 0.0 || f < 0.0 || f > f64::from(u32::MAX) {
                return None;
            }
            f as u32
        }
    };
    Some(DesignerId::new(value))
}

/// `POST /api/shortlist` payload.
#[derive(Debug, Clone, Serialize)]
pub struct ShortlistActionResponse {
    pub message: String,
    pub designer_id: DesignerId,
    pub user_id: String,
    pub shortlisted_count: usize,
}

/// `GET /api/shortlist/{user_id}` payload.
#[derive(Debug, Clone, Serialize)]
pub struct ShortlistResponse {
    pub data: Vec<Designer>,
    pub count: usize,
    pub user_id: String,
}

/// `GET /api/stats` data block.
#[derive(Debug, Clone, Serialize)]
pub struct StatsData {
    #[serde(flatten)]
    pub catalog: CatalogStats,
    pub total_shortlists: usize,
}
