//! HTTP handlers for the REST API.
//!
//! Each handler parses its input, delegates to the query engine or the
//! shortlist store and wraps the result in an [`Envelope`].

use axum::body::Bytes;
use axum::extract::{
    rejection::{BytesRejection, PathRejection, QueryRejection},
    Path, Query, State,
};
use tracing::debug;

use super::dto::{
    designer_id_from_number, DataResponse, DesignerListQuery, DesignerListResponse,
    DesignerSearchResponse, Envelope, ServiceInfo, ShortlistAction, ShortlistActionResponse,
    ShortlistRequest, ShortlistResponse, StatsData,
};
use super::error::AppError;
use super::extract::{decode_value, ValidatedJson};
use super::state::AppState;
use crate::models::{Designer, DesignerId};
use crate::services::{self, SearchCriteria};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Envelope<T>, AppError>;

const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";
const DESIGNER_NOT_FOUND: &str = "Designer not found";

fn owned(designers: Vec<&Designer>) -> Vec<Designer> {
    designers.into_iter().cloned().collect()
}

// =============================================================================
// Service Info
// =============================================================================

/// GET /
pub async fn service_info() -> Envelope<ServiceInfo> {
    let endpoints = [
        "GET /api/designers",
        "GET /api/designers/<id>",
        "POST /api/designers/search",
        "POST /api/shortlist",
        "GET /api/shortlist/<user_id>",
        "GET /api/stats",
        "GET /api/tags",
        "GET /api/locations",
    ];

    Envelope::ok(ServiceInfo {
        message: "EmptyCup Interior Designers API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "active".to_string(),
        endpoints: endpoints.iter().map(|e| e.to_string()).collect(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

// =============================================================================
// Designers
// =============================================================================

/// GET /api/designers
///
/// List active designers with optional filters and sorting.
pub async fn list_designers(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> HandlerResult<DesignerListResponse> {
    let Query(pairs) = pairs.map_err(|e| AppError::Validation(e.body_text()))?;
    let query = DesignerListQuery::from_pairs(pairs);

    let filtered = query.filters().apply(&state.catalog.active());
    let sorted = services::sort_by(filtered, query.sort_field(), query.order());
    debug!(count = sorted.len(), "listed designers");

    Ok(Envelope::ok(DesignerListResponse {
        count: sorted.len(),
        data: owned(sorted),
        filters_applied: query.applied(),
    }))
}

/// GET /api/designers/{id}
pub async fn get_designer(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> HandlerResult<DataResponse<Designer>> {
    // Non-numeric ids never matched a designer route.
    let Path(id) = id.map_err(|_| AppError::NotFound(ENDPOINT_NOT_FOUND.to_string()))?;

    let designer = state
        .catalog
        .get_active(DesignerId::new(id))
        .ok_or_else(|| AppError::NotFound(DESIGNER_NOT_FOUND.to_string()))?;

    Ok(Envelope::ok(DataResponse {
        data: designer.clone(),
    }))
}

/// POST /api/designers/search
///
/// Advanced search. The body must be a non-empty JSON object; anything else,
/// including text that is not JSON at all, counts as no criteria.
pub async fn search_designers(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> HandlerResult<DesignerSearchResponse> {
    let bytes = body?;
    let body = serde_json::from_slice::<serde_json::Value>(&bytes)
        .ok()
        .filter(|v| v.as_object().is_some_and(|o| !o.is_empty()))
        .ok_or_else(|| AppError::Validation("No search criteria provided".to_string()))?;

    let criteria: SearchCriteria = decode_value(body.clone())?;

    let results = criteria.apply(&state.catalog.active());
    debug!(count = results.len(), "search completed");

    Ok(Envelope::ok(DesignerSearchResponse {
        count: results.len(),
        data: owned(results),
        search_criteria: body,
    }))
}

// =============================================================================
// Shortlist
// =============================================================================

/// POST /api/shortlist
///
/// Add or remove a designer from a user's shortlist.
pub async fn manage_shortlist(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ShortlistRequest>,
) -> HandlerResult<ShortlistActionResponse> {
    let raw_id = request
        .designer_id
        .as_ref()
        .ok_or_else(|| AppError::Validation("Designer ID is required".to_string()))?;

    let designer_id = designer_id_from_number(raw_id)
        .filter(|id| state.catalog.contains(*id))
        .ok_or_else(|| AppError::NotFound(DESIGNER_NOT_FOUND.to_string()))?;

    let action: ShortlistAction = request.action().parse().map_err(AppError::Validation)?;
    let user_id = request.user_id();

    let (shortlisted_count, message) = match action {
        ShortlistAction::Add => (
            state.shortlists.add(user_id, designer_id)?,
            "Designer added to shortlist",
        ),
        ShortlistAction::Remove => (
            state.shortlists.remove(user_id, designer_id),
            "Designer removed from shortlist",
        ),
    };

    Ok(Envelope::ok(ShortlistActionResponse {
        message: message.to_string(),
        designer_id,
        user_id: user_id.to_string(),
        shortlisted_count,
    }))
}

/// GET /api/shortlist/{user_id}
pub async fn get_shortlist(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> HandlerResult<ShortlistResponse> {
    let designers = state.shortlists.list_for_user(&user_id);

    Ok(Envelope::ok(ShortlistResponse {
        count: designers.len(),
        data: owned(designers),
        user_id,
    }))
}

// =============================================================================
// Aggregates
// =============================================================================

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> HandlerResult<DataResponse<StatsData>> {
    let catalog = services::aggregate_stats(&state.catalog.active());

    Ok(Envelope::ok(DataResponse {
        data: StatsData {
            catalog,
            total_shortlists: state.shortlists.count_all(),
        },
    }))
}

/// GET /api/tags
pub async fn list_tags(State(state): State<AppState>) -> HandlerResult<DataResponse<Vec<String>>> {
    Ok(Envelope::ok(DataResponse {
        data: services::distinct_tags(&state.catalog.active()),
    }))
}

/// GET /api/locations
pub async fn list_locations(
    State(state): State<AppState>,
) -> HandlerResult<DataResponse<Vec<String>>> {
    Ok(Envelope::ok(DataResponse {
        data: services::distinct_locations(&state.catalog.active()),
    }))
}

// =============================================================================
// Fallbacks
// =============================================================================

/// Unmatched route.
pub async fn not_found() -> AppError {
    AppError::NotFound(ENDPOINT_NOT_FOUND.to_string())
}

/// Route matched but the verb did not.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
