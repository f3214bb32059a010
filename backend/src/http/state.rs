//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::{Catalog, ShortlistStore};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Immutable designer catalog
    pub catalog: Arc<Catalog>,
    /// Per-user shortlists, validated against `catalog`
    pub shortlists: ShortlistStore,
}

impl AppState {
    /// Create application state around a loaded catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let shortlists = ShortlistStore::new(Arc::clone(&catalog));
        Self {
            catalog,
            shortlists,
        }
    }
}
