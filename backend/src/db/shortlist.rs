//! Per-user shortlists.
//!
//! This module provides a small in-memory store mapping a free-form user id
//! to the set of designer ids that user saved. Writers are serialized by a
//! `parking_lot::RwLock`; readers share it.

use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use super::catalog::Catalog;
use super::error::{ErrorContext, StoreError, StoreResult};
use crate::models::{Designer, DesignerId};

/// In-memory shortlist store.
#[derive(Clone)]
pub struct ShortlistStore {
    catalog: Arc<Catalog>,
    entries: Arc<RwLock<HashMap<String, HashSet<DesignerId>>>>,
}

impl ShortlistStore {
    /// Create an empty store validating ids against `catalog`.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add a designer to a user's shortlist and return the new list size.
    ///
    /// The designer only has to exist; inactive designers can still be
    /// saved. Nothing is recorded when the id is unknown.
    pub fn add(&self, user_id: &str, designer_id: DesignerId) -> StoreResult<usize> {
        if !self.catalog.contains(designer_id) {
            return Err(StoreError::not_found_with_context(
                "Designer not found",
                ErrorContext::new("shortlist_add")
                    .with_entity("designer")
                    .with_entity_id(designer_id),
            ));
        }

        let mut entries = self.entries.write();
        let set = entries.entry(user_id.to_string()).or_default();
        let inserted = set.insert(designer_id);
        debug!(user_id, designer_id = %designer_id, inserted, "shortlist add");
        Ok(set.len())
    }

    /// Remove a designer from a user's shortlist and return the remaining size.
    ///
    /// Unknown users and ids are a no-op; no entry is created.
    pub fn remove(&self, user_id: &str, designer_id: DesignerId) -> usize {
        let mut entries = self.entries.write();
        match entries.get_mut(user_id) {
            Some(set) => {
                let removed = set.remove(&designer_id);
                debug!(user_id, designer_id = %designer_id, removed, "shortlist remove");
                set.len()
            }
            None => 0,
        }
    }

    /// Active shortlisted designers for `user_id`, in catalog order.
    pub fn list_for_user(&self, user_id: &str) -> Vec<&Designer> {
        let ids = match self.entries.read().get(user_id) {
            Some(set) => set.clone(),
            None => return Vec::new(),
        };

        self.catalog
            .all()
            .iter()
            .filter(|d| d.is_active && ids.contains(&d.id))
            .collect()
    }

    /// Total number of saved designers across every user.
    pub fn count_all(&self) -> usize {
        self.entries.read().values().map(HashSet::len).sum()
    }

    /// Whether `user_id` has a shortlist entry at all.
    pub fn contains_user(&self, user_id: &str) -> bool {
        self.entries.read().contains_key(user_id)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
