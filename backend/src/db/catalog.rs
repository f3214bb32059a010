//! Process-lifetime designer catalog.
//!
//! The catalog is decoded and validated exactly once. After that it is only
//! ever shared behind an `Arc` and read.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::error::{ErrorContext, StoreError, StoreResult};
use crate::models::{Designer, DesignerId};

/// Seed data bundled with the binary.
const SEED_DATA: &str = include_str!("../../data/designers.json");

const RATING_RANGE: std::ops::RangeInclusive<f64> = 0.0..=5.0;

/// Immutable collection of designers, in load order.
#[derive(Debug, Clone)]
pub struct Catalog {
    designers: Vec<Designer>,
}

impl Catalog {
    /// Build a catalog from already-decoded designers.
    ///
    /// # Errors
    /// Returns a validation error when an id is zero or appears twice.
    pub fn from_designers(designers: Vec<Designer>) -> StoreResult<Self> {
        let mut seen = HashSet::with_capacity(designers.len());
        for designer in &designers {
            let ctx = || {
                ErrorContext::new("validate_catalog")
                    .with_entity("designer")
                    .with_entity_id(designer.id)
            };
            if designer.id.value() == 0 {
                return Err(StoreError::validation_with_context(
                    "Designer id must be positive",
                    ctx(),
                ));
            }
            if !seen.insert(designer.id) {
                return Err(StoreError::validation_with_context(
                    "Duplicate designer id",
                    ctx(),
                ));
            }
            if !RATING_RANGE.contains(&designer.rating) {
                warn!(
                    id = %designer.id,
                    rating = designer.rating,
                    "designer rating outside the 0-5 range"
                );
            }
        }
        Ok(Self { designers })
    }

    /// Decode and validate a JSON array of designers.
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        let de = &mut serde_json::Deserializer::from_str(json);
        let designers: Vec<Designer> = serde_path_to_error::deserialize(de).map_err(|e| {
            StoreError::load_with_context(
                e.inner().to_string(),
                ErrorContext::new("decode_catalog").with_details(format!("path={}", e.path())),
            )
        })?;
        Self::from_designers(designers)
    }

    /// Load the catalog from a JSON file on disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading catalog file");
        let content = fs::read_to_string(path).map_err(|e| {
            StoreError::load_with_context(
                format!("Failed to read catalog file: {}", e),
                ErrorContext::new("load_catalog").with_details(path.display().to_string()),
            )
        })?;
        Self::from_json_str(&content).map_err(|e| e.with_operation("load_catalog"))
    }

    /// The bundled sample catalog.
    pub fn seed() -> StoreResult<Self> {
        Self::from_json_str(SEED_DATA)
    }

    pub fn len(&self) -> usize {
        self.designers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.designers.is_empty()
    }

    /// Every designer, active or not, in catalog order.
    pub fn all(&self) -> &[Designer] {
        &self.designers
    }

    /// Active designers in catalog order.
    pub fn active(&self) -> Vec<&Designer> {
        self.designers.iter().filter(|d| d.is_active).collect()
    }

    /// Look up a designer regardless of its active flag.
    pub fn get(&self, id: DesignerId) -> Option<&Designer> {
        self.designers.iter().find(|d| d.id == id)
    }

    pub fn get_active(&self, id: DesignerId) -> Option<&Designer> {
        self.get(id).filter(|d| d.is_active)
    }

    pub fn contains(&self, id: DesignerId) -> bool {
        self.get(id).is_some()
    }
}
