//! In-memory stores backing the designer API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Query Engine (services/) - filters, sorting, stats      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Stores (this module)                                   │
//! │  - Catalog: immutable, validated at startup             │
//! │  - ShortlistStore: per-user sets behind a RwLock        │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod error;
pub mod shortlist;

pub use catalog::Catalog;
pub use error::{ErrorContext, StoreError, StoreResult};
pub use shortlist::ShortlistStore;
