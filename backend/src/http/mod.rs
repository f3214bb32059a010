//! HTTP server module.
//!
//! An axum router exposing the catalog, the query engine and the shortlist
//! store as a JSON API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                              │
//! │  - Query/body parsing and validation                     │
//! │  - Envelope shaping, error mapping                       │
//! │  - CORS, compression, tracing, panic capture             │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Query Engine (services/)                                │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Stores (db/)                                            │
//! │  - Catalog / ShortlistStore                              │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{AppError, ApiError};
pub use router::create_router;
pub use state::AppState;
