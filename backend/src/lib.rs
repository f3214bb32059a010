//! # Designer Catalog Backend
//!
//! REST backend for browsing a fixed catalog of interior designers and
//! keeping per-user shortlists.
//!
//! ## Features
//!
//! - **Catalog**: designers loaded once at startup from bundled seed data or
//!   a JSON file, with prices parsed into typed amounts
//! - **Query Engine**: filtering, stable sorting, advanced search and
//!   aggregate statistics
//! - **Shortlists**: per-user saved designers behind a lock
//! - **HTTP API**: axum endpoints with a uniform `{success, data, error}`
//!   envelope
//!
//! ## Architecture
//!
//! - [`models`]: designer and price types
//! - [`db`]: catalog and shortlist stores
//! - [`services`]: pure query, search and statistics functions
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`config`]: server settings from defaults, TOML and environment

pub mod config;
pub mod db;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
