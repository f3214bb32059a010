#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use designer_catalog::config::ServerConfig;
use designer_catalog::db::Catalog;
use designer_catalog::http::{create_router, AppState};
use designer_catalog::models::{Contact, Designer, DesignerId, Price};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Variables are restored on unwind, and access to the process environment
/// is serialized across tests in the same binary.
///
/// `changes` is a list of `(key, value)` pairs where `None` removes the key.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::apply(changes);
    f()
}

struct ScopedEnv {
    saved: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn apply(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let saved = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect();

        for (key, value) in changes {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }

        Self { saved }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..) {
            match value {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }
}

/// Router over the bundled seed catalog with default settings.
pub fn seed_app() -> (Router, AppState) {
    let catalog = Catalog::seed().expect("seed catalog loads");
    app_with(catalog)
}

/// Router over an arbitrary catalog.
pub fn app_with(catalog: Catalog) -> (Router, AppState) {
    let state = AppState::new(Arc::new(catalog));
    let router = create_router(state.clone(), &ServerConfig::default());
    (router, state)
}

pub fn designer(id: u32, name: &str, location: &str, price: u64, rating: f64) -> Designer {
    Designer {
        id: DesignerId::new(id),
        name: name.to_string(),
        title: "Interior Designer".to_string(),
        location: location.to_string(),
        description: format!("{name} designs homes"),
        tags: vec!["Modern".to_string()],
        rating,
        projects: 10,
        clients: 5,
        price: Price::new("₹", price),
        price_unit: "per sq ft".to_string(),
        avatar: String::new(),
        portfolio: Vec::new(),
        contact: Contact {
            email: format!("designer{id}@example.com"),
            phone: "+91 90000 00000".to_string(),
        },
        created_at: chrono::Utc::now(),
        is_active: true,
    }
}

/// Issue one request and decode the JSON body.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    send_request(app, request).await
}

/// Issue a prebuilt request and decode the JSON body.
pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

/// Ids of the designers in a `data` array, in response order.
pub fn data_ids(body: &Value) -> Vec<u64> {
    body["data"]
        .as_array()
        .map(|items| items.iter().filter_map(|d| d["id"].as_u64()).collect())
        .unwrap_or_default()
}
