//! Request body extraction with envelope-shaped rejections.
//!
//! axum's `Json` extractor answers malformed bodies with plain-text
//! responses. [`ValidatedJson`] decodes the raw bytes itself so every
//! failure becomes an [`AppError::Validation`] naming the offending field.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use super::error::AppError;

/// JSON body decoded into `T`, ignoring the content type.
///
/// An empty body decodes like `{}` so that optional fields take their
/// defaults and handlers can report what is missing.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        parse_json_body(&bytes).map(ValidatedJson)
    }
}

/// Decode a JSON body, reporting the path of the first invalid field.
pub fn parse_json_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let raw: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        bytes
    };

    let value: serde_json::Value = serde_json::from_slice(raw)
        .map_err(|e| AppError::Validation(format!("Invalid JSON body: {}", e)))?;

    decode_value(value)
}

/// Decode an already-parsed JSON value into `T`.
pub fn decode_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, AppError> {
    serde_path_to_error::deserialize(value).map_err(|e| {
        let path = e.path().to_string();
        AppError::Validation(format!("Invalid value for '{}': {}", path, e.inner()))
    })
}
