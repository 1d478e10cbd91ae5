//! Request snapshot capture.
//!
//! # Responsibilities
//! - Read the full request body into memory
//! - Capture method, path, query multi-map, header multi-map, body
//! - Preserve repetition and order of query and header values
//!
//! # Design Decisions
//! - Query parsing goes through `form_urlencoded`; extractor-style parsing
//!   would collapse repeated keys
//! - Header names keep the transport's lowercase normalization, nothing more
//! - No body size cap of its own

use std::collections::HashMap;

use axum::body::{Body, Bytes};
use axum::http::request::Parts;
use axum::http::{HeaderMap, Uri};
use serde::Serialize;
use thiserror::Error;

/// The request body stream failed while being consumed.
#[derive(Debug, Error)]
#[error("failed to read request body: {0}")]
pub struct BodyReadError(#[from] axum::Error);

/// Structured description of a received request.
///
/// Built fresh per request and discarded once the response is written.
#[derive(Debug, Serialize)]
pub struct RequestSnapshot {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, Vec<String>>,
    pub headers: HashMap<String, Vec<String>>,
    pub body: String,
}

impl RequestSnapshot {
    /// Capture a snapshot from request parts and the fully-read body.
    pub fn capture(parts: &Parts, body: Bytes) -> Self {
        Self {
            method: parts.method.to_string(),
            path: parts.uri.path().to_string(),
            query: query_multimap(&parts.uri),
            headers: header_multimap(&parts.headers),
            body: String::from_utf8_lossy(&body).into_owned(),
        }
    }
}

/// Read the entire request body into memory.
pub async fn read_body(body: Body) -> Result<Bytes, BodyReadError> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(BodyReadError::from)
}

/// Query string as a multi-map: repeated keys keep every value, in order.
pub fn query_multimap(uri: &Uri) -> HashMap<String, Vec<String>> {
    let raw = uri.query().unwrap_or_default();
    let mut map: HashMap<String, Vec<String>> = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        map.entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    map
}

/// Headers as a multi-map: repeated headers keep every value, in order.
pub fn header_multimap(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
    let mut map: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        map.entry(name.as_str().to_owned())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    map
}
