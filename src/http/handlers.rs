//! Request introspection handlers.
//!
//! Every handler here accepts any method; rejecting is never its job. A
//! failed body read is the only client-visible error (400). Encoding
//! failures after the status is chosen degrade to an empty body instead of
//! surfacing a second error, since the status line is already committed by
//! then.

use axum::body::Body;
use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::http::echo::{self, RequestSnapshot};

/// Client-facing message for a failed body read.
const BODY_READ_MSG: &str = "Error reading request body";

/// Full echo: the whole request reflected back as one JSON snapshot.
pub async fn echo(request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = match echo::read_body(body).await {
        Ok(bytes) => bytes,
        Err(err) => {
            error!(error = %err, path = %parts.uri.path(), "Rejecting request");
            return (StatusCode::BAD_REQUEST, BODY_READ_MSG).into_response();
        }
    };
    json_response(&RequestSnapshot::capture(&parts, bytes))
}

/// Headers-only view.
pub async fn headers(request: Request) -> Response {
    json_response(&echo::header_multimap(request.headers()))
}

/// Queries-only view.
pub async fn queries(request: Request) -> Response {
    json_response(&echo::query_multimap(request.uri()))
}

/// Raw body passthrough: byte-exact echo, no content type of its own.
pub async fn body(request: Request) -> Response {
    let bytes = match echo::read_body(request.into_body()).await {
        Ok(bytes) => bytes,
        Err(err) => {
            error!(error = %err, "Rejecting request");
            return (StatusCode::BAD_REQUEST, BODY_READ_MSG).into_response();
        }
    };
    Response::new(Body::from(bytes))
}

/// Encode a JSON response, degrading softly on encoder failure.
fn json_response<T: Serialize>(value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(buf) => ([(header::CONTENT_TYPE, "application/json")], buf).into_response(),
        Err(err) => {
            error!(error = %err, "Failed to encode response body");
            ([(header::CONTENT_TYPE, "application/json")], Vec::new()).into_response()
        }
    }
}
