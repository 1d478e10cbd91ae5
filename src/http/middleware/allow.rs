//! Method-permissive response decoration.
//!
//! Every response advertises acceptance of all common methods, regardless
//! of the method actually used or what the inner handler did with it. This
//! is advertisement only; no method is ever rejected here.

use axum::http::{header, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

/// Methods advertised on every response.
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, PATCH, DELETE, HEAD, OPTIONS";

/// Layer stamping the `Allow` header onto every response.
///
/// Composed outermost, so error responses and timeouts carry the header
/// too, and it is in place before any handler-specific byte reaches the
/// wire.
pub fn allow_all_methods() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(header::ALLOW, HeaderValue::from_static(ALLOWED_METHODS))
}
