//! Status-code simulation.
//!
//! Paths of the exact form `/NNN`, with NNN three decimal digits in
//! 200..=699, synthesize a response carrying that status code instead of
//! being echoed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Reason phrase for codes without a canonical one (e.g. 699).
pub const UNKNOWN_STATUS: &str = "Unknown Status Code";

const STATUS_MIN: u16 = 200;
const STATUS_MAX: u16 = 699;

/// Classify a path as a status-simulation request.
///
/// Returns the code for exactly one leading slash followed by exactly
/// three ASCII digits with a value in 200..=699. Anything else, including
/// `/99`, `/1234`, and `/abc`, is `None` and falls through to the echo
/// handler.
pub fn parse_status_path(path: &str) -> Option<u16> {
    let digits = path.strip_prefix('/')?;
    if digits.len() != 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let code: u16 = digits.parse().ok()?;
    (STATUS_MIN..=STATUS_MAX).contains(&code).then_some(code)
}

/// Synthesize the response for a simulated status code.
///
/// The body is the canonical reason phrase, or [`UNKNOWN_STATUS`] when the
/// code has none.
pub fn simulate(code: u16) -> Response {
    // parse_status_path only yields 200..=699, all representable
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let phrase = status.canonical_reason().unwrap_or(UNKNOWN_STATUS);
    (status, phrase).into_response()
}
