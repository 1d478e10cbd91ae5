//! Request dispatch policy.
//!
//! # Responsibilities
//! - Fixed-path rules for the introspection views
//! - Catch-all classification: status simulation before echo
//! - Accept every method on every route
//!
//! # Design Decisions
//! - Exact-path matches take precedence over the catch-all
//! - Paths are case-sensitive, no trailing-slash normalization
//! - Classification is a structural check, no regex

pub mod router;

pub use router::build_router;
