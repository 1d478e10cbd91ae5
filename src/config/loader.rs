//! Configuration loading from the environment.
//!
//! # Responsibilities
//! - Read `PORT`, `READ_TIMEOUT`, `WRITE_TIMEOUT`
//! - Fall back to defaults for missing or unparseable values
//!
//! # Design Decisions
//! - Loading never fails; a bad port is reported later as a bind error
//! - Unparseable integers are logged and replaced by the default

use crate::config::schema::{
    ServerConfig, DEFAULT_PORT, DEFAULT_READ_TIMEOUT_SECS, DEFAULT_WRITE_TIMEOUT_SECS,
};

impl ServerConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_PORT.to_string());

        Self {
            port,
            read_timeout_secs: lookup_secs(&lookup, "READ_TIMEOUT", DEFAULT_READ_TIMEOUT_SECS),
            write_timeout_secs: lookup_secs(&lookup, "WRITE_TIMEOUT", DEFAULT_WRITE_TIMEOUT_SECS),
        }
    }
}

fn lookup_secs(lookup: impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    match lookup(key) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, default, "Ignoring unparseable timeout");
            default
        }),
    }
}
