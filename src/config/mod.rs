//! Configuration subsystem.
//!
//! Environment variables are the only configuration source. Values are read
//! once at startup and are immutable afterwards; nothing in here can fail.

pub mod loader;
pub mod schema;

pub use schema::ServerConfig;
