//! Observability subsystem.
//!
//! Structured logging only: per-request events come from the HTTP trace
//! layer, lifecycle events from the controller.

pub mod logging;
