//! Diagnostic HTTP echo server.
//!
//! Echoes whatever request a client sends back as structured JSON, and can
//! synthesize a response with an arbitrary status code on demand. Useful for
//! exercising HTTP clients, proxies, and webhook integrations.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────────┐
//!                    │                  ECHOSCOPE                    │
//!                    │                                               │
//!   Client Request   │  ┌───────────┐   ┌─────────┐   ┌───────────┐ │
//!   ─────────────────┼─▶│  allow    │──▶│ routing │──▶│ /headers  │ │
//!                    │  │  layer    │   │         │   │ /body     │ │
//!                    │  └───────────┘   │         │   │ /queries  │ │
//!                    │  Allow header    │         │   ├───────────┤ │
//!                    │  on every        │         │──▶│ /NNN      │ │
//!                    │  response        │         │   │ status    │ │
//!                    │                  │         │   ├───────────┤ │
//!   Client Response  │                  │         │──▶│ echo      │ │
//!   ◀────────────────┼──────────────────┴─────────┘   │ snapshot  │ │
//!                    │                                └───────────┘ │
//!                    │  ┌─────────────────────────────────────────┐ │
//!                    │  │          Cross-Cutting Concerns         │ │
//!                    │  │  ┌────────┐ ┌───────────┐ ┌───────────┐ │ │
//!                    │  │  │ config │ │ lifecycle │ │ observa-  │ │ │
//!                    │  │  │ (env)  │ │ start/stop│ │ bility    │ │ │
//!                    │  │  └────────┘ └───────────┘ └───────────┘ │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    └───────────────────────────────────────────────┘
//! ```
//!
//! The lifecycle controller binds the listener, runs the serve task in the
//! background, and waits at a single point for either the listener's
//! terminal result or an external stop signal; a stop starts a graceful
//! drain bounded by a fixed grace window.

// Core subsystems
pub mod config;
pub mod http;
pub mod routing;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::{ServerError, Shutdown};
