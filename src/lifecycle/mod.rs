//! Server lifecycle subsystem.
//!
//! # Data Flow
//! ```text
//! start:
//!     parse bind address → bind listener → spawn serve task
//!
//! await_stop:
//!     select(listener result | cancellation)
//!         result first → Failed (abnormal termination)
//!         cancel first → ShuttingDown → drain ≤ grace window → Stopped
//!
//! signals:
//!     SIGINT/SIGTERM → Shutdown::trigger
//! ```
//!
//! # Design Decisions
//! - Bind failures fail fast; nothing is retried
//! - The serve task's terminal result crosses a single-slot channel
//! - Grace-window expiry abandons in-flight connections but still counts
//!   as a clean stop

pub mod controller;
pub mod shutdown;
pub mod signals;

pub use controller::{await_stop, start, ServerError, ServerHandle, ServerState, GRACE_WINDOW};
pub use shutdown::Shutdown;
