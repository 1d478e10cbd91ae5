//! Cross-cutting middleware stages.

pub mod allow;

pub use allow::{allow_all_methods, ALLOWED_METHODS};
