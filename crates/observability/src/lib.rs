//! Logging setup shared by the office-visit binaries.

/// Tracing subscriber installation.
pub mod tracing;

pub use self::tracing::{LogFormat, init};
