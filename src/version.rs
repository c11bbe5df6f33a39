//! Generator version information.
//!
//! Exposes the crate version as a single constant so the CLI and any diagnostics agree on it.
//! The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The generator version string (for example, `0.1.0`).
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");
