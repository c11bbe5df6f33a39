//! LinuxMain backend
//!
//! Turns discovery results into the generated entry point.
//!
//! The pipeline is:
//! 1. `FileDiscovery` list from the frontend → `RegistrationManifest` (filter, duplicate check)
//! 2. `RegistrationManifest` → `LinuxMainEmitter` → Swift source text
//!
//! ## Module Organization
//!
//! - `manifest.rs` - Aggregation of per-file discoveries
//! - `emitter.rs` - Swift source emission

pub mod emitter;
pub mod manifest;

pub use emitter::{LinuxMainEmitter, emit_linuxmain, list_identifier};
pub use manifest::RegistrationManifest;
