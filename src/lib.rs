#![forbid(unsafe_code)]
//! LinuxMain generator for XCTest packages
//!
//! XCTest on platforms without the Objective-C runtime cannot discover test methods by itself. This
//! crate scans a package's test sources for `func test...()` declarations and writes
//! `Tests/LinuxMain.swift`, which registers every discovered test explicitly.
//!
//! - `frontend`: lexical test-method/guard patterns and test file discovery
//! - `backend`: aggregation into a manifest and Swift emission
//! - `pipeline`: the in-memory generation run and the final write
//! - `cli`: the `discover-tests` command
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: Compiling the built-in regular expressions cannot fail; those use
//!   `.expect("INVARIANT: reason")`.

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod frontend;
pub mod pipeline;
pub mod version;

pub use backend::{LinuxMainEmitter, RegistrationManifest, emit_linuxmain};
pub use config::GeneratorConfig;
pub use error::{GenerateError, GenerateResult};
pub use frontend::{FileDiscovery, GlobDiscovery, TestDiscovery, TestEntry};
pub use pipeline::{Generated, Generator, WriteOutcome};
