//! Test source frontend
//!
//! This module contains the components that read XCTest sources:
//! - `patterns`: lexical patterns for test methods and the discovery guard marker
//! - `scanner`: test file enumeration and per-file discovery
//!
//! Sources are never parsed. Recognition is purely lexical and scoped to the fixed
//! `func testName() [async] [throws] {` declaration shape.

pub mod patterns;
pub mod scanner;

pub use patterns::{GUARD_MARKER, TestMethod, find_guard_condition, find_test_methods};
pub use scanner::{FileDiscovery, GlobDiscovery, TestDiscovery, TestEntry, discover_file, file_stem};
