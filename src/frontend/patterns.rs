//! Lexical patterns for XCTest sources
//!
//! Two patterns are recognized:
//!
//! - A test method: `func test<Name>()`, optionally `async`, optionally `throws`, directly followed
//!   by the opening brace. Whitespace between tokens may span lines.
//! - A discovery guard: a line `#if <condition> // TEST_DISCOVERY_CONDITION`. The condition is
//!   copied verbatim into the generated file.
//!
//! Anything outside this shape (parameters, return types, attributes between tokens) is not a test
//! as far as the generator is concerned.

use std::sync::LazyLock;

use regex::Regex;

/// Marker comment that tags the `#if` line guarding a whole test file.
pub const GUARD_MARKER: &str = "TEST_DISCOVERY_CONDITION";

static TEST_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bfunc\s+(test\w+)\s*\(\s*\)\s*(async\b)?\s*(?:throws\b)?\s*\{")
        .expect("INVARIANT: test method pattern is valid")
});

static GUARD_CONDITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?m)^#if[ \t]+(\S.*?)[ \t]*//[ \t]*{}[ \t\r]*$",
        GUARD_MARKER
    ))
    .expect("INVARIANT: guard condition pattern is valid")
});

/// A test method declaration found in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestMethod<'src> {
    /// Method name, starting with `test`
    pub name: &'src str,
    /// Whether the declaration carries `async`
    pub is_async: bool,
}

/// Find every test method declaration in `source`, in order of appearance.
pub fn find_test_methods(source: &str) -> Vec<TestMethod<'_>> {
    TEST_METHOD
        .captures_iter(source)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str();
            Some(TestMethod {
                name,
                is_async: caps.get(2).is_some(),
            })
        })
        .collect()
}

/// Find the discovery guard condition of a file.
///
/// Only the first marker line counts; later markers are ignored.
pub fn find_guard_condition(source: &str) -> Option<&str> {
    GUARD_CONDITION
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

// ============================================================================
// Tests
// ============================================================================
