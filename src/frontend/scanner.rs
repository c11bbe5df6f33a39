//! Test file discovery
//!
//! ## TestDiscovery Trait
//!
//! Discovery is abstracted behind [`TestDiscovery`] so generation can run against something other
//! than the filesystem (in-memory sources in tests, a pre-filtered file list). [`GlobDiscovery`]
//! is the default: it enumerates `<workdir>/Tests/<module>/*/*Tests.swift`.
//!
//! ## Ordering
//!
//! Candidate files are sorted by path before they are read, so the generated file does not depend
//! on the order the filesystem returns directory entries in.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use glob::MatchOptions;

use super::patterns::{find_guard_condition, find_test_methods};
use crate::config::GeneratorConfig;
use crate::error::{GenerateError, GenerateResult};

/// A single registered test method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestEntry {
    pub name: String,
    pub is_async: bool,
}

impl TestEntry {
    pub fn new(name: impl Into<String>, is_async: bool) -> Self {
        Self {
            name: name.into(),
            is_async,
        }
    }
}

/// Tests discovered in one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiscovery {
    /// Path the file was read from
    pub path: PathBuf,
    /// File name without extension; names the test case class and the generated list
    pub file_stem: String,
    /// Test methods in order of appearance, unique by name
    pub entries: Vec<TestEntry>,
    /// Condition of the file's discovery guard, if it has one
    pub guard_condition: Option<String>,
}

impl FileDiscovery {
    /// Build a discovery from already-loaded source text.
    pub fn from_source(path: impl Into<PathBuf>, file_stem: impl Into<String>, source: &str) -> Self {
        let path = path.into();
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for method in find_test_methods(source) {
            if !seen.insert(method.name) {
                tracing::warn!(
                    "{}: duplicate test method '{}' registered once",
                    path.display(),
                    method.name
                );
                continue;
            }
            entries.push(TestEntry::new(method.name, method.is_async));
        }

        Self {
            path,
            file_stem: file_stem.into(),
            entries,
            guard_condition: find_guard_condition(source).map(str::to_string),
        }
    }

    /// Whether the file contributes no tests.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derive the logical name of a test file: its last component without extension.
pub fn file_stem(path: &Path) -> GenerateResult<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| GenerateError::InvalidFileName(path.to_path_buf()))
}

/// Read a test file and extract its tests and guard.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn discover_file(path: &Path) -> GenerateResult<FileDiscovery> {
    let stem = file_stem(path)?;
    let source = fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let discovery = FileDiscovery::from_source(path, stem, &source);
    tracing::debug!(
        tests = discovery.entries.len(),
        guarded = discovery.guard_condition.is_some(),
        "scanned {}",
        discovery.file_stem
    );
    Ok(discovery)
}

// ============================================================================
// Test Discovery Interface
// ============================================================================

/// Find test files under a package directory and extract their tests.
pub trait TestDiscovery {
    /// Discover every candidate file, in a deterministic order.
    ///
    /// Files without tests are still returned; filtering happens during aggregation.
    fn discover(&self, workdir: &Path) -> GenerateResult<Vec<FileDiscovery>>;
}

/// Filesystem discovery by glob (the default).
#[derive(Debug, Clone, Default)]
pub struct GlobDiscovery {
    config: GeneratorConfig,
}

impl GlobDiscovery {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Enumerate candidate test files, sorted by path.
    pub fn test_files(&self, workdir: &Path) -> GenerateResult<Vec<PathBuf>> {
        let module_dir = self.config.module_dir(workdir);

        // Surface a missing or unreadable module directory instead of an empty match set
        fs::read_dir(&module_dir).map_err(|source| GenerateError::TestsDir {
            path: module_dir.clone(),
            source,
        })?;

        let escaped = module_dir
            .to_str()
            .map(glob::Pattern::escape)
            .ok_or_else(|| GenerateError::InvalidFileName(module_dir.clone()))?;
        let pattern = format!("{}/{}", escaped, self.config.file_pattern());

        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };
        let paths = glob::glob_with(&pattern, options).map_err(|source| GenerateError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;

        let mut files = Vec::new();
        for path in paths {
            let path = path?;
            if !path.is_dir() {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }
}

impl TestDiscovery for GlobDiscovery {
    #[tracing::instrument(skip_all, fields(workdir = %workdir.display()))]
    fn discover(&self, workdir: &Path) -> GenerateResult<Vec<FileDiscovery>> {
        let files = self.test_files(workdir)?;
        tracing::debug!("found {} candidate test file(s)", files.len());

        files.iter().map(|path| discover_file(path)).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
