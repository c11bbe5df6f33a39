//! Generator configuration
//!
//! Describes the on-disk layout that is scanned and the XCTest names the emitted file refers to.
//! The defaults match the package convention; the CLI never changes them.

use std::path::{Path, PathBuf};

/// Layout and naming configuration for LinuxMain generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory under the workdir holding all test targets
    pub tests_dir: String,
    /// Test target that is scanned and imported with `@testable`
    pub test_module: String,
    /// Required file name suffix (before the extension) of a test file
    pub file_suffix: String,
    /// Source file extension, without the dot
    pub extension: String,
    /// Stem of the generated file inside `tests_dir`
    pub output_stem: String,
    /// Adapter wrapping `async` test methods
    pub async_adapter: String,
    /// Runner entry point receiving the collected test cases
    pub runner: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tests_dir: "Tests".to_string(),
            test_module: "OpenCombineTests".to_string(),
            file_suffix: "Tests".to_string(),
            extension: "swift".to_string(),
            output_stem: "LinuxMain".to_string(),
            async_adapter: "asyncTest".to_string(),
            runner: "XCTMain".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scanned (and imported) test module
    pub fn with_test_module(mut self, module: impl Into<String>) -> Self {
        self.test_module = module.into();
        self
    }

    /// Set the source file extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set the async adapter name
    pub fn with_async_adapter(mut self, adapter: impl Into<String>) -> Self {
        self.async_adapter = adapter.into();
        self
    }

    /// `<workdir>/<tests_dir>/<test_module>`
    pub fn module_dir(&self, workdir: &Path) -> PathBuf {
        workdir.join(&self.tests_dir).join(&self.test_module)
    }

    /// Pattern for candidate files relative to the module directory: one directory layer, then
    /// `*<suffix>.<extension>`.
    pub fn file_pattern(&self) -> String {
        format!("*/*{}.{}", self.file_suffix, self.extension)
    }

    /// `<workdir>/<tests_dir>/<output_stem>.<extension>`
    pub fn output_path(&self, workdir: &Path) -> PathBuf {
        workdir
            .join(&self.tests_dir)
            .join(format!("{}.{}", self.output_stem, self.extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Default config tests
    // ========================================

    #[test]
    fn test_new_equals_default() {
        assert_eq!(GeneratorConfig::new(), GeneratorConfig::default());
    }

    #[test]
    fn test_default_module_dir() {
        let config = GeneratorConfig::default();
        assert_eq!(
            config.module_dir(Path::new("/pkg")),
            PathBuf::from("/pkg/Tests/OpenCombineTests")
        );
    }

    #[test]
    fn test_default_file_pattern() {
        assert_eq!(GeneratorConfig::default().file_pattern(), "*/*Tests.swift");
    }

    #[test]
    fn test_default_output_path() {
        let config = GeneratorConfig::default();
        assert_eq!(
            config.output_path(Path::new("/pkg")),
            PathBuf::from("/pkg/Tests/LinuxMain.swift")
        );
    }

    // ========================================
    // Builder tests
    // ========================================

    #[test]
    fn test_with_test_module() {
        let config = GeneratorConfig::new().with_test_module("OtherTests");
        assert_eq!(
            config.module_dir(Path::new("root")),
            PathBuf::from("root/Tests/OtherTests")
        );
    }

    #[test]
    fn test_with_extension_changes_pattern_and_output() {
        let config = GeneratorConfig::new().with_extension("txt");
        assert_eq!(config.file_pattern(), "*/*Tests.txt");
        assert_eq!(
            config.output_path(Path::new("root")),
            PathBuf::from("root/Tests/LinuxMain.txt")
        );
    }

    #[test]
    fn test_with_async_adapter() {
        let config = GeneratorConfig::new().with_async_adapter("runAsync");
        assert_eq!(config.async_adapter, "runAsync");
    }
}
