//! LinuxMain.swift emitter
//!
//! Serializes a [`RegistrationManifest`] to the entry point XCTest expects on platforms without
//! Objective-C test discovery:
//!
//! ```text
//! import XCTest
//!
//! @testable import OpenCombineTests
//!
//! var tests = [XCTestCaseEntry]()
//!
//! #if os(Linux)
//! let allTests_MapTests = [
//!     ("testMap", MapTests.testMap),
//!     ("testAsyncMap", asyncTest(MapTests.testAsyncMap)),
//! ]
//! tests.append(testCase(allTests_MapTests))
//! #endif
//!
//! XCTMain(tests)
//! ```
//!
//! The `#if`/`#endif` pair only appears for files with a discovery guard. The output ends right
//! after `XCTMain(tests)`, without a trailing newline.

use super::manifest::RegistrationManifest;
use crate::config::GeneratorConfig;
use crate::frontend::{FileDiscovery, TestEntry};

const INDENT_WIDTH: usize = 4;

/// Line-oriented writer with indentation tracking
struct SwiftWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl SwiftWriter {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            at_line_start: true,
        }
    }

    fn finish(self) -> String {
        self.output
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if self.at_line_start {
            self.output.push_str(&" ".repeat(self.indent_level * INDENT_WIDTH));
            self.at_line_start = false;
        }
        self.output.push_str(s);
    }

    fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }
}

/// Emitter for the aggregated test entry point
pub struct LinuxMainEmitter<'a> {
    config: &'a GeneratorConfig,
    writer: SwiftWriter,
}

impl<'a> LinuxMainEmitter<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            config,
            writer: SwiftWriter::new(),
        }
    }

    /// Emit the complete file for `manifest`.
    #[tracing::instrument(skip_all, fields(file_count = manifest.files().len()))]
    pub fn emit(mut self, manifest: &RegistrationManifest) -> String {
        self.emit_preamble();
        for file in manifest.files() {
            self.emit_file(file);
        }
        self.writer.write(&format!("{}(tests)", self.config.runner));
        self.writer.finish()
    }

    fn emit_preamble(&mut self) {
        self.writer.writeln("import XCTest");
        self.writer.newline();
        self.writer
            .writeln(&format!("@testable import {}", self.config.test_module));
        self.writer.newline();
        self.writer.writeln("var tests = [XCTestCaseEntry]()");
        self.writer.newline();
    }

    fn emit_file(&mut self, file: &FileDiscovery) {
        let list_name = list_identifier(&file.file_stem);

        if let Some(condition) = &file.guard_condition {
            self.writer.writeln(&format!("#if {}", condition));
        }

        self.writer.writeln(&format!("let {} = [", list_name));
        self.writer.indent();
        for entry in &file.entries {
            let reference = self.test_reference(&file.file_stem, entry);
            self.writer
                .writeln(&format!("(\"{}\", {}),", entry.name, reference));
        }
        self.writer.dedent();
        self.writer.writeln("]");
        self.writer
            .writeln(&format!("tests.append(testCase({}))", list_name));

        if file.guard_condition.is_some() {
            self.writer.writeln("#endif");
        }
        self.writer.newline();
    }

    /// `Stem.testName`, or `asyncTest(Stem.testName)` for async tests.
    fn test_reference(&self, file_stem: &str, entry: &TestEntry) -> String {
        let method = format!("{}.{}", file_stem, entry.name);
        if entry.is_async {
            format!("{}({})", self.config.async_adapter, method)
        } else {
            method
        }
    }
}

/// Name of the generated `(name, method)` list for a test file.
pub fn list_identifier(file_stem: &str) -> String {
    format!("allTests_{}", file_stem)
}

/// Render `manifest` with the given configuration.
pub fn emit_linuxmain(manifest: &RegistrationManifest, config: &GeneratorConfig) -> String {
    LinuxMainEmitter::new(config).emit(manifest)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn file(stem: &str, entries: Vec<TestEntry>, guard: Option<&str>) -> FileDiscovery {
        FileDiscovery {
            path: format!("Tests/OpenCombineTests/X/{stem}.swift").into(),
            file_stem: stem.to_string(),
            entries,
            guard_condition: guard.map(str::to_string),
        }
    }

    fn emit(files: Vec<FileDiscovery>) -> String {
        let manifest = RegistrationManifest::aggregate(files).unwrap();
        emit_linuxmain(&manifest, &GeneratorConfig::default())
    }

    const PREAMBLE: &str =
        "import XCTest\n\n@testable import OpenCombineTests\n\nvar tests = [XCTestCaseEntry]()\n\n";

    #[test]
    fn test_empty_manifest() {
        assert_eq!(emit(vec![]), format!("{PREAMBLE}XCTMain(tests)"));
    }

    #[test]
    fn test_sync_and_async_references() {
        let output = emit(vec![file(
            "FooTests",
            vec![TestEntry::new("testAlpha", false), TestEntry::new("testBeta", true)],
            None,
        )]);

        let expected = format!(
            "{PREAMBLE}\
let allTests_FooTests = [
    (\"testAlpha\", FooTests.testAlpha),
    (\"testBeta\", asyncTest(FooTests.testBeta)),
]
tests.append(testCase(allTests_FooTests))

XCTMain(tests)"
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_guarded_block() {
        let output = emit(vec![file(
            "BazTests",
            vec![TestEntry::new("testLinuxOnly", false)],
            Some("os(Linux)"),
        )]);

        let expected = format!(
            "{PREAMBLE}\
#if os(Linux)
let allTests_BazTests = [
    (\"testLinuxOnly\", BazTests.testLinuxOnly),
]
tests.append(testCase(allTests_BazTests))
#endif

XCTMain(tests)"
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_files_emitted_in_manifest_order() {
        let output = emit(vec![
            file("ZipTests", vec![TestEntry::new("testZip", false)], None),
            file("MapTests", vec![TestEntry::new("testMap", false)], None),
        ]);

        let zip = output.find("allTests_ZipTests = [").unwrap();
        let map = output.find("allTests_MapTests = [").unwrap();
        assert!(zip < map);
    }

    #[test]
    fn test_custom_names_from_config() {
        let manifest = RegistrationManifest::aggregate(vec![file(
            "FooTests",
            vec![TestEntry::new("testAsync", true)],
            None,
        )])
        .unwrap();
        let config = GeneratorConfig::new()
            .with_test_module("OtherTests")
            .with_async_adapter("runAsync");

        let output = emit_linuxmain(&manifest, &config);
        assert!(output.contains("@testable import OtherTests\n"));
        assert!(output.contains("(\"testAsync\", runAsync(FooTests.testAsync)),\n"));
    }

    #[test]
    fn test_emission_is_deterministic() {
        let files = vec![
            file("FooTests", vec![TestEntry::new("testA", true)], Some("os(Linux)")),
            file("BarTests", vec![TestEntry::new("testB", false)], None),
        ];
        assert_eq!(emit(files.clone()), emit(files));
    }

    #[test]
    fn test_list_identifier() {
        assert_eq!(list_identifier("MapTests"), "allTests_MapTests");
    }

    #[test]
    fn test_writer_indentation() {
        let mut writer = SwiftWriter::new();
        writer.writeln("[");
        writer.indent();
        writer.writeln("a");
        writer.dedent();
        writer.dedent();
        writer.writeln("]");
        assert_eq!(writer.finish(), "[\n    a\n]\n");
    }
}
