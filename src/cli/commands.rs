//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io::{self, Write};
use std::path::Path;

use crate::config::GeneratorConfig;
use crate::pipeline::{Generated, Generator, WriteOutcome};

use super::{CliError, CliResult, ExitCode};

/// What to do with the generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Write `Tests/LinuxMain.swift` (skipped when unchanged)
    Write,
    /// Compare with the existing file; fail when it is missing or stale
    Check,
    /// Print the generated source to stdout
    Stdout,
}

/// Generate LinuxMain for the package rooted at `workdir`.
///
/// Every input is read before anything is written; any error leaves the existing file untouched.
pub fn generate(workdir: &Path, mode: OutputMode) -> CliResult<ExitCode> {
    let generator = Generator::new(GeneratorConfig::default());
    let generated = generator.generate(workdir)?;

    match mode {
        OutputMode::Stdout => print_source(&generated)?,
        OutputMode::Check => {
            let shown = display_path(workdir, &generated);
            if !generated.is_current()? {
                return Err(CliError::failure(format!(
                    "{} is out of date; run discover-tests to regenerate it",
                    shown
                )));
            }
            println!("✓ {} is up to date ({})", shown, summary(&generated));
        }
        OutputMode::Write => {
            let shown = display_path(workdir, &generated);
            match generated.write()? {
                WriteOutcome::Written => println!("✓ Generated {} ({})", shown, summary(&generated)),
                WriteOutcome::Unchanged => println!("✓ {} already up to date ({})", shown, summary(&generated)),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_source(generated: &Generated) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(generated.source.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| CliError::failure(format!("Error writing to stdout: {}", e)))
}

/// Output path relative to the workdir when possible.
fn display_path(workdir: &Path, generated: &Generated) -> String {
    generated
        .output_path
        .strip_prefix(workdir)
        .unwrap_or(&generated.output_path)
        .display()
        .to_string()
}

fn summary(generated: &Generated) -> String {
    format!(
        "{} test(s) in {} file(s)",
        generated.test_count, generated.file_count
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;

    fn package_with(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (relative, contents) in files {
            let path = dir.path().join("Tests/OpenCombineTests").join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, contents).unwrap();
        }
        dir
    }

    #[test]
    fn test_write_mode_creates_file() {
        let dir = package_with(&[("A/FooTests.swift", "func testAlpha() {}")]);
        assert_eq!(generate(dir.path(), OutputMode::Write).unwrap(), ExitCode::SUCCESS);
        assert!(dir.path().join("Tests/LinuxMain.swift").is_file());
    }

    #[test]
    fn test_check_mode_fails_when_missing() {
        let dir = package_with(&[("A/FooTests.swift", "func testAlpha() {}")]);
        let err = generate(dir.path(), OutputMode::Check).unwrap_err();
        assert!(err.message.contains("out of date"));
        assert!(!dir.path().join("Tests/LinuxMain.swift").exists());
    }

    #[test]
    fn test_check_mode_passes_after_write() {
        let dir = package_with(&[("A/FooTests.swift", "func testAlpha() {}")]);
        generate(dir.path(), OutputMode::Write).unwrap();
        assert_eq!(generate(dir.path(), OutputMode::Check).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_stdout_mode_writes_nothing() {
        let dir = package_with(&[("A/FooTests.swift", "func testAlpha() {}")]);
        generate(dir.path(), OutputMode::Stdout).unwrap();
        assert!(!dir.path().join("Tests/LinuxMain.swift").exists());
    }

    #[test]
    fn test_display_path_is_relative() {
        let generated = Generated {
            output_path: Path::new("/pkg/Tests/LinuxMain.swift").to_path_buf(),
            source: String::new(),
            file_count: 0,
            test_count: 0,
        };
        assert_eq!(display_path(Path::new("/pkg"), &generated), "Tests/LinuxMain.swift");
        assert_eq!(
            display_path(Path::new("/other"), &generated),
            "/pkg/Tests/LinuxMain.swift"
        );
    }
}
