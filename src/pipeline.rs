//! Generation pipeline
//!
//! Discovery → aggregation → emission, all in memory. The output file is only touched by
//! [`Generated::write`], after every input has been read successfully, so a failed run never
//! leaves a partial `LinuxMain.swift` behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::backend::{RegistrationManifest, emit_linuxmain};
use crate::config::GeneratorConfig;
use crate::error::{GenerateError, GenerateResult};
use crate::frontend::{GlobDiscovery, TestDiscovery};

/// Outcome of writing the generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was created or its content replaced
    Written,
    /// The file already had the generated content; nothing was written
    Unchanged,
}

/// A fully generated entry point, not yet written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Destination of the generated file
    pub output_path: PathBuf,
    /// Complete file content
    pub source: String,
    /// Number of test files registered
    pub file_count: usize,
    /// Number of test methods registered
    pub test_count: usize,
}

impl Generated {
    /// Whether the file on disk already holds exactly this content.
    pub fn is_current(&self) -> GenerateResult<bool> {
        match fs::read_to_string(&self.output_path) {
            Ok(existing) => Ok(existing == self.source),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            // A non-UTF-8 file cannot match generated text
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Ok(false),
            Err(source) => Err(GenerateError::Read {
                path: self.output_path.clone(),
                source,
            }),
        }
    }

    /// Write the file, truncating any previous content. Skips the write when nothing changed.
    pub fn write(&self) -> GenerateResult<WriteOutcome> {
        if self.is_current()? {
            tracing::debug!("{} is up to date", self.output_path.display());
            return Ok(WriteOutcome::Unchanged);
        }

        fs::write(&self.output_path, &self.source).map_err(|source| GenerateError::Write {
            path: self.output_path.clone(),
            source,
        })?;
        tracing::info!(
            files = self.file_count,
            tests = self.test_count,
            "wrote {}",
            self.output_path.display()
        );
        Ok(WriteOutcome::Written)
    }
}

/// LinuxMain generator over a pluggable discovery strategy
pub struct Generator<D = GlobDiscovery> {
    config: GeneratorConfig,
    discovery: D,
}

impl Generator<GlobDiscovery> {
    /// Generator scanning the filesystem with `config`'s layout.
    pub fn new(config: GeneratorConfig) -> Self {
        let discovery = GlobDiscovery::new(config.clone());
        Self { config, discovery }
    }
}

impl<D: TestDiscovery> Generator<D> {
    /// Generator using a custom discovery strategy.
    pub fn with_discovery(config: GeneratorConfig, discovery: D) -> Self {
        Self { config, discovery }
    }

    /// Scan `workdir` and build the entry point in memory.
    ///
    /// ## Errors
    ///
    /// Fails if `workdir` is not a directory, if any test file cannot be read, or if two test files
    /// share a name. Nothing is written in any case.
    #[tracing::instrument(skip_all, fields(workdir = %workdir.display()))]
    pub fn generate(&self, workdir: &Path) -> GenerateResult<Generated> {
        if !workdir.is_dir() {
            return Err(GenerateError::Workdir(workdir.to_path_buf()));
        }

        let discoveries = self.discovery.discover(workdir)?;
        let manifest = RegistrationManifest::aggregate(discoveries)?;
        if manifest.is_empty() {
            tracing::warn!("no test methods found under {}", self.config.module_dir(workdir).display());
        }

        Ok(Generated {
            output_path: self.config.output_path(workdir),
            source: emit_linuxmain(&manifest, &self.config),
            file_count: manifest.files().len(),
            test_count: manifest.test_count(),
        })
    }
}
