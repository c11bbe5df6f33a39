//! Registration manifest - the aggregated input of the emitter
//!
//! Aggregation only filters: files without tests are dropped and the rest keep the order discovery
//! produced. Files are never merged. Two contributing files with the same stem would emit the same
//! `allTests_<stem>` identifier, so that case is rejected here.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{GenerateError, GenerateResult};
use crate::frontend::FileDiscovery;

/// Ordered set of files that register at least one test
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationManifest {
    files: Vec<FileDiscovery>,
}

impl RegistrationManifest {
    /// Build the manifest from discovery results, in the order received.
    ///
    /// ## Errors
    ///
    /// Returns [`GenerateError::DuplicateStem`] if two files that contribute tests share a stem.
    #[tracing::instrument(skip_all, fields(file_count = discoveries.len()))]
    pub fn aggregate(discoveries: Vec<FileDiscovery>) -> GenerateResult<Self> {
        let mut seen: HashMap<String, PathBuf> = HashMap::new();
        let mut files = Vec::new();

        for discovery in discoveries {
            if discovery.is_empty() {
                tracing::debug!("{} has no tests, skipping", discovery.file_stem);
                continue;
            }

            if let Some(first) = seen.get(&discovery.file_stem) {
                return Err(GenerateError::DuplicateStem {
                    stem: discovery.file_stem,
                    first: first.clone(),
                    second: discovery.path,
                });
            }
            seen.insert(discovery.file_stem.clone(), discovery.path.clone());
            files.push(discovery);
        }

        Ok(Self { files })
    }

    /// Contributing files, in emission order.
    pub fn files(&self) -> &[FileDiscovery] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total number of registered test methods.
    pub fn test_count(&self) -> usize {
        self.files.iter().map(|f| f.entries.len()).sum()
    }
}
