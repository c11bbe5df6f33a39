//! Errors raised while generating LinuxMain
//!
//! Every variant is fatal: generation stops before the output file is touched.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur during discovery, aggregation, or writing
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("working directory '{}' does not exist or is not a directory", .0.display())]
    Workdir(PathBuf),

    #[error("cannot read test directory '{}': {source}", path.display())]
    TestsDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid test file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("cannot enumerate test files: {0}")]
    Enumerate(#[from] glob::GlobError),

    #[error("path '{}' is not valid UTF-8 or has no file name", .0.display())]
    InvalidFileName(PathBuf),

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("test files '{}' and '{}' share the name '{stem}'", first.display(), second.display())]
    DuplicateStem {
        stem: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for generation operations.
pub type GenerateResult<T> = Result<T, GenerateError>;
