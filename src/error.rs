use std::path::PathBuf;

use thiserror::Error;

use crate::config::{EXIT_FAILURE, EXIT_MANIFEST_UNREADABLE, MANIFEST_FILE_NAME, PROGRAM_NAME};
use crate::report::quote;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Usage: {} <version>", PROGRAM_NAME)]
    Usage,

    #[error("Error: Could not find a valid `version = \"...\"` line in {}.", MANIFEST_FILE_NAME)]
    PatternNotFound,

    #[error(
        "Error: version mismatch. Tag is {}, but {} is {}.",
        quote(.tag),
        MANIFEST_FILE_NAME,
        quote(.manifest)
    )]
    VersionMismatch { tag: String, manifest: String },

    #[error("Error: failed to read {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error: failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CheckError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::Usage
            | CheckError::PatternNotFound
            | CheckError::VersionMismatch { .. }
            | CheckError::Output(_) => EXIT_FAILURE,
            CheckError::ManifestRead { .. } => EXIT_MANIFEST_UNREADABLE,
        }
    }

    /// I/O failures go to stderr; validation failures stay with the stdout diagnostics
    pub fn reports_to_stderr(&self) -> bool {
        matches!(
            self,
            CheckError::ManifestRead { .. } | CheckError::Output(_)
        )
    }
}
