//! Manifest reading and version extraction
//!
//! Only the first line of the form `version = "..."` is consulted. The line
//! must start at column zero, so indented keys inside inline or nested tables
//! are not picked up. No TOML parsing is done beyond this single pattern.

#[cfg(test)]
use mockall::automock;

use std::fmt;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{debug, warn};

use crate::config::{MANIFEST_FILE_NAME, VERSION_LINE_PATTERN};
use crate::error::CheckError;

/// Trait for loading the manifest text
#[cfg_attr(test, automock)]
pub trait ManifestSource {
    /// Path of the manifest, used in messages
    fn location(&self) -> &Path;

    /// Read the whole manifest as UTF-8 text
    fn read(&self) -> Result<String, CheckError>;
}

/// Manifest read from the filesystem
#[derive(Debug, Clone)]
pub struct FsManifest {
    path: PathBuf,
}

impl FsManifest {
    /// `Cargo.toml` relative to the current working directory
    pub fn current_dir() -> Self {
        Self {
            path: PathBuf::from(MANIFEST_FILE_NAME),
        }
    }

    /// `Cargo.toml` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(MANIFEST_FILE_NAME),
        }
    }
}

impl ManifestSource for FsManifest {
    fn location(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String, CheckError> {
        debug!("Reading manifest: {}", self.path.display());
        std::fs::read_to_string(&self.path).map_err(|source| {
            warn!("Failed to read {}: {}", self.path.display(), source);
            CheckError::ManifestRead {
                path: self.path.clone(),
                source,
            }
        })
    }
}

/// Version declared by the manifest's `version = "..."` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestVersion(String);

impl ManifestVersion {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ManifestVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the declared version from manifest text
pub struct ManifestParser {
    /// Regex for the declaration: `version = "1.2.3"`
    version_line_re: Regex,
}

impl ManifestParser {
    pub fn new() -> Self {
        Self {
            version_line_re: Regex::new(VERSION_LINE_PATTERN)
                .expect("version line pattern is a valid regex"),
        }
    }

    /// Return the version from the first matching line, if any
    pub fn parse(&self, content: &str) -> Option<ManifestVersion> {
        let caps = self.version_line_re.captures(content)?;
        let version = caps.get(1)?;
        debug!(
            "Found version declaration at byte offset {}",
            version.start()
        );
        Some(ManifestVersion(version.as_str().to_string()))
    }
}

impl Default for ManifestParser {
    fn default() -> Self {
        Self::new()
    }
}
