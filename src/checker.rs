//! Tag and manifest version comparison

use std::path::Path;

use tracing::{info, warn};

use crate::error::CheckError;
use crate::manifest::ManifestVersion;
use crate::tag::TagVersion;

/// Require the tag version to equal the manifest version exactly.
///
/// No semantic-version interpretation happens here: `1.0` and `1.0.0` differ.
pub fn ensure_versions_match(
    tag: &TagVersion,
    manifest: &ManifestVersion,
    manifest_path: &Path,
) -> Result<(), CheckError> {
    if tag.as_str() == manifest.as_str() {
        info!("Tag version {} matches {}", tag, manifest_path.display());
        return Ok(());
    }

    warn!(
        "Version mismatch: tag {} vs {} in {}",
        tag,
        manifest,
        manifest_path.display()
    );
    Err(CheckError::VersionMismatch {
        tag: tag.as_str().to_string(),
        manifest: manifest.as_str().to_string(),
    })
}
