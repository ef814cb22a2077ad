//! Release tag version normalization

use std::fmt;

use crate::config::TAG_PREFIX;

/// Version string taken from a release tag, with one leading `v` removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagVersion(String);

impl TagVersion {
    /// Normalize a raw tag argument such as `v0.0.57` or `0.0.57`.
    pub fn from_arg(raw: &str) -> Self {
        Self(normalize(raw).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip a single leading lowercase `v`.
///
/// Only one prefix character is removed: `"vv1.0.0"` becomes `"v1.0.0"`.
pub fn normalize(raw: &str) -> &str {
    raw.strip_prefix(TAG_PREFIX).unwrap_or(raw)
}
