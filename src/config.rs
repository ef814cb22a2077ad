// =============================================================================
// Manifest
// =============================================================================

/// File name of the manifest consulted for the declared version
pub const MANIFEST_FILE_NAME: &str = "Cargo.toml";

/// Pattern for the version declaration line, searched in multi-line mode
pub const VERSION_LINE_PATTERN: &str = r#"(?m)^version\s*=\s*"([^"]+)""#;

/// Prefix stripped (once) from the tag version
pub const TAG_PREFIX: char = 'v';

// =============================================================================
// Exit codes
// =============================================================================

/// Versions match
pub const EXIT_SUCCESS: i32 = 0;

/// Usage error, missing version line, or version mismatch
pub const EXIT_FAILURE: i32 = 1;

/// Manifest could not be read
pub const EXIT_MANIFEST_UNREADABLE: i32 = 2;

// =============================================================================
// CLI
// =============================================================================

/// Program name shown in the usage line
pub const PROGRAM_NAME: &str = "check_version_is";

// =============================================================================
// Logging
// =============================================================================

/// Environment variable holding the tracing filter directive.
/// Logging stays off when it is unset.
pub const LOG_FILTER_ENV: &str = "CHECK_VERSION_IS_LOG";
