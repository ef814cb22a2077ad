//! Release tag version check
//!
//! Verifies that a release tag such as `v0.0.57` names the same version as the
//! `version = "..."` line of the `Cargo.toml` in the working directory.
//!
//! # Modules
//!
//! - [`cli`]: Argument parsing and the end-to-end `run` flow
//! - [`checker`]: Exact comparison of tag and manifest versions
//! - [`manifest`]: Manifest reading and version line extraction
//! - [`tag`]: Tag version normalization
//! - [`report`]: Quoting for diagnostic output
//! - [`error`]: Failure taxonomy and exit codes
//! - [`config`]: Fixed names, patterns and exit codes
//! - [`logging`]: Optional tracing output on stderr

pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod report;
pub mod tag;

pub use cli::run;
pub use error::CheckError;
