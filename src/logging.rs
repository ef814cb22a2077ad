//! Tracing setup
//!
//! Logs are off unless `CHECK_VERSION_IS_LOG` holds a filter directive such as
//! `debug` or `check_version_is=info`. They always go to stderr so the stdout
//! diagnostics stay byte-for-byte stable for pipelines that parse them.
//!
//! A directive that fails to parse is an `Err` from [`init`]; the binary reports
//! it as a warning on stderr and runs the check without logging, so a bad log
//! setting never changes the exit code.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::LOG_FILTER_ENV;

/// Install the global subscriber when a filter directive is configured.
///
/// Returns `Ok(false)` when logging is disabled.
pub fn init() -> anyhow::Result<bool> {
    init_with_directive(std::env::var(LOG_FILTER_ENV).ok())
}

fn init_with_directive(directive: Option<String>) -> anyhow::Result<bool> {
    let Some(filter) = build_filter(directive)? else {
        return Ok(false);
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(true)
}

fn build_filter(directive: Option<String>) -> anyhow::Result<Option<EnvFilter>> {
    let Some(directive) = directive.filter(|d| !d.trim().is_empty()) else {
        return Ok(None);
    };

    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("invalid {LOG_FILTER_ENV} directive: {directive:?}"))?;
    Ok(Some(filter))
}
