//! Command-line entry point
//!
//! [`run`] takes the argument vector, the manifest source and the output
//! writers explicitly and returns the process exit code, so the whole flow can
//! be driven from tests without touching the process environment.
//!
//! Clap's help flag is disabled: every first argument, `-h` and `--help`
//! included, is taken as the tag. A leading `--` is the usual end-of-options
//! marker and is consumed, so `check_version_is -- v1.2.3` checks `v1.2.3`.

use std::ffi::OsString;
use std::io::Write;

use clap::Parser;
use tracing::{debug, info, warn};

use crate::checker::ensure_versions_match;
use crate::config::{EXIT_SUCCESS, MANIFEST_FILE_NAME, PROGRAM_NAME};
use crate::error::CheckError;
use crate::manifest::{ManifestParser, ManifestSource};
use crate::report::quote;
use crate::tag::TagVersion;

#[derive(Parser, Debug)]
#[command(name = PROGRAM_NAME, disable_help_flag = true)]
#[command(about = "Check that a release tag matches the version declared in Cargo.toml")]
struct Cli {
    /// Release tag version, e.g. v0.0.57 or 0.0.57
    #[arg(value_name = "version", allow_hyphen_values = true)]
    tag: Option<String>,

    /// Extra arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    extra: Vec<String>,
}

/// Run the check and return the process exit code.
///
/// Diagnostics and validation failures are written to `out`; manifest read
/// failures are written to `err`.
pub fn run<I, T, S, W, E>(args: I, source: &S, out: &mut W, err: &mut E) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    S: ManifestSource + ?Sized,
    W: Write,
    E: Write,
{
    match execute(args, source, out) {
        Ok(()) => EXIT_SUCCESS,
        Err(error) => {
            let code = error.exit_code();
            info!("Check failed with exit code {}: {}", code, error);
            if error.reports_to_stderr() || writeln!(out, "{error}").is_err() {
                let _ = writeln!(err, "{error}");
            }
            code
        }
    }
}

fn execute<I, T, S, W>(args: I, source: &S, out: &mut W) -> Result<(), CheckError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    S: ManifestSource + ?Sized,
    W: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            debug!("Argument parsing failed: {}", e.kind());
            return Err(CheckError::Usage);
        }
    };

    if !cli.extra.is_empty() {
        debug!("Ignoring extra arguments: {:?}", cli.extra);
    }

    let Some(raw_tag) = cli.tag else {
        return Err(CheckError::Usage);
    };
    writeln!(out, "Argument version: {}", quote(&raw_tag))?;

    let tag = TagVersion::from_arg(&raw_tag);
    writeln!(out, "Tag version:       {}", quote(tag.as_str()))?;

    let manifest_path = source.location();
    let content = source.read()?;
    writeln!(out, "{}: {}", MANIFEST_FILE_NAME, quote(&content))?;

    let manifest = ManifestParser::new()
        .parse(&content)
        .ok_or_else(|| {
            warn!("No version declaration in {}", manifest_path.display());
            CheckError::PatternNotFound
        })?;

    writeln!(out, "Tag version:       {}", quote(tag.as_str()))?;
    writeln!(out, "{} version: {}", MANIFEST_FILE_NAME, quote(manifest.as_str()))?;

    ensure_versions_match(&tag, &manifest, manifest_path)?;

    writeln!(
        out,
        "Success: Tag version matches {} version.",
        MANIFEST_FILE_NAME
    )?;
    Ok(())
}
