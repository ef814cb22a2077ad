//! Diagnostic line formatting
//!
//! Values echoed on stdout are quoted so that surrounding whitespace and
//! embedded newlines stay visible in CI logs, e.g. `'0.0.57'` or
//! `'[package]\nname = "demo"\n'`. Pipelines that scrape this output depend on
//! the exact form, so it must not change.
//!
//! Anything not printable is escaped, including a byte order mark at the start
//! of the manifest and Unicode line separators, so each diagnostic stays on a
//! single line.

use std::fmt::Write as _;

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Quote a value for display.
///
/// Single quotes are used unless the value contains a single quote and no
/// double quote. Backslashes, the active quote character, and non-printable
/// characters are escaped as `\xNN`, `\uNNNN` or `\UNNNNNNNN`.
pub fn quote(value: &str) -> String {
    let delimiter = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push(delimiter);
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == delimiter => {
                quoted.push('\\');
                quoted.push(c);
            }
            c if !is_printable(c) => push_escaped(&mut quoted, c),
            c => quoted.push(c),
        }
    }
    quoted.push(delimiter);
    quoted
}

/// Separators (other than the ASCII space), control, format, private-use and
/// unassigned characters are not printable.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        c.general_category(),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

fn push_escaped(quoted: &mut String, c: char) {
    let code = c as u32;
    let _ = if code < 0x100 {
        write!(quoted, "\\x{code:02x}")
    } else if code < 0x10000 {
        write!(quoted, "\\u{code:04x}")
    } else {
        write!(quoted, "\\U{code:08x}")
    };
}
