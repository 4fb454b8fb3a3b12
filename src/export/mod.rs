//! Plain-text export of scrambles.
//!
//! The space-separated notation is the only external format. Files hold
//! one scramble per line, each line newline-terminated. Clipboard payloads
//! join the selected scrambles with newlines and carry no trailing newline.

pub mod audit;
pub mod error;

pub use audit::{audit_text, Audit, LineProblem, Problem};
pub use error::ExportError;

use crate::core::Scramble;
use crate::session::ScrambleList;
use chrono::{DateTime, TimeZone};
use std::fs;
use std::path::Path;

/// Render scrambles in file form: one per line, newline-terminated.
///
/// # Example
///
/// ```rust
/// use scrambler::core::Scramble;
/// use scrambler::export::render_lines;
///
/// let a: Scramble = "R U F".parse().unwrap();
/// let b: Scramble = "L' D2 B".parse().unwrap();
///
/// assert_eq!(render_lines([&a, &b]), "R U F\nL' D2 B\n");
/// ```
pub fn render_lines<'a, I>(scrambles: I) -> String
where
    I: IntoIterator<Item = &'a Scramble>,
{
    let mut out = String::new();
    for scramble in scrambles {
        out.push_str(&scramble.to_string());
        out.push('\n');
    }
    out
}

/// Render a selection for the clipboard: joined by newlines.
pub fn clipboard_payload(selection: &[&Scramble]) -> Result<String, ExportError> {
    if selection.is_empty() {
        return Err(ExportError::EmptySelection);
    }
    Ok(selection
        .iter()
        .map(|scramble| scramble.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Suggested export file name, stamped with `now`.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use scrambler::export::default_file_name;
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
/// assert_eq!(default_file_name(&at), "scrambles_20240309_140507.txt");
/// ```
pub fn default_file_name<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("scrambles_{}.txt", now.format("%Y%m%d_%H%M%S"))
}

/// Write every scramble in `list` to `path` as UTF-8 text.
///
/// Refuses to write an empty list. Existing files are overwritten.
pub fn write_text(path: &Path, list: &ScrambleList) -> Result<(), ExportError> {
    if list.is_empty() {
        return Err(ExportError::NothingToSave);
    }

    fs::write(path, render_lines(list.scrambles())).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), count = list.len(), "saved scrambles");
    Ok(())
}
