//! Report formatting and file output.
//!
//! The target path's extension selects the format once, up front; the
//! per-entry template is shared and only the envelope differs. Keys are
//! sanitized by deleting quote characters and doubling backslashes, in
//! that order, so the doubling can never reintroduce a quote. Deleting
//! quotes is lossy: keys that differ only in embedded quotes collide in
//! the serialized report. Consumers of the report format rely on the
//! stripped form, so the behavior is kept as is.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::report::ReportEntry;

/// Output format, selected by the report path's extension.
///
/// Matching is exact and case-sensitive: `report.JSON` and extensionless
/// paths both fall back to [`ReportFormat::Plain`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReportFormat {
    /// A JSON object keyed by declaration signature.
    Json,
    /// The same object as a `const` declaration, embeddable in a script.
    Js,
    /// Bare entries joined by newlines, no envelope.
    Plain,
}

impl ReportFormat {
    /// Choose the format for a target path.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ReportFormat::Json,
            Some("js") => ReportFormat::Js,
            _ => ReportFormat::Plain,
        }
    }

    /// (prefix, suffix, entry separator) for this format.
    fn envelope(self) -> (&'static str, &'static str, &'static str) {
        match self {
            ReportFormat::Json => ("{\n", "\n}", ",\n"),
            ReportFormat::Js => ("const rillDeclarationsSize = {\n", "\n};\n", ",\n"),
            ReportFormat::Plain => ("", "", "\n"),
        }
    }
}

/// Render the full report text for a format.
///
/// Zero entries produce the bare envelope around an empty body (for JSON
/// that is `{\n\n}`); no special casing, so the output stays a pure fold
/// over the entry list.
pub fn render_report(format: ReportFormat, entries: &[ReportEntry]) -> String {
    let (prefix, suffix, separator) = format.envelope();
    let body: Vec<String> = entries.iter().map(render_entry).collect();

    let mut out = String::with_capacity(
        prefix.len() + suffix.len() + body.iter().map(|e| e.len() + separator.len()).sum::<usize>(),
    );
    out.push_str(prefix);
    out.push_str(&body.join(separator));
    out.push_str(suffix);
    out
}

/// Write the report to `path` in the format selected by its extension.
///
/// Overwrites any existing file. Best-effort diagnostic output: no
/// atomic-rename or partial-write protection.
///
/// # Errors
///
/// Propagates any error from writing the file, unmodified.
pub fn write_report(path: &Path, entries: &[ReportEntry]) -> io::Result<()> {
    let format = ReportFormat::from_path(path);
    let contents = render_report(format, entries);
    debug!(
        path = %path.display(),
        format = ?format,
        entries = entries.len(),
        bytes = contents.len(),
        "writing declaration size report"
    );
    fs::write(path, contents)
}

/// The shared entry template:
///
/// ```text
///     "<key>": {
///         "size": <size>,
///         "type": "<label>"
///     }
/// ```
fn render_entry(entry: &ReportEntry) -> String {
    format!(
        "    \"{key}\": {{\n        \"size\": {size},\n        \"type\": \"{label}\"\n    }}",
        key = sanitize_key(&entry.key),
        size = entry.size,
        label = entry.label,
    )
}

/// Delete quote characters, then double backslashes.
///
/// The order matters: doubling first would leave `\"` sequences for the
/// quote pass to corrupt.
fn sanitize_key(key: &str) -> String {
    let stripped: String = key.chars().filter(|&c| c != '"' && c != '\'').collect();
    stripped.replace('\\', "\\\\")
}
