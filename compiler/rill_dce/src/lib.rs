//! Dead-code-elimination support for the Rill JS backend.
//!
//! The backend's DCE pass decides which declarations survive into the
//! emitted bundle. Tuning that pass needs visibility into what dominates
//! output size, so this crate produces the declaration size report: an
//! inventory of every function, property, field, anonymous initializer,
//! and class in the lowered IR forest, with the character length of its
//! canonical rendering as a relative size metric.
//!
//! # Pipeline
//!
//! Three stages, strictly one-directional:
//!
//! 1. [`collect_declarations`]: walk every module fragment and gather the
//!    declarations of interest, deduplicated, in encounter order
//! 2. [`resolve_entries`]: derive a grouping key per declaration (name +
//!    parameter signature + synthetic marker), keep the largest rendering
//!    per key
//! 3. [`write_report`](serialize::write_report): serialize the entries in
//!    the format selected by the output path's extension (`json`, `js`,
//!    or plain lines) and write the file
//!
//! # Known limitation
//!
//! Report keys are sanitized by deleting quote characters rather than
//! escaping them, so two keys that differ only in embedded quotes collide
//! in the serialized report. Existing consumers of the report format
//! depend on the stripped form; see [`serialize`].

mod collect;
mod report;
pub mod serialize;
mod signature;

pub use collect::collect_declarations;
pub use report::{resolve_entries, ReportEntry};
pub use serialize::ReportFormat;
pub use signature::grouping_key;

use std::io;
use std::path::Path;

use rill_ir::{IrArena, ModuleFragment};

/// Compute and write the declaration size report, if a path was given.
///
/// `path` is the report destination; `None` disables the diagnostic and
/// nothing is touched on disk. The format is chosen by the path's
/// extension. An empty `modules` slice produces an empty report, not an
/// error.
///
/// # Errors
///
/// Propagates any I/O error from writing the report file, unmodified.
pub fn dump_declaration_sizes(
    path: Option<&Path>,
    arena: &IrArena,
    modules: &[ModuleFragment],
) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let declarations = collect_declarations(arena, modules);
    let entries = resolve_entries(arena, &declarations);
    serialize::write_report(path, &entries)
}
