//! Turning replacement reports into positioned diagnostics

use crate::formatter::line_index::{LineIndex, Position};
use crate::formatter::replacements::ReplacementSet;

/// One format error: where it is, what is there, what should be there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub position: Position,
    /// The bytes currently in the file (lossy UTF-8 for display)
    pub found: String,
    /// The text clang-format wants instead
    pub expected: String,
}

/// Resolve every replacement in `set` against the file's contents
///
/// Spans reaching past the end of the file are clamped rather than
/// rejected; the report and the file can disagree if the file changed
/// between the formatter run and the read.
pub fn diagnostics_for(source: &[u8], set: &ReplacementSet) -> Vec<Diagnostic> {
    let index = LineIndex::new(source);
    set.replacements
        .iter()
        .map(|r| {
            let start = r.offset.min(source.len());
            let end = r.offset.saturating_add(r.length).min(source.len());
            Diagnostic {
                position: index.position(start),
                found: String::from_utf8_lossy(&source[start..end]).into_owned(),
                expected: r.text.clone(),
            }
        })
        .collect()
}
