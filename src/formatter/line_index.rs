#![forbid(unsafe_code)]

//! Byte-offset to line/column mapping
//!
//! clang-format reports edits as byte offsets into the unformatted file;
//! humans and CI annotations want line/column. The index records the byte
//! offset of every line start in one linear scan, then resolves offsets by
//! binary search. It operates on raw bytes so arbitrary offsets can never
//! split a UTF-8 character or panic.

use memchr::memchr_iter;

/// Line-start offsets for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

/// A 1-indexed line/column pair; column is a byte column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl LineIndex {
    pub fn new(source: &[u8]) -> LineIndex {
        let mut line_starts = Vec::with_capacity(source.len() / 32 + 1);
        line_starts.push(0);
        for newline in memchr_iter(b'\n', source) {
            line_starts.push(newline + 1);
        }
        LineIndex { line_starts }
    }

    /// Resolve a byte offset to its position
    ///
    /// Offsets past the end of the file resolve onto the last line.
    pub fn position(&self, offset: usize) -> Position {
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Position {
            line: line as u32 + 1,
            column: (offset - self.line_starts[line]) as u32 + 1,
        }
    }

    /// Number of lines, counting a trailing newline as starting a new line
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
