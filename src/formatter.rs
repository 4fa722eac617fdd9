//! clang-format invocation and replacement-report handling

pub mod clang;
pub mod diagnostics;
pub mod line_index;
pub mod replacements;

pub use clang::{ClangFormat, Version};
pub use diagnostics::{diagnostics_for, Diagnostic};
pub use line_index::{LineIndex, Position};
pub use replacements::{Replacement, ReplacementSet};
