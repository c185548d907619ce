//! Source location utilities for converting byte offsets to line/column positions
//!
//! Lines are 1-based and columns are 0-based character counts, the convention the
//! diagnostics are built on (`char` in a diagnostic is `column + 1`).

use serde::Serialize;
use std::fmt;

/// Represents a position in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    /// 1-based line number
    pub line: usize,
    /// 0-based column, counted in characters
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The 1-based character index shown to users
    pub fn char_number(&self) -> usize {
        self.column + 1
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.char_number())
    }
}

/// Provides fast conversion from byte offsets to line/column positions
pub struct SourceLocation<'source> {
    source: &'source str,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl<'source> SourceLocation<'source> {
    /// Create a new SourceLocation from source text
    pub fn new(source: &'source str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            source,
            line_starts,
        }
    }

    /// Convert a byte offset to a line/column position
    ///
    /// Offsets past the end clamp to the end of the text.
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let byte_offset = byte_offset.min(self.source.len());
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        // Count UTF-8 lead bytes so offsets inside a character never panic
        let column = self.source.as_bytes()[self.line_starts[line]..byte_offset]
            .iter()
            .filter(|byte| (**byte & 0xC0) != 0x80)
            .count();

        Position::new(line + 1, column)
    }

    /// Position just past the last character
    pub fn end(&self) -> Position {
        self.byte_to_position(self.source.len())
    }
}
