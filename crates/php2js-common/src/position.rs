//! Line/column utilities.
//!
//! The AST carries byte offsets; diagnostics are reported as 1-based
//! line and column numbers. `LineMap` converts between the two.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based line and column in a source file.
///
/// The column counts Unicode scalar values, not bytes, so a line containing
/// `"Åsmund"` reports the same column an editor would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Location { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Line map for offset -> location conversion.
/// Stores the starting offset of each line.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Starting offset of each line (line_starts[0] is always 0)
    line_starts: Vec<u32>,
}

impl LineMap {
    /// Build a line map from source text.
    pub fn build(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut line_starts = vec![0u32];

        for i in memchr::memchr2_iter(b'\n', b'\r', bytes) {
            // \r\n counts once, at the \n
            if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                continue;
            }
            line_starts.push((i + 1) as u32);
        }

        LineMap { line_starts }
    }

    /// Convert a byte offset to a 1-based location.
    pub fn location(&self, offset: u32, source: &str) -> Location {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert_point) => insert_point.saturating_sub(1),
        };

        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        let clamped_end = (offset as usize).min(source.len());
        let start = (line_start as usize).min(clamped_end);
        let column = source
            .get(start..clamped_end)
            .map(|slice| slice.chars().count())
            .unwrap_or(0);

        Location::new(line as u32 + 1, column as u32 + 1)
    }

    /// Text of a 1-based line without its line terminator.
    pub fn line_text<'a>(&self, line: u32, source: &'a str) -> Option<&'a str> {
        let idx = (line as usize).checked_sub(1)?;
        let start = *self.line_starts.get(idx)? as usize;
        let end = self
            .line_starts
            .get(idx + 1)
            .map(|&next| next as usize)
            .unwrap_or(source.len());
        let text = source.get(start..end)?;
        Some(text.trim_end_matches(['\n', '\r']))
    }

    /// Get the number of lines.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
#[path = "../tests/position_tests.rs"]
mod tests;
