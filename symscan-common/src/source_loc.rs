//! Source location tracking for error reporting
//!
//! This module provides types for tracking locations in source files.
//! Locations also carry a character offset so that the exact source text
//! of a syntax node can be recovered later (reports, recursion detection).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A location in a source file (line and column are 1-based, offset is a
/// 0-based character index into the source)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub filename: String,
    pub line: u32,
    pub column: u32,
    pub offset: usize,
}

impl SourceLocation {
    /// Create a location with filename
    pub fn new(filename: &str, line: u32, column: u32, offset: usize) -> Self {
        Self {
            filename: filename.to_string(),
            line,
            column,
            offset,
        }
    }

    /// Location in an unnamed input, at offset 0
    pub fn new_simple(line: u32, column: u32) -> Self {
        Self {
            filename: "<input>".to_string(),
            line,
            column,
            offset: 0,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}

/// A span in a source file (from start to end location, end exclusive)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl SourceSpan {
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        Self { start, end }
    }

    /// Create a span from a single location
    pub fn from_location(location: SourceLocation) -> Self {
        Self {
            end: location.clone(),
            start: location,
        }
    }

    /// Line of the first character covered by this span
    pub fn line(&self) -> u32 {
        self.start.line
    }

    /// Cut the text covered by this span out of `source`.
    ///
    /// Offsets are character based, so this is safe for non-ASCII input.
    /// Out-of-range spans are clamped rather than rejected.
    pub fn slice(&self, source: &[char]) -> String {
        let end = self.end.offset.min(source.len());
        let start = self.start.offset.min(end);
        source[start..end].iter().collect()
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.filename != self.end.filename {
            write!(f, "{} to {}", self.start, self.end)
        } else if self.start.line == self.end.line {
            if self.start.column == self.end.column {
                write!(f, "{}:{}", self.start.filename, self.start.line)
            } else {
                write!(
                    f,
                    "{}:{}:{}-{}",
                    self.start.filename, self.start.line, self.start.column, self.end.column
                )
            }
        } else {
            write!(
                f,
                "{}:{}:{}-{}:{}",
                self.start.filename, self.start.line, self.start.column, self.end.line, self.end.column
            )
        }
    }
}

/// Helper for creating source locations while scanning characters
#[derive(Debug, Clone)]
pub struct SourceTracker {
    filename: String,
    line: u32,
    column: u32,
    offset: usize,
}

impl SourceTracker {
    pub fn new(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Get current location
    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(&self.filename, self.line, self.column, self.offset)
    }

    /// Number of characters consumed so far
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Advance by one character
    pub fn advance(&mut self, ch: char) {
        self.offset += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}
