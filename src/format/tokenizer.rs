//! Line reading and whitespace tokenization.

use std::io::BufRead;

use crate::error::MmError;
use crate::format::COMMENT_MARKER;

/// Split a line on runs of spaces, tabs, carriage returns and newlines.
///
/// Leading and trailing delimiters are ignored; a blank line yields no tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split([' ', '\t', '\r', '\n'])
        .filter(|t| !t.is_empty())
        .collect()
}

/// Pulls lines from a buffered stream, keeping the current line number for diagnostics.
pub struct LineReader<R> {
    input: R,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(input: R) -> Self {
        Self { input, line_number: 0 }
    }

    /// 1-based number of the last line returned (0 before the first read).
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Next raw line with its line terminator removed, or `None` at end of stream.
    pub fn next_line(&mut self) -> Result<Option<String>, MmError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        while buf.ends_with(['\n', '\r']) {
            buf.pop();
        }
        Ok(Some(buf))
    }

    /// Next line whose first character is not the comment marker.
    pub fn next_data_line(&mut self) -> Result<Option<String>, MmError> {
        while let Some(line) = self.next_line()? {
            if !line.starts_with(COMMENT_MARKER) {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    pub fn into_inner(self) -> R {
        self.input
    }
}
