use std::path::PathBuf;

use thiserror::Error;

// Unified error type for matmarket

#[derive(Error, Debug)]
pub enum MmError {
    #[error("format error at line {line_number}: {message} (line: {line:?})")]
    FormatError {
        message: String,
        line_number: usize,
        line: String,
    },
    #[error("shape error: {rows}x{cols} is not a vector")]
    ShapeError { rows: usize, cols: usize },
    #[error("i/o error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("cannot open {path:?}: {source}")]
    ResourceError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MmError {
    /// Format violation with no line context (codec and header helpers).
    pub fn format(message: impl Into<String>) -> Self {
        MmError::FormatError {
            message: message.into(),
            line_number: 0,
            line: String::new(),
        }
    }

    /// Attach the offending line to a format error. Other kinds pass through unchanged.
    pub fn at_line(self, number: usize, text: &str) -> Self {
        match self {
            MmError::FormatError { message, .. } => MmError::FormatError {
                message,
                line_number: number,
                line: text.to_string(),
            },
            other => other,
        }
    }

    pub fn is_format(&self) -> bool {
        matches!(self, MmError::FormatError { .. })
    }

    pub fn is_shape(&self) -> bool {
        matches!(self, MmError::ShapeError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_line_only_touches_format_errors() {
        let e = MmError::format("bad token").at_line(7, "1 2 x");
        match e {
            MmError::FormatError { message, line_number, line } => {
                assert_eq!(message, "bad token");
                assert_eq!(line_number, 7);
                assert_eq!(line, "1 2 x");
            }
            other => panic!("unexpected {other:?}"),
        }

        let shape = MmError::ShapeError { rows: 3, cols: 4 }.at_line(2, "3 4");
        assert!(shape.is_shape());
        assert_eq!(shape.to_string(), "shape error: 3x4 is not a vector");
    }
}
