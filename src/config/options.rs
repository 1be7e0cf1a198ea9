//! Read and write options.
//!
//! `ReadOptions` selects how strictly truncated input is treated; `WriteOptions`
//! carries the layout hint and the attribution comment placed after the banner.

use crate::format::Layout;

/// Attribution comment written by default (without the leading `%`).
pub const DEFAULT_COMMENT: &str = "Created by matmarket";

/// Reader policy.
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Fail with a format error when input ends before every declared entry was read.
    /// Off by default: a short file fills what it has.
    pub strict_entry_count: bool,
}

impl ReadOptions {
    pub fn strict() -> Self {
        Self { strict_entry_count: true }
    }

    pub fn with_strict_entry_count(mut self, strict: bool) -> Self {
        self.strict_entry_count = strict;
        self
    }
}

/// Writer layout and attribution.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Array (dense, no coordinates) or coordinate output.
    pub layout: Layout,

    /// Comment line text, `None` to omit the line
    pub comment: Option<String>,
}

impl WriteOptions {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            comment: Some(DEFAULT_COMMENT.to_string()),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn without_comment(mut self) -> Self {
        self.comment = None;
        self
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self::new(Layout::Array)
    }
}

impl From<Layout> for WriteOptions {
    fn from(layout: Layout) -> Self {
        Self::new(layout)
    }
}
