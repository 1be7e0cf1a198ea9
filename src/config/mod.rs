//! Reader and writer configuration.

pub mod options;

pub use options::{ReadOptions, WriteOptions, DEFAULT_COMMENT};
