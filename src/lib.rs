//! matmarket: Matrix Market I/O over Faer
//!
//! This crate reads and writes the Matrix Market text format (`.mtx`) for dense and
//! sparse matrices and vectors. Parsing is decoupled from storage: the reader feeds any
//! [`MatrixSink`] and the writer drains any [`MatrixSource`], so a container type plugs
//! in by implementing those two traits once. Adapters for `faer::Mat`, a Faer-backed
//! [`CsrMatrix`] and [`DenseVector`] are included.
//!
//! ```no_run
//! use faer::Mat;
//! use matmarket::{read_from_path, write_to_path, Layout};
//!
//! let mut a = Mat::<f64>::zeros(0, 0);
//! let summary = read_from_path(&mut a, "a.mtx")?;
//! println!("{:?}", summary.declaration);
//! write_to_path(&a, "b.mtx", Layout::Coordinate)?;
//! # Ok::<(), matmarket::MmError>(())
//! ```
//!
//! Symmetric, hermitian and skew-symmetric files are accepted but stored exactly as
//! listed; the other triangle is not filled in.

pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod market;
pub mod matrix;

// Re-exports for convenience
pub use crate::config::{ReadOptions, WriteOptions};
pub use crate::core::{MarketScalar, MatrixSink, MatrixSource};
pub use crate::error::MmError;
pub use crate::format::{Dimensions, FormatDeclaration, Layout, ScalarKind, ScalarValue, Symmetry};
pub use crate::market::{
    read, read_from_path, read_from_path_with, read_with, write, write_to_path,
    write_to_path_with, write_with, MarketReader, ReadState, ReadSummary,
};
pub use crate::matrix::{CsrMatrix, DenseVector, Orientation};
