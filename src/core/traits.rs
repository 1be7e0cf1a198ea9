//! Core adapter traits for matmarket.
//!
//! The reader and writer never touch a container's storage directly. A container
//! plugs in by implementing [`MatrixSink`] (to be filled by the reader) and/or
//! [`MatrixSource`] (to be written out), with its element type bound to the wire
//! format through [`MarketScalar`].

use std::fmt::Debug;

use num_traits::{One, Zero};

use crate::error::MmError;
use crate::format::{parse_scalar, ScalarKind, ScalarValue};

/// Element type that can be read from and written to Matrix Market entries.
pub trait MarketScalar: Copy + PartialEq + Debug + Zero + One {
    /// Scalar kind declared in the banner when writing this type.
    const KIND: ScalarKind;
    /// Significant decimal digits needed to round-trip a value exactly.
    const PRECISION: usize;

    /// Convert a decoded entry. `None` if the value has no faithful representation.
    fn from_value(value: ScalarValue) -> Option<Self>;

    /// Decode the value tokens of one entry declared as `kind`.
    ///
    /// `Ok(None)` means the tokens are well formed but the value does not fit `Self`.
    /// The default goes through [`ScalarValue`]; single-precision types override it to
    /// parse their own width directly.
    fn from_tokens(tokens: &[&str], kind: ScalarKind) -> Result<Option<Self>, MmError> {
        parse_scalar(tokens, kind).map(Self::from_value)
    }

    /// Encode as a value of kind [`Self::KIND`].
    fn to_value(self) -> ScalarValue;
}

/// Receives parsed data during a read.
pub trait MatrixSink {
    type Scalar: MarketScalar;

    /// Start an array-layout fill; every cell will be set in column-major order.
    fn begin_dense(&mut self, rows: usize, cols: usize) -> Result<(), MmError>;

    /// Start a coordinate-layout fill. `nnz` is a reservation hint.
    fn begin_sparse(&mut self, rows: usize, cols: usize, nnz: usize) -> Result<(), MmError>;

    /// Store one entry (0-based, already bounds-checked by the reader).
    ///
    /// Duplicate coordinates are not accumulated: the last write wins.
    fn set_value(&mut self, row: usize, col: usize, value: Self::Scalar) -> Result<(), MmError>;

    /// Called once after the last entry.
    fn end_fill(&mut self) -> Result<(), MmError> {
        Ok(())
    }
}

/// Exposes stored data for writing.
pub trait MatrixSource {
    type Scalar: MarketScalar;

    /// `(rows, cols)`.
    fn dimensions(&self) -> (usize, usize);

    /// Number of entries [`for_each_entry`](Self::for_each_entry) yields.
    fn non_zero_count(&self) -> usize {
        let (rows, cols) = self.dimensions();
        rows * cols
    }

    /// Value at `(row, col)`; absent entries read as zero.
    fn get_value(&self, row: usize, col: usize) -> Self::Scalar;

    /// Visit entries in column-major order. The default visits every cell.
    fn for_each_entry<F>(&self, mut f: F) -> Result<(), MmError>
    where
        F: FnMut(usize, usize, Self::Scalar) -> Result<(), MmError>,
    {
        let (rows, cols) = self.dimensions();
        for col in 0..cols {
            for row in 0..rows {
                f(row, col, self.get_value(row, col))?;
            }
        }
        Ok(())
    }
}
