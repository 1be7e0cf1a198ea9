//! Matrix module: container adapters for dense, sparse and vector types.

use std::mem::size_of;

use crate::error::MmError;

pub mod dense;
pub mod sparse;
pub use sparse::CsrMatrix;
pub mod vector;
pub use vector::{DenseVector, Orientation};

/// Largest dimension an adapter accepts; Faer indices must fit a signed integer.
pub(crate) const MAX_DIMENSION: usize = isize::MAX as usize;

pub(crate) fn too_large(rows: usize, cols: usize) -> MmError {
    MmError::format(format!("matrix size {rows}x{cols} is too large to allocate"))
}

/// Reject dimensions whose dense storage of `T` cannot be addressed.
pub(crate) fn check_dense_size<T>(rows: usize, cols: usize) -> Result<(), MmError> {
    if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
        return Err(too_large(rows, cols));
    }
    rows.checked_mul(cols)
        .and_then(|cells| cells.checked_mul(size_of::<T>()))
        .filter(|&bytes| bytes <= MAX_DIMENSION)
        .map(|_| ())
        .ok_or_else(|| too_large(rows, cols))
}

/// `len` copies of `value`, or an error if the buffer cannot be allocated.
pub(crate) fn try_filled<T: Clone>(
    len: usize,
    value: T,
    rows: usize,
    cols: usize,
) -> Result<Vec<T>, MmError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| too_large(rows, cols))?;
    buf.resize(len, value);
    Ok(buf)
}
