//! Dense-matrix adapter on top of Faer.
//!
//! Implements [`MatrixSink`] and [`MatrixSource`] for `faer::Mat<T>`, so any Faer
//! matrix can be filled from either layout and written out cell by cell.

use faer::Mat;

use crate::core::traits::{MarketScalar, MatrixSink, MatrixSource};
use crate::error::MmError;
use crate::matrix::check_dense_size;

impl<T: MarketScalar> MatrixSink for Mat<T> {
    type Scalar = T;

    fn begin_dense(&mut self, rows: usize, cols: usize) -> Result<(), MmError> {
        check_dense_size::<T>(rows, cols)?;
        *self = Mat::from_fn(rows, cols, |_, _| T::zero());
        Ok(())
    }

    fn begin_sparse(&mut self, rows: usize, cols: usize, _nnz: usize) -> Result<(), MmError> {
        check_dense_size::<T>(rows, cols)?;
        // Cells without an entry must read as zero.
        *self = Mat::from_fn(rows, cols, |_, _| T::zero());
        Ok(())
    }

    fn set_value(&mut self, row: usize, col: usize, value: T) -> Result<(), MmError> {
        self[(row, col)] = value;
        Ok(())
    }
}

impl<T: MarketScalar> MatrixSource for Mat<T> {
    type Scalar = T;

    fn dimensions(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    fn get_value(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }
}
