//! Dense vector adapter.
//!
//! A Matrix Market file holds a vector as a `1 x n` or `n x 1` matrix. `DenseVector`
//! accepts either shape, remembers which one it was given, and maps the single
//! meaningful coordinate onto its one-dimensional storage: for a row vector the
//! index is the column, for a column vector the row.

use faer::{Col, Row};

use crate::core::traits::{MarketScalar, MatrixSink, MatrixSource};
use crate::error::MmError;
use crate::matrix::try_filled;

/// Which dimension of the matrix carries the vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// `1 x n`
    Row,
    /// `n x 1`
    Column,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DenseVector<T> {
    values: Vec<T>,
    orientation: Orientation,
}

impl<T: MarketScalar> DenseVector<T> {
    pub fn new(values: Vec<T>, orientation: Orientation) -> Self {
        Self { values, orientation }
    }

    pub fn column(values: Vec<T>) -> Self {
        Self::new(values, Orientation::Column)
    }

    pub fn row(values: Vec<T>) -> Self {
        Self::new(values, Orientation::Row)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    /// Copy into a Faer column vector.
    pub fn to_col(&self) -> Col<T> {
        Col::from_fn(self.values.len(), |i| self.values[i])
    }

    /// Copy into a Faer row vector.
    pub fn to_row(&self) -> Row<T> {
        Row::from_fn(self.values.len(), |j| self.values[j])
    }

    fn index(&self, row: usize, col: usize) -> usize {
        match self.orientation {
            Orientation::Row => col,
            Orientation::Column => row,
        }
    }

    fn begin(&mut self, rows: usize, cols: usize) -> Result<(), MmError> {
        if rows != 1 && cols != 1 {
            return Err(MmError::ShapeError { rows, cols });
        }
        let values = try_filled(rows.max(cols), T::zero(), rows, cols)?;
        // A 1 x 1 matrix is taken as a column.
        self.orientation = if rows == 1 && cols != 1 {
            Orientation::Row
        } else {
            Orientation::Column
        };
        self.values = values;
        Ok(())
    }
}

impl<T: MarketScalar> Default for DenseVector<T> {
    fn default() -> Self {
        Self::column(Vec::new())
    }
}

impl<T: MarketScalar> From<Vec<T>> for DenseVector<T> {
    fn from(values: Vec<T>) -> Self {
        Self::column(values)
    }
}

impl<T: MarketScalar> MatrixSink for DenseVector<T> {
    type Scalar = T;

    fn begin_dense(&mut self, rows: usize, cols: usize) -> Result<(), MmError> {
        self.begin(rows, cols)
    }

    fn begin_sparse(&mut self, rows: usize, cols: usize, _nnz: usize) -> Result<(), MmError> {
        self.begin(rows, cols)
    }

    fn set_value(&mut self, row: usize, col: usize, value: T) -> Result<(), MmError> {
        let i = self.index(row, col);
        self.values[i] = value;
        Ok(())
    }
}

impl<T: MarketScalar> MatrixSource for DenseVector<T> {
    type Scalar = T;

    fn dimensions(&self) -> (usize, usize) {
        match self.orientation {
            Orientation::Row => (1, self.values.len()),
            Orientation::Column => (self.values.len(), 1),
        }
    }

    fn get_value(&self, row: usize, col: usize) -> T {
        self.values[self.index(row, col)]
    }
}
