// Sparse CSR matrix adapter over Faer

use faer::sparse::{
    SparseRowMat,            // owning numeric CSR alias
    SymbolicSparseRowMat,    // owning symbolic CSR alias
};
use faer::traits::ComplexField;
use num_traits::Zero;

use crate::core::traits::{MarketScalar, MatrixSink, MatrixSource};
use crate::error::MmError;
use crate::matrix::{too_large, try_filled, MAX_DIMENSION};

/// Upper bound on the staging reservation taken from a size line's entry count.
const MAX_RESERVE: usize = 1 << 24;

/// Entries collected during a fill, compressed at `end_fill`.
struct Staging<T> {
    triplets: Vec<(usize, usize, T)>,
    skip_zeros: bool,
}

/// Compressed sparse row matrix backed by `faer::sparse::SparseRowMat`.
///
/// As a [`MatrixSink`] it stages entries and compresses them once the fill ends;
/// duplicate coordinates keep the last value written. As a [`MatrixSource`] it yields
/// only the stored entries.
pub struct CsrMatrix<T> {
    inner: SparseRowMat<usize, T>,
    staging: Option<Staging<T>>,
}

impl<T: MarketScalar + ComplexField> CsrMatrix<T> {
    /// Build a CSR from raw row-ptr, col-idx, and values.
    pub fn from_csr(
        nrows: usize,
        ncols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        // Build symbolic structure; `None` means "no separate row_nnz":
        let symbolic = SymbolicSparseRowMat::new_checked(nrows, ncols, row_ptr, None, col_idx);
        let inner = SparseRowMat::new(symbolic, values);
        Self { inner, staging: None }
    }

    /// Empty `nrows x ncols` matrix.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::from_csr(nrows, ncols, vec![0; nrows + 1], Vec::new(), Vec::new())
    }

    /// Build from `(row, col, value)` triplets in any order; later duplicates win.
    pub fn from_triplets(nrows: usize, ncols: usize, mut triplets: Vec<(usize, usize, T)>) -> Self {
        // Stable sort keeps insertion order within a coordinate, so the last one wins.
        triplets.sort_by_key(|&(r, c, _)| (r, c));
        let mut row_ptr = vec![0; nrows + 1];
        let mut col_idx: Vec<usize> = Vec::with_capacity(triplets.len());
        let mut values: Vec<T> = Vec::with_capacity(triplets.len());
        let mut last: Option<(usize, usize)> = None;
        for (r, c, v) in triplets {
            if last == Some((r, c)) {
                if let Some(slot) = values.last_mut() {
                    *slot = v;
                }
                continue;
            }
            last = Some((r, c));
            row_ptr[r + 1] += 1;
            col_idx.push(c);
            values.push(v);
        }
        for i in 0..nrows {
            row_ptr[i + 1] += row_ptr[i];
        }
        Self::from_csr(nrows, ncols, row_ptr, col_idx, values)
    }

    pub fn nrows(&self) -> usize {
        self.inner.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.inner.ncols()
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.inner.as_ref().val().len()
    }

    /// Stored value at `(row, col)`, if any.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        let a = self.inner.as_ref();
        let row_ptr = a.symbolic().row_ptr();
        let range = row_ptr[row]..row_ptr[row + 1];
        let cols = &a.symbolic().col_idx()[range.clone()];
        cols.binary_search(&col).ok().map(|k| a.val()[range.start + k])
    }

    /// Stored entries as `(row, col, value)`, row-major.
    pub fn triplets(&self) -> Vec<(usize, usize, T)> {
        let a = self.inner.as_ref();
        let row_ptr = a.symbolic().row_ptr();
        let col_idx = a.symbolic().col_idx();
        let val = a.val();
        let mut out = Vec::with_capacity(val.len());
        for row in 0..self.nrows() {
            for k in row_ptr[row]..row_ptr[row + 1] {
                out.push((row, col_idx[k], val[k]));
            }
        }
        out
    }

    /// The underlying Faer matrix.
    pub fn as_faer(&self) -> &SparseRowMat<usize, T> {
        &self.inner
    }

    fn begin(
        &mut self,
        rows: usize,
        cols: usize,
        capacity: usize,
        skip_zeros: bool,
    ) -> Result<(), MmError> {
        if cols > MAX_DIMENSION {
            return Err(too_large(rows, cols));
        }
        let len = rows
            .checked_add(1)
            .filter(|&n| n <= MAX_DIMENSION)
            .ok_or_else(|| too_large(rows, cols))?;
        let row_ptr = try_filled(len, 0usize, rows, cols)?;
        self.inner = Self::from_csr(rows, cols, row_ptr, Vec::new(), Vec::new()).inner;
        self.staging = Some(Staging {
            triplets: Vec::with_capacity(capacity.min(MAX_RESERVE)),
            skip_zeros,
        });
        Ok(())
    }
}

impl<T: MarketScalar + ComplexField> Default for CsrMatrix<T> {
    fn default() -> Self {
        Self::zeros(0, 0)
    }
}

impl<T: MarketScalar + ComplexField> MatrixSink for CsrMatrix<T> {
    type Scalar = T;

    fn begin_dense(&mut self, rows: usize, cols: usize) -> Result<(), MmError> {
        self.begin(rows, cols, 0, true)
    }

    fn begin_sparse(&mut self, rows: usize, cols: usize, nnz: usize) -> Result<(), MmError> {
        self.begin(rows, cols, nnz, false)
    }

    fn set_value(&mut self, row: usize, col: usize, value: T) -> Result<(), MmError> {
        match self.staging.as_mut() {
            Some(staging) => {
                if !(staging.skip_zeros && Zero::is_zero(&value)) {
                    staging.triplets.push((row, col, value));
                }
                Ok(())
            }
            None => Err(MmError::format("set_value called outside of a fill")),
        }
    }

    fn end_fill(&mut self) -> Result<(), MmError> {
        if let Some(staging) = self.staging.take() {
            let (rows, cols) = (self.nrows(), self.ncols());
            *self = Self::from_triplets(rows, cols, staging.triplets);
        }
        Ok(())
    }
}

impl<T: MarketScalar + ComplexField> MatrixSource for CsrMatrix<T> {
    type Scalar = T;

    fn dimensions(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    fn non_zero_count(&self) -> usize {
        self.nnz()
    }

    fn get_value(&self, row: usize, col: usize) -> T {
        self.get(row, col).unwrap_or_else(<T as Zero>::zero)
    }

    fn for_each_entry<F>(&self, mut f: F) -> Result<(), MmError>
    where
        F: FnMut(usize, usize, T) -> Result<(), MmError>,
    {
        let mut entries = self.triplets();
        entries.sort_by_key(|&(r, c, _)| (c, r));
        for (r, c, v) in entries {
            f(r, c, v)?;
        }
        Ok(())
    }
}
