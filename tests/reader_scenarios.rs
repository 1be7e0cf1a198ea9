//! Reader tests: layouts, scalar kinds, comment handling and error reporting.
//!
//! Inputs are small inline documents read into `faer::Mat`, `CsrMatrix` and
//! `DenseVector` adapters.

use std::io::Cursor;

use approx::assert_relative_eq;
use faer::Mat;
use matmarket::{
    read, read_from_path, read_with, CsrMatrix, DenseVector, Layout, MarketScalar, MatrixSource,
    MmError, Orientation, ReadOptions, ScalarKind, Symmetry,
};
use num_complex::Complex;

fn empty<T: MarketScalar>() -> Mat<T> {
    Mat::from_fn(0, 0, |_, _| T::zero())
}

/// Shape plus every cell, column-major.
fn cells<T: MarketScalar>(m: &Mat<T>) -> (usize, usize, Vec<T>) {
    let mut values = Vec::new();
    m.for_each_entry(|_, _, v| {
        values.push(v);
        Ok(())
    })
    .unwrap();
    (m.nrows(), m.ncols(), values)
}

/// Array input fills column by column.
#[test]
fn array_real_fills_column_major() {
    let text = "%%MatrixMarket matrix array real general\n3 2\n1.0\n2.0\n3.0\n4.0\n5.0\n6.0\n";
    let mut m = empty::<f64>();
    let summary = read(&mut m, Cursor::new(text)).unwrap();

    assert_eq!(summary.declaration.layout, Layout::Array);
    assert_eq!(summary.entries_read, 6);
    assert!(summary.complete);
    assert_eq!((m.nrows(), m.ncols()), (3, 2));
    assert_eq!(m[(0, 0)], 1.0);
    assert_eq!(m[(1, 0)], 2.0);
    assert_eq!(m[(2, 0)], 3.0);
    assert_eq!(m[(0, 1)], 4.0);
    assert_eq!(m[(1, 1)], 5.0);
    assert_eq!(m[(2, 1)], 6.0);
}

/// A single coordinate entry lands at its 0-based position; everything else is zero.
#[test]
fn coordinate_single_entry_into_sparse() {
    let text = "%%MatrixMarket matrix coordinate real general\n2 2 1\n2 2 7.5\n";
    let mut m = CsrMatrix::<f64>::default();
    read(&mut m, Cursor::new(text)).unwrap();

    assert_eq!(m.dimensions(), (2, 2));
    assert_eq!(m.non_zero_count(), 1);
    assert_eq!(m.get(1, 1), Some(7.5));
    assert_eq!(m.get_value(0, 0), 0.0);
    assert_eq!(m.get_value(0, 1), 0.0);
    assert_eq!(m.get_value(1, 0), 0.0);
}

#[test]
fn coordinate_into_dense_zeroes_missing_cells() {
    let text = "%%MatrixMarket matrix coordinate real general\n3 4 2\n2 3 5.0\n1 1 -1\n";
    let mut m = Mat::from_fn(1, 1, |_, _| 42.0f64);
    read(&mut m, Cursor::new(text)).unwrap();
    assert_eq!(m[(1, 2)], 5.0);
    assert_eq!(m[(0, 0)], -1.0);
    assert_eq!(m[(2, 3)], 0.0);
}

/// Comment lines anywhere before the size line or among the entries are ignored.
#[test]
fn comment_lines_are_skipped_everywhere() {
    let plain = "%%MatrixMarket matrix coordinate integer general\n2 2 2\n1 1 3\n2 1 4\n";
    let commented = "%%MatrixMarket matrix coordinate integer general\n\
                     %first\n%second\n%\n2 2 2\n%between\n%again\n1 1 3\n%inner\n2 1 4\n";

    let mut a = empty::<i64>();
    let mut b = empty::<i64>();
    let sa = read(&mut a, Cursor::new(plain)).unwrap();
    let sb = read(&mut b, Cursor::new(commented)).unwrap();

    assert_eq!(sa.dimensions, sb.dimensions);
    assert_eq!(cells(&a), cells(&b));
    assert_eq!(b[(1, 0)], 4);
}

#[test]
fn array_real_general_reference_values() {
    let text = "%%MatrixMarket matrix array real general\n\
                %reference data\n\
                3 4\n\
                -1.7874030527951525\n2.8017662727841071\n-7.3458785314655870\n\
                -2.4010370783465085\n9.1842295135688801\n4.4479713459839871\n\
                9.0628790375549286\n-3.7799237041860287\n5.5080306442042399\n\
                -7.3354743327476690\n-3.3000793596121447\n5.7081113423916179\n";

    let mut d = empty::<f64>();
    read(&mut d, Cursor::new(text)).unwrap();
    assert_eq!(d[(0, 0)], -1.7874030527951525);
    assert_eq!(d[(2, 1)], 4.4479713459839871);
    assert_eq!(d[(2, 3)], 5.7081113423916179);

    let mut f = empty::<f32>();
    read(&mut f, Cursor::new(text)).unwrap();
    assert_eq!(f[(1, 2)], -3.7799237041860287f32);
    assert_eq!(f[(0, 3)], -7.3354743327476690f32);
}

#[test]
fn integer_entries_read_into_real_and_integer_matrices() {
    let text = "%%MatrixMarket matrix array integer general\n2 2\n-9\n-5\n-1\n5\n";
    let mut d = empty::<f64>();
    read(&mut d, Cursor::new(text)).unwrap();
    assert_eq!(d[(1, 0)], -5.0);

    let mut i = empty::<i32>();
    read(&mut i, Cursor::new(text)).unwrap();
    assert_eq!(i[(0, 1)], -1);
    assert_eq!(i[(1, 1)], 5);
}

#[test]
fn real_entries_do_not_truncate_into_integers() {
    let text = "%%MatrixMarket matrix array real general\n1 1\n-1.78\n";
    let mut i = empty::<i32>();
    let err = read(&mut i, Cursor::new(text)).unwrap_err();
    match err {
        MmError::FormatError { line_number, line, .. } => {
            assert_eq!(line_number, 3);
            assert_eq!(line, "-1.78");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn complex_array_entries() {
    let text = "%%MatrixMarket matrix array complex general\n2 1\n\
                6.3475699384495456 7.2543707383778369\n-8.6063311685072641 2.5072858827017797\n";
    let mut m = empty::<Complex<f64>>();
    let summary = read(&mut m, Cursor::new(text)).unwrap();
    assert_eq!(summary.declaration.scalar, ScalarKind::Complex);
    assert_eq!(m[(0, 0)], Complex::new(6.3475699384495456, 7.2543707383778369));
    assert_eq!(m[(1, 0)].im, 2.5072858827017797);
}

#[test]
fn complex_coordinate_entries_in_single_precision() {
    let text = "%%MatrixMarket matrix coordinate complex general\n2 2 1\n1 2 0.5 -0.25\n";
    let mut m = CsrMatrix::<Complex<f32>>::default();
    read(&mut m, Cursor::new(text)).unwrap();
    let v = m.get(0, 1).unwrap();
    assert_relative_eq!(v.re, 0.5f32);
    assert_relative_eq!(v.im, -0.25f32);
}

#[test]
fn pattern_entries_store_one() {
    let text = "%%MatrixMarket matrix coordinate pattern general\n3 3 2\n1 1\n3 2\n";
    let mut m = CsrMatrix::<f64>::default();
    read(&mut m, Cursor::new(text)).unwrap();
    assert_eq!(m.triplets(), vec![(0, 0, 1.0), (2, 1, 1.0)]);
}

#[test]
fn pattern_requires_coordinate_layout() {
    let text = "%%MatrixMarket matrix array pattern general\n1 1\n\n";
    let mut m = empty::<f64>();
    assert!(read(&mut m, Cursor::new(text)).unwrap_err().is_format());
}

/// Duplicate coordinates overwrite; they are not summed.
#[test]
fn duplicate_coordinates_last_write_wins() {
    let text = "%%MatrixMarket matrix coordinate real general\n2 2 3\n1 1 1.0\n1 1 2.0\n2 2 3.0\n";
    let mut sparse = CsrMatrix::<f64>::default();
    read(&mut sparse, Cursor::new(text)).unwrap();
    assert_eq!(sparse.get(0, 0), Some(2.0));
    assert_eq!(sparse.non_zero_count(), 2);

    let mut dense = empty::<f64>();
    read(&mut dense, Cursor::new(text)).unwrap();
    assert_eq!(dense[(0, 0)], 2.0);
}

#[test]
fn symmetric_banner_is_not_expanded() {
    let text = "%%MatrixMarket matrix coordinate real symmetric\n2 2 2\n1 1 4.0\n2 1 1.5\n";
    let mut m = empty::<f64>();
    let summary = read(&mut m, Cursor::new(text)).unwrap();
    assert_eq!(summary.declaration.symmetry, Symmetry::Symmetric);
    assert_eq!(m[(1, 0)], 1.5);
    assert_eq!(m[(0, 1)], 0.0);
}

#[test]
fn misspelled_banner_fails_without_touching_container() {
    let banners = [
        "%%MatrixMarket matrix coordinate real",
        "%%MatrixMarket matrix coordinate real general extra",
        "%%MatrixMarket martix coordinate real general",
        "%%MatrixMarket matrix coordinates real general",
        "%%MatrixMarket matrix coordinate cplex general",
        "%%MatrixMarket matrix coordinate real anti-symmetric",
    ];
    for banner in banners {
        let text = format!("{banner}\n2 2 1\n1 1 1.0\n");
        let mut m = Mat::from_fn(2, 2, |_, _| 9.0f64);
        let err = read(&mut m, Cursor::new(text)).unwrap_err();
        assert!(err.is_format(), "{banner}: {err}");
        assert_eq!(cells(&m), (2, 2, vec![9.0; 4]), "{banner}");
    }
}

#[test]
fn empty_input_is_a_format_error() {
    let mut m = empty::<f64>();
    assert!(read(&mut m, Cursor::new("")).unwrap_err().is_format());
}

#[test]
fn malformed_size_line_is_rejected() {
    for size in ["3", "3 2 1", "3 x", "-1 2"] {
        let text = format!("%%MatrixMarket matrix array real general\n{size}\n");
        let mut m = empty::<f64>();
        assert!(read(&mut m, Cursor::new(text)).unwrap_err().is_format(), "{size}");
    }
}

#[test]
fn malformed_entry_reports_line() {
    let text = "%%MatrixMarket matrix coordinate real general\n%c\n2 2 2\n1 1 1.0\n2 2 abc\n";
    let mut m = empty::<f64>();
    let err = read(&mut m, Cursor::new(text)).unwrap_err();
    match err {
        MmError::FormatError { line_number, line, message } => {
            assert_eq!(line_number, 5);
            assert_eq!(line, "2 2 abc");
            assert!(message.contains("abc"), "{message}");
        }
        other => panic!("unexpected {other:?}"),
    }
    // No rollback: the entry before the bad line is kept.
    assert_eq!(m[(0, 0)], 1.0);
}

#[test]
fn coordinates_outside_the_matrix_are_rejected() {
    for entry in ["3 1 1.0", "1 0 1.0", "0 1 1.0"] {
        let text = format!("%%MatrixMarket matrix coordinate real general\n2 2 1\n{entry}\n");
        let mut m = empty::<f64>();
        assert!(read(&mut m, Cursor::new(text)).unwrap_err().is_format(), "{entry}");
    }
}

#[test]
fn truncated_input_is_permissive_by_default() {
    let text = "%%MatrixMarket matrix coordinate real general\n2 2 3\n1 1 1.0\n";
    let mut m = empty::<f64>();
    let summary = read(&mut m, Cursor::new(text)).unwrap();
    assert_eq!(summary.entries_read, 1);
    assert!(!summary.complete);
    assert_eq!(m[(0, 0)], 1.0);
}

#[test]
fn truncated_input_fails_when_strict() {
    let coordinate = "%%MatrixMarket matrix coordinate real general\n2 2 3\n1 1 1.0\n";
    let array = "%%MatrixMarket matrix array real general\n2 2\n1\n2\n3\n";
    for text in [coordinate, array] {
        let mut m = empty::<f64>();
        let err = read_with(&mut m, Cursor::new(text), &ReadOptions::strict()).unwrap_err();
        assert!(err.to_string().contains("entries"), "{err}");
    }
}

#[test]
fn extra_lines_after_last_entry_are_ignored() {
    let text = "%%MatrixMarket matrix coordinate real general\n1 1 1\n1 1 2.0\n1 1 9.0\n";
    let mut m = empty::<f64>();
    read(&mut m, Cursor::new(text)).unwrap();
    assert_eq!(m[(0, 0)], 2.0);
}

#[test]
fn column_file_into_either_vector_orientation() {
    let text = "%%MatrixMarket matrix array real general\n3 1\n\
                -1.7874030527951525\n2.8017662727841071\n-7.3458785314655870\n";
    let mut v = DenseVector::<f64>::default();
    read(&mut v, Cursor::new(text)).unwrap();
    assert_eq!(v.orientation(), Orientation::Column);
    assert_eq!(v.as_slice(), &[-1.7874030527951525, 2.8017662727841071, -7.3458785314655870]);

    let row = v.to_row();
    assert_eq!(row.ncols(), 3);
    assert_eq!(row[1], 2.8017662727841071);
}

#[test]
fn row_file_into_vector() {
    let text = "%%MatrixMarket matrix coordinate real general\n1 4 2\n1 2 -2.5\n1 4 9.0\n";
    let mut v = DenseVector::<f64>::default();
    read(&mut v, Cursor::new(text)).unwrap();
    assert_eq!(v.orientation(), Orientation::Row);
    assert_eq!(v.as_slice(), &[0.0, -2.5, 0.0, 9.0]);
}

#[test]
fn matrix_file_into_vector_is_a_shape_error() {
    let text = "%%MatrixMarket matrix array real general\n3 4\n";
    let mut v = DenseVector::<f64>::default();
    let err = read(&mut v, Cursor::new(text)).unwrap_err();
    assert!(matches!(err, MmError::ShapeError { rows: 3, cols: 4 }));
}

/// Size lines that parse but cannot be allocated fail through `Result`.
#[test]
fn huge_size_lines_are_errors_not_panics() {
    let sparse = "%%MatrixMarket matrix coordinate real general\n18446744073709551615 1 0\n";
    let err = read(&mut CsrMatrix::<f64>::default(), Cursor::new(sparse)).unwrap_err();
    assert!(err.is_format(), "{err}");

    let wide = "%%MatrixMarket matrix coordinate real general\n1 18446744073709551615 0\n";
    let err = read(&mut DenseVector::<f64>::default(), Cursor::new(wide)).unwrap_err();
    assert!(err.to_string().contains("too large"), "{err}");
    assert!(read(&mut empty::<f64>(), Cursor::new(wide)).unwrap_err().is_format());
    assert!(read(&mut CsrMatrix::<f64>::default(), Cursor::new(wide)).unwrap_err().is_format());

    let dense = "%%MatrixMarket matrix array real general\n4294967296 4294967296\n";
    assert!(read(&mut empty::<f64>(), Cursor::new(dense)).unwrap_err().is_format());
}

/// Single-precision targets parse each token at their own width.
#[test]
fn f32_values_are_rounded_once() {
    let text = "%%MatrixMarket matrix coordinate complex general\n1 1 1\n1 1 1.00000005960464477550 0\n";
    let mut m = empty::<Complex<f32>>();
    read(&mut m, Cursor::new(text)).unwrap();
    assert_eq!(m[(0, 0)], Complex::new(1.000_000_1f32, 0.0));
}

#[test]
fn reads_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.mtx");
    std::fs::write(&path, "%%MatrixMarket matrix coordinate real general\n2 2 1\n2 1 3.25\n").unwrap();

    let mut m = empty::<f64>();
    read_from_path(&mut m, &path).unwrap();
    assert_eq!(m[(1, 0)], 3.25);
}

#[test]
fn missing_file_is_a_resource_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.mtx");
    let mut m = empty::<f64>();
    match read_from_path(&mut m, &path).unwrap_err() {
        MmError::ResourceError { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected {other:?}"),
    }
}
