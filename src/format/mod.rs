//! Matrix Market format model: banner attributes and dimensions.
//!
//! The banner line of a Matrix Market file declares four attributes:
//!
//! ```text
//! %%MatrixMarket matrix <layout> <scalar> <symmetry>
//! ```
//!
//! Each attribute is an enum here with its exact wire spelling exposed through
//! `FromStr` and `Display`. Matching is case-sensitive.

use std::fmt;
use std::str::FromStr;

use crate::error::MmError;

pub mod header;
pub mod scalar;
pub mod tokenizer;

pub use header::{parse_banner, parse_size};
pub use scalar::{check_token_count, format_real, format_scalar, parse_real, parse_scalar, ScalarValue};
pub use tokenizer::{tokenize, LineReader};

/// Fixed first token of every banner.
pub const BANNER_MARKER: &str = "%%MatrixMarket";
/// The only object kind supported.
pub const OBJECT_MATRIX: &str = "matrix";
/// Lines starting with this character are comments.
pub const COMMENT_MARKER: char = '%';

/// Storage layout of the entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Dense, every cell in column-major order, no coordinates.
    Array,
    /// Sparse, one `row col value` line per stored entry.
    Coordinate,
}

/// Scalar encoding of the entry values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// No value tokens; the presence of an entry is its value.
    Pattern,
    Integer,
    Real,
    /// Two tokens: real part then imaginary part.
    Complex,
}

/// Declared symmetry class. Parsed and validated, never expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symmetry {
    General,
    Symmetric,
    Hermitian,
    SkewSymmetric,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Array => "array",
            Layout::Coordinate => "coordinate",
        }
    }
}

impl ScalarKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarKind::Pattern => "pattern",
            ScalarKind::Integer => "integer",
            ScalarKind::Real => "real",
            ScalarKind::Complex => "complex",
        }
    }

    /// Number of value tokens an entry of this kind carries.
    pub fn token_count(self) -> usize {
        match self {
            ScalarKind::Pattern => 0,
            ScalarKind::Integer | ScalarKind::Real => 1,
            ScalarKind::Complex => 2,
        }
    }
}

impl Symmetry {
    pub fn as_str(self) -> &'static str {
        match self {
            Symmetry::General => "general",
            Symmetry::Symmetric => "symmetric",
            Symmetry::Hermitian => "hermitian",
            Symmetry::SkewSymmetric => "skew-symmetric",
        }
    }
}

impl FromStr for Layout {
    type Err = MmError;

    fn from_str(s: &str) -> Result<Self, MmError> {
        match s {
            "array" => Ok(Layout::Array),
            "coordinate" => Ok(Layout::Coordinate),
            _ => Err(MmError::format(format!("storage format '{s}' invalid"))),
        }
    }
}

impl FromStr for ScalarKind {
    type Err = MmError;

    fn from_str(s: &str) -> Result<Self, MmError> {
        match s {
            "pattern" => Ok(ScalarKind::Pattern),
            "integer" => Ok(ScalarKind::Integer),
            "real" => Ok(ScalarKind::Real),
            "complex" => Ok(ScalarKind::Complex),
            _ => Err(MmError::format(format!("data type '{s}' invalid"))),
        }
    }
}

impl FromStr for Symmetry {
    type Err = MmError;

    fn from_str(s: &str) -> Result<Self, MmError> {
        match s {
            "general" => Ok(Symmetry::General),
            "symmetric" => Ok(Symmetry::Symmetric),
            "hermitian" => Ok(Symmetry::Hermitian),
            "skew-symmetric" => Ok(Symmetry::SkewSymmetric),
            _ => Err(MmError::format(format!("symmetry '{s}' invalid"))),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parsed banner line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDeclaration {
    pub layout: Layout,
    pub scalar: ScalarKind,
    pub symmetry: Symmetry,
}

impl FormatDeclaration {
    pub fn new(layout: Layout, scalar: ScalarKind, symmetry: Symmetry) -> Self {
        Self { layout, scalar, symmetry }
    }
}

/// Renders the full banner line, without a trailing newline.
impl fmt::Display for FormatDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{BANNER_MARKER} {OBJECT_MATRIX} {} {} {}",
            self.layout, self.scalar, self.symmetry
        )
    }
}

/// Matrix size as given by the size line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
    /// Entry count; `rows * cols` for array layout.
    pub nnz: usize,
}

impl Dimensions {
    pub fn dense(rows: usize, cols: usize) -> Self {
        Self { rows, cols, nnz: rows.saturating_mul(cols) }
    }

    pub fn sparse(rows: usize, cols: usize, nnz: usize) -> Self {
        Self { rows, cols, nnz }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_spellings_round_trip() {
        for layout in [Layout::Array, Layout::Coordinate] {
            assert_eq!(layout.as_str().parse::<Layout>().unwrap(), layout);
        }
        for kind in [ScalarKind::Pattern, ScalarKind::Integer, ScalarKind::Real, ScalarKind::Complex] {
            assert_eq!(kind.to_string().parse::<ScalarKind>().unwrap(), kind);
        }
        for sym in [
            Symmetry::General,
            Symmetry::Symmetric,
            Symmetry::Hermitian,
            Symmetry::SkewSymmetric,
        ] {
            assert_eq!(sym.to_string().parse::<Symmetry>().unwrap(), sym);
        }
    }

    #[test]
    fn enum_matching_is_case_sensitive() {
        assert!("Array".parse::<Layout>().is_err());
        assert!("REAL".parse::<ScalarKind>().is_err());
        assert!("Skew-Symmetric".parse::<Symmetry>().is_err());
    }

    #[test]
    fn declaration_renders_banner() {
        let decl = FormatDeclaration::new(Layout::Coordinate, ScalarKind::Complex, Symmetry::Hermitian);
        assert_eq!(decl.to_string(), "%%MatrixMarket matrix coordinate complex hermitian");
    }

    #[test]
    fn dense_dimensions_imply_entry_count() {
        let d = Dimensions::dense(3, 4);
        assert_eq!(d.nnz, 12);
        assert!(d.contains(2, 3));
        assert!(!d.contains(3, 0));
    }
}
