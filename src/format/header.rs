//! Banner and size line parsing.

use crate::error::MmError;
use crate::format::tokenizer::tokenize;
use crate::format::{BANNER_MARKER, Dimensions, FormatDeclaration, Layout, OBJECT_MATRIX};

/// Parse `%%MatrixMarket matrix <layout> <scalar> <symmetry>`.
pub fn parse_banner(line: &str) -> Result<FormatDeclaration, MmError> {
    let tokens = tokenize(line);
    if tokens.len() != 5 {
        return Err(MmError::format(format!(
            "banner must have 5 tokens, found {}",
            tokens.len()
        )));
    }
    if tokens[0] != BANNER_MARKER {
        return Err(MmError::format(format!(
            "banner marker '{}' invalid, expected '{BANNER_MARKER}'",
            tokens[0]
        )));
    }
    if tokens[1] != OBJECT_MATRIX {
        return Err(MmError::format(format!(
            "object '{}' invalid, expected '{OBJECT_MATRIX}'",
            tokens[1]
        )));
    }
    Ok(FormatDeclaration {
        layout: tokens[2].parse()?,
        scalar: tokens[3].parse()?,
        symmetry: tokens[4].parse()?,
    })
}

fn parse_count(token: &str, field: &str) -> Result<usize, MmError> {
    token
        .parse::<usize>()
        .map_err(|_| MmError::format(format!("matrix size invalid: {field} '{token}'")))
}

/// Parse the size line: `rows cols` for array layout, `rows cols nnz` for coordinate.
pub fn parse_size(line: &str, layout: Layout) -> Result<Dimensions, MmError> {
    let tokens = tokenize(line);
    let expected = match layout {
        Layout::Array => 2,
        Layout::Coordinate => 3,
    };
    if tokens.len() != expected {
        return Err(MmError::format(format!(
            "matrix size invalid: {layout} layout expects {expected} values, found {}",
            tokens.len()
        )));
    }
    let rows = parse_count(tokens[0], "rows")?;
    let cols = parse_count(tokens[1], "cols")?;
    match layout {
        Layout::Array => Ok(Dimensions::dense(rows, cols)),
        Layout::Coordinate => Ok(Dimensions::sparse(rows, cols, parse_count(tokens[2], "nonzeros")?)),
    }
}

/// Render the size line for `dims` under `layout`.
pub fn size_line(dims: &Dimensions, layout: Layout) -> String {
    match layout {
        Layout::Array => format!("{} {}", dims.rows, dims.cols),
        Layout::Coordinate => format!("{} {} {}", dims.rows, dims.cols, dims.nnz),
    }
}
