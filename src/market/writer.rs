//! Matrix Market writer.
//!
//! Emits, in order: the banner (scalar kind taken from the source's element type,
//! symmetry always `general`), the attribution comment, the size line, then entries
//! in column-major order. Coordinate output lists whatever the source yields from
//! [`MatrixSource::for_each_entry`]; array output lists every cell.

use std::io::Write;

use crate::config::WriteOptions;
use crate::core::traits::{MarketScalar, MatrixSource};
use crate::error::MmError;
use crate::format::header::size_line;
use crate::format::{format_scalar, Dimensions, FormatDeclaration, Layout, Symmetry, COMMENT_MARKER};

fn write_value<W: Write, T: MarketScalar>(out: &mut W, value: T) -> Result<(), MmError> {
    let mut first = true;
    for token in format_scalar(value.to_value(), T::PRECISION) {
        if !first {
            out.write_all(b" ")?;
        }
        out.write_all(token.as_bytes())?;
        first = false;
    }
    Ok(())
}

/// Write `source` to `output`. The writer is flushed before returning.
pub fn write_with<S, W>(source: &S, mut output: W, options: &WriteOptions) -> Result<(), MmError>
where
    S: MatrixSource,
    W: Write,
{
    let declaration = FormatDeclaration::new(
        options.layout,
        <S::Scalar as MarketScalar>::KIND,
        Symmetry::General,
    );
    writeln!(output, "{declaration}")?;
    if let Some(comment) = &options.comment {
        for line in comment.lines() {
            writeln!(output, "{COMMENT_MARKER}{line}")?;
        }
    }

    let (rows, cols) = source.dimensions();
    match options.layout {
        Layout::Coordinate => {
            let dims = Dimensions::sparse(rows, cols, source.non_zero_count());
            writeln!(output, "{}", size_line(&dims, Layout::Coordinate))?;
            let mut written = 0usize;
            source.for_each_entry(|row, col, value| {
                write!(output, "{} {}", row + 1, col + 1)?;
                if <S::Scalar as MarketScalar>::KIND.token_count() > 0 {
                    output.write_all(b" ")?;
                }
                write_value(&mut output, value)?;
                output.write_all(b"\n")?;
                written += 1;
                Ok(())
            })?;
            if written != dims.nnz {
                return Err(MmError::format(format!(
                    "source declared {} entries but yielded {written}",
                    dims.nnz
                )));
            }
        }
        Layout::Array => {
            writeln!(output, "{}", size_line(&Dimensions::dense(rows, cols), Layout::Array))?;
            for col in 0..cols {
                for row in 0..rows {
                    write_value(&mut output, source.get_value(row, col))?;
                    output.write_all(b"\n")?;
                }
            }
        }
    }

    output.flush()?;
    Ok(())
}

/// Write with the default attribution comment.
pub fn write<S, W>(source: &S, output: W, layout: Layout) -> Result<(), MmError>
where
    S: MatrixSource,
    W: Write,
{
    write_with(source, output, &WriteOptions::new(layout))
}
