//! Matrix Market reader.
//!
//! `MarketReader` walks a stream through the states
//! `Start -> BannerParsed -> SizeParsed -> Filling -> Done`. Any error moves it to
//! `Failed`, which is terminal. Each step can be driven on its own (to inspect the
//! banner before choosing a container, for example) or all at once with
//! [`MarketReader::read_into`].
//!
//! Entries are handed to a [`MatrixSink`] as they are parsed. Nothing is rolled back
//! on failure: the sink keeps whatever was set before the offending line.

use std::any::type_name;
use std::io::BufRead;

use crate::config::ReadOptions;
use crate::core::traits::{MarketScalar, MatrixSink};
use crate::error::MmError;
use crate::format::tokenizer::{tokenize, LineReader};
use crate::format::{
    parse_banner, parse_size, Dimensions, FormatDeclaration, Layout, ScalarKind, Symmetry,
};

/// Reader progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadState {
    Start,
    BannerParsed,
    SizeParsed,
    Filling,
    Done,
    Failed,
}

/// Outcome of a completed read.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadSummary {
    pub declaration: FormatDeclaration,
    pub dimensions: Dimensions,
    /// Entries handed to the sink.
    pub entries_read: usize,
    /// False when input ended before `dimensions.nnz` entries.
    pub complete: bool,
}

pub struct MarketReader<R> {
    lines: LineReader<R>,
    options: ReadOptions,
    state: ReadState,
    declaration: Option<FormatDeclaration>,
    dimensions: Option<Dimensions>,
}

impl<R: BufRead> MarketReader<R> {
    pub fn new(input: R) -> Self {
        Self::with_options(input, ReadOptions::default())
    }

    pub fn with_options(input: R, options: ReadOptions) -> Self {
        Self {
            lines: LineReader::new(input),
            options,
            state: ReadState::Start,
            declaration: None,
            dimensions: None,
        }
    }

    pub fn state(&self) -> ReadState {
        self.state
    }

    pub fn declaration(&self) -> Option<&FormatDeclaration> {
        self.declaration.as_ref()
    }

    pub fn dimensions(&self) -> Option<&Dimensions> {
        self.dimensions.as_ref()
    }

    fn expect_state(&self, expected: ReadState) -> Result<(), MmError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(MmError::format(format!(
                "reader is in state {:?}, expected {expected:?}",
                self.state
            )))
        }
    }

    fn track<T>(&mut self, result: Result<T, MmError>, next: ReadState) -> Result<T, MmError> {
        self.state = if result.is_ok() { next } else { ReadState::Failed };
        result
    }

    /// Parse the first line as the banner.
    pub fn read_banner(&mut self) -> Result<FormatDeclaration, MmError> {
        self.expect_state(ReadState::Start)?;
        let result = self.parse_banner_line();
        self.track(result, ReadState::BannerParsed)
    }

    fn parse_banner_line(&mut self) -> Result<FormatDeclaration, MmError> {
        let Some(line) = self.lines.next_line()? else {
            return Err(MmError::format("MatrixMarket banner missing: input is empty"));
        };
        let at = |e: MmError| e.at_line(1, &line);
        let decl = parse_banner(&line).map_err(at)?;
        if decl.layout == Layout::Array && decl.scalar == ScalarKind::Pattern {
            return Err(at(MmError::format("pattern entries require coordinate layout")));
        }

        log::debug!(
            "storage: {}, type: {}, symmetry: {}",
            decl.layout,
            decl.scalar,
            decl.symmetry
        );
        if decl.symmetry != Symmetry::General {
            log::warn!(
                "{} matrix read as stored; the other triangle is not filled in",
                decl.symmetry
            );
        }

        self.declaration = Some(decl);
        Ok(decl)
    }

    /// Skip comment lines and parse the size line.
    pub fn read_size(&mut self) -> Result<Dimensions, MmError> {
        self.expect_state(ReadState::BannerParsed)?;
        let result = self.parse_size_line();
        self.track(result, ReadState::SizeParsed)
    }

    fn parse_size_line(&mut self) -> Result<Dimensions, MmError> {
        let decl = self.current_declaration()?;
        let Some(line) = self.lines.next_data_line()? else {
            return Err(MmError::format("matrix size missing").at_line(self.lines.line_number(), ""));
        };
        let dims = parse_size(&line, decl.layout)
            .map_err(|e| e.at_line(self.lines.line_number(), &line))?;

        log::debug!("rows: {}, cols: {}, nonzeros: {}", dims.rows, dims.cols, dims.nnz);

        self.dimensions = Some(dims);
        Ok(dims)
    }

    /// Start the sink's fill session and stream every entry into it.
    pub fn fill<S: MatrixSink>(&mut self, sink: &mut S) -> Result<ReadSummary, MmError> {
        self.expect_state(ReadState::SizeParsed)?;
        self.state = ReadState::Filling;
        let result = self.fill_entries(sink);
        self.track(result, ReadState::Done)
    }

    fn fill_entries<S: MatrixSink>(&mut self, sink: &mut S) -> Result<ReadSummary, MmError> {
        let decl = self.current_declaration()?;
        let dims = self.current_dimensions()?;

        let entries_read = match decl.layout {
            Layout::Coordinate => {
                sink.begin_sparse(dims.rows, dims.cols, dims.nnz)?;
                self.fill_coordinate(sink, decl.scalar, &dims)?
            }
            Layout::Array => {
                sink.begin_dense(dims.rows, dims.cols)?;
                self.fill_array(sink, decl.scalar, &dims)?
            }
        };

        let complete = entries_read == dims.nnz;
        if !complete {
            let message = format!(
                "input ended after {entries_read} of {} entries",
                dims.nnz
            );
            if self.options.strict_entry_count {
                return Err(MmError::format(message).at_line(self.lines.line_number(), ""));
            }
            log::warn!("{message}");
        }

        sink.end_fill()?;

        Ok(ReadSummary {
            declaration: decl,
            dimensions: dims,
            entries_read,
            complete,
        })
    }

    fn fill_coordinate<S: MatrixSink>(
        &mut self,
        sink: &mut S,
        kind: ScalarKind,
        dims: &Dimensions,
    ) -> Result<usize, MmError> {
        let mut entries_read = 0;
        while entries_read < dims.nnz {
            let Some(line) = self.lines.next_data_line()? else {
                break;
            };
            let (row, col, value) = parse_coordinate_entry::<S::Scalar>(&line, kind, dims)
                .map_err(|e| e.at_line(self.lines.line_number(), &line))?;
            sink.set_value(row, col, value)?;
            entries_read += 1;
        }
        Ok(entries_read)
    }

    fn fill_array<S: MatrixSink>(
        &mut self,
        sink: &mut S,
        kind: ScalarKind,
        dims: &Dimensions,
    ) -> Result<usize, MmError> {
        let mut entries_read = 0;
        'columns: for col in 0..dims.cols {
            for row in 0..dims.rows {
                let Some(line) = self.lines.next_data_line()? else {
                    break 'columns;
                };
                let value = parse_array_entry::<S::Scalar>(&line, kind)
                    .map_err(|e| e.at_line(self.lines.line_number(), &line))?;
                sink.set_value(row, col, value)?;
                entries_read += 1;
            }
        }
        Ok(entries_read)
    }

    fn current_declaration(&self) -> Result<FormatDeclaration, MmError> {
        self.declaration
            .ok_or_else(|| MmError::format("banner has not been read"))
    }

    fn current_dimensions(&self) -> Result<Dimensions, MmError> {
        self.dimensions
            .ok_or_else(|| MmError::format("size line has not been read"))
    }

    /// Run every step: banner, size line, fill.
    pub fn read_into<S: MatrixSink>(&mut self, sink: &mut S) -> Result<ReadSummary, MmError> {
        self.read_banner()?;
        self.read_size()?;
        self.fill(sink)
    }

    pub fn into_inner(self) -> R {
        self.lines.into_inner()
    }
}

fn to_scalar<T: MarketScalar>(tokens: &[&str], kind: ScalarKind) -> Result<T, MmError> {
    T::from_tokens(tokens, kind)?.ok_or_else(|| {
        MmError::format(format!(
            "{kind} value '{}' cannot be stored as {}",
            tokens.join(" "),
            type_name::<T>()
        ))
    })
}

fn parse_index(token: &str, field: &str, bound: usize) -> Result<usize, MmError> {
    let index = token
        .parse::<usize>()
        .map_err(|_| MmError::format(format!("invalid {field} index '{token}'")))?;
    if index == 0 || index > bound {
        return Err(MmError::format(format!(
            "{field} index {index} outside 1..={bound}"
        )));
    }
    Ok(index - 1)
}

/// `row col value-tokens` with 1-based coordinates, returned 0-based.
fn parse_coordinate_entry<T: MarketScalar>(
    line: &str,
    kind: ScalarKind,
    dims: &Dimensions,
) -> Result<(usize, usize, T), MmError> {
    let tokens = tokenize(line);
    let expected = 2 + kind.token_count();
    if tokens.len() != expected {
        return Err(MmError::format(format!(
            "{kind} coordinate entry expects {expected} tokens, found {}",
            tokens.len()
        )));
    }
    let row = parse_index(tokens[0], "row", dims.rows)?;
    let col = parse_index(tokens[1], "column", dims.cols)?;
    let value = to_scalar(&tokens[2..], kind)?;
    Ok((row, col, value))
}

fn parse_array_entry<T: MarketScalar>(line: &str, kind: ScalarKind) -> Result<T, MmError> {
    to_scalar(&tokenize(line), kind)
}
