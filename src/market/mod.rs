//! Stream and file entry points for reading and writing Matrix Market data.
//!
//! Path-based functions own their file for the duration of the call; it is closed on
//! every exit path, including early returns on a parse failure. A file that cannot be
//! opened or created is reported as [`MmError::ResourceError`] before any parsing.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

use crate::config::{ReadOptions, WriteOptions};
use crate::core::traits::{MatrixSink, MatrixSource};
use crate::error::MmError;
use crate::format::Layout;

pub mod reader;
pub mod writer;

pub use reader::{MarketReader, ReadState, ReadSummary};
pub use writer::{write, write_with};

/// Read a Matrix Market stream into `sink`.
pub fn read<S: MatrixSink, R: BufRead>(sink: &mut S, input: R) -> Result<ReadSummary, MmError> {
    MarketReader::new(input).read_into(sink)
}

pub fn read_with<S: MatrixSink, R: BufRead>(
    sink: &mut S,
    input: R,
    options: &ReadOptions,
) -> Result<ReadSummary, MmError> {
    MarketReader::with_options(input, options.clone()).read_into(sink)
}

fn open(path: &Path) -> Result<BufReader<File>, MmError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| MmError::ResourceError { path: path.to_path_buf(), source })
}

fn create(path: &Path) -> Result<BufWriter<File>, MmError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| MmError::ResourceError { path: path.to_path_buf(), source })
}

/// Read the file at `path` into `sink`.
pub fn read_from_path<S: MatrixSink>(
    sink: &mut S,
    path: impl AsRef<Path>,
) -> Result<ReadSummary, MmError> {
    read(sink, open(path.as_ref())?)
}

pub fn read_from_path_with<S: MatrixSink>(
    sink: &mut S,
    path: impl AsRef<Path>,
    options: &ReadOptions,
) -> Result<ReadSummary, MmError> {
    read_with(sink, open(path.as_ref())?, options)
}

/// Write `source` to a new file at `path`, replacing any existing file.
pub fn write_to_path<S: MatrixSource>(
    source: &S,
    path: impl AsRef<Path>,
    layout: Layout,
) -> Result<(), MmError> {
    write_to_path_with(source, path, &WriteOptions::new(layout))
}

pub fn write_to_path_with<S: MatrixSource>(
    source: &S,
    path: impl AsRef<Path>,
    options: &WriteOptions,
) -> Result<(), MmError> {
    write_with(source, create(path.as_ref())?, options)
}
