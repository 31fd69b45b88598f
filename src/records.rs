//! Reading and writing record files.
//!
//! Every data file in the pipeline is a UTF-8 JSON array of objects with an
//! open schema. Records are kept as [`serde_json::Value`] so unknown fields
//! survive a merge untouched.
//!
//! Loading many files is lenient: a file that cannot be read, is not valid
//! JSON, or whose top-level value is not an array is skipped and reported
//! back, and the remaining files still load. Writing is strict.

use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::instrument;

/// Errors reading or writing a record file.
#[derive(Debug, Error)]
pub enum RecordsError {
    /// The file could not be opened or read.
    #[error("could not read {}: {source}", path.display())]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("{} is not valid JSON: {source}", path.display())]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// Parser error with line and column.
        source: serde_json::Error,
    },

    /// The file is valid JSON but its top-level value is not an array.
    #[error("{} does not contain a JSON array", path.display())]
    NotAnArray {
        /// File being parsed.
        path: PathBuf,
    },

    /// The output file could not be created or written.
    #[error("could not write {}: {source}", path.display())]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The value could not be encoded as JSON.
    #[error("could not encode {}: {source}", path.display())]
    Encode {
        /// File being written.
        path: PathBuf,
        /// Serializer error.
        source: serde_json::Error,
    },
}

impl RecordsError {
    /// The file this error is about.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::NotAnArray { path }
            | Self::Write { path, .. }
            | Self::Encode { path, .. } => path,
        }
    }
}

/// Load one file that must hold a JSON array.
///
/// # Errors
/// Returns [`RecordsError`] if the file cannot be read, is not JSON, or is
/// not an array.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_records(path: &Path) -> Result<Vec<Value>, RecordsError> {
    let text = std::fs::read_to_string(path).map_err(|source| RecordsError::Read {
        path: path.to_owned(),
        source,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|source| RecordsError::Parse {
        path: path.to_owned(),
        source,
    })?;
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(RecordsError::NotAnArray {
            path: path.to_owned(),
        }),
    }
}

/// Records from several files, concatenated in file order.
#[derive(Debug, Default)]
pub struct Concatenation {
    /// All records, file order then within-file order.
    pub records: Vec<Value>,
    /// Files that contributed, with how many records each.
    pub loaded: Vec<(PathBuf, usize)>,
    /// Files that were skipped and why.
    pub skipped: Vec<RecordsError>,
}

/// Load and concatenate `paths` in order, skipping files that fail to load.
#[instrument(skip_all, fields(files = paths.len()))]
pub fn concat_files(paths: &[PathBuf]) -> Concatenation {
    let mut out = Concatenation::default();
    for path in paths {
        match load_records(path) {
            Ok(items) => {
                tracing::debug!(path = %path.display(), records = items.len(), "loaded");
                out.loaded.push((path.clone(), items.len()));
                out.records.extend(items);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping input file");
                out.skipped.push(e);
            }
        }
    }
    out
}

/// Write `value` as pretty JSON (2-space indent, non-ASCII unescaped),
/// replacing any existing file.
///
/// # Errors
/// Returns [`RecordsError::Write`] or [`RecordsError::Encode`].
#[instrument(skip_all, fields(path = %path.display()))]
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), RecordsError> {
    let write_err = |source| RecordsError::Write {
        path: path.to_owned(),
        source,
    };
    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| {
        if source.is_io() {
            RecordsError::Write {
                path: path.to_owned(),
                source: source.into(),
            }
        } else {
            RecordsError::Encode {
                path: path.to_owned(),
                source,
            }
        }
    })?;
    writer.write_all(b"\n").map_err(write_err)?;
    writer.flush().map_err(write_err)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
