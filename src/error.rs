//! Error types for ecglist.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for hash table loading.
///
/// Both variants are produced by the one-time load of a [`BlacklistTable`]
/// and cached, so the type is `Clone` to hand the same failure back on
/// every later query.
///
/// [`BlacklistTable`]: crate::BlacklistTable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The hash file could not be opened or read
    #[error("cannot read hash file {}: {message}", path.display())]
    FileAccess {
        path: PathBuf,
        kind: io::ErrorKind,
        message: String,
    },

    /// The hash file length is not a multiple of the record width
    #[error(
        "hash file {} is malformed: {len} bytes is not a multiple of the {record_width}-byte record width",
        path.display()
    )]
    Integrity {
        path: PathBuf,
        len: u64,
        record_width: usize,
    },
}

impl Error {
    pub(crate) fn file_access(path: &Path, err: &io::Error) -> Self {
        Error::FileAccess {
            path: path.to_path_buf(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// Whether this is a file-access failure caused by a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::FileAccess {
                kind: io::ErrorKind::NotFound,
                ..
            }
        )
    }

    /// Whether the file exists but has an invalid size.
    pub fn is_integrity(&self) -> bool {
        matches!(self, Error::Integrity { .. })
    }
}

/// Result type alias for ecglist operations.
pub type Result<T> = std::result::Result<T, Error>;
