//! Error types for skeleton archive operations.

use std::path::PathBuf;
use thiserror::Error;
use zip::result::ZipError;

/// Result type alias using `SkeletonError`.
pub type Result<T> = std::result::Result<T, SkeletonError>;

/// Errors that can occur while building or inspecting a skeleton archive.
#[derive(Error, Debug)]
pub enum SkeletonError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No root paths were supplied.
    #[error("no root paths given: at least one directory is required")]
    NoRoots,

    /// Two roots would produce the same entry names.
    #[error(
        "{} overlaps {}: roots must not repeat or contain one another",
        root.display(),
        other.display()
    )]
    OverlappingRoots {
        /// The later of the two roots, as given.
        root: PathBuf,
        /// The earlier root it repeats or is nested in (or contains).
        other: PathBuf,
    },

    /// A walked entry has the name reserved for the readme entry.
    #[error("{}: name collides with the readme entry {name}", path.display())]
    ReservedName {
        /// Path of the entry as walked.
        path: PathBuf,
        /// The reserved entry name.
        name: String,
    },

    /// Compression level outside the deflate range.
    #[error("invalid compression level {level}, expected 1-9")]
    InvalidCompressionLevel {
        /// The rejected level.
        level: u8,
    },

    /// Filesystem entry could not be visited or its metadata read.
    #[error("{}: {source}", path.display())]
    Walk {
        /// Path of the entry as walked.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Archive header could not be built for an entry.
    #[error("{}: cannot build archive header: {reason}", path.display())]
    Header {
        /// Path of the entry as walked.
        path: PathBuf,
        /// Why the header was rejected.
        reason: String,
    },

    /// Archive rejected a new entry.
    #[error("{}: cannot create archive entry: {source}", path.display())]
    Entry {
        /// Path of the entry as walked.
        path: PathBuf,
        /// Underlying zip error.
        source: ZipError,
    },

    /// Writing zero-filled content into an entry failed.
    #[error("{}: cannot write entry content: {source}", path.display())]
    ContentCopy {
        /// Path of the entry as walked.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Cancellation was requested between two entries.
    #[error("operation cancelled")]
    Cancelled,

    /// Archive central directory could not be written.
    #[error("cannot finalize archive: {0}")]
    Finalize(#[source] ZipError),

    /// The finished archive could not be moved into place.
    #[error("cannot publish archive to {}: {source}", path.display())]
    Persist {
        /// Destination path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Archive being inspected is unreadable or malformed.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),
}

impl SkeletonError {
    /// Returns the filesystem path this error is attached to, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use skelzip_core::SkeletonError;
    /// use std::path::{Path, PathBuf};
    ///
    /// let err = SkeletonError::Walk {
    ///     path: PathBuf::from("root/secret"),
    ///     source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    /// };
    /// assert_eq!(err.path(), Some(Path::new("root/secret")));
    /// assert_eq!(SkeletonError::Cancelled.path(), None);
    /// ```
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Walk { path, .. }
            | Self::Header { path, .. }
            | Self::Entry { path, .. }
            | Self::ContentCopy { path, .. }
            | Self::ReservedName { path, .. }
            | Self::OverlappingRoots { root: path, .. }
            | Self::Persist { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Returns `true` if the run stopped because cancellation was requested.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
