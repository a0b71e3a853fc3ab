//! Error conversion utilities for CLI.
//!
//! Converts skelzip-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use skelzip_core::SkeletonError;
use std::io::ErrorKind;
use std::path::Path;

/// Converts a build error into an anyhow error that names the output archive.
pub fn convert_create_error(err: SkeletonError, output: &Path) -> anyhow::Error {
    match err {
        SkeletonError::Walk { path, source } if source.kind() == ErrorKind::PermissionDenied => {
            anyhow!(
                "{}: {}\n\
                 HINT: Every entry must be readable; '{}' was left untouched.",
                path.display(),
                source,
                output.display()
            )
        }
        SkeletonError::Walk { path, source } if source.kind() == ErrorKind::NotFound => {
            anyhow!(
                "{}: {}\n\
                 HINT: Check the directory name. With --follow-symlinks a dangling link also fails.",
                path.display(),
                source
            )
        }
        SkeletonError::Cancelled => {
            anyhow!(
                "Interrupted before the archive was complete\n\
                 HINT: '{}' was not created or replaced.",
                output.display()
            )
        }
        SkeletonError::OverlappingRoots { root, other } => {
            anyhow!(
                "'{}' repeats or overlaps '{}'\n\
                 HINT: Pass each directory once and do not pass a directory together with one inside it.",
                root.display(),
                other.display()
            )
        }
        SkeletonError::ReservedName { path, name } => {
            anyhow!(
                "{}: name collides with the readme entry '{}'\n\
                 HINT: Use --no-readme to mirror this file, or leave it out of the roots.",
                path.display(),
                name
            )
        }
        SkeletonError::Persist { path, source } => {
            anyhow!(
                "Cannot replace '{}': {}\n\
                 HINT: Check write permission on the output directory.",
                path.display(),
                source
            )
        }
        SkeletonError::Header { path, reason } => {
            anyhow!(
                "{}: {}\n\
                 HINT: Entry names must be valid UTF-8.",
                path.display(),
                reason
            )
        }
        other => anyhow::Error::from(other)
            .context(format!("Failed to write skeleton archive '{}'", output.display())),
    }
}

/// Converts an inspection error into an anyhow error that names the archive.
pub fn convert_inspect_error(err: SkeletonError, archive: &Path) -> anyhow::Error {
    match err {
        SkeletonError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The archive may be corrupted or not a zip file.",
                archive.display(),
                reason
            )
        }
        SkeletonError::Io(io_err) => {
            anyhow!("I/O error while reading '{}': {}", archive.display(), io_err)
        }
        other => anyhow::Error::from(other)
            .context(format!("Error reading archive '{}'", archive.display())),
    }
}
