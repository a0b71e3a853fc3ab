//! Build-to-temporary, then rename, publishing of output files.

use crate::Result;
use crate::SkeletonError;
use std::fs::File;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Runs `build` against a temporary file and moves it over `destination`.
///
/// The temporary file lives next to `destination` so the final rename stays
/// on one filesystem. If `build` fails, or the data cannot be synced, the
/// temporary file is removed and `destination` is left as it was.
///
/// # Errors
///
/// Returns the error from `build`, or `Io` / `Persist` if the temporary file
/// cannot be created, synced or renamed.
///
/// # Examples
///
/// ```no_run
/// use skelzip_core::skeleton::write_atomic;
/// use std::io::Write;
/// use std::path::Path;
///
/// write_atomic(Path::new("out.zip"), |file| {
///     file.write_all(b"PK")?;
///     Ok(())
/// })?;
/// # Ok::<(), skelzip_core::SkeletonError>(())
/// ```
pub fn write_atomic<T, F>(destination: &Path, build: F) -> Result<T>
where
    F: FnOnce(&mut File) -> Result<T>,
{
    let dir = destination
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = tempfile::Builder::new()
        .prefix(".skelzip-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    debug!(temp = %temp.path().display(), "building into temporary file");

    let value = build(temp.as_file_mut())?;
    temp.as_file().sync_all()?;
    publish(temp, destination)?;

    Ok(value)
}

fn publish(temp: NamedTempFile, destination: &Path) -> Result<()> {
    temp.persist(destination)
        .map_err(|e| SkeletonError::Persist {
            path: destination.to_path_buf(),
            source: e.error,
        })?;
    debug!(destination = %destination.display(), "published");
    Ok(())
}
