//! High-level public API for building skeleton archives.

use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::CancellationToken;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::SkeletonError;
use crate::SkeletonReport;
use crate::skeleton::DirectoryArchiver;
use crate::skeleton::SkeletonConfig;
use crate::skeleton::walker::archive_name;
use crate::skeleton::write_atomic;

/// Default output file name used by the command-line tool.
pub const DEFAULT_OUTPUT: &str = "out.zip";

/// Builds a skeleton archive of `roots` at `output_path`.
///
/// Runs without progress output and cannot be cancelled. See
/// [`create_skeleton_with_progress`] for both.
///
/// # Errors
///
/// Returns an error if no roots are given, the configuration is invalid, any
/// root cannot be fully walked, or the archive cannot be written.
///
/// # Examples
///
/// ```no_run
/// use skelzip_core::SkeletonConfig;
/// use skelzip_core::create_skeleton;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = create_skeleton("out.zip", &["photos", "music"], &SkeletonConfig::default())?;
/// println!("{} files, {} bytes declared", report.files_added, report.bytes_declared);
/// # Ok(())
/// # }
/// ```
pub fn create_skeleton<P: AsRef<Path>, Q: AsRef<Path>>(
    output_path: P,
    roots: &[Q],
    config: &SkeletonConfig,
) -> Result<SkeletonReport> {
    create_skeleton_with_progress(
        output_path,
        roots,
        config,
        &mut NoopProgress,
        &CancellationToken::new(),
    )
}

/// Builds a skeleton archive with progress reporting and cancellation.
///
/// Roots are processed in order and the first failure stops the run, so later
/// roots are never walked. The archive is assembled in a temporary file next
/// to `output_path` and renamed over it only after it is complete; on any
/// error an existing file at `output_path` is left untouched.
///
/// # Errors
///
/// Returns `NoRoots` for an empty `roots` slice, `OverlappingRoots` when two
/// roots would yield the same entry names, `Cancelled` if `cancel` fires
/// before the walk is done, and any walk, archive or I/O error.
pub fn create_skeleton_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    output_path: P,
    roots: &[Q],
    config: &SkeletonConfig,
    progress: &mut dyn ProgressCallback,
    cancel: &CancellationToken,
) -> Result<SkeletonReport> {
    if roots.is_empty() {
        return Err(SkeletonError::NoRoots);
    }
    check_disjoint_roots(roots)?;
    config.validate()?;

    let output = output_path.as_ref();
    let start = Instant::now();

    let mut report = write_atomic(output, |file| {
        let mut archiver = DirectoryArchiver::new(file, config)?;
        for root in roots {
            archiver.archive_root(root.as_ref(), cancel, progress)?;
        }
        let (_, report) = archiver.finish()?;
        Ok(report)
    })?;

    report.bytes_compressed = std::fs::metadata(output)?.len();
    report.duration = start.elapsed();
    progress.on_complete();

    info!(
        output = %output.display(),
        files = report.files_added,
        directories = report.directories_added,
        bytes_declared = report.bytes_declared,
        bytes_compressed = report.bytes_compressed,
        "skeleton archive written"
    );

    Ok(report)
}

/// Rejects roots that repeat or nest, compared by entry name.
fn check_disjoint_roots<Q: AsRef<Path>>(roots: &[Q]) -> Result<()> {
    let mut seen: Vec<(&Path, String)> = Vec::with_capacity(roots.len());
    for root in roots {
        let root = root.as_ref();
        let name = archive_name(root)?;
        if let Some((other, _)) = seen
            .iter()
            .find(|(_, prev)| name_contains(prev, &name) || name_contains(&name, prev))
        {
            return Err(SkeletonError::OverlappingRoots {
                root: root.to_path_buf(),
                other: other.to_path_buf(),
            });
        }
        seen.push((root, name));
    }
    Ok(())
}

/// Whether entries named below `outer` include `inner`.
fn name_contains(outer: &str, inner: &str) -> bool {
    // Empty name is the working directory: it holds every relative name.
    if outer.is_empty() {
        return !inner.starts_with('/') && inner != ".." && !inner.starts_with("../");
    }
    inner
        .strip_prefix(outer)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/') || outer.ends_with('/'))
}
