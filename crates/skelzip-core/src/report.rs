//! Skeleton build reporting and progress callbacks.

use std::path::Path;
use std::time::Duration;

/// Report of a skeleton archive build.
///
/// # Examples
///
/// ```
/// use skelzip_core::SkeletonReport;
///
/// let mut report = SkeletonReport::default();
/// report.files_added = 3;
/// report.directories_added = 2;
/// report.bytes_declared = 4096;
/// report.bytes_compressed = 512;
///
/// assert_eq!(report.total_entries(), 5);
/// assert_eq!(report.compression_ratio(), 8.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SkeletonReport {
    /// Number of roots fully processed.
    pub roots_processed: usize,

    /// Number of file entries written.
    pub files_added: usize,

    /// Number of directory marker entries written.
    pub directories_added: usize,

    /// Number of unfollowed symlinks stored as file entries.
    pub symlinks_added: usize,

    /// Number of filesystem entries visited, roots included.
    pub entries_visited: usize,

    /// Sum of declared entry sizes, i.e. the zero bytes written.
    pub bytes_declared: u64,

    /// Size of the finished archive on disk.
    pub bytes_compressed: u64,

    /// Whether the readme entry was appended.
    pub readme_added: bool,

    /// Duration of the build.
    pub duration: Duration,
}

impl SkeletonReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries mirrored from the filesystem.
    ///
    /// The readme entry is not counted.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.files_added + self.directories_added + self.symlinks_added
    }

    /// Returns declared bytes per archive byte.
    ///
    /// Returns 0.0 if either side is 0.
    #[must_use]
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_compressed == 0 || self.bytes_declared == 0 {
            return 0.0;
        }
        self.bytes_declared as f64 / self.bytes_compressed as f64
    }
}

/// Callback trait for progress reporting while a skeleton is built.
///
/// # Examples
///
/// ```
/// use skelzip_core::ProgressCallback;
/// use std::path::Path;
///
/// struct Counter(usize);
///
/// impl ProgressCallback for Counter {
///     fn on_entry_start(&mut self, _path: &Path, _depth: usize) {
///         self.0 += 1;
///     }
///
///     fn on_bytes_written(&mut self, _bytes: u64) {}
///
///     fn on_entry_complete(&mut self, _path: &Path) {}
///
///     fn on_complete(&mut self) {}
/// }
/// ```
pub trait ProgressCallback: Send {
    /// Called once for every visited filesystem entry, before it is archived.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the entry as walked
    /// * `depth` - Depth below its root (the root itself is 0)
    fn on_entry_start(&mut self, path: &Path, depth: usize);

    /// Called after the zero content of a file entry has been written.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called when an entry has been fully processed.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called once after the archive has been published.
    fn on_complete(&mut self);
}

/// No-op implementation of `ProgressCallback`.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &Path, _depth: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}
