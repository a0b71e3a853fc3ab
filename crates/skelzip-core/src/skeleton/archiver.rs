//! Mirrors walked directory trees into a zip archive.
//!
//! Directories become empty `name/` markers. Files keep their name and size,
//! but their content is drawn from [`ZeroFillReader`] bounded to that size.
//! The root directory of each walk is visited (and reported to progress) but
//! gets no marker of its own; its children carry its name.

use crate::CancellationToken;
use crate::ProgressCallback;
use crate::Result;
use crate::SkeletonError;
use crate::io::ZeroFillReader;
use crate::report::SkeletonReport;
use crate::skeleton::config::README_CONTENT;
use crate::skeleton::config::README_NAME;
use crate::skeleton::config::SkeletonConfig;
use crate::skeleton::timestamp;
use crate::skeleton::walker::EntryKind;
use crate::skeleton::walker::SkeletonEntry;
use crate::skeleton::walker::SkeletonWalker;
use crate::skeleton::walker::archive_name;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use tracing::debug;
use tracing::info;
use tracing::warn;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Entries at or above this size need zip64 headers.
const ZIP64_THRESHOLD: u64 = u32::MAX as u64;

/// Builds a skeleton archive into any seekable writer.
///
/// Call [`archive_root`](Self::archive_root) once per root, in order, then
/// [`finish`](Self::finish) exactly once.
///
/// # Examples
///
/// ```no_run
/// use skelzip_core::CancellationToken;
/// use skelzip_core::NoopProgress;
/// use skelzip_core::SkeletonConfig;
/// use skelzip_core::skeleton::DirectoryArchiver;
/// use std::io::Cursor;
/// use std::path::Path;
///
/// let config = SkeletonConfig::default();
/// let cancel = CancellationToken::new();
/// let mut archiver = DirectoryArchiver::new(Cursor::new(Vec::new()), &config)?;
///
/// archiver.archive_root(Path::new("photos"), &cancel, &mut NoopProgress)?;
/// let (cursor, report) = archiver.finish()?;
///
/// println!("{} files, {} bytes of zip", report.files_added, cursor.get_ref().len());
/// # Ok::<(), skelzip_core::SkeletonError>(())
/// ```
pub struct DirectoryArchiver<'a, W: Write + Seek> {
    zip: ZipWriter<W>,
    config: &'a SkeletonConfig,
    options: SimpleFileOptions,
    report: SkeletonReport,
}

impl<'a, W: Write + Seek> DirectoryArchiver<'a, W> {
    /// Starts a new archive on `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(writer: W, config: &'a SkeletonConfig) -> Result<Self> {
        config.validate()?;

        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(config.compression_level.map(i64::from));

        Ok(Self {
            zip: ZipWriter::new(writer),
            config,
            options,
            report: SkeletonReport::default(),
        })
    }

    /// Returns the statistics gathered so far.
    #[must_use]
    pub fn report(&self) -> &SkeletonReport {
        &self.report
    }

    /// Mirrors the tree below `root` into the archive.
    ///
    /// `cancel` is checked once before each walked entry. The first error of
    /// any kind stops the walk and is returned; entries already appended stay
    /// in the (unfinished) archive.
    ///
    /// # Errors
    ///
    /// Returns `Walk` for unreadable entries, `Header` or `Entry` when the
    /// archive rejects an entry, `ContentCopy` when writing zeros fails and
    /// `Cancelled` when `cancel` was triggered.
    pub fn archive_root(
        &mut self,
        root: &Path,
        cancel: &CancellationToken,
        progress: &mut dyn ProgressCallback,
    ) -> Result<()> {
        info!(root = %root.display(), "archiving root");

        let walker = SkeletonWalker::new(root, self.config);
        for entry in walker.walk() {
            if cancel.is_cancelled() {
                warn!(root = %root.display(), "cancelled between entries");
                return Err(SkeletonError::Cancelled);
            }

            let entry = entry?;
            self.report.entries_visited += 1;
            progress.on_entry_start(&entry.path, entry.depth);
            self.add_entry(&entry, progress)?;
            progress.on_entry_complete(&entry.path);
        }

        self.report.roots_processed += 1;
        Ok(())
    }

    fn add_entry(&mut self, entry: &SkeletonEntry, progress: &mut dyn ProgressCallback) -> Result<()> {
        if entry.is_root_dir() {
            return Ok(());
        }

        let name = archive_name(&entry.path)?;
        let options = self
            .options
            .last_modified_time(timestamp::from_system_time(entry.modified));

        match entry.kind {
            EntryKind::Directory => {
                self.zip
                    .add_directory(format!("{name}/"), options)
                    .map_err(|source| SkeletonError::Entry {
                        path: entry.path.clone(),
                        source,
                    })?;
                self.report.directories_added += 1;
                debug!(name = %name, "added directory marker");
            }
            EntryKind::File | EntryKind::Symlink => {
                if self.config.include_readme && name == README_NAME {
                    return Err(SkeletonError::ReservedName {
                        path: entry.path.clone(),
                        name,
                    });
                }

                let options = options.large_file(entry.size >= ZIP64_THRESHOLD);
                self.zip
                    .start_file(name.as_str(), options)
                    .map_err(|source| SkeletonError::Entry {
                        path: entry.path.clone(),
                        source,
                    })?;

                let written = std::io::copy(&mut ZeroFillReader::bounded(entry.size), &mut self.zip)
                    .map_err(|source| SkeletonError::ContentCopy {
                        path: entry.path.clone(),
                        source,
                    })?;
                progress.on_bytes_written(written);

                self.report.bytes_declared += written;
                if entry.kind == EntryKind::Symlink {
                    self.report.symlinks_added += 1;
                } else {
                    self.report.files_added += 1;
                }
                debug!(name = %name, size = entry.size, "added zero-filled entry");
            }
        }

        Ok(())
    }

    /// Writes the comment and readme entry, then the central directory.
    ///
    /// Returns the inner writer and the final statistics. The report's
    /// `bytes_compressed` and `duration` are left for the caller, which knows
    /// where the archive ends up.
    ///
    /// # Errors
    ///
    /// Returns an error if the readme entry or the central directory cannot be
    /// written.
    pub fn finish(mut self) -> Result<(W, SkeletonReport)> {
        self.zip.set_comment(self.config.comment.clone());

        if self.config.include_readme {
            let readme = Path::new(README_NAME);
            let options = self.options.last_modified_time(timestamp::now_utc());
            self.zip
                .start_file(README_NAME, options)
                .map_err(|source| SkeletonError::Entry {
                    path: readme.to_path_buf(),
                    source,
                })?;
            self.zip
                .write_all(README_CONTENT.as_bytes())
                .map_err(|source| SkeletonError::ContentCopy {
                    path: readme.to_path_buf(),
                    source,
                })?;
            self.report.readme_added = true;
        }

        let writer = self.zip.finish().map_err(SkeletonError::Finalize)?;
        Ok((writer, self.report))
    }
}
