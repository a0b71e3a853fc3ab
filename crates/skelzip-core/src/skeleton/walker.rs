//! Directory tree walking for skeleton archives.
//!
//! The walk is depth-first in the order the filesystem yields directory
//! entries, unless [`SkeletonConfig::sort_entries`] asks for name order.

use crate::Result;
use crate::SkeletonError;
use crate::skeleton::config::SkeletonConfig;
use std::fs::File;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use std::time::SystemTime;
use walkdir::WalkDir;

/// Walks one root path and yields [`SkeletonEntry`] values.
///
/// # Examples
///
/// ```no_run
/// use skelzip_core::SkeletonConfig;
/// use skelzip_core::skeleton::SkeletonWalker;
/// use std::path::Path;
///
/// let config = SkeletonConfig::default();
/// let walker = SkeletonWalker::new(Path::new("./project"), &config);
///
/// for entry in walker.walk() {
///     let entry = entry?;
///     println!("{} ({} bytes)", entry.path.display(), entry.size);
/// }
/// # Ok::<(), skelzip_core::SkeletonError>(())
/// ```
pub struct SkeletonWalker<'a> {
    root: &'a Path,
    config: &'a SkeletonConfig,
}

impl<'a> SkeletonWalker<'a> {
    /// Creates a walker for `root`.
    #[must_use]
    pub fn new(root: &'a Path, config: &'a SkeletonConfig) -> Self {
        Self { root, config }
    }

    /// Returns an iterator over the entries below and including the root.
    ///
    /// Errors carry the path of the entry that failed. The iterator keeps
    /// going after an error; callers that treat errors as fatal stop at the
    /// first one.
    pub fn walk(&self) -> impl Iterator<Item = Result<SkeletonEntry>> + '_ {
        let mut walker = WalkDir::new(self.root).follow_links(self.config.follow_symlinks);
        if self.config.sort_entries {
            walker = walker.sort_by_file_name();
        }

        walker.into_iter().map(move |entry| match entry {
            Ok(entry) => build_entry(&entry),
            Err(e) => {
                let path = e
                    .path()
                    .map_or_else(|| self.root.to_path_buf(), Path::to_path_buf);
                Err(SkeletonError::Walk {
                    path,
                    source: std::io::Error::from(e),
                })
            }
        })
    }
}

fn build_entry(entry: &walkdir::DirEntry) -> Result<SkeletonEntry> {
    let path = entry.path().to_path_buf();
    let metadata = entry.metadata().map_err(|e| SkeletonError::Walk {
        path: path.clone(),
        source: std::io::Error::from(e),
    })?;

    let kind = if entry.file_type().is_symlink() {
        EntryKind::Symlink
    } else if metadata.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    };

    // Contents are never read, but an unreadable file still fails the walk.
    if kind == EntryKind::File && metadata.is_file() {
        File::open(&path).map_err(|source| SkeletonError::Walk {
            path: path.clone(),
            source,
        })?;
    }

    let size = if kind == EntryKind::Directory {
        0
    } else {
        metadata.len()
    };

    Ok(SkeletonEntry {
        path,
        kind,
        size,
        modified: metadata.modified().ok(),
        depth: entry.depth(),
    })
}

/// A filesystem entry discovered during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonEntry {
    /// Path as walked, rooted at the caller's argument.
    pub path: PathBuf,

    /// What the entry is on disk.
    pub kind: EntryKind,

    /// Size in bytes (0 for directories).
    pub size: u64,

    /// Modification time, when the platform reports one.
    pub modified: Option<SystemTime>,

    /// Depth below the root; the root itself is 0.
    pub depth: usize,
}

impl SkeletonEntry {
    /// Returns `true` for the root directory of a walk.
    #[must_use]
    pub fn is_root_dir(&self) -> bool {
        self.depth == 0 && self.kind == EntryKind::Directory
    }
}

/// Kind of a walked entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file, or any other non-directory node.
    File,

    /// Directory.
    Directory,

    /// Symlink that was not followed.
    Symlink,
}

/// Converts a walked path into a zip entry name.
///
/// Separators become `/`, `.` components are dropped and repeated separators
/// collapse. Nothing else changes: absolute paths stay absolute and `..`
/// components are kept.
///
/// # Errors
///
/// Returns `SkeletonError::Header` if the path is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use skelzip_core::skeleton::walker::archive_name;
/// use std::path::Path;
///
/// assert_eq!(archive_name(Path::new("./root//a.txt"))?, "root/a.txt");
/// assert_eq!(archive_name(Path::new("/srv/data/x"))?, "/srv/data/x");
/// # Ok::<(), skelzip_core::SkeletonError>(())
/// ```
pub fn archive_name(path: &Path) -> Result<String> {
    let mut parts: Vec<&str> = Vec::new();
    let mut absolute = false;
    let mut prefix = String::new();

    for component in path.components() {
        match component {
            Component::Prefix(p) => {
                prefix = utf8(p.as_os_str(), path)?.replace('\\', "/");
            }
            Component::RootDir => absolute = true,
            Component::CurDir => {}
            Component::ParentDir => parts.push(".."),
            Component::Normal(name) => parts.push(utf8(name, path)?),
        }
    }

    let mut name = prefix;
    if absolute {
        name.push('/');
    }
    name.push_str(&parts.join("/"));
    Ok(name)
}

fn utf8<'p>(part: &'p std::ffi::OsStr, path: &Path) -> Result<&'p str> {
    part.to_str().ok_or_else(|| SkeletonError::Header {
        path: path.to_path_buf(),
        reason: "path is not valid UTF-8".to_string(),
    })
}
