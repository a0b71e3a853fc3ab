//! Listing of a skeleton archive.

/// One entry of an archive, as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Entry name exactly as stored in the archive.
    pub name: String,

    /// Whether the entry is a directory marker.
    pub is_dir: bool,

    /// Declared (uncompressed) size.
    pub size: u64,

    /// Stored (compressed) size.
    pub compressed_size: u64,

    /// Compression method name, e.g. `Deflated`.
    pub compression: String,

    /// Modification time as `YYYY-MM-DD HH:MM:SS`, if recorded.
    pub modified: Option<String>,
}

/// All entries of an archive plus its comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkeletonManifest {
    /// Container-level comment.
    pub comment: String,

    /// Entries in archive order.
    pub entries: Vec<ManifestEntry>,

    /// Number of file entries.
    pub total_files: usize,

    /// Number of directory entries.
    pub total_dirs: usize,

    /// Sum of declared file sizes.
    pub total_size: u64,
}

impl SkeletonManifest {
    /// Creates an empty manifest with the given comment.
    #[must_use]
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
            ..Self::default()
        }
    }

    /// Appends an entry and updates the totals.
    pub fn add_entry(&mut self, entry: ManifestEntry) {
        if entry.is_dir {
            self.total_dirs += 1;
        } else {
            self.total_files += 1;
            self.total_size += entry.size;
        }
        self.entries.push(entry);
    }

    /// Looks an entry up by its stored name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&ManifestEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}
