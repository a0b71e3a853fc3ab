//! Configuration for skeleton archive creation.

use crate::Result;
use crate::SkeletonError;

/// Container comment written to every skeleton archive by default.
pub const DEFAULT_COMMENT: &str = "written by directory-structure-skeleton-archive";

/// Name of the explanatory entry appended after all roots.
pub const README_NAME: &str = "README-this-archive-is-special.txt";

/// Content of the explanatory entry.
pub const README_CONTENT: &str =
    "This archive contains only metadata about the files. The file contents are filled with null.";

/// Configuration for skeleton archive creation.
///
/// Defaults reproduce the classic behavior: native walk order, symlinks not
/// followed, deflate at its default level, fixed comment and a readme entry.
///
/// # Examples
///
/// ```
/// use skelzip_core::SkeletonConfig;
///
/// let config = SkeletonConfig::default();
/// assert!(!config.sort_entries);
///
/// let reproducible = SkeletonConfig::default()
///     .with_sort_entries(true)
///     .with_compression_level(Some(9));
/// assert!(reproducible.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonConfig {
    /// Follow symlinks while walking.
    ///
    /// Default: `false`. Unfollowed symlinks are stored as zero-filled file
    /// entries sized by the link itself.
    pub follow_symlinks: bool,

    /// Sort directory siblings by file name.
    ///
    /// Default: `false` (native directory order, which varies between
    /// filesystems).
    pub sort_entries: bool,

    /// Deflate level (1-9).
    ///
    /// Default: `None`, the deflate default level.
    pub compression_level: Option<u8>,

    /// Container-level comment.
    ///
    /// Default: [`DEFAULT_COMMENT`].
    pub comment: String,

    /// Append the [`README_NAME`] entry after all roots.
    ///
    /// Default: `true`.
    pub include_readme: bool,
}

impl Default for SkeletonConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            sort_entries: false,
            compression_level: None,
            comment: DEFAULT_COMMENT.to_string(),
            include_readme: true,
        }
    }
}

impl SkeletonConfig {
    /// Creates a new `SkeletonConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to follow symlinks.
    #[must_use]
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Sets whether siblings are sorted by name.
    #[must_use]
    pub fn with_sort_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    /// Sets the deflate level. Checked by [`validate`](Self::validate).
    #[must_use]
    pub fn with_compression_level(mut self, level: Option<u8>) -> Self {
        self.compression_level = level;
        self
    }

    /// Sets the container comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Sets whether the readme entry is appended.
    #[must_use]
    pub fn with_include_readme(mut self, include: bool) -> Self {
        self.include_readme = include;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCompressionLevel` if a level is set outside 1-9.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.compression_level
            && !(1..=9).contains(&level)
        {
            return Err(SkeletonError::InvalidCompressionLevel { level });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SkeletonConfig::default();
        assert!(!config.follow_symlinks);
        assert!(!config.sort_entries);
        assert_eq!(config.compression_level, None);
        assert_eq!(config.comment, DEFAULT_COMMENT);
        assert!(config.include_readme);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SkeletonConfig::new()
            .with_follow_symlinks(true)
            .with_sort_entries(true)
            .with_compression_level(Some(1))
            .with_comment("layout snapshot")
            .with_include_readme(false);

        assert!(config.follow_symlinks);
        assert!(config.sort_entries);
        assert_eq!(config.compression_level, Some(1));
        assert_eq!(config.comment, "layout snapshot");
        assert!(!config.include_readme);
    }

    #[test]
    fn test_validate_rejects_out_of_range_level() {
        for level in [0u8, 10, 255] {
            let config = SkeletonConfig::default().with_compression_level(Some(level));
            assert!(matches!(
                config.validate(),
                Err(SkeletonError::InvalidCompressionLevel { level: l }) if l == level
            ));
        }
    }

    #[test]
    fn test_validate_accepts_full_range() {
        for level in 1..=9 {
            let config = SkeletonConfig::default().with_compression_level(Some(level));
            assert!(config.validate().is_ok());
        }
    }
}
