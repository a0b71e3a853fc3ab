//! Verification report types.

use std::fmt;

/// Overall outcome of a verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationStatus {
    /// The archive is a well-formed skeleton.
    Pass,
    /// At least one issue was found.
    Fail,
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

/// What is wrong with an entry or with the archive as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// Entry content holds a non-zero byte.
    NonZeroContent {
        /// Offset of the first non-zero byte.
        offset: u64,
    },
    /// Decompressed length differs from the declared size.
    SizeMismatch {
        /// Size in the entry header.
        declared: u64,
        /// Bytes actually read.
        actual: u64,
    },
    /// Directory marker carries content.
    DirectoryHasContent,
    /// Readme entry is absent.
    MissingReadme,
    /// Container comment differs from the expected one.
    UnexpectedComment {
        /// Comment found in the archive.
        found: String,
    },
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonZeroContent { offset } => write!(f, "non-zero byte at offset {offset}"),
            Self::SizeMismatch { declared, actual } => {
                write!(f, "declared {declared} bytes but holds {actual}")
            }
            Self::DirectoryHasContent => write!(f, "directory entry has content"),
            Self::MissingReadme => write!(f, "readme entry missing"),
            Self::UnexpectedComment { found } => write!(f, "unexpected comment {found:?}"),
        }
    }
}

/// A single verification finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationIssue {
    /// Entry name, or `None` for archive-level issues.
    pub entry: Option<String>,
    /// The finding.
    pub kind: IssueKind,
}

impl fmt::Display for VerificationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entry {
            Some(entry) => write!(f, "{entry}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Result of checking an archive against the skeleton invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    /// Overall status.
    pub status: VerificationStatus,
    /// Number of entries read.
    pub entries_checked: usize,
    /// Sum of declared sizes of the checked entries.
    pub bytes_checked: u64,
    /// Findings, in archive order.
    pub issues: Vec<VerificationIssue>,
}

impl VerificationReport {
    /// Builds a report, deriving the status from `issues`.
    #[must_use]
    pub fn new(entries_checked: usize, bytes_checked: u64, issues: Vec<VerificationIssue>) -> Self {
        let status = if issues.is_empty() {
            VerificationStatus::Pass
        } else {
            VerificationStatus::Fail
        };
        Self {
            status,
            entries_checked,
            bytes_checked,
            issues,
        }
    }

    /// Returns `true` if no issue was found.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.status == VerificationStatus::Pass
    }
}
