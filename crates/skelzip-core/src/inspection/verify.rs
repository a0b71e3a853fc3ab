//! Skeleton verification.

use std::io::Read;
use std::path::Path;

use crate::Result;
use crate::SkeletonError;
use crate::inspection::list::open_zip;
use crate::inspection::report::IssueKind;
use crate::inspection::report::VerificationIssue;
use crate::inspection::report::VerificationReport;
use crate::skeleton::config::README_NAME;
use crate::skeleton::config::SkeletonConfig;

/// Checks that an archive is a skeleton as `config` would have produced it.
///
/// Every entry other than the readme is decompressed and must hold exactly
/// its declared number of zero bytes; directory entries must be empty. The
/// comment must match `config.comment` and, if `config.include_readme` is
/// set, the readme entry must be present.
///
/// Findings are reported in the returned report, not as errors.
///
/// # Errors
///
/// Returns an error if the archive cannot be opened or an entry cannot be
/// decompressed.
///
/// # Examples
///
/// ```no_run
/// use skelzip_core::SkeletonConfig;
/// use skelzip_core::verify_skeleton;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = verify_skeleton("out.zip", &SkeletonConfig::default())?;
/// for issue in &report.issues {
///     eprintln!("{issue}");
/// }
/// # Ok(())
/// # }
/// ```
pub fn verify_skeleton<P: AsRef<Path>>(
    archive_path: P,
    config: &SkeletonConfig,
) -> Result<VerificationReport> {
    let mut archive = open_zip(archive_path.as_ref())?;
    let mut issues = Vec::new();
    let mut bytes_checked = 0u64;
    let mut readme_seen = false;

    let comment = String::from_utf8_lossy(archive.comment()).into_owned();
    if comment != config.comment {
        issues.push(VerificationIssue {
            entry: None,
            kind: IssueKind::UnexpectedComment { found: comment },
        });
    }

    let mut buffer = vec![0u8; 64 * 1024];
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| SkeletonError::InvalidArchive(format!("failed to read entry {i}: {e}")))?;
        let name = entry.name().to_string();

        if name == README_NAME {
            readme_seen = true;
            continue;
        }

        let declared = entry.size();
        bytes_checked += declared;

        let mut actual = 0u64;
        let mut first_non_zero = None;
        loop {
            let n = entry.read(&mut buffer).map_err(|e| {
                SkeletonError::InvalidArchive(format!("failed to decompress {name}: {e}"))
            })?;
            if n == 0 {
                break;
            }
            if first_non_zero.is_none()
                && let Some(pos) = buffer[..n].iter().position(|&b| b != 0)
            {
                first_non_zero = Some(actual + pos as u64);
            }
            actual += n as u64;
        }

        let mut flag = |kind| {
            issues.push(VerificationIssue {
                entry: Some(name.clone()),
                kind,
            });
        };

        if entry.is_dir() {
            if actual > 0 || declared > 0 {
                flag(IssueKind::DirectoryHasContent);
            }
            continue;
        }
        if actual != declared {
            flag(IssueKind::SizeMismatch { declared, actual });
        }
        if let Some(offset) = first_non_zero {
            flag(IssueKind::NonZeroContent { offset });
        }
    }

    if config.include_readme && !readme_seen {
        issues.push(VerificationIssue {
            entry: None,
            kind: IssueKind::MissingReadme,
        });
    }

    Ok(VerificationReport::new(archive.len(), bytes_checked, issues))
}
