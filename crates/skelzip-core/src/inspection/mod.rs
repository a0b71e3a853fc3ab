//! Skeleton archive inspection.
//!
//! Reads an archive back to list what it mirrors, or to check that it really
//! is a skeleton: every entry zero-filled, directories empty, the readme and
//! comment in place.
//!
//! # Examples
//!
//! ```no_run
//! use skelzip_core::SkeletonConfig;
//! use skelzip_core::list_skeleton;
//! use skelzip_core::verify_skeleton;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manifest = list_skeleton("out.zip")?;
//! println!("{} entries, {} bytes declared", manifest.entries.len(), manifest.total_size);
//!
//! let report = verify_skeleton("out.zip", &SkeletonConfig::default())?;
//! if report.is_pass() {
//!     println!("archive holds no file data");
//! }
//! # Ok(())
//! # }
//! ```

pub mod list;
pub mod manifest;
pub mod report;
pub mod verify;

pub use list::list_skeleton;
pub use manifest::ManifestEntry;
pub use manifest::SkeletonManifest;
pub use report::IssueKind;
pub use report::VerificationIssue;
pub use report::VerificationReport;
pub use report::VerificationStatus;
pub use verify::verify_skeleton;
