//! Skeleton zip archives of directory trees.
//!
//! `skelzip-core` writes a zip that mirrors the layout of one or more
//! directories without storing any of their data: every file becomes an
//! entry with the same name and size whose content is all zero bytes, and
//! every directory becomes an empty `name/` marker. The result shows file
//! counts, sizes and structure while compressing to almost nothing.
//!
//! # Examples
//!
//! ```no_run
//! use skelzip_core::SkeletonConfig;
//! use skelzip_core::create_skeleton;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SkeletonConfig::default();
//! let report = create_skeleton("out.zip", &["/srv/media"], &config)?;
//! println!("Mirrored {} files", report.files_added);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod cancel;
pub mod error;
pub mod inspection;
pub mod io;
pub mod report;
pub mod skeleton;

// Re-export main API types
pub use api::DEFAULT_OUTPUT;
pub use api::create_skeleton;
pub use api::create_skeleton_with_progress;
pub use cancel::CancellationToken;
pub use error::Result;
pub use error::SkeletonError;
pub use inspection::SkeletonManifest;
pub use inspection::VerificationReport;
pub use inspection::VerificationStatus;
pub use inspection::list_skeleton;
pub use inspection::verify_skeleton;
pub use report::NoopProgress;
pub use report::ProgressCallback;
pub use report::SkeletonReport;
pub use skeleton::SkeletonConfig;
