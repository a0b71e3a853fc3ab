//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use skelzip_core::SkeletonManifest;
use skelzip_core::SkeletonReport;
use skelzip_core::VerificationReport;
use std::path::Path;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the summary of a finished skeleton build
    fn format_creation_result(&self, output_path: &Path, report: &SkeletonReport) -> Result<()>;

    /// Format archive entry names, one per line
    fn format_manifest_short(&self, manifest: &SkeletonManifest) -> Result<()>;

    /// Format archive entries with sizes and timestamps
    fn format_manifest_long(&self, manifest: &SkeletonManifest, human_readable: bool)
    -> Result<()>;

    /// Format a verification report
    fn format_verification_report(&self, report: &VerificationReport) -> Result<()>;
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }

    /// Output carrying data and an error message, for reports that failed
    /// their checks.
    pub fn failure(operation: impl Into<String>, data: T, error: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Error,
            data: Some(data),
            error: Some(error.into()),
        }
    }
}
