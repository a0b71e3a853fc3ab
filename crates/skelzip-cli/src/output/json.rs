//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use skelzip_core::SkeletonManifest;
use skelzip_core::SkeletonReport;
use skelzip_core::VerificationReport;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct EntryOutput<'a> {
    name: &'a str,
    is_dir: bool,
    size: u64,
    compressed_size: u64,
    compression: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    modified: Option<&'a str>,
}

#[derive(Serialize)]
struct ManifestOutput<'a> {
    comment: &'a str,
    total_files: usize,
    total_dirs: usize,
    total_size: u64,
    entries: Vec<EntryOutput<'a>>,
}

impl<'a> ManifestOutput<'a> {
    fn new(manifest: &'a SkeletonManifest) -> Self {
        Self {
            comment: &manifest.comment,
            total_files: manifest.total_files,
            total_dirs: manifest.total_dirs,
            total_size: manifest.total_size,
            entries: manifest
                .entries
                .iter()
                .map(|e| EntryOutput {
                    name: &e.name,
                    is_dir: e.is_dir,
                    size: e.size,
                    compressed_size: e.compressed_size,
                    compression: &e.compression,
                    modified: e.modified.as_deref(),
                })
                .collect(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_creation_result(&self, output_path: &Path, report: &SkeletonReport) -> Result<()> {
        #[derive(Serialize)]
        struct CreationOutput {
            output_path: String,
            roots_processed: usize,
            files_added: usize,
            directories_added: usize,
            symlinks_added: usize,
            entries_visited: usize,
            bytes_declared: u64,
            bytes_compressed: u64,
            compression_ratio: f64,
            readme_added: bool,
            duration_ms: u128,
        }

        let data = CreationOutput {
            output_path: output_path.display().to_string(),
            roots_processed: report.roots_processed,
            files_added: report.files_added,
            directories_added: report.directories_added,
            symlinks_added: report.symlinks_added,
            entries_visited: report.entries_visited,
            bytes_declared: report.bytes_declared,
            bytes_compressed: report.bytes_compressed,
            compression_ratio: report.compression_ratio(),
            readme_added: report.readme_added,
            duration_ms: report.duration.as_millis(),
        };

        Self::output(&JsonOutput::success("create", data))
    }

    fn format_manifest_short(&self, manifest: &SkeletonManifest) -> Result<()> {
        Self::output(&JsonOutput::success("list", ManifestOutput::new(manifest)))
    }

    fn format_manifest_long(
        &self,
        manifest: &SkeletonManifest,
        _human_readable: bool,
    ) -> Result<()> {
        self.format_manifest_short(manifest)
    }

    fn format_verification_report(&self, report: &VerificationReport) -> Result<()> {
        #[derive(Serialize)]
        struct IssueOutput {
            #[serde(skip_serializing_if = "Option::is_none")]
            entry: Option<String>,
            message: String,
        }

        #[derive(Serialize)]
        struct VerificationOutput {
            result: String,
            entries_checked: usize,
            bytes_checked: u64,
            issues: Vec<IssueOutput>,
        }

        let data = VerificationOutput {
            result: report.status.to_string(),
            entries_checked: report.entries_checked,
            bytes_checked: report.bytes_checked,
            issues: report
                .issues
                .iter()
                .map(|i| IssueOutput {
                    entry: i.entry.clone(),
                    message: i.kind.to_string(),
                })
                .collect(),
        };

        if report.is_pass() {
            Self::output(&JsonOutput::success("verify", data))
        } else {
            let error = format!("{} issue(s) found", report.issues.len());
            Self::output(&JsonOutput::failure("verify", data, error))
        }
    }
}
