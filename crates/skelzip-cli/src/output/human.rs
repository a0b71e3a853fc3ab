//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use skelzip_core::SkeletonManifest;
use skelzip_core::SkeletonReport;
use skelzip_core::VerificationReport;
use skelzip_core::VerificationStatus;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn format_number(n: usize) -> String {
        let digits = n.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i).is_multiple_of(3) {
                grouped.push(',');
            }
            grouped.push(c);
        }
        grouped
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_creation_result(&self, output_path: &Path, report: &SkeletonReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            self.line(&format!(
                "{} Skeleton written: {}",
                style("✓").green().bold(),
                output_path.display()
            ));
        } else {
            self.line(&format!("Skeleton written: {}", output_path.display()));
        }

        self.line("");
        self.line(&format!(
            "  Files:            {}",
            Self::format_number(report.files_added)
        ));
        self.line(&format!(
            "  Directories:      {}",
            Self::format_number(report.directories_added)
        ));
        if report.symlinks_added > 0 {
            self.line(&format!(
                "  Symlinks:         {}",
                Self::format_number(report.symlinks_added)
            ));
        }
        self.line(&format!(
            "  Declared size:    {}",
            Self::format_size(report.bytes_declared)
        ));
        self.line(&format!(
            "  Archive size:     {}",
            Self::format_size(report.bytes_compressed)
        ));

        if self.verbose {
            self.line(&format!("  Roots:            {}", report.roots_processed));
            self.line(&format!("  Visited:          {}", report.entries_visited));
            self.line(&format!("  Ratio:            {:.1}:1", report.compression_ratio()));
            self.line(&format!("  Duration:         {:?}", report.duration));
        }

        Ok(())
    }

    fn format_manifest_short(&self, manifest: &SkeletonManifest) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for entry in &manifest.entries {
            self.line(&entry.name);
        }

        Ok(())
    }

    fn format_manifest_long(&self, manifest: &SkeletonManifest, human_readable: bool) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for entry in &manifest.entries {
            let size_str = if human_readable {
                Self::format_size(entry.size)
            } else {
                entry.size.to_string()
            };
            let type_char = if entry.is_dir { "d" } else { "-" };
            let modified = entry.modified.as_deref().unwrap_or("-");

            self.line(&format!(
                "{type_char} {size_str:>10}  {modified:<19}  {}",
                entry.name
            ));
        }

        self.line("");
        self.line(&format!(
            "Total: {} files, {} directories, {}",
            Self::format_number(manifest.total_files),
            Self::format_number(manifest.total_dirs),
            Self::format_size(manifest.total_size)
        ));
        if !manifest.comment.is_empty() {
            self.line(&format!("Comment: {}", manifest.comment));
        }

        Ok(())
    }

    fn format_verification_report(&self, report: &VerificationReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            let status_str = match report.status {
                VerificationStatus::Pass => style("PASSED").green().bold(),
                VerificationStatus::Fail => style("FAILED").red().bold(),
            };
            self.line(&format!("Skeleton verification: {status_str}"));
        } else {
            self.line(&format!("Skeleton verification: {}", report.status));
        }

        self.line(&format!(
            "  Entries checked: {}",
            Self::format_number(report.entries_checked)
        ));
        self.line(&format!(
            "  Bytes checked:   {}",
            Self::format_size(report.bytes_checked)
        ));

        if !report.issues.is_empty() {
            self.line("");
            self.line("Issues:");
            for issue in &report.issues {
                self.line(&format!("  {issue}"));
            }
        }

        Ok(())
    }
}
