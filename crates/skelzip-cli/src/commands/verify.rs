//! Verify command implementation

use crate::cli::VerifyArgs;
use crate::error::convert_inspect_error;
use crate::output::OutputFormatter;
use anyhow::Result;
use anyhow::bail;
use skelzip_core::SkeletonConfig;
use skelzip_core::VerificationStatus;
use skelzip_core::verify_skeleton;

pub fn execute(args: &VerifyArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = SkeletonConfig::default().with_include_readme(!args.no_readme);

    let report = verify_skeleton(&args.archive, &config)
        .map_err(|e| convert_inspect_error(e, &args.archive))?;

    formatter.format_verification_report(&report)?;

    match report.status {
        VerificationStatus::Pass => Ok(()),
        VerificationStatus::Fail => {
            bail!(
                "Archive '{}' is not a skeleton: {} issue(s) found",
                args.archive.display(),
                report.issues.len()
            )
        }
    }
}
