//! Create command implementation.

use crate::cli::CreateArgs;
use crate::error::convert_create_error;
use crate::output::OutputFormatter;
use crate::signal::cancel_on_ctrl_c;
use anyhow::Result;
use skelzip_core::NoopProgress;
use skelzip_core::ProgressCallback;
use skelzip_core::SkeletonConfig;
use skelzip_core::create_skeleton_with_progress;
use skelzip_core::skeleton::PrintProgress;

pub fn execute(args: &CreateArgs, formatter: &dyn OutputFormatter, quiet: bool) -> Result<()> {
    let config = SkeletonConfig::default()
        .with_follow_symlinks(args.follow_symlinks)
        .with_sort_entries(args.sort)
        .with_compression_level(args.compression_level)
        .with_include_readme(!args.no_readme);

    let cancel = cancel_on_ctrl_c();

    let mut progress: Box<dyn ProgressCallback> = if quiet {
        Box::new(NoopProgress)
    } else {
        Box::new(PrintProgress::stdout())
    };

    let report = create_skeleton_with_progress(
        &args.output,
        &args.roots,
        &config,
        &mut *progress,
        &cancel,
    )
    .map_err(|e| convert_create_error(e, &args.output))?;

    formatter.format_creation_result(&args.output, &report)?;

    Ok(())
}
