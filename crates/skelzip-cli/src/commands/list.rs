//! List command implementation.

use crate::cli::ListArgs;
use crate::error::convert_inspect_error;
use crate::output::OutputFormatter;
use anyhow::Result;
use skelzip_core::list_skeleton;

pub fn execute(args: &ListArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let manifest =
        list_skeleton(&args.archive).map_err(|e| convert_inspect_error(e, &args.archive))?;

    if args.long {
        formatter.format_manifest_long(&manifest, args.human_readable)?;
    } else {
        formatter.format_manifest_short(&manifest)?;
    }

    Ok(())
}
