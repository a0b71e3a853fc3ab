//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use skelzip_core::DEFAULT_OUTPUT;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skelzip")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress progress lines and summaries
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a skeleton archive of one or more directories
    Create(CreateArgs),
    /// List archive contents without extraction
    List(ListArgs),
    /// Check that an archive holds only zero-filled entries
    Verify(VerifyArgs),
    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args)]
pub struct CreateArgs {
    /// Directories (or files) to mirror
    #[arg(value_name = "DIR", required = true)]
    pub roots: Vec<PathBuf>,

    /// Output archive file path
    #[arg(short, long, value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Compression level (1-9)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(1..=9))]
    pub compression_level: Option<u8>,

    /// Follow symbolic links
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Sort entries by name for reproducible archives
    #[arg(long)]
    pub sort: bool,

    /// Do not append the readme entry
    #[arg(long)]
    pub no_readme: bool,
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Show detailed entry information
    #[arg(short, long)]
    pub long: bool,

    /// Show sizes in human-readable format
    #[arg(short = 'H', long)]
    pub human_readable: bool,
}

#[derive(clap::Args)]
pub struct VerifyArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Do not require the readme entry
    #[arg(long)]
    pub no_readme: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_create_defaults_output() {
        let cli = Cli::try_parse_from(["skelzip", "create", "photos"]).unwrap();
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.output, PathBuf::from("out.zip"));
                assert_eq!(args.roots, [PathBuf::from("photos")]);
                assert!(!args.sort);
            }
            _ => panic!("expected create"),
        }
    }

    #[test]
    fn test_create_requires_root() {
        assert!(Cli::try_parse_from(["skelzip", "create"]).is_err());
    }

    #[test]
    fn test_create_rejects_level_out_of_range() {
        assert!(Cli::try_parse_from(["skelzip", "create", "-l", "0", "dir"]).is_err());
        assert!(Cli::try_parse_from(["skelzip", "create", "-l", "10", "dir"]).is_err());
    }
}
