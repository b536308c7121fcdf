mod cmd;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use docmeta_core::config::ReportFormat;

#[derive(Debug, Parser)]
#[command(
    name = "docmeta",
    version,
    about = "Validate YAML frontmatter across a markdown documentation tree"
)]
struct Cli {
    /// Config file (defaults to ~/.config/docmeta/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Config profile to use
    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate every markdown document under a directory
    Validate(ValidateArgs),

    /// Validate a single markdown document
    CheckFile(CheckFileArgs),

    /// Validate configuration and print resolved settings
    Doctor,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Directory (or single file) to scan; overrides the profile's docs_root
    pub path: Option<PathBuf>,

    /// Report format: text, json, csv or table
    #[arg(long)]
    pub output: Option<ReportFormat>,

    /// Fail on warnings as well as errors
    #[arg(long)]
    pub strict: bool,

    /// Suppress progress output (RUST_LOG is ignored for stderr)
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct CheckFileArgs {
    /// Markdown file to validate
    pub file: PathBuf,

    /// Path used for category inference instead of the file's own path
    #[arg(long = "as", value_name = "PATH_HINT")]
    pub path_hint: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate(args) => {
            cmd::validate::run(cli.config.as_deref(), cli.profile.as_deref(), args)
        }
        Commands::CheckFile(args) => {
            cmd::check_file::run(cli.config.as_deref(), cli.profile.as_deref(), args)
        }
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref()),
    }
}
