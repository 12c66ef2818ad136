use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "NanoWeave Contributors",
    version,
    about = "NanoWeave CLI - Build DNA-origami-style lattice designs from structured descriptions and write them as scadnano-style files.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an assembly design and write it to a timestamped output file.
    Build(BuildArgs),
    /// Extract a structured parameter set from a prompt without building.
    Extract(ExtractArgs),
}

/// Arguments for the `build` subcommand.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Free-text design description to run through the regex extractor.
    #[arg(short = 'p', long, value_name = "TEXT", conflicts_with = "params")]
    pub prompt: Option<String>,

    /// Path to a TOML parameter file (alternative to --prompt).
    #[arg(long, value_name = "PATH")]
    pub params: Option<PathBuf>,

    /// Directory for the generated design file; created if missing.
    #[arg(short, long, value_name = "DIR", default_value = "designs")]
    pub output_dir: PathBuf,

    /// Print the per-directive run report after construction.
    #[arg(long)]
    pub report: bool,
}

/// Arguments for the `extract` subcommand.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Free-text design description to run through the regex extractor.
    #[arg(required = true, value_name = "TEXT")]
    pub prompt: String,

    /// Output format for the extracted parameter set.
    #[arg(short, long, value_enum, default_value_t = ExtractFormat::Toml)]
    pub format: ExtractFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractFormat {
    Toml,
    Json,
}
