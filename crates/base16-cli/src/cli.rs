//! CLI argument definitions for the base16 GTK generator.

use std::path::PathBuf;

use base16_model::{DEFAULT_OUTPUT_PATH, VariantRequest};
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "base16-gtk",
    version,
    about = "Generate GTK stylesheet overrides from base16 color schemes",
    long_about = "Generate an adw-gtk3 stylesheet override from a base16 color scheme.\n\n\
                  Derives color ramps and semantic UI colors from the sixteen base\n\
                  colors and writes them as SCSS variables and @define-color rules."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the stylesheet override for a scheme.
    Generate(GenerateArgs),

    /// Show the scheme's base colors and inferred variant without writing.
    Colors(ColorsArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path to the base16 scheme YAML file.
    #[arg(value_name = "SCHEME")]
    pub scheme: PathBuf,

    /// Output path for the generated SCSS.
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Theme variant; auto picks from the scheme background.
    #[arg(long = "variant", value_enum, default_value = "auto")]
    pub variant: VariantArg,

    /// Print the document to stdout instead of writing it.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ColorsArgs {
    /// Path to the base16 scheme YAML file.
    #[arg(value_name = "SCHEME")]
    pub scheme: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum VariantArg {
    Auto,
    Dark,
    Light,
}

impl From<VariantArg> for VariantRequest {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Auto => VariantRequest::Auto,
            VariantArg::Dark => VariantRequest::Dark,
            VariantArg::Light => VariantRequest::Light,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
