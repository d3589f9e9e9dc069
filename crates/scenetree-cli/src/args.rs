//! Command-line argument definitions for the SceneTree CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the export format,
//! configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

use scenetree::config::OutputFormat;

/// Command-line arguments for the SceneTree tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input scene file
    #[arg(help = "Path to the input .tscn file")]
    pub input: String,

    /// Path to the output file; the tree is written to stdout when absent
    #[arg(short, long)]
    pub output: Option<String>,

    /// Export format, overriding the configuration file
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Export formats selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Outline,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Outline => OutputFormat::Outline,
        }
    }
}
