//! Command-line argument definitions for the mermalade CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, strictness, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the mermalade diagram translator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input PlantUML file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output Mermaid file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Fail when relationship lines cannot be converted
    #[arg(long)]
    pub strict: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
