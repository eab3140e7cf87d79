//! CLI logic for the mermalade diagram translator.
//!
//! This module contains the core CLI logic for the mermalade diagram
//! translator.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use mermalade::{
    DiagramConverter, MermaladeError,
    config::{AppConfig, ConvertConfig},
};

/// Run the mermalade CLI application
///
/// This function converts the input PlantUML file to Mermaid text and
/// writes the result to the output file, or to stdout when no output
/// path is given.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `MermaladeError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Strict-mode conversion failures
pub fn run(args: &Args) -> Result<(), MermaladeError> {
    info!(input_path = args.input; "Converting diagram");

    // Load configuration, the --strict flag overrides the config file
    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.strict {
        app_config = AppConfig::new(ConvertConfig::new(true));
    }

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Convert using the DiagramConverter API
    let converter = DiagramConverter::new(app_config);
    let mermaid = converter.convert(&source)?;

    // Write output file or print to stdout
    match &args.output {
        Some(output) => {
            fs::write(output, &mermaid)?;
            info!(output_file = output.as_str(); "Mermaid diagram written");
        }
        None => println!("{mermaid}"),
    }

    Ok(())
}
