//! SceneTree CLI library
//!
//! This module contains the core CLI logic for the SceneTree tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, FormatArg};

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use scenetree::{SceneTreeBuilder, SceneTreeError};

/// Run the SceneTree CLI application
///
/// This function reads the input scene, assembles its node tree and writes
/// the exported tree to the output file, or to stdout when no output is
/// given.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `SceneTreeError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), SceneTreeError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing scene"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(format) = args.format {
        app_config = app_config.with_format(format.into());
    }

    let source = fs::read_to_string(&args.input)?;

    let builder = SceneTreeBuilder::new(app_config);
    let tree = builder.parse(&source)?;
    let text = builder.render(&tree)?;

    match &args.output {
        Some(output) => {
            fs::write(output, text)?;
            info!(output_file = output; "Scene tree exported successfully");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }

    Ok(())
}
