//! CLI logic for the Neurograph diagram tool.
//!
//! This module contains the core CLI logic: configuration loading, command
//! line overrides and choosing what to render.

pub mod error_adapter;

mod args;
mod config;
mod listing;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use neurograph::{NeurographError, ScreenBuilder};

/// Run the Neurograph CLI application
///
/// Renders the anatomy screen (or the bare diagram, or the text listing)
/// and writes it to the output file, or to stdout when no output path is
/// given.
///
/// # Errors
///
/// Returns `NeurographError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), NeurographError> {
    let output = render(args)?;

    match &args.output {
        Some(path) => {
            fs::write(path, output)?;
            info!(output_file = path; "Output written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Produces the requested output as a string.
fn render(args: &Args) -> Result<String, NeurographError> {
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(width) = args.width {
        app_config = app_config.with_width(width);
    }
    if let Some(height) = args.height {
        app_config = app_config.with_height(height);
    }

    let builder = ScreenBuilder::new(app_config);
    if args.list {
        info!(records = builder.records().len(); "Listing anatomy records");
        return Ok(listing::render_listing(builder.records()));
    }

    let surface = builder.config().surface();
    info!(
        width = surface.width(),
        height = surface.height(),
        diagram_only = args.diagram_only;
        "Rendering"
    );

    if args.diagram_only {
        builder.render_diagram_svg()
    } else {
        builder.render_screen_svg()
    }
}
