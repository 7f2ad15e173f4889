//! Command-line argument definitions for the Neurograph CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the surface size, the output target,
//! configuration file selection, what gets rendered and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Neurograph diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output SVG file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Surface width, overriding the configuration file
    #[arg(long)]
    pub width: Option<f32>,

    /// Diagram height, overriding the configuration file
    #[arg(long)]
    pub height: Option<f32>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Render only the neuron diagram, without the header and detail panel
    #[arg(long)]
    pub diagram_only: bool,

    /// Print the anatomy table as text instead of rendering SVG
    #[arg(long, conflicts_with = "diagram_only")]
    pub list: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
