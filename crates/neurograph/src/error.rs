//! Error types for Neurograph operations.

use std::io;

use thiserror::Error;

use neurograph_core::layout::LayoutError;

use crate::export;

/// The main error type for Neurograph operations.
#[derive(Debug, Error)]
pub enum NeurographError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(export::Error),
}

impl From<export::Error> for NeurographError {
    fn from(error: export::Error) -> Self {
        match error {
            export::Error::Style(msg) => Self::Config(msg),
            other => Self::Export(other),
        }
    }
}
