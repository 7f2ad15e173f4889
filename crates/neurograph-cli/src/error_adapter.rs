//! Error adapter for converting NeurographError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use neurograph::NeurographError;

/// Adapter that wraps a [`NeurographError`] for miette reporting.
pub struct ErrorAdapter<'a>(pub &'a NeurographError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            NeurographError::Io(_) => "neurograph::io",
            NeurographError::Layout(_) => "neurograph::layout",
            NeurographError::Config(_) => "neurograph::config",
            NeurographError::Export(_) => "neurograph::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            NeurographError::Io(_) => "check that the output path is writable",
            NeurographError::Layout(_) => {
                "pass a finite, positive value to --width and --height"
            }
            NeurographError::Config(_) => {
                "check the configuration file; colors accept CSS names and hex values"
            }
            NeurographError::Export(_) => "use a wider surface for the full screen",
        };
        Some(Box::new(help))
    }
}
