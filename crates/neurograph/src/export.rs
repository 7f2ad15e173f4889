//! Rendering of layouts into output documents.

pub mod svg;

use thiserror::Error;

/// Errors raised while turning a layout into a document.
#[derive(Debug, Error)]
pub enum Error {
    /// A configured style value could not be used.
    #[error("{0}")]
    Style(String),

    #[error("Render error: {0}")]
    Render(String),
}
