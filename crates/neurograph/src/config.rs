//! Configuration types for Neurograph rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file; every field is optional.
//!
//! - [`AppConfig`] - configuration root.
//! - [`SurfaceConfig`] - drawing surface size.
//! - [`StyleConfig`] - page colors and font.
//!
//! # Example
//!
//! ```
//! # use neurograph::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.surface().width(), 390.0);
//! assert_eq!(config.surface().height(), 250.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use neurograph_core::{color::Color, layout::REFERENCE_HEIGHT};

/// Default surface width: a phone-sized screen.
pub const DEFAULT_SURFACE_WIDTH: f32 = 390.0;

/// Default font stack for all text.
pub const DEFAULT_FONT_FAMILY: &str = "-apple-system, Helvetica, Arial, sans-serif";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    surface: SurfaceConfig,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(surface: SurfaceConfig, style: StyleConfig) -> Self {
        Self { surface, style }
    }

    pub fn surface(&self) -> &SurfaceConfig {
        &self.surface
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replaces the surface width, e.g. from a command-line override.
    pub fn with_width(mut self, width: f32) -> Self {
        self.surface.width = width;
        self
    }

    /// Replaces the surface height.
    pub fn with_height(mut self, height: f32) -> Self {
        self.surface.height = height;
        self
    }
}

/// Size of the drawing surface.
///
/// The width is the screen width; the diagram height is the surface height.
/// Values are validated when a layout is computed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SurfaceConfig {
    #[serde(default = "default_width")]
    width: f32,

    #[serde(default = "default_height")]
    height: f32,
}

impl SurfaceConfig {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_width() -> f32 {
    DEFAULT_SURFACE_WIDTH
}

fn default_height() -> f32 {
    REFERENCE_HEIGHT
}

/// Page styling. Unset fields fall back to renderer defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StyleConfig {
    /// Page background, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Detail panel background, as a CSS color string.
    #[serde(default)]
    panel_color: Option<String>,

    #[serde(default)]
    font_family: Option<String>,
}

impl StyleConfig {
    pub fn new(
        background_color: Option<String>,
        panel_color: Option<String>,
        font_family: Option<String>,
    ) -> Self {
        Self {
            background_color,
            panel_color,
            font_family,
        }
    }

    /// Returns the parsed page background, or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid CSS color.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        parse_color("background_color", self.background_color.as_deref())
    }

    /// Returns the parsed panel background, or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid CSS color.
    pub fn panel_color(&self) -> Result<Option<Color>, String> {
        parse_color("panel_color", self.panel_color.as_deref())
    }

    /// Returns the configured font family or [`DEFAULT_FONT_FAMILY`].
    pub fn font_family(&self) -> &str {
        self.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY)
    }
}

fn parse_color(field: &str, value: Option<&str>) -> Result<Option<Color>, String> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| format!("Invalid {field} in config: {err}"))
}
