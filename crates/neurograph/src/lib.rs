//! Neurograph - an annotated diagram of a neuron and its anatomy reference.
//!
//! This crate ties the layout engine and the anatomy table from
//! `neurograph-core` to SVG output. [`ScreenBuilder`] renders either the bare
//! diagram or the full reference screen (diagram plus one detail row per
//! anatomical part).

pub mod config;

mod error;
mod export;

pub use neurograph_core::{anatomy, color, draw, geometry, layout, primitive};

pub use error::NeurographError;
pub use export::{
    Error as ExportError,
    svg::{COMPONENTS_HEADING, SCREEN_SUBTITLE, SCREEN_TITLE},
};

use log::{debug, info};

use neurograph_core::{
    anatomy::{AnatomyRecord, anatomy_records},
    layout::{DiagramLayout, DiagramLayoutEngine, Dimension, LayoutError},
};

use config::AppConfig;
use export::svg::{HORIZONTAL_PADDING, Svg, SvgBuilder};

/// Builder for rendering the neuron diagram and the anatomy screen.
///
/// # Examples
///
/// ```
/// use neurograph::{ScreenBuilder, config::AppConfig};
///
/// let builder = ScreenBuilder::new(AppConfig::default().with_width(800.0));
///
/// let layout = builder.layout().expect("valid surface");
/// assert_eq!(layout.len(), 23);
///
/// let svg = builder.render_diagram_svg().expect("renders");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct ScreenBuilder {
    config: AppConfig,
}

impl ScreenBuilder {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The anatomy records shown in the detail panel.
    pub fn records(&self) -> &'static [AnatomyRecord] {
        anatomy_records()
    }

    /// Lays out the diagram across the full configured surface.
    ///
    /// # Errors
    ///
    /// Returns [`NeurographError::Layout`] if the configured surface size is
    /// not finite and positive.
    pub fn layout(&self) -> Result<DiagramLayout, NeurographError> {
        let surface = self.config.surface();
        Ok(self.engine().layout(surface.width())?)
    }

    /// Renders the diagram alone as an SVG string.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid surface size or style configuration.
    pub fn render_diagram_svg(&self) -> Result<String, NeurographError> {
        let layout = self.layout()?;
        debug!(primitives = layout.len(); "Diagram laid out");

        let svg = self.svg()?;
        Ok(svg.render_diagram(&layout).to_string())
    }

    /// Renders the complete screen (title, diagram, detail panel) as an SVG
    /// string.
    ///
    /// The configured width is the page width; the diagram is laid out inside
    /// the page's horizontal padding.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid surface size or style configuration,
    /// or when the page is too narrow for the diagram or the detail panel.
    pub fn render_screen_svg(&self) -> Result<String, NeurographError> {
        let page_width = self.config.surface().width();
        if !page_width.is_finite() || page_width <= 0.0 {
            return Err(LayoutError::InvalidDimension {
                dimension: Dimension::Width,
                value: page_width,
            }
            .into());
        }

        let diagram_width = page_width - HORIZONTAL_PADDING * 2.0;
        if diagram_width <= 0.0 {
            return Err(ExportError::Render(format!(
                "page width {page_width} leaves no room for the diagram"
            ))
            .into());
        }
        info!(page_width; "Rendering anatomy screen");

        let layout = self.engine().layout(diagram_width)?;
        let svg = self.svg()?;
        let doc = svg.render_screen(&layout, self.records())?;
        Ok(doc.to_string())
    }

    fn engine(&self) -> DiagramLayoutEngine {
        DiagramLayoutEngine::new().with_surface_height(self.config.surface().height())
    }

    fn svg(&self) -> Result<Svg, NeurographError> {
        Ok(SvgBuilder::new().with_style(self.config.style()).build()?)
    }
}
