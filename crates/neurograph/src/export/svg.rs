//! SVG export for the neuron diagram and the full anatomy screen.
//!
//! [`SvgBuilder`] resolves the configured style into an [`Svg`] renderer.
//! The renderer produces [`svg::Document`]s; callers serialize them with
//! `to_string`.

mod diagram;
mod row;
mod screen;

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use neurograph_core::{
    color::Color,
    draw::{LayeredOutput, RenderLayer},
    geometry::{Point, Size},
    layout::DiagramLayout,
};

use crate::{config::StyleConfig, export};

use diagram::DiagramStyles;

pub use screen::{COMPONENTS_HEADING, HORIZONTAL_PADDING, SCREEN_SUBTITLE, SCREEN_TITLE};

const DEFAULT_BACKGROUND_COLOR: &str = "#f2f2f7";
const DEFAULT_PANEL_COLOR: &str = "#ffffff";

/// Builder for [`Svg`] renderers.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Resolves colors and fonts.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Style`] if a configured color is invalid.
    pub fn build(self) -> Result<Svg, export::Error> {
        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);

        let background = match style.background_color().map_err(export::Error::Style)? {
            Some(color) => color,
            None => Color::new(DEFAULT_BACKGROUND_COLOR).map_err(export::Error::Style)?,
        };
        let panel = match style.panel_color().map_err(export::Error::Style)? {
            Some(color) => color,
            None => Color::new(DEFAULT_PANEL_COLOR).map_err(export::Error::Style)?,
        };
        let font_family = style.font_family().to_string();

        debug!(font_family; "SVG renderer configured");

        Ok(Svg {
            background,
            panel,
            diagram_styles: DiagramStyles::new(&font_family),
            font_family,
        })
    }
}

/// Renders layouts to SVG documents.
#[derive(Debug)]
pub struct Svg {
    background: Color,
    panel: Color,
    font_family: String,
    diagram_styles: DiagramStyles,
}

impl Svg {
    /// Renders just the diagram on a surface-sized canvas.
    pub fn render_diagram(&self, layout: &DiagramLayout) -> Document {
        let surface = layout.surface();
        let mut output = LayeredOutput::new();
        output.add_to_layer(
            RenderLayer::Background,
            Box::new(self.background_rect(surface)),
        );
        output.merge(self.render_diagram_layers(layout, Point::default()));

        info!(
            width = surface.width(),
            height = surface.height();
            "Diagram rendered"
        );
        Self::document(surface, output)
    }

    fn background_rect(&self, size: Size) -> svg_element::Rectangle {
        svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", self.background.to_string())
            .set("fill-opacity", self.background.alpha())
    }

    fn document(size: Size, output: LayeredOutput) -> Document {
        let mut doc = Document::new()
            .set("width", size.width())
            .set("height", size.height())
            .set("viewBox", (0.0, 0.0, size.width(), size.height()));
        for node in output.render() {
            doc = doc.add(node);
        }
        doc
    }
}
