//! Full-page rendering: header, diagram and the anatomy detail panel.
//!
//! The page is a single column laid out top to bottom:
//!
//! ```text
//! title
//! subtitle (centered, wrapped)
//! diagram (padded vertically)
//! divider
//! "Anatomical Components"
//! ┌ panel ──────────────────────┐
//! │ (badge) name                │
//! │         function ...        │
//! │         analogy             │
//! │ ...one row per record...    │
//! └─────────────────────────────┘
//! ```

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use neurograph_core::{
    anatomy::AnatomyRecord,
    apply_stroke,
    color::Color,
    draw::{
        Drawable, FontWeight, LayeredOutput, RenderLayer, StrokeDefinition, Text, TextAnchor,
        TextDefinition,
    },
    geometry::{Point, Size},
    layout::DiagramLayout,
};

use super::{
    Svg,
    row::{
        AnatomyRow, ICON_COLUMN_WIDTH, ICON_SPACING, RowStyles, SECONDARY_TEXT_COLOR,
        SECONDARY_TEXT_OPACITY,
    },
};
use crate::export;

pub const SCREEN_TITLE: &str = "Anatomy of a Neuron";
pub const SCREEN_SUBTITLE: &str =
    "The neuron is the fundamental unit of the nervous system, specialized for communication.";
pub const COMPONENTS_HEADING: &str = "Anatomical Components";

/// Horizontal page padding; the diagram is inset by this much on each side.
pub const HORIZONTAL_PADDING: f32 = 16.0;

const VERTICAL_PADDING: f32 = 16.0;
const STACK_SPACING: f32 = 20.0;
const DIAGRAM_VERTICAL_PADDING: f32 = 16.0;
const PANEL_PADDING: f32 = 16.0;
const PANEL_CORNER_RADIUS: f32 = 15.0;
const ROW_SPACING: f32 = 15.0;

const TITLE_FONT_SIZE: u16 = 34;
const SUBTITLE_FONT_SIZE: u16 = 15;
const HEADING_FONT_SIZE: u16 = 22;
const DIVIDER_COLOR: &str = "#c6c6c8";
const DIVIDER_WIDTH: f32 = 0.5;

/// Tracks the top of the next element while stacking the page column.
struct Column {
    top: f32,
}

impl Column {
    /// Reserves `height` and returns the vertical center of the reserved band.
    fn place(&mut self, height: f32) -> f32 {
        let center = self.top + height / 2.0;
        self.top += height + STACK_SPACING;
        center
    }
}

impl Svg {
    /// Renders the complete screen.
    ///
    /// `layout` is the diagram laid out at the inner width; the page is
    /// [`HORIZONTAL_PADDING`] wider on each side.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if the page is too narrow to hold the
    /// detail panel text.
    pub fn render_screen(
        &self,
        layout: &DiagramLayout,
        records: &[AnatomyRecord],
    ) -> Result<Document, export::Error> {
        let diagram_size = layout.surface();
        let page_width = diagram_size.width() + HORIZONTAL_PADDING * 2.0;
        let panel_width = diagram_size.width();
        let text_width = panel_width - PANEL_PADDING * 2.0 - ICON_COLUMN_WIDTH - ICON_SPACING;
        if text_width <= 0.0 {
            return Err(export::Error::Render(format!(
                "page width {page_width} is too narrow for the detail panel"
            )));
        }

        info!(page_width, records = records.len(); "Rendering anatomy screen");

        let mut output = LayeredOutput::new();
        let mut column = Column {
            top: VERTICAL_PADDING,
        };
        let center_x = page_width / 2.0;

        // Header
        let title_style = self.text_style(TITLE_FONT_SIZE, FontWeight::Bold, TextAnchor::Start);
        let title = Text::new(&title_style, SCREEN_TITLE);
        let title_y = column.place(title.size().height());
        output.merge(title.render_to_layers(Point::new(HORIZONTAL_PADDING, title_y)));

        let mut subtitle_style =
            self.text_style(SUBTITLE_FONT_SIZE, FontWeight::Normal, TextAnchor::Middle);
        subtitle_style.set_color(Some(secondary_text_color()?));
        let subtitle = Text::wrapped(&subtitle_style, SCREEN_SUBTITLE, panel_width);
        let subtitle_y = column.place(subtitle.size().height());
        output.merge(subtitle.render_to_layers(Point::new(center_x, subtitle_y)));

        // Diagram
        let diagram_center = column.place(diagram_size.height() + DIAGRAM_VERTICAL_PADDING * 2.0);
        let diagram_origin = Point::new(
            HORIZONTAL_PADDING,
            diagram_center - diagram_size.height() / 2.0,
        );
        output.merge(self.render_diagram_layers(layout, diagram_origin));

        let divider_y = column.place(0.0);
        output.add_to_layer(
            RenderLayer::Panel,
            Box::new(divider(divider_y, page_width)?),
        );

        let heading_style =
            self.text_style(HEADING_FONT_SIZE, FontWeight::Bold, TextAnchor::Middle);
        let heading = Text::new(&heading_style, COMPONENTS_HEADING);
        let heading_y = column.place(heading.size().height());
        output.merge(heading.render_to_layers(Point::new(center_x, heading_y)));

        // Detail panel
        let row_styles = RowStyles::new(&self.font_family).map_err(export::Error::Render)?;
        let analogy_styles: Vec<TextDefinition> = records
            .iter()
            .map(|record| row_styles.analogy_for(record))
            .collect();
        let rows: Vec<AnatomyRow<'_>> = records
            .iter()
            .zip(&analogy_styles)
            .map(|(record, analogy)| AnatomyRow::new(record, &row_styles, analogy, text_width))
            .collect();

        let rows_height = rows.iter().map(|row| row.size().height()).sum::<f32>()
            + ROW_SPACING * rows.len().saturating_sub(1) as f32;
        let panel_height = rows_height + PANEL_PADDING * 2.0;
        let panel_top = column.top;

        output.add_to_layer(
            RenderLayer::Panel,
            Box::new(self.panel_rect(
                Point::new(HORIZONTAL_PADDING, panel_top),
                Size::new(panel_width, panel_height),
            )),
        );

        let mut row_top = panel_top + PANEL_PADDING;
        for row in &rows {
            output.merge(row.render_to_layers(Point::new(
                HORIZONTAL_PADDING + PANEL_PADDING,
                row_top,
            )));
            row_top += row.size().height() + ROW_SPACING;
        }

        let page_size = Size::new(page_width, panel_top + panel_height + VERTICAL_PADDING);
        debug!(
            width = page_size.width(),
            height = page_size.height();
            "Screen laid out"
        );

        output.add_to_layer(
            RenderLayer::Background,
            Box::new(self.background_rect(page_size)),
        );
        Ok(Self::document(page_size, output))
    }

    fn text_style(&self, size: u16, weight: FontWeight, anchor: TextAnchor) -> TextDefinition {
        let mut style = TextDefinition::new();
        style.set_font_family(&self.font_family);
        style.set_font_size(size);
        style.set_weight(weight);
        style.set_anchor(anchor);
        style
    }

    fn panel_rect(&self, top_left: Point, size: Size) -> svg_element::Rectangle {
        svg_element::Rectangle::new()
            .set("x", top_left.x())
            .set("y", top_left.y())
            .set("width", size.width())
            .set("height", size.height())
            .set("rx", PANEL_CORNER_RADIUS)
            .set("ry", PANEL_CORNER_RADIUS)
            .set("fill", self.panel.to_string())
            .set("fill-opacity", self.panel.alpha())
    }
}

fn secondary_text_color() -> Result<Color, export::Error> {
    Color::new(SECONDARY_TEXT_COLOR)
        .map(|color| color.with_alpha(SECONDARY_TEXT_OPACITY))
        .map_err(export::Error::Render)
}

fn divider(y: f32, page_width: f32) -> Result<svg_element::Line, export::Error> {
    let color = Color::new(DIVIDER_COLOR).map_err(export::Error::Render)?;
    let stroke = StrokeDefinition::solid(color, DIVIDER_WIDTH);
    let line = svg_element::Line::new()
        .set("x1", HORIZONTAL_PADDING)
        .set("y1", y)
        .set("x2", page_width - HORIZONTAL_PADDING)
        .set("y2", y);
    Ok(apply_stroke!(line, &stroke))
}
