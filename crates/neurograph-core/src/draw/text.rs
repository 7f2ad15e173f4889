//! Text measurement, wrapping and rendering.
//!
//! - [`TextDefinition`] - reusable text style (font, size, weight, color, anchor)
//! - [`Text`] - one or more lines of content rendered with a definition
//!
//! Measurement and word wrapping use cosmic-text with the system fonts. When no
//! font produces glyphs for the content, widths fall back to an estimate of
//! `0.55 * font_size` per character so layout stays deterministic on machines
//! without fonts.
//!
//! ```
//! # use neurograph_core::draw::{Text, TextDefinition};
//! let mut style = TextDefinition::new();
//! style.set_font_size(12);
//!
//! let text = Text::wrapped(
//!     &style,
//!     "Receive chemical signals from other neurons at connection points called synapses.",
//!     120.0,
//! );
//! assert!(text.lines().len() > 1);
//! ```

use std::{
    borrow::Cow,
    sync::{Mutex, OnceLock, PoisonError},
};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style, Weight, Wrap};
use log::{debug, info};
use svg::node::{Text as SvgText, element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

const LINE_HEIGHT_FACTOR: f32 = 1.2;
const FALLBACK_CHAR_WIDTH_FACTOR: f32 = 0.55;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }

    fn to_cosmic(self) -> Weight {
        match self {
            Self::Normal => Weight::NORMAL,
            Self::Bold => Weight::BOLD,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        }
    }

    fn to_cosmic(self) -> Style {
        match self {
            Self::Normal => Style::Normal,
            Self::Italic => Style::Italic,
        }
    }
}

/// Horizontal alignment of text relative to its render position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Render position is the left edge.
    Start,
    /// Render position is the horizontal center.
    #[default]
    Middle,
}

impl TextAnchor {
    fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
        }
    }
}

/// Visual style for text.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `12` |
/// | Weight / style | normal |
/// | Color | `None` (SVG default, black) |
/// | Anchor | [`TextAnchor::Middle`] |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    weight: FontWeight,
    style: FontStyle,
    color: Option<Color>,
    anchor: TextAnchor,
}

impl TextDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    /// Height of one line of text.
    pub fn line_height(&self) -> f32 {
        self.font_size as f32 * LINE_HEIGHT_FACTOR
    }

    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    pub fn set_weight(&mut self, weight: FontWeight) {
        self.weight = weight;
    }

    pub fn set_style(&mut self, style: FontStyle) {
        self.style = style;
    }

    /// Sets the fill color; `None` leaves the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn set_anchor(&mut self, anchor: TextAnchor) {
        self.anchor = anchor;
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 12,
            weight: FontWeight::default(),
            style: FontStyle::default(),
            color: None,
            anchor: TextAnchor::default(),
        }
    }
}

/// Renderable text: one or more lines sharing a [`TextDefinition`].
///
/// The render position is the vertical center of the block; horizontally it
/// is the left edge or the center depending on the definition's anchor.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    lines: Vec<Cow<'a, str>>,
}

impl<'a> Text<'a> {
    /// Creates text with one line per `\n`-separated segment of `content`.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            lines: content.lines().map(Cow::Borrowed).collect(),
        }
    }

    /// Creates text word-wrapped to fit within `max_width`.
    ///
    /// A single word wider than `max_width` gets a line of its own.
    pub fn wrapped(definition: &'a TextDefinition, content: &'a str, max_width: f32) -> Self {
        let lines = text_manager()
            .wrap(content, definition, max_width)
            .into_iter()
            .map(Cow::Owned)
            .collect();
        Self { definition, lines }
    }

    pub fn lines(&self) -> &[Cow<'a, str>] {
        &self.lines
    }

    /// Width of the widest line and the total height of all lines.
    pub fn calculate_size(&self) -> Size {
        if self.lines.is_empty() {
            return Size::default();
        }
        let manager = text_manager();
        let width = self
            .lines
            .iter()
            .map(|line| manager.line_width(line, self.definition))
            .fold(0.0, f32::max);
        Size::new(width, self.lines.len() as f32 * self.definition.line_height())
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        if self.lines.is_empty() {
            return output;
        }

        let line_height = self.definition.line_height();
        let total_height = self.lines.len() as f32 * line_height;
        // First tspan's dy moves onto the first line's center
        let y_offset = -(total_height + line_height) / 2.0;

        let mut rendered = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y() + y_offset)
            .set("text-anchor", self.definition.anchor().to_svg_value())
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if self.definition.weight() != FontWeight::Normal {
            rendered = rendered.set("font-weight", self.definition.weight().to_svg_value());
        }
        if self.definition.style() != FontStyle::Normal {
            rendered = rendered.set("font-style", self.definition.style().to_svg_value());
        }
        if let Some(color) = self.definition.color() {
            rendered = rendered
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        for line in &self.lines {
            let tspan = svg_element::TSpan::new("")
                .set("x", position.x())
                .set("dy", line_height)
                .add(SvgText::new(line.as_ref()));
            rendered = rendered.add(tspan);
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered));
        output
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }
}

/// Shared font system for measuring and wrapping text.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Lays `text` out with cosmic-text and returns the (line text, width) of
    /// each visual line, or `None` when shaping produced nothing measurable.
    fn shape(
        &self,
        text: &str,
        definition: &TextDefinition,
        max_width: Option<f32>,
    ) -> Option<Vec<(String, f32)>> {
        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let font_size = definition.font_size() as f32;
        let metrics = Metrics::new(font_size, definition.line_height());
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new()
            .family(Family::Name(definition.font_family()))
            .weight(definition.weight().to_cosmic())
            .style(definition.style().to_cosmic());

        buffer.set_wrap(Wrap::Word);
        buffer.set_size(max_width, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut lines = Vec::new();
        for run in buffer.layout_runs() {
            let (Some(first), Some(last)) = (run.glyphs.first(), run.glyphs.last()) else {
                continue;
            };
            let start = first.start.min(last.start);
            let end = first.end.max(last.end);
            let Some(segment) = run.text.get(start..end) else {
                continue;
            };
            lines.push((segment.trim().to_string(), last.x + last.w));
        }

        let has_extent = lines.iter().any(|(_, width)| *width > 0.0);
        has_extent.then_some(lines)
    }

    fn line_width(&self, line: &str, definition: &TextDefinition) -> f32 {
        if line.is_empty() {
            return 0.0;
        }
        match self.shape(line, definition, None) {
            Some(lines) => lines.iter().map(|(_, width)| *width).fold(0.0, f32::max),
            None => estimate_width(line, definition),
        }
    }

    fn wrap(&self, text: &str, definition: &TextDefinition, max_width: f32) -> Vec<String> {
        let shaped = self.shape(text, definition, Some(max_width)).map(|lines| {
            lines
                .into_iter()
                .map(|(line, _)| line)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
        });

        match shaped {
            // Only trust shaped lines that kept every word
            Some(lines) if same_words(&lines, text) => lines,
            _ => {
                debug!(max_width; "Wrapping text by estimated character width");
                wrap_by_estimate(text, definition, max_width)
            }
        }
    }
}

fn text_manager() -> &'static TextManager {
    static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();
    TEXT_MANAGER.get_or_init(TextManager::new)
}

fn estimate_width(text: &str, definition: &TextDefinition) -> f32 {
    text.chars().count() as f32 * definition.font_size() as f32 * FALLBACK_CHAR_WIDTH_FACTOR
}

fn same_words(lines: &[String], text: &str) -> bool {
    lines
        .iter()
        .flat_map(|line| line.split_whitespace())
        .eq(text.split_whitespace())
}

/// Greedy word wrap using [`estimate_width`].
fn wrap_by_estimate(text: &str, definition: &TextDefinition, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate_width = estimate_width(&current, definition)
            + estimate_width(" ", definition)
            + estimate_width(word, definition);
        if candidate_width <= max_width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
