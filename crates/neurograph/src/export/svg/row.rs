//! A single row of the anatomy detail panel.

use svg::node::element as svg_element;

use neurograph_core::{
    anatomy::AnatomyRecord,
    color::Color,
    draw::{
        Drawable, FontStyle, FontWeight, LayeredOutput, RenderLayer, Text, TextAnchor,
        TextDefinition,
    },
    geometry::{Point, Size},
};

/// Width reserved for the icon badge.
pub(super) const ICON_COLUMN_WIDTH: f32 = 35.0;
/// Gap between the badge and the text column.
pub(super) const ICON_SPACING: f32 = 15.0;

const BADGE_RADIUS: f32 = 16.0;
const TEXT_SPACING: f32 = 4.0;
const ANALOGY_TOP_PADDING: f32 = 2.0;
const ANALOGY_OPACITY: f32 = 0.9;

const NAME_FONT_SIZE: u16 = 17;
const FUNCTION_FONT_SIZE: u16 = 15;
const ANALOGY_FONT_SIZE: u16 = 12;
const BADGE_FONT_SIZE: u16 = 15;
pub(super) const SECONDARY_TEXT_COLOR: &str = "#3c3c43";
pub(super) const SECONDARY_TEXT_OPACITY: f32 = 0.6;

/// Text styles shared by all rows.
#[derive(Debug, Clone)]
pub(super) struct RowStyles {
    badge: TextDefinition,
    name: TextDefinition,
    function: TextDefinition,
    analogy: TextDefinition,
}

impl RowStyles {
    pub(super) fn new(font_family: &str) -> Result<Self, String> {
        let mut base = TextDefinition::new();
        base.set_font_family(font_family);
        base.set_anchor(TextAnchor::Start);

        let mut badge = base.clone();
        badge.set_anchor(TextAnchor::Middle);
        badge.set_font_size(BADGE_FONT_SIZE);
        badge.set_weight(FontWeight::Bold);
        badge.set_color(Some(Color::new("white")?));

        let mut name = base.clone();
        name.set_font_size(NAME_FONT_SIZE);
        name.set_weight(FontWeight::Bold);

        let mut function = base.clone();
        function.set_font_size(FUNCTION_FONT_SIZE);
        function.set_color(Some(
            Color::new(SECONDARY_TEXT_COLOR)?.with_alpha(SECONDARY_TEXT_OPACITY),
        ));

        let mut analogy = base;
        analogy.set_font_size(ANALOGY_FONT_SIZE);
        analogy.set_style(FontStyle::Italic);

        Ok(Self {
            badge,
            name,
            function,
            analogy,
        })
    }

    /// Analogy style tinted with the record's color.
    pub(super) fn analogy_for(&self, record: &AnatomyRecord) -> TextDefinition {
        let mut analogy = self.analogy.clone();
        analogy.set_color(Some(record.color().to_color().with_alpha(ANALOGY_OPACITY)));
        analogy
    }
}

/// Badge, name, wrapped function text and analogy for one record.
///
/// The render position is the row's top-left corner.
#[derive(Debug)]
pub(super) struct AnatomyRow<'a> {
    record: &'a AnatomyRecord,
    badge: Text<'a>,
    name: Text<'a>,
    function: Text<'a>,
    analogy: Text<'a>,
}

impl<'a> AnatomyRow<'a> {
    /// Lays out a row whose text column is `text_width` wide.
    ///
    /// `analogy_style` comes from [`RowStyles::analogy_for`].
    pub(super) fn new(
        record: &'a AnatomyRecord,
        styles: &'a RowStyles,
        analogy_style: &'a TextDefinition,
        text_width: f32,
    ) -> Self {
        Self {
            record,
            badge: Text::new(&styles.badge, badge_initial(record.name())),
            name: Text::wrapped(&styles.name, record.name(), text_width),
            function: Text::wrapped(&styles.function, record.function(), text_width),
            analogy: Text::wrapped(analogy_style, record.analogy(), text_width),
        }
    }

    fn text_blocks(&self) -> [(&Text<'a>, f32); 3] {
        [
            (&self.name, 0.0),
            (&self.function, TEXT_SPACING),
            (&self.analogy, TEXT_SPACING + ANALOGY_TOP_PADDING),
        ]
    }

    fn text_height(&self) -> f32 {
        self.text_blocks()
            .iter()
            .map(|(text, gap)| gap + text.size().height())
            .sum()
    }
}

impl Drawable for AnatomyRow<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let badge_center = position.add_point(Point::new(ICON_COLUMN_WIDTH / 2.0, BADGE_RADIUS));
        let badge = svg_element::Circle::new()
            .set("cx", badge_center.x())
            .set("cy", badge_center.y())
            .set("r", BADGE_RADIUS)
            .set("fill", self.record.color().to_color().to_string())
            .set("data-icon", self.record.icon());
        output.add_to_layer(RenderLayer::Content, Box::new(badge));
        output.merge(self.badge.render_to_layers(badge_center));

        let text_x = position.x() + ICON_COLUMN_WIDTH + ICON_SPACING;
        let mut top = position.y();
        for (text, gap) in self.text_blocks() {
            top += gap;
            let height = text.size().height();
            output.merge(text.render_to_layers(Point::new(text_x, top + height / 2.0)));
            top += height;
        }

        output
    }

    fn size(&self) -> Size {
        let text_width = self
            .text_blocks()
            .iter()
            .map(|(text, _)| text.size().width())
            .fold(0.0, f32::max);
        Size::new(
            ICON_COLUMN_WIDTH + ICON_SPACING + text_width,
            self.text_height().max(BADGE_RADIUS * 2.0),
        )
    }
}

/// First character of the part name, shown inside the badge.
fn badge_initial(name: &str) -> &str {
    name.char_indices()
        .nth(1)
        .map_or(name, |(end, _)| &name[..end])
}
