//! Styling and rendering of the neuron diagram.

use log::trace;

use neurograph_core::{
    color::Color,
    draw::{
        Drawable, FontWeight, LayeredOutput, PrimitiveStyle, StrokeCap, StrokeDefinition,
        StyledPrimitive, TextDefinition,
    },
    geometry::Point,
    layout::{DiagramLayout, LayoutItem, Structure},
    primitive::GeometryPrimitive,
};

use super::Svg;

const CAPTION_FONT_SIZE: u16 = 12;
const AXON_WIDTH: f32 = 4.0;
const BRANCH_WIDTH: f32 = 2.0;
const MYELIN_OPACITY: f32 = 0.6;
const NUCLEUS_OPACITY: f32 = 0.5;

/// Annotations drawn in bold.
const EMPHASIZED_LABELS: [&str; 1] = ["Soma"];

/// One style per structure, colored after the structure's anatomy record.
#[derive(Debug)]
pub(super) struct DiagramStyles {
    axon: PrimitiveStyle,
    myelin: PrimitiveStyle,
    terminal: PrimitiveStyle,
    soma: PrimitiveStyle,
    nucleus: PrimitiveStyle,
    dendrite: PrimitiveStyle,
    label: PrimitiveStyle,
    emphasized_label: PrimitiveStyle,
}

impl DiagramStyles {
    pub(super) fn new(font_family: &str) -> Self {
        let mut axon_stroke = StrokeDefinition::solid(structure_color(Structure::Axon), AXON_WIDTH);
        axon_stroke.set_cap(StrokeCap::Round);

        let mut caption = TextDefinition::new();
        caption.set_font_family(font_family);
        caption.set_font_size(CAPTION_FONT_SIZE);
        let mut emphasized = caption.clone();
        emphasized.set_weight(FontWeight::Bold);

        Self {
            axon: PrimitiveStyle::new().with_stroke(axon_stroke),
            myelin: PrimitiveStyle::new()
                .with_fill(structure_color(Structure::MyelinSegment).with_alpha(MYELIN_OPACITY)),
            terminal: PrimitiveStyle::new().with_stroke(StrokeDefinition::solid(
                structure_color(Structure::AxonTerminal),
                BRANCH_WIDTH,
            )),
            soma: PrimitiveStyle::new().with_fill(structure_color(Structure::Soma)),
            nucleus: PrimitiveStyle::new()
                .with_fill(structure_color(Structure::Nucleus).with_alpha(NUCLEUS_OPACITY)),
            dendrite: PrimitiveStyle::new().with_stroke(StrokeDefinition::solid(
                structure_color(Structure::Dendrite),
                BRANCH_WIDTH,
            )),
            label: PrimitiveStyle::new().with_text(caption),
            emphasized_label: PrimitiveStyle::new().with_text(emphasized),
        }
    }

    pub(super) fn style_for(&self, item: &LayoutItem) -> &PrimitiveStyle {
        match item.structure() {
            Structure::Axon => &self.axon,
            Structure::MyelinSegment => &self.myelin,
            Structure::AxonTerminal => &self.terminal,
            Structure::Soma => &self.soma,
            Structure::Nucleus => &self.nucleus,
            Structure::Dendrite => &self.dendrite,
            Structure::Annotation => match item.primitive() {
                GeometryPrimitive::Label { text, .. } if EMPHASIZED_LABELS.contains(text) => {
                    &self.emphasized_label
                }
                _ => &self.label,
            },
        }
    }
}

fn structure_color(structure: Structure) -> Color {
    structure
        .record()
        .map(|record| record.color().to_color())
        .unwrap_or_default()
}

impl Svg {
    /// Renders every layout item with the surface origin placed at `origin`.
    pub(super) fn render_diagram_layers(
        &self,
        layout: &DiagramLayout,
        origin: Point,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for item in layout {
            let style = self.diagram_styles.style_for(item);
            trace!(structure = item.structure().name(); "Rendering diagram item");
            output.merge(StyledPrimitive::new(item.primitive(), style).render_to_layers(origin));
        }
        output
    }
}
