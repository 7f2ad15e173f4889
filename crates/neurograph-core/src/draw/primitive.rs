//! Drawing geometry primitives with a visual style.

use svg::node::element::{self as svg_element, path::Data};

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, Text, TextDefinition},
    geometry::{Point, Size},
    primitive::GeometryPrimitive,
};

/// Paint settings for a [`GeometryPrimitive`].
///
/// Shapes use the stroke and fill; labels use the text definition. A shape
/// with neither stroke nor fill renders as an invisible element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimitiveStyle {
    stroke: Option<StrokeDefinition>,
    fill: Option<Color>,
    text: TextDefinition,
}

impl PrimitiveStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn text(&self) -> &TextDefinition {
        &self.text
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_text(mut self, text: TextDefinition) -> Self {
        self.text = text;
        self
    }
}

/// A primitive paired with its style, ready to render.
///
/// Primitive coordinates are absolute within the diagram surface; the
/// position passed to [`Drawable::render_to_layers`] is where the surface's
/// origin lands.
#[derive(Debug, Clone, Copy)]
pub struct StyledPrimitive<'a> {
    primitive: &'a GeometryPrimitive,
    style: &'a PrimitiveStyle,
}

impl<'a> StyledPrimitive<'a> {
    pub fn new(primitive: &'a GeometryPrimitive, style: &'a PrimitiveStyle) -> Self {
        Self { primitive, style }
    }

    fn paint<T: SetAttr>(&self, element: T) -> T {
        let element = match self.style.fill {
            Some(fill) => element
                .set_attr("fill", fill.to_string())
                .set_attr("fill-opacity", fill.alpha().to_string()),
            None => element.set_attr("fill", "none".to_string()),
        };
        match &self.style.stroke {
            Some(stroke) => element.apply(stroke),
            None => element,
        }
    }
}

/// Attribute setting shared by the SVG element types a primitive can become.
trait SetAttr: Sized {
    fn set_attr(self, name: &str, value: String) -> Self;
    fn apply(self, stroke: &StrokeDefinition) -> Self;
}

macro_rules! impl_set_attr {
    ($($element:ty),*) => {$(
        impl SetAttr for $element {
            fn set_attr(self, name: &str, value: String) -> Self {
                self.set(name, value)
            }

            fn apply(self, stroke: &StrokeDefinition) -> Self {
                apply_stroke!(self, stroke)
            }
        }
    )*};
}

impl_set_attr!(
    svg_element::Line,
    svg_element::Path,
    svg_element::Circle,
    svg_element::Rectangle
);

impl Drawable for StyledPrimitive<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        match *self.primitive {
            GeometryPrimitive::LineSegment { from, to } => {
                let from = from.add_point(position);
                let to = to.add_point(position);
                let line = svg_element::Line::new()
                    .set("x1", from.x())
                    .set("y1", from.y())
                    .set("x2", to.x())
                    .set("y2", to.y());
                output.add_to_layer(RenderLayer::Content, Box::new(self.paint(line)));
            }
            GeometryPrimitive::QuadraticCurve { from, to, control } => {
                let from = from.add_point(position);
                let to = to.add_point(position);
                let control = control.add_point(position);
                let data = Data::new()
                    .move_to((from.x(), from.y()))
                    .quadratic_curve_to((control.x(), control.y(), to.x(), to.y()));
                let path = svg_element::Path::new().set("d", data);
                output.add_to_layer(RenderLayer::Content, Box::new(self.paint(path)));
            }
            GeometryPrimitive::Circle { center, radius } => {
                let center = center.add_point(position);
                let circle = svg_element::Circle::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", radius);
                output.add_to_layer(RenderLayer::Content, Box::new(self.paint(circle)));
            }
            GeometryPrimitive::RoundedRect {
                center,
                size,
                corner_radius,
            } => {
                let min = center.add_point(position).to_bounds(size).min_point();
                let rect = svg_element::Rectangle::new()
                    .set("x", min.x())
                    .set("y", min.y())
                    .set("width", size.width())
                    .set("height", size.height())
                    .set("rx", corner_radius)
                    .set("ry", corner_radius);
                output.add_to_layer(RenderLayer::Content, Box::new(self.paint(rect)));
            }
            GeometryPrimitive::Label { anchor, text } => {
                let label = Text::new(&self.style.text, text);
                output.merge(label.render_to_layers(anchor.add_point(position)));
            }
        }

        output
    }

    fn size(&self) -> Size {
        match *self.primitive {
            GeometryPrimitive::Label { text, .. } => {
                Text::new(&self.style.text, text).calculate_size()
            }
            _ => self.primitive.bounds().to_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::{color::SymbolicColor, draw::StrokeCap};

    fn render(primitive: &GeometryPrimitive, style: &PrimitiveStyle) -> String {
        StyledPrimitive::new(primitive, style)
            .render_to_layers(Point::default())
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect()
    }

    #[test]
    fn test_line_uses_stroke() {
        let mut stroke = StrokeDefinition::solid(SymbolicColor::Blue.into(), 4.0);
        stroke.set_cap(StrokeCap::Round);
        let style = PrimitiveStyle::new().with_stroke(stroke);
        let axon = GeometryPrimitive::LineSegment {
            from: Point::new(350.0, 125.0),
            to: Point::new(800.0, 125.0),
        };

        let svg = render(&axon, &style);
        assert!(svg.contains("<line"));
        assert!(svg.contains("x1=\"350\""));
        assert!(svg.contains("x2=\"800\""));
        assert!(svg.contains("stroke-width=\"4\""));
        assert!(svg.contains("stroke-linecap=\"round\""));
        assert!(svg.contains("fill=\"none\""));
    }

    #[test]
    fn test_curve_renders_quadratic_path() {
        let style = PrimitiveStyle::new()
            .with_stroke(StrokeDefinition::solid(SymbolicColor::Green.into(), 2.0));
        let dendrite = GeometryPrimitive::QuadraticCurve {
            from: Point::new(200.0, 125.0),
            to: Point::new(140.0, 125.0),
            control: Point::new(170.0, 125.0),
        };

        let svg = render(&dendrite, &style);
        assert!(svg.contains("<path"));
        assert!(svg.contains("M200,125"));
        assert!(svg.contains("Q170,125,140,125"));
        assert!(svg.contains("fill=\"none\""));
    }

    #[test]
    fn test_circle_fill_without_stroke() {
        let style =
            PrimitiveStyle::new().with_fill(SymbolicColor::Orange.to_color().with_alpha(0.5));
        let nucleus = GeometryPrimitive::Circle {
            center: Point::new(200.0, 125.0),
            radius: 15.0,
        };

        let svg = render(&nucleus, &style);
        assert!(svg.contains("<circle"));
        assert!(svg.contains("r=\"15\""));
        assert!(svg.contains("fill-opacity=\"0.5\""));
        assert!(!svg.contains("stroke="));
    }

    #[test]
    fn test_rounded_rect_positioned_by_center() {
        let style = PrimitiveStyle::new().with_fill(SymbolicColor::Cyan.into());
        let myelin = GeometryPrimitive::RoundedRect {
            center: Point::new(430.0, 125.0),
            size: Size::new(25.0, 12.0),
            corner_radius: 5.0,
        };

        let svg = render(&myelin, &style);
        assert!(svg.contains("x=\"417.5\""));
        assert!(svg.contains("y=\"119\""));
        assert!(svg.contains("rx=\"5\""));
    }

    #[test]
    fn test_position_offsets_primitive() {
        let style = PrimitiveStyle::new().with_fill(Color::default());
        let circle = GeometryPrimitive::Circle {
            center: Point::new(10.0, 20.0),
            radius: 1.0,
        };
        let svg: String = StyledPrimitive::new(&circle, &style)
            .render_to_layers(Point::new(16.0, 100.0))
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect();
        assert!(svg.contains("cx=\"26\""));
        assert!(svg.contains("cy=\"120\""));
    }

    #[test]
    fn test_label_goes_to_text_layer() {
        let style = PrimitiveStyle::new();
        let label = GeometryPrimitive::Label {
            anchor: Point::new(500.0, 105.0),
            text: "Axon",
        };
        let styled = StyledPrimitive::new(&label, &style);

        let output = styled.render_to_layers(Point::default());
        assert_eq!(output.layer_len(RenderLayer::Text), 1);
        assert_eq!(output.layer_len(RenderLayer::Content), 0);
        assert!(styled.size().width() > 0.0);
    }

    #[test]
    fn test_shape_size_is_bounds() {
        let style = PrimitiveStyle::new();
        let soma = GeometryPrimitive::Circle {
            center: Point::new(200.0, 125.0),
            radius: 40.0,
        };
        let size = StyledPrimitive::new(&soma, &style).size();
        assert_approx_eq!(f32, size.width(), 80.0);
        assert_approx_eq!(f32, size.height(), 80.0);
    }
}
