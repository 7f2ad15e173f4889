//! Stroke definitions for lines, curves and outlines.
//!
//! Property names follow SVG:
//!
//! | Property | SVG attribute |
//! |----------|---------------|
//! | `color` | `stroke`, `stroke-opacity` |
//! | `width` | `stroke-width` |
//! | `cap` | `stroke-linecap` |
//!
//! Use [`apply_stroke!`](crate::apply_stroke!) to set all of them on an SVG
//! element at once:
//!
//! ```
//! use neurograph_core::color::SymbolicColor;
//! use neurograph_core::draw::{StrokeCap, StrokeDefinition};
//! use svg::node::element::Line;
//!
//! let mut axon = StrokeDefinition::solid(SymbolicColor::Blue.into(), 4.0);
//! axon.set_cap(StrokeCap::Round);
//!
//! let line = neurograph_core::apply_stroke!(Line::new(), &axon);
//! assert!(line.to_string().contains("stroke-linecap=\"round\""));
//! ```

use crate::color::Color;

/// How line endpoints are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl StrokeCap {
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// A solid stroke: color, width and cap.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    cap: StrokeCap,
}

impl StrokeDefinition {
    /// Creates a solid stroke with butt caps.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: StrokeCap::default(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    pub fn set_cap(&mut self, cap: StrokeCap) {
        self.cap = cap;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value())
    };
}
