//! Drawable components for SVG rendering.
//!
//! Every component implements [`Drawable`], which renders into a
//! [`LayeredOutput`] so that backgrounds, shapes and text end up in the right
//! z-order regardless of the order in which components are visited.

mod layer;
mod primitive;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use primitive::{PrimitiveStyle, StyledPrimitive};
pub use stroke::{StrokeCap, StrokeDefinition};
pub use text::{FontStyle, FontWeight, Text, TextAnchor, TextDefinition};

use crate::geometry::{Point, Size};

pub trait Drawable: std::fmt::Debug {
    /// Renders the component at `position` into layered SVG nodes.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    fn size(&self) -> Size;
}
