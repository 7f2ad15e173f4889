//! Atomic drawing instructions produced by the layout engine.
//!
//! A [`GeometryPrimitive`] describes *where* something is drawn, never *how*:
//! colors, stroke widths and fonts are decided by the renderer. Primitives are
//! plain `Copy` values.

use crate::geometry::{Bounds, Point, Size};

/// A single drawable geometric instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryPrimitive {
    /// Straight line between two points.
    LineSegment { from: Point, to: Point },
    /// Quadratic Bézier curve from `from` to `to` bending towards `control`.
    QuadraticCurve {
        from: Point,
        to: Point,
        control: Point,
    },
    Circle { center: Point, radius: f32 },
    /// Axis-aligned rectangle with rounded corners, positioned by its center.
    RoundedRect {
        center: Point,
        size: Size,
        corner_radius: f32,
    },
    /// Text centered on `anchor`.
    Label { anchor: Point, text: &'static str },
}

impl GeometryPrimitive {
    /// Short lowercase name of the primitive kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LineSegment { .. } => "line",
            Self::QuadraticCurve { .. } => "curve",
            Self::Circle { .. } => "circle",
            Self::RoundedRect { .. } => "rounded-rect",
            Self::Label { .. } => "label",
        }
    }

    /// Returns the points that define this primitive.
    ///
    /// For curves this includes the control point, which is enough to bound
    /// the curve since a quadratic Bézier never leaves the hull of its three
    /// points.
    pub fn defining_points(&self) -> Vec<Point> {
        match *self {
            Self::LineSegment { from, to } => vec![from, to],
            Self::QuadraticCurve { from, to, control } => vec![from, control, to],
            Self::Circle { center, .. }
            | Self::RoundedRect { center, .. }
            | Self::Label { anchor: center, .. } => vec![center],
        }
    }

    /// Returns the geometric extent of this primitive.
    ///
    /// Labels are treated as their anchor point since text metrics belong to
    /// the renderer.
    pub fn bounds(&self) -> Bounds {
        match *self {
            Self::Circle { center, radius } => {
                center.to_bounds(Size::new(radius * 2.0, radius * 2.0))
            }
            Self::RoundedRect { center, size, .. } => center.to_bounds(size),
            _ => Bounds::from_points(self.defining_points()).unwrap_or_default(),
        }
    }

    /// Checks that every coordinate and dimension is finite.
    pub fn is_finite(&self) -> bool {
        let points_finite = self.defining_points().into_iter().all(Point::is_finite);
        let extent_finite = match *self {
            Self::Circle { radius, .. } => radius.is_finite(),
            Self::RoundedRect {
                size,
                corner_radius,
                ..
            } => size.width().is_finite() && size.height().is_finite() && corner_radius.is_finite(),
            _ => true,
        };
        points_finite && extent_finite
    }
}
