//! Proportional layout of the neuron diagram.
//!
//! The layout engine turns a drawing-surface size into an ordered list of
//! [`GeometryPrimitive`]s. Horizontal positions are fractions of the surface
//! width, vertical positions are offsets from the surface's horizontal center
//! line, and all structure sizes (soma radius, myelin segment size, dendrite
//! length) are fixed in surface units.
//!
//! # Primitive order
//!
//! | # | Structure | Primitive |
//! |---|-----------|-----------|
//! | 1 | Axon | `LineSegment` |
//! | 5 | Myelin segments | `RoundedRect` |
//! | 3 | Axon terminals | `LineSegment` |
//! | 2 | Soma, nucleus | `Circle` |
//! | 7 | Dendrites | `QuadraticCurve` |
//! | 5 | Annotations | `Label` |
//!
//! The order doubles as the painting order: later items are drawn on top.
//!
//! # Example
//!
//! ```
//! # use neurograph_core::layout::{self, REFERENCE_HEIGHT};
//! # use neurograph_core::primitive::GeometryPrimitive;
//! let layout = layout::layout(1000.0).unwrap();
//! assert_eq!(layout.len(), 23);
//! assert_eq!(layout.surface().height(), REFERENCE_HEIGHT);
//!
//! match layout.items()[0].primitive() {
//!     GeometryPrimitive::LineSegment { from, to } => {
//!         assert_eq!(from.x(), 350.0);
//!         assert_eq!(to.x(), 800.0);
//!     }
//!     other => panic!("unexpected primitive {other:?}"),
//! }
//! ```

use std::{f32::consts::PI, fmt};

use log::{debug, trace};
use thiserror::Error;

use crate::{
    anatomy::{AnatomyRecord, anatomy_records},
    geometry::{Bounds, Point, Size},
    primitive::GeometryPrimitive,
};

/// Surface height the diagram was designed for.
pub const REFERENCE_HEIGHT: f32 = 250.0;

/// Smallest surface width at which every primitive stays inside the surface
/// (at [`REFERENCE_HEIGHT`]). Narrower surfaces still lay out, but dendrite
/// tips reach past the left edge.
pub const MIN_CONTAINED_WIDTH: f32 = 300.0;

/// Number of primitives in every layout.
pub const PRIMITIVE_COUNT: usize = 23;

const AXON_START: f32 = 0.35;
const AXON_END: f32 = 0.8;

const MYELIN_START: f32 = 0.43;
const MYELIN_SEGMENTS: usize = 5;
const MYELIN_SPACING: f32 = 30.0;
const MYELIN_WIDTH: f32 = 25.0;
const MYELIN_HEIGHT: f32 = 12.0;
const MYELIN_CORNER_RADIUS: f32 = 5.0;

const TERMINAL_END: f32 = 0.9;
const TERMINAL_SPREAD: f32 = 30.0;

const SOMA_CENTER: f32 = 0.2;
const SOMA_RADIUS: f32 = 40.0;
const NUCLEUS_RADIUS: f32 = 15.0;

const DENDRITE_COUNT: usize = 7;
const DENDRITE_LENGTH: f32 = 60.0;
const DENDRITE_CONTROL_DISTANCE: f32 = 30.0;

/// Annotation text with its anchor as (width fraction, offset from center line).
const ANNOTATIONS: [(&str, f32, f32); 5] = [
    ("Soma", SOMA_CENTER, 55.0),
    ("Dendrites", 0.08, 0.0),
    ("Axon", 0.5, -20.0),
    ("Myelin", 0.5, 20.0),
    ("Terminals", TERMINAL_END, -50.0),
];

/// Surface dimension named in a [`LayoutError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => f.write_str("width"),
            Self::Height => f.write_str("height"),
        }
    }
}

/// Errors produced by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    /// A surface dimension was zero, negative, NaN or infinite.
    #[error("invalid surface {dimension} `{value}`: must be finite and greater than zero")]
    InvalidDimension { dimension: Dimension, value: f32 },
}

/// The anatomical structure a primitive depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structure {
    Axon,
    MyelinSegment,
    AxonTerminal,
    Soma,
    Nucleus,
    Dendrite,
    /// A text label; not part of the neuron itself.
    Annotation,
}

impl Structure {
    pub fn name(self) -> &'static str {
        match self {
            Self::Axon => "axon",
            Self::MyelinSegment => "myelin",
            Self::AxonTerminal => "terminal",
            Self::Soma => "soma",
            Self::Nucleus => "nucleus",
            Self::Dendrite => "dendrite",
            Self::Annotation => "annotation",
        }
    }

    /// Returns the anatomy record describing this structure.
    ///
    /// The nucleus belongs to the soma record; annotations have none.
    pub fn record(self) -> Option<&'static AnatomyRecord> {
        let index = match self {
            Self::Dendrite => 0,
            Self::Soma | Self::Nucleus => 1,
            Self::Axon => 3,
            Self::MyelinSegment => 4,
            Self::AxonTerminal => 6,
            Self::Annotation => return None,
        };
        anatomy_records().get(index)
    }
}

/// A primitive tagged with the structure it depicts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutItem {
    structure: Structure,
    primitive: GeometryPrimitive,
}

impl LayoutItem {
    fn new(structure: Structure, primitive: GeometryPrimitive) -> Self {
        Self {
            structure,
            primitive,
        }
    }

    pub fn structure(&self) -> Structure {
        self.structure
    }

    pub fn primitive(&self) -> &GeometryPrimitive {
        &self.primitive
    }
}

/// The complete, ordered diagram for one surface size.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramLayout {
    surface: Size,
    items: Vec<LayoutItem>,
}

impl DiagramLayout {
    /// Size of the surface this layout was computed for.
    pub fn surface(&self) -> Size {
        self.surface
    }

    pub fn items(&self) -> &[LayoutItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LayoutItem> {
        self.items.iter()
    }

    /// Iterates over the bare primitives in painting order.
    pub fn primitives(&self) -> impl Iterator<Item = &GeometryPrimitive> + '_ {
        self.items.iter().map(LayoutItem::primitive)
    }

    /// Consumes the layout, keeping only the primitives.
    pub fn into_primitives(self) -> Vec<GeometryPrimitive> {
        self.items.into_iter().map(|item| item.primitive).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the combined extent of all primitives.
    pub fn bounds(&self) -> Bounds {
        self.primitives()
            .map(GeometryPrimitive::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
            .unwrap_or_default()
    }

    /// Returns the surface as bounds anchored at the origin.
    pub fn surface_bounds(&self) -> Bounds {
        Bounds::new_from_top_left(Point::default(), self.surface)
    }
}

impl<'a> IntoIterator for &'a DiagramLayout {
    type Item = &'a LayoutItem;
    type IntoIter = std::slice::Iter<'a, LayoutItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Computes neuron diagrams for a given surface width.
///
/// The engine owns the surface height, which defaults to
/// [`REFERENCE_HEIGHT`]. It holds no other state, so one engine can serve any
/// number of callers and threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramLayoutEngine {
    surface_height: f32,
}

impl Default for DiagramLayoutEngine {
    fn default() -> Self {
        Self {
            surface_height: REFERENCE_HEIGHT,
        }
    }
}

impl DiagramLayoutEngine {
    /// Creates an engine using [`REFERENCE_HEIGHT`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the surface height (builder style).
    ///
    /// The value is validated when [`layout`](Self::layout) runs.
    pub fn with_surface_height(mut self, height: f32) -> Self {
        self.surface_height = height;
        self
    }

    pub fn surface_height(&self) -> f32 {
        self.surface_height
    }

    /// Lays out the diagram for a surface of the given width.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidDimension`] if the width or the engine's
    /// height is not a finite number greater than zero.
    pub fn layout(&self, width: f32) -> Result<DiagramLayout, LayoutError> {
        let width = validate(Dimension::Width, width)?;
        let height = validate(Dimension::Height, self.surface_height)?;

        debug!(width, height; "Computing neuron diagram layout");

        let frame = Frame::new(width, height);
        let mut items = Vec::with_capacity(PRIMITIVE_COUNT);

        items.push(LayoutItem::new(
            Structure::Axon,
            GeometryPrimitive::LineSegment {
                from: frame.at(AXON_START, 0.0),
                to: frame.at(AXON_END, 0.0),
            },
        ));

        items.extend((0..MYELIN_SEGMENTS).map(|i| {
            let center = Point::new(
                width * MYELIN_START + i as f32 * MYELIN_SPACING,
                frame.center_y,
            );
            LayoutItem::new(
                Structure::MyelinSegment,
                GeometryPrimitive::RoundedRect {
                    center,
                    size: Size::new(MYELIN_WIDTH, MYELIN_HEIGHT),
                    corner_radius: MYELIN_CORNER_RADIUS,
                },
            )
        }));

        let branch_point = frame.at(AXON_END, 0.0);
        items.extend(
            [-TERMINAL_SPREAD, 0.0, TERMINAL_SPREAD]
                .into_iter()
                .map(|dy| {
                    LayoutItem::new(
                        Structure::AxonTerminal,
                        GeometryPrimitive::LineSegment {
                            from: branch_point,
                            to: frame.at(TERMINAL_END, dy),
                        },
                    )
                }),
        );

        let soma_center = frame.at(SOMA_CENTER, 0.0);
        items.push(LayoutItem::new(
            Structure::Soma,
            GeometryPrimitive::Circle {
                center: soma_center,
                radius: SOMA_RADIUS,
            },
        ));
        items.push(LayoutItem::new(
            Structure::Nucleus,
            GeometryPrimitive::Circle {
                center: soma_center,
                radius: NUCLEUS_RADIUS,
            },
        ));

        items.extend((0..DENDRITE_COUNT).map(|i| {
            // Seven branches evenly around the full circle, starting at the
            // leftmost direction.
            let angle = PI * 2.0 / DENDRITE_COUNT as f32 * i as f32 + PI;
            LayoutItem::new(
                Structure::Dendrite,
                GeometryPrimitive::QuadraticCurve {
                    from: soma_center,
                    to: soma_center.add_point(Point::from_polar(DENDRITE_LENGTH, angle)),
                    control: soma_center
                        .add_point(Point::from_polar(DENDRITE_CONTROL_DISTANCE, angle)),
                },
            )
        }));

        items.extend(ANNOTATIONS.iter().map(|&(text, fraction, dy)| {
            LayoutItem::new(
                Structure::Annotation,
                GeometryPrimitive::Label {
                    anchor: frame.at(fraction, dy),
                    text,
                },
            )
        }));

        trace!(primitives = items.len(); "Neuron diagram layout computed");

        Ok(DiagramLayout {
            surface: Size::new(width, height),
            items,
        })
    }
}

/// Lays out the diagram at [`REFERENCE_HEIGHT`].
///
/// # Errors
///
/// Returns [`LayoutError::InvalidDimension`] for a width that is not a finite
/// number greater than zero.
pub fn layout(width: f32) -> Result<DiagramLayout, LayoutError> {
    DiagramLayoutEngine::new().layout(width)
}

/// Lays out the diagram on a surface of arbitrary height.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidDimension`] if either dimension is not a
/// finite number greater than zero.
pub fn layout_with_height(width: f32, height: f32) -> Result<DiagramLayout, LayoutError> {
    DiagramLayoutEngine::new()
        .with_surface_height(height)
        .layout(width)
}

fn validate(dimension: Dimension, value: f32) -> Result<f32, LayoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::InvalidDimension { dimension, value })
    }
}

/// Maps (width fraction, vertical offset) pairs onto the surface.
struct Frame {
    width: f32,
    center_y: f32,
}

impl Frame {
    fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            center_y: height / 2.0,
        }
    }

    fn at(&self, fraction: f32, dy: f32) -> Point {
        Point::new(self.width * fraction, self.center_y + dy)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn assert_point(actual: Point, x: f32, y: f32) {
        assert_approx_eq!(f32, actual.x(), x, epsilon = 1e-3);
        assert_approx_eq!(f32, actual.y(), y, epsilon = 1e-3);
    }

    fn layout_1000() -> DiagramLayout {
        layout(1000.0).expect("valid width")
    }

    #[test]
    fn test_primitive_count_and_kind_order() {
        let kinds: Vec<&str> = layout_1000().primitives().map(|p| p.kind()).collect();
        let mut expected = vec!["line"];
        expected.extend(["rounded-rect"; 5]);
        expected.extend(["line"; 3]);
        expected.extend(["circle"; 2]);
        expected.extend(["curve"; 7]);
        expected.extend(["label"; 5]);
        assert_eq!(kinds, expected);
        assert_eq!(kinds.len(), PRIMITIVE_COUNT);
    }

    #[test]
    fn test_structure_order() {
        let structures: Vec<Structure> = layout_1000().iter().map(|i| i.structure()).collect();
        assert_eq!(structures[0], Structure::Axon);
        assert!(structures[1..6].iter().all(|s| *s == Structure::MyelinSegment));
        assert!(structures[6..9].iter().all(|s| *s == Structure::AxonTerminal));
        assert_eq!(structures[9], Structure::Soma);
        assert_eq!(structures[10], Structure::Nucleus);
        assert!(structures[11..18].iter().all(|s| *s == Structure::Dendrite));
        assert!(structures[18..].iter().all(|s| *s == Structure::Annotation));
    }

    #[test]
    fn test_axon_at_reference_width() {
        let layout = layout_1000();
        let GeometryPrimitive::LineSegment { from, to } = *layout.items()[0].primitive() else {
            panic!("axon should be a line segment");
        };
        assert_point(from, 350.0, 125.0);
        assert_point(to, 800.0, 125.0);
    }

    #[test]
    fn test_myelin_segments() {
        let layout = layout_1000();
        for (i, item) in layout.items()[1..6].iter().enumerate() {
            let GeometryPrimitive::RoundedRect {
                center,
                size,
                corner_radius,
            } = *item.primitive()
            else {
                panic!("myelin segment {i} should be a rounded rect");
            };
            assert_point(center, 430.0 + 30.0 * i as f32, 125.0);
            assert_eq!(size, Size::new(25.0, 12.0));
            assert_eq!(corner_radius, 5.0);
        }

        let GeometryPrimitive::RoundedRect { center, .. } = *layout.items()[3].primitive() else {
            panic!("myelin segment 2 should be a rounded rect");
        };
        assert_point(center, 490.0, 125.0);
    }

    #[test]
    fn test_axon_terminals_fan_out() {
        let layout = layout_1000();
        let expected_ends = [95.0, 125.0, 155.0];
        for (item, end_y) in layout.items()[6..9].iter().zip(expected_ends) {
            let GeometryPrimitive::LineSegment { from, to } = *item.primitive() else {
                panic!("terminal should be a line segment");
            };
            assert_point(from, 800.0, 125.0);
            assert_point(to, 900.0, end_y);
        }
    }

    #[test]
    fn test_soma_and_nucleus_share_center() {
        let layout = layout_1000();
        let GeometryPrimitive::Circle {
            center: soma,
            radius: soma_radius,
        } = *layout.items()[9].primitive()
        else {
            panic!("soma should be a circle");
        };
        let GeometryPrimitive::Circle {
            center: nucleus,
            radius: nucleus_radius,
        } = *layout.items()[10].primitive()
        else {
            panic!("nucleus should be a circle");
        };
        assert_point(soma, 200.0, 125.0);
        assert_eq!(soma, nucleus);
        assert_eq!(soma_radius, 40.0);
        assert_eq!(nucleus_radius, 15.0);
    }

    #[test]
    fn test_first_dendrite_points_left() {
        let layout = layout_1000();
        let GeometryPrimitive::QuadraticCurve { from, to, control } =
            *layout.items()[11].primitive()
        else {
            panic!("dendrite should be a curve");
        };
        assert_point(from, 200.0, 125.0);
        assert_point(to, 140.0, 125.0);
        assert_point(control, 170.0, 125.0);
    }

    #[test]
    fn test_dendrites_cover_full_circle() {
        let layout = layout_1000();
        let soma = Point::new(200.0, 125.0);
        for (i, item) in layout.items()[11..18].iter().enumerate() {
            let GeometryPrimitive::QuadraticCurve { to, control, .. } = *item.primitive() else {
                panic!("dendrite {i} should be a curve");
            };
            let angle = PI * 2.0 / 7.0 * i as f32 + PI;
            assert_point(to, 200.0 + 60.0 * angle.cos(), 125.0 + 60.0 * angle.sin());
            assert_approx_eq!(f32, to.sub_point(soma).hypot(), 60.0, epsilon = 1e-3);
            // Control point sits halfway along the branch
            let mid = soma.midpoint(to);
            assert_point(control, mid.x(), mid.y());
        }

        // Some branches lean right of the soma: the fan is a full circle
        let reaches_right = layout.items()[11..18].iter().any(|item| {
            matches!(item.primitive(), GeometryPrimitive::QuadraticCurve { to, .. } if to.x() > 200.0)
        });
        assert!(reaches_right);
    }

    #[test]
    fn test_annotations() {
        let layout = layout_1000();
        let labels: Vec<(&str, Point)> = layout
            .iter()
            .filter_map(|item| match *item.primitive() {
                GeometryPrimitive::Label { anchor, text } => Some((text, anchor)),
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 5);

        let expected = [
            ("Soma", 200.0, 180.0),
            ("Dendrites", 80.0, 125.0),
            ("Axon", 500.0, 105.0),
            ("Myelin", 500.0, 145.0),
            ("Terminals", 900.0, 75.0),
        ];
        for ((text, anchor), (expected_text, x, y)) in labels.into_iter().zip(expected) {
            assert_eq!(text, expected_text);
            assert_point(anchor, x, y);
        }
    }

    #[test]
    fn test_custom_height_moves_center_line() {
        let layout = layout_with_height(1000.0, 400.0).unwrap();
        assert_eq!(layout.surface(), Size::new(1000.0, 400.0));
        let GeometryPrimitive::LineSegment { from, .. } = *layout.items()[0].primitive() else {
            panic!("axon should be a line segment");
        };
        assert_point(from, 350.0, 200.0);
    }

    #[test]
    fn test_engine_defaults_to_reference_height() {
        let engine = DiagramLayoutEngine::default();
        assert_eq!(engine.surface_height(), REFERENCE_HEIGHT);
        assert_eq!(engine.layout(640.0).unwrap(), layout(640.0).unwrap());
    }

    #[test]
    fn test_invalid_width_rejected() {
        for width in [0.0, -1.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let err = layout(width).unwrap_err();
            assert!(matches!(
                err,
                LayoutError::InvalidDimension {
                    dimension: Dimension::Width,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_invalid_height_rejected() {
        let err = layout_with_height(500.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidDimension {
                dimension: Dimension::Height,
                value: 0.0
            }
        );
        assert!(err.to_string().contains("invalid surface height"));
    }

    #[test]
    fn test_tiny_width_is_finite() {
        let layout = layout(10.0).unwrap();
        assert_eq!(layout.len(), PRIMITIVE_COUNT);
        assert!(layout.primitives().all(GeometryPrimitive::is_finite));
        // Dendrites extend past the left edge without clamping
        assert!(layout.bounds().min_x() < 0.0);
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(layout(777.0).unwrap(), layout(777.0).unwrap());
        assert_eq!(
            format!("{:?}", layout(777.0).unwrap()),
            format!("{:?}", layout(777.0).unwrap())
        );
    }

    #[test]
    fn test_structure_records() {
        assert_eq!(Structure::Axon.record().map(|r| r.name()), Some("Axon"));
        assert_eq!(
            Structure::Nucleus.record().map(|r| r.name()),
            Some("Soma (Cell Body)")
        );
        assert_eq!(
            Structure::AxonTerminal.record().map(|r| r.name()),
            Some("Axon Terminals")
        );
        assert!(Structure::Annotation.record().is_none());
    }

    #[test]
    fn test_into_primitives() {
        let layout = layout_1000();
        let expected: Vec<GeometryPrimitive> = layout.primitives().copied().collect();
        assert_eq!(layout.into_primitives(), expected);
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn width_strategy() -> impl Strategy<Value = f32> {
        1.0f32..5000.0
    }

    /// Every width yields the same number of primitives, all finite.
    fn check_count_and_finite(width: f32) -> Result<(), TestCaseError> {
        let layout = layout(width).map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(layout.len(), PRIMITIVE_COUNT);
        prop_assert!(layout.primitives().all(GeometryPrimitive::is_finite));
        Ok(())
    }

    /// Width-proportional coordinates scale linearly, y coordinates do not move.
    fn check_linear_scaling(w1: f32, w2: f32) -> Result<(), TestCaseError> {
        let a = layout(w1).map_err(|err| TestCaseError::fail(err.to_string()))?;
        let b = layout(w2).map_err(|err| TestCaseError::fail(err.to_string()))?;

        for (pa, pb) in a.primitives().zip(b.primitives()) {
            for (qa, qb) in pa.defining_points().into_iter().zip(pb.defining_points()) {
                prop_assert!(approx_eq!(f32, qa.y(), qb.y(), epsilon = 1e-3));
            }
        }

        // Axon, terminals, soma, nucleus and labels are pure width fractions
        let scaled = [0usize, 6, 7, 8, 9, 10, 18, 19, 20, 21, 22];
        let ratio = w2 / w1;
        for index in scaled {
            let pa = a.items()[index].primitive().defining_points();
            let pb = b.items()[index].primitive().defining_points();
            for (qa, qb) in pa.into_iter().zip(pb) {
                prop_assert!(approx_eq!(
                    f32,
                    qa.x() * ratio,
                    qb.x(),
                    epsilon = 1e-2 * ratio.max(1.0)
                ));
            }
        }

        // Dendrites start at the soma center
        for (da, db) in a.items()[11..18].iter().zip(&b.items()[11..18]) {
            let (
                GeometryPrimitive::QuadraticCurve { from: fa, .. },
                GeometryPrimitive::QuadraticCurve { from: fb, .. },
            ) = (da.primitive(), db.primitive())
            else {
                return Err(TestCaseError::fail("dendrite is not a curve"));
            };
            prop_assert!(approx_eq!(
                f32,
                fa.x() * ratio,
                fb.x(),
                epsilon = 1e-2 * ratio.max(1.0)
            ));
        }
        Ok(())
    }

    /// Wide enough surfaces contain every primitive.
    fn check_contained(width: f32) -> Result<(), TestCaseError> {
        let layout = layout(width).map_err(|err| TestCaseError::fail(err.to_string()))?;
        let surface = layout.surface_bounds().add_padding(crate::geometry::Insets::uniform(1e-3));
        for primitive in layout.primitives() {
            prop_assert!(
                surface.contains(&primitive.bounds()),
                "{primitive:?} escapes a {width} wide surface"
            );
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn count_and_finite(width in width_strategy()) {
            check_count_and_finite(width)?;
        }

        #[test]
        fn linear_scaling(w1 in 10.0f32..3000.0, w2 in 10.0f32..3000.0) {
            check_linear_scaling(w1, w2)?;
        }

        #[test]
        fn contained_above_min_width(width in MIN_CONTAINED_WIDTH..5000.0f32) {
            check_contained(width)?;
        }
    }
}
