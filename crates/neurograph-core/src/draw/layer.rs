//! Layer-based rendering for SVG output.
//!
//! Drawables add their nodes to a [`LayeredOutput`] tagged with a
//! [`RenderLayer`]. Rendering groups the nodes per layer, bottom to top, and
//! keeps insertion order within a layer.
//!
//! # Example
//!
//! ```
//! # use neurograph_core::draw::{LayeredOutput, RenderLayer};
//! # use svg::node::element::{Circle, Rectangle, Text};
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Text, Box::new(Text::new("Soma")));
//! output.add_to_layer(RenderLayer::Content, Box::new(Circle::new()));
//! output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
//!
//! // One `<g data-layer="...">` group per non-empty layer
//! assert_eq!(output.render().len(), 3);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top.
///
/// The `Ord` derive follows declaration order, so the first variant is painted
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Page and surface fills.
    Background,
    /// Card panels and dividers.
    Panel,
    /// Diagram shapes and icon badges.
    Content,
    /// Labels and body text.
    Text,
}

impl RenderLayer {
    /// Returns the name used for the `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Panel => "panel",
            Self::Content => "content",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to `layer`.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Moves every node of `other` into this output.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of nodes on `layer`.
    pub fn layer_len(&self, layer: RenderLayer) -> usize {
        self.items.iter().filter(|(l, _)| *l == layer).count()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes a `<g>` element with a `data-layer`
    /// attribute. Nodes keep their insertion order inside a layer.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps painting order within a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);
                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }
            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);
        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::{Circle, Rectangle};

    use super::*;

    #[test]
    fn test_layered_output_new() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layer_order() {
        assert!(RenderLayer::Background < RenderLayer::Panel);
        assert!(RenderLayer::Panel < RenderLayer::Content);
        assert!(RenderLayer::Content < RenderLayer::Text);
    }

    #[test]
    fn test_layer_len() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Content, Box::new(Circle::new()));
        output.add_to_layer(RenderLayer::Content, Box::new(Circle::new()));
        output.add_to_layer(RenderLayer::Panel, Box::new(Rectangle::new()));

        assert_eq!(output.layer_len(RenderLayer::Content), 2);
        assert_eq!(output.layer_len(RenderLayer::Panel), 1);
        assert_eq!(output.layer_len(RenderLayer::Text), 0);
    }

    #[test]
    fn test_merge_same_layer_renders_one_group() {
        let mut first = LayeredOutput::new();
        first.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));

        let mut second = LayeredOutput::new();
        second.add_to_layer(RenderLayer::Content, Box::new(Circle::new()));

        first.merge(second);
        assert_eq!(first.render().len(), 1);
    }

    #[test]
    fn test_render_groups_bottom_to_top() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));

        let rendered: Vec<String> = output.render().iter().map(|n| n.to_string()).collect();
        assert_eq!(rendered.len(), 2);
        assert!(rendered[0].contains("data-layer=\"background\""));
        assert!(rendered[1].contains("data-layer=\"text\""));
    }

    #[test]
    fn test_render_keeps_insertion_order_within_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Content, Box::new(Circle::new().set("id", "first")));
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Content, Box::new(Circle::new().set("id", "second")));

        let rendered = output.render()[0].to_string();
        let first = rendered.find("first").unwrap();
        let second = rendered.find("second").unwrap();
        assert!(first < second);
    }
}
