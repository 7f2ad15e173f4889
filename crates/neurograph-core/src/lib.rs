//! Neurograph Core Types and Definitions
//!
//! This crate provides the foundational types for Neurograph, an educational
//! neuron anatomy screen. It includes:
//!
//! - **Anatomy**: The fixed table of neuron parts ([`anatomy::AnatomyRecord`])
//! - **Colors**: Symbolic part colors and CSS color handling ([`color`] module)
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Primitives**: Drawable geometry instructions ([`primitive::GeometryPrimitive`])
//! - **Layout**: The proportional diagram layout engine ([`layout`] module)
//! - **Draw**: Visual definitions used by renderers ([`draw`] module)

pub mod anatomy;
pub mod color;
pub mod draw;
pub mod geometry;
pub mod layout;
pub mod primitive;
