//! Color handling for Neurograph
//!
//! This module provides two color types:
//!
//! - [`SymbolicColor`] - the closed set of named colors attached to anatomical
//!   parts. It carries no rendering information of its own.
//! - [`Color`] - a concrete CSS color wrapping `DynamicColor` from the color
//!   crate, used by renderers.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// Symbolic color identifiers used by the anatomy table and the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolicColor {
    Green,
    Orange,
    Purple,
    Blue,
    Cyan,
    Indigo,
    Pink,
}

impl SymbolicColor {
    /// All symbolic colors in declaration order.
    pub const ALL: [SymbolicColor; 7] = [
        Self::Green,
        Self::Orange,
        Self::Purple,
        Self::Blue,
        Self::Cyan,
        Self::Indigo,
        Self::Pink,
    ];

    /// Returns the lowercase name of this color.
    pub fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Indigo => "indigo",
            Self::Pink => "pink",
        }
    }

    /// Returns the CSS color string used when rendering this color.
    ///
    /// Values follow the light-mode system palette the screen was designed with.
    pub fn css(self) -> &'static str {
        match self {
            Self::Green => "#34c759",
            Self::Orange => "#ff9500",
            Self::Purple => "#af52de",
            Self::Blue => "#007aff",
            Self::Cyan => "#32ade6",
            Self::Indigo => "#5856d6",
            Self::Pink => "#ff2d55",
        }
    }

    /// Resolves this symbolic color to a concrete [`Color`].
    pub fn to_color(self) -> Color {
        Color::new(self.css()).expect("palette entries are valid CSS hex colors")
    }
}

impl fmt::Display for SymbolicColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SymbolicColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown symbolic color `{s}`"))
    }
}

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use neurograph_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates a new color with the specified alpha (transparency) value.
    ///
    /// # Examples
    ///
    /// ```
    /// use neurograph_core::color::Color;
    ///
    /// let orange = Color::new("orange").unwrap();
    /// let nucleus = orange.with_alpha(0.5);
    /// assert_eq!(nucleus.alpha(), 0.5);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color, between 0.0 and 1.0.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl From<SymbolicColor> for Color {
    fn from(color: SymbolicColor) -> Self {
        color.to_color()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}
