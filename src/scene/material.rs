use std::fmt;
use std::str::FromStr;

use crate::error::{GeometryError, Result, SceneError, ShapesceneError};

/// Linear RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    /// Creates a color from `[0, 1]` components.
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a `0xRRGGBB` value; higher bits are ignored.
    #[must_use]
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| f64::from((hex >> shift) & 0xff) / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    /// Creates a color from a 0-255 palette triple.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if a component is
    /// outside `[0, 255]` or not finite.
    pub fn from_palette(palette: [f64; 3]) -> Result<Self> {
        for (parameter, value) in ["red", "green", "blue"].into_iter().zip(palette) {
            if !(0.0..=255.0).contains(&value) {
                return Err(GeometryError::ParameterOutOfRange {
                    parameter,
                    value,
                    min: 0.0,
                    max: 255.0,
                }
                .into());
            }
        }
        Ok(Self::rgb(palette[0] / 255.0, palette[1] / 255.0, palette[2] / 255.0))
    }

    /// Returns the 0-255 palette triple.
    #[must_use]
    pub fn to_palette(self) -> [f64; 3] {
        [self.r * 255.0, self.g * 255.0, self.b * 255.0]
    }
}

/// The colors offered by the panel's color list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NamedColor {
    #[default]
    White,
    Red,
    Blue,
}

impl NamedColor {
    /// List order shown in the panel.
    pub const ALL: [NamedColor; 3] = [NamedColor::White, NamedColor::Red, NamedColor::Blue];

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::White => "White",
            NamedColor::Red => "Red",
            NamedColor::Blue => "Blue",
        }
    }

    /// The color value.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            NamedColor::White => Color::WHITE,
            NamedColor::Red => Color::RED,
            NamedColor::Blue => Color::BLUE,
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedColor {
    type Err = ShapesceneError;

    fn from_str(s: &str) -> Result<Self> {
        NamedColor::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SceneError::UnknownColor(s.to_owned()).into())
    }
}

/// Which triangle sides are rendered and pickable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Counter-clockwise side only.
    Front,
    /// Both sides.
    Double,
}

/// Unlit surface appearance of a scene object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub wireframe: bool,
    pub side: Side,
}

impl Material {
    /// White wireframe, front side only; used for primitives.
    #[must_use]
    pub fn wireframe() -> Self {
        Self {
            color: Color::WHITE,
            wireframe: true,
            side: Side::Front,
        }
    }

    /// White solid, both sides; used for extruded outlines.
    #[must_use]
    pub fn double_sided() -> Self {
        Self {
            color: Color::WHITE,
            wireframe: false,
            side: Side::Double,
        }
    }
}
