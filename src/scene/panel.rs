use crate::error::Result;
use crate::operations::transform::Axis;

use super::material::{Color, NamedColor};
use super::object::SceneObject;

/// Range and step of a numeric slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    /// Position sliders, in world units.
    pub const POSITION: SliderRange = SliderRange {
        min: -5.0,
        max: 5.0,
        step: 0.5,
    };

    /// Rotation sliders, in degrees.
    pub const ROTATION: SliderRange = SliderRange {
        min: -180.0,
        max: 180.0,
        step: 5.0,
    };

    /// Clamps `value` into the range and snaps it to the nearest step.
    ///
    /// Half-way values round up. Non-finite input maps to the range minimum.
    #[must_use]
    pub fn constrain(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let snapped = if self.step > 0.0 {
            (clamped / self.step + 0.5).floor() * self.step
        } else {
            clamped
        };
        snapped.clamp(self.min, self.max)
    }
}

/// One user edit in the settings panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEdit {
    /// Rename the object.
    Name(String),
    /// Move along one axis.
    Position(Axis, f64),
    /// Rotate about one axis, in degrees.
    Rotation(Axis, f64),
    /// Reset position and rotation.
    Home,
    /// Toggle wireframe rendering.
    Wireframe(bool),
    /// Pick a color from the named list.
    ColorItem(NamedColor),
    /// Set a color from 0-255 components.
    Palette([f64; 3]),
}

/// State shown by the settings panel for the current object.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsPanel {
    pub name: String,
    pub wireframe: bool,
    /// Position in world units.
    pub position: [f64; 3],
    /// Rotation in degrees.
    pub rotation: [f64; 3],
    pub color_item: NamedColor,
    /// Color as 0-255 components.
    pub palette: [f64; 3],
    position_range: SliderRange,
    rotation_range: SliderRange,
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self::new(SliderRange::POSITION, SliderRange::ROTATION)
    }
}

impl SettingsPanel {
    /// Creates an empty panel with the given slider ranges.
    #[must_use]
    pub fn new(position_range: SliderRange, rotation_range: SliderRange) -> Self {
        Self {
            name: String::new(),
            wireframe: false,
            position: [0.0; 3],
            rotation: [0.0; 3],
            color_item: NamedColor::default(),
            palette: Color::WHITE.to_palette(),
            position_range,
            rotation_range,
        }
    }

    /// Copies an object's current state into the panel.
    pub fn sync_from(&mut self, object: &SceneObject) {
        self.name.clone_from(&object.name);
        self.wireframe = object.material.wireframe;
        self.palette = object.material.color.to_palette();
        if let Some(item) = NamedColor::ALL
            .into_iter()
            .find(|c| c.color() == object.material.color)
        {
            self.color_item = item;
        }
        for axis in Axis::ALL {
            let i = axis.index();
            self.position[i] = object.transform.position[i];
            self.rotation[i] = object.transform.rotation[i].to_degrees();
        }
    }

    /// Applies one edit to the panel and to `object`.
    ///
    /// Slider values are clamped and snapped before they reach the object.
    ///
    /// # Errors
    ///
    /// Returns an error if a palette component is outside `[0, 255]`; neither
    /// the panel nor the object is changed in that case.
    pub fn apply(&mut self, edit: PanelEdit, object: &mut SceneObject) -> Result<()> {
        match edit {
            PanelEdit::Name(name) => {
                tracing::info!(from = %object.name, to = %name, "renamed object");
                object.name.clone_from(&name);
                self.name = name;
            }
            PanelEdit::Position(axis, value) => {
                let value = self.position_range.constrain(value);
                self.position[axis.index()] = value;
                object.transform.set_position(axis, value);
            }
            PanelEdit::Rotation(axis, degrees) => {
                let degrees = self.rotation_range.constrain(degrees);
                self.rotation[axis.index()] = degrees;
                object.transform.set_rotation(axis, degrees.to_radians());
            }
            PanelEdit::Home => {
                self.position = [0.0; 3];
                self.rotation = [0.0; 3];
                object.transform.home();
            }
            PanelEdit::Wireframe(on) => {
                self.wireframe = on;
                object.material.wireframe = on;
            }
            PanelEdit::ColorItem(item) => {
                let color = item.color();
                self.color_item = item;
                self.palette = color.to_palette();
                object.material.color = color;
            }
            PanelEdit::Palette(palette) => {
                object.material.color = Color::from_palette(palette)?;
                self.palette = palette;
            }
        }
        Ok(())
    }
}
