mod catalog;
mod outline;

pub use outline::Outline;

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SceneError, ShapesceneError};
use crate::mesh::IndexedMesh;
use crate::operations::creation::{MakeBox, MakeCone, MakeSphere};
use crate::operations::shaping::Extrude;

/// Every shape the viewer can insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Cube,
    Sphere,
    Cone,
    Quad,
    Triangle,
    LetterF,
    Sword,
    House,
}

impl ShapeKind {
    /// All kinds, primitives first.
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Cube,
        ShapeKind::Sphere,
        ShapeKind::Cone,
        ShapeKind::Quad,
        ShapeKind::Triangle,
        ShapeKind::LetterF,
        ShapeKind::Sword,
        ShapeKind::House,
    ];

    /// Display name, also accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Cube => "Cube",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Cone => "Cone",
            ShapeKind::Quad => "Quad",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::LetterF => "LetterF",
            ShapeKind::Sword => "Sword",
            ShapeKind::House => "House",
        }
    }

    /// The outline definition for extruded kinds; `None` for primitives.
    #[must_use]
    pub fn definition(self) -> Option<&'static ShapeDefinition> {
        match self {
            ShapeKind::Cube | ShapeKind::Sphere | ShapeKind::Cone => None,
            ShapeKind::Quad => Some(&catalog::QUAD),
            ShapeKind::Triangle => Some(&catalog::TRIANGLE),
            ShapeKind::LetterF => Some(&catalog::LETTER_F),
            ShapeKind::Sword => Some(&catalog::SWORD),
            ShapeKind::House => Some(&catalog::HOUSE),
        }
    }

    /// Returns `true` for shapes built by extruding an outline.
    #[must_use]
    pub fn is_extruded(self) -> bool {
        self.definition().is_some()
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapesceneError;

    fn from_str(s: &str) -> Result<Self> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SceneError::UnknownShape(s.to_owned()).into())
    }
}

/// Static outline data for one extruded shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDefinition {
    /// Registry name.
    pub name: &'static str,
    /// Flat `x, y, z` coordinate stream, all at `z = 0`, in boundary order.
    pub vertices: &'static [f64],
    /// Face triangles.
    pub indices: &'static [u32],
    /// Extrusion depth along `+z`.
    pub depth: f64,
}

impl ShapeDefinition {
    /// Builds the validated outline.
    ///
    /// # Errors
    ///
    /// Returns an error if the static data is malformed.
    pub fn outline(&self) -> Result<Outline> {
        Outline::from_flat(self.vertices, self.indices)
    }

    /// Extrudes the outline by its depth.
    ///
    /// # Errors
    ///
    /// Returns an error if the outline or depth is invalid.
    pub fn build(&self) -> Result<IndexedMesh> {
        let outline = self.outline()?;
        Extrude::new(&outline, self.depth).execute()
    }
}

/// Builds the renderable mesh for any shape kind.
///
/// # Errors
///
/// Returns an error if mesh construction fails.
pub fn build_renderable(kind: ShapeKind) -> Result<IndexedMesh> {
    match kind {
        ShapeKind::Cube => MakeBox::default().execute(),
        ShapeKind::Sphere => MakeSphere::default().execute(),
        ShapeKind::Cone => MakeCone::default().execute(),
        ShapeKind::Quad
        | ShapeKind::Triangle
        | ShapeKind::LetterF
        | ShapeKind::Sword
        | ShapeKind::House => match kind.definition() {
            Some(definition) => definition.build(),
            None => Err(SceneError::UnknownShape(kind.name().to_owned()).into()),
        },
    }
}
