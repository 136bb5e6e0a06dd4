use std::fmt;

use crate::math::{Matrix4, Vector3};

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in `X, Y, Z` order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index into a vector.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector along the axis.
    #[must_use]
    pub fn unit(self) -> Vector3 {
        match self {
            Axis::X => Vector3::x(),
            Axis::Y => Vector3::y(),
            Axis::Z => Vector3::z(),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        })
    }
}

/// Placement of a scene object: a translation and an XYZ Euler rotation.
///
/// The world matrix is `T * Rx * Ry * Rz`, so the z rotation is applied to
/// the mesh first. Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ObjectTransform {
    /// Translation.
    pub position: Vector3,
    /// Euler angles in radians, applied in `X, Y, Z` order.
    pub rotation: Vector3,
}

impl ObjectTransform {
    /// Creates the identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one position component.
    pub fn set_position(&mut self, axis: Axis, value: f64) {
        self.position[axis.index()] = value;
    }

    /// Sets one rotation component, in radians.
    pub fn set_rotation(&mut self, axis: Axis, radians: f64) {
        self.rotation[axis.index()] = radians;
    }

    /// Resets position and rotation to the origin.
    pub fn home(&mut self) {
        *self = Self::default();
    }

    /// Rotation part of the world matrix.
    #[must_use]
    pub fn rotation_matrix(&self) -> Matrix4 {
        let rx = Matrix4::new_rotation(Vector3::x() * self.rotation.x);
        let ry = Matrix4::new_rotation(Vector3::y() * self.rotation.y);
        let rz = Matrix4::new_rotation(Vector3::z() * self.rotation.z);
        rx * ry * rz
    }

    /// Object-to-world matrix.
    #[must_use]
    pub fn world_matrix(&self) -> Matrix4 {
        Matrix4::new_translation(&self.position) * self.rotation_matrix()
    }
}
