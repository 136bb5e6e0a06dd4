use crate::error::{OperationError, Result};
use crate::math::{Point3, TOLERANCE};
use crate::mesh::IndexedMesh;

/// Creates an axis-aligned box mesh centered at the origin.
///
/// The eight corners are shared between faces, so the mesh is closed.
/// Triangles are wound counter-clockwise seen from outside.
#[derive(Debug, Clone, Copy)]
pub struct MakeBox {
    width: f64,
    height: f64,
    depth: f64,
}

impl Default for MakeBox {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

// Corner `i` sits at +x if bit 0 is set, +y for bit 1, +z for bit 2.
const FACES: [[u32; 4]; 6] = [
    [1, 3, 7, 5], // +x
    [0, 4, 6, 2], // -x
    [6, 7, 3, 2], // +y
    [0, 1, 5, 4], // -y
    [4, 5, 7, 6], // +z
    [0, 2, 3, 1], // -z
];

impl MakeBox {
    /// Creates a new `MakeBox` operation with the given extents.
    #[must_use]
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Executes the operation, returning the box mesh.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if any extent is not positive.
    pub fn execute(&self) -> Result<IndexedMesh> {
        for (name, value) in [("width", self.width), ("height", self.height), ("depth", self.depth)] {
            if !(value.is_finite() && value > TOLERANCE) {
                return Err(OperationError::InvalidInput(format!(
                    "box {name} must be positive, got {value}"
                ))
                .into());
            }
        }

        let (hx, hy, hz) = (self.width / 2.0, self.height / 2.0, self.depth / 2.0);
        let vertices = (0..8_u32)
            .map(|i| {
                Point3::new(
                    if i & 1 == 0 { -hx } else { hx },
                    if i & 2 == 0 { -hy } else { hy },
                    if i & 4 == 0 { -hz } else { hz },
                )
            })
            .collect();

        let indices = FACES
            .iter()
            .flat_map(|&[a, b, c, d]| [a, b, c, a, c, d])
            .collect();

        Ok(IndexedMesh::new(vertices, indices))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::{BoundingBox, IsClosed};

    #[test]
    fn unit_box_has_12_triangles() {
        let mesh = MakeBox::default().execute().unwrap();
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(IsClosed::new(&mesh).execute());
    }

    #[test]
    fn extents_match_parameters() {
        let mesh = MakeBox::new(2.0, 4.0, 6.0).execute().unwrap();
        let aabb = BoundingBox::new(&mesh).execute().unwrap();
        assert!((aabb.max.x - 1.0).abs() < TOLERANCE);
        assert!((aabb.min.y + 2.0).abs() < TOLERANCE);
        assert!((aabb.max.z - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn normals_point_outward() {
        let mesh = MakeBox::default().execute().unwrap();
        for tri in mesh.triangles() {
            let [a, b, c] = mesh.triangle_points(tri).unwrap();
            let normal = (b - a).cross(&(c - a));
            let centroid = (a.coords + b.coords + c.coords) / 3.0;
            assert!(normal.dot(&centroid) > 0.0, "triangle {tri:?} faces inward");
        }
    }

    #[test]
    fn zero_extent_returns_error() {
        assert!(MakeBox::new(1.0, 0.0, 1.0).execute().is_err());
        assert!(MakeBox::new(-1.0, 1.0, 1.0).execute().is_err());
    }
}
