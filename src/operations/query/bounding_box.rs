use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3};
use crate::mesh::IndexedMesh;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Edge lengths along each axis.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }
}

/// Computes the axis-aligned bounding box of a mesh's vertices.
pub struct BoundingBox<'a> {
    mesh: &'a IndexedMesh,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(mesh: &'a IndexedMesh) -> Self {
        Self { mesh }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the mesh has no vertices.
    pub fn execute(&self) -> Result<Aabb> {
        let mut points = self.mesh.vertices.iter();
        let Some(first) = points.next() else {
            return Err(GeometryError::Degenerate("mesh has no vertices".into()).into());
        };
        let (min, max) = points.fold((*first, *first), |(min, max), p| {
            (min.inf(p), max.sup(p))
        });
        Ok(Aabb { min, max })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn box_of_scattered_points() {
        let mesh = IndexedMesh::new(
            vec![
                Point3::new(1.0, -2.0, 0.5),
                Point3::new(-1.0, 3.0, 0.0),
                Point3::new(0.0, 0.0, 2.0),
            ],
            vec![0, 1, 2],
        );
        let aabb = BoundingBox::new(&mesh).execute().unwrap();
        assert_relative_eq!(aabb.min, Point3::new(-1.0, -2.0, 0.0));
        assert_relative_eq!(aabb.max, Point3::new(1.0, 3.0, 2.0));
        assert_relative_eq!(aabb.center(), Point3::new(0.0, 0.5, 1.0));
        assert_relative_eq!(aabb.size(), Vector3::new(2.0, 5.0, 2.0));
    }

    #[test]
    fn empty_mesh_returns_error() {
        assert!(BoundingBox::new(&IndexedMesh::default()).execute().is_err());
    }
}
