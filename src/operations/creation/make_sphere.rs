use std::f64::consts::{PI, TAU};

use crate::error::{OperationError, Result};
use crate::math::{Point3, TOLERANCE};
use crate::mesh::{index_from_len, IndexedMesh};

/// Creates a UV sphere mesh centered at the origin.
///
/// Latitude rings run from the north pole (`+y`) to the south pole, each with
/// `width_segments` vertices; the two poles are single shared vertices so the
/// mesh is closed. Triangles are wound counter-clockwise seen from outside.
#[derive(Debug, Clone, Copy)]
pub struct MakeSphere {
    radius: f64,
    width_segments: u32,
    height_segments: u32,
}

impl Default for MakeSphere {
    fn default() -> Self {
        Self::new(1.0, 32, 16)
    }
}

impl MakeSphere {
    /// Creates a new `MakeSphere` operation.
    #[must_use]
    pub fn new(radius: f64, width_segments: u32, height_segments: u32) -> Self {
        Self {
            radius,
            width_segments,
            height_segments,
        }
    }

    /// Executes the operation, returning the sphere mesh.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the radius is not positive,
    /// or there are fewer than 3 width or 2 height segments.
    pub fn execute(&self) -> Result<IndexedMesh> {
        if !(self.radius.is_finite() && self.radius > TOLERANCE) {
            return Err(OperationError::InvalidInput(format!(
                "sphere radius must be positive, got {}",
                self.radius
            ))
            .into());
        }
        if self.width_segments < 3 || self.height_segments < 2 {
            return Err(OperationError::InvalidInput(format!(
                "sphere needs at least 3x2 segments, got {}x{}",
                self.width_segments, self.height_segments
            ))
            .into());
        }

        let (w, h, r) = (self.width_segments, self.height_segments, self.radius);
        let rings = h - 1;
        index_from_len(w as usize * rings as usize + 2)?;

        let mut vertices = Vec::new();
        vertices.push(Point3::new(0.0, r, 0.0));
        for ring in 1..=rings {
            let phi = PI * f64::from(ring) / f64::from(h);
            for seg in 0..w {
                let theta = TAU * f64::from(seg) / f64::from(w);
                vertices.push(Point3::new(
                    r * phi.sin() * theta.cos(),
                    r * phi.cos(),
                    r * phi.sin() * theta.sin(),
                ));
            }
        }
        vertices.push(Point3::new(0.0, -r, 0.0));

        let north = 0;
        let south = 1 + w * rings;
        let at = |ring: u32, seg: u32| 1 + (ring - 1) * w + seg % w;

        let mut indices = Vec::new();
        for seg in 0..w {
            indices.extend([north, at(1, seg + 1), at(1, seg)]);
        }
        for ring in 1..rings {
            for seg in 0..w {
                let upper = at(ring, seg);
                let upper_next = at(ring, seg + 1);
                let lower = at(ring + 1, seg);
                let lower_next = at(ring + 1, seg + 1);
                indices.extend([lower, upper, upper_next, lower, upper_next, lower_next]);
            }
        }
        for seg in 0..w {
            indices.extend([south, at(rings, seg), at(rings, seg + 1)]);
        }

        Ok(IndexedMesh::new(vertices, indices))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::IsClosed;

    #[test]
    fn default_sphere_counts() {
        let mesh = MakeSphere::default().execute().unwrap();
        assert_eq!(mesh.vertices.len(), 32 * 15 + 2);
        // Two caps of 32 triangles plus 14 bands of 64.
        assert_eq!(mesh.triangle_count(), 2 * 32 + 14 * 64);
        assert!(IsClosed::new(&mesh).execute());
    }

    #[test]
    fn vertices_lie_on_the_sphere() {
        let mesh = MakeSphere::new(2.5, 12, 6).execute().unwrap();
        for v in &mesh.vertices {
            assert!((v.coords.norm() - 2.5).abs() < 1e-9);
        }
    }

    #[test]
    fn normals_point_outward() {
        let mesh = MakeSphere::new(1.0, 8, 4).execute().unwrap();
        for tri in mesh.triangles() {
            let [a, b, c] = mesh.triangle_points(tri).unwrap();
            let normal = (b - a).cross(&(c - a));
            let centroid = (a.coords + b.coords + c.coords) / 3.0;
            assert!(normal.dot(&centroid) > 0.0, "triangle {tri:?} faces inward");
        }
    }

    #[test]
    fn minimal_sphere_is_a_closed_bipyramid() {
        let mesh = MakeSphere::new(1.0, 3, 2).execute().unwrap();
        assert_eq!(mesh.vertices.len(), 5);
        assert_eq!(mesh.triangle_count(), 6);
        assert!(IsClosed::new(&mesh).execute());
    }

    #[test]
    fn invalid_parameters_return_error() {
        assert!(MakeSphere::new(0.0, 8, 4).execute().is_err());
        assert!(MakeSphere::new(1.0, 2, 4).execute().is_err());
        assert!(MakeSphere::new(1.0, 8, 1).execute().is_err());
    }
}
