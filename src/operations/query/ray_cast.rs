use crate::math::intersect_3d::{ray_triangle_intersect, Ray};
use crate::math::Point3;
use crate::mesh::IndexedMesh;

/// The nearest intersection of a ray with a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the hit point.
    pub distance: f64,
    /// Index of the hit triangle (into `indices / 3`).
    pub triangle: usize,
    /// World-space hit point.
    pub point: Point3,
}

/// Casts a ray against every triangle of a mesh.
pub struct RayCast<'a> {
    mesh: &'a IndexedMesh,
    ray: Ray,
    cull_back_faces: bool,
}

impl<'a> RayCast<'a> {
    /// Creates a new `RayCast` query. Back faces are hit by default.
    #[must_use]
    pub fn new(mesh: &'a IndexedMesh, ray: Ray) -> Self {
        Self {
            mesh,
            ray,
            cull_back_faces: false,
        }
    }

    /// Ignores triangles whose counter-clockwise side faces away from the ray.
    #[must_use]
    pub fn cull_back_faces(mut self, cull: bool) -> Self {
        self.cull_back_faces = cull;
        self
    }

    /// Executes the query, returning the nearest hit.
    ///
    /// Triangles with out-of-range indices are skipped.
    #[must_use]
    pub fn execute(&self) -> Option<RayHit> {
        let mut best: Option<RayHit> = None;
        for (triangle, tri) in self.mesh.triangles().enumerate() {
            let Some([a, b, c]) = self.mesh.triangle_points(tri) else {
                continue;
            };
            let Some(t) = ray_triangle_intersect(&self.ray, &a, &b, &c, self.cull_back_faces)
            else {
                continue;
            };
            if best.as_ref().is_none_or(|hit| t < hit.distance) {
                best = Some(RayHit {
                    distance: t,
                    triangle,
                    point: self.ray.at(t),
                });
            }
        }
        best
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::operations::creation::MakeBox;

    fn ray(origin: Point3, direction: Vector3) -> Ray {
        Ray::new(origin, direction).unwrap()
    }

    #[test]
    fn nearest_face_of_box() {
        let mesh = MakeBox::default().execute().unwrap();
        let hit = RayCast::new(&mesh, ray(Point3::new(0.1, 0.2, 3.0), -Vector3::z()))
            .execute()
            .unwrap();
        assert!((hit.distance - 2.5).abs() < 1e-9);
        assert!((hit.point.z - 0.5).abs() < 1e-9);
    }

    #[test]
    fn culling_skips_front_wall_from_inside() {
        let mesh = MakeBox::default().execute().unwrap();
        let from_inside = ray(Point3::new(0.0, 0.1, -0.2), Vector3::x());
        let hit = RayCast::new(&mesh, from_inside).execute().unwrap();
        assert!((hit.distance - 0.5).abs() < 1e-9);
        assert!(RayCast::new(&mesh, from_inside)
            .cull_back_faces(true)
            .execute()
            .is_none());
    }

    #[test]
    fn miss_returns_none() {
        let mesh = MakeBox::default().execute().unwrap();
        let hit = RayCast::new(&mesh, ray(Point3::new(2.0, 0.0, 3.0), -Vector3::z())).execute();
        assert!(hit.is_none());
    }
}
