use super::{Point3, Vector3, TOLERANCE};
use crate::error::{GeometryError, Result};

/// A half-line `origin + t * direction`, `t >= 0`, with unit-length direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    origin: Point3,
    direction: Vector3,
}

impl Ray {
    /// Creates a ray, normalizing `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if `direction` is zero-length.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self> {
        let len = direction.norm();
        if len < TOLERANCE || !len.is_finite() {
            return Err(GeometryError::Degenerate("ray direction must be non-zero".into()).into());
        }
        Ok(Self {
            origin,
            direction: direction / len,
        })
    }

    /// Returns the ray origin.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit direction.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Evaluates the ray at parameter `t`.
    #[must_use]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}

/// Möller-Trumbore ray-triangle intersection.
///
/// Returns the ray parameter of the hit, or `None`. Points on a shared edge
/// count as inside both triangles. When `cull_back_faces` is set, triangles
/// whose counter-clockwise normal faces away from the ray origin are ignored.
#[must_use]
pub fn ray_triangle_intersect(
    ray: &Ray,
    v0: &Point3,
    v1: &Point3,
    v2: &Point3,
    cull_back_faces: bool,
) -> Option<f64> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    if cull_back_faces && ray.direction.dot(&edge1.cross(&edge2)) >= 0.0 {
        return None;
    }

    let h = ray.direction.cross(&edge2);
    let a = edge1.dot(&h);

    // Parallel to the triangle plane
    if a.abs() < TOLERANCE {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(&h);
    if !(-TOLERANCE..=1.0 + TOLERANCE).contains(&u) {
        return None;
    }

    let q = s.cross(&edge1);
    let v = f * ray.direction.dot(&q);
    if v < -TOLERANCE || u + v > 1.0 + TOLERANCE {
        return None;
    }

    let t = f * edge2.dot(&q);
    (t > TOLERANCE).then_some(t)
}

/// Ray-AABB intersection using the slab method.
///
/// Returns the entry parameter (or `0.0` when the origin is inside the box).
#[must_use]
pub fn ray_aabb_intersect(ray: &Ray, min: &Point3, max: &Point3) -> Option<f64> {
    let mut t_min = f64::NEG_INFINITY;
    let mut t_max = f64::INFINITY;

    for axis in 0..3 {
        let o = ray.origin[axis];
        let d = ray.direction[axis];
        if d.abs() < TOLERANCE {
            if o < min[axis] - TOLERANCE || o > max[axis] + TOLERANCE {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let t1 = (min[axis] - o) * inv;
        let t2 = (max[axis] - o) * inv;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }

    if t_max < 0.0 || t_min > t_max + TOLERANCE {
        return None;
    }
    Some(t_min.max(0.0))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn down_z(x: f64, y: f64) -> Ray {
        Ray::new(p(x, y, 5.0), Vector3::new(0.0, 0.0, -1.0)).unwrap()
    }

    // ── Ray ──

    #[test]
    fn ray_direction_is_normalized() {
        let ray = Ray::new(p(0.0, 0.0, 0.0), Vector3::new(0.0, 3.0, 4.0)).unwrap();
        assert!((ray.direction().norm() - 1.0).abs() < TOLERANCE);
        let at = ray.at(5.0);
        assert!((at.y - 3.0).abs() < TOLERANCE);
        assert!((at.z - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn zero_direction_is_rejected() {
        assert!(Ray::new(p(0.0, 0.0, 0.0), Vector3::zeros()).is_err());
    }

    // ── ray_triangle_intersect ──

    #[test]
    fn hits_front_facing_triangle() {
        let t = ray_triangle_intersect(
            &down_z(0.2, 0.2),
            &p(0.0, 0.0, 1.0),
            &p(1.0, 0.0, 1.0),
            &p(0.0, 1.0, 1.0),
            true,
        );
        assert!((t.unwrap() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn misses_outside_triangle() {
        let t = ray_triangle_intersect(
            &down_z(0.8, 0.8),
            &p(0.0, 0.0, 1.0),
            &p(1.0, 0.0, 1.0),
            &p(0.0, 1.0, 1.0),
            false,
        );
        assert!(t.is_none());
    }

    #[test]
    fn back_face_only_hit_when_not_culled() {
        // Clockwise as seen from +z: the normal points down, away from the ray origin.
        let (a, b, c) = (p(0.0, 0.0, 1.0), p(0.0, 1.0, 1.0), p(1.0, 0.0, 1.0));
        let ray = down_z(0.2, 0.2);
        assert!(ray_triangle_intersect(&ray, &a, &b, &c, true).is_none());
        assert!(ray_triangle_intersect(&ray, &a, &b, &c, false).is_some());
    }

    #[test]
    fn triangle_behind_origin_is_ignored() {
        let t = ray_triangle_intersect(
            &down_z(0.2, 0.2),
            &p(0.0, 0.0, 6.0),
            &p(1.0, 0.0, 6.0),
            &p(0.0, 1.0, 6.0),
            false,
        );
        assert!(t.is_none());
    }

    // ── ray_aabb_intersect ──

    #[test]
    fn aabb_entry_distance() {
        let t = ray_aabb_intersect(&down_z(0.0, 0.0), &p(-1.0, -1.0, -1.0), &p(1.0, 1.0, 1.0));
        assert!((t.unwrap() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn aabb_miss() {
        let t = ray_aabb_intersect(&down_z(3.0, 0.0), &p(-1.0, -1.0, -1.0), &p(1.0, 1.0, 1.0));
        assert!(t.is_none());
    }

    #[test]
    fn aabb_origin_inside() {
        let ray = Ray::new(p(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0)).unwrap();
        let t = ray_aabb_intersect(&ray, &p(-1.0, -1.0, -1.0), &p(1.0, 1.0, 1.0));
        assert!(t.unwrap().abs() < TOLERANCE);
    }
}
