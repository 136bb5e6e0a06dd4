use super::{Point3, TOLERANCE};

/// Computes the signed area of a polygon in the XY plane (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point3]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns `true` if every point lies in the `z = 0` plane.
#[must_use]
pub fn is_flat(points: &[Point3]) -> bool {
    points.iter().all(|p| p.z.abs() < TOLERANCE)
}

/// Returns the index of the first point with a non-finite coordinate.
#[must_use]
pub fn first_non_finite(points: &[Point3]) -> Option<usize> {
    points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()))
}
