use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::{FixedFaceHandle, InnerTag};
use spade::{ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};

use crate::error::{OperationError, Result};
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{Point3, TOLERANCE};
use crate::mesh::index_from_len;

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Triangulates the face of a flat boundary loop.
///
/// The boundary is inserted as a constraint loop into a constrained Delaunay
/// triangulation; faces inside the loop are kept. Indices refer to the
/// boundary points and every triangle is wound like the boundary itself.
pub struct TriangulateOutline<'a> {
    boundary: &'a [Point3],
}

impl<'a> TriangulateOutline<'a> {
    /// Creates a new `TriangulateOutline` operation.
    #[must_use]
    pub fn new(boundary: &'a [Point3]) -> Self {
        Self { boundary }
    }

    /// Executes the triangulation, returning flat face indices.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] for fewer than 3 points, a
    /// zero-area loop, repeated points or crossing edges, and
    /// [`OperationError::Failed`] if
    /// the triangulation rejects a point.
    pub fn execute(&self) -> Result<Vec<u32>> {
        let n = self.boundary.len();
        if n < 3 {
            return Err(OperationError::InvalidInput(format!(
                "boundary needs at least 3 points, got {n}"
            ))
            .into());
        }
        let area = signed_area_2d(self.boundary);
        if area.abs() < TOLERANCE {
            return Err(OperationError::InvalidInput("boundary encloses no area".into()).into());
        }

        let mut cdt = Cdt::new();
        let mut handle_to_boundary: HashMap<usize, u32> = HashMap::with_capacity(n);
        let mut handles = Vec::with_capacity(n);
        for (i, p) in self.boundary.iter().enumerate() {
            let handle = cdt
                .insert(SpadePoint2::new(p.x, p.y))
                .map_err(|e: InsertionError| OperationError::Failed(format!("CDT insert: {e}")))?;
            if handle_to_boundary.insert(handle.index(), index_from_len(i)?).is_some() {
                return Err(OperationError::InvalidInput(format!(
                    "boundary point {i} repeats an earlier point"
                ))
                .into());
            }
            handles.push(handle);
        }
        for i in 0..n {
            let (from, to) = (handles[i], handles[(i + 1) % n]);
            if !cdt.can_add_constraint(from, to) {
                return Err(OperationError::InvalidInput(format!(
                    "boundary edge {i} crosses another boundary edge"
                ))
                .into());
            }
            cdt.add_constraint(from, to);
        }

        let interior = classify_interior_faces(&cdt);
        let ccw = area > 0.0;

        let mut indices = Vec::with_capacity(3 * (n - 2));
        for face in cdt.inner_faces() {
            if !interior.contains(&face.fix().index()) {
                continue;
            }
            let mut tri = [0u32; 3];
            for (slot, vertex) in face.vertices().iter().enumerate() {
                tri[slot] = handle_to_boundary
                    .get(&vertex.fix().index())
                    .copied()
                    .ok_or_else(|| {
                        OperationError::Failed("triangulation introduced a new vertex".into())
                    })?;
            }
            // Spade faces are counter-clockwise; follow the boundary's winding.
            if !ccw {
                tri.swap(1, 2);
            }
            indices.extend(tri);
        }

        Ok(indices)
    }
}

/// Classifies which inner faces of the CDT are inside the loop using flood-fill.
///
/// Faces adjacent to the outer face start at depth 0 (or 1 across a
/// constraint edge); each constraint edge crossed adds one. Odd depth is
/// interior.
fn classify_interior_faces(cdt: &Cdt) -> HashSet<usize> {
    let mut interior = HashSet::new();
    let mut depth_map: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<InnerTag>, u32)> = VecDeque::new();

    let outer_fix = cdt.outer_face().fix();

    for edge in cdt.directed_edges() {
        if edge.face().fix() != outer_fix {
            continue;
        }
        if let Some(inner) = edge.rev().face().as_inner() {
            let idx = inner.fix().index();
            if depth_map.contains_key(&idx) {
                continue;
            }
            let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depth_map.insert(idx, depth);
            if depth % 2 == 1 {
                interior.insert(idx);
            }
            queue.push_back((inner.fix(), depth));
        }
    }

    while let Some((face_fix, depth)) = queue.pop_front() {
        let face = cdt.face(face_fix);
        for edge in face.adjacent_edges() {
            let Some(neighbor) = edge.rev().face().as_inner() else {
                continue;
            };
            let n_idx = neighbor.fix().index();
            if depth_map.contains_key(&n_idx) {
                continue;
            }
            let new_depth = if cdt.is_constraint_edge(edge.as_undirected().fix()) {
                depth + 1
            } else {
                depth
            };
            depth_map.insert(n_idx, new_depth);
            if new_depth % 2 == 1 {
                interior.insert(n_idx);
            }
            queue.push_back((neighbor.fix(), new_depth));
        }
    }

    interior
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    fn triangle_area(points: &[Point3], tri: &[u32]) -> f64 {
        let a = points[tri[0] as usize];
        let b = points[tri[1] as usize];
        let c = points[tri[2] as usize];
        0.5 * ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y))
    }

    #[test]
    fn square_gives_two_triangles() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let indices = TriangulateOutline::new(&pts).execute().unwrap();
        assert_eq!(indices.len(), 6);
        let total: f64 = indices.chunks(3).map(|t| triangle_area(&pts, t)).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn concave_l_shape_excludes_notch() {
        let pts = vec![
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 1.0),
            p(1.0, 1.0),
            p(1.0, 2.0),
            p(0.0, 2.0),
        ];
        let indices = TriangulateOutline::new(&pts).execute().unwrap();
        assert_eq!(indices.len(), 3 * 4);
        let total: f64 = indices.chunks(3).map(|t| triangle_area(&pts, t)).sum();
        assert!((total - 3.0).abs() < 1e-9, "area = {total}");
    }

    #[test]
    fn clockwise_boundary_keeps_its_winding() {
        let pts = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        let indices = TriangulateOutline::new(&pts).execute().unwrap();
        for tri in indices.chunks(3) {
            assert!(triangle_area(&pts, tri) < 0.0);
        }
    }

    #[test]
    fn degenerate_boundaries_are_rejected() {
        assert!(TriangulateOutline::new(&[p(0.0, 0.0), p(1.0, 0.0)]).execute().is_err());
        assert!(TriangulateOutline::new(&[p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)])
            .execute()
            .is_err());
        assert!(
            TriangulateOutline::new(&[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(1.0, 0.0)])
                .execute()
                .is_err()
        );
    }
}
