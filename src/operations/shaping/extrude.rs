use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::mesh::{index_from_len, IndexedMesh};
use crate::shapes::Outline;

/// Extrudes a flat outline along `+z` into a closed prism mesh.
///
/// The output holds the `N` outline vertices (front) followed by the same
/// vertices shifted by `depth` (back). Its index list is the front-face
/// triangles, then the same triangles re-based onto the back copy, then `2N`
/// side-wall triangles stitching the boundary loop `0..N` to its copy.
pub struct Extrude<'a> {
    outline: &'a Outline,
    depth: f64,
}

impl<'a> Extrude<'a> {
    /// Creates a new `Extrude` operation.
    #[must_use]
    pub fn new(outline: &'a Outline, depth: f64) -> Self {
        Self { outline, depth }
    }

    /// Executes the extrusion.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the depth is not a positive
    /// finite number, or [`OperationError::Failed`] if the doubled vertex count
    /// overflows the index type.
    pub fn execute(&self) -> Result<IndexedMesh> {
        if !(self.depth.is_finite() && self.depth > 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "extrude depth must be positive, got {}",
                self.depth
            ))
            .into());
        }

        let front = self.outline.vertices();
        let face = self.outline.indices();
        let n = front.len();
        let offset = index_from_len(n)?;
        let span = index_from_len(2 * n)?;

        let mut vertices = Vec::with_capacity(2 * n);
        vertices.extend_from_slice(front);
        vertices.extend(
            front
                .iter()
                .map(|p| Point3::new(p.x, p.y, p.z + self.depth)),
        );

        let mut indices = Vec::with_capacity(2 * face.len() + 6 * n);
        indices.extend_from_slice(face);
        indices.extend(face.iter().map(|i| i + offset));

        // Side walls: positions 0..N walk the front loop, N..2N the back loop.
        // Each edge quad is split into one triangle from each walk.
        for idx in 0..span {
            let a = idx;
            let (b, c) = if idx < offset {
                (idx + 1, idx + offset + 1)
            } else {
                (idx - 1, idx + offset - 1)
            };
            indices.extend([a, b, c].map(|i| if i >= span { i - span } else { i }));
        }

        tracing::debug!(
            outline_vertices = n,
            triangles = indices.len() / 3,
            depth = self.depth,
            "extruded outline"
        );
        Ok(IndexedMesh::new(vertices, indices))
    }
}

/// Extrudes a flat `x, y, z` coordinate stream and returns flat buffers.
///
/// This is the buffer-level form of [`Extrude`]: the result is the output
/// position stream (length `2 * coords.len()`) and index list.
///
/// # Errors
///
/// Returns [`OperationError::InvalidInput`] if the coordinate stream or the
/// indices do not describe a valid outline, or the depth is not positive.
pub fn extrude_flat(depth: f64, coords: &[f64], indices: &[u32]) -> Result<(Vec<f64>, Vec<u32>)> {
    let outline = Outline::from_flat(coords, indices)?;
    let mesh = Extrude::new(&outline, depth).execute()?;
    let positions = mesh.vertices.iter().flat_map(|p| [p.x, p.y, p.z]).collect();
    Ok((positions, mesh.indices))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ShapesceneError;
    use crate::math::Vector3;
    use crate::operations::query::IsClosed;

    const QUAD_COORDS: [f64; 12] = [
        -0.5, 0.5, 0.0, -0.5, -0.5, 0.0, 0.5, -0.5, 0.0, 0.5, 0.5, 0.0,
    ];
    const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

    const HOUSE_COORDS: [f64; 21] = [
        -0.5, 0.0, 0.0, -0.5, -0.5, 0.0, 0.5, -0.5, 0.0, 0.5, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.5,
        0.0, -1.0, 0.0, 0.0,
    ];
    const HOUSE_INDICES: [u32; 15] = [0, 1, 2, 2, 3, 0, 3, 4, 5, 0, 3, 5, 6, 5, 0];

    fn extrude(coords: &[f64], indices: &[u32], depth: f64) -> IndexedMesh {
        let outline = Outline::from_flat(coords, indices).unwrap();
        Extrude::new(&outline, depth).execute().unwrap()
    }

    fn assert_contract(coords: &[f64], indices: &[u32], depth: f64) {
        let n = coords.len() / 3;
        let mesh = extrude(coords, indices, depth);

        assert_eq!(mesh.vertices.len(), 2 * n);
        assert_eq!(mesh.indices.len(), indices.len() * 2 + 6 * n);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < 2 * n));

        for i in 0..n {
            let front = mesh.vertices[i];
            let back = mesh.vertices[i + n];
            assert_eq!(back, Point3::new(front.x, front.y, front.z + depth));
        }

        let len = indices.len();
        assert_eq!(&mesh.indices[..len], indices);
        let shifted: Vec<u32> = indices.iter().map(|i| i + n as u32).collect();
        assert_eq!(&mesh.indices[len..2 * len], shifted.as_slice());
    }

    // ── Output contract ────────────────────────────────────────

    #[test]
    fn quad_contract() {
        assert_contract(&QUAD_COORDS, &QUAD_INDICES, 0.2);
    }

    #[test]
    fn house_contract() {
        assert_contract(&HOUSE_COORDS, &HOUSE_INDICES, 0.8);
    }

    #[test]
    fn quad_counts_and_first_back_vertex() {
        let mesh = extrude(&QUAD_COORDS, &QUAD_INDICES, 0.2);
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.indices.len(), QUAD_INDICES.len() * 2 + 6 * 4);
        assert_eq!(mesh.vertices[4], mesh.vertices[0] + Vector3::new(0.0, 0.0, 0.2));
    }

    #[test]
    fn house_counts_follow_formula() {
        let mesh = extrude(&HOUSE_COORDS, &HOUSE_INDICES, 0.8);
        let n = HOUSE_COORDS.len() / 3;
        assert_eq!(mesh.vertices.len(), 2 * n);
        assert_eq!(mesh.indices.len(), HOUSE_INDICES.len() * 2 + 6 * n);
    }

    #[test]
    fn quad_side_walls_exact() {
        let mesh = extrude(&QUAD_COORDS, &QUAD_INDICES, 0.2);
        assert_eq!(
            &mesh.indices[12..],
            &[
                0, 1, 5, 1, 2, 6, 2, 3, 7, 3, 4, 0, //
                4, 3, 7, 5, 4, 0, 6, 5, 1, 7, 6, 2,
            ]
        );
    }

    #[test]
    fn triangle_side_walls_exact() {
        let mesh = extrude(&[-0.5, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 1.0, 0.0], &[0, 1, 2], 0.2);
        assert_eq!(
            &mesh.indices[6..],
            &[0, 1, 4, 1, 2, 5, 2, 3, 0, 3, 2, 5, 4, 3, 0, 5, 4, 1]
        );
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let first = extrude(&HOUSE_COORDS, &HOUSE_INDICES, 0.8);
        let second = extrude(&HOUSE_COORDS, &HOUSE_INDICES, 0.8);
        assert_eq!(first, second);
    }

    // ── Watertightness across loop sizes ───────────────────────

    #[test]
    fn regular_polygons_extrude_closed() {
        for n in 3..=24_u32 {
            let coords: Vec<f64> = (0..n)
                .flat_map(|i| {
                    let angle = std::f64::consts::TAU * f64::from(i) / f64::from(n);
                    [angle.cos(), angle.sin(), 0.0]
                })
                .collect();
            let fan: Vec<u32> = (1..n - 1).flat_map(|i| [0, i, i + 1]).collect();
            let mesh = extrude(&coords, &fan, 0.5);
            assert!(IsClosed::new(&mesh).execute(), "{n}-gon prism is not closed");
        }
    }

    #[test]
    fn empty_face_gives_walls_only() {
        let mesh = extrude(&QUAD_COORDS, &[], 0.2);
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.indices.len(), 6 * 4);
        assert!(!IsClosed::new(&mesh).execute());
    }

    // ── Side-wall orientation ──────────────────────────────────

    #[test]
    fn closing_wall_is_wound_opposite_to_other_walls() {
        let mesh = extrude(&QUAD_COORDS, &QUAD_INDICES, 0.2);
        let center = Point3::new(0.0, 0.0, 0.1);
        let sides: Vec<[u32; 3]> = mesh.triangles().skip(4).collect();
        assert_eq!(sides.len(), 8);

        for (position, tri) in sides.iter().enumerate() {
            let [a, b, c] = mesh.triangle_points(*tri).unwrap();
            let normal = (b - a).cross(&(c - a));
            let outward = normal.dot(&(Point3::from((a.coords + b.coords + c.coords) / 3.0) - center));
            // Positions N-1 and N close the loop between the last and first vertex.
            if position == 3 || position == 4 {
                assert!(outward < 0.0, "closing triangle {tri:?} should face inward");
            } else {
                assert!(outward > 0.0, "side triangle {tri:?} should face outward");
            }
        }
    }

    // ── Error cases ────────────────────────────────────────────

    #[test]
    fn non_positive_depth_returns_error() {
        let outline = Outline::from_flat(&QUAD_COORDS, &QUAD_INDICES).unwrap();
        for depth in [0.0, -0.2, f64::NAN, f64::INFINITY] {
            let err = Extrude::new(&outline, depth).execute().unwrap_err();
            assert!(matches!(err, ShapesceneError::Operation(OperationError::InvalidInput(_))));
        }
    }

    #[test]
    fn flat_form_rejects_bad_streams() {
        assert!(extrude_flat(0.2, &QUAD_COORDS[..11], &QUAD_INDICES).is_err());
        assert!(extrude_flat(0.2, &QUAD_COORDS, &[0, 1, 4]).is_err());
        assert!(extrude_flat(0.2, &QUAD_COORDS, &[0, 1]).is_err());
        assert!(extrude_flat(0.2, &QUAD_COORDS[..6], &[0, 1, 0]).is_err());
    }

    #[test]
    fn flat_form_matches_mesh_form() {
        let (positions, indices) = extrude_flat(0.2, &QUAD_COORDS, &QUAD_INDICES).unwrap();
        let mesh = extrude(&QUAD_COORDS, &QUAD_INDICES, 0.2);
        assert_eq!(positions.len(), 2 * QUAD_COORDS.len());
        assert_eq!(&positions[..12], &QUAD_COORDS);
        assert!((positions[14] - 0.2).abs() < 1e-12);
        assert_eq!(indices, mesh.indices);
    }
}
