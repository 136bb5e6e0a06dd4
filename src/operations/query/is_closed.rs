use std::collections::HashMap;

use crate::mesh::IndexedMesh;

/// Checks whether a mesh is closed (watertight).
///
/// A mesh is closed when it has at least one triangle, every index is in
/// range, the index count is a multiple of 3, and every undirected edge is
/// shared by exactly two triangles. Winding is not considered.
pub struct IsClosed<'a> {
    mesh: &'a IndexedMesh,
}

impl<'a> IsClosed<'a> {
    /// Creates a new `IsClosed` query.
    #[must_use]
    pub fn new(mesh: &'a IndexedMesh) -> Self {
        Self { mesh }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        let mesh = self.mesh;
        if mesh.is_empty() || mesh.indices.len() % 3 != 0 {
            return false;
        }
        let n = mesh.vertices.len();
        if mesh.indices.iter().any(|&i| i as usize >= n) {
            return false;
        }

        let mut edge_uses: HashMap<(u32, u32), u32> = HashMap::new();
        for [a, b, c] in mesh.triangles() {
            if a == b || b == c || c == a {
                return false;
            }
            for (u, v) in [(a, b), (b, c), (c, a)] {
                *edge_uses.entry((u.min(v), u.max(v))).or_insert(0) += 1;
            }
        }
        edge_uses.values().all(|&uses| uses == 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point3;

    fn tetrahedron(indices: Vec<u32>) -> IndexedMesh {
        IndexedMesh::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
            indices,
        )
    }

    #[test]
    fn tetrahedron_is_closed() {
        let mesh = tetrahedron(vec![0, 2, 1, 0, 1, 3, 1, 2, 3, 0, 3, 2]);
        assert!(IsClosed::new(&mesh).execute());
    }

    #[test]
    fn missing_face_is_open() {
        let mesh = tetrahedron(vec![0, 2, 1, 0, 1, 3, 1, 2, 3]);
        assert!(!IsClosed::new(&mesh).execute());
    }

    #[test]
    fn out_of_range_index_is_not_closed() {
        let mesh = tetrahedron(vec![0, 2, 1, 0, 1, 3, 1, 2, 3, 0, 3, 9]);
        assert!(!IsClosed::new(&mesh).execute());
    }

    #[test]
    fn degenerate_triangle_is_not_closed() {
        let mesh = tetrahedron(vec![0, 0, 1, 0, 1, 3, 1, 2, 3, 0, 3, 2]);
        assert!(!IsClosed::new(&mesh).execute());
    }

    #[test]
    fn empty_mesh_is_not_closed() {
        assert!(!IsClosed::new(&IndexedMesh::default()).execute());
    }
}
