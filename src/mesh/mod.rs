use crate::error::{OperationError, Result};
use crate::math::{Matrix4, Point3};

/// An indexed triangle mesh.
///
/// `indices` is a flat list; every consecutive triple names one triangle.
/// Meshes are produced once by a builder and treated as immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<u32>,
}

impl IndexedMesh {
    /// Creates a mesh from positions and a flat index list.
    #[must_use]
    pub fn new(vertices: Vec<Point3>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Number of complete triangles in the index list.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns `true` if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.len() < 3
    }

    /// Iterates over the index triples of all complete triangles.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Resolves a triangle to its three corner positions.
    ///
    /// Returns `None` if any index is out of range.
    #[must_use]
    pub fn triangle_points(&self, triangle: [u32; 3]) -> Option<[Point3; 3]> {
        let a = self.vertices.get(triangle[0] as usize)?;
        let b = self.vertices.get(triangle[1] as usize)?;
        let c = self.vertices.get(triangle[2] as usize)?;
        Some([*a, *b, *c])
    }

    /// Flattens positions into an `x, y, z` stream for a GPU position buffer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn position_buffer(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }

    /// Returns the index buffer.
    #[must_use]
    pub fn index_buffer(&self) -> &[u32] {
        &self.indices
    }

    /// Returns a copy with every vertex transformed by `matrix`.
    #[must_use]
    pub fn transformed(&self, matrix: &Matrix4) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|p| matrix.transform_point(p))
                .collect(),
            indices: self.indices.clone(),
        }
    }

    /// Appends another mesh, re-basing its indices.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::Failed`] if the combined vertex count does
    /// not fit a `u32` index.
    pub fn merge(&mut self, other: &IndexedMesh) -> Result<()> {
        let base = index_from_len(self.vertices.len())?;
        index_from_len(self.vertices.len() + other.vertices.len())?;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + base));
        Ok(())
    }
}

/// Converts a vertex count or offset into a `u32` index.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] when `len` exceeds `u32::MAX`.
pub fn index_from_len(len: usize) -> Result<u32> {
    u32::try_from(len)
        .map_err(|_| OperationError::Failed(format!("{len} vertices exceed the u32 index range")).into())
}
