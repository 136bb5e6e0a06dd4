use crate::error::{OperationError, Result};
use crate::math::polygon_2d::{first_non_finite, is_flat, signed_area_2d};
use crate::math::Point3;
use crate::operations::creation::TriangulateOutline;

/// A flat polygon in the `z = 0` plane together with its face triangulation.
///
/// The vertices are listed in boundary order: consecutive vertices (and the
/// last and first) are joined by an edge of the outline. Every triple of
/// `indices` names one triangle of the face.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    vertices: Vec<Point3>,
    indices: Vec<u32>,
}

impl Outline {
    /// Creates an outline from boundary-ordered vertices and face triangles.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if there are fewer than 3
    /// vertices, a vertex is non-finite or off the `z = 0` plane, the index
    /// count is not a multiple of 3, or an index is out of range.
    pub fn new(vertices: Vec<Point3>, indices: Vec<u32>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(OperationError::InvalidInput(format!(
                "outline needs at least 3 vertices, got {}",
                vertices.len()
            ))
            .into());
        }
        if let Some(i) = first_non_finite(&vertices) {
            return Err(
                OperationError::InvalidInput(format!("outline vertex {i} is not finite")).into(),
            );
        }
        if !is_flat(&vertices) {
            return Err(
                OperationError::InvalidInput("outline vertices must lie in the z = 0 plane".into())
                    .into(),
            );
        }
        if indices.len() % 3 != 0 {
            return Err(OperationError::InvalidInput(format!(
                "index count {} is not a multiple of 3",
                indices.len()
            ))
            .into());
        }
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(OperationError::InvalidInput(format!(
                "index {bad} is out of range for {} vertices",
                vertices.len()
            ))
            .into());
        }
        Ok(Self { vertices, indices })
    }

    /// Creates an outline from a flat `x, y, z` coordinate stream.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the stream length is not a
    /// multiple of 3, or for any reason listed on [`Outline::new`].
    pub fn from_flat(coords: &[f64], indices: &[u32]) -> Result<Self> {
        if coords.len() % 3 != 0 {
            return Err(OperationError::InvalidInput(format!(
                "coordinate stream length {} is not a multiple of 3",
                coords.len()
            ))
            .into());
        }
        let vertices = coords
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();
        Self::new(vertices, indices.to_vec())
    }

    /// Creates an outline from its boundary loop alone, triangulating the face.
    ///
    /// # Errors
    ///
    /// Returns an error if the boundary is invalid or cannot be triangulated.
    pub fn from_boundary(boundary: Vec<Point3>) -> Result<Self> {
        let indices = TriangulateOutline::new(&boundary).execute()?;
        Self::new(boundary, indices)
    }

    /// Boundary-ordered vertices.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Face triangle indices.
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of boundary vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Signed area of the boundary loop (positive when counter-clockwise).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }
}
