use std::f64::consts::TAU;

use crate::error::{OperationError, Result};
use crate::math::{Point3, TOLERANCE};
use crate::mesh::{index_from_len, IndexedMesh};

/// Creates a cone mesh with its axis along `y`, centered at the origin.
///
/// The apex is at `+height / 2`; the base disc at `-height / 2` is closed by
/// a fan around a center vertex.
#[derive(Debug, Clone, Copy)]
pub struct MakeCone {
    radius: f64,
    height: f64,
    radial_segments: u32,
}

impl Default for MakeCone {
    fn default() -> Self {
        Self::new(1.0, 1.0, 32)
    }
}

impl MakeCone {
    /// Creates a new `MakeCone` operation.
    #[must_use]
    pub fn new(radius: f64, height: f64, radial_segments: u32) -> Self {
        Self {
            radius,
            height,
            radial_segments,
        }
    }

    /// Executes the operation, returning the cone mesh.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the radius or height is not
    /// positive or there are fewer than 3 radial segments.
    pub fn execute(&self) -> Result<IndexedMesh> {
        for (name, value) in [("radius", self.radius), ("height", self.height)] {
            if !(value.is_finite() && value > TOLERANCE) {
                return Err(OperationError::InvalidInput(format!(
                    "cone {name} must be positive, got {value}"
                ))
                .into());
            }
        }
        if self.radial_segments < 3 {
            return Err(OperationError::InvalidInput(format!(
                "cone needs at least 3 radial segments, got {}",
                self.radial_segments
            ))
            .into());
        }

        let n = self.radial_segments;
        index_from_len(n as usize + 2)?;
        let half = self.height / 2.0;

        let mut vertices = Vec::with_capacity(n as usize + 2);
        vertices.push(Point3::new(0.0, half, 0.0));
        vertices.push(Point3::new(0.0, -half, 0.0));
        for seg in 0..n {
            let theta = TAU * f64::from(seg) / f64::from(n);
            vertices.push(Point3::new(
                self.radius * theta.cos(),
                -half,
                self.radius * theta.sin(),
            ));
        }

        let apex = 0;
        let base_center = 1;
        let rim = |seg: u32| 2 + seg % n;

        let mut indices = Vec::with_capacity(6 * n as usize);
        for seg in 0..n {
            indices.extend([apex, rim(seg + 1), rim(seg)]);
            indices.extend([base_center, rim(seg), rim(seg + 1)]);
        }

        Ok(IndexedMesh::new(vertices, indices))
    }
}
