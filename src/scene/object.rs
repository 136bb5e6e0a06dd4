use crate::math::Matrix4;
use crate::mesh::IndexedMesh;
use crate::operations::transform::ObjectTransform;
use crate::shapes::ShapeKind;

use super::material::Material;

/// One shape placed in the scene.
///
/// The mesh is built once when the object is created and never rebuilt;
/// editing only touches the name, transform and material.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// User-editable label.
    pub name: String,
    /// Placement in world space.
    pub transform: ObjectTransform,
    /// Appearance.
    pub material: Material,
    kind: ShapeKind,
    mesh: IndexedMesh,
}

impl SceneObject {
    /// Creates an object at the origin with the default material for its kind.
    #[must_use]
    pub fn new(kind: ShapeKind, mesh: IndexedMesh) -> Self {
        let material = if kind.is_extruded() {
            Material::double_sided()
        } else {
            Material::wireframe()
        };
        Self {
            name: kind.name().to_owned(),
            transform: ObjectTransform::new(),
            material,
            kind,
            mesh,
        }
    }

    /// The shape this object was built from.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Object-space mesh.
    #[must_use]
    pub fn mesh(&self) -> &IndexedMesh {
        &self.mesh
    }

    /// Object-to-world matrix.
    #[must_use]
    pub fn world_matrix(&self) -> Matrix4 {
        self.transform.world_matrix()
    }

    /// The mesh with the current transform applied.
    #[must_use]
    pub fn world_mesh(&self) -> IndexedMesh {
        self.mesh.transformed(&self.world_matrix())
    }
}
