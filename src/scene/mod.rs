pub mod camera;
pub mod material;
pub mod object;
pub mod panel;

pub use camera::OrbitCamera;
pub use material::{Color, Material, NamedColor, Side};
pub use object::SceneObject;
pub use panel::{PanelEdit, SettingsPanel, SliderRange};

use slotmap::SlotMap;

use crate::error::{Result, SceneError};
use crate::math::intersect_3d::{ray_aabb_intersect, Ray};
use crate::operations::query::{BoundingBox, RayCast, RayHit};
use crate::shapes::{build_renderable, ShapeKind};

slotmap::new_key_type! {
    /// Unique identifier for an object in a [`Scene`].
    pub struct ObjectId;
}

/// Arena that owns every object in the scene plus the current selection.
#[derive(Debug, Default)]
pub struct Scene {
    objects: SlotMap<ObjectId, SceneObject>,
    selected: Option<ObjectId>,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the mesh for `kind` and inserts it at the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh cannot be built.
    pub fn add(&mut self, kind: ShapeKind) -> Result<ObjectId> {
        let mesh = build_renderable(kind)?;
        let id = self.insert(SceneObject::new(kind, mesh));
        tracing::info!(shape = %kind, ?id, "added object");
        Ok(id)
    }

    /// Inserts an existing object and returns its ID.
    pub fn insert(&mut self, object: SceneObject) -> ObjectId {
        self.objects.insert(object)
    }

    /// Returns a reference to an object.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::ObjectNotFound`] if the ID is stale.
    pub fn object(&self, id: ObjectId) -> Result<&SceneObject> {
        self.objects
            .get(id)
            .ok_or_else(|| SceneError::ObjectNotFound.into())
    }

    /// Returns a mutable reference to an object.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::ObjectNotFound`] if the ID is stale.
    pub fn object_mut(&mut self, id: ObjectId) -> Result<&mut SceneObject> {
        self.objects
            .get_mut(id)
            .ok_or_else(|| SceneError::ObjectNotFound.into())
    }

    /// Removes an object, clearing the selection if it pointed at it.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::ObjectNotFound`] if the ID is stale.
    pub fn remove(&mut self, id: ObjectId) -> Result<SceneObject> {
        let object = self.objects.remove(id).ok_or(SceneError::ObjectNotFound)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        tracing::debug!(?id, name = %object.name, "removed object");
        Ok(object)
    }

    /// Makes `id` the current object.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::ObjectNotFound`] if the ID is stale.
    pub fn select(&mut self, id: ObjectId) -> Result<()> {
        if !self.objects.contains_key(id) {
            return Err(SceneError::ObjectNotFound.into());
        }
        self.selected = Some(id);
        Ok(())
    }

    /// The current object, if any.
    #[must_use]
    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    /// Returns the current object.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NothingSelected`] if no object is selected.
    pub fn selected_object(&self) -> Result<&SceneObject> {
        let id = self.selected.ok_or(SceneError::NothingSelected)?;
        self.object(id)
    }

    /// Returns the current object mutably.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NothingSelected`] if no object is selected.
    pub fn selected_object_mut(&mut self) -> Result<&mut SceneObject> {
        let id = self.selected.ok_or(SceneError::NothingSelected)?;
        self.object_mut(id)
    }

    /// Iterates over all objects in insertion-slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter()
    }

    /// Number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the scene has no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Casts a world-space ray at every object and selects the nearest hit.
    ///
    /// Single-sided materials only register hits on their front faces. A miss
    /// leaves the selection unchanged.
    pub fn pick(&mut self, ray: &Ray) -> Option<(ObjectId, RayHit)> {
        let mut best: Option<(ObjectId, RayHit)> = None;
        for (id, object) in &self.objects {
            let mesh = object.world_mesh();
            let Ok(aabb) = BoundingBox::new(&mesh).execute() else {
                continue;
            };
            let Some(entry) = ray_aabb_intersect(ray, &aabb.min, &aabb.max) else {
                continue;
            };
            if best.as_ref().is_some_and(|(_, hit)| hit.distance < entry) {
                continue;
            }
            let hit = RayCast::new(&mesh, *ray)
                .cull_back_faces(object.material.side == Side::Front)
                .execute();
            if let Some(hit) = hit {
                if best.as_ref().is_none_or(|(_, b)| hit.distance < b.distance) {
                    best = Some((id, hit));
                }
            }
        }

        match best {
            Some((id, hit)) => {
                self.selected = Some(id);
                tracing::debug!(?id, distance = hit.distance, "picked object");
            }
            None => tracing::debug!("pick missed"),
        }
        best
    }
}
