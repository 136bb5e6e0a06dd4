//! Application state of the viewer and its event handlers.

use crate::error::Result;
use crate::math::Matrix4;
use crate::scene::{
    Color, Material, ObjectId, OrbitCamera, PanelEdit, Scene, SettingsPanel, SliderRange,
};
use crate::shapes::ShapeKind;

/// Start-up parameters of a [`Viewer`].
#[derive(Debug, Clone, Copy)]
pub struct ViewerConfig {
    /// Vertical field of view in degrees.
    pub fov_y: f64,
    pub near: f64,
    pub far: f64,
    /// Initial eye distance from the origin.
    pub distance: f64,
    /// Viewport size in pixels.
    pub width: f64,
    pub height: f64,
    pub position_range: SliderRange,
    pub rotation_range: SliderRange,
    /// Shape inserted and selected at start-up.
    pub initial_shape: Option<ShapeKind>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            fov_y: 60.0,
            near: 0.1,
            far: 10_000.0,
            distance: 3.0,
            width: 1280.0,
            height: 720.0,
            position_range: SliderRange::POSITION,
            rotation_range: SliderRange::ROTATION,
            initial_shape: Some(ShapeKind::Cube),
        }
    }
}

/// What a renderer needs to draw one object.
#[derive(Debug, Clone)]
pub struct DrawItem<'a> {
    pub id: ObjectId,
    /// Object-space positions, `x, y, z` per vertex.
    pub positions: Vec<f32>,
    pub indices: &'a [u32],
    pub world_matrix: Matrix4,
    pub material: Material,
}

/// The scene, its camera, and the settings panel bound to the current object.
#[derive(Debug)]
pub struct Viewer {
    scene: Scene,
    camera: OrbitCamera,
    panel: SettingsPanel,
}

impl Viewer {
    /// Creates the viewer and inserts the configured start-up shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the camera parameters are invalid or the start-up
    /// shape cannot be built.
    pub fn new(config: ViewerConfig) -> Result<Self> {
        let camera = OrbitCamera::new(
            config.fov_y,
            config.near,
            config.far,
            config.distance,
            config.width,
            config.height,
        )?;
        let mut viewer = Self {
            scene: Scene::new(),
            camera,
            panel: SettingsPanel::new(config.position_range, config.rotation_range),
        };
        if let Some(kind) = config.initial_shape {
            viewer.insert(kind)?;
        }
        tracing::info!(
            width = config.width,
            height = config.height,
            objects = viewer.scene.len(),
            "viewer ready"
        );
        Ok(viewer)
    }

    /// Adds a shape, selects it, and shows it in the panel.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape's mesh cannot be built.
    pub fn insert(&mut self, kind: ShapeKind) -> Result<ObjectId> {
        let id = self.scene.add(kind)?;
        self.scene.select(id)?;
        self.panel.sync_from(self.scene.object(id)?);
        Ok(id)
    }

    /// Picks at a pixel position.
    ///
    /// On a hit the object is recolored with `highlight` (`0xRRGGBB`),
    /// selected, and shown in the panel. Returns the picked object.
    ///
    /// # Errors
    ///
    /// Returns an error if no ray can be cast through the pixel.
    pub fn click(&mut self, x: f64, y: f64, highlight: u32) -> Result<Option<ObjectId>> {
        let ray = self.camera.screen_ray(x, y)?;
        let Some((id, hit)) = self.scene.pick(&ray) else {
            tracing::debug!(x, y, "click hit nothing");
            return Ok(None);
        };
        let object = self.scene.object_mut(id)?;
        object.material.color = Color::from_hex(highlight);
        self.panel.sync_from(object);
        tracing::info!(
            name = %object.name,
            distance = hit.distance,
            highlight = format_args!("{highlight:06x}"),
            "selected object"
        );
        Ok(Some(id))
    }

    /// Applies a panel edit to the current object.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NothingSelected`](crate::error::SceneError::NothingSelected)
    /// if there is no current object, or the panel's own validation error.
    pub fn edit(&mut self, edit: PanelEdit) -> Result<()> {
        let object = self.scene.selected_object_mut()?;
        tracing::debug!(?edit, name = %object.name, "panel edit");
        self.panel.apply(edit, object)
    }

    /// Handles a window resize.
    ///
    /// # Errors
    ///
    /// Returns an error if either side is not positive.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        self.camera.set_viewport(width, height)?;
        tracing::debug!(width, height, "viewport resized");
        Ok(())
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    #[must_use]
    pub fn panel(&self) -> &SettingsPanel {
        &self.panel
    }

    /// Draw data for every object.
    #[must_use]
    pub fn draw_list(&self) -> Vec<DrawItem<'_>> {
        self.scene
            .iter()
            .map(|(id, object)| DrawItem {
                id,
                positions: object.mesh().position_buffer(),
                indices: object.mesh().index_buffer(),
                world_matrix: object.world_matrix(),
                material: object.material,
            })
            .collect()
    }
}
