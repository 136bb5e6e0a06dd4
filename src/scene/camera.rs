use std::f64::consts::FRAC_PI_2;

use nalgebra::Perspective3;

use crate::error::{GeometryError, Result};
use crate::math::intersect_3d::Ray;
use crate::math::{Matrix4, Point3, Vector3, TOLERANCE};

const PITCH_LIMIT: f64 = FRAC_PI_2 - 0.01;
const MIN_DISTANCE: f64 = 0.1;

/// Perspective camera orbiting a target point.
///
/// The eye sits at `distance` from `target`; with zero yaw and pitch it looks
/// down `-z` with `+y` up.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    target: Point3,
    distance: f64,
    yaw: f64,
    pitch: f64,
    fov_y: f64,
    near: f64,
    far: f64,
    width: f64,
    height: f64,
}

impl OrbitCamera {
    /// Creates a camera looking at the origin from `(0, 0, distance)`.
    ///
    /// * `fov_y_degrees` - vertical field of view.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if the field of view is
    /// not in `(0, 180)`, the clip planes are not `0 < near < far`, the
    /// distance is not positive, or the viewport is empty.
    pub fn new(
        fov_y_degrees: f64,
        near: f64,
        far: f64,
        distance: f64,
        width: f64,
        height: f64,
    ) -> Result<Self> {
        check_range("fov_y_degrees", fov_y_degrees, TOLERANCE, 180.0 - TOLERANCE)?;
        check_range("near", near, TOLERANCE, f64::MAX)?;
        check_range("far", far, near + TOLERANCE, f64::MAX)?;
        check_range("distance", distance, MIN_DISTANCE, far)?;

        let mut camera = Self {
            target: Point3::origin(),
            distance,
            yaw: 0.0,
            pitch: 0.0,
            fov_y: fov_y_degrees.to_radians(),
            near,
            far,
            width: 1.0,
            height: 1.0,
        };
        camera.set_viewport(width, height)?;
        Ok(camera)
    }

    /// Updates the viewport size after a resize.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if either side is not
    /// positive.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Result<()> {
        check_range("width", width, 1.0, f64::MAX)?;
        check_range("height", height, 1.0, f64::MAX)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Viewport width over height.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    /// Rotates the eye around the target; angles in radians.
    ///
    /// Pitch is clamped just short of straight up or down.
    pub fn orbit(&mut self, delta_yaw: f64, delta_pitch: f64) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Scales the eye distance by `factor` (below 1 moves closer).
    pub fn zoom(&mut self, factor: f64) {
        if factor.is_finite() && factor > 0.0 {
            self.distance = (self.distance * factor).clamp(MIN_DISTANCE, self.far * 0.5);
        }
    }

    /// Moves the orbit target.
    pub fn set_target(&mut self, target: Point3) {
        self.target = target;
    }

    /// Orbit target.
    #[must_use]
    pub fn target(&self) -> &Point3 {
        &self.target
    }

    /// Eye position in world space.
    #[must_use]
    pub fn eye(&self) -> Point3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vector3::new(cp * sy, sp, cp * cy) * self.distance
    }

    /// World-to-camera matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Matrix4 {
        Matrix4::look_at_rh(&self.eye(), &self.target, &Vector3::y())
    }

    /// Camera-to-clip matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Matrix4 {
        Perspective3::new(self.aspect(), self.fov_y, self.near, self.far).to_homogeneous()
    }

    /// Combined world-to-clip matrix.
    #[must_use]
    pub fn view_projection(&self) -> Matrix4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Maps a pixel position (origin top-left) to normalized device coordinates.
    #[must_use]
    pub fn screen_to_ndc(&self, x: f64, y: f64) -> (f64, f64) {
        (x / self.width * 2.0 - 1.0, -(y / self.height) * 2.0 + 1.0)
    }

    /// Casts a world-space ray from the eye through a pixel.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the view-projection matrix is
    /// singular.
    pub fn screen_ray(&self, x: f64, y: f64) -> Result<Ray> {
        let (ndc_x, ndc_y) = self.screen_to_ndc(x, y);
        let inverse = self
            .view_projection()
            .try_inverse()
            .ok_or_else(|| GeometryError::Degenerate("view-projection is singular".into()))?;

        let near = inverse.transform_point(&Point3::new(ndc_x, ndc_y, -1.0));
        let far = inverse.transform_point(&Point3::new(ndc_x, ndc_y, 1.0));
        Ray::new(self.eye(), far - near)
    }
}

fn check_range(parameter: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(GeometryError::ParameterOutOfRange {
            parameter,
            value,
            min,
            max,
        }
        .into())
    }
}
