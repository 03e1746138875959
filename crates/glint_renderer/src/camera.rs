//! Camera for primary ray generation.

use crate::scene::{SceneError, SceneResult};
use crate::Ray;
use glint_math::{normalize, DVec3};

/// Pinhole camera looking down -Z.
///
/// Rotation is not supported: `direction` is kept for callers but ray
/// generation always assumes the camera faces -Z with +Y up.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    position: DVec3,
    direction: DVec3,
    field_of_view: f64, // Degrees
    aspect_ratio: f64,  // Height / width

    // Derived from field_of_view and aspect_ratio at construction
    projection_plane_distance: f64,
}

impl Camera {
    /// Create a camera.
    ///
    /// `field_of_view` is in degrees and must lie in (0, 180);
    /// `aspect_ratio` is height / width and must be positive and finite.
    pub fn new(
        position: DVec3,
        direction: DVec3,
        field_of_view: f64,
        aspect_ratio: f64,
    ) -> SceneResult<Self> {
        if !(field_of_view > 0.0 && field_of_view < 180.0) {
            return Err(SceneError::InvalidFieldOfView(field_of_view));
        }
        if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
            return Err(SceneError::InvalidAspectRatio(aspect_ratio));
        }

        if normalize(direction).dot(DVec3::NEG_Z) < 1.0 - 1e-9 {
            log::warn!(
                "Camera direction {:?} ignored; rays are always cast down -Z",
                direction
            );
        }

        let tangent = 1.0 / aspect_ratio;
        let projection_plane_distance =
            (tangent / (field_of_view / 2.0).to_radians().tan()).abs();

        Ok(Self {
            position,
            direction,
            field_of_view,
            aspect_ratio,
            projection_plane_distance,
        })
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn projection_plane_distance(&self) -> f64 {
        self.projection_plane_distance
    }

    /// Normalized direction through pixel `(x, y)` of a `width` x `height`
    /// screen. Coordinates may be fractional for sub-pixel sampling; y grows
    /// upwards.
    pub fn ray_direction(&self, x: f64, y: f64, width: u32, height: u32) -> DVec3 {
        let (width, height) = (width as f64, height as f64);
        let pixel_position = DVec3::new(
            ((x / width) - 0.5) * width / height,
            (y / height) - 0.5,
            -self.projection_plane_distance,
        );
        normalize(pixel_position)
    }

    /// Primary ray from the camera position through pixel `(x, y)`.
    pub fn get_ray(&self, x: f64, y: f64, width: u32, height: u32) -> Ray {
        Ray::new(self.position, self.ray_direction(x, y, width, height))
    }
}
