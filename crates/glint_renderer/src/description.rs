//! Serializable scene descriptions.
//!
//! A [`SceneDescription`] holds the same data as the programmatic scene
//! setup, as plain values, so it can be stored as JSON. `build` runs the
//! same validation as the constructors.

use crate::scene::SceneResult;
use crate::{Camera, Color, HittableList, PointLight, Scene, Sphere, Surface};
use glint_math::DVec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraDescription {
    pub position: DVec3,
    #[serde(default = "CameraDescription::default_direction")]
    pub direction: DVec3,
    /// Degrees
    pub field_of_view: f64,
    /// Height / width. Taken from the output resolution when absent.
    #[serde(default)]
    pub aspect_ratio: Option<f64>,
}

impl CameraDescription {
    fn default_direction() -> DVec3 {
        DVec3::NEG_Z
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightDescription {
    pub position: DVec3,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereDescription {
    pub center: DVec3,
    pub radius: f64,
    /// 0-1 per channel
    pub albedo: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambient_strength: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specular_strength: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specular_exponent: Option<f64>,
}

impl SphereDescription {
    pub fn new(center: DVec3, radius: f64, albedo: Color) -> Self {
        Self {
            center,
            radius,
            albedo,
            ambient_strength: None,
            specular_strength: None,
            specular_exponent: None,
        }
    }

    /// Surface with the overrides applied over the defaults.
    pub fn surface(&self) -> Surface {
        let mut surface = Surface::new(self.albedo);
        if let Some(ambient) = self.ambient_strength {
            surface.ambient_strength = ambient;
        }
        if let Some(strength) = self.specular_strength {
            surface.specular_strength = strength;
        }
        if let Some(exponent) = self.specular_exponent {
            surface.specular_exponent = exponent;
        }
        surface
    }

    pub fn build(&self) -> SceneResult<Sphere> {
        Sphere::new(self.center, self.radius, self.surface())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub camera: CameraDescription,
    pub light: LightDescription,
    pub background: Color,
    #[serde(default)]
    pub spheres: Vec<SphereDescription>,
}

impl SceneDescription {
    /// Build a validated scene. `aspect_ratio` (height / width) is used
    /// unless the camera description fixes one.
    pub fn build(&self, aspect_ratio: f64) -> SceneResult<Scene> {
        let camera = Camera::new(
            self.camera.position,
            self.camera.direction,
            self.camera.field_of_view,
            self.camera.aspect_ratio.unwrap_or(aspect_ratio),
        )?;
        let light = PointLight::new(self.light.position, self.light.color);

        let mut objects = HittableList::new();
        for sphere in &self.spheres {
            objects.add(Box::new(sphere.build()?));
        }

        log::debug!("Built scene with {} spheres", objects.len());
        Ok(Scene::new(camera, light, self.background).with_objects(objects))
    }
}

impl Default for SceneDescription {
    /// Two small spheres inside a room whose walls are huge spheres.
    fn default() -> Self {
        let wall = |center: DVec3, albedo: Color| SphereDescription::new(center, 900.0, albedo);
        let grey = Color::splat(0.9);

        Self {
            camera: CameraDescription {
                position: DVec3::new(0.0, 1.0, 5.0),
                direction: DVec3::NEG_Z,
                field_of_view: 100.0,
                aspect_ratio: None,
            },
            light: LightDescription {
                position: DVec3::new(5.0, 5.0, 5.0),
                color: Color::splat(255.0),
            },
            background: Color::new(50.0, 50.0, 100.0),
            spheres: vec![
                SphereDescription::new(DVec3::new(-1.0, 1.0, -1.0), 1.0, Color::new(0.1, 0.3, 0.7)),
                SphereDescription::new(DVec3::new(1.0, 0.3, 0.0), 0.3, Color::new(0.5, 0.1, 0.4)),
                wall(DVec3::new(0.0, -900.0, 0.0), grey),
                wall(DVec3::new(0.0, 903.0, 0.0), grey),
                wall(DVec3::new(-903.0, 0.0, 0.0), Color::new(1.0, 0.0, 0.0)), // Left
                wall(DVec3::new(903.0, 0.0, 0.0), Color::new(0.0, 0.0, 1.0)),  // Right
                wall(DVec3::new(0.0, 0.0, -903.0), grey),                      // Back
            ],
        }
    }
}
