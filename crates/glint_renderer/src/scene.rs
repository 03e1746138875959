//! Scene container and the recursive shading function.
//!
//! Shading is Phong-style local illumination from a single point light
//! plus attenuated mirror reflection, evaluated up to [`MAX_DEPTH`] levels.

use crate::{Camera, Color, HitRecord, Hittable, HittableList, PointLight, Ray};
use glint_math::{Interval, VectorExt};
use thiserror::Error;

/// Maximum shading depth. Primary rays start at depth 1, so a primary ray
/// is followed by at most `MAX_DEPTH - 1` reflections.
pub const MAX_DEPTH: u32 = 4;

/// Weight of the reflected color added to a surface's local color.
pub const REFLECTION_ATTENUATION: f64 = 0.2;

/// Errors raised while building a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("Field of view must be between 0 and 180 degrees, got {0}")]
    InvalidFieldOfView(f64),

    #[error("Aspect ratio must be positive and finite, got {0}")]
    InvalidAspectRatio(f64),
}

/// Result type for scene construction.
pub type SceneResult<T> = Result<T, SceneError>;

/// Everything needed to render a frame. Read-only while rendering.
pub struct Scene {
    camera: Camera,
    light: PointLight,
    background: Color,
    objects: HittableList,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(camera: Camera, light: PointLight, background: Color) -> Self {
        Self {
            camera,
            light,
            background,
            objects: HittableList::new(),
        }
    }

    /// Replace the object list.
    pub fn with_objects(mut self, objects: HittableList) -> Self {
        self.objects = objects;
        self
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.add(object);
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn light(&self) -> &PointLight {
        &self.light
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn objects(&self) -> &HittableList {
        &self.objects
    }

    /// Closest object in front of the ray origin, if any.
    pub fn collide_with_closest(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        self.objects.hit_closest(ray, Interval::FORWARD)
    }

    /// Color seen along `ray`, unclamped.
    ///
    /// `depth` is 1 for primary rays; reflections are traced while
    /// `depth < MAX_DEPTH`.
    pub fn shade(&self, ray: &Ray, depth: u32) -> Color {
        let Some(rec) = self.collide_with_closest(ray) else {
            return self.background;
        };

        let surface = rec.surface();
        let normal = rec.normal();

        let to_light = (self.light.position - rec.p).normalized();
        let diffuse = normal.dot(to_light).max(0.0);

        // Highlights always use the camera position, reflected rays included
        let to_camera = (self.camera.position() - rec.p).normalized();
        let half_vector = (to_light + to_camera).normalized();
        let specular = normal
            .dot(half_vector)
            .max(0.0)
            .powf(surface.specular_exponent);

        let mut color =
            surface.albedo * self.light.color * surface.intensity(diffuse, specular);

        if depth < MAX_DEPTH {
            let reflected = Ray::new(rec.p, ray.direction().reflect_about(normal));
            color += REFLECTION_ATTENUATION * self.shade(&reflected, depth + 1);
        }

        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sphere, Surface};
    use glint_math::DVec3;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const BACKGROUND: Color = Color::new(50.0, 50.0, 100.0);

    fn empty_scene() -> Scene {
        let camera = Camera::new(DVec3::new(0.0, 1.0, 5.0), DVec3::NEG_Z, 100.0, 1.0).unwrap();
        let light = PointLight::new(DVec3::new(5.0, 5.0, 5.0), Color::splat(255.0));
        Scene::new(camera, light, BACKGROUND)
    }

    /// Sphere wrapper that counts intersection queries.
    struct CountingSphere {
        inner: Sphere,
        hits: Arc<AtomicUsize>,
    }

    impl Hittable for CountingSphere {
        fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<f64> {
            self.hits.fetch_add(1, Ordering::Relaxed);
            self.inner.hit(ray, ray_t)
        }

        fn normal_at(&self, point: DVec3) -> DVec3 {
            self.inner.normal_at(point)
        }

        fn surface(&self) -> &Surface {
            self.inner.surface()
        }
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = empty_scene();
        let ray = Ray::new(DVec3::ZERO, DVec3::NEG_Z);
        assert!(scene.collide_with_closest(&ray).is_none());
        assert_eq!(scene.shade(&ray, 1), BACKGROUND);
    }

    #[test]
    fn test_collide_with_closest_point() {
        let mut scene = empty_scene();
        let albedo = Color::new(0.1, 0.3, 0.7);
        scene.add(Box::new(
            Sphere::new(DVec3::new(-1.0, 1.0, -1.0), 1.0, Surface::new(albedo)).unwrap(),
        ));

        let ray = Ray::new(DVec3::new(-1.0, 1.0, 5.0), DVec3::NEG_Z);
        let rec = scene.collide_with_closest(&ray).unwrap();

        assert_eq!(rec.surface().albedo, albedo);
        assert!((rec.p - DVec3::new(-1.0, 1.0, 0.0)).length() < 1e-9);
        assert!((rec.t - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_shade_matches_lighting_formula() {
        // Light and camera both straight in front of the hit point, so
        // diffuse and specular are both 1 and the reflection escapes.
        let camera = Camera::new(DVec3::new(0.0, 0.0, 10.0), DVec3::NEG_Z, 90.0, 1.0).unwrap();
        let light = PointLight::new(DVec3::new(0.0, 0.0, 20.0), Color::splat(200.0));
        let mut scene = Scene::new(camera, light, BACKGROUND);
        let albedo = Color::new(0.5, 0.25, 1.0);
        scene.add(Box::new(Sphere::new(DVec3::ZERO, 1.0, Surface::new(albedo)).unwrap()));

        let ray = Ray::new(DVec3::new(0.0, 0.0, 10.0), DVec3::NEG_Z);
        let color = scene.shade(&ray, 1);

        // (0.1 + 1 + 0.8) local, plus 0.2 * background from the escaped bounce
        let expected = albedo * 200.0 * 1.9 + REFLECTION_ATTENUATION * BACKGROUND;
        assert!((color - expected).length() < 1e-6, "{color:?} != {expected:?}");
    }

    #[test]
    fn test_unlit_side_keeps_ambient() {
        // Light directly behind the sphere: only the ambient term survives
        let camera = Camera::new(DVec3::new(0.0, 0.0, 10.0), DVec3::NEG_Z, 90.0, 1.0).unwrap();
        let light = PointLight::new(DVec3::new(0.0, 0.0, -20.0), Color::splat(255.0));
        let mut scene = Scene::new(camera, light, Color::ZERO);
        scene.add(Box::new(Sphere::new(DVec3::ZERO, 1.0, Surface::new(Color::ONE)).unwrap()));

        let ray = Ray::new(DVec3::new(0.0, 0.0, 10.0), DVec3::NEG_Z);
        let color = scene.shade(&ray, 1);
        assert!((color - Color::splat(25.5)).length() < 1e-9);
    }

    #[test]
    fn test_recursion_is_bounded_between_facing_mirrors() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut scene = empty_scene();
        for z in [-3.0, 3.0] {
            scene.add(Box::new(CountingSphere {
                inner: Sphere::new(DVec3::new(0.0, 0.0, z), 1.0, Surface::new(Color::ONE))
                    .unwrap(),
                hits: Arc::clone(&hits),
            }));
        }

        // Bounces back and forth along the z axis forever without a ceiling
        let ray = Ray::new(DVec3::ZERO, DVec3::NEG_Z);
        let color = scene.shade(&ray, 1);

        // One closest-hit scan over both spheres per shading level
        assert_eq!(hits.load(Ordering::Relaxed), MAX_DEPTH as usize * 2);
        assert!(color.is_finite());
    }

    #[test]
    fn test_shade_at_max_depth_does_not_reflect() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut scene = empty_scene();
        scene.add(Box::new(CountingSphere {
            inner: Sphere::new(DVec3::new(0.0, 0.0, -3.0), 1.0, Surface::default()).unwrap(),
            hits: Arc::clone(&hits),
        }));

        scene.shade(&Ray::new(DVec3::ZERO, DVec3::NEG_Z), MAX_DEPTH);
        assert_eq!(hits.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_scene_error_messages() {
        assert_eq!(
            SceneError::InvalidRadius(-1.0).to_string(),
            "Sphere radius must be positive and finite, got -1"
        );
    }
}
