//! Sphere primitive for ray tracing.

use crate::{
    hittable::Hittable,
    scene::{SceneError, SceneResult},
    Ray, Surface,
};
use glint_math::{DVec3, Interval, VectorExt};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: DVec3,
    radius: f64,
    surface: Surface,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Fails with [`SceneError::InvalidRadius`] unless `radius` is finite
    /// and positive.
    pub fn new(center: DVec3, radius: f64, surface: Surface) -> SceneResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            surface,
        })
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<f64> {
        // Unit direction, so the quadratic's leading coefficient is 1
        let l = ray.origin() - self.center;
        let b = 2.0 * ray.direction().dot(l);
        let c = l.length_squared() - self.radius * self.radius;

        // Tangent rays count as a miss
        let delta = b * b - 4.0 * c;
        if delta <= 0.0 {
            return None;
        }

        let sqrtd = delta.sqrt();
        let t1 = (-b + sqrtd) / 2.0;
        let t2 = (-b - sqrtd) / 2.0;

        // Both roots must lie in front of the origin. A ray starting inside
        // the sphere, or on its surface and leaving it, does not hit.
        if t1 <= 0.0 || t2 <= 0.0 {
            return None;
        }

        let t = t1.min(t2);
        ray_t.surrounds(t).then_some(t)
    }

    fn normal_at(&self, point: DVec3) -> DVec3 {
        (point - self.center).normalized()
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }
}
