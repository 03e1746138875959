//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Ray, Surface};
use glint_math::{DVec3, Interval};

/// Record of the closest ray-object intersection.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: DVec3,
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// The object that was hit
    pub object: &'a dyn Hittable,
}

impl<'a> HitRecord<'a> {
    /// Unit surface normal of the hit object at the hit point.
    pub fn normal(&self) -> DVec3 {
        self.object.normal_at(self.p)
    }

    /// Shading parameters of the hit object.
    pub fn surface(&self) -> &'a Surface {
        self.object.surface()
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Distance along `ray` to the nearest valid hit strictly inside `ray_t`.
    ///
    /// `ray.direction()` is assumed to have unit length.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<f64>;

    /// Outward unit normal at a point on the surface.
    fn normal_at(&self, point: DVec3) -> DVec3;

    /// Shading parameters of this object.
    fn surface(&self) -> &Surface;
}

/// An ordered list of hittable objects.
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the end of the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find the closest object hit by `ray` inside `ray_t`.
    ///
    /// Objects are scanned in insertion order and only a strictly nearer hit
    /// replaces the current one, so equal distances resolve to the object
    /// added first.
    pub fn hit_closest(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<(f64, &dyn Hittable)> = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if let Some(t) = object.hit(ray, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = t;
                closest = Some((t, object.as_ref()));
            }
        }

        closest.map(|(t, object)| HitRecord {
            p: ray.at(t),
            t,
            object,
        })
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Box<dyn Hittable>>> for HittableList {
    fn from(objects: Vec<Box<dyn Hittable>>) -> Self {
        Self { objects }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Sphere};

    fn sphere(center: DVec3, radius: f64, albedo: Color) -> Box<dyn Hittable> {
        Box::new(Sphere::new(center, radius, Surface::new(albedo)).unwrap())
    }

    #[test]
    fn test_empty_list_never_hits() {
        let list = HittableList::new();
        assert!(list.is_empty());

        let ray = Ray::new(DVec3::ZERO, DVec3::NEG_Z);
        assert!(list.hit_closest(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_single_sphere_hit() {
        let mut list = HittableList::new();
        list.add(sphere(DVec3::new(0.0, 0.0, -5.0), 1.0, Color::X));

        let ray = Ray::new(DVec3::ZERO, DVec3::NEG_Z);
        let rec = list.hit_closest(&ray, Interval::FORWARD).expect("should hit");

        assert!((rec.t - 4.0).abs() < 1e-9);
        assert!((rec.p - DVec3::new(0.0, 0.0, -4.0)).length() < 1e-9);
        assert_eq!(rec.surface().albedo, Color::X);
        assert!((rec.normal() - DVec3::Z).length() < 1e-9);
    }

    #[test]
    fn test_closest_of_several() {
        let mut list = HittableList::new();
        list.add(sphere(DVec3::new(0.0, 0.0, -10.0), 1.0, Color::X));
        list.add(sphere(DVec3::new(0.0, 0.0, -4.0), 1.0, Color::Y));
        list.add(sphere(DVec3::new(0.0, 5.0, -2.0), 1.0, Color::Z));

        let ray = Ray::new(DVec3::ZERO, DVec3::NEG_Z);
        let rec = list.hit_closest(&ray, Interval::FORWARD).unwrap();

        assert_eq!(rec.surface().albedo, Color::Y);
        assert!((rec.t - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_tie_goes_to_first_object() {
        let center = DVec3::new(0.0, 0.0, -3.0);
        let mut list = HittableList::new();
        list.add(sphere(center, 1.0, Color::X));
        list.add(sphere(center, 1.0, Color::Y));

        let ray = Ray::new(DVec3::ZERO, DVec3::NEG_Z);
        let rec = list.hit_closest(&ray, Interval::FORWARD).unwrap();
        assert_eq!(rec.surface().albedo, Color::X);
    }

    #[test]
    fn test_miss_all() {
        let list: HittableList = vec![
            sphere(DVec3::new(0.0, 0.0, -5.0), 1.0, Color::X),
            sphere(DVec3::new(3.0, 0.0, -5.0), 1.0, Color::Y),
        ]
        .into();
        assert_eq!(list.len(), 2);

        let ray = Ray::new(DVec3::ZERO, DVec3::Y);
        assert!(list.hit_closest(&ray, Interval::FORWARD).is_none());
    }
}
