use crate::DVec3;

/// A ray in 3D space with an origin and a direction.
///
/// Intersection routines in the renderer assume `direction` has unit length;
/// use [`Ray::through`] to build a ray from an arbitrary direction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    /// Create a new ray. The direction is stored as given.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray from `origin` along the normalized `direction`.
    ///
    /// A zero direction stays zero (see [`crate::normalize`]).
    pub fn through(origin: DVec3, direction: DVec3) -> Self {
        Self::new(origin, crate::normalize(direction))
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}
