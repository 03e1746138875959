//! Vector helpers shared by the camera and the shading code.

use crate::{DVec3, Interval};

/// Normalize `v`, returning it unchanged when its length is zero.
///
/// glam's `normalize` would produce NaNs for a zero vector. A degenerate
/// direction or normal stays zero here, so dot products against it just
/// contribute nothing.
#[inline]
pub fn normalize(v: DVec3) -> DVec3 {
    let norm = v.length();
    if norm == 0.0 {
        return v;
    }
    v / norm
}

/// Clamp every channel of `v` into `range`.
#[inline]
pub fn clamp_channels(v: DVec3, range: Interval) -> DVec3 {
    DVec3::new(range.clamp(v.x), range.clamp(v.y), range.clamp(v.z))
}

pub trait VectorExt {
    /// Zero-safe normalization, see [`normalize`].
    fn normalized(self) -> Self;

    /// Mirror `self` about the unit normal `n`.
    fn reflect_about(self, n: Self) -> Self;
}

impl VectorExt for DVec3 {
    #[inline]
    fn normalized(self) -> Self {
        normalize(self)
    }

    #[inline]
    fn reflect_about(self, n: Self) -> Self {
        self - 2.0 * self.dot(n) * n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_unit_length() {
        let v = normalize(DVec3::new(3.0, 0.0, 4.0));
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert_eq!(v, DVec3::new(0.6, 0.0, 0.8));
    }

    #[test]
    fn test_normalize_zero_vector() {
        let v = normalize(DVec3::ZERO);
        assert_eq!(v, DVec3::ZERO);
        assert!(!v.is_nan());

        // A zero vector contributes nothing to a dot product
        assert_eq!(v.dot(DVec3::new(1.0, 2.0, 3.0)), 0.0);
    }

    #[test]
    fn test_reflect() {
        let d = DVec3::new(1.0, -1.0, 0.0);
        assert_eq!(d.reflect_about(DVec3::Y), DVec3::new(1.0, 1.0, 0.0));

        // Head-on reflection reverses the direction
        assert_eq!(DVec3::NEG_Z.reflect_about(DVec3::Z), DVec3::Z);
    }

    #[test]
    fn test_clamp_channels() {
        let c = clamp_channels(DVec3::new(-10.0, 100.0, 400.0), Interval::COLOR);
        assert_eq!(c, DVec3::new(0.0, 100.0, 255.0));
    }
}
