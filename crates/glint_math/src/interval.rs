/// A closed range of real numbers, used for ray parameter bounds and
/// color channel clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// Every distance in front of a ray origin, excluding the origin itself.
    pub const FORWARD: Interval = Interval {
        min: 0.0,
        max: f64::INFINITY,
    };

    /// Displayable range of an 8-bit color channel.
    pub const COLOR: Interval = Interval {
        min: 0.0,
        max: 255.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));
        assert!(interval.surrounds(5.0));
        assert!(!interval.surrounds(-0.1));
    }

    #[test]
    fn test_forward_excludes_origin() {
        assert!(!Interval::FORWARD.surrounds(0.0));
        assert!(!Interval::FORWARD.surrounds(-1e-9));
        assert!(Interval::FORWARD.surrounds(1e-9));
        assert!(Interval::FORWARD.surrounds(1e12));
    }

    #[test]
    fn test_color_clamp() {
        assert_eq!(Interval::COLOR.clamp(-5.0), 0.0);
        assert_eq!(Interval::COLOR.clamp(128.5), 128.5);
        assert_eq!(Interval::COLOR.clamp(300.0), 255.0);
    }
}
