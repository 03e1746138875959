//! Surface shading parameters.

use glint_math::DVec3;

/// Color type alias (RGB). Albedo channels are 0-1, light and pixel
/// colors are 0-255 and stay unclamped until output.
pub type Color = DVec3;

/// Phong-style shading parameters of a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Base color, 0-1 per channel
    pub albedo: Color,
    /// Constant term added regardless of light direction
    pub ambient_strength: f64,
    /// Weight of the specular highlight
    pub specular_strength: f64,
    /// Shininess; higher values give a tighter highlight
    pub specular_exponent: f64,
}

impl Surface {
    pub const DEFAULT_AMBIENT_STRENGTH: f64 = 0.1;
    pub const DEFAULT_SPECULAR_STRENGTH: f64 = 0.8;
    pub const DEFAULT_SPECULAR_EXPONENT: f64 = 128.0;

    /// Create a surface with the given albedo and default lighting terms.
    pub fn new(albedo: Color) -> Self {
        Self {
            albedo,
            ambient_strength: Self::DEFAULT_AMBIENT_STRENGTH,
            specular_strength: Self::DEFAULT_SPECULAR_STRENGTH,
            specular_exponent: Self::DEFAULT_SPECULAR_EXPONENT,
        }
    }

    /// Override the ambient term.
    pub fn with_ambient(mut self, ambient_strength: f64) -> Self {
        self.ambient_strength = ambient_strength;
        self
    }

    /// Override the specular weight and exponent.
    pub fn with_specular(mut self, strength: f64, exponent: f64) -> Self {
        self.specular_strength = strength;
        self.specular_exponent = exponent;
        self
    }

    /// Local illumination factor for the given diffuse and specular terms.
    ///
    /// The three terms are summed and the sum scales `albedo * light`, so
    /// diffuse is not weighted by albedo a second time.
    #[inline]
    pub fn intensity(&self, diffuse: f64, specular: f64) -> f64 {
        self.ambient_strength + diffuse + self.specular_strength * specular
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(Color::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_defaults() {
        let surface = Surface::new(Color::new(0.1, 0.3, 0.7));
        assert_eq!(surface.ambient_strength, 0.1);
        assert_eq!(surface.specular_strength, 0.8);
        assert_eq!(surface.specular_exponent, 128.0);
    }

    #[test]
    fn test_surface_overrides() {
        let surface = Surface::new(Color::ONE)
            .with_ambient(0.3)
            .with_specular(0.5, 16.0);
        assert_eq!(surface.ambient_strength, 0.3);
        assert_eq!(surface.specular_strength, 0.5);
        assert_eq!(surface.specular_exponent, 16.0);
    }

    #[test]
    fn test_intensity_sums_terms() {
        let surface = Surface::default();
        // 0.1 ambient + 0.5 diffuse + 0.8 * 0.25 specular
        assert!((surface.intensity(0.5, 0.25) - 0.8).abs() < 1e-12);
        assert!((surface.intensity(0.0, 0.0) - 0.1).abs() < 1e-12);
    }
}
