use crate::Color;
use glint_math::DVec3;

/// A single point light. Intensity does not fall off with distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: DVec3,
    /// RGB intensity, typically 0-255 per channel
    pub color: Color,
}

impl PointLight {
    pub fn new(position: DVec3, color: Color) -> Self {
        Self { position, color }
    }
}
