//! The fixed three-light rig and point shading.

use ratatui::style::Color;
use vitrine_core::Vec3;

/// Ambient plus one spot and one directional light.
#[derive(Debug, Clone, PartialEq)]
pub struct LightRig {
    /// Uniform base intensity applied to every point.
    pub ambient: f32,
    /// Spot light position.
    pub spot_position: Vec3,
    /// Spot light intensity.
    pub spot_intensity: f32,
    /// Direction the directional light travels in.
    pub directional: Vec3,
    /// Directional light intensity.
    pub directional_intensity: f32,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            ambient: 0.4,
            spot_position: Vec3::new(10.0, 10.0, 10.0),
            spot_intensity: 1.0,
            directional: Vec3::new(-10.0, -10.0, -5.0),
            directional_intensity: 0.5,
        }
    }
}

impl LightRig {
    /// Shade a surface point, returning an intensity in `[0, 1]`.
    ///
    /// Lambert terms from the two directed lights are clamped at zero
    /// before they are added to the ambient base.
    pub fn shade(&self, point: Vec3, normal: Vec3) -> f32 {
        let to_spot = (self.spot_position - point).normalized();
        let spot = normal.dot(to_spot).max(0.0) * self.spot_intensity;
        let from_dir = (-self.directional).normalized();
        let directional = normal.dot(from_dir).max(0.0) * self.directional_intensity;
        (self.ambient + spot + directional).clamp(0.0, 1.0)
    }
}

/// Scale an RGB color by an intensity in `[0, 1]`.
///
/// Non-RGB colors pass through unchanged.
pub fn scale_color(color: Color, intensity: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * intensity) as u8,
            (g as f32 * intensity) as u8,
            (b as f32 * intensity) as u8,
        ),
        other => other,
    }
}
