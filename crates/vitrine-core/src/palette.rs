//! Environment presets and the colors they assign to scene elements.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Lighting environment preset for the backdrop.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentPreset {
    /// Dark night sky with neon accents (the default showcase look).
    #[default]
    Night,
    /// Warmer magenta-leaning variant.
    Dusk,
}

impl EnvironmentPreset {
    /// Cycle to the next preset.
    pub fn next(self) -> Self {
        match self {
            Self::Night => Self::Dusk,
            Self::Dusk => Self::Night,
        }
    }

    /// The color palette for this preset.
    pub fn palette(self) -> Palette {
        match self {
            Self::Night => Palette {
                background: Color::Rgb(5, 8, 16),
                stars: [
                    Color::Rgb(60, 60, 80),
                    Color::Rgb(100, 100, 140),
                    Color::Rgb(150, 150, 200),
                ],
                labels: Color::Rgb(0, 255, 136),
                labels_back: Color::Rgb(0, 100, 60),
                particles: Color::Rgb(100, 255, 218),
                box_mesh: Color::Rgb(255, 107, 107),
                torus_mesh: Color::Rgb(78, 205, 196),
                sphere_mesh: Color::Rgb(69, 183, 209),
                accent: Color::Rgb(100, 255, 218),
                text: Color::Rgb(220, 225, 235),
                text_dim: Color::Rgb(110, 120, 140),
            },
            Self::Dusk => Palette {
                background: Color::Rgb(16, 6, 14),
                stars: [
                    Color::Rgb(80, 60, 70),
                    Color::Rgb(140, 100, 120),
                    Color::Rgb(200, 150, 180),
                ],
                labels: Color::Rgb(255, 180, 80),
                labels_back: Color::Rgb(110, 75, 35),
                particles: Color::Rgb(255, 140, 200),
                box_mesh: Color::Rgb(255, 120, 90),
                torus_mesh: Color::Rgb(210, 120, 255),
                sphere_mesh: Color::Rgb(255, 90, 140),
                accent: Color::Rgb(255, 140, 200),
                text: Color::Rgb(235, 222, 215),
                text_dim: Color::Rgb(140, 115, 125),
            },
        }
    }
}

/// Concrete colors assigned to every rendered element.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Canvas clear color.
    pub background: Color,
    /// Star brightness tiers, dimmest first.
    pub stars: [Color; 3],
    /// Orbiting code labels facing the camera.
    pub labels: Color,
    /// Orbiting code labels facing away from the camera.
    pub labels_back: Color,
    /// Particle field points.
    pub particles: Color,
    /// The rotating box mesh.
    pub box_mesh: Color,
    /// The rotating torus mesh.
    pub torus_mesh: Color,
    /// The rotating sphere mesh.
    pub sphere_mesh: Color,
    /// UI accent (brand, active navigation entry).
    pub accent: Color,
    /// Primary overlay text.
    pub text: Color,
    /// Secondary overlay text and help line.
    pub text_dim: Color,
}
