//! Stateless starfield backdrop, computed from cell position and time.

use ratatui::style::Color;
use vitrine_core::Palette;

/// Characters used for starfield twinkle.
const STAR_CHARS: &[char] = &['.', '*', '+', '·', '✦', '✧'];

/// Seconds between twinkle re-rolls.
const TWINKLE_PERIOD: f32 = 0.8;

/// Star for the cell at `(x, y)`, if one twinkles there this frame.
///
/// Deterministic in `(x, y, t)`: roughly 3% of cells carry a star, chosen
/// by a positional hash that re-rolls every twinkle period.
pub fn star_cell(x: u16, y: u16, t: f32, palette: &Palette) -> Option<(char, Color)> {
    let frame_num = (t / TWINKLE_PERIOD) as usize;
    let seed = (x as usize)
        .wrapping_mul(31)
        .wrapping_add((y as usize).wrapping_mul(17))
        .wrapping_add(frame_num);

    if seed % 100 < 3 {
        let ch = STAR_CHARS[seed % STAR_CHARS.len()];
        let color = palette.stars[seed % 3];
        Some((ch, color))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::EnvironmentPreset;

    #[test]
    fn deterministic_for_fixed_inputs() {
        let palette = EnvironmentPreset::Night.palette();
        for (x, y) in [(0, 0), (13, 7), (200, 59)] {
            assert_eq!(star_cell(x, y, 1.0, &palette), star_cell(x, y, 1.0, &palette));
        }
    }

    #[test]
    fn density_is_sparse() {
        let palette = EnvironmentPreset::Night.palette();
        let mut stars = 0usize;
        let total = 200 * 60;
        for x in 0..200u16 {
            for y in 0..60u16 {
                if star_cell(x, y, 0.0, &palette).is_some() {
                    stars += 1;
                }
            }
        }
        let density = stars as f32 / total as f32;
        assert!(density > 0.005 && density < 0.08, "density {density}");
    }
}
