//! The drifting particle field.
//!
//! Positions are seeded once into a bounded cube. Every frame only the y
//! coordinate is recomputed, as `sin(t + x) * 2` from the particle's own
//! fixed x, never from the previous y. That keeps the motion a stateless
//! function of time: no integration, no drift, and re-running an update
//! with the same time is a no-op.

use rand::{Rng, SeedableRng, rngs::StdRng};
use vitrine_core::Vec3;

/// Number of particles in the field. The buffer is never resized.
pub const PARTICLE_COUNT: usize = 200;

/// Half-extent of the cube particles are seeded into.
const SPREAD: f32 = 30.0;

/// A fixed-size cloud of drifting points that rotates as a rigid body.
#[derive(Debug, Clone)]
pub struct ParticleField {
    /// Particle positions. Only the y component changes after init.
    positions: Vec<Vec3>,
    /// Rigid rotation of the whole field around the y-axis.
    rotation_y: f32,
    /// Set on every update; cleared by the renderer after re-upload.
    dirty: bool,
}

impl ParticleField {
    /// Create a field of [`PARTICLE_COUNT`] particles seeded from `seed`.
    ///
    /// Each coordinate is drawn uniformly from `[-15, 15)`.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let positions = (0..PARTICLE_COUNT)
            .map(|_| {
                Vec3::new(
                    (rng.r#gen::<f32>() - 0.5) * SPREAD,
                    (rng.r#gen::<f32>() - 0.5) * SPREAD,
                    (rng.r#gen::<f32>() - 0.5) * SPREAD,
                )
            })
            .collect();
        Self {
            positions,
            rotation_y: 0.0,
            dirty: true,
        }
    }

    /// Recompute the field for elapsed time `t`.
    ///
    /// The buffer is flagged dirty unconditionally; there is no change
    /// detection to skip the re-upload.
    pub fn update(&mut self, t: f32) {
        for p in &mut self.positions {
            p.y = (t + p.x).sin() * 2.0;
        }
        self.rotation_y = t * 0.05;
        self.dirty = true;
    }

    /// The particle positions in field-local space.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Rigid-body rotation of the field around the y-axis.
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Whether the buffer needs re-upload, clearing the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Iterate over particle positions with the field rotation applied.
    pub fn world_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        let angle = self.rotation_y;
        self.positions.iter().map(move |p| p.rotate_y(angle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn seeds_inside_bounded_cube() {
        let field = ParticleField::new(7);
        assert_eq!(field.positions().len(), PARTICLE_COUNT);
        for p in field.positions() {
            assert!((-15.0..15.0).contains(&p.x));
            assert!((-15.0..15.0).contains(&p.y));
            assert!((-15.0..15.0).contains(&p.z));
        }
    }

    #[test]
    fn y_follows_sine_of_own_x() {
        let mut field = ParticleField::new(42);
        for t in [0.0_f32, 0.5, 2.0, 31.7] {
            field.update(t);
            for p in field.positions() {
                assert_relative_eq!(p.y, (t + p.x).sin() * 2.0);
            }
        }
    }

    #[test]
    fn only_y_mutates_across_frames() {
        let mut field = ParticleField::new(42);
        let before: Vec<_> = field.positions().iter().map(|p| (p.x, p.z)).collect();
        field.update(1.0);
        field.update(9.25);
        let after: Vec<_> = field.positions().iter().map(|p| (p.x, p.z)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn rotation_tracks_time_idempotently() {
        let mut field = ParticleField::new(1);
        field.update(4.0);
        let snapshot: Vec<_> = field.positions().to_vec();
        field.update(4.0);
        assert_relative_eq!(field.rotation_y(), 0.2);
        assert_eq!(field.positions(), snapshot.as_slice());
    }

    #[test]
    fn always_dirty_after_update() {
        let mut field = ParticleField::new(3);
        assert!(field.take_dirty());
        assert!(!field.take_dirty());
        field.update(0.0);
        assert!(field.take_dirty());
        field.update(0.0);
        assert!(field.take_dirty());
    }
}
