//! The orbiting ring of code-snippet labels.
//!
//! Label `i` of `K` sits at angle `(i / K) * 2π` on a circle of radius 8,
//! with a fixed per-label vertical offset, facing outward at its own
//! angle. Placement is a pure function of the index; only the rigid ring
//! rotation depends on time.

use std::f32::consts::TAU;

use vitrine_core::Vec3;

/// Radius of the circle the labels orbit on.
pub const LABEL_RING_RADIUS: f32 = 8.0;

/// A label with its world-space placement for the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    /// The label text. Never mutated by the ring.
    pub text: String,
    /// World-space anchor of the label center.
    pub position: Vec3,
    /// Yaw the label faces, pointing outward from the ring center.
    pub facing: f32,
}

/// A fixed, ordered set of labels rotating rigidly around the y-axis.
#[derive(Debug, Clone)]
pub struct LabelRing {
    labels: Vec<String>,
    rotation_y: f32,
}

impl LabelRing {
    /// Create a ring from an ordered list of labels.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            rotation_y: 0.0,
        }
    }

    /// Number of labels on the ring.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the ring has no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Rigid rotation of the ring for the current frame.
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Recompute the ring rotation for elapsed time `t`.
    pub fn update(&mut self, t: f32) {
        self.rotation_y = t * 0.1;
    }

    /// Base angle of label `i`, before the ring rotation is applied.
    pub fn base_angle(&self, i: usize) -> f32 {
        i as f32 / self.labels.len() as f32 * TAU
    }

    /// Ring-local placement of label `i`: position and outward yaw.
    pub fn local_placement(&self, i: usize) -> (Vec3, f32) {
        let angle = self.base_angle(i);
        let position = Vec3::new(
            angle.cos() * LABEL_RING_RADIUS,
            (i as f32 * 2.0).sin() * 3.0,
            angle.sin() * LABEL_RING_RADIUS,
        );
        (position, angle)
    }

    /// All labels placed in world space with the ring rotation applied.
    pub fn placed(&self) -> Vec<PlacedLabel> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let (local, facing) = self.local_placement(i);
                PlacedLabel {
                    text: text.clone(),
                    position: local.rotate_y(self.rotation_y),
                    // rotate_y turns a planar angle a into a - theta
                    facing: facing - self.rotation_y,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ring_of(n: usize) -> LabelRing {
        LabelRing::new((0..n).map(|i| format!("label {i}")))
    }

    #[test]
    fn six_labels_partition_the_circle_evenly() {
        let ring = ring_of(6);
        let mut prev = -1.0_f32;
        for i in 0..6 {
            let angle = ring.base_angle(i);
            assert_relative_eq!(angle, i as f32 / 6.0 * TAU);
            assert!(angle > prev, "angles must strictly increase");
            prev = angle;
        }
        assert!(prev < TAU);
    }

    #[test]
    fn placement_sits_on_the_ring_radius() {
        let ring = ring_of(6);
        for i in 0..6 {
            let (pos, facing) = ring.local_placement(i);
            let planar = (pos.x * pos.x + pos.z * pos.z).sqrt();
            assert_relative_eq!(planar, LABEL_RING_RADIUS, epsilon = 1e-4);
            assert_relative_eq!(pos.y, (i as f32 * 2.0).sin() * 3.0);
            assert_relative_eq!(facing, ring.base_angle(i));
        }
    }

    #[test]
    fn ring_rotation_tracks_time() {
        let mut ring = ring_of(6);
        ring.update(3.0);
        assert_relative_eq!(ring.rotation_y(), 0.3);
        ring.update(3.0);
        assert_relative_eq!(ring.rotation_y(), 0.3);
    }

    #[test]
    fn placed_labels_keep_their_text() {
        let mut ring = LabelRing::new(["alpha", "beta"]);
        ring.update(12.0);
        let placed = ring.placed();
        assert_eq!(placed[0].text, "alpha");
        assert_eq!(placed[1].text, "beta");
        assert_relative_eq!(placed[0].facing, -1.2, epsilon = 1e-5);
    }
}
