//! The orbiting camera.
//!
//! A continuous-input passthrough with clamping, not a state machine:
//! drag, pan and zoom deltas land directly on yaw/pitch/target/distance,
//! and auto-rotation adds to the same yaw the user drags.

use std::f32::consts::FRAC_PI_2;

use vitrine_core::Vec3;

/// Closest the camera may zoom toward the target.
pub const MIN_DISTANCE: f32 = 5.0;
/// Farthest the camera may zoom away from the target.
pub const MAX_DISTANCE: f32 = 50.0;

/// Auto-rotation rate in radians per second of elapsed time.
const AUTO_ROTATE_RATE: f32 = 0.5;

/// Pitch limit just inside the poles to keep the view basis stable.
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.05;

/// Pan sensitivity in world units per input cell, scaled by distance.
const PAN_RATE: f32 = 0.005;

/// Orbit camera with bounded zoom and continuous auto-rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Point the camera orbits and looks at.
    target: Vec3,
    /// Orbit angle around the y-axis.
    yaw: f32,
    /// Orbit elevation angle, clamped inside the poles.
    pitch: f32,
    /// Distance from the target, clamped to `[MIN_DISTANCE, MAX_DISTANCE]`.
    distance: f32,
    /// Vertical field of view in radians.
    fov_y: f32,
    /// Whether `advance` applies auto-rotation.
    auto_rotate: bool,
}

impl Default for OrbitCamera {
    /// Mount configuration: eye at (0, 0, 20), field of view 75 degrees.
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            distance: 20.0,
            fov_y: 75.0_f32.to_radians(),
            auto_rotate: true,
        }
    }
}

impl OrbitCamera {
    /// Create the camera in its mount configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current distance from the target.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Vertical field of view in radians.
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Whether auto-rotation is active.
    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    /// Enable or disable auto-rotation.
    pub fn set_auto_rotate(&mut self, on: bool) {
        self.auto_rotate = on;
    }

    /// World-space eye position.
    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vec3::new(self.distance * cp * sy, self.distance * sp, self.distance * cp * cy)
    }

    /// Apply a rotate drag. Deltas add onto the auto-rotated yaw.
    pub fn rotate(&mut self, dyaw: f32, dpitch: f32) {
        self.yaw += dyaw;
        self.pitch = (self.pitch + dpitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Apply a pan drag, moving the target in the view plane.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        let right = Vec3::new(cy, 0.0, -sy);
        let up = Vec3::new(-sp * sy, cp, -sp * cy);
        let step = self.distance * PAN_RATE;
        self.target = self.target + right * (-dx * step) + up * (dy * step);
    }

    /// Apply a zoom delta. Distance always stays within bounds.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance + delta).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Advance auto-rotation by `dt` seconds of elapsed time.
    pub fn advance(&mut self, dt: f32) {
        if self.auto_rotate {
            self.yaw += AUTO_ROTATE_RATE * dt;
        }
    }

    /// Transform a world point into view space (camera looks down -z).
    pub fn to_view(&self, world: Vec3) -> Vec3 {
        (world - self.eye()).rotate_y(-self.yaw).rotate_x(self.pitch)
    }

    /// Depth of a world point along the view axis; positive is in front.
    pub fn depth_of(&self, world: Vec3) -> f32 {
        -self.to_view(world).z
    }
}
