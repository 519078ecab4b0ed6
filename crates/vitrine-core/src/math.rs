//! Minimal 3D vector and rotation math for the animated scene.

use std::ops::{Add, Mul, Neg, Sub};

/// A 3-dimensional vector with `f32` components.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vec3 {
    /// The x component of the vector.
    pub x: f32,
    /// The y component of the vector.
    pub y: f32,
    /// The z component of the vector.
    pub z: f32,
}

impl Vec3 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new `Vec3` with the specified components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Calculates the length (magnitude) of the vector.
    #[inline]
    pub fn length(&self) -> f32 {
        self.dot(*self).sqrt()
    }

    /// Returns a normalized version of the vector with a length of 1.
    /// A near-zero vector normalizes to `Vec3::ZERO`.
    #[inline]
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len > 1e-6 { *self * (1.0 / len) } else { Self::ZERO }
    }

    /// Rotates the vector around the x-axis by `angle` radians.
    #[inline]
    pub fn rotate_x(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x,
            y: self.y * cos - self.z * sin,
            z: self.y * sin + self.z * cos,
        }
    }

    /// Rotates the vector around the y-axis by `angle` radians.
    #[inline]
    pub fn rotate_y(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos + self.z * sin,
            y: self.y,
            z: -self.x * sin + self.z * cos,
        }
    }

    /// Rotates the vector around the z-axis by `angle` radians.
    #[inline]
    pub fn rotate_z(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
            z: self.z,
        }
    }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

/// Euler rotation angles in radians, applied in x, y, z order.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rotation {
    /// Rotation around the x-axis.
    pub x: f32,
    /// Rotation around the y-axis.
    pub y: f32,
    /// Rotation around the z-axis.
    pub z: f32,
}

impl Rotation {
    /// A rotation with all angles set to `0.0`.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new `Rotation` from three axis angles.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Applies the rotation to a vector, axis by axis in x, y, z order.
    #[inline]
    pub fn apply(&self, v: Vec3) -> Vec3 {
        v.rotate_x(self.x).rotate_y(self.y).rotate_z(self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn dot_and_length() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert_relative_eq!(v.length(), 5.0);
        assert_relative_eq!(v.dot(Vec3::new(1.0, 1.0, 1.0)), 7.0);
    }

    #[test]
    fn normalized_unit_length() {
        let v = Vec3::new(2.0, -3.0, 6.0).normalized();
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-5);
        assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    }

    #[test]
    fn rotate_y_quarter_turn() {
        let v = Vec3::new(1.0, 0.0, 0.0).rotate_y(FRAC_PI_2);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn rotate_x_quarter_turn() {
        let v = Vec3::new(0.0, 1.0, 0.0).rotate_x(FRAC_PI_2);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn identity_rotation_is_noop() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Rotation::IDENTITY.apply(v), v);
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let r = Rotation::new(0.3, 1.2, -0.7);
        assert_relative_eq!(r.apply(v).length(), v.length(), epsilon = 1e-5);
    }
}
