//! The three rotating showcase meshes.
//!
//! Each instance derives its rotation and translation offset directly from
//! elapsed time with its own fixed formula. The instances share no state,
//! so they can be updated in any order.

use std::f32::consts::TAU;

use vitrine_core::{Rotation, Vec3};

/// A sampled surface point with an outward normal for shading.
#[derive(Debug, Copy, Clone)]
pub struct SurfacePoint {
    /// Position in mesh-local space.
    pub local: Vec3,
    /// Outward unit normal in mesh-local space.
    pub normal: Vec3,
}

/// Which of the three showcase shapes an instance is.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MeshKind {
    /// Cube with edge length 2, anchored at (-8, 3, -5).
    Box,
    /// Torus with ring radius 1.5 and tube radius 0.5, anchored at (8, -2, -3).
    Torus,
    /// Sphere with radius 1.2, anchored at (5, 4, 2).
    Sphere,
}

impl MeshKind {
    /// Anchor position of this shape in world space.
    pub fn base_position(self) -> Vec3 {
        match self {
            Self::Box => Vec3::new(-8.0, 3.0, -5.0),
            Self::Torus => Vec3::new(8.0, -2.0, -3.0),
            Self::Sphere => Vec3::new(5.0, 4.0, 2.0),
        }
    }

    fn sample_points(self) -> Vec<SurfacePoint> {
        match self {
            Self::Box => sample_box(1.0, 6),
            Self::Torus => sample_torus(1.5, 0.5, 28, 10),
            Self::Sphere => sample_sphere(1.2, 9, 18),
        }
    }
}

/// One animated mesh: fixed geometry plus a transform recomputed each frame.
#[derive(Debug, Clone)]
pub struct MeshInstance {
    kind: MeshKind,
    points: Vec<SurfacePoint>,
    rotation: Rotation,
    offset: Vec3,
}

impl MeshInstance {
    /// Create an instance of `kind` at its anchor with identity transform.
    pub fn new(kind: MeshKind) -> Self {
        Self {
            kind,
            points: kind.sample_points(),
            rotation: Rotation::IDENTITY,
            offset: Vec3::ZERO,
        }
    }

    /// Which shape this instance is.
    pub fn kind(&self) -> MeshKind {
        self.kind
    }

    /// Current Euler rotation.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Current animated translation offset from the anchor.
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Recompute the transform for elapsed time `t`.
    ///
    /// Values are assigned, not accumulated, so repeated updates with the
    /// same time yield the same transform.
    pub fn update(&mut self, t: f32) {
        match self.kind {
            MeshKind::Box => {
                self.rotation = Rotation::new(t * 0.5, t * 0.3, 0.0);
                self.offset = Vec3::new(0.0, t.sin() * 2.0, 0.0);
            }
            MeshKind::Torus => {
                self.rotation = Rotation::new(t * 0.2, 0.0, t * 0.4);
                self.offset = Vec3::ZERO;
            }
            MeshKind::Sphere => {
                self.rotation = Rotation::new(0.0, t * 0.6, 0.0);
                self.offset = Vec3::new(t.cos() * 3.0, 0.0, 0.0);
            }
        }
    }

    /// Iterate surface points transformed into world space, with normals.
    pub fn world_points(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        let origin = self.kind.base_position() + self.offset;
        self.points.iter().map(move |sp| {
            (
                origin + self.rotation.apply(sp.local),
                self.rotation.apply(sp.normal),
            )
        })
    }
}

/// Sample the twelve edges of a cube with half-extent `h`.
fn sample_box(h: f32, per_edge: usize) -> Vec<SurfacePoint> {
    let corners = [
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(-h, h, -h),
        Vec3::new(-h, -h, h),
        Vec3::new(h, -h, h),
        Vec3::new(h, h, h),
        Vec3::new(-h, h, h),
    ];
    const EDGES: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];
    let mut points = Vec::with_capacity(EDGES.len() * per_edge);
    for (a, b) in EDGES {
        for i in 0..per_edge {
            let s = i as f32 / (per_edge - 1) as f32;
            let local = corners[a] + (corners[b] - corners[a]) * s;
            points.push(SurfacePoint {
                local,
                normal: local.normalized(),
            });
        }
    }
    points
}

/// Sample a torus surface on a `major x minor` grid.
fn sample_torus(ring: f32, tube: f32, major: usize, minor: usize) -> Vec<SurfacePoint> {
    let mut points = Vec::with_capacity(major * minor);
    for i in 0..major {
        let u = i as f32 / major as f32 * TAU;
        for j in 0..minor {
            let v = j as f32 / minor as f32 * TAU;
            let (su, cu) = u.sin_cos();
            let (sv, cv) = v.sin_cos();
            points.push(SurfacePoint {
                local: Vec3::new((ring + tube * cv) * cu, tube * sv, (ring + tube * cv) * su),
                normal: Vec3::new(cv * cu, sv, cv * su),
            });
        }
    }
    points
}

/// Sample a sphere surface on a latitude/longitude grid, poles excluded.
fn sample_sphere(radius: f32, rings: usize, segments: usize) -> Vec<SurfacePoint> {
    let mut points = Vec::with_capacity(rings * segments);
    for i in 1..=rings {
        let phi = i as f32 / (rings + 1) as f32 * std::f32::consts::PI;
        let (sp, cp) = phi.sin_cos();
        for j in 0..segments {
            let theta = j as f32 / segments as f32 * TAU;
            let (st, ct) = theta.sin_cos();
            let normal = Vec3::new(sp * ct, cp, sp * st);
            points.push(SurfacePoint {
                local: normal * radius,
                normal,
            });
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    #[test]
    fn box_transform_is_closed_form() {
        let mut mesh = MeshInstance::new(MeshKind::Box);
        for t in [0.0_f32, 1.0, 7.3] {
            mesh.update(t);
            assert_relative_eq!(mesh.rotation().x, t * 0.5);
            assert_relative_eq!(mesh.rotation().y, t * 0.3);
            assert_relative_eq!(mesh.rotation().z, 0.0);
            assert_relative_eq!(mesh.offset().y, t.sin() * 2.0);
        }
    }

    #[test]
    fn torus_rotates_without_translating() {
        let mut mesh = MeshInstance::new(MeshKind::Torus);
        mesh.update(5.0);
        assert_relative_eq!(mesh.rotation().x, 1.0);
        assert_relative_eq!(mesh.rotation().z, 2.0);
        assert_eq!(mesh.offset(), Vec3::ZERO);
    }

    #[test]
    fn sphere_swings_along_x() {
        let mut mesh = MeshInstance::new(MeshKind::Sphere);
        mesh.update(0.0);
        assert_relative_eq!(mesh.offset().x, 3.0);
        mesh.update(PI);
        assert_relative_eq!(mesh.offset().x, -3.0, epsilon = 1e-5);
        assert_relative_eq!(mesh.rotation().y, PI * 0.6, epsilon = 1e-5);
    }

    #[test]
    fn update_recomputes_instead_of_accumulating() {
        let mut mesh = MeshInstance::new(MeshKind::Box);
        mesh.update(2.0);
        let (rot, off) = (mesh.rotation(), mesh.offset());
        mesh.update(2.0);
        assert_eq!(mesh.rotation(), rot);
        assert_eq!(mesh.offset(), off);
    }

    #[test]
    fn mount_state_is_untransformed() {
        let mut mesh = MeshInstance::new(MeshKind::Box);
        mesh.update(0.0);
        assert_eq!(mesh.rotation(), Rotation::IDENTITY);
        assert_eq!(mesh.offset(), Vec3::ZERO);
    }

    #[test]
    fn sphere_points_sit_on_the_surface() {
        let mesh = MeshInstance::new(MeshKind::Sphere);
        let origin = MeshKind::Sphere.base_position();
        for (p, n) in mesh.world_points() {
            assert_relative_eq!((p - origin).length(), 1.2, epsilon = 1e-4);
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-4);
        }
    }
}
