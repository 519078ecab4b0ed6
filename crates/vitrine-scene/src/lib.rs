//! The animated 3D backdrop behind the vitrine overlay sections.
//!
//! Everything in this crate is driven by a single elapsed-time scalar the
//! host loop passes in once per frame. The animated entities (particle
//! field, the three rotating meshes, the orbiting label ring) recompute
//! their transforms as closed-form functions of that time rather than
//! integrating velocities, so an update with the same time is idempotent
//! and there is nothing to drift. The crate also owns the orbit camera and
//! the renderer that projects the scene into terminal cells.

mod camera;
mod graph;
mod labels;
mod lighting;
mod meshes;
mod particles;
mod render;
mod starfield;

pub use camera::{MAX_DISTANCE, MIN_DISTANCE, OrbitCamera};
pub use graph::{Scene, SceneBuilder, SceneNode};
pub use labels::{LABEL_RING_RADIUS, LabelRing, PlacedLabel};
pub use lighting::LightRig;
pub use meshes::{MeshInstance, MeshKind};
pub use particles::{PARTICLE_COUNT, ParticleField};
pub use render::{project_world, render_scene};
pub use starfield::star_cell;
