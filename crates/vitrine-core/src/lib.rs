//! Core types for the vitrine showcase.
//!
//! This crate holds the small leaf types every other crate builds on: the
//! 3D vector and Euler rotation math used by the animated scene, the color
//! palettes tied to an environment preset, and the identifiers for the
//! marketing overlay sections.

mod math;
mod palette;
mod section;

pub use math::{Rotation, Vec3};
pub use palette::{EnvironmentPreset, Palette};
pub use section::SectionId;
