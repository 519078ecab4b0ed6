//! Scene-graph assembly.
//!
//! The composed scene is an explicit tree of typed nodes built once at
//! mount, rather than implicit parent-child context. `Scene::update`
//! walks the tree and hands the elapsed time to every animated node;
//! the nodes own disjoint state, so traversal order carries no meaning.

use vitrine_core::EnvironmentPreset;

use crate::labels::LabelRing;
use crate::lighting::LightRig;
use crate::meshes::{MeshInstance, MeshKind};
use crate::particles::ParticleField;

/// A node in the composed scene tree.
#[derive(Debug, Clone)]
pub enum SceneNode {
    /// A grouping node with child nodes.
    Group(Vec<SceneNode>),
    /// The drifting particle field.
    Particles(ParticleField),
    /// One animated mesh instance.
    Mesh(MeshInstance),
    /// The orbiting label ring.
    Labels(LabelRing),
}

impl SceneNode {
    fn update(&mut self, t: f32) {
        match self {
            Self::Group(children) => {
                for child in children {
                    child.update(t);
                }
            }
            Self::Particles(field) => field.update(t),
            Self::Mesh(mesh) => mesh.update(t),
            Self::Labels(ring) => ring.update(t),
        }
    }
}

/// The composed frame graph: lights, environment and the animated tree.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Root of the animated node tree.
    pub root: SceneNode,
    /// The fixed light rig.
    pub lights: LightRig,
    /// Environment preset selecting the palette and starfield tint.
    pub preset: EnvironmentPreset,
}

impl Scene {
    /// Recompute every animated node for elapsed time `t`.
    pub fn update(&mut self, t: f32) {
        self.root.update(t);
    }

    /// Visit every node in the tree, depth first.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a SceneNode)) {
        fn walk<'a>(node: &'a SceneNode, f: &mut impl FnMut(&'a SceneNode)) {
            f(node);
            if let SceneNode::Group(children) = node {
                for child in children {
                    walk(child, f);
                }
            }
        }
        walk(&self.root, f);
    }
}

/// Builder assembling the showcase scene.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    nodes: Vec<SceneNode>,
    lights: Option<LightRig>,
    preset: EnvironmentPreset,
}

impl SceneBuilder {
    /// Start an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default light rig.
    pub fn lights(mut self, rig: LightRig) -> Self {
        self.lights = Some(rig);
        self
    }

    /// Select the environment preset.
    pub fn preset(mut self, preset: EnvironmentPreset) -> Self {
        self.preset = preset;
        self
    }

    /// Add a particle field seeded from `seed`.
    pub fn particles(mut self, seed: u64) -> Self {
        self.nodes.push(SceneNode::Particles(ParticleField::new(seed)));
        self
    }

    /// Add the three rotating showcase meshes as one group.
    pub fn showcase_meshes(mut self) -> Self {
        self.nodes.push(SceneNode::Group(vec![
            SceneNode::Mesh(MeshInstance::new(MeshKind::Box)),
            SceneNode::Mesh(MeshInstance::new(MeshKind::Torus)),
            SceneNode::Mesh(MeshInstance::new(MeshKind::Sphere)),
        ]));
        self
    }

    /// Add an orbiting label ring from an ordered list of labels.
    pub fn label_ring<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes.push(SceneNode::Labels(LabelRing::new(labels)));
        self
    }

    /// Finish composition.
    pub fn build(self) -> Scene {
        Scene {
            root: SceneNode::Group(self.nodes),
            lights: self.lights.unwrap_or_default(),
            preset: self.preset,
        }
    }
}
