//! Skeleton Tree
//!
//! An immutable arena of joints. Each joint stores the arena index of its
//! parent; the arena itself is laid out parent-before-child, so a single
//! forward pass over it is a valid top-down traversal.
//!
//! Local transforms are replaced wholesale by [`Skeleton::set_pose`]; world
//! transforms are derived lazily and cached until the next pose.

use glam::Mat4;
use rustc_hash::FxHashMap;

use super::joint::{JointName, human_hierarchy};
use crate::errors::{Result, RigError};

/// Per-joint 4×4 transforms.
pub type JointTransforms = FxHashMap<JointName, Mat4>;

#[derive(Debug, Clone)]
struct JointNode {
    name: JointName,
    parent: Option<usize>,
    local: Mat4,
}

#[derive(Debug, Clone)]
pub struct Skeleton {
    nodes: Vec<JointNode>,
    lookup: FxHashMap<JointName, usize>,

    // Runtime cache, rebuilt after every `set_pose`.
    world: JointTransforms,
    dirty: bool,
}

impl Skeleton {
    /// Builds the arena from `(joint, parent)` pairs.
    ///
    /// Parents must be declared before their children; the declaration order
    /// becomes the traversal order.
    pub fn new(hierarchy: &[(JointName, Option<JointName>)]) -> Result<Self> {
        let mut nodes = Vec::with_capacity(hierarchy.len());
        let mut lookup = FxHashMap::default();

        for (position, &(joint, parent)) in hierarchy.iter().enumerate() {
            if lookup.contains_key(&joint) {
                return Err(RigError::DuplicateJoint(joint));
            }

            let parent_index = match parent {
                None => None,
                Some(parent) => match lookup.get(&parent) {
                    Some(&index) => Some(index),
                    None if hierarchy[position + 1..].iter().any(|(j, _)| *j == parent) => {
                        return Err(RigError::ParentAfterChild { joint, parent });
                    }
                    None => return Err(RigError::UnknownParent { joint, parent }),
                },
            };

            lookup.insert(joint, nodes.len());
            nodes.push(JointNode {
                name: joint,
                parent: parent_index,
                local: Mat4::IDENTITY,
            });
        }

        log::debug!("Skeleton built with {} joints", nodes.len());

        Ok(Self {
            nodes,
            lookup,
            world: JointTransforms::default(),
            dirty: true,
        })
    }

    /// The fixed lower-body hierarchy rooted at [`JointName::Base`].
    pub fn human() -> Result<Self> {
        Self::new(&human_hierarchy())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, joint: JointName) -> bool {
        self.lookup.contains_key(&joint)
    }

    /// Joints in traversal order (parents first).
    pub fn joints(&self) -> impl Iterator<Item = JointName> + '_ {
        self.nodes.iter().map(|node| node.name)
    }

    /// Parent of `joint`, `None` for roots and unknown joints.
    #[must_use]
    pub fn parent(&self, joint: JointName) -> Option<JointName> {
        let node = &self.nodes[*self.lookup.get(&joint)?];
        node.parent.map(|index| self.nodes[index].name)
    }

    /// Whether `ancestor` lies strictly above `joint` on its parent chain.
    #[must_use]
    pub fn is_ancestor(&self, ancestor: JointName, joint: JointName) -> bool {
        let mut current = self.parent(joint);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.parent(parent);
        }
        false
    }

    /// Current local transform of `joint`.
    #[must_use]
    pub fn local_transform(&self, joint: JointName) -> Option<Mat4> {
        self.lookup.get(&joint).map(|&index| self.nodes[index].local)
    }

    /// Replaces every local transform. Joints absent from `locals` fall back to
    /// identity; entries for joints outside the tree are ignored.
    pub fn set_pose(&mut self, locals: &JointTransforms) {
        for node in &mut self.nodes {
            node.local = locals.get(&node.name).copied().unwrap_or(Mat4::IDENTITY);
        }

        if locals.len() > self.nodes.len() {
            log::warn!(
                "Pose carries {} transforms for a skeleton of {} joints",
                locals.len(),
                self.nodes.len()
            );
        }

        self.dirty = true;
    }

    /// World transform of every joint for the current pose.
    pub fn world_transforms(&mut self) -> &JointTransforms {
        if self.dirty {
            self.update_world_transforms();
        }
        &self.world
    }

    /// World transform of a single joint for the current pose.
    pub fn world_transform(&mut self, joint: JointName) -> Option<Mat4> {
        self.world_transforms().get(&joint).copied()
    }

    fn update_world_transforms(&mut self) {
        let mut world: Vec<Mat4> = Vec::with_capacity(self.nodes.len());

        for node in &self.nodes {
            let matrix = match node.parent {
                Some(parent) => world[parent] * node.local,
                None => node.local,
            };
            world.push(matrix);
        }

        self.world.clear();
        self.world
            .extend(self.nodes.iter().zip(world).map(|(node, matrix)| (node.name, matrix)));
        self.dirty = false;
    }
}
