use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use super::coordinate::{Coordinate, Pose};

/// Joints of the gait model.
///
/// The discriminant is the joint index used by the skinning palette and the
/// per-vertex joint attribute. Variants are ordered parent-before-child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum JointName {
    Base = 0,
    HipR,
    HipL,
    KneeR,
    KneeL,
    AnkleR,
    AnkleL,
    SubtalarR,
    SubtalarL,
    MtpR,
    MtpL,
    Back,
}

impl JointName {
    pub const COUNT: usize = 12;

    pub const ALL: [JointName; Self::COUNT] = [
        JointName::Base,
        JointName::HipR,
        JointName::HipL,
        JointName::KneeR,
        JointName::KneeL,
        JointName::AnkleR,
        JointName::AnkleL,
        JointName::SubtalarR,
        JointName::SubtalarL,
        JointName::MtpR,
        JointName::MtpL,
        JointName::Back,
    ];

    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parent in the fixed human hierarchy, `None` for the root.
    #[must_use]
    pub fn parent(self) -> Option<JointName> {
        match self {
            JointName::Base => None,
            JointName::HipR | JointName::HipL | JointName::Back => Some(JointName::Base),
            JointName::KneeR => Some(JointName::HipR),
            JointName::KneeL => Some(JointName::HipL),
            JointName::AnkleR => Some(JointName::KneeR),
            JointName::AnkleL => Some(JointName::KneeL),
            JointName::SubtalarR => Some(JointName::AnkleR),
            JointName::SubtalarL => Some(JointName::AnkleL),
            JointName::MtpR => Some(JointName::SubtalarR),
            JointName::MtpL => Some(JointName::SubtalarL),
        }
    }

    /// Static description of this joint's local transform.
    #[inline]
    #[must_use]
    pub fn definition(self) -> &'static JointDefinition {
        &JOINT_DEFINITIONS[self.index()]
    }
}

/// `(joint, parent)` pairs of the gait model in traversal order.
#[must_use]
pub fn human_hierarchy() -> [(JointName, Option<JointName>); JointName::COUNT] {
    JointName::ALL.map(|joint| (joint, joint.parent()))
}

/// Principal rotation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Rotation about this axis, angle in degrees.
    #[must_use]
    pub fn rotation(self, degrees: f32) -> Mat4 {
        let radians = degrees.to_radians();
        match self {
            Axis::X => Mat4::from_rotation_x(radians),
            Axis::Y => Mat4::from_rotation_y(radians),
            Axis::Z => Mat4::from_rotation_z(radians),
        }
    }
}

/// Where a joint's translation comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JointOffset {
    /// Anatomical segment offset, constant for all poses.
    Fixed(Vec3),
    /// Free translation read from three pose coordinates (the floating base).
    Coordinates([Coordinate; 3]),
}

impl JointOffset {
    #[must_use]
    pub fn resolve(&self, pose: &Pose) -> Vec3 {
        match self {
            JointOffset::Fixed(offset) => *offset,
            JointOffset::Coordinates([x, y, z]) => Vec3::new(pose.get(*x), pose.get(*y), pose.get(*z)),
        }
    }
}

/// Local transform recipe: translate by `offset`, then rotate about each
/// `(coordinate, axis)` in order, composing by right-multiplication.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointDefinition {
    pub joint: JointName,
    pub offset: JointOffset,
    pub rotations: &'static [(Coordinate, Axis)],
}

impl JointDefinition {
    #[must_use]
    pub fn local_transform(&self, pose: &Pose) -> Mat4 {
        self.rotations.iter().fold(
            Mat4::from_translation(self.offset.resolve(pose)),
            |acc, &(coordinate, axis)| acc * axis.rotation(pose.get(coordinate)),
        )
    }

    /// Degrees of freedom driven by pose coordinates.
    #[must_use]
    pub fn dof(&self) -> usize {
        let translational = match self.offset {
            JointOffset::Fixed(_) => 0,
            JointOffset::Coordinates(_) => 3,
        };
        translational + self.rotations.len()
    }
}

const PELVIS_ROTATIONS: &[(Coordinate, Axis)] = &[
    (Coordinate::PelvisRotX, Axis::X),
    (Coordinate::PelvisRotY, Axis::Y),
    (Coordinate::PelvisRotZ, Axis::Z),
];
const HIP_R_ROTATIONS: &[(Coordinate, Axis)] = &[
    (Coordinate::HipRAdd, Axis::X),
    (Coordinate::HipRRot, Axis::Y),
    (Coordinate::HipRFlex, Axis::Z),
];
const HIP_L_ROTATIONS: &[(Coordinate, Axis)] = &[
    (Coordinate::HipLAdd, Axis::X),
    (Coordinate::HipLRot, Axis::Y),
    (Coordinate::HipLFlex, Axis::Z),
];
const LUMBAR_ROTATIONS: &[(Coordinate, Axis)] = &[
    (Coordinate::LumbarBend, Axis::X),
    (Coordinate::LumbarRot, Axis::Y),
    (Coordinate::LumbarFlex, Axis::Z),
];

/// Per-joint constants, indexed by [`JointName::index`].
pub static JOINT_DEFINITIONS: [JointDefinition; JointName::COUNT] = [
    JointDefinition {
        joint: JointName::Base,
        offset: JointOffset::Coordinates([
            Coordinate::PelvisTraX,
            Coordinate::PelvisTraY,
            Coordinate::PelvisTraZ,
        ]),
        rotations: PELVIS_ROTATIONS,
    },
    JointDefinition {
        joint: JointName::HipR,
        offset: JointOffset::Fixed(Vec3::new(-0.072, -0.068, 0.086)),
        rotations: HIP_R_ROTATIONS,
    },
    JointDefinition {
        joint: JointName::HipL,
        offset: JointOffset::Fixed(Vec3::new(-0.072, -0.068, -0.086)),
        rotations: HIP_L_ROTATIONS,
    },
    JointDefinition {
        joint: JointName::KneeR,
        offset: JointOffset::Fixed(Vec3::new(0.0, -0.40, 0.0)),
        rotations: &[(Coordinate::KneeRFlex, Axis::Z)],
    },
    JointDefinition {
        joint: JointName::KneeL,
        offset: JointOffset::Fixed(Vec3::new(0.0, -0.40, 0.0)),
        rotations: &[(Coordinate::KneeLFlex, Axis::Z)],
    },
    JointDefinition {
        joint: JointName::AnkleR,
        offset: JointOffset::Fixed(Vec3::new(0.0, -0.430, 0.0)),
        rotations: &[(Coordinate::AnkleRFlex, Axis::Z)],
    },
    JointDefinition {
        joint: JointName::AnkleL,
        offset: JointOffset::Fixed(Vec3::new(0.0, -0.430, 0.0)),
        rotations: &[(Coordinate::AnkleLFlex, Axis::Z)],
    },
    JointDefinition {
        joint: JointName::SubtalarR,
        offset: JointOffset::Fixed(Vec3::new(-0.062, -0.053, 0.010)),
        rotations: &[],
    },
    JointDefinition {
        joint: JointName::SubtalarL,
        offset: JointOffset::Fixed(Vec3::new(-0.062, -0.053, -0.010)),
        rotations: &[],
    },
    JointDefinition {
        joint: JointName::MtpR,
        offset: JointOffset::Fixed(Vec3::new(0.184, -0.002, 0.001)),
        rotations: &[],
    },
    JointDefinition {
        joint: JointName::MtpL,
        offset: JointOffset::Fixed(Vec3::new(0.184, -0.002, -0.001)),
        rotations: &[],
    },
    JointDefinition {
        joint: JointName::Back,
        offset: JointOffset::Fixed(Vec3::new(-0.103, 0.09, 0.0)),
        rotations: LUMBAR_ROTATIONS,
    },
];
