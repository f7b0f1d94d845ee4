use glam::Mat4;
use serde::{Deserialize, Serialize};

use super::JointName;
use super::tree::JointTransforms;

/// Rigid visual segments of the gait model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum BodyName {
    Pelvis = 0,
    FemurR,
    FemurL,
    TibiaR,
    TibiaL,
    TalusR,
    TalusL,
    CalcnR,
    CalcnL,
    ToesR,
    ToesL,
    Torso,
}

impl BodyName {
    pub const COUNT: usize = 12;

    pub const ALL: [BodyName; Self::COUNT] = [
        BodyName::Pelvis,
        BodyName::FemurR,
        BodyName::FemurL,
        BodyName::TibiaR,
        BodyName::TibiaL,
        BodyName::TalusR,
        BodyName::TalusL,
        BodyName::CalcnR,
        BodyName::CalcnL,
        BodyName::ToesR,
        BodyName::ToesL,
        BodyName::Torso,
    ];

    #[inline]
    #[must_use]
    pub fn body(self) -> &'static Body {
        &BODIES[self as usize]
    }
}

/// A segment attached to one joint, drawn with that joint's world transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Body {
    pub name: BodyName,
    pub joint: JointName,
    /// Mesh assets, relative to the demo's working directory.
    pub drawables: &'static [&'static str],
}

impl Body {
    /// Model matrix of this body, or `None` if its joint has no world transform.
    #[must_use]
    pub fn model_matrix(&self, world: &JointTransforms) -> Option<Mat4> {
        world.get(&self.joint).copied()
    }
}

pub static BODIES: [Body; BodyName::COUNT] = [
    Body {
        name: BodyName::Pelvis,
        joint: JointName::Base,
        drawables: &["models/sacrum.vtp", "models/pelvis.vtp", "models/l_pelvis.vtp"],
    },
    Body {
        name: BodyName::FemurR,
        joint: JointName::HipR,
        drawables: &["models/femur.vtp"],
    },
    Body {
        name: BodyName::FemurL,
        joint: JointName::HipL,
        drawables: &["models/l_femur.vtp"],
    },
    Body {
        name: BodyName::TibiaR,
        joint: JointName::KneeR,
        drawables: &["models/tibia.vtp", "models/fibula.vtp"],
    },
    Body {
        name: BodyName::TibiaL,
        joint: JointName::KneeL,
        drawables: &["models/l_tibia.vtp", "models/l_fibula.vtp"],
    },
    Body {
        name: BodyName::TalusR,
        joint: JointName::AnkleR,
        drawables: &["models/talus.vtp"],
    },
    Body {
        name: BodyName::TalusL,
        joint: JointName::AnkleL,
        drawables: &["models/l_talus.vtp"],
    },
    Body {
        name: BodyName::CalcnR,
        joint: JointName::SubtalarR,
        drawables: &["models/foot.vtp"],
    },
    Body {
        name: BodyName::CalcnL,
        joint: JointName::SubtalarL,
        drawables: &["models/l_foot.vtp"],
    },
    Body {
        name: BodyName::ToesR,
        joint: JointName::MtpR,
        drawables: &["models/bofoot.vtp"],
    },
    Body {
        name: BodyName::ToesL,
        joint: JointName::MtpL,
        drawables: &["models/l_bofoot.vtp"],
    },
    Body {
        name: BodyName::Torso,
        joint: JointName::Back,
        drawables: &[
            "models/hat_spine.vtp",
            "models/hat_jaw.vtp",
            "models/hat_skull.vtp",
            "models/hat_ribs.vtp",
        ],
    },
];

/// Skin mesh bound to the whole skeleton.
pub const SKIN_MESH: &str = "models/male.obj";
