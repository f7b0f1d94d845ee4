//! Pose Evaluator
//!
//! Turns a [`Pose`] into one local transform per joint using the static
//! [`JOINT_DEFINITIONS`] table. Pure and infallible.

use super::coordinate::Pose;
use super::joint::JOINT_DEFINITIONS;
use super::tree::JointTransforms;

/// Local transform of every joint for `pose`.
#[must_use]
pub fn evaluate_local_transforms(pose: &Pose) -> JointTransforms {
    JOINT_DEFINITIONS
        .iter()
        .map(|definition| (definition.joint, definition.local_transform(pose)))
        .collect()
}
