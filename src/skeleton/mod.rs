//! Skeleton Module
//!
//! Forward kinematics for the lower-body gait model:
//!
//! - [`Coordinate`] / [`Pose`]: named scalar degrees of freedom
//! - [`JointName`] / [`JointDefinition`]: the joint table (offsets and rotation axes)
//! - [`evaluate_local_transforms`]: pose → per-joint local transforms
//! - [`Skeleton`]: parent-indexed joint arena producing world transforms
//! - [`Body`]: rigid segments drawn with their joint's world transform
//!
//! # Pipeline
//!
//! ```rust,ignore
//! let mut skeleton = Skeleton::human()?;
//! skeleton.set_pose(&evaluate_local_transforms(&pose));
//! let world = skeleton.world_transforms();
//! ```

pub mod body;
pub mod coordinate;
pub mod evaluator;
pub mod joint;
pub mod tree;

pub use body::{BODIES, Body, BodyName, SKIN_MESH};
pub use coordinate::{BIND_POSE, Coordinate, Pose};
pub use evaluator::evaluate_local_transforms;
pub use joint::{Axis, JOINT_DEFINITIONS, JointDefinition, JointName, JointOffset, human_hierarchy};
pub use tree::{JointTransforms, Skeleton};
