//! Error Types
//!
//! This module defines the error types used throughout the rig.
//!
//! # Overview
//!
//! Every variant of [`RigError`] describes a mismatch between the fixed
//! skeleton description and the data handed to it (joint hierarchy, bind pose,
//! vertex attributes, settings files). None of them is a per-frame condition:
//! they are raised while the rig is being assembled, so a demo can bail out
//! before its render loop starts.
//!
//! # Usage
//!
//! All fallible APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, RigError>`.
//!
//! ```rust,ignore
//! use gait_rig::errors::Result;
//! use gait_rig::skeleton::Skeleton;
//!
//! fn build() -> Result<Skeleton> {
//!     Skeleton::human()
//! }
//! ```

use thiserror::Error;

use crate::skeleton::JointName;

/// The main error type for the rig.
#[derive(Error, Debug)]
pub enum RigError {
    // ========================================================================
    // Hierarchy Errors
    // ========================================================================
    /// A joint references a parent that is not part of the hierarchy.
    #[error("Joint {joint:?} references unknown parent {parent:?}")]
    UnknownParent { joint: JointName, parent: JointName },

    /// A joint is listed after one of its children.
    #[error("Joint {joint:?} appears before its parent {parent:?}")]
    ParentAfterChild { joint: JointName, parent: JointName },

    /// The same joint is declared twice.
    #[error("Joint {0:?} is declared more than once")]
    DuplicateJoint(JointName),

    // ========================================================================
    // Skinning Errors
    // ========================================================================
    /// The bind pose produced a world transform that is not a rigid motion.
    #[error("Bind transform of joint {joint:?} is not invertible (det = {determinant})")]
    SingularTransform { joint: JointName, determinant: f32 },

    /// Vertex positions and joint indices disagree in length.
    #[error("Vertex count mismatch: {positions} positions, {joints} joint indices")]
    VertexCountMismatch { positions: usize, joints: usize },

    /// A joint index does not name a joint of the rig.
    #[error("Joint index {0} is out of range")]
    InvalidJointIndex(usize),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Failed to read a settings file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a settings file.
    #[error("Settings parse error: {0}")]
    Settings(#[from] serde_json::Error),
}

/// Alias for `Result<T, RigError>`.
pub type Result<T> = std::result::Result<T, RigError>;
