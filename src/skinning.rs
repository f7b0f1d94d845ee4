//! Skinning Matrix Builder
//!
//! Combines bind-pose and current-pose world transforms into one matrix per
//! joint:
//!
//! ```text
//! skinning[i] = current_world[i] * inverse(bind_world[i])
//! ```
//!
//! The result maps a vertex modelled in the bind pose to its current-pose
//! world position. Every vertex is driven by exactly one joint (see
//! [`crate::classifier`]), so there is no weight blending.

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4, Vec3};

use crate::errors::{Result, RigError};
use crate::skeleton::{JointName, JointTransforms, Pose, Skeleton, evaluate_local_transforms};

/// Tolerance on `det(R) == 1` for a bind transform to count as rigid.
const RIGID_DETERMINANT_EPSILON: f32 = 1e-3;

/// Closed-form inverse of a rigid transform (rotation + translation).
///
/// Transposes the rotation block and rotates the negated translation, which
/// is exact for orthonormal rotations and avoids a general 4×4 inversion.
#[must_use]
pub fn rigid_inverse(matrix: Mat4) -> Mat4 {
    let rotation_t = Mat3::from_mat4(matrix).transpose();
    let translation = matrix.w_axis.truncate();
    Mat4::from_translation(-(rotation_t * translation)) * Mat4::from_mat3(rotation_t)
}

/// Stateless skinning: evaluates both poses on `skeleton` and combines them.
///
/// The skeleton is left holding the current pose.
#[must_use]
pub fn calculate_skinning_matrices(skeleton: &mut Skeleton, bind: &Pose, current: &Pose) -> Vec<Mat4> {
    skeleton.set_pose(&evaluate_local_transforms(bind));
    let bind_world = skeleton.world_transforms().clone();

    skeleton.set_pose(&evaluate_local_transforms(current));
    let current_world = skeleton.world_transforms();

    let mut matrices = vec![Mat4::IDENTITY; JointName::COUNT];
    for (joint, &bind) in &bind_world {
        if let Some(&current) = current_world.get(joint) {
            matrices[joint.index()] = current * rigid_inverse(bind);
        }
    }
    matrices
}

/// Per-frame skinning with the bind pose evaluated once up front.
#[derive(Debug, Clone)]
pub struct SkinningBuilder {
    skeleton: Skeleton,
    bind_world: JointTransforms,
    inverse_bind: JointTransforms,
}

impl SkinningBuilder {
    /// Evaluates `bind` on `skeleton` and caches the inverse bind matrices.
    ///
    /// Fails if any bind world transform is not a rigid motion.
    pub fn new(mut skeleton: Skeleton, bind: &Pose) -> Result<Self> {
        skeleton.set_pose(&evaluate_local_transforms(bind));
        let bind_world = skeleton.world_transforms().clone();

        let mut inverse_bind = JointTransforms::default();
        for (&joint, &matrix) in &bind_world {
            let determinant = Mat3::from_mat4(matrix).determinant();
            if (determinant - 1.0).abs() > RIGID_DETERMINANT_EPSILON {
                return Err(RigError::SingularTransform { joint, determinant });
            }
            inverse_bind.insert(joint, rigid_inverse(matrix));
        }

        log::info!("Skinning bound to {} joints", inverse_bind.len());

        Ok(Self {
            skeleton,
            bind_world,
            inverse_bind,
        })
    }

    /// Builder over the human skeleton and the standard bind pose.
    pub fn human() -> Result<Self> {
        Self::new(Skeleton::human()?, &Pose::bind())
    }

    #[must_use]
    pub fn bind_world_transforms(&self) -> &JointTransforms {
        &self.bind_world
    }

    #[must_use]
    pub fn inverse_bind_matrix(&self, joint: JointName) -> Option<Mat4> {
        self.inverse_bind.get(&joint).copied()
    }

    /// Skeleton holding the most recently evaluated pose.
    pub fn skeleton_mut(&mut self) -> &mut Skeleton {
        &mut self.skeleton
    }

    /// One matrix per joint index; joints without a bind or current transform
    /// stay at identity.
    pub fn skinning_matrices(&mut self, pose: &Pose) -> Vec<Mat4> {
        self.skeleton.set_pose(&evaluate_local_transforms(pose));
        let current_world = self.skeleton.world_transforms();

        let mut matrices = vec![Mat4::IDENTITY; JointName::COUNT];
        for (joint, inverse) in &self.inverse_bind {
            if let Some(current) = current_world.get(joint) {
                matrices[joint.index()] = *current * *inverse;
            }
        }
        matrices
    }

    /// [`Self::skinning_matrices`] packed for a uniform upload.
    pub fn palette(&mut self, pose: &Pose) -> SkinPalette {
        SkinPalette::from_matrices(&self.skinning_matrices(pose))
    }
}

/// Joint matrices laid out as `uniform mat4 boneTransformations[12]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SkinPalette {
    pub matrices: [[f32; 16]; JointName::COUNT],
}

impl Default for SkinPalette {
    fn default() -> Self {
        Self {
            matrices: [Mat4::IDENTITY.to_cols_array(); JointName::COUNT],
        }
    }
}

impl SkinPalette {
    /// Packs column-major matrices; missing trailing entries stay identity.
    #[must_use]
    pub fn from_matrices(matrices: &[Mat4]) -> Self {
        let mut palette = Self::default();
        for (slot, matrix) in palette.matrices.iter_mut().zip(matrices) {
            *slot = matrix.to_cols_array();
        }
        palette
    }

    #[must_use]
    pub fn matrix(&self, joint: JointName) -> Mat4 {
        Mat4::from_cols_array(&self.matrices[joint.index()])
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// CPU reference of the vertex stage: each position is moved by the matrix
/// of its single governing joint.
pub fn skin_vertices(positions: &[Vec3], joints: &[JointName], matrices: &[Mat4]) -> Result<Vec<Vec3>> {
    if positions.len() != joints.len() {
        return Err(RigError::VertexCountMismatch {
            positions: positions.len(),
            joints: joints.len(),
        });
    }

    positions
        .iter()
        .zip(joints)
        .map(|(&position, joint)| {
            let matrix = matrices
                .get(joint.index())
                .ok_or(RigError::InvalidJointIndex(joint.index()))?;
            Ok(matrix.transform_point3(position))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Quat, Vec3};

    #[test]
    fn rigid_inverse_matches_general_inverse() {
        let m = Mat4::from_rotation_translation(
            Quat::from_euler(glam::EulerRot::XYZ, 0.3, -1.1, 0.7),
            Vec3::new(0.5, -2.0, 1.25),
        );
        let fast = rigid_inverse(m);
        let general = m.inverse();
        assert!(fast.abs_diff_eq(general, 1e-5));
        assert!((m * fast).abs_diff_eq(Mat4::IDENTITY, 1e-5));
    }

    #[test]
    fn palette_bytes_cover_all_joints() {
        let palette = SkinPalette::default();
        assert_eq!(palette.as_bytes().len(), JointName::COUNT * 16 * 4);
        assert_eq!(palette.matrix(JointName::Back), Mat4::IDENTITY);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = skin_vertices(&[Vec3::ZERO], &[], &[]).unwrap_err();
        assert!(matches!(err, RigError::VertexCountMismatch { positions: 1, joints: 0 }));
    }
}
