//! Vertex Joint Classifier
//!
//! Assigns every skin vertex to one governing joint from its bind-pose
//! height (`y`) and lateral position (`z`). The regions are hand-tuned boxes
//! for the male skin mesh; they are tested in a fixed order and the first
//! match wins, with [`JointName::Base`] as the fallback.
//!
//! | Region       | `y`                  | `z`               |
//! |--------------|----------------------|-------------------|
//! | right hip    | `[-0.5, -0.07]`      | `(0, 0.25)`       |
//! | right knee   | `(-0.85, -0.5)`      | `(0, 0.25)`       |
//! | right ankle  | `[-1.0, -0.85]`      | `(0, 0.25)`       |
//! | left hip     | `[-0.5, -0.07]`      | `(-0.25, 0)`      |
//! | left knee    | `(-0.85, -0.5)`      | `(-0.25, 0)`      |
//! | left ankle   | `[-1.0, -0.85]`      | `(-0.25, 0)`      |
//! | back         | `y > 0`, or `y > -0.4` with `\|z\| > 0.25` | |

use glam::Vec3;

use crate::skeleton::JointName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Right,
    Left,
}

impl Side {
    fn of(z: f32) -> Option<Self> {
        if z > 0.0 && z < 0.25 {
            Some(Side::Right)
        } else if z < 0.0 && z > -0.25 {
            Some(Side::Left)
        } else {
            None
        }
    }
}

fn is_hip_band(y: f32) -> bool {
    (-0.5..=-0.07).contains(&y)
}

fn is_knee_band(y: f32) -> bool {
    y < -0.5 && y > -0.85
}

fn is_ankle_band(y: f32) -> bool {
    (-1.0..=-0.85).contains(&y)
}

fn is_back(v: Vec3) -> bool {
    v.y > 0.0 || (v.y > -0.4 && v.z > 0.25) || (v.y > -0.4 && v.z < -0.25)
}

/// Governing joint of a bind-pose vertex.
#[must_use]
pub fn classify_vertex(v: Vec3) -> JointName {
    // A leg band always wins over the back box.
    if let Some(side) = Side::of(v.z) {
        let [hip, knee, ankle] = match side {
            Side::Right => [JointName::HipR, JointName::KneeR, JointName::AnkleR],
            Side::Left => [JointName::HipL, JointName::KneeL, JointName::AnkleL],
        };
        if is_hip_band(v.y) {
            return hip;
        }
        if is_knee_band(v.y) {
            return knee;
        }
        if is_ankle_band(v.y) {
            return ankle;
        }
    }

    if is_back(v) {
        JointName::Back
    } else {
        JointName::Base
    }
}

/// Governing joint for each vertex, in input order.
#[must_use]
pub fn classify_vertices(vertices: &[Vec3]) -> Vec<JointName> {
    let joints: Vec<JointName> = vertices.iter().copied().map(classify_vertex).collect();

    if log::log_enabled!(log::Level::Debug) {
        let mut histogram = [0usize; JointName::COUNT];
        for joint in &joints {
            histogram[joint.index()] += 1;
        }
        log::debug!("Vertex joint assignment over {} vertices: {histogram:?}", joints.len());
    }

    joints
}

/// Joint indices as the float vertex attribute consumed by the skinning shader.
#[must_use]
pub fn joint_index_attribute(joints: &[JointName]) -> Vec<f32> {
    joints.iter().map(|joint| joint.index() as f32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_follow_reference_table() {
        // Inclusive hip band on both ends.
        assert_eq!(classify_vertex(Vec3::new(0.0, -0.07, 0.1)), JointName::HipR);
        assert_eq!(classify_vertex(Vec3::new(0.0, -0.5, 0.1)), JointName::HipR);
        // Knee band is open, so -0.85 falls through to the ankle.
        assert_eq!(classify_vertex(Vec3::new(0.0, -0.85, -0.1)), JointName::AnkleL);
        assert_eq!(classify_vertex(Vec3::new(0.0, -1.0, -0.1)), JointName::AnkleL);
        // z == 0 belongs to neither leg.
        assert_eq!(classify_vertex(Vec3::new(0.0, -0.3, 0.0)), JointName::Base);
        assert_eq!(classify_vertex(Vec3::new(0.0, 0.01, 0.0)), JointName::Back);
        // Arms: lateral and above -0.4.
        assert_eq!(classify_vertex(Vec3::new(0.0, -0.3, 0.3)), JointName::Back);
        assert_eq!(classify_vertex(Vec3::new(0.0, -0.45, -0.3)), JointName::Base);
    }
}
