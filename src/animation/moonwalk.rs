use serde::{Deserialize, Serialize};

use crate::skeleton::{Coordinate, Pose};

/// Shape of the moonwalk cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoonwalkParams {
    /// Backward slide speed of the pelvis (units per second).
    pub slide_speed: f32,
    /// Pelvis X below which the walker wraps around.
    pub wrap_min: f32,
    /// Pelvis X the walker re-enters at.
    pub wrap_max: f32,
    /// Angular frequency of the stride (radians per second).
    pub stride_frequency: f32,
    pub hip_amplitude: f32,
    pub hip_bias: f32,
    pub knee_amplitude: f32,
    pub knee_bias: f32,
    pub ankle_amplitude: f32,
    pub ankle_bias: f32,
    pub lumbar_flex: f32,
    pub lumbar_rot_amplitude: f32,
}

impl Default for MoonwalkParams {
    fn default() -> Self {
        Self {
            slide_speed: 0.5,
            wrap_min: -2.0,
            wrap_max: 2.0,
            stride_frequency: 2.5,
            hip_amplitude: 30.0,
            hip_bias: 10.0,
            knee_amplitude: -25.0,
            knee_bias: -25.0,
            ankle_amplitude: -25.0,
            ankle_bias: -5.0,
            lumbar_flex: -15.0,
            lumbar_rot_amplitude: -10.0,
        }
    }
}

/// Drives the rig with a procedural moonwalk.
///
/// Joint angles are closed-form functions of absolute time; the pelvis
/// translation integrates the frame delta, so the driver remembers the time of
/// the previous sample.
#[derive(Debug, Clone)]
pub struct MoonwalkDriver {
    pub params: MoonwalkParams,
    pub paused: bool,

    pelvis_x: f32,
    last_time: Option<f32>,
}

impl Default for MoonwalkDriver {
    fn default() -> Self {
        Self::new(MoonwalkParams::default())
    }
}

impl MoonwalkDriver {
    #[must_use]
    pub fn new(params: MoonwalkParams) -> Self {
        Self {
            params,
            paused: false,
            pelvis_x: 0.0,
            last_time: None,
        }
    }

    #[must_use]
    pub fn pelvis_x(&self) -> f32 {
        self.pelvis_x
    }

    /// Restarts the walk at the origin.
    pub fn reset(&mut self) {
        self.pelvis_x = 0.0;
        self.last_time = None;
    }

    /// Pose at absolute time `time` (seconds). The first sample does not move
    /// the pelvis.
    pub fn sample(&mut self, time: f32) -> Pose {
        let dt = self.last_time.map_or(0.0, |last| time - last);
        self.last_time = Some(time);

        if !self.paused {
            self.pelvis_x -= self.params.slide_speed * dt;
            if self.pelvis_x < self.params.wrap_min {
                self.pelvis_x = self.params.wrap_max;
            }
        }

        self.pose_at(time)
    }

    /// Joint angles at `time` with the current pelvis position.
    #[must_use]
    pub fn pose_at(&self, time: f32) -> Pose {
        let p = &self.params;
        let phase_r = p.stride_frequency * time;
        let phase_l = phase_r + 180f32.to_radians();

        [
            (Coordinate::PelvisTraX, self.pelvis_x),
            (Coordinate::PelvisTraY, 0.0),
            (Coordinate::PelvisTraZ, 0.0),
            (Coordinate::PelvisRotX, 0.0),
            (Coordinate::PelvisRotY, 0.0),
            (Coordinate::PelvisRotZ, 0.0),
            (Coordinate::HipRFlex, p.hip_amplitude * phase_r.cos() + p.hip_bias),
            (Coordinate::HipRAdd, 0.0),
            (Coordinate::HipRRot, 0.0),
            (Coordinate::HipLFlex, p.hip_amplitude * phase_l.cos() + p.hip_bias),
            (Coordinate::HipLAdd, 0.0),
            (Coordinate::HipLRot, 0.0),
            (Coordinate::KneeRFlex, p.knee_amplitude * phase_r.cos() + p.knee_bias),
            (Coordinate::KneeLFlex, p.knee_amplitude * phase_l.cos() + p.knee_bias),
            (Coordinate::AnkleRFlex, p.ankle_amplitude * phase_r.cos() + p.ankle_bias),
            (Coordinate::AnkleLFlex, p.ankle_amplitude * phase_l.cos() + p.ankle_bias),
            (Coordinate::LumbarFlex, p.lumbar_flex),
            (Coordinate::LumbarBend, 0.0),
            (Coordinate::LumbarRot, p.lumbar_rot_amplitude * phase_r.cos()),
        ]
        .into_iter()
        .collect()
    }
}
