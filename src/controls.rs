//! Keyboard-driven scene controls used by the shading and mesh demos.

use glam::{Mat4, Vec3, Vec4};
use winit::keyboard::KeyCode;

use crate::app::input::Input;
use crate::shading::Light;

// ============================================================================
// Light Controller
// ============================================================================

/// Moves and recolours a point light.
///
/// - I/K: forward/backward (-Z/+Z), J/L: left/right, U/O: down/up
/// - R/G/B: step a colour channel, wrapping back to zero past one
/// - M/N: raise/lower the power (never below zero)
#[derive(Debug, Clone)]
pub struct LightController {
    /// Units per second.
    pub speed: f32,
    pub color_step: f32,
    pub power_step: f32,
}

impl Default for LightController {
    fn default() -> Self {
        Self {
            speed: 1.0,
            color_step: 0.05,
            power_step: 0.5,
        }
    }
}

impl LightController {
    /// Frame deltas above this are treated as a stall.
    const MAX_DELTA: f32 = 0.5;
    const STALL_DELTA: f32 = 0.1;

    pub fn update(&self, light: &mut Light, input: &Input, dt: f32) {
        let dt = if dt > Self::MAX_DELTA { Self::STALL_DELTA } else { dt };
        let step = dt * self.speed;

        let moves = [
            (KeyCode::KeyI, Vec3::NEG_Z),
            (KeyCode::KeyK, Vec3::Z),
            (KeyCode::KeyL, Vec3::X),
            (KeyCode::KeyJ, Vec3::NEG_X),
            (KeyCode::KeyO, Vec3::Y),
            (KeyCode::KeyU, Vec3::NEG_Y),
        ];
        for (key, direction) in moves {
            if input.is_key_down(key) {
                light.position += direction * step;
            }
        }

        let channels = [(KeyCode::KeyR, 0), (KeyCode::KeyG, 1), (KeyCode::KeyB, 2)];
        for (key, channel) in channels {
            if input.is_key_down(key) {
                let value = light.diffuse[channel] + self.color_step;
                light.diffuse[channel] = if value > 1.0 { 0.0 } else { value };
            }
        }

        if input.is_key_down(KeyCode::KeyM) {
            light.power += self.power_step;
        }
        if input.is_key_down(KeyCode::KeyN) {
            light.power = (light.power - self.power_step).max(0.0);
        }
    }
}

// ============================================================================
// Cutting Plane
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonMode {
    Fill,
    Line,
}

impl PolygonMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            PolygonMode::Fill => PolygonMode::Line,
            PolygonMode::Line => PolygonMode::Fill,
        }
    }
}

/// A plane that splits a model and pushes the two halves apart.
///
/// The plane passes through `(0, y, 0)` and is rotated by `angle` degrees
/// about Z; its untransformed normal is +Y.
#[derive(Debug, Clone)]
pub struct CuttingPlane {
    pub y: f32,
    /// Degrees about +Z.
    pub angle: f32,
    /// Distance each half is pushed along the normal.
    pub detachment: f32,
    pub polygon_mode: PolygonMode,
}

impl Default for CuttingPlane {
    fn default() -> Self {
        Self {
            y: 0.0,
            angle: 0.0,
            detachment: 0.001,
            polygon_mode: PolygonMode::Fill,
        }
    }
}

impl CuttingPlane {
    const MOVE_STEP: f32 = 0.01;
    const ANGLE_STEP: f32 = 2.0;
    const DETACHMENT_STEP: f32 = 0.02;
    const MIN_DETACHMENT: f32 = 0.001;

    /// I/K raise/lower, J/L rotate, U/O widen/narrow the gap, T toggles
    /// wireframe.
    ///
    /// T acts on the press edge only. The other keys step once per frame
    /// while held, so the rate follows the frame rate rather than the OS key
    /// repeat rate.
    pub fn update(&mut self, input: &Input) {
        if input.is_key_down(KeyCode::KeyI) {
            self.y += Self::MOVE_STEP;
        }
        if input.is_key_down(KeyCode::KeyK) {
            self.y -= Self::MOVE_STEP;
        }
        if input.is_key_down(KeyCode::KeyJ) {
            self.angle += Self::ANGLE_STEP;
        }
        if input.is_key_down(KeyCode::KeyL) {
            self.angle -= Self::ANGLE_STEP;
        }
        if input.was_key_pressed(KeyCode::KeyT) {
            self.polygon_mode = self.polygon_mode.toggled();
        }
        if input.is_key_down(KeyCode::KeyU) {
            self.detachment += Self::DETACHMENT_STEP;
        }
        if input.is_key_down(KeyCode::KeyO) {
            self.detachment = (self.detachment - Self::DETACHMENT_STEP).max(Self::MIN_DETACHMENT);
        }
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::new(0.0, self.y, 0.0)
    }

    #[must_use]
    pub fn rotation(&self) -> Mat4 {
        Mat4::from_rotation_z(self.angle.to_radians())
    }

    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position()) * self.rotation()
    }

    #[must_use]
    pub fn normal(&self) -> Vec3 {
        self.rotation().transform_vector3(Vec3::Y)
    }

    /// `(a, b, c, d)` with `a*x + b*y + c*z + d = 0` on the plane.
    #[must_use]
    pub fn coefficients(&self) -> Vec4 {
        let normal = self.normal();
        normal.extend(-normal.dot(self.position()))
    }

    #[must_use]
    pub fn detachment_offset(&self) -> Vec3 {
        self.detachment * self.normal()
    }
}
