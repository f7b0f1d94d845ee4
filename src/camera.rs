//! First-person camera
//!
//! WASD moves along the view direction and its right vector, Q/E along the
//! camera up vector, the arrow keys zoom by changing the field of view and R/T
//! lean the up vector sideways ("peek around the corner"). Cursor movement
//! turns the camera.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

use crate::app::input::Input;

/// Maximum sideways lean of the up vector.
const PEEK_LIMIT: f32 = 0.15;
/// Lean added per frame while R or T is held.
const PEEK_SPEED: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub position: Vec3,
    /// Yaw in radians; `PI` looks down -Z.
    pub horizontal_angle: f32,
    /// Pitch in radians.
    pub vertical_angle: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Movement speed (units per second).
    pub speed: f32,
    /// Radians per pixel of cursor movement.
    pub mouse_speed: f32,
    /// Degrees of zoom per frame.
    pub fov_speed: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            horizontal_angle: std::f32::consts::PI,
            vertical_angle: 0.0,
            fov: 45.0,
            speed: 3.0,
            mouse_speed: 0.001,
            fov_speed: 0.03,
            aspect_ratio: 4.0 / 3.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FirstPersonCamera {
    pub settings: CameraSettings,

    pub position: Vec3,
    pub horizontal_angle: f32,
    pub vertical_angle: f32,
    pub fov: f32,
    peek_shift: f32,

    view: Mat4,
    projection: Mat4,
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

impl FirstPersonCamera {
    #[must_use]
    pub fn new(settings: CameraSettings) -> Self {
        let mut camera = Self {
            settings,
            position: settings.position,
            horizontal_angle: settings.horizontal_angle,
            vertical_angle: settings.vertical_angle,
            fov: settings.fov,
            peek_shift: 0.0,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        };
        camera.update_matrices();
        camera
    }

    /// Unit view direction from the spherical angles.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        let (sin_v, cos_v) = self.vertical_angle.sin_cos();
        let (sin_h, cos_h) = self.horizontal_angle.sin_cos();
        Vec3::new(cos_v * sin_h, sin_v, cos_v * cos_h)
    }

    /// Horizontal right vector (never tilts with pitch).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        let yaw = self.horizontal_angle - FRAC_PI_2;
        Vec3::new(yaw.sin(), 0.0, yaw.cos())
    }

    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.direction())
    }

    #[must_use]
    pub fn peek_shift(&self) -> f32 {
        self.peek_shift
    }

    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Turns the camera by a cursor displacement in pixels.
    pub fn rotate(&mut self, cursor_delta: glam::Vec2) {
        self.horizontal_angle -= self.settings.mouse_speed * cursor_delta.x;
        self.vertical_angle -= self.settings.mouse_speed * cursor_delta.y;
    }

    /// Applies one frame of input; `dt` is the frame time in seconds.
    pub fn update(&mut self, input: &Input, dt: f32) {
        self.rotate(input.cursor_delta);

        let direction = self.direction();
        let right = self.right();
        let up = right.cross(direction);
        let step = dt * self.settings.speed;

        if input.is_key_down(KeyCode::KeyW) {
            self.position += direction * step;
        }
        if input.is_key_down(KeyCode::KeyS) {
            self.position -= direction * step;
        }
        if input.is_key_down(KeyCode::KeyD) {
            self.position += right * step;
        }
        if input.is_key_down(KeyCode::KeyA) {
            self.position -= right * step;
        }
        if input.is_key_down(KeyCode::KeyQ) {
            self.position += up * step;
        }
        if input.is_key_down(KeyCode::KeyE) {
            self.position -= up * step;
        }

        if input.is_key_down(KeyCode::ArrowUp) {
            self.fov = (self.fov - self.settings.fov_speed).max(0.0);
        }
        if input.is_key_down(KeyCode::ArrowDown) {
            self.fov += self.settings.fov_speed;
        }

        if input.is_key_down(KeyCode::KeyR) {
            self.peek_shift = (self.peek_shift - PEEK_SPEED).max(-PEEK_LIMIT);
        }
        if input.is_key_down(KeyCode::KeyT) {
            self.peek_shift = (self.peek_shift + PEEK_SPEED).min(PEEK_LIMIT);
        }

        self.update_matrices();
    }

    fn update_matrices(&mut self) {
        let direction = self.direction();
        let right = self.right();
        let up = right.cross(direction) + right * self.peek_shift;

        self.projection = Mat4::perspective_rh_gl(
            self.fov.to_radians(),
            self.settings.aspect_ratio,
            self.settings.near,
            self.settings.far,
        );
        self.view = Mat4::look_at_rh(self.position, self.position + direction, up);
    }
}
