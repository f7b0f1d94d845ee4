//! Application state of the skinning demo.
//!
//! [`SkinningApp`] owns everything the frame loop touches: input, clock,
//! camera, animation driver, skinning builder and the per-vertex joint
//! attribute. The window/GL layer feeds it events and consumes a
//! [`SkinningFrame`] per frame.

pub mod input;

use std::time::Duration;

use glam::{Mat4, Vec3};

use self::input::Input;
use crate::animation::{MoonwalkDriver, Timer};
use crate::camera::FirstPersonCamera;
use crate::classifier::{classify_vertices, joint_index_attribute};
use crate::config::RigSettings;
use crate::errors::Result;
use crate::shading::{Light, Material};
use crate::skeleton::{BODIES, BodyName, JointName, JointTransforms, Pose};
use crate::skinning::{SkinPalette, SkinningBuilder};

/// Everything the render stage needs for one frame.
#[derive(Debug, Clone)]
pub struct SkinningFrame {
    pub view: Mat4,
    pub projection: Mat4,
    pub pose: Pose,
    /// Skinning matrices indexed by joint.
    pub palette: SkinPalette,
    /// Model matrix of each rigid body, indexed like [`BodyName::ALL`].
    pub body_matrices: [Mat4; BodyName::COUNT],
    pub light: Light,
    pub bone_material: Material,
}

pub struct SkinningApp {
    pub settings: RigSettings,
    pub input: Input,
    pub timer: Timer,
    pub camera: FirstPersonCamera,
    pub driver: MoonwalkDriver,
    pub light: Light,

    builder: SkinningBuilder,
    skin_joints: Vec<JointName>,
    skin_attribute: Vec<f32>,
}

impl SkinningApp {
    /// Binds the skeleton and classifies the skin mesh vertices.
    ///
    /// `skin_vertices` must be in the same order as the render vertex buffer.
    pub fn new(settings: RigSettings, skin_vertices: &[Vec3]) -> Result<Self> {
        let builder = SkinningBuilder::human()?;
        let skin_joints = classify_vertices(skin_vertices);
        let skin_attribute = joint_index_attribute(&skin_joints);

        let mut camera_settings = settings.camera;
        camera_settings.aspect_ratio = settings.aspect_ratio();

        log::info!(
            "{}: {} skin vertices bound to {} joints",
            settings.window.title,
            skin_vertices.len(),
            JointName::COUNT
        );

        Ok(Self {
            input: Input::new(),
            timer: Timer::new(),
            camera: FirstPersonCamera::new(camera_settings),
            driver: MoonwalkDriver::new(settings.animation),
            light: Light::SKINNING,
            settings,
            builder,
            skin_joints,
            skin_attribute,
        })
    }

    /// Governing joint of every skin vertex.
    #[must_use]
    pub fn skin_joints(&self) -> &[JointName] {
        &self.skin_joints
    }

    /// Joint indices as the float vertex attribute.
    #[must_use]
    pub fn skin_attribute(&self) -> &[f32] {
        &self.skin_attribute
    }

    /// World transforms of the most recently evaluated pose.
    pub fn skeleton_world(&mut self) -> &JointTransforms {
        self.builder.skeleton_mut().world_transforms()
    }

    /// Advances by the wall clock.
    pub fn tick(&mut self) -> SkinningFrame {
        self.timer.tick();
        self.frame()
    }

    /// Advances by a fixed step.
    pub fn step(&mut self, delta: Duration) -> SkinningFrame {
        self.timer.advance(delta);
        self.frame()
    }

    fn frame(&mut self) -> SkinningFrame {
        self.camera.update(&self.input, self.timer.dt_seconds());
        self.input.end_frame();

        let pose = self.driver.sample(self.timer.elapsed_seconds());
        let palette = self.builder.palette(&pose);

        let world = self.builder.skeleton_mut().world_transforms();
        let body_matrices =
            BODIES.map(|body| body.model_matrix(world).unwrap_or(Mat4::IDENTITY));

        SkinningFrame {
            view: self.camera.view_matrix(),
            projection: self.camera.projection_matrix(),
            pose,
            palette,
            body_matrices,
            light: self.light,
            bone_material: Material::BONE,
        }
    }
}
