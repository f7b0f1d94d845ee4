//! Frame loop tests
//!
//! Drives [`SkinningApp`] with fixed steps and checks the per-frame output.

use std::time::Duration;

use glam::{Mat4, Vec3};
use gait_rig::skeleton::{BodyName, Coordinate, JointName};
use gait_rig::{RigSettings, SkinningApp};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

const STEP: Duration = Duration::from_millis(100);

fn skin() -> Vec<Vec3> {
    vec![
        Vec3::new(0.05, -0.6, 0.1),
        Vec3::new(0.0, 0.4, 0.0),
        Vec3::new(0.0, -0.95, -0.1),
        Vec3::new(0.0, -0.2, 0.0),
    ]
}

#[test]
fn classifies_skin_on_creation() {
    let app = SkinningApp::new(RigSettings::default(), &skin()).unwrap();
    assert_eq!(
        app.skin_joints(),
        &[JointName::KneeR, JointName::Back, JointName::AnkleL, JointName::Base]
    );
    assert_eq!(app.skin_attribute().len(), 4);
    assert_eq!(app.skin_attribute()[0], JointName::KneeR.index() as f32);
}

#[test]
fn frames_follow_the_moonwalk() {
    let mut app = SkinningApp::new(RigSettings::default(), &skin()).unwrap();

    let first = app.step(STEP);
    assert_eq!(first.pose.get(Coordinate::PelvisTraX), 0.0);

    let second = app.step(STEP);
    assert!((second.pose.get(Coordinate::PelvisTraX) + 0.05).abs() < 1e-4);
    assert_eq!(app.timer.frame_count, 2);

    // Skinning matrices move away from identity once the walker is posed.
    assert_ne!(second.palette.matrix(JointName::KneeR), Mat4::IDENTITY);
}

#[test]
fn body_matrices_are_joint_world_transforms() {
    let mut app = SkinningApp::new(RigSettings::default(), &skin()).unwrap();
    let frame = app.step(STEP);

    let world = app.skeleton_world();
    for (matrix, name) in frame.body_matrices.iter().zip(BodyName::ALL) {
        assert_eq!(*matrix, world[&name.body().joint], "{name:?}");
    }
}

#[test]
fn camera_uses_window_aspect() {
    let mut settings = RigSettings::default();
    settings.window.width = 800;
    settings.window.height = 800;
    let mut app = SkinningApp::new(settings, &skin()).unwrap();

    let frame = app.step(STEP);
    assert_eq!(app.camera.settings.aspect_ratio, 1.0);
    assert_eq!(frame.projection, app.camera.projection_matrix());
}

#[test]
fn held_key_moves_camera_between_frames() {
    let mut app = SkinningApp::new(RigSettings::default(), &skin()).unwrap();
    let start = app.camera.position;

    app.input.handle_key(ElementState::Pressed, KeyCode::KeyW);
    app.step(STEP);
    app.step(STEP);
    assert!(app.camera.position.z < start.z);

    app.input.handle_key(ElementState::Released, KeyCode::KeyW);
    let stopped = app.camera.position;
    app.step(STEP);
    assert_eq!(app.camera.position, stopped);
}
