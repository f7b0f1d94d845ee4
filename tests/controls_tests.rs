//! Interactive Control Tests
//!
//! Tests for:
//! - Input state (held keys, press edges, cursor deltas)
//! - First-person camera movement, zoom and peek
//! - Light controller
//! - Cutting plane
//! - Shading demo material presets

use glam::{Vec2, Vec3, Vec4};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use gait_rig::app::input::Input;
use gait_rig::camera::{CameraSettings, FirstPersonCamera};
use gait_rig::controls::{CuttingPlane, LightController, PolygonMode};
use gait_rig::shading::{Light, Material, SHADING_INSTANCES, shading_instance_matrices};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    a.abs_diff_eq(b, EPSILON)
}

fn holding(keys: &[KeyCode]) -> Input {
    let mut input = Input::new();
    for &key in keys {
        input.handle_key(ElementState::Pressed, key);
    }
    input
}

// ============================================================================
// Input
// ============================================================================

#[test]
fn press_edge_fires_once() {
    let mut input = Input::new();
    input.handle_key(ElementState::Pressed, KeyCode::KeyT);
    assert!(input.is_key_down(KeyCode::KeyT));
    assert!(input.was_key_pressed(KeyCode::KeyT));

    input.end_frame();
    // Key repeat while held is not a new press.
    input.handle_key(ElementState::Pressed, KeyCode::KeyT);
    assert!(input.is_key_down(KeyCode::KeyT));
    assert!(!input.was_key_pressed(KeyCode::KeyT));

    input.handle_key(ElementState::Released, KeyCode::KeyT);
    assert!(!input.is_key_down(KeyCode::KeyT));
}

#[test]
fn first_cursor_event_only_anchors() {
    let mut input = Input::new();
    input.handle_cursor_move(100.0, 50.0);
    assert_eq!(input.cursor_delta, Vec2::ZERO);

    input.handle_cursor_move(110.0, 45.0);
    input.handle_cursor_move(115.0, 40.0);
    assert_eq!(input.cursor_delta, Vec2::new(15.0, -10.0));

    input.end_frame();
    assert_eq!(input.cursor_delta, Vec2::ZERO);
    assert_eq!(input.cursor_position, Vec2::new(115.0, 40.0));
}

#[test]
fn resize_updates_screen_size() {
    let mut input = Input::new();
    input.handle_resize(1024, 768);
    assert_eq!(input.screen_size, Vec2::new(1024.0, 768.0));
}

// ============================================================================
// Camera
// ============================================================================

#[test]
fn default_camera_looks_down_negative_z() {
    let camera = FirstPersonCamera::default();
    assert!(vec3_approx(camera.direction(), Vec3::NEG_Z));
    assert!(vec3_approx(camera.right(), Vec3::X));
    assert!(vec3_approx(camera.up(), Vec3::Y));
}

#[test]
fn camera_moves_along_view_axes() {
    let mut camera = FirstPersonCamera::default();
    camera.update(&holding(&[KeyCode::KeyW]), 0.5);
    assert!(vec3_approx(camera.position, Vec3::new(0.0, 0.0, 3.5)));

    camera.update(&holding(&[KeyCode::KeyD]), 1.0);
    assert!(vec3_approx(camera.position, Vec3::new(3.0, 0.0, 3.5)));

    camera.update(&holding(&[KeyCode::KeyQ]), 1.0);
    assert!(vec3_approx(camera.position, Vec3::new(3.0, 3.0, 3.5)));
}

#[test]
fn opposite_keys_cancel() {
    let mut camera = FirstPersonCamera::default();
    camera.update(&holding(&[KeyCode::KeyA, KeyCode::KeyD, KeyCode::KeyE, KeyCode::KeyQ]), 1.0);
    assert!(vec3_approx(camera.position, CameraSettings::default().position));
}

#[test]
fn cursor_turns_camera() {
    let mut camera = FirstPersonCamera::default();
    let mut input = Input::new();
    input.handle_cursor_move(0.0, 0.0);
    input.handle_cursor_move(100.0, -50.0);

    camera.update(&input, 0.016);
    assert!(approx(camera.horizontal_angle, std::f32::consts::PI - 0.1));
    assert!(approx(camera.vertical_angle, 0.05));
}

#[test]
fn zoom_changes_fov_per_frame() {
    let mut camera = FirstPersonCamera::default();
    let input = holding(&[KeyCode::ArrowUp]);
    for _ in 0..10 {
        camera.update(&input, 1.0);
    }
    assert!(approx(camera.fov, 45.0 - 0.3));

    let input = holding(&[KeyCode::ArrowDown]);
    camera.update(&input, 1.0);
    assert!(approx(camera.fov, 45.0 - 0.27));
}

#[test]
fn peek_is_clamped() {
    let mut camera = FirstPersonCamera::default();
    let input = holding(&[KeyCode::KeyT]);
    for _ in 0..500 {
        camera.update(&input, 0.016);
    }
    assert!(approx(camera.peek_shift(), 0.15));

    let input = holding(&[KeyCode::KeyR]);
    for _ in 0..1000 {
        camera.update(&input, 0.016);
    }
    assert!(approx(camera.peek_shift(), -0.15));
}

#[test]
fn view_matrix_places_eye_at_origin() {
    let mut camera = FirstPersonCamera::default();
    camera.update(&holding(&[KeyCode::KeyS]), 0.25);
    let eye = camera.view_matrix().transform_point3(camera.position);
    assert!(vec3_approx(eye, Vec3::ZERO));
}

// ============================================================================
// Light controller
// ============================================================================

#[test]
fn light_moves_with_keys() {
    let controller = LightController::default();
    let mut light = Light::SHADING;

    controller.update(&mut light, &holding(&[KeyCode::KeyI]), 0.25);
    assert!(vec3_approx(light.position, Vec3::new(0.0, 0.0, 3.75)));

    controller.update(&mut light, &holding(&[KeyCode::KeyJ, KeyCode::KeyO]), 0.25);
    assert!(vec3_approx(light.position, Vec3::new(-0.25, 0.25, 3.75)));
}

#[test]
fn stalled_frame_uses_small_step() {
    let controller = LightController::default();
    let mut light = Light::SHADING;
    controller.update(&mut light, &holding(&[KeyCode::KeyL]), 3.0);
    assert!(vec3_approx(light.position, Vec3::new(0.1, 0.0, 4.0)));
}

#[test]
fn color_channel_wraps_past_one() {
    let controller = LightController::default();
    let mut light = Light::SHADING;
    let input = holding(&[KeyCode::KeyR]);

    controller.update(&mut light, &input, 0.016);
    assert_eq!(light.diffuse.x, 0.0);
    controller.update(&mut light, &input, 0.016);
    assert!(approx(light.diffuse.x, 0.05));
    assert_eq!(light.diffuse.y, 1.0);
    assert!(vec3_approx(light.color(), Vec3::new(0.05, 1.0, 1.0)));
}

#[test]
fn power_never_goes_negative() {
    let controller = LightController::default();
    let mut light = Light {
        power: 0.2,
        ..Light::SHADING
    };
    controller.update(&mut light, &holding(&[KeyCode::KeyN]), 0.016);
    assert_eq!(light.power, 0.0);

    controller.update(&mut light, &holding(&[KeyCode::KeyM]), 0.016);
    assert!(approx(light.power, 0.5));
}

#[test]
fn light_uniform_mirrors_light() {
    let uniform = Light::SKINNING.to_uniform();
    assert_eq!(uniform.position, [0.0, 4.0, 4.0]);
    assert_eq!(uniform.power, 20.0);
    assert_eq!(uniform.ld, Vec4::ONE.to_array());
}

// ============================================================================
// Shading materials
// ============================================================================

#[test]
fn shading_instances_pair_materials_with_offsets() {
    let materials: Vec<Material> = SHADING_INSTANCES.iter().map(|(m, _)| *m).collect();
    assert_eq!(
        materials,
        vec![Material::BRONZE, Material::JADE, Material::SILVER, Material::PEWTER]
    );

    let offsets: Vec<f32> = SHADING_INSTANCES.iter().map(|(_, x)| *x).collect();
    assert_eq!(offsets, vec![-4.5, -1.5, 1.5, 4.5]);

    let matrices = shading_instance_matrices();
    assert!(vec3_approx(
        matrices[3].transform_point3(Vec3::ZERO),
        Vec3::new(4.5, 0.0, 0.0)
    ));
}

#[test]
fn bronze_uniform_image() {
    let uniform = Material::BRONZE.to_uniform();
    assert_eq!(uniform.ka, [0.2125, 0.1275, 0.054, 1.0]);
    assert_eq!(uniform.kd, [0.714, 0.4284, 0.18144, 1.0]);
    assert_eq!(uniform.ks, [0.393548, 0.271906, 0.166721, 1.0]);
    assert_eq!(uniform.ns, 25.6);
    assert_eq!(uniform._padding, [0.0; 3]);
}

#[test]
fn preset_shininess() {
    assert_eq!(Material::JADE.shininess, 12.8);
    assert_eq!(Material::SILVER.shininess, 51.2);
    assert_eq!(Material::PEWTER.shininess, 9.84615);
    assert_eq!(Material::PEWTER.specular, Vec4::new(0.333333, 0.333333, 0.521569, 1.0));
    assert_eq!(Material::default(), Material::BONE);
}

// ============================================================================
// Cutting plane
// ============================================================================

#[test]
fn plane_moves_and_rotates() {
    let mut plane = CuttingPlane::default();
    plane.update(&holding(&[KeyCode::KeyI, KeyCode::KeyJ]));
    assert!(approx(plane.y, 0.01));
    assert!(approx(plane.angle, 2.0));
}

#[test]
fn plane_wireframe_toggles_on_press_only() {
    let mut plane = CuttingPlane::default();
    let mut input = holding(&[KeyCode::KeyT]);

    plane.update(&input);
    assert_eq!(plane.polygon_mode, PolygonMode::Line);

    input.end_frame();
    plane.update(&input);
    assert_eq!(plane.polygon_mode, PolygonMode::Line);
}

#[test]
fn detachment_has_floor() {
    let mut plane = CuttingPlane::default();
    plane.update(&holding(&[KeyCode::KeyU]));
    assert!(approx(plane.detachment, 0.021));

    let input = holding(&[KeyCode::KeyO]);
    plane.update(&input);
    plane.update(&input);
    assert!(approx(plane.detachment, 0.001));
}

#[test]
fn plane_geometry() {
    let plane = CuttingPlane {
        y: 0.5,
        ..CuttingPlane::default()
    };
    assert!(plane.coefficients().abs_diff_eq(Vec4::new(0.0, 1.0, 0.0, -0.5), EPSILON));

    let tilted = CuttingPlane {
        angle: 90.0,
        ..CuttingPlane::default()
    };
    assert!(vec3_approx(tilted.normal(), Vec3::NEG_X));
    assert!(vec3_approx(tilted.detachment_offset(), Vec3::new(-0.001, 0.0, 0.0)));
    assert!(vec3_approx(
        tilted.model_matrix().transform_point3(Vec3::Y),
        Vec3::NEG_X
    ));
}
