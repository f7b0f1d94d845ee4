//! Headless run of the skinning demo.
//!
//! Steps the moonwalk at 60 Hz, skins a synthetic vertex column on the CPU and
//! prints where the feet end up. Pass a settings JSON path as the first
//! argument to override the defaults.
//!
//! ```text
//! RUST_LOG=debug cargo run --example skinning -- settings.json
//! ```

use std::time::Duration;

use glam::Vec3;
use gait_rig::{JointName, RigSettings, SkinningApp, skin_vertices};

const FRAMES: usize = 240;

/// Points down both legs and up the torso, roughly where the skin mesh is.
fn sample_skin() -> Vec<Vec3> {
    let mut vertices = Vec::new();
    for i in 0..=40 {
        let y = 0.3 - i as f32 * 0.0325;
        vertices.push(Vec3::new(0.0, y, 0.086));
        vertices.push(Vec3::new(0.0, y, -0.086));
    }
    vertices.push(Vec3::new(0.0, -0.2, 0.35));
    vertices.push(Vec3::new(0.0, -0.2, -0.35));
    vertices
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => RigSettings::load(path)?,
        None => RigSettings::default(),
    };

    let skin = sample_skin();
    let mut app = SkinningApp::new(settings, &skin)?;

    println!("Skinning {} vertices over {FRAMES} frames", skin.len());

    let dt = Duration::from_secs_f64(1.0 / 60.0);
    for frame in 0..FRAMES {
        let output = app.step(dt);

        if frame % 60 == 0 {
            let matrices: Vec<_> = JointName::ALL
                .iter()
                .map(|&joint| output.palette.matrix(joint))
                .collect();
            let skinned = skin_vertices(&skin, app.skin_joints(), &matrices)?;

            let lowest = skinned
                .iter()
                .copied()
                .fold(Vec3::splat(f32::INFINITY), Vec3::min);

            println!(
                "t={:.2}s pelvis_x={:+.3} lowest skin point={:?}",
                app.timer.elapsed_seconds(),
                app.driver.pelvis_x(),
                lowest
            );
        }
    }

    Ok(())
}
