//! Demo settings
//!
//! Every field has a default, so a settings file only needs the values it
//! overrides:
//!
//! ```json
//! { "window": { "title": "Walker" }, "animation": { "slide_speed": 0.25 } }
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::MoonwalkParams;
use crate::camera::CameraSettings;
use crate::errors::Result;
use crate::skeleton::SKIN_MESH;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub samples: u8,
    /// Clear colour (RGBA).
    pub background: [f32; 4],
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Skinning and Animation".to_string(),
            samples: 4,
            background: [0.5, 0.5, 0.5, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigSettings {
    pub window: WindowSettings,
    pub camera: CameraSettings,
    pub animation: MoonwalkParams,
    /// Skin mesh whose vertices are classified at load time.
    pub skin_mesh: String,
    /// Draw the skin as wireframe over the bones.
    pub wireframe_skin: bool,
}

impl Default for RigSettings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            camera: CameraSettings {
                position: Vec3::new(0.0, 0.0, 2.5),
                ..CameraSettings::default()
            },
            animation: MoonwalkParams::default(),
            skin_mesh: SKIN_MESH.to_string(),
            wireframe_skin: true,
        }
    }
}

impl RigSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&text)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reads `path` if it exists, otherwise falls back to the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Width over height of the configured window.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.window.width as f32 / self.window.height.max(1) as f32
    }
}
