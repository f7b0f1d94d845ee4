#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod app;
pub mod camera;
pub mod classifier;
pub mod config;
pub mod controls;
pub mod errors;
pub mod shading;
pub mod skeleton;
pub mod skinning;

pub use animation::{MoonwalkDriver, MoonwalkParams, Timer};
pub use app::{SkinningApp, SkinningFrame, input::Input};
pub use camera::{CameraSettings, FirstPersonCamera};
pub use classifier::{classify_vertex, classify_vertices, joint_index_attribute};
pub use config::RigSettings;
pub use controls::{CuttingPlane, LightController, PolygonMode};
pub use errors::{Result, RigError};
pub use shading::{Light, Material, SHADING_INSTANCES};
pub use skeleton::{BodyName, Coordinate, JointName, Pose, Skeleton, evaluate_local_transforms};
pub use skinning::{SkinPalette, SkinningBuilder, calculate_skinning_matrices, rigid_inverse, skin_vertices};
