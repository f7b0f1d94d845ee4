//! Animation Module
//!
//! Per-frame pose sources for the rig:
//!
//! - [`MoonwalkDriver`]: procedural gait, time → [`Pose`](crate::skeleton::Pose)
//! - [`Timer`]: frame delta / elapsed time bookkeeping

pub mod moonwalk;
pub mod timer;

pub use moonwalk::{MoonwalkDriver, MoonwalkParams};
pub use timer::Timer;
