//! Camera system for first-person gallery viewing.
//!
//! Provides the perspective camera and pose value, horizon-locked look
//! controls, and the motion executor that eases the camera between poses.

/// Orbit-style look controls driven by pointer drags.
pub mod controls;
/// Core camera struct and pose value.
pub mod core;
/// Motion executor trait and the default easing camera mover.
pub mod motion;

pub use self::controls::LookControls;
pub use self::core::{Camera, CameraPose};
pub use self::motion::{CameraMover, MotionExecutor, MotionMode};
