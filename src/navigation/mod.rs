//! Click-to-navigate logic: what a click means, where the camera should go,
//! and the state that remembers how to get back.
//!
//! [`NavigationController`] is the entry point. The pieces it composes are
//! public so hosts with their own input or motion can drive them directly.

mod controller;
pub mod framing;
pub mod resolver;
mod state;
pub mod walk;

pub use controller::NavigationController;
pub use framing::{compute_framing_pose, framing_distance, FramingInput};
pub use resolver::{NavAction, Resolution, ResolvedHit, TargetResolver};
pub use state::NavigationState;
pub use walk::{compute_walk_pose, RoomBounds};
