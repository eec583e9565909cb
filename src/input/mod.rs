//! Input handling: pointer events, click/drag classification, and the input
//! processor that converts raw events into navigation commands.

/// Platform-agnostic pointer events.
pub mod event;
/// Click-versus-drag classification.
pub mod gesture;
/// Converts raw events into navigation commands.
pub mod processor;
/// `winit` window-event translation.
#[cfg(feature = "viewer")]
pub mod window_events;

pub use event::InputEvent;
pub use gesture::{Gesture, GestureClassifier, CLICK_THRESHOLD};
pub use processor::{InputProcessor, NavCommand};
#[cfg(feature = "viewer")]
pub use window_events::PointerTracker;
