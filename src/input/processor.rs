//! Converts raw pointer events into navigation commands.
//!
//! The `InputProcessor` owns all transient pointer state (press position,
//! drag tracking). It is the only thing that sits between raw host events
//! and [`NavigationController`](crate::navigation::NavigationController).

use glam::Vec2;

use super::event::InputEvent;
use super::gesture::{Gesture, GestureClassifier};

/// A pointer gesture the navigation layer reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavCommand {
    /// Drag the view by `delta` pixels.
    Look {
        /// Pointer travel since the previous move event.
        delta: Vec2,
    },
    /// A click at `position` (window pixels) on the render surface.
    Click {
        /// Release position.
        position: Vec2,
    },
}

/// Converts raw [`InputEvent`]s into [`NavCommand`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(event) {
///     // route `cmd` to look controls or click resolution
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    gesture: GestureClassifier,
    /// Whether a press that began on the surface is being held.
    pressed: bool,
    last_pos: Option<Vec2>,
}

impl InputProcessor {
    /// Processor whose clicks tolerate `click_threshold` pixels of travel.
    #[must_use]
    pub fn new(click_threshold: f32) -> Self {
        Self {
            gesture: GestureClassifier::new(click_threshold),
            pressed: false,
            last_pos: None,
        }
    }

    /// Whether a surface press is currently held.
    #[must_use]
    pub fn pointer_pressed(&self) -> bool {
        self.pressed
    }

    /// Process one event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<NavCommand> {
        match event {
            InputEvent::PointerDown { x, y, on_surface } => {
                if !on_surface {
                    log::trace!("ignoring press outside the render surface");
                    return None;
                }
                let pos = Vec2::new(x, y);
                self.gesture.pointer_down(pos);
                self.pressed = true;
                self.last_pos = Some(pos);
                None
            }
            InputEvent::PointerMoved { x, y } => {
                self.handle_moved(Vec2::new(x, y))
            }
            InputEvent::PointerUp { x, y, on_surface } => {
                self.pressed = false;
                if !on_surface {
                    log::trace!("ignoring release outside the render surface");
                    return None;
                }
                let position = Vec2::new(x, y);
                match self.gesture.pointer_up(position)? {
                    Gesture::Click => Some(NavCommand::Click { position }),
                    Gesture::Drag => {
                        log::trace!("release at {position} was a drag");
                        None
                    }
                }
            }
        }
    }

    fn handle_moved(&mut self, pos: Vec2) -> Option<NavCommand> {
        let last = self.last_pos.replace(pos);
        if !self.pressed {
            return None;
        }
        let delta = pos - last.unwrap_or(pos);
        (delta != Vec2::ZERO).then_some(NavCommand::Look { delta })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(super::gesture::CLICK_THRESHOLD)
    }
}
