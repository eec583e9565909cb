//! Translation from `winit` window events.

use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};

use super::event::InputEvent;
use crate::viewport::Rect;

/// Tracks the cursor so button events, which carry no position, can be
/// turned into positioned [`InputEvent`]s.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    cursor: Vec2,
}

impl PointerTracker {
    /// Translate a window event. `surface` is the render surface within the
    /// window; a native window has no DOM, so "on the surface" means the
    /// cursor lies inside that rectangle. Only the left button is reported.
    pub fn translate(
        &mut self,
        event: &WindowEvent,
        surface: &Rect,
    ) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                Some(InputEvent::PointerMoved {
                    x: self.cursor.x,
                    y: self.cursor.y,
                })
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let on_surface = surface.contains(self.cursor);
                let (x, y) = (self.cursor.x, self.cursor.y);
                Some(match state {
                    ElementState::Pressed => InputEvent::PointerDown {
                        x,
                        y,
                        on_surface,
                    },
                    ElementState::Released => InputEvent::PointerUp {
                        x,
                        y,
                        on_surface,
                    },
                })
            }
            _ => None,
        }
    }
}
