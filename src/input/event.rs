/// Platform-agnostic pointer events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`NavCommand`](super::NavCommand) values. Positions
/// are window-space device pixels.
///
/// `on_surface` tells whether the event's target is the render surface (or,
/// for releases, an element inside it). Hosts set it from their own hit
/// testing of UI chrome; off-surface presses and releases never count as
/// scene clicks.
///
/// # Example
///
/// ```ignore
/// let cmd = input_processor.handle_event(InputEvent::PointerDown {
///     x: 100.0,
///     y: 200.0,
///     on_surface: true,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary pointer pressed.
    PointerDown {
        /// Horizontal position in device pixels.
        x: f32,
        /// Vertical position in device pixels.
        y: f32,
        /// Whether the press landed on the render surface.
        on_surface: bool,
    },
    /// Primary pointer released.
    PointerUp {
        /// Horizontal position in device pixels.
        x: f32,
        /// Vertical position in device pixels.
        y: f32,
        /// Whether the release target is the render surface or inside it.
        on_surface: bool,
    },
    /// Pointer moved to an absolute position.
    PointerMoved {
        /// Horizontal position in device pixels.
        x: f32,
        /// Vertical position in device pixels.
        y: f32,
    },
}
