/// Platform-agnostic input events.
///
/// These are fed into an [`InputDispatcher`](super::InputDispatcher), which
/// tracks key state and turns it into
/// [`BusCommand`](crate::engine::command::BusCommand) values.
///
/// # Example
///
/// ```
/// use busview::input::{InputDispatcher, InputEvent};
/// use busview::options::KeybindingOptions;
///
/// let mut dispatcher = InputDispatcher::new(KeybindingOptions::default());
/// let _ = dispatcher.handle_event(&InputEvent::Key {
///     key: "KeyM".to_owned(),
///     pressed: true,
/// });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Physical key pressed or released.
    Key {
        /// `winit::keyboard::KeyCode` debug string, e.g. `"KeyW"`.
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
    /// The window lost keyboard focus; every held key is released.
    FocusLost,
}
