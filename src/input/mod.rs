//! Input handling: event types, key state, and the dispatcher that
//! converts raw window events into engine commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable actions and held/pressed key tracking.
pub mod keyboard;
/// Converts raw events into engine commands.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::{KeyAction, KeyboardState};
pub use processor::InputDispatcher;
