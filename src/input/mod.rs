//! Input handling: event types, key actions, pointer state, and the input
//! processor that converts raw window events into viewer commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable viewer actions.
pub mod keyboard;
/// Pointer grab and first-sample tracking.
pub(crate) mod mouse;
/// Converts raw events into viewer commands.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
