/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`ViewCommand`](crate::ViewCommand) values.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format (`"KeyW"`,
/// `"Tab"`, `"Escape"`), the same strings the keybinding options store.
///
/// # Example
///
/// ```
/// # use flyview::{InputEvent, InputProcessor};
/// let mut input = InputProcessor::new();
/// let moved = InputEvent::CursorMoved { x: 100.0, y: 200.0 };
/// let cmd = input.handle_event(&moved);
/// assert!(cmd.is_none()); // pointer is not grabbed yet
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key changed state.
    Key {
        /// Physical key string, e.g. `"KeyW"`.
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, growing downward.
        y: f32,
    },
    /// The window gained or lost keyboard focus.
    Focused(bool),
}

impl InputEvent {
    /// Shorthand for a key press.
    #[must_use]
    pub fn press(key: impl Into<String>) -> Self {
        Self::Key {
            key: key.into(),
            pressed: true,
        }
    }

    /// Shorthand for a key release.
    #[must_use]
    pub fn release(key: impl Into<String>) -> Self {
        Self::Key {
            key: key.into(),
            pressed: false,
        }
    }
}
