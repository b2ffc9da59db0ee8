//! Converts raw platform events into viewer commands.
//!
//! The `InputProcessor` owns all transient input state (held movement keys,
//! pointer grab, last cursor sample, accumulated yaw/pitch) and the
//! key-binding map. It is the only thing that sits between raw window
//! events and [`ViewerContext::execute`](crate::ViewerContext::execute).

use std::collections::HashSet;

use super::event::InputEvent;
use super::keyboard::KeyAction;
use super::mouse::PointerState;
use crate::camera::{MoveDirection, PITCH_LIMIT};
use crate::engine::command::ViewCommand;
use crate::options::{KeybindingOptions, Options};

const DEFAULT_SENSITIVITY: f32 = 0.05;

/// Converts raw window events into [`ViewCommand`]s.
///
/// Mouse look is absolute: pointer motion is scaled by the sensitivity and
/// added to running yaw/pitch totals, and each motion emits a
/// [`ViewCommand::Rotate`] carrying the totals.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input.handle_event(&event) {
///     context.execute(cmd);
/// }
/// // Once per frame:
/// for cmd in input.held_movement(speed) {
///     context.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Pointer grab/focus and first-sample tracking.
    pointer: PointerState,
    /// Movement directions whose keys are down.
    held: HashSet<MoveDirection>,
    /// Accumulated yaw, degrees.
    yaw: f32,
    /// Accumulated pitch, degrees, kept within the pitch limit.
    pitch: f32,
    /// Degrees per pixel of pointer motion.
    sensitivity: f32,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings and sensitivity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pointer: PointerState::new(),
            held: HashSet::new(),
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: DEFAULT_SENSITIVITY,
            key_bindings: KeybindingOptions::default(),
        }
    }

    /// Create a processor with the sensitivity and bindings from `options`.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            sensitivity: options.camera.mouse_sensitivity,
            key_bindings: options.keybindings.clone(),
            ..Self::new()
        }
    }

    /// Reset the yaw/pitch totals, typically to the viewpoint's current
    /// angles so the next pointer motion continues from there.
    pub fn seed_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Accumulated `(yaw, pitch)` in degrees.
    #[must_use]
    pub fn orientation(&self) -> (f32, f32) {
        (self.yaw, self.pitch)
    }

    /// Degrees per pixel of pointer motion.
    #[must_use]
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Change the pointer sensitivity.
    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    /// Whether the pointer is captured for mouse look.
    #[must_use]
    pub fn is_grabbed(&self) -> bool {
        self.pointer.grabbed
    }

    /// Whether the key for `direction` is currently held.
    #[must_use]
    pub fn is_held(&self, direction: MoveDirection) -> bool {
        self.held.contains(&direction)
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Forget every held movement key.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<ViewCommand> {
        match event {
            InputEvent::Key { key, pressed } => {
                self.handle_key(key, *pressed)
            }
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(*x, *y)
            }
            InputEvent::Focused(focused) => {
                self.pointer.set_focused(*focused);
                if !*focused {
                    // Releases are not delivered while unfocused.
                    self.release_all();
                }
                None
            }
        }
    }

    /// One [`ViewCommand::Move`] per held direction, in
    /// [`MoveDirection::ALL`] order.
    pub fn held_movement(
        &self,
        speed: f32,
    ) -> impl Iterator<Item = ViewCommand> + '_ {
        MoveDirection::ALL
            .into_iter()
            .filter(|direction| self.held.contains(direction))
            .map(move |direction| ViewCommand::Move { direction, speed })
    }

    fn handle_key(&mut self, key: &str, pressed: bool) -> Option<ViewCommand> {
        let action = self.key_bindings.lookup(key)?;

        if let Some(direction) = action.movement() {
            if pressed {
                let _ = self.held.insert(direction);
            } else {
                let _ = self.held.remove(&direction);
            }
            return None;
        }

        if !pressed {
            return None;
        }
        if let Some(mode) = action.render_mode() {
            return Some(ViewCommand::SetRenderMode { mode });
        }

        match action {
            KeyAction::ToggleMouseGrab => Some(ViewCommand::MouseGrabChanged {
                grabbed: self.pointer.toggle_grab(),
            }),
            KeyAction::ReportPosition => Some(ViewCommand::ReportPosition),
            KeyAction::ToggleTour => Some(ViewCommand::ToggleTour),
            KeyAction::ToggleSun => Some(ViewCommand::ToggleSun),
            KeyAction::ToggleLamp => Some(ViewCommand::ToggleLamp),
            KeyAction::Quit => Some(ViewCommand::Quit),
            _ => None,
        }
    }

    /// Cursor moved: accumulate the look offset into yaw/pitch.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<ViewCommand> {
        let offset = self.pointer.look_offset(x, y)? * self.sensitivity;
        self.yaw += offset.x;
        self.pitch = (self.pitch + offset.y).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        Some(ViewCommand::Rotate {
            yaw: self.yaw,
            pitch: self.pitch,
        })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
