use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `MoveForward` → `"KeyW"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::MoveForward, "KeyW".into()),
            (KeyAction::MoveBackward, "KeyS".into()),
            (KeyAction::MoveLeft, "KeyA".into()),
            (KeyAction::MoveRight, "KeyD".into()),
            (KeyAction::MoveUp, "KeyZ".into()),
            (KeyAction::MoveDown, "KeyX".into()),
            (KeyAction::ToggleMouseGrab, "Tab".into()),
            (KeyAction::ReportPosition, "KeyP".into()),
            (KeyAction::ToggleTour, "KeyT".into()),
            (KeyAction::ToggleSun, "KeyL".into()),
            (KeyAction::ToggleLamp, "KeyK".into()),
            (KeyAction::RenderFill, "Digit1".into()),
            (KeyAction::RenderWireframe, "Digit2".into()),
            (KeyAction::RenderPoints, "Digit3".into()),
            (KeyAction::RenderSmoothFill, "Digit4".into()),
            (KeyAction::Quit, "Escape".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    ///
    /// When two actions share a key, the one kept is unspecified; the
    /// clash is logged.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let previous = self.key_to_action.insert(key.clone(), *action);
            if let Some(previous) = previous {
                log::warn!(
                    "key {key} bound to both {previous:?} and {action:?}"
                );
            }
        }
    }

    /// Bind `action` to `key`, replacing its previous key.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}
