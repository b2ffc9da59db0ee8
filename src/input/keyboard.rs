use serde::{Deserialize, Serialize};

use crate::camera::MoveDirection;
use crate::options::RenderMode;

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// toggle_mouse_grab = "Tab"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move along the view direction while held.
    MoveForward,
    /// Move against the view direction while held.
    MoveBackward,
    /// Strafe left while held.
    MoveLeft,
    /// Strafe right while held.
    MoveRight,
    /// Rise along the camera up vector while held.
    MoveUp,
    /// Sink along the camera up vector while held.
    MoveDown,
    /// Capture or release the pointer for mouse look.
    ToggleMouseGrab,
    /// Log the current position and target.
    ReportPosition,
    /// Start or stop the scripted tour.
    ToggleTour,
    /// Switch the sun light on or off.
    ToggleSun,
    /// Switch the lamp lights on or off.
    ToggleLamp,
    /// Render filled polygons.
    RenderFill,
    /// Render polygon edges.
    RenderWireframe,
    /// Render polygon vertices.
    RenderPoints,
    /// Render filled polygons with line smoothing.
    RenderSmoothFill,
    /// Ask the host to close the viewer.
    Quit,
}

impl KeyAction {
    /// The movement this action drives while its key is held, if any.
    #[must_use]
    pub fn movement(self) -> Option<MoveDirection> {
        match self {
            Self::MoveForward => Some(MoveDirection::Forward),
            Self::MoveBackward => Some(MoveDirection::Backward),
            Self::MoveLeft => Some(MoveDirection::Left),
            Self::MoveRight => Some(MoveDirection::Right),
            Self::MoveUp => Some(MoveDirection::Up),
            Self::MoveDown => Some(MoveDirection::Down),
            _ => None,
        }
    }

    /// The render mode this action selects, if any.
    #[must_use]
    pub fn render_mode(self) -> Option<RenderMode> {
        match self {
            Self::RenderFill => Some(RenderMode::Fill),
            Self::RenderWireframe => Some(RenderMode::Wireframe),
            Self::RenderPoints => Some(RenderMode::Points),
            Self::RenderSmoothFill => Some(RenderMode::SmoothFill),
            _ => None,
        }
    }
}
