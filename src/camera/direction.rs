use serde::{Deserialize, Serialize};

/// Discrete displacement direction for [`Viewpoint::translate`].
///
/// Serializes as `snake_case` so tour files stay readable:
/// ```toml
/// action = { kind = "hold", directions = ["forward", "right"] }
/// ```
///
/// [`Viewpoint::translate`]: super::Viewpoint::translate
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    /// Along the view direction.
    Forward,
    /// Against the view direction.
    Backward,
    /// Along the negative lateral axis.
    Left,
    /// Along the lateral axis `front × up`.
    Right,
    /// Along the camera up vector.
    Up,
    /// Against the camera up vector.
    Down,
}

impl MoveDirection {
    /// Every direction, in the order held keys are applied each frame.
    pub const ALL: [Self; 6] = [
        Self::Forward,
        Self::Backward,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
    ];

    /// The direction pointing the other way.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}
