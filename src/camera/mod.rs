//! First-person viewpoint for 3D scene viewing.
//!
//! Provides the viewpoint controller (move, rotate, scripted overrides),
//! its six movement directions, and the GPU uniform the view transform is
//! packed into.

/// Viewpoint state, orientation basis and view matrix.
pub mod core;
/// Discrete movement directions.
pub mod direction;
/// GPU uniform holding the per-frame view transform.
pub mod uniform;

pub use self::core::{Basis, Viewpoint, PITCH_LIMIT};
pub use direction::MoveDirection;
pub use uniform::ViewUniform;
