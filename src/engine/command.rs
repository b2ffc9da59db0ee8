//! The viewer's complete interactive vocabulary.
//!
//! Every operation on the viewer, whether triggered by a held key, pointer
//! motion, a tour keyframe, or a programmatic call, is represented as a
//! `ViewCommand`. Consumers construct commands and pass them to
//! [`ViewerContext::execute`](super::ViewerContext::execute).

use glam::Vec3;

use crate::camera::MoveDirection;
use crate::options::RenderMode;

/// A discrete or parameterized operation the viewer can perform.
///
/// ```ignore
/// context.execute(ViewCommand::Move {
///     direction: MoveDirection::Forward,
///     speed: 1.0,
/// });
/// context.execute(ViewCommand::Rotate { yaw: -90.0, pitch: 15.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Displace the viewpoint.
    Move {
        /// Direction of travel.
        direction: MoveDirection,
        /// Distance for this command.
        speed: f32,
    },

    /// Orient the viewpoint to absolute angles.
    Rotate {
        /// Absolute yaw in degrees.
        yaw: f32,
        /// Absolute pitch in degrees (clamped by the viewpoint).
        pitch: f32,
    },

    /// Overwrite the eye position.
    SetPosition {
        /// New eye position.
        position: Vec3,
    },

    /// Overwrite the look-at target.
    SetTarget {
        /// New look-at target.
        target: Vec3,
    },

    // ── Host ────────────────────────────────────────────────────────
    /// Pointer capture changed; the host should update its cursor mode.
    MouseGrabChanged {
        /// Whether the pointer is now captured.
        grabbed: bool,
    },

    /// Log the current position and target.
    ReportPosition,

    /// Start or stop the scripted tour.
    ToggleTour,

    // ── Display ─────────────────────────────────────────────────────
    /// Switch the sun light on or off.
    ToggleSun,

    /// Switch the lamp lights on or off.
    ToggleLamp,

    /// Change how the host rasterizes polygons.
    SetRenderMode {
        /// New polygon mode.
        mode: RenderMode,
    },

    /// Ask the host to close the viewer.
    Quit,
}
