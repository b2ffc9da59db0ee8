use glam::{Mat4, Vec3};

use super::direction::MoveDirection;

/// Pitch is clamped to `±PITCH_LIMIT` degrees; ±90 would collapse the
/// look direction onto the up axis.
pub const PITCH_LIMIT: f32 = 89.0;

/// Pole of the yaw/pitch convention. Rotation keeps its horizon level
/// against this axis whatever up hint the viewpoint was built with.
const ROTATION_UP: Vec3 = Vec3::Y;

/// Orthonormal orientation frame of a viewpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// Unit front vector.
    pub front: Vec3,
    /// Unit right vector.
    pub right: Vec3,
    /// Unit up vector, orthogonal to `front` and `right`.
    pub up: Vec3,
}

impl Basis {
    /// Frame of an eye at `position` looking at `target`, in look-at form:
    /// `front` points from the target back to the eye (eye-space +Z), and
    /// `up` is re-derived so it is orthogonal to `front` and `right`.
    ///
    /// `up_hint` only picks the handedness of the frame; it does not need
    /// to be orthogonal to the look direction.
    #[must_use]
    pub fn look_at(position: Vec3, target: Vec3, up_hint: Vec3) -> Self {
        debug_assert!(
            position != target,
            "position and target coincide at {position}"
        );
        debug_assert!(up_hint != Vec3::ZERO, "up hint is the zero vector");
        let front = (position - target).normalize();
        let right = up_hint.cross(front).normalize();
        debug_assert!(
            right.is_finite(),
            "up hint {up_hint} is parallel to the look direction"
        );
        let up = front.cross(right);
        Self { front, right, up }
    }

    /// Frame whose `front` is the viewing direction itself, with `right`
    /// and `up` locked to the horizon defined by `world_up`.
    ///
    /// `(right, up, -front)` is right-handed, matching
    /// [`Mat4::look_at_rh`]. `direction` must not be parallel to
    /// `world_up`.
    #[must_use]
    pub fn from_view_direction(direction: Vec3, world_up: Vec3) -> Self {
        let front = direction.normalize();
        let right = front.cross(world_up).normalize();
        let up = right.cross(front);
        Self { front, right, up }
    }
}

/// First-person viewpoint: eye position, absolute look-at target, and the
/// orientation basis derived from them.
///
/// All operations are total. Pitch saturates at [`PITCH_LIMIT`] instead of
/// being rejected, and a degenerate lateral axis turns a move into a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewpoint {
    position: Vec3,
    target: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    /// Normalized up hint the look-at frame was built with.
    world_up: Vec3,
    /// Last yaw passed to [`rotate`](Self::rotate), degrees.
    yaw: f32,
    /// Last pitch passed to [`rotate`](Self::rotate) after clamping.
    pitch: f32,
}

impl Viewpoint {
    /// Create a viewpoint at `position` looking at `target`.
    ///
    /// The look-at frame is computed first (see [`Basis::look_at`]), then
    /// `rotate(0, 0)` re-derives front and target from the yaw/pitch
    /// convention so the stored angles and the basis agree from the first
    /// frame on.
    #[must_use]
    pub fn new(position: Vec3, target: Vec3, world_up: Vec3) -> Self {
        let basis = Basis::look_at(position, target, world_up);
        let mut viewpoint = Self {
            position,
            target,
            front: basis.front,
            right: basis.right,
            up: basis.up,
            world_up: world_up.normalize(),
            yaw: 0.0,
            pitch: 0.0,
        };
        viewpoint.rotate(0.0, 0.0);
        viewpoint
    }

    /// Right-handed look-at view matrix from position, target and up.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Displace position and target by `speed` along `direction`.
    ///
    /// `speed` is a distance for this call; the caller folds in frame time
    /// and sensitivity. The look offset `target - position` is unchanged.
    pub fn translate(&mut self, direction: MoveDirection, speed: f32) {
        // Recomputed each call so it follows the current front vector.
        let lateral = self.front.cross(self.up).normalize_or_zero();
        let vertical = self.up.normalize_or_zero();

        let displacement = match direction {
            MoveDirection::Forward => self.front * speed,
            MoveDirection::Backward => -self.front * speed,
            MoveDirection::Right => lateral * speed,
            MoveDirection::Left => -lateral * speed,
            MoveDirection::Up => vertical * speed,
            MoveDirection::Down => -vertical * speed,
        };

        self.position += displacement;
        self.target += displacement;
    }

    /// Orient the view to absolute `yaw` and `pitch`, both in degrees.
    ///
    /// These are running totals, not deltas. Pitch is clamped to
    /// `±PITCH_LIMIT`. The target is placed one unit along the new look
    /// direction and the basis is re-derived against world +Y, the pole of
    /// the yaw/pitch convention, so the clamp keeps it well-formed for any
    /// up hint.
    pub fn rotate(&mut self, yaw: f32, pitch: f32) {
        let pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        let (yaw_sin, yaw_cos) = yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = pitch.to_radians().sin_cos();

        let direction =
            Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos);

        let basis = Basis::from_view_direction(direction, ROTATION_UP);
        self.target = self.position + direction;
        self.front = basis.front;
        self.right = basis.right;
        self.up = basis.up;
        self.yaw = yaw;
        self.pitch = pitch;
    }

    /// Overwrite the eye position. Nothing else is recomputed.
    pub fn set_position(&mut self, position: Vec3) {
        debug_assert!(position.is_finite(), "non-finite position {position}");
        self.position = position;
    }

    /// Overwrite the look-at target. Nothing else is recomputed.
    pub fn set_target(&mut self, target: Vec3) {
        debug_assert!(target.is_finite(), "non-finite target {target}");
        self.target = target;
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Look-at target in world space.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Unit view direction.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit right vector.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit up vector used by [`view_matrix`](Self::view_matrix).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Current orientation frame.
    #[must_use]
    pub fn basis(&self) -> Basis {
        Basis {
            front: self.front,
            right: self.right,
            up: self.up,
        }
    }

    /// Normalized world up reference.
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Yaw of the last rotate, degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Clamped pitch of the last rotate, degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }
}
