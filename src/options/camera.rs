use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::Viewpoint;
use crate::error::FlyviewError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial viewpoint and control sensitivities.
pub struct CameraOptions {
    /// Eye position at startup.
    #[schemars(title = "Initial Position")]
    pub initial_position: [f32; 3],
    /// Look-at target at startup. Only the look-at frame built during
    /// construction sees it: the viewpoint then snaps to yaw 0, pitch 0,
    /// so the live view always starts facing +X.
    #[schemars(title = "Initial Target")]
    pub initial_target: [f32; 3],
    /// Up hint; only fixes handedness, need not be orthogonal to the view.
    #[schemars(skip)]
    pub world_up: [f32; 3],
    /// Distance moved per frame while a movement key is held.
    #[schemars(
        title = "Move Speed",
        range(min = 0.05, max = 10.0),
        extend("step" = 0.05)
    )]
    pub move_speed: f32,
    /// Degrees of yaw/pitch per pixel of pointer motion.
    #[schemars(
        title = "Mouse Sensitivity",
        range(min = 0.01, max = 0.5),
        extend("step" = 0.01)
    )]
    pub mouse_sensitivity: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            initial_position: [-60.0, 10.0, -70.0],
            initial_target: [40.0, 10.0, -30.0],
            world_up: [0.0, 1.0, 0.0],
            move_speed: 1.0,
            mouse_sensitivity: 0.05,
        }
    }
}

impl CameraOptions {
    /// Check that the start pose yields a well-formed look-at frame.
    pub fn validate(&self) -> Result<(), FlyviewError> {
        let position = Vec3::from_array(self.initial_position);
        let target = Vec3::from_array(self.initial_target);
        let world_up = Vec3::from_array(self.world_up);

        let problem = if !(position.is_finite() && target.is_finite()) {
            Some("initial_position and initial_target must be finite")
        } else if !world_up.is_finite() || world_up == Vec3::ZERO {
            Some("world_up must be a finite non-zero vector")
        } else if position == target {
            Some("initial_position and initial_target coincide")
        } else if !world_up
            .cross(position - target)
            .normalize_or_zero()
            .is_normalized()
        {
            Some("world_up is parallel to the initial view direction")
        } else {
            None
        };

        match problem {
            Some(problem) => Err(FlyviewError::InvalidOptions(problem.into())),
            None => Ok(()),
        }
    }

    /// Build the startup viewpoint from the configured position, target and
    /// up hint.
    #[must_use]
    pub fn viewpoint(&self) -> Viewpoint {
        Viewpoint::new(
            Vec3::from_array(self.initial_position),
            Vec3::from_array(self.initial_target),
            Vec3::from_array(self.world_up),
        )
    }
}
