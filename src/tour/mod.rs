//! Scripted fly-throughs.
//!
//! A [`Tour`] is plain data: a list of keyframes, each covering an inclusive
//! range of 1-based frame numbers and carrying one [`TourAction`]. The
//! [`TourPlayer`] walks the frame counter and turns the keyframes active on
//! each frame into viewer commands.
//!
//! ```toml
//! end_frame = 120
//!
//! [[keyframes]]
//! start = 1
//! [keyframes.action]
//! kind = "set_pose"
//! position = [0.0, 2.0, 10.0]
//! target = [0.0, 2.0, 9.0]
//!
//! [[keyframes]]
//! start = 2
//! end = 100
//! action = { kind = "hold", directions = ["forward"] }
//! ```

mod player;

use std::path::Path;

use glam::Vec3;
pub use player::TourPlayer;
use serde::{Deserialize, Serialize};

use crate::camera::MoveDirection;
use crate::error::FlyviewError;

/// What a keyframe does on each frame it covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TourAction {
    /// Teleport the eye, keeping the target.
    SetPosition {
        /// New eye position.
        position: [f32; 3],
    },
    /// Re-aim at an absolute point, keeping the eye.
    SetTarget {
        /// New look-at target.
        target: [f32; 3],
    },
    /// Teleport the eye and re-aim in one step.
    SetPose {
        /// New eye position.
        position: [f32; 3],
        /// New look-at target.
        target: [f32; 3],
    },
    /// Move in each listed direction at the configured speed, as if the
    /// movement keys were held.
    Hold {
        /// Directions to move in, applied in list order.
        directions: Vec<MoveDirection>,
    },
}

impl TourAction {
    fn is_finite(&self) -> bool {
        match self {
            Self::SetPosition { position } => {
                Vec3::from_array(*position).is_finite()
            }
            Self::SetTarget { target } => {
                Vec3::from_array(*target).is_finite()
            }
            Self::SetPose { position, target } => {
                Vec3::from_array(*position).is_finite()
                    && Vec3::from_array(*target).is_finite()
            }
            Self::Hold { .. } => true,
        }
    }
}

/// A [`TourAction`] bound to an inclusive frame range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// First frame the action runs on (1-based).
    pub start: u32,
    /// Last frame the action runs on; defaults to `start`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<u32>,
    /// The action itself.
    pub action: TourAction,
}

impl Keyframe {
    /// Keyframe running on a single frame.
    #[must_use]
    pub fn at(frame: u32, action: TourAction) -> Self {
        Self {
            start: frame,
            end: None,
            action,
        }
    }

    /// Keyframe running on every frame of `start..=end`.
    #[must_use]
    pub fn span(start: u32, end: u32, action: TourAction) -> Self {
        Self {
            start,
            end: Some(end),
            action,
        }
    }

    /// Last frame covered.
    #[must_use]
    pub fn last_frame(&self) -> u32 {
        self.end.unwrap_or(self.start)
    }

    /// Whether `frame` falls inside this keyframe's range.
    #[must_use]
    pub fn covers(&self, frame: u32) -> bool {
        (self.start..=self.last_frame()).contains(&frame)
    }
}

/// A complete scripted sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    /// Final frame. Its keyframes still run, then playback stops.
    pub end_frame: u32,
    /// Keyframes in application order.
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
}

impl Tour {
    /// Build and validate a tour.
    pub fn new(
        end_frame: u32,
        keyframes: Vec<Keyframe>,
    ) -> Result<Self, FlyviewError> {
        let tour = Self {
            end_frame,
            keyframes,
        };
        tour.validate()?;
        Ok(tour)
    }

    /// Parse and validate a tour from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, FlyviewError> {
        let tour: Self = toml::from_str(content)
            .map_err(|e| FlyviewError::TourParse(e.to_string()))?;
        tour.validate()?;
        Ok(tour)
    }

    /// Load and validate a tour from a TOML file.
    pub fn load(path: &Path) -> Result<Self, FlyviewError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check frame ranges and coordinates.
    pub fn validate(&self) -> Result<(), FlyviewError> {
        if self.end_frame == 0 {
            return Err(FlyviewError::InvalidTour(
                "end_frame must be at least 1".into(),
            ));
        }
        for (index, keyframe) in self.keyframes.iter().enumerate() {
            let last = keyframe.last_frame();
            let problem = if keyframe.start == 0 {
                Some("frames start at 1".to_owned())
            } else if last < keyframe.start {
                Some(format!("ends at {last} before it starts"))
            } else if last > self.end_frame {
                Some(format!(
                    "runs to frame {last}, past end_frame {}",
                    self.end_frame
                ))
            } else if !keyframe.action.is_finite() {
                Some("has a non-finite coordinate".to_owned())
            } else if matches!(
                &keyframe.action,
                TourAction::Hold { directions } if directions.is_empty()
            ) {
                Some("holds no directions".to_owned())
            } else {
                None
            };

            if let Some(problem) = problem {
                return Err(FlyviewError::InvalidTour(format!(
                    "keyframe {index} (frame {}) {problem}",
                    keyframe.start
                )));
            }
        }
        Ok(())
    }

    /// Keyframes active on `frame`, in file order.
    pub fn active_at(&self, frame: u32) -> impl Iterator<Item = &Keyframe> {
        self.keyframes.iter().filter(move |k| k.covers(frame))
    }
}
