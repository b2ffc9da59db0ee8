use glam::Vec3;

use super::{Tour, TourAction};
use crate::engine::command::ViewCommand;

/// Plays a [`Tour`] one frame per [`advance`](Self::advance) call.
///
/// The counter is incremented before keyframes are evaluated, so the first
/// advanced frame is frame 1. On `end_frame` the frame's keyframes still
/// run; then the player stops and rewinds to 0.
#[derive(Debug, Clone)]
pub struct TourPlayer {
    tour: Tour,
    frame: u32,
    active: bool,
}

impl TourPlayer {
    /// Stopped player for `tour`.
    #[must_use]
    pub fn new(tour: Tour) -> Self {
        Self {
            tour,
            frame: 0,
            active: false,
        }
    }

    /// Start from frame 1 on the next advance.
    pub fn start(&mut self) {
        log::info!(
            "starting tour: {} keyframes over {} frames",
            self.tour.keyframes.len(),
            self.tour.end_frame
        );
        self.frame = 0;
        self.active = true;
    }

    /// Stop and rewind.
    pub fn stop(&mut self) {
        if self.active {
            log::info!("tour stopped at frame {}", self.frame);
        }
        self.frame = 0;
        self.active = false;
    }

    /// Start when stopped, stop when playing.
    pub fn toggle(&mut self) {
        if self.active {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Whether the tour is playing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Last evaluated frame (0 when stopped).
    #[must_use]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// The tour being played.
    #[must_use]
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Step one frame and return the commands its keyframes produce.
    /// `speed` is the distance per frame for `hold` keyframes.
    ///
    /// Returns nothing while stopped.
    pub fn advance(&mut self, speed: f32) -> Vec<ViewCommand> {
        if !self.active {
            return Vec::new();
        }
        self.frame += 1;

        let mut commands = Vec::new();
        for keyframe in self.tour.active_at(self.frame) {
            if keyframe.start == self.frame {
                log::debug!("tour frame {}: {:?}", self.frame, keyframe.action);
            }
            push_commands(&keyframe.action, speed, &mut commands);
        }

        if self.frame >= self.tour.end_frame {
            log::info!("tour finished after {} frames", self.frame);
            self.frame = 0;
            self.active = false;
        }
        commands
    }
}

fn push_commands(
    action: &TourAction,
    speed: f32,
    commands: &mut Vec<ViewCommand>,
) {
    match action {
        TourAction::SetPosition { position } => {
            commands.push(ViewCommand::SetPosition {
                position: Vec3::from_array(*position),
            });
        }
        TourAction::SetTarget { target } => {
            commands.push(ViewCommand::SetTarget {
                target: Vec3::from_array(*target),
            });
        }
        TourAction::SetPose { position, target } => {
            commands.push(ViewCommand::SetPosition {
                position: Vec3::from_array(*position),
            });
            commands.push(ViewCommand::SetTarget {
                target: Vec3::from_array(*target),
            });
        }
        TourAction::Hold { directions } => {
            commands.extend(
                directions
                    .iter()
                    .map(|&direction| ViewCommand::Move { direction, speed }),
            );
        }
    }
}
