use std::collections::HashSet;

use glam::{Mat4, Vec3};

use super::command::ViewCommand;
use crate::camera::{MoveDirection, ViewUniform, Viewpoint};
use crate::input::{InputEvent, InputProcessor};
use crate::options::{DisplayOptions, Options};
use crate::tour::{Tour, TourPlayer};

/// Everything the host loop needs to drive the view: the viewpoint, the
/// input processor, an optional tour, and the options they were built
/// from.
///
/// Owned by the host and passed by `&mut` to event and frame callbacks.
pub struct ViewerContext {
    viewpoint: Viewpoint,
    input: InputProcessor,
    tour: Option<TourPlayer>,
    options: Options,
    /// Object transform the uniform's normal matrix is built for.
    model: Mat4,
    uniform: ViewUniform,
    mouse_grabbed: bool,
    quit_requested: bool,
}

impl ViewerContext {
    /// Build the viewpoint and input processor from `options`.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let viewpoint = options.camera.viewpoint();
        let mut input = InputProcessor::from_options(&options);
        input.seed_orientation(viewpoint.yaw(), viewpoint.pitch());

        let model = Mat4::IDENTITY;
        let mut uniform = ViewUniform::new();
        uniform.update(&viewpoint, model);

        Self {
            viewpoint,
            input,
            tour: None,
            options,
            model,
            uniform,
            mouse_grabbed: false,
            quit_requested: false,
        }
    }

    /// Attach a tour, starting it right away when
    /// `playback.autoplay_tour` is set.
    #[must_use]
    pub fn with_tour(mut self, tour: Tour) -> Self {
        let mut player = TourPlayer::new(tour);
        if self.options.playback.autoplay_tour {
            player.start();
        }
        self.tour = Some(player);
        self
    }

    /// Apply one command.
    pub fn execute(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::Move { direction, speed } => {
                self.viewpoint.translate(direction, speed);
            }
            ViewCommand::Rotate { yaw, pitch } => {
                self.viewpoint.rotate(yaw, pitch);
            }
            ViewCommand::SetPosition { position } => {
                self.viewpoint.set_position(position);
            }
            ViewCommand::SetTarget { target } => {
                self.viewpoint.set_target(target);
            }
            ViewCommand::MouseGrabChanged { grabbed } => {
                log::debug!("mouse grab: {grabbed}");
                self.mouse_grabbed = grabbed;
            }
            ViewCommand::ReportPosition => {
                let Vec3 { x, y, z } = self.viewpoint.position();
                let target = self.viewpoint.target();
                log::info!(
                    "position {x:.2} {y:.2} {z:.2} target {:.2} {:.2} {:.2}",
                    target.x,
                    target.y,
                    target.z
                );
            }
            ViewCommand::ToggleTour => match &mut self.tour {
                Some(player) => player.toggle(),
                None => log::warn!("no tour loaded"),
            },
            ViewCommand::ToggleSun => {
                let display = &mut self.options.display;
                display.sun_on = !display.sun_on;
                log::debug!("sun: {}", display.sun_on);
            }
            ViewCommand::ToggleLamp => {
                let display = &mut self.options.display;
                display.lamp_on = !display.lamp_on;
                log::debug!("lamp: {}", display.lamp_on);
            }
            ViewCommand::SetRenderMode { mode } => {
                log::debug!("render mode: {mode:?}");
                self.options.display.render_mode = mode;
            }
            ViewCommand::Quit => self.quit_requested = true,
        }
    }

    /// Feed a raw input event through the input processor and execute
    /// the resulting command. Returns `true` if a command was produced.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match self.input.handle_event(event) {
            Some(command) => {
                self.execute(command);
                true
            }
            None => false,
        }
    }

    /// Advance one frame: play the tour's keyframes for this frame, apply
    /// held movement keys, and refresh the view uniform.
    ///
    /// Tour holds and held keys share one set of moving directions, so a
    /// direction requested by both still moves once per frame.
    pub fn update(&mut self) -> &ViewUniform {
        let speed = self.options.camera.move_speed;

        let tour_commands = match &mut self.tour {
            Some(player) => player.advance(speed),
            None => Vec::new(),
        };
        let mut moving = HashSet::new();
        for command in tour_commands {
            match command {
                ViewCommand::Move { direction, .. } => {
                    let _ = moving.insert(direction);
                }
                other => self.execute(other),
            }
        }
        for command in self.input.held_movement(speed) {
            if let ViewCommand::Move { direction, .. } = command {
                let _ = moving.insert(direction);
            }
        }
        for direction in MoveDirection::ALL {
            if moving.contains(&direction) {
                self.viewpoint.translate(direction, speed);
            }
        }

        self.uniform.update(&self.viewpoint, self.model);
        &self.uniform
    }

    /// Replace the options. The viewpoint keeps its pose; sensitivity and
    /// keybindings take effect immediately.
    pub fn set_options(&mut self, options: Options) {
        self.input.set_sensitivity(options.camera.mouse_sensitivity);
        *self.input.key_bindings_mut() = options.keybindings.clone();
        self.options = options;
    }

    /// Set the object transform used for the normal matrix.
    pub fn set_model(&mut self, model: Mat4) {
        self.model = model;
        self.uniform.update(&self.viewpoint, self.model);
    }

    /// The viewpoint.
    #[must_use]
    pub fn viewpoint(&self) -> &Viewpoint {
        &self.viewpoint
    }

    /// Current view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.viewpoint.view_matrix()
    }

    /// Uniform as of the last [`update`](Self::update).
    #[must_use]
    pub fn uniform(&self) -> &ViewUniform {
        &self.uniform
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Read-only access to the input processor.
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// The tour player, if a tour is attached.
    #[must_use]
    pub fn tour(&self) -> Option<&TourPlayer> {
        self.tour.as_ref()
    }

    /// Whether a tour is attached and playing.
    #[must_use]
    pub fn is_tour_active(&self) -> bool {
        self.tour.as_ref().is_some_and(TourPlayer::is_active)
    }

    /// Light toggles and polygon mode the host should render with.
    #[must_use]
    pub fn display(&self) -> &DisplayOptions {
        &self.options.display
    }

    /// Whether the pointer is captured for mouse look.
    #[must_use]
    pub fn mouse_grabbed(&self) -> bool {
        self.mouse_grabbed
    }

    /// Whether a quit was requested.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::RenderMode;
    use crate::tour::{Keyframe, TourAction};

    fn origin_options() -> Options {
        let mut options = Options::default();
        options.camera.initial_position = [0.0, 0.0, 5.0];
        options.camera.initial_target = [0.0, 0.0, 0.0];
        options
    }

    fn assert_vec_eq(actual: Vec3, expected: Vec3) {
        assert!(
            actual.abs_diff_eq(expected, 1e-5),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn new_context_publishes_initial_view() {
        let context = ViewerContext::new(origin_options());
        assert_eq!(
            context.uniform().view,
            context.view_matrix().to_cols_array_2d()
        );
        assert_vec_eq(context.viewpoint().front(), Vec3::X);
        assert_eq!(context.input().orientation(), (0.0, 0.0));
    }

    #[test]
    fn held_key_moves_once_per_update() {
        let mut context = ViewerContext::new(origin_options());
        assert!(!context.handle_input(&InputEvent::press("KeyW")));

        let _ = context.update();
        let _ = context.update();
        assert_vec_eq(context.viewpoint().position(), Vec3::new(2.0, 0.0, 5.0));

        let _ = context.handle_input(&InputEvent::release("KeyW"));
        let uniform = *context.update();
        assert_eq!(uniform.position, [2.0, 0.0, 5.0]);
    }

    #[test]
    fn mouse_look_rotates_viewpoint() {
        let mut context = ViewerContext::new(origin_options());
        assert!(context.handle_input(&InputEvent::press("Tab")));
        assert!(context.mouse_grabbed());

        let _ =
            context.handle_input(&InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        assert!(context.handle_input(&InputEvent::CursorMoved {
            x: -1800.0,
            y: 0.0,
        }));
        // -1800px at 0.05 degrees per pixel.
        assert_eq!(context.viewpoint().yaw(), -90.0);
        assert_vec_eq(context.viewpoint().front(), Vec3::NEG_Z);
    }

    #[test]
    fn tour_overrides_then_holds() {
        let tour = Tour::new(
            3,
            vec![
                Keyframe::at(
                    1,
                    TourAction::SetPose {
                        position: [10.0, 0.0, 0.0],
                        target: [11.0, 0.0, 0.0],
                    },
                ),
                Keyframe::span(
                    2,
                    3,
                    TourAction::Hold {
                        directions: vec![MoveDirection::Up],
                    },
                ),
            ],
        )
        .unwrap();
        let mut context = ViewerContext::new(origin_options()).with_tour(tour);
        assert!(context.is_tour_active());

        let _ = context.update();
        assert_eq!(context.viewpoint().position(), Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(context.viewpoint().target(), Vec3::new(11.0, 0.0, 0.0));

        let _ = context.update();
        let _ = context.update();
        let viewpoint = context.viewpoint();
        assert_vec_eq(viewpoint.position(), Vec3::new(10.0, 2.0, 0.0));
        assert_vec_eq(viewpoint.target(), Vec3::new(11.0, 2.0, 0.0));
        assert!(!context.is_tour_active());
    }

    #[test]
    fn tour_hold_and_held_key_move_once() {
        let tour = Tour::new(
            1,
            vec![Keyframe::at(
                1,
                TourAction::Hold {
                    directions: vec![MoveDirection::Forward],
                },
            )],
        )
        .unwrap();
        let mut context = ViewerContext::new(origin_options()).with_tour(tour);
        let _ = context.handle_input(&InputEvent::press("KeyW"));

        let _ = context.update();
        assert_vec_eq(context.viewpoint().position(), Vec3::new(1.0, 0.0, 5.0));

        let _ = context.update();
        assert_vec_eq(context.viewpoint().position(), Vec3::new(2.0, 0.0, 5.0));
    }

    #[test]
    fn display_keys_update_host_state() {
        let mut context = ViewerContext::new(origin_options());
        assert!(!context.display().sun_on);
        assert!(context.handle_input(&InputEvent::press("KeyL")));
        assert!(context.display().sun_on);
        assert!(context.handle_input(&InputEvent::press("KeyK")));
        assert!(context.display().lamp_on);
        assert!(context.handle_input(&InputEvent::press("KeyL")));
        assert!(!context.display().sun_on);

        assert!(context.handle_input(&InputEvent::press("Digit2")));
        assert_eq!(context.display().render_mode, RenderMode::Wireframe);
        context.execute(ViewCommand::SetRenderMode {
            mode: RenderMode::Points,
        });
        assert_eq!(context.options().display.render_mode, RenderMode::Points);
    }

    #[test]
    fn tour_waits_without_autoplay() {
        let mut options = origin_options();
        options.playback.autoplay_tour = false;
        let tour = Tour::new(1, Vec::new()).unwrap();
        let mut context = ViewerContext::new(options).with_tour(tour);
        assert!(!context.is_tour_active());

        assert!(context.handle_input(&InputEvent::press("KeyT")));
        assert!(context.is_tour_active());
    }

    #[test]
    fn toggle_without_tour_is_harmless() {
        let mut context = ViewerContext::new(origin_options());
        context.execute(ViewCommand::ToggleTour);
        assert!(context.tour().is_none());
        context.execute(ViewCommand::ReportPosition);
    }

    #[test]
    fn quit_is_recorded() {
        let mut context = ViewerContext::new(origin_options());
        assert!(!context.quit_requested());
        assert!(context.handle_input(&InputEvent::press("Escape")));
        assert!(context.quit_requested());
    }

    #[test]
    fn set_options_rebinds_keys() {
        let mut context = ViewerContext::new(origin_options());
        let mut options = origin_options();
        options.keybindings.bind(crate::input::KeyAction::Quit, "KeyQ");
        context.set_options(options);

        assert!(context.handle_input(&InputEvent::press("KeyQ")));
        assert!(context.quit_requested());
    }

    #[test]
    fn model_transform_feeds_normal_matrix() {
        let mut context = ViewerContext::new(origin_options());
        let before = context.uniform().normal_matrix;
        context.set_model(Mat4::from_scale(Vec3::splat(2.0)));
        assert_ne!(context.uniform().normal_matrix, before);
    }
}
