use web_time::{Duration, Instant};

/// Frame pacing with a smoothed FPS readout.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Timestamp of the last finished frame
    last_frame: Instant,
    /// Frames finished since creation
    frames: u64,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Weight of the newest sample (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            frames: 0,
            smoothed_fps: if target_fps > 0 { target_fps as f32 } else { 60.0 },
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last frame to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.time_until_next_frame().is_zero()
    }

    /// How long to wait before the next frame is due (zero when unlimited
    /// or already late).
    #[must_use]
    pub fn time_until_next_frame(&self) -> Duration {
        if self.target_fps == 0 {
            return Duration::ZERO;
        }
        self.min_frame_duration
            .saturating_sub(self.last_frame.elapsed())
    }

    /// Call after rendering to update timing. Returns the frame's duration
    /// in seconds.
    pub fn end_frame(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frames += 1;

        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Frames finished so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
