use glam::Vec2;

/// Tracks pointer grab, window focus and the last cursor sample.
pub(crate) struct PointerState {
    /// Whether the pointer is captured for mouse look.
    pub(crate) grabbed: bool,
    /// Whether the window has focus.
    pub(crate) focused: bool,
    /// Last cursor sample; `None` until the first sample after a grab or
    /// a focus change.
    last: Option<Vec2>,
}

impl PointerState {
    /// Ungrabbed, focused, no sample yet.
    pub(crate) fn new() -> Self {
        Self {
            grabbed: false,
            focused: true,
            last: None,
        }
    }

    /// Flip the grab state. Returns the new state.
    ///
    /// Grabbing discards the last sample so the first motion after it does
    /// not produce a jump.
    pub(crate) fn toggle_grab(&mut self) -> bool {
        self.grabbed = !self.grabbed;
        if self.grabbed {
            self.last = None;
        }
        self.grabbed
    }

    /// Record a focus change. The cursor may move anywhere while the
    /// window is in the background, so the last sample is discarded.
    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.last = None;
    }

    /// Record a cursor sample and return the look offset since the previous
    /// one: `x` grows rightward, `y` grows upward.
    ///
    /// Returns `None` when mouse look is inactive or this is the first
    /// sample since the grab or focus change.
    pub(crate) fn look_offset(&mut self, x: f32, y: f32) -> Option<Vec2> {
        if !(self.grabbed && self.focused) {
            return None;
        }
        let current = Vec2::new(x, y);
        let previous = self.last.replace(current)?;
        Some(Vec2::new(current.x - previous.x, previous.y - current.y))
    }
}
