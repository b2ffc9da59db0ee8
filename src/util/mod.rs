//! Shared utilities for host loops.

/// Frame pacing with a smoothed FPS readout.
pub mod frame_timing;
