use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Playback", inline)]
#[serde(default)]
/// Frame pacing and tour start-up behavior.
pub struct PlaybackOptions {
    /// Frame rate cap (0 = unlimited).
    #[schemars(title = "Target FPS", range(min = 0, max = 240))]
    pub target_fps: u32,
    /// Start the scripted tour as soon as one is loaded.
    #[schemars(title = "Autoplay Tour")]
    pub autoplay_tour: bool,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            target_fps: 60,
            autoplay_tour: true,
        }
    }
}
