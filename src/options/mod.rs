//! Viewer options with TOML preset support.
//!
//! Camera start-up pose and sensitivities, display toggles, keybindings
//! and playback pacing are consolidated here. Options serialize to/from
//! TOML so a viewer can be configured without recompiling.

mod camera;
mod display;
mod keybindings;
mod playback;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::{DisplayOptions, RenderMode};
pub use keybindings::KeybindingOptions;
pub use playback::PlaybackOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FlyviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Initial viewpoint and control sensitivities.
    pub camera: CameraOptions,
    /// Light toggles and polygon mode.
    pub display: DisplayOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Frame pacing and tour start-up behavior.
    pub playback: PlaybackOptions,
}

impl Options {
    /// Generate JSON Schema describing the user-facing options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse and validate options from TOML text. Missing fields use
    /// defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, FlyviewError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| FlyviewError::OptionsParse(e.to_string()))?;
        options.validate()?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Reject options a viewer cannot start from.
    pub fn validate(&self) -> Result<(), FlyviewError> {
        self.camera.validate()
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FlyviewError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FlyviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FlyviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(FlyviewError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
move_speed = 2.5
initial_position = [0.0, 0.0, 5.0]
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.camera.move_speed, 2.5);
        assert_eq!(opts.camera.initial_position, [0.0, 0.0, 5.0]);
        // Everything else should be default
        assert_eq!(opts.camera.mouse_sensitivity, 0.05);
        assert_eq!(opts.camera.world_up, [0.0, 1.0, 0.0]);
        assert_eq!(opts.playback, PlaybackOptions::default());
    }

    #[test]
    fn display_section_parses() {
        let toml_str = r#"
[display]
render_mode = "wireframe"
lamp_on = true
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.display.render_mode, RenderMode::Wireframe);
        assert!(opts.display.lamp_on);
        assert!(!opts.display.sun_on);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(
            opts.keybindings.lookup("Tab"),
            Some(KeyAction::ToggleMouseGrab)
        );
        assert_eq!(opts.keybindings.lookup("KeyQ"), None);
    }

    #[test]
    fn loaded_keybindings_rebuild_reverse_map() {
        let toml_str = r#"
[keybindings.bindings]
move_forward = "ArrowUp"
quit = "KeyQ"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("ArrowUp"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(opts.keybindings.lookup("KeyQ"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("KeyW"), None);
    }

    #[test]
    fn rebinding_replaces_old_key() {
        let mut opts = Options::default();
        opts.keybindings.bind(KeyAction::MoveUp, "Space");
        assert_eq!(opts.keybindings.lookup("Space"), Some(KeyAction::MoveUp));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[camera]\nmove_speed = \"fast\"")
            .unwrap_err();
        assert!(matches!(err, FlyviewError::OptionsParse(_)));
    }

    #[test]
    fn degenerate_start_poses_are_rejected() {
        for camera in [
            "initial_position = [1.0, 2.0, 3.0]\n\
             initial_target = [1.0, 2.0, 3.0]",
            "world_up = [0.0, 0.0, 0.0]",
            "initial_position = [0.0, 5.0, 0.0]\n\
             initial_target = [0.0, 0.0, 0.0]",
            "initial_target = [40.0, inf, -30.0]",
        ] {
            let err = Options::from_toml_str(&format!("[camera]\n{camera}"))
                .unwrap_err();
            assert!(
                matches!(err, FlyviewError::InvalidOptions(_)),
                "{camera}: {err}"
            );
        }
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn save_then_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("flyview-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.camera.move_speed = 0.25;
        opts.playback.target_fps = 30;
        opts.save(&dir.join("slow.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();

        let loaded = Options::load(&dir.join("slow.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["default", "slow"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Options::load(Path::new("/nonexistent/flyview.toml"))
            .unwrap_err();
        assert!(matches!(err, FlyviewError::Io(_)));
    }

    #[test]
    fn default_camera_builds_configured_viewpoint() {
        let viewpoint = CameraOptions::default().viewpoint();
        assert_eq!(viewpoint.position(), glam::Vec3::new(-60.0, 10.0, -70.0));
        assert_eq!(viewpoint.yaw(), 0.0);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("playback"));
        assert!(props.contains_key("display"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("move_speed").is_some());
        assert!(camera.get("initial_position").is_some());
        assert!(camera.get("world_up").is_none());
    }
}
