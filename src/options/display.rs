use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the host rasterizes scene polygons.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Filled polygons.
    #[default]
    Fill,
    /// Polygon edges only.
    Wireframe,
    /// Polygon vertices only.
    Points,
    /// Filled polygons with line smoothing.
    SmoothFill,
}

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Scene light toggles and polygon mode, read by the host renderer.
pub struct DisplayOptions {
    /// Polygon rasterization mode.
    #[schemars(title = "Render Mode")]
    pub render_mode: RenderMode,
    /// Whether the directional sun light is lit.
    #[schemars(title = "Sun On")]
    pub sun_on: bool,
    /// Whether the point lamp lights are lit.
    #[schemars(title = "Lamp On")]
    pub lamp_on: bool,
}
