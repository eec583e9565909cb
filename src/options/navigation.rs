use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// Click classification, room bounds and pose tuning.
pub struct NavigationOptions {
    /// Maximum pointer travel, in device pixels, for a press to count as a
    /// click rather than a drag.
    #[schemars(title = "Click Threshold", range(min = 0.0, max = 50.0), extend("step" = 1.0))]
    pub click_threshold: f32,
    /// Inset from the walls that floor clicks may not cross.
    #[schemars(title = "Wall Margin", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub room_margin: f32,
    /// Distance in front of the eye at which the look-at point is placed
    /// after a floor walk.
    #[schemars(skip)]
    pub walk_look_offset: f32,
    /// Closest the camera may be placed to a focused panel.
    #[schemars(skip)]
    pub min_focus_distance: f32,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            click_threshold: 10.0,
            room_margin: 0.5,
            walk_look_offset: 0.1,
            min_focus_distance: 0.05,
        }
    }
}
