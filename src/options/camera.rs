use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and look-control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Look rotation multiplier. Negative values invert the drag so the
    /// user drags the room rather than the camera.
    #[schemars(title = "Rotate Speed", range(min = -2.0, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Fraction of the pending rotation applied per frame (0 disables
    /// damping).
    #[schemars(title = "Damping", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub damping: f32,
    /// Lowest allowed polar angle in degrees (90 = horizon).
    #[schemars(skip)]
    pub min_polar_angle: f32,
    /// Highest allowed polar angle in degrees (90 = horizon).
    #[schemars(skip)]
    pub max_polar_angle: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            znear: 0.1,
            zfar: 1000.0,
            rotate_speed: -0.1,
            damping: 0.1,
            min_polar_angle: 90.0,
            max_polar_angle: 90.0,
        }
    }
}
