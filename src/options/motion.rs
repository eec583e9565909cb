use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

/// Duration and easing of one kind of camera move.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct MotionProfile {
    /// Tween length in milliseconds. Zero snaps.
    pub duration_ms: u64,
    /// Progress curve.
    pub easing: EasingFunction,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
/// Per-mode camera motion timing.
pub struct MotionOptions {
    /// Moving in to frame a panel.
    pub approach: MotionProfile,
    /// Backing away from a focused panel.
    pub retreat: MotionProfile,
    /// Walking across the floor.
    pub walk: MotionProfile,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            approach: MotionProfile {
                duration_ms: 1000,
                easing: EasingFunction::DEFAULT,
            },
            retreat: MotionProfile {
                duration_ms: 1000,
                easing: EasingFunction::QuadraticInOut,
            },
            walk: MotionProfile {
                duration_ms: 800,
                easing: EasingFunction::QuadraticOut,
            },
        }
    }
}
