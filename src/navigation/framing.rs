//! Camera placement that frames a panel.
//!
//! The fit distance is the larger of the distances at which the panel's
//! height fills the vertical field of view and its width fills the
//! horizontal one, plus a margin. A fixed per-orientation factor then tunes
//! the result for comfortable viewing on portrait and landscape screens.

use glam::{Quat, Vec3};

use crate::camera::CameraPose;
use crate::scene::PanelSize;
use crate::viewport::Orientation;

/// Headroom so the panel never touches the frame edge.
pub const FRAMING_MARGIN: f32 = 1.1;

const MIN_FOV: f32 = 1.0 * std::f32::consts::PI / 180.0;
const MAX_FOV: f32 = 179.0 * std::f32::consts::PI / 180.0;
const MIN_EXTENT: f32 = 1e-4;
const MIN_ASPECT: f32 = 1e-3;

/// Distance multiplier for a screen/panel orientation pair.
#[must_use]
pub fn orientation_factor(screen: Orientation, panel: Orientation) -> f32 {
    match (screen, panel) {
        (Orientation::Portrait, Orientation::Portrait) => 1.15,
        (Orientation::Portrait, Orientation::Landscape) => 0.85,
        (Orientation::Landscape, Orientation::Landscape) => 1.1,
        (Orientation::Landscape, Orientation::Portrait) => 1.0,
    }
}

/// Panel facing direction: local `-Z` under the panel's world rotation.
/// The camera is placed against this direction.
#[must_use]
pub fn panel_normal(rotation: Quat) -> Vec3 {
    (rotation * Vec3::NEG_Z).normalize_or(Vec3::NEG_Z)
}

/// Everything needed to frame one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingInput {
    /// Panel center in world space.
    pub center: Vec3,
    /// Panel normal from [`panel_normal`].
    pub normal: Vec3,
    /// Physical panel size.
    pub size: PanelSize,
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Effective viewport aspect (width / height).
    pub aspect: f32,
    /// Orientation of the host screen.
    pub screen: Orientation,
    /// Current camera height; focusing never changes elevation.
    pub eye_height: f32,
}

/// Camera-to-panel distance before any minimum is applied.
///
/// Inputs are clamped to sane ranges first: field of view to 1°–179°,
/// extents and aspect to small positive values.
#[must_use]
pub fn framing_distance(
    size: PanelSize,
    fov: f32,
    aspect: f32,
    screen: Orientation,
) -> f32 {
    let fov = if fov.is_finite() {
        fov.clamp(MIN_FOV, MAX_FOV)
    } else {
        MAX_FOV
    };
    let width = size.width.max(MIN_EXTENT);
    let height = size.height.max(MIN_EXTENT);
    let aspect = aspect.max(MIN_ASPECT);

    let half_tan = (fov / 2.0).tan();
    let for_height = (height / 2.0) / half_tan;
    let for_width = (width / 2.0) / (half_tan * aspect);

    let base = for_height.max(for_width) * FRAMING_MARGIN;
    let panel = Orientation::of(width, height);
    base * orientation_factor(screen, panel)
}

/// Pose that frames the panel, at least `min_distance` away from it.
#[must_use]
pub fn compute_framing_pose(
    input: &FramingInput,
    min_distance: f32,
) -> CameraPose {
    let raw =
        framing_distance(input.size, input.fov, input.aspect, input.screen);
    let distance = if raw.is_finite() {
        raw.max(min_distance)
    } else {
        min_distance
    };

    let mut position = input.center - input.normal * distance;
    position.y = input.eye_height;
    CameraPose::new(position, input.center)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    const FOV_60: f32 = std::f32::consts::FRAC_PI_3;

    #[test]
    fn landscape_panel_on_landscape_screen() {
        let distance = framing_distance(
            PanelSize::new(2.0, 1.0),
            FOV_60,
            16.0 / 9.0,
            Orientation::Landscape,
        );
        let half_tan = (FOV_60 / 2.0).tan();
        let for_height = 0.5 / half_tan;
        let for_width = 1.0 / (half_tan * 16.0 / 9.0);
        assert!((for_height - 0.866).abs() < 1e-3);
        assert!((for_width - 0.974).abs() < 1e-3);
        let expected = for_width * 1.1 * 1.1;
        assert!((distance - expected).abs() < 1e-5, "{distance} vs {expected}");
    }

    #[test]
    fn orientation_factors() {
        use Orientation::{Landscape, Portrait};
        assert_eq!(orientation_factor(Portrait, Portrait), 1.15);
        assert_eq!(orientation_factor(Portrait, Landscape), 0.85);
        assert_eq!(orientation_factor(Landscape, Landscape), 1.1);
        assert_eq!(orientation_factor(Landscape, Portrait), 1.0);
    }

    #[test]
    fn portrait_panel_on_portrait_screen() {
        let size = PanelSize::new(1.0, 2.0);
        let aspect = 0.5;
        let half_tan = (FOV_60 / 2.0).tan();
        let expected = (1.0 / half_tan).max(0.5 / (half_tan * aspect))
            * FRAMING_MARGIN
            * 1.15;
        let distance =
            framing_distance(size, FOV_60, aspect, Orientation::Portrait);
        assert!((distance - expected).abs() < 1e-5);
    }

    #[test]
    fn square_panel_counts_as_landscape() {
        let square = framing_distance(
            PanelSize::new(1.0, 1.0),
            FOV_60,
            1.0,
            Orientation::Portrait,
        );
        let half_tan = (FOV_60 / 2.0).tan();
        assert!((square - 0.5 / half_tan * FRAMING_MARGIN * 0.85).abs() < 1e-5);
    }

    #[test]
    fn distance_grows_with_panel_size() {
        for screen in [Orientation::Landscape, Orientation::Portrait] {
            for aspect in [0.5, 1.0, 16.0 / 9.0] {
                // width varies, panel stays landscape
                let mut last = 0.0;
                for i in 0..40 {
                    let width = 1.0 + i as f32 * 0.25;
                    let d = framing_distance(
                        PanelSize::new(width, 1.0),
                        FOV_60,
                        aspect,
                        screen,
                    );
                    assert!(d >= last, "width {width}: {d} < {last}");
                    last = d;
                }
                // height varies, panel stays portrait
                let mut last = 0.0;
                for i in 0..40 {
                    let height = 1.0 + i as f32 * 0.25;
                    let d = framing_distance(
                        PanelSize::new(0.9, height),
                        FOV_60,
                        aspect,
                        screen,
                    );
                    assert!(d >= last, "height {height}: {d} < {last}");
                    last = d;
                }
            }
        }
    }

    #[test]
    fn pose_keeps_eye_height_and_looks_at_center() {
        let center = Vec3::new(0.0, 2.0, -5.0);
        let input = FramingInput {
            center,
            normal: panel_normal(Quat::IDENTITY),
            size: PanelSize::new(2.0, 1.0),
            fov: FOV_60,
            aspect: 16.0 / 9.0,
            screen: Orientation::Landscape,
            eye_height: 1.6,
        };
        let pose = compute_framing_pose(&input, 0.05);
        let distance = framing_distance(
            input.size,
            input.fov,
            input.aspect,
            input.screen,
        );
        assert_eq!(pose.look_at, center);
        assert_eq!(pose.position.y, 1.6);
        assert!((pose.position.z - (-5.0 + distance)).abs() < 1e-5);
        assert!(pose.position.x.abs() < 1e-6);
    }

    #[test]
    fn normal_follows_rotation() {
        let n = panel_normal(Quat::from_rotation_y(FRAC_PI_2));
        assert!((n - Vec3::NEG_X).length() < 1e-6);
    }

    #[test]
    fn degenerate_inputs_clamp_to_minimum() {
        let input = FramingInput {
            center: Vec3::ZERO,
            normal: Vec3::NEG_Z,
            size: PanelSize::new(0.0, 0.0),
            fov: 0.0,
            aspect: 1.0,
            screen: Orientation::Landscape,
            eye_height: 0.0,
        };
        let tiny = compute_framing_pose(&input, 0.05);
        assert!(tiny.position.is_finite());
        assert!(tiny.position.z >= 0.05 - 1e-6);

        let nan_fov = FramingInput {
            fov: f32::NAN,
            size: PanelSize::new(1.0, 1.0),
            ..input
        };
        assert!(compute_framing_pose(&nan_fov, 0.05).position.is_finite());
    }

    #[test]
    fn same_input_same_pose() {
        let input = FramingInput {
            center: Vec3::new(1.0, 1.5, -4.0),
            normal: Vec3::NEG_Z,
            size: PanelSize::new(1.2, 0.8),
            fov: FOV_60,
            aspect: 1.5,
            screen: Orientation::Landscape,
            eye_height: 1.6,
        };
        assert_eq!(
            compute_framing_pose(&input, 0.05),
            compute_framing_pose(&input, 0.05)
        );
    }
}
