//! Floor navigation: room bounds and the walk pose.

use glam::Vec3;

use crate::camera::CameraPose;

/// Square walkable area centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomBounds {
    half_width: f32,
}

impl RoomBounds {
    /// Bounds `margin` inside walls spaced `wall_width` apart.
    #[must_use]
    pub fn from_wall_width(wall_width: f32, margin: f32) -> Self {
        Self {
            half_width: wall_width / 2.0 - margin,
        }
    }

    /// Bounds with an explicit half-width.
    #[must_use]
    pub fn with_half_width(half_width: f32) -> Self {
        Self { half_width }
    }

    /// Largest accepted `|x|` and `|z|`.
    #[must_use]
    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    /// Whether a floor point may be walked to. Height is ignored.
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        point.x.abs() <= self.half_width && point.z.abs() <= self.half_width
    }
}

/// Pose after walking to `point`: same eye height, same facing.
///
/// The look-at point sits `look_offset` ahead of the new eye along the
/// current look direction, so the view turns neither toward the floor nor
/// toward the clicked point.
#[must_use]
pub fn compute_walk_pose(
    point: Vec3,
    eye: Vec3,
    look_direction: Vec3,
    look_offset: f32,
) -> CameraPose {
    let position = Vec3::new(point.x, eye.y, point.z);
    let direction = look_direction.normalize_or(Vec3::NEG_Z);
    CameraPose::new(position, position + direction * look_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_subtract_margin() {
        let bounds = RoomBounds::from_wall_width(11.0, 0.5);
        assert_eq!(bounds.half_width(), 5.0);
        assert!(bounds.contains(Vec3::ZERO));
        assert!(bounds.contains(Vec3::new(5.0, 0.0, -5.0)));
        assert!(!bounds.contains(Vec3::new(5.01, 0.0, 0.0)));
        assert!(!bounds.contains(Vec3::new(0.0, 0.0, -10.0)));
    }

    #[test]
    fn bounds_ignore_height() {
        let bounds = RoomBounds::with_half_width(5.0);
        assert!(bounds.contains(Vec3::new(1.0, 100.0, 1.0)));
    }

    #[test]
    fn walk_preserves_height_and_facing() {
        let eye = Vec3::new(0.0, 1.6, 0.0);
        let look = Vec3::new(1.0, 0.0, 1.0);
        let pose = compute_walk_pose(Vec3::new(3.0, 0.0, -2.0), eye, look, 0.1);
        assert_eq!(pose.position, Vec3::new(3.0, 1.6, -2.0));
        let facing = (pose.look_at - pose.position).normalize();
        assert!((facing - look.normalize()).length() < 1e-5);
        assert!((pose.look_at.distance(pose.position) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn walk_with_degenerate_direction_faces_forward() {
        let pose = compute_walk_pose(Vec3::ZERO, Vec3::Y, Vec3::ZERO, 0.1);
        assert!((pose.look_at - Vec3::new(0.0, 1.0, -0.1)).length() < 1e-6);
    }
}
