use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// A camera position plus the point it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Look-at point in world space.
    pub look_at: Vec3,
}

impl CameraPose {
    /// Construct a pose from an eye position and a look-at point.
    #[must_use]
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    /// Linear blend of both points toward `other`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            look_at: self.look_at.lerp(other.look_at, t),
        }
    }
}

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position (the look controls orbit around it).
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Render surface aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera at `eye` looking at `target`, with projection parameters
    /// taken from `options`.
    #[must_use]
    pub fn new(
        eye: Vec3,
        target: Vec3,
        aspect: f32,
        options: &CameraOptions,
    ) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// View matrix (world → camera space).
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection matrix. `perspective_rh` uses the [0,1] depth range.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// Vertical field of view in radians.
    #[must_use]
    pub fn fov_radians(&self) -> f32 {
        self.fovy.to_radians()
    }

    /// Unit vector from the eye toward the target. Falls back to `-Z` when
    /// eye and target coincide.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).try_normalize().unwrap_or(Vec3::NEG_Z)
    }

    /// Current eye and target as a pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.eye, self.target)
    }

    /// Move the eye and target to `pose`.
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.eye = pose.position;
        self.target = pose.look_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(
            Vec3::new(0.0, 1.6, 4.0),
            Vec3::new(0.0, 1.6, 0.0),
            1.5,
            &CameraOptions::default(),
        )
    }

    #[test]
    fn forward_points_at_target() {
        let cam = camera();
        assert!((cam.forward() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn forward_falls_back_when_degenerate() {
        let mut cam = camera();
        cam.target = cam.eye;
        assert_eq!(cam.forward(), Vec3::NEG_Z);
    }

    #[test]
    fn target_projects_to_screen_center() {
        let cam = camera();
        let ndc = cam.build_matrix().project_point3(cam.target);
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    }

    #[test]
    fn pose_round_trips() {
        let mut cam = camera();
        let pose = CameraPose::new(Vec3::new(1.0, 1.6, 2.0), Vec3::ONE);
        cam.set_pose(pose);
        assert_eq!(cam.pose(), pose);
    }

    #[test]
    fn pose_lerp_midpoint() {
        let a = CameraPose::new(Vec3::ZERO, Vec3::X);
        let b = CameraPose::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0));
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid.position, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(mid.look_at, Vec3::new(2.0, 0.0, 0.0));
    }
}
