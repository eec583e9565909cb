use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use crate::camera::core::Camera;
use crate::options::CameraOptions;

const POLAR_EPSILON: f32 = 1e-6;
const SETTLE_EPSILON: f32 = 1e-6;
const MOVE_EPSILON_SQ: f32 = 1e-12;

/// Pending rotation, in radians, not yet applied to the camera.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct SphericalDelta {
    theta: f32,
    phi: f32,
}

/// Orbit-style pointer-look controls.
///
/// Drags rotate the camera around its look-at target. With the default
/// options the polar angle is locked to the horizon, zoom and pan are not
/// offered, and the drag direction is inverted so the user "grabs" the room.
/// Rotation is damped: [`rotate`](Self::rotate) only accumulates, and each
/// [`update`](Self::update) applies a fraction of what is pending.
#[derive(Debug, Clone)]
pub struct LookControls {
    rotate_speed: f32,
    damping: f32,
    min_polar: f32,
    max_polar: f32,
    pending: SphericalDelta,
    /// When false, drags are ignored (pending rotation still settles).
    pub enabled: bool,
}

impl LookControls {
    /// Build controls from camera options.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let min_polar = options.min_polar_angle.to_radians();
        let max_polar = options.max_polar_angle.to_radians().max(min_polar);
        Self {
            rotate_speed: options.rotate_speed,
            damping: options.damping.clamp(0.0, 1.0),
            min_polar,
            max_polar,
            pending: SphericalDelta::default(),
            enabled: true,
        }
    }

    /// Queue a rotation for a drag of `delta` pixels on a surface of
    /// `surface_height` pixels. A full-height drag turns by
    /// `2π · rotate_speed` radians.
    pub fn rotate(&mut self, delta: Vec2, surface_height: f32) {
        if !self.enabled {
            return;
        }
        let height = surface_height.max(1.0);
        let left = TAU * delta.x / height * self.rotate_speed;
        let up = TAU * delta.y / height * self.rotate_speed;
        self.pending.theta -= left;
        self.pending.phi -= up;
    }

    /// Whether queued rotation is still being applied.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.pending.theta.abs() > SETTLE_EPSILON
            || self.pending.phi.abs() > SETTLE_EPSILON
    }

    /// Drop any queued rotation.
    pub fn stop(&mut self) {
        self.pending = SphericalDelta::default();
    }

    /// Apply queued rotation and the polar lock to `camera`. Call once per
    /// frame. Returns `true` if the eye moved. With nothing queued the
    /// camera is left untouched, so poses placed by motion stay exact.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        if !self.is_settling() {
            return false;
        }
        let offset = camera.eye - camera.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            self.stop();
            return false;
        }

        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        let step = if self.damping > 0.0 { self.damping } else { 1.0 };
        theta += self.pending.theta * step;
        phi += self.pending.phi * step;

        phi = phi
            .clamp(self.min_polar, self.max_polar)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);

        let sin_phi = phi.sin();
        let new_offset = Vec3::new(
            radius * sin_phi * theta.sin(),
            radius * phi.cos(),
            radius * sin_phi * theta.cos(),
        );

        if self.damping > 0.0 {
            self.pending.theta *= 1.0 - self.damping;
            self.pending.phi *= 1.0 - self.damping;
            if !self.is_settling() {
                self.stop();
            }
        } else {
            self.stop();
        }

        let new_eye = camera.target + new_offset;
        let moved = new_eye.distance_squared(camera.eye) > MOVE_EPSILON_SQ;
        if moved {
            camera.eye = new_eye;
        }
        moved
    }
}

impl Default for LookControls {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}
