use glam::{Mat4, Vec2, Vec3};

use crate::camera::Camera;

/// Minimum ray parameter accepted as a hit; rejects self-intersections at
/// the origin.
pub(crate) const T_EPSILON: f32 = 1e-4;
const PARALLEL_EPSILON: f32 = 1e-6;

/// Half-line `origin + direction · t` for `t > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Ray from `origin` along `direction` (normalized here).
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Ray from the camera eye through a point given in normalized device
    /// coordinates.
    #[must_use]
    pub fn from_camera(camera: &Camera, ndc: Vec2) -> Self {
        let inverse = camera.build_matrix().inverse();
        let through = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.5));
        let direction = (through - camera.eye)
            .try_normalize()
            .unwrap_or_else(|| camera.forward());
        Self {
            origin: camera.eye,
            direction,
        }
    }

    /// Point at parameter `t`.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// The same ray expressed in the space of `world_from_local`. The
    /// direction is not renormalized, so `t` values carry over unchanged.
    #[must_use]
    pub(crate) fn to_local(&self, world_from_local: Mat4) -> Self {
        let local_from_world = world_from_local.inverse();
        Self {
            origin: local_from_world.transform_point3(self.origin),
            direction: local_from_world.transform_vector3(self.direction),
        }
    }

    /// Parameter at which the ray crosses the horizontal plane at `height`.
    #[must_use]
    pub fn intersect_horizontal_plane(&self, height: f32) -> Option<f32> {
        if self.direction.y.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = (height - self.origin.y) / self.direction.y;
        (t > T_EPSILON).then_some(t)
    }

    /// Parameter at which the ray hits a rectangle lying in the local XY
    /// plane, centered on the origin. Both faces count.
    #[must_use]
    pub fn intersect_quad(&self, width: f32, height: f32) -> Option<f32> {
        if self.direction.z.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = -self.origin.z / self.direction.z;
        if t <= T_EPSILON {
            return None;
        }
        let p = self.at(t);
        (p.x.abs() <= width * 0.5 && p.y.abs() <= height * 0.5).then_some(t)
    }

    /// Parameter at which the ray enters an origin-centered box (or leaves
    /// it, when the origin is inside).
    #[must_use]
    pub fn intersect_cuboid(&self, half_extents: Vec3) -> Option<f32> {
        let inv = self.direction.recip();
        let t1 = (-half_extents - self.origin) * inv;
        let t2 = (half_extents - self.origin) * inv;
        let t_near = t1.min(t2).max_element();
        let t_far = t1.max(t2).min_element();

        if t_far < t_near || t_far <= T_EPSILON {
            return None;
        }
        Some(if t_near > T_EPSILON { t_near } else { t_far })
    }
}
