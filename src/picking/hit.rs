use glam::Vec3;

use super::ray::Ray;
use crate::scene::{Floor, ObjectId, SceneProvider, Shape};

/// Nearest object struck by a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// The object whose collider was struck (may be a descendant of a
    /// clickable root).
    pub object: ObjectId,
    /// Distance from the ray origin.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

/// Ray parameter at which `ray` strikes object `id`, if it has a collider.
pub fn intersect_object<S: SceneProvider + ?Sized>(
    ray: &Ray,
    scene: &S,
    id: ObjectId,
) -> Option<f32> {
    let shape = scene.object(id)?.shape?;
    let local = ray.to_local(scene.world_matrix(id)?);
    match shape {
        Shape::Quad { width, height } => local.intersect_quad(width, height),
        Shape::Cuboid { half_extents } => {
            local.intersect_cuboid(half_extents)
        }
    }
}

/// Nearest hit among the scene's clickable roots and all their descendants.
///
/// Objects are visited depth-first, roots in registration order. On equal
/// distances the object visited first wins.
pub fn test_panels<S: SceneProvider + ?Sized>(
    ray: &Ray,
    scene: &S,
) -> Option<Hit> {
    let mut nearest: Option<(ObjectId, f32)> = None;
    let mut stack: Vec<ObjectId> =
        scene.clickable_panels().iter().rev().copied().collect();

    while let Some(id) = stack.pop() {
        let Some(object) = scene.object(id) else {
            continue;
        };
        stack.extend(object.children().iter().rev().copied());

        if let Some(t) = intersect_object(ray, scene, id) {
            if nearest.is_none_or(|(_, best)| t < best) {
                nearest = Some((id, t));
            }
        }
    }

    nearest.map(|(object, distance)| Hit {
        object,
        distance,
        point: ray.at(distance),
    })
}

/// Nearest point where `ray` lands on the floor, within its extent.
#[must_use]
pub fn test_floor(ray: &Ray, floor: &Floor) -> Option<Vec3> {
    let t = ray.intersect_horizontal_plane(floor.height)?;
    let point = ray.at(t);
    (point.x.abs() <= floor.half_extent && point.z.abs() <= floor.half_extent)
        .then_some(point)
}
