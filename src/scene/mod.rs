//! Read-only view of the gallery scene used for hit testing.
//!
//! The host owns the scene graph. Navigation only reads it through
//! [`SceneProvider`]; [`Scene`] is a flat arena implementation hosts can
//! populate directly.

mod object;

use glam::{Mat4, Quat, Vec3};
pub use object::{
    trigger, ClickTrigger, ObjectId, PanelSize, Role, SceneObject, Shape,
    Transform,
};
use rustc_hash::FxHashMap;

/// The single walkable floor: a horizontal square centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Floor {
    /// World-space height of the floor plane.
    pub height: f32,
    /// Half of the floor's side length. Rays landing outside miss.
    pub half_extent: f32,
}

/// Everything navigation needs to know about the scene.
pub trait SceneProvider {
    /// Look up an object.
    fn object(&self, id: ObjectId) -> Option<&SceneObject>;

    /// Root objects eligible for click testing. Their descendants are tested
    /// too.
    fn clickable_panels(&self) -> &[ObjectId];

    /// The walkable floor, if the scene has one.
    fn floor(&self) -> Option<&Floor>;

    /// Interior width of the room; the walkable half-width derives from it.
    fn wall_width(&self) -> f32;

    /// Object-to-world matrix, composing every ancestor's local transform.
    fn world_matrix(&self, id: ObjectId) -> Option<Mat4> {
        let mut object = self.object(id)?;
        let mut matrix = object.transform.to_matrix();
        while let Some(parent) = object.parent() {
            object = self.object(parent)?;
            matrix = object.transform.to_matrix() * matrix;
        }
        Some(matrix)
    }

    /// World-space origin and rotation of an object.
    fn world_placement(&self, id: ObjectId) -> Option<(Vec3, Quat)> {
        let (_, rotation, translation) =
            self.world_matrix(id)?.to_scale_rotation_translation();
        Some((translation, rotation))
    }
}

/// Flat arena scene. Ids are indices and are never reused.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    names: FxHashMap<String, ObjectId>,
    clickable: Vec<ObjectId>,
    floor: Option<Floor>,
    wall_width: f32,
}

impl Scene {
    /// Empty scene for a room `wall_width` wide.
    #[must_use]
    pub fn new(wall_width: f32) -> Self {
        Self {
            wall_width,
            ..Self::default()
        }
    }

    /// Insert a root object.
    pub fn add(&mut self, object: SceneObject) -> ObjectId {
        self.insert(object, None)
    }

    /// Insert `object` under `parent`. Returns `None` if the parent does not
    /// exist.
    pub fn add_child(
        &mut self,
        parent: ObjectId,
        object: SceneObject,
    ) -> Option<ObjectId> {
        if parent.0 as usize >= self.objects.len() {
            return None;
        }
        let id = self.insert(object, Some(parent));
        self.objects[parent.0 as usize].children.push(id);
        Some(id)
    }

    fn insert(
        &mut self,
        mut object: SceneObject,
        parent: Option<ObjectId>,
    ) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        object.parent = parent;
        object.children.clear();
        if self.names.insert(object.name.clone(), id).is_some() {
            log::warn!("duplicate scene object name '{}'", object.name);
        }
        self.objects.push(object);
        id
    }

    /// Register a root as click-testable.
    pub fn mark_clickable(&mut self, id: ObjectId) {
        if !self.clickable.contains(&id) {
            self.clickable.push(id);
        }
    }

    /// Set the walkable floor.
    pub fn set_floor(&mut self, floor: Floor) {
        self.floor = Some(floor);
    }

    /// Find an object by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<ObjectId> {
        self.names.get(name).copied()
    }

    /// Mutable access for hosts that move objects between clicks.
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id.0 as usize)
    }

    /// Number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene has no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl SceneProvider for Scene {
    fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0 as usize)
    }

    fn clickable_panels(&self) -> &[ObjectId] {
        &self.clickable
    }

    fn floor(&self) -> Option<&Floor> {
        self.floor.as_ref()
    }

    fn wall_width(&self) -> f32 {
        self.wall_width
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn child_world_matrix_composes_parent() {
        let mut scene = Scene::new(10.0);
        let door = scene.add(
            SceneObject::prop("door").with_transform(
                Transform::from_translation(Vec3::new(0.0, 0.0, -5.0))
                    .with_rotation(Quat::from_rotation_y(FRAC_PI_2)),
            ),
        );
        let leaf = scene
            .add_child(
                door,
                SceneObject::prop("leaf").with_transform(
                    Transform::from_translation(Vec3::new(1.0, 1.0, 0.0)),
                ),
            )
            .unwrap();

        let (origin, _) = scene.world_placement(leaf).unwrap();
        assert!((origin - Vec3::new(0.0, 1.0, -6.0)).length() < 1e-5);
        assert_eq!(scene.object(door).unwrap().children(), &[leaf]);
        assert_eq!(scene.object(leaf).unwrap().parent(), Some(door));
    }

    #[test]
    fn add_child_to_missing_parent_fails() {
        let mut scene = Scene::new(10.0);
        assert!(scene.add_child(ObjectId(7), SceneObject::prop("x")).is_none());
        assert!(scene.is_empty());
    }

    #[test]
    fn find_by_name() {
        let mut scene = Scene::new(10.0);
        let id = scene.add(SceneObject::panel("monet", PanelSize::new(2.0, 1.0)));
        assert_eq!(scene.find("monet"), Some(id));
        assert_eq!(scene.find("manet"), None);
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn mark_clickable_is_idempotent() {
        let mut scene = Scene::new(10.0);
        let id = scene.add(SceneObject::prop("a"));
        scene.mark_clickable(id);
        scene.mark_clickable(id);
        assert_eq!(scene.clickable_panels(), &[id]);
    }

    #[test]
    fn missing_panel_size_defaults_to_unit() {
        let mut object = SceneObject::panel("p", PanelSize::new(3.0, 2.0));
        object.role = Role::Panel { size: None };
        assert_eq!(object.panel_size(), Some(PanelSize::UNIT));
        assert_eq!(SceneObject::prop("q").panel_size(), None);
    }
}
