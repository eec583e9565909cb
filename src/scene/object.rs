use std::fmt;
use std::sync::Arc;

use glam::{Mat4, Quat, Vec3};

/// Stable handle to an object in a [`Scene`](super::Scene).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

/// Callback run when a triggered object (a door, a button) is clicked.
pub type ClickTrigger = Arc<dyn Fn() + Send + Sync>;

/// Wrap a closure as a [`ClickTrigger`].
pub fn trigger(f: impl Fn() + Send + Sync + 'static) -> ClickTrigger {
    Arc::new(f)
}

/// Local transform relative to the parent object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Translation.
    pub translation: Vec3,
    /// Rotation.
    pub rotation: Quat,
    /// Non-uniform scale.
    pub scale: Vec3,
}

impl Transform {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Pure translation.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Set the rotation.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Affine matrix for this transform.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.rotation,
            self.translation,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Collision geometry in the object's local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Double-sided rectangle in the local XY plane, centered on the origin.
    /// Its front faces local `+Z`.
    Quad {
        /// Extent along local X.
        width: f32,
        /// Extent along local Y.
        height: f32,
    },
    /// Box centered on the origin.
    Cuboid {
        /// Half of the box size along each local axis.
        half_extents: Vec3,
    },
}

/// Physical size of a displayed artwork.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSize {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl PanelSize {
    /// Size used for panels that carry no size metadata.
    pub const UNIT: Self = Self {
        width: 1.0,
        height: 1.0,
    };

    /// Construct a size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// What clicking the object means to navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Role {
    /// A framed artwork the camera can focus on.
    Panel {
        /// Physical size; `None` falls back to [`PanelSize::UNIT`].
        size: Option<PanelSize>,
    },
    /// Anything else: door leaves, frames, handles, decorations.
    Prop,
}

/// A node in the scene graph, as seen by navigation.
#[derive(Clone)]
pub struct SceneObject {
    /// Human-readable name, unique within a scene.
    pub name: String,
    /// Local transform.
    pub transform: Transform,
    /// Collision geometry, if the object can be hit.
    pub shape: Option<Shape>,
    /// Navigation role.
    pub role: Role,
    /// Side effect run instead of navigation when the object is clicked.
    pub trigger: Option<ClickTrigger>,
    pub(crate) parent: Option<ObjectId>,
    pub(crate) children: Vec<ObjectId>,
}

impl SceneObject {
    /// A panel whose collider matches its size.
    #[must_use]
    pub fn panel(name: impl Into<String>, size: PanelSize) -> Self {
        Self {
            shape: Some(Shape::Quad {
                width: size.width,
                height: size.height,
            }),
            role: Role::Panel { size: Some(size) },
            ..Self::prop(name)
        }
    }

    /// A non-panel object with no collider.
    #[must_use]
    pub fn prop(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            shape: None,
            role: Role::Prop,
            trigger: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Set the local transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Set the collider.
    #[must_use]
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Attach a click trigger.
    #[must_use]
    pub fn with_trigger(mut self, trigger: ClickTrigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Parent object, if any.
    #[must_use]
    pub fn parent(&self) -> Option<ObjectId> {
        self.parent
    }

    /// Direct children.
    #[must_use]
    pub fn children(&self) -> &[ObjectId] {
        &self.children
    }

    /// Panel size if this object is a panel (defaulting missing metadata).
    #[must_use]
    pub fn panel_size(&self) -> Option<PanelSize> {
        match self.role {
            Role::Panel { size } => Some(size.unwrap_or(PanelSize::UNIT)),
            Role::Prop => None,
        }
    }
}

impl fmt::Debug for SceneObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneObject")
            .field("name", &self.name)
            .field("transform", &self.transform)
            .field("shape", &self.shape)
            .field("role", &self.role)
            .field("trigger", &self.trigger.is_some())
            .field("parent", &self.parent)
            .field("children", &self.children)
            .finish()
    }
}
