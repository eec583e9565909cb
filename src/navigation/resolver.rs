//! Turns a picked object or floor point into a navigation decision.
//!
//! Resolution is a pure function of the current [`NavigationState`], the
//! scene, the camera and the viewport. It returns the next state and the
//! action for the caller to carry out; it never fires triggers or moves the
//! camera itself.

use glam::Vec3;

use super::framing::{compute_framing_pose, panel_normal, FramingInput};
use super::state::NavigationState;
use super::walk::{compute_walk_pose, RoomBounds};
use crate::camera::{Camera, CameraPose, MotionMode};
use crate::options::NavigationOptions;
use crate::picking::Hit;
use crate::scene::{ObjectId, PanelSize, Role, SceneProvider};
use crate::viewport::Viewport;

/// What a click landed on, after looking one level up the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedHit {
    /// An object carrying a click trigger (the hit object or its parent).
    Trigger(ObjectId),
    /// A panel to focus.
    Panel(ObjectId),
    /// A point on the floor.
    Floor(Vec3),
    /// Nothing.
    None,
}

/// What the caller should do after a click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavAction {
    /// Run the click trigger of this object. The camera stays put.
    Trigger(ObjectId),
    /// Hand this pose to the motion executor.
    Move {
        /// Target pose.
        pose: CameraPose,
        /// Kind of move.
        mode: MotionMode,
    },
    /// Do nothing.
    Ignore,
}

/// Next state plus the action that goes with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// State after the click.
    pub state: NavigationState,
    /// Action to carry out.
    pub action: NavAction,
}

impl Resolution {
    fn unchanged(state: &NavigationState) -> Self {
        Self {
            state: *state,
            action: NavAction::Ignore,
        }
    }
}

/// Read-only view of everything a click decision depends on.
pub struct TargetResolver<'a, S: SceneProvider + ?Sized> {
    /// Scene being navigated.
    pub scene: &'a S,
    /// Camera as it is at click time.
    pub camera: &'a Camera,
    /// Host layout at click time.
    pub viewport: &'a Viewport,
    /// Navigation tuning.
    pub options: &'a NavigationOptions,
}

impl<S: SceneProvider + ?Sized> TargetResolver<'_, S> {
    /// Classify a panel hit (preferred) or floor point.
    ///
    /// A trigger on the hit object or its parent wins over everything. A
    /// panel is the hit object if it is one, else its parent if that is
    /// one, else the hit object itself with the default panel size.
    #[must_use]
    pub fn classify(
        &self,
        panel_hit: Option<Hit>,
        floor_point: Option<Vec3>,
    ) -> ResolvedHit {
        let Some(hit) = panel_hit else {
            return floor_point.map_or(ResolvedHit::None, ResolvedHit::Floor);
        };
        let Some(object) = self.scene.object(hit.object) else {
            return ResolvedHit::None;
        };
        let parent = object.parent().and_then(|id| {
            self.scene.object(id).map(|parent| (id, parent))
        });

        if object.trigger.is_some() {
            return ResolvedHit::Trigger(hit.object);
        }
        if let Some((id, parent)) = parent {
            if parent.trigger.is_some() {
                return ResolvedHit::Trigger(id);
            }
        }

        if matches!(object.role, Role::Panel { .. }) {
            return ResolvedHit::Panel(hit.object);
        }
        match parent {
            Some((id, parent)) if matches!(parent.role, Role::Panel { .. }) => {
                ResolvedHit::Panel(id)
            }
            _ => ResolvedHit::Panel(hit.object),
        }
    }

    /// Apply a classified click to `state`.
    #[must_use]
    pub fn resolve(
        &self,
        state: &NavigationState,
        target: ResolvedHit,
    ) -> Resolution {
        match target {
            ResolvedHit::Trigger(id) => {
                log::debug!("click trigger on {id:?}");
                Resolution {
                    state: *state,
                    action: NavAction::Trigger(id),
                }
            }
            ResolvedHit::Panel(id) => self.resolve_panel(state, id),
            ResolvedHit::Floor(point) => self.resolve_floor(state, point),
            ResolvedHit::None => {
                log::trace!("click hit nothing");
                Resolution::unchanged(state)
            }
        }
    }

    fn resolve_panel(
        &self,
        state: &NavigationState,
        panel: ObjectId,
    ) -> Resolution {
        if let NavigationState::Focused {
            panel: focused,
            previous,
        } = *state
        {
            if focused == panel {
                log::debug!("retreat from {panel:?}");
                return Resolution {
                    state: NavigationState::Idle,
                    action: NavAction::Move {
                        pose: previous,
                        mode: MotionMode::Retreat,
                    },
                };
            }
        }

        let Some(pose) = self.framing_pose(panel) else {
            log::trace!("panel {panel:?} is no longer in the scene");
            return Resolution::unchanged(state);
        };
        log::debug!("approach {panel:?}: eye {}", pose.position);
        Resolution {
            state: NavigationState::Focused {
                panel,
                previous: self.camera.pose(),
            },
            action: NavAction::Move {
                pose,
                mode: MotionMode::Approach,
            },
        }
    }

    fn resolve_floor(
        &self,
        state: &NavigationState,
        point: Vec3,
    ) -> Resolution {
        let bounds = RoomBounds::from_wall_width(
            self.scene.wall_width(),
            self.options.room_margin,
        );
        if !bounds.contains(point) {
            log::trace!(
                "floor click at {point} outside room half-width {}",
                bounds.half_width()
            );
            return Resolution::unchanged(state);
        }

        let pose = compute_walk_pose(
            point,
            self.camera.eye,
            self.camera.forward(),
            self.options.walk_look_offset,
        );
        log::debug!("walk to {}", pose.position);
        Resolution {
            state: NavigationState::Idle,
            action: NavAction::Move {
                pose,
                mode: MotionMode::Walk,
            },
        }
    }

    /// Pose framing `panel` from the current camera, or `None` if the panel
    /// is gone.
    #[must_use]
    pub fn framing_pose(&self, panel: ObjectId) -> Option<CameraPose> {
        let object = self.scene.object(panel)?;
        let (center, rotation) = self.scene.world_placement(panel)?;
        let input = FramingInput {
            center,
            normal: panel_normal(rotation),
            size: object.panel_size().unwrap_or(PanelSize::UNIT),
            fov: self.camera.fov_radians(),
            aspect: self.viewport.effective_aspect(),
            screen: self.viewport.screen_orientation(),
            eye_height: self.camera.eye.y,
        };
        Some(compute_framing_pose(&input, self.options.min_focus_distance))
    }
}
