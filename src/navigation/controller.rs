use glam::Vec2;
use web_time::Instant;

use super::resolver::{NavAction, TargetResolver};
use super::state::NavigationState;
use crate::camera::{Camera, CameraMover, LookControls, MotionExecutor};
use crate::input::{InputEvent, InputProcessor, NavCommand};
use crate::options::{NavigationOptions, Options};
use crate::picking::{test_floor, test_panels, Ray};
use crate::scene::SceneProvider;
use crate::viewport::Viewport;

/// Pointer-driven gallery navigation.
///
/// Owns the input state, the navigation state, the look controls and the
/// motion executor. The host feeds every pointer event to
/// [`handle_event`](Self::handle_event) and calls
/// [`animate`](Self::animate) once per frame.
///
/// ```ignore
/// let mut nav = NavigationController::new(&options);
/// // on every pointer event:
/// nav.handle_event(event, &camera, &scene, &viewport);
/// // every frame:
/// nav.animate(&mut camera, Instant::now());
/// ```
pub struct NavigationController<M: MotionExecutor = CameraMover> {
    input: InputProcessor,
    state: NavigationState,
    controls: LookControls,
    executor: M,
    options: NavigationOptions,
    /// Set when a move is handed out, cleared once the executor settles.
    moving: bool,
}

impl NavigationController<CameraMover> {
    /// Controller using the built-in [`CameraMover`].
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self::with_executor(options, CameraMover::new(options.motion.clone()))
    }
}

impl<M: MotionExecutor> NavigationController<M> {
    /// Controller driving a caller-supplied motion executor.
    pub fn with_executor(options: &Options, executor: M) -> Self {
        Self {
            input: InputProcessor::new(options.navigation.click_threshold),
            state: NavigationState::Idle,
            controls: LookControls::new(&options.camera),
            executor,
            options: options.navigation.clone(),
            moving: false,
        }
    }

    /// Current navigation state.
    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// The look controls.
    #[must_use]
    pub fn controls(&self) -> &LookControls {
        &self.controls
    }

    /// Mutable look controls, e.g. to disable looking while a modal is up.
    pub fn controls_mut(&mut self) -> &mut LookControls {
        &mut self.controls
    }

    /// The motion executor.
    #[must_use]
    pub fn executor(&self) -> &M {
        &self.executor
    }

    /// Mutable motion executor.
    pub fn executor_mut(&mut self) -> &mut M {
        &mut self.executor
    }

    /// Process one pointer event.
    ///
    /// Drags feed the look controls unless the camera is in motion. Clicks are resolved against the scene
    /// and the resulting action is carried out: triggers fire, moves are
    /// handed to the executor. Returns the action taken for a click, `None`
    /// for anything else.
    pub fn handle_event<S: SceneProvider + ?Sized>(
        &mut self,
        event: InputEvent,
        camera: &Camera,
        scene: &S,
        viewport: &Viewport,
    ) -> Option<NavAction> {
        match self.input.handle_event(event)? {
            NavCommand::Look { delta } => {
                if self.moving {
                    log::trace!("look drag dropped during camera motion");
                } else {
                    self.controls.rotate(delta, viewport.surface.height);
                }
                None
            }
            NavCommand::Click { position } => {
                Some(self.click(position, camera, scene, viewport))
            }
        }
    }

    /// Resolve and carry out a click at `pointer` (window pixels).
    ///
    /// Panels are tested first; the floor only when no panel was hit.
    pub fn click<S: SceneProvider + ?Sized>(
        &mut self,
        pointer: Vec2,
        camera: &Camera,
        scene: &S,
        viewport: &Viewport,
    ) -> NavAction {
        let ray = Ray::from_camera(camera, viewport.ndc(pointer));
        let panel_hit = test_panels(&ray, scene);
        let floor_point = if panel_hit.is_none() {
            scene.floor().and_then(|floor| test_floor(&ray, floor))
        } else {
            None
        };

        let resolver = TargetResolver {
            scene,
            camera,
            viewport,
            options: &self.options,
        };
        let target = resolver.classify(panel_hit, floor_point);
        let resolution = resolver.resolve(&self.state, target);
        self.state = resolution.state;

        match resolution.action {
            NavAction::Trigger(id) => {
                if let Some(trigger) =
                    scene.object(id).and_then(|o| o.trigger.as_ref())
                {
                    trigger();
                }
            }
            NavAction::Move { pose, mode } => {
                self.controls.stop();
                self.executor.request_move(pose.look_at, pose.position, mode);
                self.moving = true;
            }
            NavAction::Ignore => {}
        }
        resolution.action
    }

    /// Advance in-flight motion and damped look rotation. Call once per
    /// frame. Returns `true` while the camera is still changing.
    pub fn animate(&mut self, camera: &mut Camera, now: Instant) -> bool {
        self.moving = self.executor.animate(camera, now);
        if self.moving {
            self.controls.stop();
            return true;
        }
        let _ = self.controls.update(camera);
        self.controls.is_settling()
    }
}
