use std::time::Duration;

use glam::Vec3;
use web_time::Instant;

use crate::camera::core::{Camera, CameraPose};
use crate::options::{MotionOptions, MotionProfile};
use crate::util::easing::EasingFunction;

/// Why the camera is being moved. Executors may ease each kind differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionMode {
    /// Moving in to frame a panel.
    Approach,
    /// Returning to the pose held before the last approach.
    Retreat,
    /// Walking to a point on the floor.
    Walk,
}

impl MotionMode {
    /// `true` only for [`MotionMode::Retreat`].
    #[must_use]
    pub fn is_retreat(self) -> bool {
        matches!(self, Self::Retreat)
    }
}

/// Animates the camera toward requested poses over time.
///
/// A new request may arrive while a previous one is still running; the
/// newest request wins.
pub trait MotionExecutor {
    /// Start moving the camera toward `position`, looking at `look_at`.
    fn request_move(&mut self, look_at: Vec3, position: Vec3, mode: MotionMode);

    /// Advance in-flight motion. Called once per frame by the host.
    /// Returns `true` while motion is still in progress.
    fn animate(&mut self, camera: &mut Camera, now: Instant) -> bool;
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    from: CameraPose,
    to: CameraPose,
    start: Instant,
    duration: Duration,
    easing: EasingFunction,
}

impl Tween {
    fn sample(&self, now: Instant) -> (CameraPose, bool) {
        if self.duration.is_zero() {
            return (self.to, true);
        }
        let elapsed = now.saturating_duration_since(self.start);
        let raw = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        if raw >= 1.0 {
            return (self.to, true);
        }
        let t = self.easing.evaluate(raw);
        (self.from.lerp(&self.to, t), false)
    }
}

/// Default [`MotionExecutor`]: eases eye and target together from wherever
/// the camera is when a request is picked up.
///
/// Requests are latched and start on the next [`animate`](Self::animate)
/// call, so a request issued mid-flight restarts from the interpolated pose
/// rather than jumping back to the previous origin.
#[derive(Debug, Clone)]
pub struct CameraMover {
    options: MotionOptions,
    requested: Option<(CameraPose, MotionMode)>,
    active: Option<Tween>,
}

impl CameraMover {
    /// Create an idle mover using per-mode timing from `options`.
    #[must_use]
    pub fn new(options: MotionOptions) -> Self {
        Self {
            options,
            requested: None,
            active: None,
        }
    }

    /// Replace the per-mode timing. Motion already in flight keeps its
    /// original profile.
    pub fn set_options(&mut self, options: MotionOptions) {
        self.options = options;
    }

    /// Whether a request is pending or a tween is running.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.requested.is_some() || self.active.is_some()
    }

    fn profile(&self, mode: MotionMode) -> MotionProfile {
        match mode {
            MotionMode::Approach => self.options.approach,
            MotionMode::Retreat => self.options.retreat,
            MotionMode::Walk => self.options.walk,
        }
    }
}

impl Default for CameraMover {
    fn default() -> Self {
        Self::new(MotionOptions::default())
    }
}

impl MotionExecutor for CameraMover {
    fn request_move(&mut self, look_at: Vec3, position: Vec3, mode: MotionMode) {
        self.requested = Some((CameraPose::new(position, look_at), mode));
    }

    fn animate(&mut self, camera: &mut Camera, now: Instant) -> bool {
        if let Some((to, mode)) = self.requested.take() {
            let profile = self.profile(mode);
            log::trace!("camera motion {mode:?} over {}ms", profile.duration_ms);
            self.active = Some(Tween {
                from: camera.pose(),
                to,
                start: now,
                duration: Duration::from_millis(profile.duration_ms),
                easing: profile.easing,
            });
        }

        let Some(tween) = self.active else {
            return false;
        };
        let (pose, finished) = tween.sample(now);
        camera.set_pose(pose);
        if finished {
            self.active = None;
        }
        !finished
    }
}
