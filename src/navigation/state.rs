use crate::camera::CameraPose;
use crate::scene::ObjectId;

/// Which panel, if any, the camera is currently framing.
///
/// The pre-focus pose lives inside the `Focused` variant, so it cannot be
/// read once focus has been cleared.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NavigationState {
    /// Free walking; no panel framed.
    #[default]
    Idle,
    /// The camera was moved to frame `panel`.
    Focused {
        /// The framed panel.
        panel: ObjectId,
        /// Camera pose immediately before the focus move.
        previous: CameraPose,
    },
}

impl NavigationState {
    /// The focused panel, if any.
    #[must_use]
    pub fn focused(&self) -> Option<ObjectId> {
        match *self {
            Self::Focused { panel, .. } => Some(panel),
            Self::Idle => None,
        }
    }

    /// The pose to return to when the focused panel is clicked again.
    #[must_use]
    pub fn previous_pose(&self) -> Option<CameraPose> {
        match *self {
            Self::Focused { previous, .. } => Some(previous),
            Self::Idle => None,
        }
    }

    /// Whether no panel is focused.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn previous_pose_only_while_focused() {
        assert_eq!(NavigationState::default().previous_pose(), None);
        let pose = CameraPose::new(Vec3::new(0.0, 1.6, 2.0), Vec3::ZERO);
        let focused = NavigationState::Focused {
            panel: ObjectId(3),
            previous: pose,
        };
        assert_eq!(focused.focused(), Some(ObjectId(3)));
        assert_eq!(focused.previous_pose(), Some(pose));
        assert!(!focused.is_idle());
    }
}
