use glam::Vec2;

/// Default click tolerance in device pixels.
pub const CLICK_THRESHOLD: f32 = 10.0;

/// Outcome of a press/release pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Released within the threshold of the press.
    Click,
    /// Moved further than the threshold.
    Drag,
}

/// Tells clicks from drags by how far the pointer travelled between press
/// and release. Purely spatial; press duration is irrelevant.
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    start: Option<Vec2>,
    threshold: f32,
}

impl GestureClassifier {
    /// Classifier with the given tolerance in device pixels.
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    /// Record a press. Only the most recent press matters.
    pub fn pointer_down(&mut self, pos: Vec2) {
        self.start = Some(pos);
    }

    /// Classify a release against the recorded press and forget the press.
    /// Returns `None` when no press was recorded.
    pub fn pointer_up(&mut self, pos: Vec2) -> Option<Gesture> {
        let start = self.start.take()?;
        Some(if pos.distance(start) <= self.threshold {
            Gesture::Click
        } else {
            Gesture::Drag
        })
    }

    /// Where the pending press happened, if any.
    #[must_use]
    pub fn start(&self) -> Option<Vec2> {
        self.start
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(CLICK_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use super::*;

    #[test]
    fn threshold_is_inclusive_in_every_direction() {
        let origin = Vec2::new(300.0, 200.0);
        for i in 0..16 {
            let angle = i as f32 / 16.0 * TAU;
            let dir = Vec2::new(angle.cos(), angle.sin());
            let mut classifier = GestureClassifier::default();

            classifier.pointer_down(origin);
            assert_eq!(classifier.pointer_up(origin + dir * 9.99), Some(Gesture::Click));

            classifier.pointer_down(origin);
            assert_eq!(classifier.pointer_up(origin + dir * 10.5), Some(Gesture::Drag));
        }
    }

    #[test]
    fn exact_threshold_is_a_click() {
        let mut classifier = GestureClassifier::default();
        classifier.pointer_down(Vec2::ZERO);
        assert_eq!(classifier.pointer_up(Vec2::new(6.0, 8.0)), Some(Gesture::Click));
    }

    #[test]
    fn latest_press_wins() {
        let mut classifier = GestureClassifier::default();
        classifier.pointer_down(Vec2::ZERO);
        classifier.pointer_down(Vec2::new(100.0, 100.0));
        assert_eq!(
            classifier.pointer_up(Vec2::new(102.0, 101.0)),
            Some(Gesture::Click)
        );
    }

    #[test]
    fn release_without_press_is_unclassified() {
        let mut classifier = GestureClassifier::default();
        assert_eq!(classifier.pointer_up(Vec2::ZERO), None);
        classifier.pointer_down(Vec2::ZERO);
        let _ = classifier.pointer_up(Vec2::ZERO);
        assert_eq!(classifier.start(), None);
        assert_eq!(classifier.pointer_up(Vec2::ZERO), None);
    }
}
