//! Before/after comparison slider.
//!
//! One percentage, the reveal boundary. The "before" image is clipped to the
//! left `position`% and the "after" image sits fully visible beneath it.
//! Every input path clamps, so `position` never leaves `[0, 100]`.

use super::{ImageStatus, Key};
use crate::config::SliderConfig;

const MIN: f64 = 0.0;
const MAX: f64 = 100.0;

/// Horizontal extent of the component on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub width: f64,
}

/// Which of the two images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

#[derive(Debug, Clone)]
pub struct ComparisonSlider {
    position: f64,
    step: f64,
    dragging: bool,
    before: ImageStatus,
    after: ImageStatus,
    before_label: String,
    after_label: String,
}

impl ComparisonSlider {
    pub fn new(config: &SliderConfig) -> Self {
        Self {
            position: clamp(config.initial_position),
            step: config.keyboard_step,
            dragging: false,
            before: ImageStatus::Loading,
            after: ImageStatus::Loading,
            before_label: "Before".to_string(),
            after_label: "After".to_string(),
        }
    }

    pub fn with_labels(mut self, before: impl Into<String>, after: impl Into<String>) -> Self {
        self.before_label = before.into();
        self.after_label = after.into();
        self
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Value reported to assistive tech: the position rounded to a whole percent.
    pub fn aria_value(&self) -> u8 {
        self.position.round() as u8
    }

    /// Inset from the right edge that clips the "before" image.
    pub fn clip_inset(&self) -> f64 {
        MAX - self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Press inside the component: capture the pointer and jump to it.
    pub fn pointer_down(&mut self, x: f64, bounds: Bounds) {
        self.dragging = true;
        self.track(x, bounds);
    }

    /// Pointer moved. Only tracks while captured by a press.
    pub fn pointer_move(&mut self, x: f64, bounds: Bounds) {
        if self.dragging {
            self.track(x, bounds);
        }
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    fn track(&mut self, x: f64, bounds: Bounds) {
        if bounds.width.is_nan() || bounds.width <= 0.0 || !x.is_finite() {
            return;
        }
        self.position = clamp((x - bounds.left) / bounds.width * MAX);
    }

    /// Arrow keys nudge by one step while the handle has focus. Returns
    /// whether the key was handled.
    pub fn key(&mut self, key: Key) -> bool {
        let delta = match key {
            Key::ArrowLeft => -self.step,
            Key::ArrowRight => self.step,
            _ => return false,
        };
        self.position = clamp(self.position + delta);
        true
    }

    pub fn mark_loaded(&mut self, side: Side) {
        *self.status_mut(side) = ImageStatus::Loaded;
    }

    /// The image failed; it renders as a labelled placeholder. The slider
    /// stays interactive.
    pub fn mark_failed(&mut self, side: Side) {
        *self.status_mut(side) = ImageStatus::Failed;
    }

    pub fn status(&self, side: Side) -> ImageStatus {
        match side {
            Side::Before => self.before,
            Side::After => self.after,
        }
    }

    fn status_mut(&mut self, side: Side) -> &mut ImageStatus {
        match side {
            Side::Before => &mut self.before,
            Side::After => &mut self.after,
        }
    }

    pub fn label(&self, side: Side) -> &str {
        match side {
            Side::Before => &self.before_label,
            Side::After => &self.after_label,
        }
    }
}

impl Default for ComparisonSlider {
    fn default() -> Self {
        Self::new(&SliderConfig::default())
    }
}

fn clamp(value: f64) -> f64 {
    if value.is_nan() {
        return MAX / 2.0;
    }
    value.clamp(MIN, MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds {
        left: 100.0,
        width: 400.0,
    };

    #[test]
    fn starts_at_fifty() {
        let s = ComparisonSlider::default();
        assert_eq!(s.position(), 50.0);
        assert_eq!(s.clip_inset(), 50.0);
        assert_eq!(s.label(Side::Before), "Before");
    }

    #[test]
    fn pointer_sets_fraction_of_width() {
        let mut s = ComparisonSlider::default();
        s.pointer_down(200.0, BOUNDS);
        assert_eq!(s.position(), 25.0);
        s.pointer_move(400.0, BOUNDS);
        assert_eq!(s.position(), 75.0);
    }

    #[test]
    fn pointer_outside_bounds_clamps() {
        let mut s = ComparisonSlider::default();
        s.pointer_down(-50.0, BOUNDS);
        assert_eq!(s.position(), 0.0);
        s.pointer_move(10_000.0, BOUNDS);
        assert_eq!(s.position(), 100.0);
    }

    #[test]
    fn moves_without_press_are_ignored() {
        let mut s = ComparisonSlider::default();
        s.pointer_move(100.0, BOUNDS);
        assert_eq!(s.position(), 50.0);
        s.pointer_down(300.0, BOUNDS);
        s.pointer_up();
        s.pointer_move(100.0, BOUNDS);
        assert_eq!(s.position(), 50.0);
        assert!(!s.is_dragging());
    }

    #[test]
    fn zero_width_is_noop() {
        let mut s = ComparisonSlider::default();
        s.pointer_down(
            10.0,
            Bounds {
                left: 0.0,
                width: 0.0,
            },
        );
        assert_eq!(s.position(), 50.0);
    }

    #[test]
    fn keyboard_steps_clamp() {
        let mut s = ComparisonSlider::default();
        assert!(s.key(Key::ArrowRight));
        assert_eq!(s.position(), 55.0);
        for _ in 0..30 {
            s.key(Key::ArrowRight);
        }
        assert_eq!(s.position(), 100.0);
        for _ in 0..50 {
            s.key(Key::ArrowLeft);
        }
        assert_eq!(s.position(), 0.0);
        assert!(!s.key(Key::Escape));
    }

    #[test]
    fn aria_value_rounds() {
        let mut s = ComparisonSlider::default();
        s.pointer_down(100.0 + 400.0 * 0.333, BOUNDS);
        assert_eq!(s.aria_value(), 33);
    }

    #[test]
    fn failure_is_per_image_and_keeps_slider_live() {
        let mut s = ComparisonSlider::default();
        s.mark_failed(Side::Before);
        s.mark_loaded(Side::After);
        assert_eq!(s.status(Side::Before), ImageStatus::Failed);
        assert_eq!(s.status(Side::After), ImageStatus::Loaded);
        s.key(Key::ArrowLeft);
        assert_eq!(s.position(), 45.0);
    }

    #[test]
    fn initial_position_is_clamped() {
        let s = ComparisonSlider::new(&SliderConfig {
            initial_position: 140.0,
            keyboard_step: 5.0,
        });
        assert_eq!(s.position(), 100.0);
    }
}
