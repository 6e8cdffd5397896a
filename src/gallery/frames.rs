//! Layered frame viewer: a composite built up layer by layer.
//!
//! Layers `0..=active` are shown stacked; the rest are hidden. Selection
//! jumps straight to any stage.

use super::ImageStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub label: String,
    pub source: String,
}

impl Layer {
    pub fn new(label: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            source: source.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FrameViewer {
    title: Option<String>,
    layers: Vec<Layer>,
    status: Vec<ImageStatus>,
    active: usize,
}

impl FrameViewer {
    /// `None` for an empty layer list; there is nothing to show.
    ///
    /// Starts on the base layer, so only the plate shows until a stage is
    /// picked.
    pub fn new(layers: Vec<Layer>) -> Option<Self> {
        if layers.is_empty() {
            return None;
        }
        Some(Self {
            title: None,
            status: vec![ImageStatus::Loading; layers.len()],
            layers,
            active: 0,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Companion to [`len`](Self::len) for callers that treat the viewer as a
    /// list. `new` refuses an empty layer list, so a built viewer reports false.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_layer(&self) -> &Layer {
        &self.layers[self.active]
    }

    /// Jump to layer `index` (button or range control). Out-of-range
    /// indices are rejected.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.layers.len() {
            return false;
        }
        self.active = index;
        true
    }

    pub fn is_visible(&self, index: usize) -> bool {
        index <= self.active && index < self.layers.len()
    }

    /// Position readout, e.g. `"2/4"`.
    pub fn counter(&self) -> String {
        format!("{}/{}", self.active + 1, self.layers.len())
    }

    pub fn mark_loaded(&mut self, index: usize) {
        if let Some(s) = self.status.get_mut(index) {
            *s = ImageStatus::Loaded;
        }
    }

    /// The layer's slot falls back to its text label. Visibility is untouched.
    pub fn mark_failed(&mut self, index: usize) {
        if let Some(s) = self.status.get_mut(index) {
            *s = ImageStatus::Failed;
        }
    }

    pub fn status(&self, index: usize) -> Option<ImageStatus> {
        self.status.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layers(m: usize) -> Vec<Layer> {
        (0..m)
            .map(|i| Layer::new(format!("Pass {i}"), format!("/frames/{i}.webp")))
            .collect()
    }

    #[test]
    fn empty_list_builds_nothing() {
        assert!(FrameViewer::new(Vec::new()).is_none());
    }

    #[test]
    fn starts_on_base_layer() {
        let v = FrameViewer::new(layers(4)).unwrap();
        assert_eq!(v.active(), 0);
        assert_eq!(v.counter(), "1/4");
        assert!(v.is_visible(0));
        assert!(!v.is_visible(1));
        assert!(!v.is_empty());
    }

    #[test]
    fn selection_reveals_prefix() {
        for m in 1..=5 {
            let mut v = FrameViewer::new(layers(m)).unwrap();
            for k in 0..m {
                assert!(v.select(k));
                for i in 0..m {
                    assert_eq!(v.is_visible(i), i <= k, "m={m} k={k} i={i}");
                }
            }
        }
    }

    #[test]
    fn select_jumps_directly() {
        let mut v = FrameViewer::new(layers(5)).unwrap();
        v.select(0);
        v.select(3);
        assert_eq!(v.active_layer().label, "Pass 3");
        assert_eq!(v.counter(), "4/5");
    }

    #[test]
    fn out_of_range_select_rejected() {
        let mut v = FrameViewer::new(layers(3)).unwrap();
        v.select(1);
        assert!(!v.select(3));
        assert_eq!(v.active(), 1);
    }

    #[test]
    fn failure_keeps_visibility() {
        let mut v = FrameViewer::new(layers(3)).unwrap();
        v.select(2);
        v.mark_failed(1);
        assert_eq!(v.status(1), Some(ImageStatus::Failed));
        assert_eq!(v.status(0), Some(ImageStatus::Loading));
        assert!(v.is_visible(1));
        assert!(v.is_visible(2));
        v.mark_failed(9);
        assert_eq!(v.status(9), None);
    }
}
