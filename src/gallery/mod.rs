//! Interactive gallery widgets as plain state machines.
//!
//! Every widget here is component-local state plus transition methods. Input
//! events (clicks, keys, pointer moves, timer ticks) arrive as method calls;
//! rendering reads the state through accessors (see [`crate::render`]).
//! Nothing is global: page-level effects go through [`page::Page`] guards.
//!
//! | Module | Widget |
//! |--------|--------|
//! | [`filter`] | Category tabs + paginated grid, owns a [`lightbox::Lightbox`] |
//! | [`lightbox`] | Modal viewer with cyclic navigation |
//! | [`slider`] | Before/after comparison slider |
//! | [`frames`] | Layered frame viewer |
//! | [`video`] | Click-to-load video facade |
//! | [`page`] | Scroll lock and key listener guards |

pub mod filter;
pub mod frames;
pub mod lightbox;
pub mod page;
pub mod slider;
pub mod video;

pub use filter::{GalleryView, LoadMore};
pub use frames::{FrameViewer, Layer};
pub use lightbox::{Lightbox, LightboxEvent, LightboxTarget};
pub use page::Page;
pub use slider::ComparisonSlider;
pub use video::VideoFacade;

/// Keys the widgets react to. Everything else maps to [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// Load state of one image slot. Failures are local: a failed slot renders
/// a placeholder and nothing else changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}
