//! Modal lightbox with cyclic navigation.
//!
//! States are `closed` and `open(index)`, where the index ranges over the
//! set the caller is currently showing. The lightbox does not own that set;
//! every navigating call takes its current length, so it always cycles over
//! what is actually visible.
//!
//! While open, the lightbox holds a page scroll lock and a keyboard
//! listener registration. Both live inside the open state, so leaving it by
//! any path (close button, backdrop click, Escape, drop) releases them.

use super::Key;
use super::page::{KeyListenerGuard, Page, ScrollGuard};

/// Where a click inside the open overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxTarget {
    /// The dimmed area around the image.
    Backdrop,
    /// The image and its caption.
    Content,
    CloseButton,
    PrevButton,
    NextButton,
}

/// Result of routing an input event to the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxEvent {
    Closed,
    Moved(usize),
    Ignored,
}

#[derive(Debug)]
struct Open {
    index: usize,
    _scroll: ScrollGuard,
    _keys: KeyListenerGuard,
}

#[derive(Debug, Default)]
pub struct Lightbox {
    open: Option<Open>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// The open index, or `None` when closed.
    pub fn index(&self) -> Option<usize> {
        self.open.as_ref().map(|o| o.index)
    }

    /// Open at `index` of a set of `len` items.
    ///
    /// Returns `false` and leaves the state alone when `index` is out of
    /// bounds. Opening while already open just moves to `index`.
    pub fn open(&mut self, index: usize, len: usize, page: &Page) -> bool {
        if index >= len {
            return false;
        }
        match &mut self.open {
            Some(open) => open.index = index,
            None => {
                self.open = Some(Open {
                    index,
                    _scroll: page.lock_scroll(),
                    _keys: page.listen_keys(),
                });
            }
        }
        true
    }

    /// Close from any open state. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    /// Step forward, wrapping from the last index to 0.
    pub fn next(&mut self, len: usize) -> Option<usize> {
        self.step(len, |i| (i + 1) % len)
    }

    /// Step back, wrapping from 0 to the last index.
    pub fn prev(&mut self, len: usize) -> Option<usize> {
        self.step(len, |i| (i + len - 1) % len)
    }

    fn step(&mut self, len: usize, f: impl FnOnce(usize) -> usize) -> Option<usize> {
        let open = self.open.as_mut()?;
        if len == 0 {
            return None;
        }
        open.index = f(open.index.min(len - 1));
        Some(open.index)
    }

    /// Keyboard bindings: Escape closes, arrows navigate. Keys are only
    /// bound while open.
    pub fn handle_key(&mut self, key: Key, len: usize) -> LightboxEvent {
        if !self.is_open() {
            return LightboxEvent::Ignored;
        }
        match key {
            Key::Escape => {
                self.close();
                LightboxEvent::Closed
            }
            Key::ArrowRight => moved(self.next(len)),
            Key::ArrowLeft => moved(self.prev(len)),
            _ => LightboxEvent::Ignored,
        }
    }

    pub fn handle_click(&mut self, target: LightboxTarget, len: usize) -> LightboxEvent {
        if !self.is_open() {
            return LightboxEvent::Ignored;
        }
        match target {
            LightboxTarget::Backdrop | LightboxTarget::CloseButton => {
                self.close();
                LightboxEvent::Closed
            }
            LightboxTarget::Content => LightboxEvent::Ignored,
            LightboxTarget::PrevButton => moved(self.prev(len)),
            LightboxTarget::NextButton => moved(self.next(len)),
        }
    }

    /// The open item, if the index is inside `items`.
    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.index().and_then(|i| items.get(i))
    }
}

fn moved(index: Option<usize>) -> LightboxEvent {
    index.map_or(LightboxEvent::Ignored, LightboxEvent::Moved)
}
