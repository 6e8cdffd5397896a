//! Page-level resources shared by widgets: background scroll lock and
//! global keyboard listeners.
//!
//! Both are handed out as guards. Acquiring returns a guard, dropping it
//! releases. A widget that stores its guards inside its own open state gets
//! release on every exit path for free: explicit close, outside click,
//! Escape, or the widget itself being dropped.
//!
//! Locks nest. The page stays locked while any guard is alive, so a menu
//! and a lightbox can both hold one without stepping on each other.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct PageState {
    scroll_locks: Cell<usize>,
    key_listeners: Cell<usize>,
    scroll_requests: Cell<usize>,
}

/// Handle to the hosting page. Cheap to clone; clones share state.
#[derive(Debug, Clone, Default)]
pub struct Page {
    state: Rc<PageState>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspend background scrolling until the guard is dropped.
    #[must_use = "scrolling is restored as soon as the guard is dropped"]
    pub fn lock_scroll(&self) -> ScrollGuard {
        bump(&self.state.scroll_locks, 1);
        ScrollGuard {
            state: Rc::clone(&self.state),
        }
    }

    /// Register a global keyboard listener until the guard is dropped.
    #[must_use = "the listener is removed as soon as the guard is dropped"]
    pub fn listen_keys(&self) -> KeyListenerGuard {
        bump(&self.state.key_listeners, 1);
        KeyListenerGuard {
            state: Rc::clone(&self.state),
        }
    }

    pub fn scroll_locked(&self) -> bool {
        self.state.scroll_locks.get() > 0
    }

    pub fn key_listener_count(&self) -> usize {
        self.state.key_listeners.get()
    }

    /// Ask the host to scroll a widget's top into view.
    pub fn request_scroll_to_top(&self) {
        bump(&self.state.scroll_requests, 1);
    }

    /// Number of scroll-to-top requests made so far.
    pub fn scroll_requests(&self) -> usize {
        self.state.scroll_requests.get()
    }
}

fn bump(cell: &Cell<usize>, by: isize) {
    cell.set(cell.get().saturating_add_signed(by));
}

/// Holds the page scroll lock. Releases on drop.
#[derive(Debug)]
pub struct ScrollGuard {
    state: Rc<PageState>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        bump(&self.state.scroll_locks, -1);
    }
}

/// Holds a keyboard listener registration. Unregisters on drop.
#[derive(Debug)]
pub struct KeyListenerGuard {
    state: Rc<PageState>,
}

impl Drop for KeyListenerGuard {
    fn drop(&mut self) {
        bump(&self.state.key_listeners, -1);
    }
}
