//! Category filter, paginated grid window, and the lightbox over it.
//!
//! ## Window
//!
//! ```text
//! filtered  = items matching the active category, source order
//! visible   = filtered[0 .. min(pages × page_size, filtered.len())]
//! ```
//!
//! Filtering never reorders, so the visible set is always a prefix of the
//! filtered set. `pages` only grows until a category change or a reset puts
//! it back to 1.
//!
//! ## Load more
//!
//! A load-more request is not applied immediately. It schedules the next
//! page for `now + delay`, and the host calls [`GalleryView::poll`] from its
//! timer. The pending request lives inside the view, so dropping the view
//! (unmount) drops the request with it; a category change or reset cancels it.
//!
//! ## Lightbox
//!
//! The lightbox indexes the *visible* set. Category changes and resets close
//! it before the set changes, so it never points past the end.

use std::time::{Duration, Instant};

use super::Key;
use super::lightbox::{Lightbox, LightboxEvent, LightboxTarget};
use super::page::Page;
use crate::config::PaginationConfig;
use crate::types::{CategoryList, Collection, MediaItem};

/// Per-item entrance delay step for a freshly loaded page.
const STAGGER_STEP: Duration = Duration::from_millis(55);
/// Entrance delay cap.
const STAGGER_MAX: Duration = Duration::from_millis(440);

/// Outcome of a load-more request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMore {
    /// The next page lands at this instant.
    Scheduled(Instant),
    AlreadyLoading,
    AllLoaded,
}

#[derive(Debug)]
pub struct GalleryView<'a> {
    items: &'a [MediaItem],
    categories: &'a CategoryList,
    page: Page,
    page_size: usize,
    load_delay: Duration,
    active: String,
    pages: usize,
    previous_visible: usize,
    pending: Option<Instant>,
    lightbox: Lightbox,
}

impl<'a> GalleryView<'a> {
    /// A paginated view over `collection`, starting on its first category.
    pub fn new(collection: &'a Collection, page: &Page, pagination: &PaginationConfig) -> Self {
        Self {
            items: &collection.items,
            categories: &collection.categories,
            page: page.clone(),
            page_size: pagination.page_size.max(1),
            load_delay: pagination.load_more_delay(),
            active: collection.categories.first().to_string(),
            pages: 1,
            previous_visible: 0,
            pending: None,
            lightbox: Lightbox::new(),
        }
    }

    /// A view that shows every filtered item at once.
    pub fn unpaginated(collection: &'a Collection, page: &Page) -> Self {
        let pagination = PaginationConfig {
            page_size: usize::MAX,
            load_more_delay_ms: 0,
        };
        Self::new(collection, page, &pagination)
    }

    // ---------------------------------------------------------------------
    // Filtering
    // ---------------------------------------------------------------------

    pub fn categories(&self) -> &CategoryList {
        self.categories
    }

    pub fn active_category(&self) -> &str {
        &self.active
    }

    /// Switch the filter. Resets the window to one page, cancels a pending
    /// load and closes the lightbox, whatever the prior state.
    ///
    /// Labels outside the published list are rejected.
    pub fn select_category(&mut self, label: &str) -> bool {
        if !self.categories.contains(label) {
            return false;
        }
        self.lightbox.close();
        self.active = label.to_string();
        self.rewind();
        true
    }

    fn filtered(&self) -> impl Iterator<Item = &'a MediaItem> + '_ {
        let items: &'a [MediaItem] = self.items;
        items.iter().filter(|i| i.matches(&self.active))
    }

    pub fn total_filtered(&self) -> usize {
        self.filtered().count()
    }

    // ---------------------------------------------------------------------
    // Pagination
    // ---------------------------------------------------------------------

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn visible_count(&self) -> usize {
        self.pages
            .saturating_mul(self.page_size)
            .min(self.total_filtered())
    }

    /// The visible prefix of the filtered items.
    pub fn visible(&self) -> Vec<&'a MediaItem> {
        self.filtered().take(self.visible_count()).collect()
    }

    pub fn remaining(&self) -> usize {
        self.total_filtered() - self.visible_count()
    }

    pub fn all_loaded(&self) -> bool {
        self.visible_count() >= self.total_filtered()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Pagination controls only appear when there is more than one page.
    pub fn shows_pagination(&self) -> bool {
        self.total_filtered() > self.page_size
    }

    /// Ask for the next page. No-op while a load is pending or once
    /// everything is visible.
    pub fn load_more(&mut self, now: Instant) -> LoadMore {
        if self.pending.is_some() {
            return LoadMore::AlreadyLoading;
        }
        if self.all_loaded() {
            return LoadMore::AllLoaded;
        }
        self.previous_visible = self.visible_count();
        let due = now + self.load_delay;
        self.pending = Some(due);
        LoadMore::Scheduled(due)
    }

    /// Timer tick. Applies a pending load whose deadline has passed and
    /// returns whether the window grew.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(due) if now >= due => {
                self.pending = None;
                self.pages += 1;
                true
            }
            _ => false,
        }
    }

    /// "Back to start": one page, lightbox closed, scrolled to the top.
    pub fn reset(&mut self) {
        self.lightbox.close();
        self.rewind();
        self.page.request_scroll_to_top();
    }

    fn rewind(&mut self) {
        self.pages = 1;
        self.previous_visible = 0;
        self.pending = None;
    }

    /// Whether the item at `index` arrived with the latest load-more.
    pub fn is_new(&self, index: usize) -> bool {
        self.previous_visible > 0 && index >= self.previous_visible && index < self.visible_count()
    }

    /// Entrance delay for a newly revealed item, staggered by position.
    pub fn stagger_delay(&self, index: usize) -> Option<Duration> {
        if !self.is_new(index) {
            return None;
        }
        let step = u32::try_from(index - self.previous_visible).unwrap_or(u32::MAX);
        Some(STAGGER_STEP.saturating_mul(step).min(STAGGER_MAX))
    }

    // ---------------------------------------------------------------------
    // Lightbox
    // ---------------------------------------------------------------------

    /// Open the lightbox on visible item `index`.
    pub fn open_lightbox(&mut self, index: usize) -> bool {
        let len = self.visible_count();
        self.lightbox.open(index, len, &self.page)
    }

    pub fn close_lightbox(&mut self) -> bool {
        self.lightbox.close()
    }

    pub fn next(&mut self) -> Option<usize> {
        let len = self.visible_count();
        self.lightbox.next(len)
    }

    pub fn prev(&mut self) -> Option<usize> {
        let len = self.visible_count();
        self.lightbox.prev(len)
    }

    pub fn handle_key(&mut self, key: Key) -> LightboxEvent {
        let len = self.visible_count();
        self.lightbox.handle_key(key, len)
    }

    pub fn handle_lightbox_click(&mut self, target: LightboxTarget) -> LightboxEvent {
        let len = self.visible_count();
        self.lightbox.handle_click(target, len)
    }

    pub fn lightbox_index(&self) -> Option<usize> {
        self.lightbox.index()
    }

    /// The item shown in the lightbox, if open.
    pub fn lightbox_item(&self) -> Option<&'a MediaItem> {
        self.lightbox.current(&self.visible()).copied()
    }
}
