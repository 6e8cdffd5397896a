//! # Folio
//!
//! Gallery data and media widgets for a multi-discipline portfolio site.
//! The filesystem is the data source: one directory per category, images
//! ordered by file name, alt text derived from the file stem.
//!
//! # Architecture: Generate, Then Interact
//!
//! ```text
//! 1. Scan      public/   →  GalleryManifest       (filesystem → structured data)
//! 2. Emit      manifest  →  gallery-images.ts     (+ manifest.json for preview)
//! 3. Interact  manifest  →  widget state machines (filter, lightbox, slider, ...)
//! ```
//!
//! Stages 1 and 2 run at build time. Stage 3 is runtime behavior: each widget
//! is component-local state plus transition methods, rendered to HTML by
//! [`render`]. Collections are immutable after generation and shared by
//! reference between any number of widgets.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the category table, produces the manifest and per-directory status |
//! | [`emit`] | Writes the typed data module and the JSON manifest |
//! | [`gallery`] | Widget state machines: filter/pagination, lightbox, slider, frames, video |
//! | [`render`] | Maud markup for every widget and the static preview site |
//! | [`config`] | `folio.toml` loading, validation, and merging over stock defaults |
//! | [`types`] | Shared types (`MediaItem`, `CategoryList`, `Collection`) |
//! | [`naming`] | File stem → alt text, sequence ids, slugs |
//! | [`output`] | CLI inventory formatting |
//!
//! # Design Decisions
//!
//! ## Failures Stay Local
//!
//! Nothing here is fatal to a page. A missing category directory is an empty
//! category; an image that fails to load becomes a placeholder in its own
//! slot; a video embed that fails becomes an outbound link. Only config and
//! file I/O errors at the CLI boundary stop a run.
//!
//! ## Timers Are Explicit
//!
//! The "load more" delay takes `Instant`s from the caller instead of spawning
//! a timer. The pending load lives inside the view, so dropping the view
//! cancels it, and tests drive time without sleeping.
//!
//! ## Page Effects as Guards
//!
//! Scroll lock and keyboard listeners are acquired as guards stored in the
//! lightbox's open state. Every exit path drops the state and with it the
//! guards, so release cannot be forgotten.

pub mod config;
pub mod emit;
pub mod gallery;
pub mod naming;
pub mod output;
pub mod render;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
