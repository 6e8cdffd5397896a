//! Shared test utilities for the folio test suite.
//!
//! Provides asset-tree fixtures for generator tests, sample collections for
//! the gallery widgets, and bulk extractors for asserting on item lists.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = asset_tree(&[("vfx/gallery/3d", &["b.webp", "a.webp"])]);
//! let report = scan(tmp.path(), &SiteConfig::default());
//! assert_eq!(ids(&report.manifest.collections[0].items), vec!["vfx-3d-001", "vfx-3d-002"]);
//! ```

use std::fs;
use tempfile::TempDir;

use crate::config::{SiteConfig, stock_collections};
use crate::gallery::page::Page;
use crate::types::{CategoryList, Collection, MediaItem};

// =========================================================================
// Fixture setup
// =========================================================================

/// Build a temp public root with the given directories and (empty) files.
pub fn asset_tree(layout: &[(&str, &[&str])]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (dir, files) in layout {
        let path = tmp.path().join(dir);
        fs::create_dir_all(&path).unwrap();
        for file in *files {
            fs::write(path.join(file), b"fake image").unwrap();
        }
    }
    tmp
}

/// Stock config reduced to the VFX collection with only its `3d` category.
pub fn single_category_config() -> SiteConfig {
    let mut vfx = stock_collections().remove(0);
    vfx.categories.truncate(1);
    SiteConfig {
        collections: vec![vfx],
        ..SiteConfig::default()
    }
}

/// A media item with a derived id and source.
pub fn media(category: &str, n: usize) -> MediaItem {
    let slug = category.to_lowercase();
    MediaItem {
        id: Some(format!("{slug}-{n:03}")),
        source: format!("/gallery/{slug}/{n}.webp"),
        alt_text: format!("{category} {n}"),
        title: None,
        category: category.to_string(),
    }
}

/// A collection with `count` items per `(label, count)` pair, grouped in order.
pub fn sample_collection(layout: &[(&str, usize)]) -> Collection {
    let items: Vec<MediaItem> = layout
        .iter()
        .flat_map(|(label, count)| (1..=*count).map(move |n| media(label, n)))
        .collect();
    let categories = CategoryList::from_items(layout.iter().map(|(l, _)| *l), &items);
    Collection {
        name: "Sample".to_string(),
        array_name: "sample".to_string(),
        categories_name: "sampleCategories".to_string(),
        items,
        categories,
    }
}

pub fn page() -> Page {
    Page::new()
}

// =========================================================================
// Bulk extractors
// =========================================================================

pub fn ids(items: &[MediaItem]) -> Vec<&str> {
    items.iter().filter_map(|i| i.id.as_deref()).collect()
}

pub fn alts(items: &[MediaItem]) -> Vec<&str> {
    items.iter().map(|i| i.alt_text.as_str()).collect()
}

pub fn sources(items: &[MediaItem]) -> Vec<&str> {
    items.iter().map(|i| i.source.as_str()).collect()
}
