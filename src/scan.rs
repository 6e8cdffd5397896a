//! Asset directory scanning.
//!
//! Stage 1 of the generator. Walks every configured collection's category
//! directories and builds a [`GalleryManifest`] of [`MediaItem`]s.
//!
//! ## Directory Structure
//!
//! ```text
//! public/                       # Public root (--public)
//! └── vfx/gallery/              # Collection root
//!     ├── 3d/                   # One directory per category
//!     │   ├── hero-shot_01.webp # → vfx-3d-001 "Hero Shot 01"
//!     │   ├── notes.txt         # Ignored: wrong extension
//!     │   └── wide_Angle.webp   # → vfx-3d-002 "Wide Angle"
//!     └── drawings/
//! ```
//!
//! ## Rules
//!
//! - Collections are scanned in config order, categories in table order.
//! - Only regular files with the configured extension are collected.
//!   Subdirectories and other files are ignored.
//! - File names are sorted before ids are assigned, so ids are stable for
//!   an unchanged file set.
//! - Sequence numbers restart at 1 in every category.
//!
//! ## Failures
//!
//! Nothing here is fatal. A missing category directory is logged as a
//! warning, an unreadable one as an error; both count as zero images and the
//! scan moves on. Partial collections are normal while content is being added.

use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};
use walkdir::WalkDir;

use crate::config::{CollectionConfig, SiteConfig};
use crate::naming::{sequence_id, stem_to_alt};
use crate::types::{CategoryList, Collection, GalleryManifest, MediaItem};

/// What the scanner found at a category directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirStatus {
    Found,
    Missing,
    Unreadable(String),
}

/// Per-category scan result, kept for CLI output.
#[derive(Debug, Clone)]
pub struct CategoryScan {
    pub label: String,
    pub dir: PathBuf,
    pub count: usize,
    pub status: DirStatus,
}

/// Per-collection scan result.
#[derive(Debug, Clone)]
pub struct CollectionScan {
    pub name: String,
    pub categories: Vec<CategoryScan>,
}

impl CollectionScan {
    pub fn total(&self) -> usize {
        self.categories.iter().map(|c| c.count).sum()
    }
}

/// The manifest plus what happened at each directory.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub manifest: GalleryManifest,
    pub collections: Vec<CollectionScan>,
}

impl ScanReport {
    pub fn total(&self) -> usize {
        self.collections.iter().map(CollectionScan::total).sum()
    }
}

/// Scan every configured collection under `public_root`.
pub fn scan(public_root: &Path, config: &SiteConfig) -> ScanReport {
    let mut manifest = GalleryManifest::default();
    let mut collections = Vec::new();

    for collection in &config.collections {
        let (built, report) = scan_collection(public_root, collection, &config.extension);
        manifest.collections.push(built);
        collections.push(report);
    }

    ScanReport {
        manifest,
        collections,
    }
}

fn scan_collection(
    public_root: &Path,
    collection: &CollectionConfig,
    extension: &str,
) -> (Collection, CollectionScan) {
    let base = public_root.join(&collection.root);
    let web_base = collection.web_base();

    let mut items = Vec::new();
    let mut categories = Vec::new();

    for cat in &collection.categories {
        let dir = base.join(&cat.dir);
        let (files, status) = list_images(&dir, extension);

        for (i, filename) in files.iter().enumerate() {
            let n = i + 1;
            let stem = Path::new(filename)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let mut alt_text = stem_to_alt(&stem);
            if alt_text.is_empty() {
                alt_text = format!("{} {n}", cat.label);
            }

            items.push(MediaItem {
                id: Some(sequence_id(&cat.id_prefix, n)),
                // Web paths always use forward slashes, whatever the host OS.
                source: format!("{web_base}/{}/{filename}", cat.dir),
                alt_text,
                title: None,
                category: cat.label.clone(),
            });
        }

        debug!(collection = %collection.name, category = %cat.label, count = files.len(), "scanned");
        categories.push(CategoryScan {
            label: cat.label.clone(),
            dir,
            count: files.len(),
            status,
        });
    }

    let labels = CategoryList::from_items(
        collection.categories.iter().map(|c| c.label.as_str()),
        &items,
    );

    (
        Collection {
            name: collection.name.clone(),
            array_name: collection.array_name.clone(),
            categories_name: collection.categories_name.clone(),
            items,
            categories: labels,
        },
        CollectionScan {
            name: collection.name.clone(),
            categories,
        },
    )
}

/// List image file names in `dir`, sorted. Never fails: problems are logged
/// and reported as zero files.
fn list_images(dir: &Path, extension: &str) -> (Vec<String>, DirStatus) {
    if !dir.exists() {
        warn!("Directory not found, skipping: {}", dir.display());
        return (Vec::new(), DirStatus::Missing);
    }
    if !dir.is_dir() {
        error!("Could not read {}: not a directory", dir.display());
        return (Vec::new(), DirStatus::Unreadable("not a directory".into()));
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                error!("Could not read {}: {}", dir.display(), e);
                return (Vec::new(), DirStatus::Unreadable(e.to_string()));
            }
        };
        if !entry.file_type().is_file() || !has_extension(entry.path(), extension) {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) => names.push(name.to_string()),
            None => warn!("Skipping non-UTF-8 file name: {}", entry.path().display()),
        }
    }

    names.sort();
    (names, DirStatus::Found)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}
