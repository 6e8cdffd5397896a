//! Shared types passed between the generator and the gallery widgets.
//!
//! The generator serializes a [`GalleryManifest`] to JSON; the preview stage
//! and any runtime consumer read it back. Items are immutable once generated:
//! widgets borrow them and never re-validate categories.

use serde::{Deserialize, Serialize};

/// The synthetic category that matches every item.
pub const WILDCARD: &str = "All";

/// One displayable asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Stable identifier, unique within its collection when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Web path or URL of the image. Never empty.
    #[serde(rename = "src")]
    pub source: String,
    /// Human-readable description. Never empty.
    #[serde(rename = "alt")]
    pub alt_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub category: String,
}

impl MediaItem {
    /// Caption shown in grids and the lightbox: the title, or the alt text.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.alt_text)
    }

    /// Whether this item passes a filter on `category`.
    pub fn matches(&self, category: &str) -> bool {
        category == WILDCARD || self.category == category
    }
}

/// Ordered filter labels for one collection, always starting with [`WILDCARD`].
///
/// Built only through [`CategoryList::from_items`], which drops categories
/// that have no items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CategoryList(Vec<String>);

impl CategoryList {
    /// Keep the labels from `order` that at least one item carries, in `order`'s order.
    pub fn from_items<'a>(order: impl IntoIterator<Item = &'a str>, items: &[MediaItem]) -> Self {
        let mut labels = vec![WILDCARD.to_string()];
        for label in order {
            if label != WILDCARD
                && items.iter().any(|i| i.category == label)
                && !labels.iter().any(|l| l == label)
            {
                labels.push(label.to_string());
            }
        }
        Self(labels)
    }

    /// The default filter selection (always the wildcard).
    pub fn first(&self) -> &str {
        &self.0[0]
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|l| l == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Labels excluding the wildcard.
    pub fn concrete(&self) -> impl Iterator<Item = &str> {
        self.iter().skip(1)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Companion to [`len`](Self::len) for list-style callers. Construction
    /// always inserts the wildcard, so a built list reports false.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<String>> for CategoryList {
    type Error = String;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        match labels.first() {
            Some(first) if first == WILDCARD => Ok(Self(labels)),
            _ => Err(format!("category list must start with \"{WILDCARD}\"")),
        }
    }
}

impl From<CategoryList> for Vec<String> {
    fn from(list: CategoryList) -> Self {
        list.0
    }
}

/// One generated collection: its items, grouped by category in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Display name, e.g. "VFX".
    pub name: String,
    /// Constant name of the item array in the emitted module.
    pub array_name: String,
    /// Constant name of the category list in the emitted module.
    pub categories_name: String,
    pub items: Vec<MediaItem>,
    pub categories: CategoryList,
}

impl Collection {
    /// Items carrying `category` exactly (or all items for the wildcard).
    pub fn filtered<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a MediaItem> {
        self.items.iter().filter(move |i| i.matches(category))
    }
}

/// Everything the generator produces in one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryManifest {
    pub collections: Vec<Collection>,
}

impl GalleryManifest {
    /// Every item of every collection, in collection order.
    pub fn all_items(&self) -> impl Iterator<Item = &MediaItem> {
        self.collections.iter().flat_map(|c| c.items.iter())
    }

    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name == name)
    }
}
