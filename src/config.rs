//! Generator and widget configuration.
//!
//! Handles loading, validating, and merging `folio.toml`. Stock defaults carry
//! the full category table for both collections, so a missing config file is
//! a valid setup: the generator scans the standard layout.
//!
//! ## Asset Layout (stock table)
//!
//! ```text
//! public/
//! ├── vfx/gallery/            # VFX collection → /vfx/gallery
//! │   ├── 3d/                 # "3D"          ids vfx-3d-NNN
//! │   ├── additional/         # "Additional"  ids vfx-add-NNN
//! │   └── drawings/           # "Drawings"    ids vfx-drw-NNN
//! └── photography/            # Photography collection → /photography
//!     ├── commute/            # "Commute"     ids ph-com-NNN
//!     ├── me/                 # "Me"          ids ph-me-NNN
//!     ├── neighborhood/       # "Neighborhood" ids ph-nbr-NNN
//!     ├── protests/           # "Protests"    ids ph-prt-NNN
//!     └── school/             # "School"      ids ph-sch-NNN
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! [pagination]
//! page_size = 12
//! ```
//!
//! Tables merge key by key. Arrays (`collections`, `videos`) replace the stock
//! value wholesale. Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::emit::{COMBINED_NAME, INTERFACE_NAME};
use crate::types::WILDCARD;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `folio.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// The one image extension the generator collects (case-insensitive, no dot).
    pub extension: String,
    /// Gallery page window settings.
    pub pagination: PaginationConfig,
    /// Comparison slider defaults.
    pub slider: SliderConfig,
    /// Third-party video player URLs.
    pub video: VideoConfig,
    /// Collections to generate, in output order.
    pub collections: Vec<CollectionConfig>,
    /// Video catalog shown as facades on the preview index.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<VideoEntry>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            extension: "webp".to_string(),
            pagination: PaginationConfig::default(),
            slider: SliderConfig::default(),
            video: VideoConfig::default(),
            collections: stock_collections(),
            videos: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "extension must be non-empty and given without a leading dot".into(),
            ));
        }
        if self.pagination.page_size == 0 {
            return Err(ConfigError::Validation(
                "pagination.page_size must be at least 1".into(),
            ));
        }
        if !(self.slider.keyboard_step > 0.0 && self.slider.keyboard_step <= 100.0) {
            return Err(ConfigError::Validation(
                "slider.keyboard_step must be in (0, 100]".into(),
            ));
        }
        if !(0.0..=100.0).contains(&self.slider.initial_position) {
            return Err(ConfigError::Validation(
                "slider.initial_position must be in [0, 100]".into(),
            ));
        }
        for (key, template) in [
            ("video.thumbnail_url", &self.video.thumbnail_url),
            ("video.embed_url", &self.video.embed_url),
            ("video.watch_url", &self.video.watch_url),
        ] {
            if !template.contains("{id}") {
                return Err(ConfigError::Validation(format!(
                    "{key} must contain an {{id}} placeholder"
                )));
            }
        }
        if self.collections.is_empty() {
            return Err(ConfigError::Validation(
                "at least one collection is required".into(),
            ));
        }

        let mut constants = HashSet::new();
        for collection in &self.collections {
            collection.validate()?;
            for name in [&collection.array_name, &collection.categories_name] {
                if [INTERFACE_NAME, COMBINED_NAME].contains(&name.as_str()) {
                    return Err(ConfigError::Validation(format!(
                        "constant name '{name}' is reserved"
                    )));
                }
                if !constants.insert(name.as_str()) {
                    return Err(ConfigError::Validation(format!(
                        "constant name '{name}' is used twice"
                    )));
                }
            }
        }

        for video in &self.videos {
            if video.id.is_empty() || !video.id.chars().all(|c| c.is_ascii_digit()) {
                return Err(ConfigError::Validation(format!(
                    "video id '{}' must be numeric",
                    video.id
                )));
            }
        }
        Ok(())
    }
}

/// Gallery page window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationConfig {
    /// Items revealed per page.
    pub page_size: usize,
    /// Artificial delay before a "load more" takes effect, so the loading
    /// indicator gets a frame to render.
    pub load_more_delay_ms: u64,
}

impl PaginationConfig {
    pub fn load_more_delay(&self) -> Duration {
        Duration::from_millis(self.load_more_delay_ms)
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: 8,
            load_more_delay_ms: 300,
        }
    }
}

/// Comparison slider defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderConfig {
    /// Starting reveal position in percent.
    pub initial_position: f64,
    /// Percentage points moved per arrow key press.
    pub keyboard_step: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            initial_position: 50.0,
            keyboard_step: 5.0,
        }
    }
}

/// URL templates for the embedded video player. `{id}` is replaced by the
/// numeric video id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VideoConfig {
    pub thumbnail_url: String,
    pub embed_url: String,
    pub watch_url: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            thumbnail_url: "https://vumbnail.com/{id}.jpg".to_string(),
            embed_url:
                "https://player.vimeo.com/video/{id}?autoplay=1&title=0&byline=0&portrait=0"
                    .to_string(),
            watch_url: "https://vimeo.com/{id}".to_string(),
        }
    }
}

/// One collection: an asset root and its category table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionConfig {
    /// Display name, e.g. "VFX".
    pub name: String,
    /// Directory under the public root, e.g. `vfx/gallery`.
    pub root: String,
    /// Web path prefix for generated sources, e.g. `/vfx/gallery`.
    pub web_prefix: String,
    /// Item array constant in the emitted module.
    pub array_name: String,
    /// Category list constant in the emitted module.
    pub categories_name: String,
    pub categories: Vec<CategoryConfig>,
}

impl CollectionConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Validation(msg));

        if self.name.trim().is_empty() {
            return invalid("collection name must not be empty".into());
        }
        for name in [&self.array_name, &self.categories_name] {
            if !is_identifier(name) {
                return invalid(format!(
                    "collection '{}': '{name}' is not a valid constant name",
                    self.name
                ));
            }
        }

        let mut labels = HashSet::new();
        let mut prefixes = HashSet::new();
        for cat in &self.categories {
            if cat.label.trim().is_empty() || cat.label == WILDCARD {
                return invalid(format!(
                    "collection '{}': category label '{}' is reserved or empty",
                    self.name, cat.label
                ));
            }
            if !is_single_component(&cat.dir) {
                return invalid(format!(
                    "collection '{}': category dir '{}' must be a single directory name",
                    self.name, cat.dir
                ));
            }
            if cat.id_prefix.is_empty() {
                return invalid(format!(
                    "collection '{}': category '{}' needs an id_prefix",
                    self.name, cat.label
                ));
            }
            if !labels.insert(cat.label.as_str()) {
                return invalid(format!(
                    "collection '{}': duplicate category label '{}'",
                    self.name, cat.label
                ));
            }
            if !prefixes.insert(cat.id_prefix.as_str()) {
                return invalid(format!(
                    "collection '{}': duplicate id_prefix '{}'",
                    self.name, cat.id_prefix
                ));
            }
        }
        Ok(())
    }

    /// Web prefix without a trailing slash.
    pub fn web_base(&self) -> &str {
        self.web_prefix.trim_end_matches('/')
    }
}

/// One category row of the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryConfig {
    /// Subdirectory under the collection root.
    pub dir: String,
    /// Display label, also the item `category` value.
    pub label: String,
    /// Prefix for generated ids.
    pub id_prefix: String,
}

/// A catalog video rendered as a facade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VideoEntry {
    /// Numeric player id.
    pub id: String,
    pub title: String,
    /// Grouping label, e.g. "Breakdowns".
    pub category: String,
    /// Direct link override; defaults to `video.watch_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

fn category(dir: &str, label: &str, id_prefix: &str) -> CategoryConfig {
    CategoryConfig {
        dir: dir.to_string(),
        label: label.to_string(),
        id_prefix: id_prefix.to_string(),
    }
}

/// The fixed category table for the VFX and Photography collections.
pub fn stock_collections() -> Vec<CollectionConfig> {
    vec![
        CollectionConfig {
            name: "VFX".to_string(),
            root: "vfx/gallery".to_string(),
            web_prefix: "/vfx/gallery".to_string(),
            array_name: "vfxGallery".to_string(),
            categories_name: "vfxGalleryCategories".to_string(),
            categories: vec![
                category("3d", "3D", "vfx-3d"),
                category("additional", "Additional", "vfx-add"),
                category("drawings", "Drawings", "vfx-drw"),
            ],
        },
        CollectionConfig {
            name: "Photography".to_string(),
            root: "photography".to_string(),
            web_prefix: "/photography".to_string(),
            array_name: "photographyGallery".to_string(),
            categories_name: "photographyCategories".to_string(),
            categories: vec![
                category("commute", "Commute", "ph-com"),
                category("me", "Me", "ph-me"),
                category("neighborhood", "Neighborhood", "ph-nbr"),
                category("protests", "Protests", "ph-prt"),
                category("school", "School", "ph-sch"),
            ],
        },
    ]
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn is_single_component(dir: &str) -> bool {
    !dir.is_empty() && dir != "." && dir != ".." && !dir.contains(['/', '\\'])
}

// =============================================================================
// Loading folio.toml
// =============================================================================

/// The stock table and widget defaults as TOML, ready for `folio.toml` to be
/// laid over.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Lay the keys from `folio.toml` over the defaults.
///
/// Sections like `[pagination]` combine key by key, so a file naming only
/// `page_size` keeps the stock delay. Anything else from the file wins
/// outright, so a `[[collections]]` array replaces the whole stock table.
pub fn merge_toml(defaults: toml::Value, file: toml::Value) -> toml::Value {
    match (defaults, file) {
        (toml::Value::Table(mut section), toml::Value::Table(overrides)) => {
            for (key, value) in overrides {
                let merged = match section.remove(&key) {
                    Some(stock) => merge_toml(stock, value),
                    None => value,
                };
                section.insert(key, merged);
            }
            toml::Value::Table(section)
        }
        (_, file) => file,
    }
}

/// Parse `folio.toml` without applying defaults. A missing file is
/// `Ok(None)`: folio runs on the stock table.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(toml::from_str(&content)?))
}

/// Build the final [`SiteConfig`] from the defaults and the parsed file, if
/// any. Unknown keys and invalid values fail here, before any scanning.
pub fn resolve_config(
    defaults: toml::Value,
    file: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match file {
        Some(file) => merge_toml(defaults, file),
        None => defaults,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Read `folio.toml` at `path` and resolve it against the stock defaults.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(path)?)
}

/// Returns a fully-commented stock `folio.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Configuration
# ===================
# All settings are optional. Values shown below are the defaults.
# Tables merge with the defaults key by key; the [[collections]] and
# [[videos]] arrays replace the defaults as a whole when present.
# Unknown keys will cause an error.

# Image extension collected by the generator (case-insensitive, no dot).
extension = "webp"

# ---------------------------------------------------------------------------
# Gallery pagination
# ---------------------------------------------------------------------------
[pagination]
# Items revealed per "Load More".
page_size = 8

# Delay before a "Load More" takes effect, in milliseconds.
load_more_delay_ms = 300

# ---------------------------------------------------------------------------
# Before/after comparison slider
# ---------------------------------------------------------------------------
[slider]
initial_position = 50.0

# Percentage points per arrow key press.
keyboard_step = 5.0

# ---------------------------------------------------------------------------
# Embedded video player ({id} is the numeric video id)
# ---------------------------------------------------------------------------
[video]
thumbnail_url = "https://vumbnail.com/{id}.jpg"
embed_url = "https://player.vimeo.com/video/{id}?autoplay=1&title=0&byline=0&portrait=0"
watch_url = "https://vimeo.com/{id}"

# ---------------------------------------------------------------------------
# Collections (scanned in this order; categories in table order)
# ---------------------------------------------------------------------------
[[collections]]
name = "VFX"
root = "vfx/gallery"
web_prefix = "/vfx/gallery"
array_name = "vfxGallery"
categories_name = "vfxGalleryCategories"
categories = [
    { dir = "3d", label = "3D", id_prefix = "vfx-3d" },
    { dir = "additional", label = "Additional", id_prefix = "vfx-add" },
    { dir = "drawings", label = "Drawings", id_prefix = "vfx-drw" },
]

[[collections]]
name = "Photography"
root = "photography"
web_prefix = "/photography"
array_name = "photographyGallery"
categories_name = "photographyCategories"
categories = [
    { dir = "commute", label = "Commute", id_prefix = "ph-com" },
    { dir = "me", label = "Me", id_prefix = "ph-me" },
    { dir = "neighborhood", label = "Neighborhood", id_prefix = "ph-nbr" },
    { dir = "protests", label = "Protests", id_prefix = "ph-prt" },
    { dir = "school", label = "School", id_prefix = "ph-sch" },
]

# ---------------------------------------------------------------------------
# Video catalog (optional), rendered as click-to-load facades
# ---------------------------------------------------------------------------
# [[videos]]
# id = "458259067"
# title = "Compositor/Paint Reel"
# category = "Main Reels"
# url = "https://vimeo.com/458259067"   # optional direct link
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_stock_table() {
        let config = SiteConfig::default();
        assert_eq!(config.extension, "webp");
        assert_eq!(config.collections.len(), 2);
        assert_eq!(config.collections[0].name, "VFX");
        assert_eq!(config.collections[0].categories.len(), 3);
        assert_eq!(config.collections[1].categories.len(), 5);
        assert_eq!(config.collections[1].categories[2].id_prefix, "ph-nbr");
    }

    #[test]
    fn default_pagination() {
        let config = SiteConfig::default();
        assert_eq!(config.pagination.page_size, 8);
        assert_eq!(
            config.pagination.load_more_delay(),
            Duration::from_millis(300)
        );
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[pagination]
page_size = 12
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.pagination.page_size, 12);
        // Defaults preserved
        assert_eq!(config.pagination.load_more_delay_ms, 300);
        assert_eq!(config.slider.keyboard_step, 5.0);
        assert_eq!(config.collections.len(), 2);
    }

    #[test]
    fn web_base_strips_trailing_slash() {
        let mut c = stock_collections().remove(0);
        c.web_prefix = "/vfx/gallery/".to_string();
        assert_eq!(c.web_base(), "/vfx/gallery");
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("folio.toml")).unwrap();
        assert_eq!(config.pagination.page_size, 8);
        assert_eq!(config.collections[1].name, "Photography");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("folio.toml");
        fs::write(
            &path,
            r#"
extension = "jpg"

[slider]
keyboard_step = 10.0
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.extension, "jpg");
        assert_eq!(config.slider.keyboard_step, 10.0);
        assert_eq!(config.slider.initial_position, 50.0);
    }

    #[test]
    fn collections_array_replaces_stock_table() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("folio.toml");
        fs::write(
            &path,
            r#"
[[collections]]
name = "Stills"
root = "stills"
web_prefix = "/stills"
array_name = "stills"
categories_name = "stillsCategories"
categories = [{ dir = "bw", label = "Black & White", id_prefix = "st-bw" }]
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.collections.len(), 1);
        assert_eq!(config.collections[0].categories[0].label, "Black & White");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("folio.toml");
        fs::write(&path, "this is not valid toml [[[").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r#"
[pagination]
page_sise = 4
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.unwrap_err().to_string().contains("unknown field"));
    }

    #[test]
    fn unknown_category_key_rejected() {
        let toml_str = r#"
[[collections]]
name = "X"
root = "x"
web_prefix = "/x"
array_name = "x"
categories_name = "xCats"
categories = [{ dir = "a", label = "A", id_prefix = "x-a", prefix = "oops" }]
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r#"
[pagination]
page_size = 8
load_more_delay_ms = 300
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[pagination]
page_size = 4
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let p = merged.get("pagination").unwrap();
        assert_eq!(p.get("page_size").unwrap().as_integer(), Some(4));
        assert_eq!(p.get("load_more_delay_ms").unwrap().as_integer(), Some(300));
    }

    #[test]
    fn merge_toml_arrays_replace() {
        let base: toml::Value = toml::from_str("xs = [1, 2, 3]").unwrap();
        let overlay: toml::Value = toml::from_str("xs = [9]").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("xs").unwrap().as_array().unwrap().len(), 1);
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_page_size_zero() {
        let mut config = SiteConfig::default();
        config.pagination.page_size = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn validate_keyboard_step_bounds() {
        let mut config = SiteConfig::default();
        config.slider.keyboard_step = 0.0;
        assert!(config.validate().is_err());
        config.slider.keyboard_step = 100.0;
        assert!(config.validate().is_ok());
        config.slider.keyboard_step = 100.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_initial_position_bounds() {
        let mut config = SiteConfig::default();
        config.slider.initial_position = -1.0;
        assert!(config.validate().is_err());
        config.slider.initial_position = 100.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_extension_with_dot() {
        let mut config = SiteConfig::default();
        config.extension = ".webp".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_wildcard_label_reserved() {
        let mut config = SiteConfig::default();
        config.collections[0].categories[0].label = "All".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn validate_duplicate_label() {
        let mut config = SiteConfig::default();
        config.collections[1].categories[1].label = "Commute".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_duplicate_id_prefix() {
        let mut config = SiteConfig::default();
        config.collections[0].categories[2].id_prefix = "vfx-3d".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_nested_category_dir() {
        let mut config = SiteConfig::default();
        config.collections[0].categories[0].dir = "3d/renders".to_string();
        assert!(config.validate().is_err());
        config.collections[0].categories[0].dir = "..".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_constant_names() {
        let mut config = SiteConfig::default();
        config.collections[0].array_name = "vfx-gallery".to_string();
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.collections[1].array_name = "vfxGallery".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("used twice"));
    }

    #[test]
    fn validate_fixed_export_names_reserved() {
        let mut config = SiteConfig::default();
        config.collections[0].array_name = "allGalleryImages".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("reserved"));

        let mut config = SiteConfig::default();
        config.collections[1].categories_name = "GalleryImage".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_video_template_needs_placeholder() {
        let mut config = SiteConfig::default();
        config.video.embed_url = "https://player.example.com/".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_video_id_numeric() {
        let mut config = SiteConfig::default();
        config.videos.push(VideoEntry {
            id: "abc".to_string(),
            title: "Reel".to_string(),
            category: "Main Reels".to_string(),
            url: None,
        });
        assert!(config.validate().is_err());
        config.videos[0].id = "458259067".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_empty_collections() {
        let mut config = SiteConfig::default();
        config.collections.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("folio.toml");
        fs::write(&path, "[pagination]\npage_size = 0\n").unwrap();
        assert!(matches!(
            load_config(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.extension, defaults.extension);
        assert_eq!(config.pagination.page_size, defaults.pagination.page_size);
        assert_eq!(config.video.embed_url, defaults.video.embed_url);
        assert_eq!(config.collections.len(), defaults.collections.len());
        for (a, b) in config.collections.iter().zip(&defaults.collections) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.array_name, b.array_name);
            let labels_a: Vec<_> = a.categories.iter().map(|c| &c.label).collect();
            let labels_b: Vec<_> = b.categories.iter().map(|c| &c.label).collect();
            assert_eq!(labels_a, labels_b);
        }
        assert!(config.validate().is_ok());
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        assert!(val.get("pagination").is_some());
        assert!(val.get("slider").is_some());
        assert!(val.get("video").is_some());
        assert!(val.get("collections").is_some());
        assert!(val.get("videos").is_none());
    }
}
