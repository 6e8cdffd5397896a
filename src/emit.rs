//! Manifest emission: the typed data module and the JSON manifest.
//!
//! The data module is what the site imports. It is plain source text with one
//! array constant per collection, one category list constant per collection,
//! and a combined constant. Output is a pure function of the manifest and the
//! timestamp, so two runs over the same asset tree differ only on the
//! `Generated:` line.
//!
//! ```text
//! // Auto-generated by folio - Do not edit manually
//! // Generated: 2026-01-01T00:00:00.000Z
//! // VFX: 2 images  |  Photography: 0 images
//!
//! export interface GalleryImage { ... }
//!
//! export const vfxGallery: GalleryImage[] = [
//!   // ── 3D ─────────────────────────────────────────────────────
//!   { id: "vfx-3d-001", src: "/vfx/gallery/3d/a.webp", alt: "A", category: "3D" },
//! ];
//!
//! export const vfxGalleryCategories = ["All","3D"] as const;
//! ```
//!
//! The JSON manifest is the same [`GalleryManifest`] serialized with serde.
//! The `preview` command reads it back instead of rescanning.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::types::{Collection, GalleryManifest, MediaItem};

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Exports every module carries regardless of configuration.
pub const INTERFACE_NAME: &str = "GalleryImage";
pub const COMBINED_NAME: &str = "allGalleryImages";

const RULE_WIDTH: usize = 61;
const DIVIDER_WIDTH: usize = 56;

/// Render the data module for `manifest`.
pub fn render_module(manifest: &GalleryManifest, generated_at: DateTime<Utc>) -> String {
    let rule = format!("// {}", "─".repeat(RULE_WIDTH));
    let totals = manifest
        .collections
        .iter()
        .map(|c| format!("{}: {} images", c.name, c.items.len()))
        .collect::<Vec<_>>()
        .join("  |  ");

    let mut sections = vec![
        "// Auto-generated by folio - Do not edit manually".to_string(),
        "// Run: folio generate".to_string(),
        format!(
            "// Generated: {}",
            generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        ),
        format!("// {totals}"),
        String::new(),
        banner(&rule, &["Shared interface"]),
        String::new(),
        interface(manifest),
        String::new(),
    ];

    for collection in &manifest.collections {
        let categories = collection.categories.concrete().collect::<Vec<_>>().join(", ");
        sections.push(banner(
            &rule,
            &[
                &format!("{} Gallery", collection.name),
                &format!("Categories: {categories}"),
            ],
        ));
        sections.push(String::new());
        sections.push(array_block(collection));
    }

    sections.push(banner(
        &rule,
        &["Category lists for filter UI  ('All' is always first)"],
    ));
    sections.push(String::new());
    for collection in &manifest.collections {
        sections.push(category_const(collection));
    }

    let combined = manifest
        .collections
        .iter()
        .map(|c| format!("...{}", c.array_name))
        .collect::<Vec<_>>()
        .join(", ");
    sections.push("// Combined".to_string());
    sections.push(format!(
        "export const {COMBINED_NAME}: {INTERFACE_NAME}[] = [{combined}];"
    ));
    sections.push(String::new());

    sections.join("\n")
}

/// `id` is declared optional when any item lacks one, so every emitted
/// literal satisfies the interface.
fn interface(manifest: &GalleryManifest) -> String {
    let id = if manifest.all_items().all(|i| i.id.is_some()) {
        "id"
    } else {
        "id?"
    };
    format!(
        "export interface {INTERFACE_NAME} {{\n  {id}: string;\n  src: string;\n  alt: string;\n  category: string;\n}}"
    )
}

fn banner(rule: &str, lines: &[&str]) -> String {
    let mut out = vec![rule.to_string()];
    out.extend(lines.iter().map(|l| format!("// {l}")));
    out.push(rule.to_string());
    out.join("\n")
}

/// JSON string literal, which is also a valid TS string literal.
fn quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

fn item_line(item: &MediaItem) -> String {
    let id = item
        .id
        .as_deref()
        .map(|id| format!("id: {}, ", quote(id)))
        .unwrap_or_default();
    format!(
        "  {{ {id}src: {}, alt: {}, category: {} }},",
        quote(&item.source),
        quote(&item.alt_text),
        quote(&item.category)
    )
}

fn array_block(collection: &Collection) -> String {
    let name = &collection.array_name;
    if collection.items.is_empty() {
        return format!("export const {name}: {INTERFACE_NAME}[] = [];\n");
    }

    let mut lines = vec![format!("export const {name}: {INTERFACE_NAME}[] = [")];
    for label in collection.categories.concrete() {
        let divider = "─".repeat(DIVIDER_WIDTH.saturating_sub(label.chars().count()).max(1));
        lines.push(format!("  // ── {label} {divider}"));
        lines.extend(
            collection
                .items
                .iter()
                .filter(|i| i.category == label)
                .map(item_line),
        );
    }
    lines.push("];\n".to_string());
    lines.join("\n")
}

fn category_const(collection: &Collection) -> String {
    let labels: Vec<&str> = collection.categories.iter().collect();
    format!(
        "export const {} = {} as const;\n",
        collection.categories_name,
        serde_json::Value::from(labels)
    )
}

/// Write the rendered module to `path`, creating its directory if needed.
/// An existing file is overwritten.
pub fn write_module(path: &Path, module: &str) -> Result<(), EmitError> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        fs::create_dir_all(dir)?;
        info!(dir = %dir.display(), "created output directory");
    }
    fs::write(path, module)?;
    Ok(())
}

pub fn write_manifest_json(path: &Path, manifest: &GalleryManifest) -> Result<(), EmitError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn read_manifest_json(path: &Path) -> Result<GalleryManifest, EmitError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
