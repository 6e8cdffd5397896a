//! CLI output formatting for the generator and preview commands.
//!
//! # Information-First Display
//!
//! Output is an inventory, not a file log. Each category leads with its
//! display label and image count; directory problems are shown as a trailing
//! note on the same line so the table stays aligned. Logs (warnings for
//! missing directories and the like) go to stderr through `tracing`, leaving
//! stdout for this inventory.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! VFX
//!   3D             2 images
//!   Additional     0 images  (missing)
//!   Drawings       1 image
//!
//! ────────────────────────────────────────────────────────
//! VFX images        : 3
//! Photography images: 0
//! Total             : 3
//! ```
//!
//! ## Preview
//!
//! ```text
//! Index → index.html
//! 001 VFX (3 images) → vfx/index.html
//!
//! Generated 2 pages
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use std::path::Path;

use crate::render::PreviewPage;
use crate::scan::{DirStatus, ScanReport};

const LABEL_WIDTH: usize = 14;
const TOTALS_WIDTH: usize = 18;
const RULE_WIDTH: usize = 56;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// `"1 image"`, `"2 images"`.
fn image_count(n: usize) -> String {
    if n == 1 {
        "1 image".to_string()
    } else {
        format!("{n} images")
    }
}

fn status_note(status: &DirStatus) -> String {
    match status {
        DirStatus::Found => String::new(),
        DirStatus::Missing => "  (missing)".to_string(),
        DirStatus::Unreadable(reason) => format!("  (unreadable: {reason})"),
    }
}

// ============================================================================
// Scan output
// ============================================================================

/// Format the per-category inventory and totals of a scan.
pub fn format_scan_output(report: &ScanReport) -> Vec<String> {
    let mut lines = Vec::new();

    for collection in &report.collections {
        lines.push(collection.name.clone());
        for cat in &collection.categories {
            lines.push(format!(
                "  {:<width$} {}{}",
                cat.label,
                image_count(cat.count),
                status_note(&cat.status),
                width = LABEL_WIDTH
            ));
        }
        lines.push(String::new());
    }

    lines.push("─".repeat(RULE_WIDTH));
    for collection in &report.collections {
        lines.push(format!(
            "{:<width$}: {}",
            format!("{} images", collection.name),
            collection.total(),
            width = TOTALS_WIDTH
        ));
    }
    lines.push(format!(
        "{:<width$}: {}",
        "Total",
        report.total(),
        width = TOTALS_WIDTH
    ));

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(report: &ScanReport) {
    for line in format_scan_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate output
// ============================================================================

pub fn format_generate_output(module: &Path, manifest: &Path) -> Vec<String> {
    vec![
        format!("Wrote: {}", module.display()),
        format!("Manifest: {}", manifest.display()),
    ]
}

pub fn print_generate_output(module: &Path, manifest: &Path) {
    for line in format_generate_output(module, manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Preview output
// ============================================================================

/// Format the written preview pages, paths relative to `dist`.
///
/// The first page is the index; the rest are numbered collection pages.
pub fn format_preview_output(pages: &[PreviewPage], dist: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    let rel = |p: &Path| p.strip_prefix(dist).unwrap_or(p).display().to_string();

    for (i, page) in pages.iter().enumerate() {
        if i == 0 {
            lines.push(format!("{} \u{2192} {}", page.title, rel(&page.path)));
        } else {
            lines.push(format!(
                "{} {} ({}) \u{2192} {}",
                format_index(i),
                page.title,
                image_count(page.items),
                rel(&page.path)
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} page{}",
        pages.len(),
        if pages.len() == 1 { "" } else { "s" }
    ));
    lines
}

/// Print preview output to stdout.
pub fn print_preview_output(pages: &[PreviewPage], dist: &Path) {
    for line in format_preview_output(pages, dist) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
