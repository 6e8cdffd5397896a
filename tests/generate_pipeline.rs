//! End-to-end: asset tree → scan → data module + manifest.json → reload →
//! gallery view and preview site.
//!
//! Run with: cargo test --test generate_pipeline

use chrono::{TimeZone, Utc};
use folio::config::{SiteConfig, load_config};
use folio::gallery::{GalleryView, LoadMore, Page};
use folio::scan::DirStatus;
use folio::{emit, render, scan};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tempfile::TempDir;

fn touch<S: AsRef<str>>(root: &Path, dir: &str, files: &[S]) {
    let path = root.join(dir);
    fs::create_dir_all(&path).unwrap();
    for f in files {
        fs::write(path.join(f.as_ref()), b"img").unwrap();
    }
}

fn public_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    touch(
        tmp.path(),
        "vfx/gallery/3d",
        &["wide_Angle.webp", "hero-shot_01.webp", "notes.txt"],
    );
    let sketches: Vec<String> = (1..=9).map(|n| format!("sketch-{n:02}.webp")).collect();
    touch(tmp.path(), "vfx/gallery/drawings", &sketches);
    touch(tmp.path(), "photography/school", &["yard.webp"]);
    tmp
}

#[test]
fn generate_then_reload_drives_gallery() {
    let public = public_tree();
    let work = TempDir::new().unwrap();
    let config = SiteConfig::default();

    let report = scan::scan(public.path(), &config);
    assert_eq!(report.total(), 12);
    let additional = &report.collections[0].categories[1];
    assert_eq!(additional.label, "Additional");
    assert_eq!(additional.status, DirStatus::Missing);

    let module_path = work.path().join("src/data/gallery-images.ts");
    let manifest_path = work.path().join(".folio-temp/manifest.json");
    let generated_at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    emit::write_module(&module_path, &emit::render_module(&report.manifest, generated_at))
        .unwrap();
    emit::write_manifest_json(&manifest_path, &report.manifest).unwrap();

    let module = fs::read_to_string(&module_path).unwrap();
    assert!(module.contains("// Generated: 2026-01-02T03:04:05.000Z"));
    assert!(module.contains(
        r#"{ id: "vfx-3d-001", src: "/vfx/gallery/3d/hero-shot_01.webp", alt: "Hero Shot 01", category: "3D" },"#
    ));
    assert!(module.contains(
        r#"{ id: "vfx-3d-002", src: "/vfx/gallery/3d/wide_Angle.webp", alt: "Wide Angle", category: "3D" },"#
    ));
    assert!(module.contains(r#"export const vfxGalleryCategories = ["All","3D","Drawings"] as const;"#));
    assert!(!module.contains("notes"));

    let manifest = emit::read_manifest_json(&manifest_path).unwrap();
    assert_eq!(manifest, report.manifest);

    let vfx = manifest.collection("VFX").unwrap();
    let page = Page::new();
    let mut view = GalleryView::new(vfx, &page, &config.pagination);
    assert_eq!(view.visible_count(), 8);
    assert_eq!(view.remaining(), 3);

    let t0 = Instant::now();
    let LoadMore::Scheduled(due) = view.load_more(t0) else {
        panic!("expected a scheduled load");
    };
    assert!(view.poll(due));
    assert!(view.all_loaded());
    assert!(view.is_new(8));

    assert!(view.select_category("Drawings"));
    assert_eq!(view.visible_count(), 8);
    assert_eq!(view.total_filtered(), 9);
    assert!(view.open_lightbox(0));
    assert!(page.scroll_locked());
    drop(view);
    assert!(!page.scroll_locked());
}

#[test]
fn regeneration_is_identical_apart_from_timestamp() {
    let public = public_tree();
    let config = SiteConfig::default();
    let first = emit::render_module(
        &scan::scan(public.path(), &config).manifest,
        Utc.timestamp_opt(0, 0).unwrap(),
    );
    let second = emit::render_module(
        &scan::scan(public.path(), &config).manifest,
        Utc.timestamp_opt(3600, 0).unwrap(),
    );
    let strip = |s: &str| {
        s.lines()
            .filter(|l| !l.starts_with("// Generated: "))
            .collect::<Vec<_>>()
            .join("\n")
    };
    assert_ne!(first, second);
    assert_eq!(strip(&first), strip(&second));
}

#[test]
fn config_file_changes_extension_and_page_size() {
    let public = TempDir::new().unwrap();
    touch(public.path(), "vfx/gallery/3d", &["a.png", "b.PNG", "c.webp"]);
    let config_path = public.path().join("folio.toml");
    fs::write(
        &config_path,
        "extension = \"png\"\n\n[pagination]\npage_size = 1\n",
    )
    .unwrap();

    let config = load_config(&config_path).unwrap();
    assert_eq!(config.pagination.page_size, 1);
    assert_eq!(config.pagination.load_more_delay_ms, 300);

    let report = scan::scan(public.path(), &config);
    let vfx = &report.manifest.collections[0];
    assert_eq!(vfx.items.len(), 2);
    assert_eq!(vfx.items[1].source, "/vfx/gallery/3d/b.PNG");

    let view = GalleryView::new(vfx, &Page::new(), &config.pagination);
    assert_eq!(view.visible_count(), 1);
    assert!(view.shows_pagination());
}

#[test]
fn preview_site_from_manifest() {
    let public = public_tree();
    let dist = TempDir::new().unwrap();
    let config = SiteConfig::default();
    let manifest = scan::scan(public.path(), &config).manifest;

    let pages = render::write_preview(&manifest, &config, dist.path()).unwrap();
    assert_eq!(pages.len(), 3);
    assert!(dist.path().join("vfx/index.html").is_file());
    assert!(dist.path().join("photography/index.html").is_file());

    let photo = fs::read_to_string(dist.path().join("photography/index.html")).unwrap();
    assert!(photo.contains("accent-amber"));
    assert!(photo.contains(r#"src="/photography/school/yard.webp""#));
}
