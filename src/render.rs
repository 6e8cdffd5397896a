//! HTML rendering for the gallery widgets and the static preview site.
//!
//! Every widget renders from its state machine alone: the markup is a pure
//! function of the current state, so re-rendering after any transition gives
//! the new view. Interactive hooks are `data-*` attributes a host script can
//! route back to the state machine methods.
//!
//! ## Preview Site
//!
//! ```text
//! dist/
//! ├── index.html            # Collection links + video catalog
//! ├── vfx/index.html        # One unpaginated gallery per collection
//! └── photography/index.html
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolation is escaped.

use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::SiteConfig;
use crate::gallery::frames::FrameViewer;
use crate::gallery::slider::{ComparisonSlider, Side};
use crate::gallery::video::{VideoError, VideoFacade, VideoSize, VideoState};
use crate::gallery::{GalleryView, ImageStatus, Page};
use crate::naming::slugify;
use crate::types::GalleryManifest;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Video error: {0}")]
    Video(#[from] VideoError),
}

const CSS: &str = include_str!("../static/preview.css");

/// Highlight color of a gallery section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Cyan,
    Amber,
}

impl Accent {
    /// Collections alternate accents in manifest order, starting with cyan.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Accent::Cyan
        } else {
            Accent::Amber
        }
    }

    fn class(self) -> &'static str {
        match self {
            Accent::Cyan => "accent-cyan",
            Accent::Amber => "accent-amber",
        }
    }
}

/// `"1 image"`, `"3 images"`.
fn count_noun(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

// ============================================================================
// Widgets
// ============================================================================

/// Category tabs, item count, grid, pagination controls and the lightbox.
pub fn gallery_view(view: &GalleryView, accent: Accent) -> Markup {
    let visible = view.visible();
    let shown = visible.len();
    let total = view.total_filtered();

    html! {
        div class={ "gallery " (accent.class()) } {
            div.tabs role="tablist" {
                @for cat in view.categories().iter() {
                    @let active = cat == view.active_category();
                    button.tab.active[active] type="button" role="tab"
                        aria-selected=(if active { "true" } else { "false" })
                        data-category=(cat) { (cat) }
                }
            }
            p.count { "Showing " (shown) " of " (count_noun(total, "image")) }
            div.grid {
                @for (i, item) in visible.iter().enumerate() {
                    @let delay = view.stagger_delay(i);
                    button.tile.fade-in-up[delay.is_some()] type="button" data-index=(i)
                        style=[delay.map(|d| format!("animation-delay: {}ms", d.as_millis()))]
                        aria-label={ "View " (item.display_title()) } {
                        img src=(item.source) alt=(item.alt_text) loading="lazy";
                        div.caption {
                            p.title { (item.display_title()) }
                            p.meta { (item.category) }
                        }
                    }
                }
            }
            @if view.shows_pagination() {
                div.pagination {
                    @if !view.all_loaded() {
                        button.load-more type="button" disabled[view.is_loading()] {
                            @if view.is_loading() {
                                "Loading…"
                            } @else {
                                "Load More (" (view.remaining()) " more "
                                (if view.remaining() == 1 { "image" } else { "images" }) ")"
                            }
                        }
                    } @else {
                        button.back-to-start type="button" { "Back to Start" }
                    }
                    p.progress { (shown) " / " (total) " loaded" }
                }
            }
            (lightbox(view))
        }
    }
}

fn lightbox(view: &GalleryView) -> Markup {
    let (Some(index), Some(item)) = (view.lightbox_index(), view.lightbox_item()) else {
        return html! {};
    };
    html! {
        div.lightbox role="dialog" aria-modal="true" aria-label="Image lightbox" data-target="backdrop" {
            figure.lightbox-content data-target="content" {
                img src=(item.source) alt=(item.alt_text);
                figcaption {
                    p.title { (item.display_title()) }
                    p.position { (index + 1) " / " (view.visible_count()) }
                }
            }
            button.lightbox-close type="button" aria-label="Close lightbox" data-target="close" { "×" }
            button.lightbox-prev type="button" aria-label="Previous image" data-target="prev" { "‹" }
            button.lightbox-next type="button" aria-label="Next image" data-target="next" { "›" }
        }
    }
}

/// Before/after slider over two same-sized images.
pub fn comparison_slider(slider: &ComparisonSlider, before_src: &str, after_src: &str) -> Markup {
    let position = slider.position();
    html! {
        div.compare {
            div.compare-after {
                (slider_image(slider, Side::After, after_src))
            }
            div.compare-before style={ "clip-path: inset(0 " (slider.clip_inset()) "% 0 0)" } {
                (slider_image(slider, Side::Before, before_src))
            }
            div.compare-divider style={ "left: " (position) "%" } role="slider" tabindex="0"
                aria-valuenow=(slider.aria_value()) aria-valuemin="0" aria-valuemax="100"
                aria-label="Before and after comparison slider" {}
        }
    }
}

fn slider_image(slider: &ComparisonSlider, side: Side, src: &str) -> Markup {
    let label = slider.label(side);
    html! {
        @if slider.status(side) == ImageStatus::Failed {
            div.placeholder { (label) }
        } @else {
            img src=(src) alt=(label) draggable="false";
        }
        span.compare-label { (label) }
    }
}

/// Stacked layers with per-layer buttons, a range control and a counter.
pub fn frame_viewer(viewer: &FrameViewer) -> Markup {
    let active = viewer.active();
    html! {
        div.frame-viewer {
            @if let Some(title) = viewer.title() {
                h3 { (title) }
            }
            div.frame-stack {
                @for (i, layer) in viewer.layers().iter().enumerate() {
                    div.frame-layer.hidden[!viewer.is_visible(i)] data-layer=(i) {
                        @if viewer.status(i) == Some(ImageStatus::Failed) {
                            span.frame-fallback { (layer.label) }
                        } @else {
                            img src=(layer.source) alt=(layer.label);
                        }
                    }
                }
                span.frame-badge aria-live="polite" { (viewer.active_layer().label) }
            }
            div.frame-controls {
                @for (i, layer) in viewer.layers().iter().enumerate() {
                    button.frame-button.active[i == active] type="button" data-layer=(i)
                        aria-pressed=(if i == active { "true" } else { "false" }) { (layer.label) }
                }
                input type="range" min="0" max=(viewer.len() - 1) value=(active) aria-label="Layer slider";
                span.frame-counter { (viewer.counter()) }
            }
        }
    }
}

/// Thumbnail facade, live player, or outbound-link fallback.
pub fn video_facade(video: &VideoFacade) -> Markup {
    let size_class = match video.size() {
        VideoSize::Default => "video-default",
        VideoSize::Large => "video-large",
    };
    html! {
        div class={ "video " (size_class) } data-video-id=(video.id()) {
            @match video.state() {
                VideoState::Facade { thumbnail } => {
                    button.video-facade type="button" aria-label={ "Play " (video.title()) } {
                        @match thumbnail {
                            ImageStatus::Loading => {
                                div.shimmer {}
                                img src=(video.thumbnail_url()) alt=(video.title()) loading="lazy";
                            }
                            ImageStatus::Loaded => {
                                img src=(video.thumbnail_url()) alt=(video.title()) loading="lazy";
                            }
                            ImageStatus::Failed => {}
                        }
                        span.play-button aria-hidden="true" { "▶" }
                        span.video-title { (video.title()) }
                    }
                    a.video-external href=(video.watch_url()) target="_blank" rel="noopener noreferrer" {
                        "Open on Vimeo →"
                    }
                }
                VideoState::Embedded { failed: false } => {
                    iframe src=(video.embed_url()) title=(video.title())
                        allow="autoplay; fullscreen; picture-in-picture" allowfullscreen {}
                }
                VideoState::Embedded { failed: true } => {
                    div.video-fallback {
                        p { "Video couldn't be loaded here." }
                        a href=(video.watch_url()) target="_blank" rel="noopener noreferrer" {
                            "Watch on Vimeo"
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Preview site
// ============================================================================

/// One written preview page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewPage {
    pub title: String,
    pub path: PathBuf,
    pub items: usize,
}

/// Render the preview site for `manifest` into `dist`.
pub fn write_preview(
    manifest: &GalleryManifest,
    config: &SiteConfig,
    dist: &Path,
) -> Result<Vec<PreviewPage>, PreviewError> {
    fs::create_dir_all(dist)?;
    let page = Page::new();
    let slugs = page_slugs(manifest);
    let mut written = Vec::new();

    for (i, (collection, slug)) in manifest.collections.iter().zip(&slugs).enumerate() {
        let dir = dist.join(slug);
        fs::create_dir_all(&dir)?;
        let view = GalleryView::unpaginated(collection, &page);
        let content = html! {
            header.site-header {
                a href="../index.html" { "Folio" }
                " › "
                (collection.name)
            }
            main {
                h1 { (collection.name) }
                (gallery_view(&view, Accent::for_index(i)))
            }
        };
        let path = dir.join("index.html");
        fs::write(&path, base_document(&collection.name, content).into_string())?;
        debug!(page = %path.display(), items = collection.items.len(), "wrote gallery page");
        written.push(PreviewPage {
            title: collection.name.clone(),
            path,
            items: collection.items.len(),
        });
    }

    let index = render_index(manifest, &slugs, config)?;
    let path = dist.join("index.html");
    fs::write(&path, index.into_string())?;
    written.insert(
        0,
        PreviewPage {
            title: "Index".to_string(),
            path,
            items: manifest.all_items().count(),
        },
    );

    info!(dist = %dist.display(), pages = written.len(), "preview written");
    Ok(written)
}

/// One directory name per collection. Names that slugify alike get `-2`,
/// `-3`, ... in manifest order.
fn page_slugs(manifest: &GalleryManifest) -> Vec<String> {
    let mut taken = HashSet::new();
    manifest
        .collections
        .iter()
        .map(|collection| {
            let base = slugify(&collection.name);
            let mut slug = base.clone();
            let mut n = 2;
            while !taken.insert(slug.clone()) {
                slug = format!("{base}-{n}");
                n += 1;
            }
            slug
        })
        .collect()
}

fn render_index(
    manifest: &GalleryManifest,
    slugs: &[String],
    config: &SiteConfig,
) -> Result<Markup, PreviewError> {
    // Category groups in first-seen order
    let mut groups: Vec<(&str, Vec<VideoFacade>)> = Vec::new();
    for entry in &config.videos {
        let size = if groups.is_empty() || groups[0].0 == entry.category {
            VideoSize::Large
        } else {
            VideoSize::Default
        };
        let facade = VideoFacade::new(&entry.id, &entry.title, entry.url.as_deref(), &config.video)?
            .with_size(size);
        match groups.iter_mut().find(|(c, _)| *c == entry.category) {
            Some((_, videos)) => videos.push(facade),
            None => groups.push((entry.category.as_str(), vec![facade])),
        }
    }

    let content = html! {
        header.site-header { "Folio" }
        main {
            h1 { "Galleries" }
            ul.collections {
                @for (collection, slug) in manifest.collections.iter().zip(slugs) {
                    li {
                        a href={ (slug) "/index.html" } { (collection.name) }
                        " (" (count_noun(collection.items.len(), "image")) ")"
                    }
                }
            }
            @if !groups.is_empty() {
                h2 { "Videos" }
                @for (category, videos) in &groups {
                    section.video-group {
                        h3 { (category) }
                        div.video-grid {
                            @for video in videos {
                                (video_facade(video))
                            }
                        }
                    }
                }
            }
        }
    };
    Ok(base_document("Folio", content))
}

fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                (content)
            }
        }
    }
}
