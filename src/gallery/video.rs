//! Click-to-load video facade.
//!
//! ```text
//! Facade { thumbnail } ──activate──▶ Embedded { failed }
//! ```
//!
//! The transition is one-way and only happens on activation. A failed
//! thumbnail leaves the play control usable; a failed embed shows an
//! outbound link instead of the player.

use thiserror::Error;

use super::ImageStatus;
use crate::config::VideoConfig;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VideoError {
    #[error("video id '{0}' must be numeric")]
    InvalidId(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoSize {
    #[default]
    Default,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoState {
    Facade { thumbnail: ImageStatus },
    Embedded { failed: bool },
}

#[derive(Debug, Clone)]
pub struct VideoFacade {
    id: String,
    title: String,
    size: VideoSize,
    thumbnail_url: String,
    embed_url: String,
    watch_url: String,
    state: VideoState,
}

impl VideoFacade {
    /// Build a facade for player id `id`. `watch_url` overrides the
    /// configured outbound link template.
    pub fn new(
        id: &str,
        title: &str,
        watch_url: Option<&str>,
        config: &VideoConfig,
    ) -> Result<Self, VideoError> {
        if !is_numeric_id(id) {
            return Err(VideoError::InvalidId(id.to_string()));
        }
        Ok(Self {
            id: id.to_string(),
            title: title.to_string(),
            size: VideoSize::Default,
            thumbnail_url: fill(&config.thumbnail_url, id),
            embed_url: fill(&config.embed_url, id),
            watch_url: watch_url.map_or_else(|| fill(&config.watch_url, id), str::to_string),
            state: VideoState::Facade {
                thumbnail: ImageStatus::Loading,
            },
        })
    }

    pub fn with_size(mut self, size: VideoSize) -> Self {
        self.size = size;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> VideoSize {
        self.size
    }

    pub fn state(&self) -> VideoState {
        self.state
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self.state, VideoState::Embedded { .. })
    }

    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }

    pub fn embed_url(&self) -> &str {
        &self.embed_url
    }

    pub fn watch_url(&self) -> &str {
        &self.watch_url
    }

    /// User clicked play. Returns whether this mounted the player.
    pub fn activate(&mut self) -> bool {
        if self.is_embedded() {
            return false;
        }
        self.state = VideoState::Embedded { failed: false };
        true
    }

    pub fn thumbnail_loaded(&mut self) {
        self.set_thumbnail(ImageStatus::Loaded);
    }

    /// Thumbnail failed. The gradient placeholder shows and play still works.
    pub fn thumbnail_failed(&mut self) {
        self.set_thumbnail(ImageStatus::Failed);
    }

    fn set_thumbnail(&mut self, status: ImageStatus) {
        if let VideoState::Facade { thumbnail } = &mut self.state {
            *thumbnail = status;
        }
    }

    /// The embedded player reported an error. Ignored before activation.
    pub fn embed_failed(&mut self) {
        if let VideoState::Embedded { failed } = &mut self.state {
            *failed = true;
        }
    }
}

fn is_numeric_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

fn fill(template: &str, id: &str) -> String {
    template.replace("{id}", id)
}
