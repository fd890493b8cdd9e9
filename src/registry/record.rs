//! Content record types for the portfolio registries.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Kind of portfolio content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Graphics design project
    Graphics,

    /// Video project
    Video,
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Graphics => write!(f, "graphics"),
            ContentKind::Video => write!(f, "video"),
        }
    }
}

impl std::str::FromStr for ContentKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "graphics" | "graphic" | "design" => Ok(ContentKind::Graphics),
            "video" | "videos" => Ok(ContentKind::Video),
            _ => anyhow::bail!("Unknown content kind: {}", s),
        }
    }
}

/// Extra display metadata carried only by video records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDetails {
    /// Poster image shown before playback
    pub thumbnail_url: String,

    /// Display duration, e.g. "2:45"
    pub duration: String,

    /// Display file size, e.g. "45MB"
    pub size: String,
}

/// A single portfolio content record.
///
/// Records are defined once at process start and never mutated. The id is
/// assumed unique within its registry; nothing enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Stable identifier, unique within its registry
    pub id: String,

    /// Human-readable title
    pub title: String,

    /// Display description
    pub description: String,

    /// Grouping key, matched exactly (case-sensitive)
    pub category: String,

    /// Display tags, in order
    #[serde(default)]
    pub tags: Vec<String>,

    /// Kind of content
    pub kind: ContentKind,

    /// Primary media locator. Never validated or fetched here.
    pub media_url: String,

    /// Download locator, usually the same resource as `media_url`
    pub download_url: String,

    /// Video-only metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoDetails>,
}

impl ContentRecord {
    /// Create a new graphics record. The download URL defaults to the media URL.
    pub fn graphics(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        media_url: impl Into<String>,
    ) -> Self {
        let media_url = media_url.into();
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            tags: Vec::new(),
            kind: ContentKind::Graphics,
            download_url: media_url.clone(),
            media_url,
            video: None,
        }
    }

    /// Create a new video record. The download URL defaults to the media URL.
    pub fn video(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        media_url: impl Into<String>,
    ) -> Self {
        let media_url = media_url.into();
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            tags: Vec::new(),
            kind: ContentKind::Video,
            download_url: media_url.clone(),
            media_url,
            video: None,
        }
    }

    /// Add multiple tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Override the download URL
    pub fn with_download_url(mut self, url: impl Into<String>) -> Self {
        self.download_url = url.into();
        self
    }

    /// Attach video display metadata
    pub fn with_video_details(
        mut self,
        thumbnail_url: impl Into<String>,
        duration: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        self.video = Some(VideoDetails {
            thumbnail_url: thumbnail_url.into(),
            duration: duration.into(),
            size: size.into(),
        });
        self
    }
}
