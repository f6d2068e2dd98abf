use serde::Deserialize;

use crate::core::files::{is_image_file, is_video_file};

#[derive(Debug, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classifies a filename by extension. `None` for anything that is
    /// neither a known image nor a known video type.
    pub fn from_filename(filename: &str) -> Option<Self> {
        if is_image_file(filename) {
            Some(MediaKind::Image)
        } else if is_video_file(filename) {
            Some(MediaKind::Video)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// A single image or video as described by the media server.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MediaFile {
    pub id: String,
    pub name: String,
    pub url: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CoverImage {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PhotoCategory {
    pub id: String,
    pub name: String,
    pub english_name: String,
    pub photo_count: u64,
    #[serde(default)]
    pub cover_image: Option<CoverImage>,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}
