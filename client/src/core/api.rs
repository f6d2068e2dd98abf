use std::future::Future;

use crate::core::models::{HealthStatus, MediaFile, PhotoCategory};
use thiserror::Error;

pub const PHOTO_CATEGORIES: &str = "/api/photo-categories";
pub const PHOTOS: &str = "/api/photos";
pub const VIDEOS: &str = "/api/videos";
pub const MEDIA: &str = "/api/media";
pub const HEALTH: &str = "/api/health";

pub fn photos_in_category(category: &str) -> String {
    format!("{PHOTOS}/{category}")
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error! status: {status} [{endpoint}]")]
    HttpStatus { endpoint: String, status: u16 },

    #[error("Network error [{endpoint}]: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Parse error [{endpoint}]: {source}")]
    Parse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn endpoint(&self) -> &str {
        match self {
            ApiError::HttpStatus { endpoint, .. }
            | ApiError::Transport { endpoint, .. }
            | ApiError::Parse { endpoint, .. } => endpoint,
        }
    }

    /// Status code for `HttpStatus` failures, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The queries a media server answers. `ApiService` is the HTTP
/// implementation; pages only depend on this trait.
pub trait MediaApi {
    fn get_photo_categories(
        &self,
    ) -> impl Future<Output = Result<Vec<PhotoCategory>, ApiError>> + Send;

    fn get_photos_by_category(
        &self,
        category: &str,
    ) -> impl Future<Output = Result<Vec<MediaFile>, ApiError>> + Send;

    fn get_photos(&self) -> impl Future<Output = Result<Vec<MediaFile>, ApiError>> + Send;

    fn get_videos(&self) -> impl Future<Output = Result<Vec<MediaFile>, ApiError>> + Send;

    fn get_all_media(&self) -> impl Future<Output = Result<Vec<MediaFile>, ApiError>> + Send;

    fn health_check(&self) -> impl Future<Output = Result<HealthStatus, ApiError>> + Send;

    fn get_media_url(&self, relative_url: &str) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_endpoint() {
        assert_eq!(photos_in_category("landscape"), "/api/photos/landscape");
    }

    #[test]
    fn test_status_accessor() {
        let err = ApiError::HttpStatus { endpoint: PHOTOS.into(), status: 404 };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.endpoint(), "/api/photos");
        assert_eq!(err.to_string(), "HTTP error! status: 404 [/api/photos]");
    }

    #[test]
    fn test_parse_error_has_no_status() {
        let source = serde_json::from_str::<HealthStatus>("not json").unwrap_err();
        let err = ApiError::Parse { endpoint: HEALTH.into(), source };
        assert_eq!(err.status(), None);
        assert_eq!(err.endpoint(), "/api/health");
    }
}
