use crate::core::api::{self, ApiError, MediaApi};
use crate::core::models::{HealthStatus, MediaFile, PhotoCategory};
use crate::infra::config::ClientConfig;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

// ── Client ───────────────────────────────────────────────────────

/// HTTP client for the media server. Holds nothing but the base URL and a
/// connection pool, so one instance can serve any number of concurrent calls.
#[derive(Clone)]
pub struct ApiService {
    client: Client,
    base_url: String,
}

impl ApiService {
    /// `base_url` is used verbatim as the prefix of every request; use
    /// `from_config` to get a validated, slash-trimmed one.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `base_url + /api/photos` with the category appended as exactly one
    /// percent-encoded path segment, so `#`, `?`, `/` and `..` inside a
    /// category name cannot leave the category endpoint.
    fn category_url(&self, category: &str) -> String {
        let raw = format!("{}{}", self.base_url, api::PHOTOS);
        match Url::parse(&raw) {
            Ok(mut url) => {
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments.push(category);
                }
                url.into()
            }
            // Unparseable base: send() reports it as a transport error
            Err(_) => format!("{raw}/{category}"),
        }
    }

    /// GET `base_url + endpoint` and decode the body.
    async fn request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = format!("{}{endpoint}", self.base_url);
        self.request_url(endpoint, &url).await
    }

    /// The single place request failures are logged: error level, tagged
    /// with the endpoint, then handed back as-is.
    async fn request_url<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        url: &str,
    ) -> Result<T, ApiError> {
        let result = self.fetch(endpoint, url).await;
        if let Err(e) = &result {
            log::error!("API request failed [{endpoint}]: {e}");
        }
        result
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str, url: &str) -> Result<T, ApiError> {
        log::debug!("GET {url}");

        let transport = |source| ApiError::Transport {
            endpoint: endpoint.to_string(),
            source,
        };

        let resp = self.client.get(url).send().await.map_err(transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(transport)?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Parse {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

impl MediaApi for ApiService {
    async fn get_photo_categories(&self) -> Result<Vec<PhotoCategory>, ApiError> {
        self.request(api::PHOTO_CATEGORIES).await
    }

    async fn get_photos_by_category(&self, category: &str) -> Result<Vec<MediaFile>, ApiError> {
        let endpoint = api::photos_in_category(category);
        self.request_url(&endpoint, &self.category_url(category)).await
    }

    async fn get_photos(&self) -> Result<Vec<MediaFile>, ApiError> {
        self.request(api::PHOTOS).await
    }

    async fn get_videos(&self) -> Result<Vec<MediaFile>, ApiError> {
        self.request(api::VIDEOS).await
    }

    async fn get_all_media(&self) -> Result<Vec<MediaFile>, ApiError> {
        self.request(api::MEDIA).await
    }

    async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        self.request(api::HEALTH).await
    }

    fn get_media_url(&self, relative_url: &str) -> String {
        format!("{}{relative_url}", self.base_url)
    }
}
