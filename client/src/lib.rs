//! Client for a categorized photo/video media server: typed DTOs, an HTTP
//! client, the page route table and a few filename helpers.

pub mod core;
pub mod infra;

pub use crate::core::api::{ApiError, MediaApi};
pub use crate::core::files::{format_file_size, get_file_extension, is_image_file, is_video_file};
pub use crate::core::models::{CoverImage, HealthStatus, MediaFile, MediaKind, PhotoCategory};
pub use crate::core::pages::{load_page, Page};
pub use crate::core::routes::Route;
pub use crate::infra::config::{ClientConfig, ConfigError};
pub use crate::infra::http::ApiService;
