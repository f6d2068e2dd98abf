use crate::core::api::{ApiError, MediaApi};
use crate::core::models::{HealthStatus, MediaFile, PhotoCategory};
use crate::core::routes::Route;

/// The data each route shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Home {
        health: HealthStatus,
        categories: Vec<PhotoCategory>,
    },
    Images {
        categories: Vec<PhotoCategory>,
    },
    ImagesCategory {
        category: String,
        photos: Vec<MediaFile>,
    },
    Videos {
        videos: Vec<MediaFile>,
    },
}

pub async fn load_page<A: MediaApi + Sync>(api: &A, route: &Route) -> Result<Page, ApiError> {
    log::debug!("Loading page '{}' ({})", route.name(), route.path());

    let page = match route {
        Route::Home => {
            let (health, categories) =
                tokio::try_join!(api.health_check(), api.get_photo_categories())?;
            Page::Home { health, categories }
        }
        Route::Images => Page::Images {
            categories: api.get_photo_categories().await?,
        },
        Route::ImagesCategory(category) => Page::ImagesCategory {
            category: category.clone(),
            photos: api.get_photos_by_category(category).await?,
        },
        Route::Videos => Page::Videos {
            videos: api.get_videos().await?,
        },
    };

    Ok(page)
}
