use axum::Json;
use axum::extract::{Path, State};
use common_services::api::photos::error::PhotosError;
use common_services::api::photos::interfaces::PhotoIdParams;
use common_services::api::photos::service::{get_photo, list_photos, recommend_for_photo};
use common_services::photo_store::PhotoStore;
use common_types::{Photo, RecommendationResult};
use photo_recommendations::Recommender;
use std::sync::Arc;
use tracing::instrument;

/// Get all diary photos in store order.
///
/// # Errors
///
/// Returns a `PhotosError` if the photo store cannot be read.
#[utoipa::path(
    get,
    path = "/photos",
    tag = "Photos",
    responses(
        (status = 200, description = "All photos.", body = Vec<Photo>),
        (status = 500, description = "The photo store could not be read."),
    )
)]
#[instrument(skip(photo_store), err(Debug))]
pub async fn list_photos_handler(
    State(photo_store): State<Arc<dyn PhotoStore>>,
) -> Result<Json<Vec<Photo>>, PhotosError> {
    let photos = list_photos(photo_store.as_ref()).await?;
    Ok(Json(photos))
}

/// Get one photo.
///
/// # Errors
///
/// Returns a `PhotosError` if the photo does not exist or the store cannot be read.
#[utoipa::path(
    get,
    path = "/photos/{id}",
    tag = "Photos",
    params(
        PhotoIdParams
    ),
    responses(
        (status = 200, description = "The photo.", body = Photo),
        (status = 404, description = "Photo not found."),
        (status = 500, description = "The photo store could not be read."),
    )
)]
#[instrument(skip(photo_store), err(Debug))]
pub async fn get_photo_handler(
    State(photo_store): State<Arc<dyn PhotoStore>>,
    Path(params): Path<PhotoIdParams>,
) -> Result<Json<Photo>, PhotosError> {
    let photo = get_photo(photo_store.as_ref(), &params.id).await?;
    Ok(Json(photo))
}

/// Suggest tags for a photo and list related photos.
///
/// An unavailable text-generation service still answers 200, with empty lists and
/// the `error` field set.
///
/// # Errors
///
/// Returns a `PhotosError` if the photo does not exist or the store cannot be read.
#[utoipa::path(
    get,
    path = "/photos/{id}/recommendations",
    tag = "Photos",
    params(
        PhotoIdParams
    ),
    responses(
        (status = 200, description = "Suggested tags and up to five related photos.", body = RecommendationResult),
        (status = 404, description = "Photo not found."),
        (status = 500, description = "The photo store could not be read."),
    )
)]
#[instrument(skip(photo_store, recommender), err(Debug))]
pub async fn get_recommendations_handler(
    State(photo_store): State<Arc<dyn PhotoStore>>,
    State(recommender): State<Recommender>,
    Path(params): Path<PhotoIdParams>,
) -> Result<Json<RecommendationResult>, PhotosError> {
    let result = recommend_for_photo(photo_store.as_ref(), &recommender, &params.id).await?;
    Ok(Json(result))
}
