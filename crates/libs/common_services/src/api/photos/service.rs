use crate::api::photos::error::PhotosError;
use crate::photo_store::PhotoStore;
use common_types::{Photo, RecommendationResult};
use photo_recommendations::Recommender;

pub async fn list_photos(store: &dyn PhotoStore) -> Result<Vec<Photo>, PhotosError> {
    Ok(store.list_photos().await?)
}

pub async fn get_photo(store: &dyn PhotoStore, photo_id: &str) -> Result<Photo, PhotosError> {
    store
        .find_photo(photo_id)
        .await?
        .ok_or_else(|| PhotosError::PhotoNotFound(photo_id.to_string()))
}

/// Tag suggestions and related photos for `photo_id`, scored against the whole store.
///
/// A failing completion service is not an error here; it shows up in
/// [`RecommendationResult::error`].
pub async fn recommend_for_photo(
    store: &dyn PhotoStore,
    recommender: &Recommender,
    photo_id: &str,
) -> Result<RecommendationResult, PhotosError> {
    let all_photos = store.list_photos().await?;
    let Some(photo) = all_photos.iter().find(|p| p.id == photo_id) else {
        return Err(PhotosError::PhotoNotFound(photo_id.to_string()));
    };
    Ok(recommender
        .generate_photo_recommendations(photo, &all_photos)
        .await)
}
