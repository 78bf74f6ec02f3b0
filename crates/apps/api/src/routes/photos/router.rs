use crate::api_state::ApiContext;
use crate::photos::handlers::{get_photo_handler, get_recommendations_handler, list_photos_handler};
use axum::{Router, routing::get};

pub fn photos_public_router() -> Router<ApiContext> {
    Router::new()
        .route("/photos", get(list_photos_handler))
        .route("/photos/{id}", get(get_photo_handler))
        .route("/photos/{id}/recommendations", get(get_recommendations_handler))
}
