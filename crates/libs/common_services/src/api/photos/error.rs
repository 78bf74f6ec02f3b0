use crate::photo_store::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum PhotosError {
    #[error("photo store error")]
    Store(#[from] StoreError),

    #[error("Photo not found: {0}")]
    PhotoNotFound(String),
}

fn log_error(error: &PhotosError) {
    match error {
        PhotosError::Store(e) => error!("Photo store failed: {}", e),
        PhotosError::PhotoNotFound(id) => warn!("Photo not found: {}", id),
    }
}

impl IntoResponse for PhotosError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, error_message) = match self {
            Self::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "The photo store could not be read.".to_string(),
            ),
            Self::PhotoNotFound(photo_id) => (
                StatusCode::NOT_FOUND,
                format!("Photo not found: {photo_id}"),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
