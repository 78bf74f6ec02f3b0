use crate::photo_store::{PhotoStore, StoreError};
use async_trait::async_trait;
use common_types::Photo;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Photos kept as one json array on disk, re-read on every call.
#[derive(Debug, Clone)]
pub struct JsonPhotoStore {
    path: PathBuf,
}

impl JsonPhotoStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PhotoStore for JsonPhotoStore {
    async fn list_photos(&self) -> Result<Vec<Photo>, StoreError> {
        let bytes = fs::read(&self.path).await.map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let photos: Vec<Photo> = serde_json::from_slice(&bytes)?;
        debug!("Read {} photos from {}", photos.len(), self.path.display());
        Ok(photos)
    }
}
