use crate::photo_store::{PhotoStore, StoreError};
use async_trait::async_trait;
use common_types::Photo;

/// Fixed set of photos, mostly useful for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPhotoStore {
    photos: Vec<Photo>,
}

impl InMemoryPhotoStore {
    #[must_use]
    pub const fn new(photos: Vec<Photo>) -> Self {
        Self { photos }
    }
}

#[async_trait]
impl PhotoStore for InMemoryPhotoStore {
    async fn list_photos(&self) -> Result<Vec<Photo>, StoreError> {
        Ok(self.photos.clone())
    }
}
