mod error;
mod json_store;
mod memory_store;

pub use error::StoreError;
pub use json_store::JsonPhotoStore;
pub use memory_store::InMemoryPhotoStore;

use async_trait::async_trait;
use common_types::Photo;

/// Read-only source of diary entries.
///
/// Every call reads the current state; there is no caching layer in between.
#[async_trait]
pub trait PhotoStore: Send + Sync {
    /// All photos, in store order.
    async fn list_photos(&self) -> Result<Vec<Photo>, StoreError>;

    async fn find_photo(&self, id: &str) -> Result<Option<Photo>, StoreError> {
        Ok(self
            .list_photos()
            .await?
            .into_iter()
            .find(|photo| photo.id == id))
    }
}
