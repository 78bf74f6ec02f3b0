use crate::Photo;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Tag suggestions and related photos for one diary entry.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub suggested_tags: Vec<String>,
    /// Highest scoring photos first.
    pub related_photos: Vec<Photo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecommendationResult {
    /// Empty result carrying an error message for the caller.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            suggested_tags: Vec::new(),
            related_photos: Vec::new(),
            error: Some(message.into()),
        }
    }
}
