use crate::{
    ApiSettings, CompletionSettings, LoggingSettings, PhotoStoreSettings, RawSettings,
    RecommendationSettings,
};
use color_eyre::eyre::{Result, bail};
use serde::Deserialize;
use std::path::absolute;

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub logging: LoggingSettings,
    pub api: ApiSettings,
    pub completion: CompletionSettings,
    pub recommendation: RecommendationSettings,
    pub photo_store: PhotoStoreSettings,
}

impl TryFrom<RawSettings> for AppSettings {
    type Error = color_eyre::Report;

    fn try_from(raw: RawSettings) -> Result<Self> {
        let photo_store = PhotoStoreSettings {
            path: absolute(&raw.photo_store.path)?,
        };
        if raw.recommendation.max_related == 0 {
            bail!("recommendation.max_related must be at least 1");
        }

        Ok(Self {
            logging: raw.logging,
            api: raw.api,
            completion: raw.completion,
            recommendation: raw.recommendation,
            photo_store,
        })
    }
}
