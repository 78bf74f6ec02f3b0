use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub logging: LoggingSettings,
    pub api: ApiSettings,
    #[serde(default)]
    pub completion: CompletionSettings,
    #[serde(default)]
    pub recommendation: RecommendationSettings,
    pub photo_store: PhotoStoreSettings,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

/// Configuration for the API server.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u32,
    pub allowed_origins: Vec<String>,
}

/// Text-generation service used for tag suggestions.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CompletionSettings {
    /// Root of an OpenAI compatible server, without the `/v1/...` suffix.
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    /// Transport timeout for one completion call.
    pub timeout_seconds: u64,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            model: String::new(),
            api_key: None,
            max_tokens: 150,
            temperature: 0.7,
            top_p: 0.8,
            timeout_seconds: 60,
        }
    }
}

/// Scoring knobs for related photos.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RecommendationSettings {
    /// Birthday of the child. Date valued growing times are measured from here.
    pub birth_date: NaiveDate,
    /// Awarded when candidate and target share the exact same location.
    pub location_weight: u32,
    /// Awarded when both ages are known and lie within `age_window_months`.
    pub age_weight: u32,
    /// Awarded per suggested tag found in the candidate description.
    pub tag_weight: u32,
    pub age_window_months: u32,
    pub max_related: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            birth_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            location_weight: 3,
            age_weight: 2,
            tag_weight: 1,
            age_window_months: 3,
            max_related: 5,
        }
    }
}

/// Where the diary entries are read from.
#[derive(Debug, Deserialize, Clone)]
pub struct PhotoStoreSettings {
    /// Json file holding an array of photos.
    pub path: PathBuf,
}
