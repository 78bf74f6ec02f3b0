#![deny(clippy::unwrap_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

mod api;

pub use api::*;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("completion failed: HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("completion failed: JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("completion failed: API error (status {status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("completion failed: response contained no choices")]
    EmptyResponse,
}

pub type CompletionResult<T> = Result<T, CompletionError>;

pub const DEFAULT_MAX_TOKENS: u32 = 150;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// One prompt for the text-generation service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    pub text: String,
    /// Why generation stopped, e.g. `stop` or `length`.
    pub finish_reason: String,
}

/// Anything that turns a prompt into generated text.
///
/// Implementations must be shareable across requests; the recommendation
/// pipeline holds one behind an `Arc`.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn generate_completion(
        &self,
        request: CompletionRequest,
    ) -> CompletionResult<CompletionResponse>;
}
