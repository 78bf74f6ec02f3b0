use crate::{
    CompletionClient, CompletionError, CompletionRequest, CompletionResponse, CompletionResult,
};
use async_trait::async_trait;
use bon::bon;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Serialize, Debug)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    stream: bool,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Deserialize, Debug)]
pub struct ChatFullResponse {
    pub choices: Vec<FullChoice>,
}

#[derive(Deserialize, Debug)]
pub struct FullChoice {
    pub message: FullMessage,
    pub finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct FullMessage {
    pub content: Option<String>,
}

impl ChatFullResponse {
    /// Parses a raw response body. A body that is not a chat completion is a
    /// [`CompletionError::Json`].
    pub fn from_body(body: &str) -> CompletionResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Takes the first choice. Missing content reads as empty text.
    pub fn into_completion(self) -> CompletionResult<CompletionResponse> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyResponse)?;
        Ok(CompletionResponse {
            text: choice.message.content.unwrap_or_default(),
            finish_reason: choice
                .finish_reason
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }
}

/// Client for an OpenAI compatible `/v1/chat/completions` endpoint
/// (llama.cpp server, vLLM, OpenAI itself).
#[derive(Clone)]
pub struct LlamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    top_p: f32,
}

#[bon]
impl LlamaClient {
    #[builder(start_fn = with_base_url)]
    pub fn new(
        #[builder(start_fn)] base_url: &str,
        model: Option<String>,
        api_key: Option<String>,
        top_p: Option<f32>,
        timeout: Option<Duration>,
    ) -> CompletionResult<Self> {
        let mut http = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            http = http.timeout(timeout);
        }
        Ok(Self {
            http: http.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.unwrap_or_default(),
            api_key,
            top_p: top_p.unwrap_or(0.8),
        })
    }

    fn build_request(&self, request: CompletionRequest) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: request.prompt,
            }],
            stream: false,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            top_p: self.top_p,
        }
    }
}

#[async_trait]
impl CompletionClient for LlamaClient {
    async fn generate_completion(
        &self,
        request: CompletionRequest,
    ) -> CompletionResult<CompletionResponse> {
        let req_body = self.build_request(request);
        let url = format!("{}/v1/chat/completions", self.base_url);
        debug!(%url, max_tokens = req_body.max_tokens, "Requesting completion");

        let mut builder = self.http.post(url).json(&req_body);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }
        let response = builder.send().await?;
        if !response.status().is_success() {
            return Err(CompletionError::Api {
                status: response.status(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        let body = response.text().await?;
        ChatFullResponse::from_body(&body)?.into_completion()
    }
}
