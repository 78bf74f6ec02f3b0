use crate::{build_prompt_context, find_related_photos, parse_tags, render_tag_prompt};
use app_state::{CompletionSettings, RecommendationSettings};
use bon::Builder;
use common_types::{Photo, RecommendationResult};
use language_model::{CompletionClient, CompletionRequest, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

pub const RECOMMENDATION_FAILED: &str = "Failed to generate recommendations";

/// Suggests tags for a photo and picks related photos from the diary.
#[derive(Clone, Builder)]
pub struct Recommender {
    client: Arc<dyn CompletionClient>,
    #[builder(default)]
    settings: RecommendationSettings,
    #[builder(default = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,
    #[builder(default = DEFAULT_TEMPERATURE)]
    temperature: f32,
}

impl Recommender {
    #[must_use]
    pub fn from_settings(
        client: Arc<dyn CompletionClient>,
        recommendation: &RecommendationSettings,
        completion: &CompletionSettings,
    ) -> Self {
        Self {
            client,
            settings: recommendation.clone(),
            max_tokens: completion.max_tokens,
            temperature: completion.temperature,
        }
    }

    /// Runs the whole pipeline for `photo` against `all_photos`.
    ///
    /// A failed completion call gives an empty result with [`RECOMMENDATION_FAILED`]
    /// as error. Nothing else can fail.
    #[instrument(skip_all, fields(photo_id = %photo.id, pool_size = all_photos.len()))]
    pub async fn generate_photo_recommendations(
        &self,
        photo: &Photo,
        all_photos: &[Photo],
    ) -> RecommendationResult {
        let context = build_prompt_context(photo, self.settings.birth_date);
        let request = CompletionRequest::new(render_tag_prompt(&context))
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature);

        let response = match self.client.generate_completion(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("Tag suggestion failed: {e}");
                return RecommendationResult::failed(RECOMMENDATION_FAILED);
            }
        };
        debug!(finish_reason = %response.finish_reason, "Completion received");

        let suggested_tags = parse_tags(&response.text);
        let related_photos =
            find_related_photos(photo, all_photos, &suggested_tags, &self.settings);
        info!(
            "Suggested {} tags and {} related photos",
            suggested_tags.len(),
            related_photos.len()
        );

        RecommendationResult {
            suggested_tags,
            related_photos,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use common_types::GrowingTime;
    use language_model::{CompletionError, CompletionResponse, CompletionResult};
    use std::sync::Mutex;

    /// Answers every prompt with the same text and remembers what it was asked.
    #[derive(Default)]
    struct ScriptedCompletion {
        answer: String,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedCompletion {
        fn answering(answer: &str) -> Arc<Self> {
            Arc::new(Self {
                answer: answer.to_string(),
                requests: Mutex::default(),
            })
        }
    }

    #[async_trait]
    impl CompletionClient for ScriptedCompletion {
        async fn generate_completion(
            &self,
            request: CompletionRequest,
        ) -> CompletionResult<CompletionResponse> {
            self.requests.lock().expect("poisoned").push(request);
            Ok(CompletionResponse {
                text: self.answer.clone(),
                finish_reason: "stop".to_string(),
            })
        }
    }

    struct FailingCompletion;

    #[async_trait]
    impl CompletionClient for FailingCompletion {
        async fn generate_completion(
            &self,
            _request: CompletionRequest,
        ) -> CompletionResult<CompletionResponse> {
            Err(CompletionError::EmptyResponse)
        }
    }

    fn photo(id: &str, location: &str, months: u32, instructions: &str) -> Photo {
        Photo {
            id: id.to_string(),
            name: format!("photo {id}"),
            location: location.to_string(),
            instructions: instructions.to_string(),
            url: format!("https://media.example/{id}.mp4"),
            growing_time: Some(GrowingTime::Months(months)),
            owner: "parent".to_string(),
            likes: vec![],
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn park_scenario_end_to_end() {
        let client = ScriptedCompletion::answering(r##"Here you go: ["#outdoors"]"##);
        let recommender = Recommender::builder().client(client.clone()).build();
        let target = photo("t", "Park", 6, "first steps outdoors");
        let a = photo("a", "Park", 7, "walking practice");
        let b = photo("b", "Home", 20, "sleeping");
        let pool = vec![b.clone(), target.clone(), a.clone()];

        let result = recommender.generate_photo_recommendations(&target, &pool).await;

        assert_eq!(result.suggested_tags, vec!["#outdoors"]);
        assert_eq!(result.related_photos, vec![a, b]);
        assert_eq!(result.error, None);
    }

    #[tokio::test]
    async fn completion_failure_gives_empty_result() {
        let recommender = Recommender::builder()
            .client(Arc::new(FailingCompletion))
            .build();
        let target = photo("t", "Park", 6, "first steps outdoors");
        let pool = vec![target.clone(), photo("a", "Park", 7, "walking practice")];

        let result = recommender.generate_photo_recommendations(&target, &pool).await;

        assert_eq!(
            result,
            RecommendationResult {
                suggested_tags: vec![],
                related_photos: vec![],
                error: Some("Failed to generate recommendations".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn unparsable_answer_uses_split_tags() {
        let client = ScriptedCompletion::answering("#bath, #bubbles");
        let recommender = Recommender::builder().client(client).build();
        let target = photo("t", "Home", 3, "first bath");
        let pool = vec![photo("a", "Garden", 30, "Bubbles in the garden")];

        let result = recommender.generate_photo_recommendations(&target, &pool).await;

        assert_eq!(result.suggested_tags, vec!["bath", "bubbles"]);
        assert_eq!(result.related_photos.len(), 1);
        assert_eq!(result.error, None);
    }

    #[tokio::test]
    async fn request_carries_context_and_sampling_settings() {
        let client = ScriptedCompletion::answering("[]");
        let recommender = Recommender::from_settings(
            client.clone(),
            &RecommendationSettings::default(),
            &CompletionSettings {
                max_tokens: 80,
                temperature: 0.3,
                ..CompletionSettings::default()
            },
        );
        let target = photo("t", "Zoo", 14, "looking at giraffes");

        let result = recommender.generate_photo_recommendations(&target, &[]).await;
        assert_eq!(result, RecommendationResult::default());

        let requests = client.requests.lock().expect("poisoned");
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.max_tokens, 80);
        assert!((request.temperature - 0.3).abs() < f32::EPSILON);
        assert!(request.prompt.contains("Location: Zoo"));
        assert!(request.prompt.contains("Age: 1 years 2 months"));
        assert!(request.prompt.contains("Description: looking at giraffes"));
    }

    #[tokio::test]
    async fn keeps_best_five_of_a_larger_pool() {
        let client = ScriptedCompletion::answering(r#"["swings"]"#);
        let recommender = Recommender::builder().client(client).build();
        let target = photo("t", "Park", 12, "swings");
        let pool: Vec<Photo> = (0..8)
            .map(|i| {
                let detail = if i % 2 == 0 { "swings" } else { "nap" };
                photo(&format!("p{i}"), "Park", 40, detail)
            })
            .collect();

        let result = recommender.generate_photo_recommendations(&target, &pool).await;

        let ids: Vec<&str> = result.related_photos.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p0", "p2", "p4", "p6", "p1"]);
    }
}
