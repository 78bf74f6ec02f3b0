use crate::api_state::ApiContext;
use crate::create_router;
use app_state::AppSettings;
use color_eyre::Result;
use common_services::photo_store::JsonPhotoStore;
use http::{HeaderValue, header};
use language_model::LlamaClient;
use photo_recommendations::Recommender;
use std::sync::Arc;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Wires the completion client and photo store from `settings` into an [`ApiContext`].
pub fn build_context(settings: AppSettings) -> Result<ApiContext> {
    let completion = &settings.completion;
    let client = LlamaClient::with_base_url(&completion.base_url)
        .model(completion.model.clone())
        .maybe_api_key(completion.api_key.clone())
        .top_p(completion.top_p)
        .timeout(Duration::from_secs(completion.timeout_seconds))
        .build()?;
    let recommender =
        Recommender::from_settings(Arc::new(client), &settings.recommendation, completion);
    let photo_store = Arc::new(JsonPhotoStore::new(&settings.photo_store.path));

    Ok(ApiContext {
        settings,
        photo_store,
        recommender,
    })
}

pub async fn serve(settings: AppSettings) -> Result<()> {
    // --- Server Startup ---
    info!("🚀 Initializing server...");
    info!(
        "Reading photos from {}, completions from {}",
        settings.photo_store.path.display(),
        settings.completion.base_url
    );
    let api_state = build_context(settings)?;

    // --- CORS Configuration ---
    let allowed_origins: Vec<HeaderValue> = api_state
        .settings
        .api
        .allowed_origins
        .iter()
        .filter_map(|s| match s.parse() {
            Ok(hv) => Some(hv),
            Err(e) => {
                error!("Invalid CORS origin configured: {} - Error: {}", s, e);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_methods(cors::Any)
        .allow_origin(allowed_origins)
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            header::USER_AGENT,
            header::CACHE_CONTROL,
        ]);

    let listen_address = format!(
        "{}:{}",
        api_state.settings.api.host, api_state.settings.api.port
    );

    // --- Create Router ---
    let app = create_router(api_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CompressionLayer::new());

    let listener = tokio::net::TcpListener::bind(&listen_address).await?;
    info!("📚 Docs available at http://{listen_address}/docs");
    info!("✅ Server listening on http://{listen_address}");

    axum::serve(listener, app).await?;
    Ok(())
}
