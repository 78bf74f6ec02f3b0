use app_state::AppSettings;
use axum::extract::FromRef;
use common_services::photo_store::PhotoStore;
use photo_recommendations::Recommender;
use std::sync::Arc;

#[derive(Clone)]
pub struct ApiContext {
    pub settings: AppSettings,
    pub photo_store: Arc<dyn PhotoStore>,
    pub recommender: Recommender,
}

impl FromRef<ApiContext> for Arc<dyn PhotoStore> {
    fn from_ref(state: &ApiContext) -> Self {
        state.photo_store.clone()
    }
}

impl FromRef<ApiContext> for Recommender {
    fn from_ref(state: &ApiContext) -> Self {
        state.recommender.clone()
    }
}
