use crate::routes::{photos, root};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::root,
        root::handlers::health_check,
        // Photos handlers
        photos::handlers::list_photos_handler,
        photos::handlers::get_photo_handler,
        photos::handlers::get_recommendations_handler,
    ),
    components(
        schemas(
            common_types::Photo,
            common_types::GrowingTime,
            common_types::RecommendationResult,
        ),
    ),
    tags(
        (name = "Baby Diary", description = "Baby diary photo API"),
        (name = "Photos", description = "Endpoints for browsing diary photos and their recommendations"),
        (name = "System", description = "Health check"),
    )
)]
pub struct ApiDoc;
