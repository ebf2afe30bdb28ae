pub mod from_photo;
pub mod from_text;
pub mod from_upload;
pub mod random;

use crate::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use souschef_core::MAX_FILE_SIZE;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/from-text", post(from_text::from_text))
        .route("/from-photo", post(from_photo::from_photo))
        .route("/from-upload", post(from_upload::from_upload))
        .route("/random", post(random::random))
        // Leave room past the image limit so oversize uploads reach the
        // handler's size check instead of a bare 413
        .layer(DefaultBodyLimit::max(2 * MAX_FILE_SIZE))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        from_text::from_text,
        from_photo::from_photo,
        from_upload::from_upload,
        random::random,
    ),
    components(schemas(
        from_text::FromTextRequest,
        from_photo::FromPhotoRequest,
        from_upload::FromUploadRequest,
    ))
)]
pub struct ApiDoc;
