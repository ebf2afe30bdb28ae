use crate::api::{generation_error_response, ErrorResponse};
use crate::types::RecipeResponse;
use crate::AppState;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use souschef_core::{validate_image, DataUri, MAX_FILE_SIZE};
use utoipa::ToSchema;

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct FromUploadRequest {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/api/recipes/from-upload",
    tag = "recipes",
    request_body(content_type = "multipart/form-data", content = FromUploadRequest),
    responses(
        (status = 200, description = "Generated recipe", body = RecipeResponse),
        (status = 400, description = "Invalid image file", body = ErrorResponse),
        (status = 503, description = "AI service unavailable", body = ErrorResponse)
    )
)]
pub async fn from_upload(
    State(client): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    // Get the file from multipart
    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file provided".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!("Multipart read error: {}", e);
            let detail = e.body_text();
            let error_msg = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                "Please upload an image smaller than 4MB.".to_string()
            } else if detail.contains("incomplete multipart stream") {
                // An empty form truncates the stream instead of yielding Ok(None)
                "No file provided".to_string()
            } else {
                format!("Failed to read multipart data: {}", detail)
            };
            return (e.status(), Json(ErrorResponse { error: error_msg })).into_response();
        }
    };

    // Read file data
    let data = match field.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Field read error: {}", e);
            let error_msg = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                "Please upload an image smaller than 4MB.".to_string()
            } else {
                format!("Failed to read file data: {}", e.body_text())
            };
            return (e.status(), Json(ErrorResponse { error: error_msg })).into_response();
        }
    };

    // Check file size
    if data.len() > MAX_FILE_SIZE {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Please upload an image smaller than 4MB.".to_string(),
            }),
        )
            .into_response();
    }

    // Detect format from bytes and validate it is an allowed image type
    let content_type = match validate_image(&data) {
        Ok(content_type) => content_type,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e })).into_response()
        }
    };

    let photo = DataUri::encode(&content_type, &data);

    match souschef_core::actions::try_generate_from_photo(client.as_ref(), &photo.to_uri()).await {
        Ok(recipe) => (StatusCode::OK, Json(RecipeResponse::from(recipe))).into_response(),
        Err(e) => generation_error_response(e),
    }
}
