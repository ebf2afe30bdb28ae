use crate::api::{generation_error_response, ErrorResponse};
use crate::types::RecipeResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use souschef_core::actions::try_generate_from_photo;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FromPhotoRequest {
    /// A photo of ingredients, as a data URI that must include a MIME type
    /// and use Base64 encoding. Expected format:
    /// 'data:<mimetype>;base64,<encoded_data>'.
    pub photo_data_uri: String,
}

#[utoipa::path(
    post,
    path = "/api/recipes/from-photo",
    tag = "recipes",
    request_body = FromPhotoRequest,
    responses(
        (status = 200, description = "Generated recipe", body = RecipeResponse),
        (status = 400, description = "Invalid image data URI", body = ErrorResponse),
        (status = 503, description = "AI service unavailable", body = ErrorResponse)
    )
)]
pub async fn from_photo(
    State(client): State<AppState>,
    Json(request): Json<FromPhotoRequest>,
) -> impl IntoResponse {
    match try_generate_from_photo(client.as_ref(), &request.photo_data_uri).await {
        Ok(recipe) => (StatusCode::OK, Json(RecipeResponse::from(recipe))).into_response(),
        Err(e) => generation_error_response(e),
    }
}
