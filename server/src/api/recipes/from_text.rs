use crate::api::{generation_error_response, ErrorResponse};
use crate::types::RecipeResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use souschef_core::actions::try_generate_from_text;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FromTextRequest {
    /// Ingredients to cook with, e.g. "chicken, broccoli, garlic"
    pub ingredients: String,
}

#[utoipa::path(
    post,
    path = "/api/recipes/from-text",
    tag = "recipes",
    request_body = FromTextRequest,
    responses(
        (status = 200, description = "Generated recipe", body = RecipeResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 503, description = "AI service unavailable", body = ErrorResponse)
    )
)]
pub async fn from_text(
    State(client): State<AppState>,
    Json(request): Json<FromTextRequest>,
) -> impl IntoResponse {
    match try_generate_from_text(client.as_ref(), &request.ingredients).await {
        Ok(recipe) => (StatusCode::OK, Json(RecipeResponse::from(recipe))).into_response(),
        Err(e) => generation_error_response(e),
    }
}
