use crate::api::{generation_error_response, ErrorResponse};
use crate::types::RecipeResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use souschef_core::actions::try_generate_random;

#[utoipa::path(
    post,
    path = "/api/recipes/random",
    tag = "recipes",
    responses(
        (status = 200, description = "Generated recipe", body = RecipeResponse),
        (status = 503, description = "AI service unavailable", body = ErrorResponse)
    )
)]
pub async fn random(State(client): State<AppState>) -> impl IntoResponse {
    match try_generate_random(client.as_ref()).await {
        Ok(recipe) => (StatusCode::OK, Json(RecipeResponse::from(recipe))).into_response(),
        Err(e) => generation_error_response(e),
    }
}
