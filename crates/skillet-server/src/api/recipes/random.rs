use crate::api::recipes::ScalingParams;
use crate::api::ErrorResponse;
use crate::AppState;
use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use skillet_core::Recipe;

#[utoipa::path(
    get,
    path = "/api/v1/recipes/rand",
    tag = "recipes",
    params(ScalingParams),
    responses(
        (status = 200, description = "A randomly chosen recipe, optionally scaled", body = Recipe),
        (status = 404, description = "The collection is empty", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn random_recipe(
    State(store): State<AppState>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let servings = ScalingParams::from_query(query.as_deref()).requested_servings();

    match store.random().await {
        Ok(Some(recipe)) => (StatusCode::OK, Json(recipe.scaled_to(servings))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No such recipe".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to pick a random recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to pick a random recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
