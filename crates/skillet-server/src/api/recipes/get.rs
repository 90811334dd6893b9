use crate::api::recipes::ScalingParams;
use crate::api::ErrorResponse;
use crate::AppState;
use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use skillet_core::{Recipe, RecipeId};

#[utoipa::path(
    get,
    path = "/api/v1/recipes/r/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID"),
        ScalingParams
    ),
    responses(
        (status = 200, description = "The recipe, optionally scaled to the requested servings", body = Recipe),
        (status = 404, description = "No recipe stored under this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(store): State<AppState>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let recipe_id = RecipeId::parse(&id);
    let servings = ScalingParams::from_query(query.as_deref()).requested_servings();

    match store.get(&recipe_id).await {
        Ok(Some(recipe)) => (StatusCode::OK, Json(recipe.scaled_to(servings))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("No such recipe: {}", id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch recipe {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
