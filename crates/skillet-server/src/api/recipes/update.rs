use crate::api::ErrorResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use skillet_core::{Recipe, RecipeId};

#[utoipa::path(
    put,
    path = "/api/v1/recipes/r/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    request_body = Recipe,
    responses(
        (status = 200, description = "Recipe replaced"),
        (status = 404, description = "No recipe stored under this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(store): State<AppState>,
    Path(id): Path<String>,
    Json(recipe): Json<Recipe>,
) -> impl IntoResponse {
    let recipe_id = RecipeId::parse(&id);

    match store.update(&recipe_id, recipe).await {
        Ok(true) => StatusCode::OK.into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("No such recipe: {}", id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to update recipe {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
