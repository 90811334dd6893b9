use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use skillet_core::{Recipe, RecipeId};
use utoipa::ToSchema;

/// Identifier the server assigned to a newly created recipe
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateRecipeResponse {
    pub id: RecipeId,
}

#[utoipa::path(
    post,
    path = "/api/v1/recipes",
    tag = "recipes",
    request_body = Recipe,
    responses(
        (status = 201, description = "Recipe created, identifier assigned by the server", body = CreateRecipeResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(store): State<AppState>,
    Json(recipe): Json<Recipe>,
) -> impl IntoResponse {
    // Any id the client sent is discarded; the store assigns identity.
    match store.add(recipe).await {
        Ok(id) => (StatusCode::CREATED, Json(CreateRecipeResponse { id })).into_response(),
        Err(e) => {
            tracing::error!("Failed to create recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
