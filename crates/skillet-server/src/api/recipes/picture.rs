use crate::api::ErrorResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use skillet_core::{RecipeId, RecipePicture};

#[utoipa::path(
    get,
    path = "/api/v1/recipes/r/{id}/pictures/{name}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID"),
        ("name" = String, Path, description = "Name of the picture")
    ),
    responses(
        (status = 200, description = "The requested picture", body = RecipePicture),
        (status = 404, description = "No such picture for this recipe", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_picture(
    State(store): State<AppState>,
    Path((id, name)): Path<(String, String)>,
) -> impl IntoResponse {
    let recipe_id = RecipeId::parse(&id);

    match store.picture(&recipe_id, &name).await {
        Ok(Some(picture)) => (StatusCode::OK, Json(picture)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No such picture".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch picture {} of recipe {}: {}", name, id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch picture".to_string(),
                }),
            )
                .into_response()
        }
    }
}
