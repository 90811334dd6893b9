use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

#[utoipa::path(
    get,
    path = "/api/v1/recipes/num",
    tag = "recipes",
    responses(
        (status = 200, description = "Number of stored recipes, as a bare integer", body = u64),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn num_recipes(State(store): State<AppState>) -> impl IntoResponse {
    match store.num().await {
        Ok(num) => {
            tracing::debug!("Number of recipes: {}", num);
            (StatusCode::OK, num.to_string()).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to count recipes: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to count recipes".to_string(),
                }),
            )
                .into_response()
        }
    }
}
