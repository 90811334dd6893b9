use crate::api::ErrorResponse;
use crate::AppState;
use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use skillet_core::{RecipeFilter, RecipeList};
use utoipa::IntoParams;

#[derive(Debug, Default, IntoParams)]
pub struct ListRecipesParams {
    /// Select recipes whose name contains this term
    pub name: Option<String>,
    /// Select recipes whose description contains this term
    pub description: Option<String>,
    /// Select recipes using an ingredient whose name contains this term
    pub ingredient: Option<String>,
}

impl ListRecipesParams {
    /// Reads the filter terms from a raw query string, keeping the first
    /// occurrence of each key. Listing never fails on query shape.
    fn from_query(query: Option<&str>) -> Self {
        ListRecipesParams {
            name: super::first_query_value(query, "name"),
            description: super::first_query_value(query, "description"),
            ingredient: super::first_query_value(query, "ingredient"),
        }
    }

    /// Translates the query parameters into a domain filter. Empty terms
    /// count as absent.
    fn into_filter(self) -> RecipeFilter {
        RecipeFilter {
            name: self.name.filter(|term| !term.is_empty()),
            description: self.description.filter(|term| !term.is_empty()),
            ingredient: self.ingredient.filter(|term| !term.is_empty()),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/recipes",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "Identifiers of the recipes matching every given filter", body = RecipeList),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_recipes(
    State(store): State<AppState>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let filter = ListRecipesParams::from_query(query.as_deref()).into_filter();

    match store.ids(&filter).await {
        Ok(recipes) => (StatusCode::OK, Json(RecipeList { recipes })).into_response(),
        Err(e) => {
            tracing::error!("Failed to list recipes: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to list recipes".to_string(),
                }),
            )
                .into_response()
        }
    }
}
