pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod num;
pub mod picture;
pub mod random;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use skillet_core::{Ingredient, Recipe, RecipeId, RecipeList, RecipePicture};
use utoipa::{IntoParams, OpenApi};

/// Returns the router for the recipe endpoints (mounted at /api/v1/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route("/num", get(num::num_recipes))
        .route("/rand", get(random::random_recipe))
        .route(
            "/r/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
        .route("/r/{id}/pictures/{name}", get(picture::get_picture))
}

/// Query parameters of the endpoints that can scale a recipe.
#[derive(Debug, Default, Clone, IntoParams)]
pub struct ScalingParams {
    /// Target serving count; absent, malformed or non-positive values leave
    /// the recipe at its stored base serving count
    #[param(value_type = Option<i32>)]
    pub servings: Option<String>,
}

impl ScalingParams {
    /// Reads the scaling parameters from a raw query string, so repeated or
    /// undecodable `servings` keys degrade like any other malformed value
    /// instead of failing extraction.
    pub fn from_query(query: Option<&str>) -> Self {
        ScalingParams {
            servings: first_query_value(query, "servings"),
        }
    }

    /// The requested serving count. Malformed values degrade to "no scaling
    /// requested" with a warning instead of rejecting the request.
    pub fn requested_servings(&self) -> i32 {
        match self.servings.as_deref() {
            None => -1,
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(
                    "Could not parse the requested amount of servings {:?}: {}",
                    raw,
                    e
                );
                -1
            }),
        }
    }
}

/// First value of `key` in a raw query string. Repeated keys keep their
/// first occurrence and a query that does not decode counts as empty.
fn first_query_value(query: Option<&str>, key: &str) -> Option<String> {
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(query.unwrap_or_default()).unwrap_or_default();
    pairs.into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        create::create_recipe,
        num::num_recipes,
        random::random_recipe,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe,
        picture::get_picture,
    ),
    components(schemas(
        Recipe,
        Ingredient,
        RecipeId,
        RecipeList,
        RecipePicture,
        create::CreateRecipeResponse,
    ))
)]
pub struct ApiDoc;
