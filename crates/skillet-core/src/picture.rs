use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::id::RecipeId;

/// A named picture attached to a recipe.
///
/// Pictures are keyed by `(id, name)` and the owning recipe lists the names
/// in its `pictureLinks`. The payload travels as an encoded string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipePicture {
    /// Identifier of the recipe this picture belongs to
    #[serde(default)]
    pub id: RecipeId,
    /// Name of the picture, unique per recipe
    #[serde(default)]
    pub name: String,
    /// Encoded picture data
    #[serde(default)]
    pub picture: String,
}

impl RecipePicture {
    pub fn new(id: RecipeId, name: impl Into<String>, picture: impl Into<String>) -> Self {
        RecipePicture {
            id,
            name: name.into(),
            picture: picture.into(),
        }
    }
}
