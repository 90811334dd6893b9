use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Opaque identifier of a recipe.
///
/// Identifiers compare by their string form. The empty string is the single
/// distinguished invalid identifier: no stored recipe ever carries it, and
/// boundary code may use it to report "nothing found". Parsing is total,
/// so any raw path segment becomes an identifier and at worst finds nothing.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = String)]
pub struct RecipeId(String);

impl RecipeId {
    /// Builds an identifier from raw text. Never fails.
    pub fn parse(raw: &str) -> Self {
        RecipeId(raw.to_string())
    }

    /// The distinguished invalid identifier.
    pub fn invalid() -> Self {
        RecipeId(String::new())
    }

    /// A freshly assigned identifier. Never equal to [`RecipeId::invalid`].
    pub fn fresh() -> Self {
        RecipeId(Uuid::new_v4().to_string())
    }

    pub fn is_invalid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RecipeId {
    fn default() -> Self {
        RecipeId::invalid()
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
