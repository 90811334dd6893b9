use crate::recipe::Recipe;

/// Substring search over the recipe collection.
///
/// Every supplied term must match for a recipe to pass; an empty filter
/// passes everything. Matching is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    /// Term the recipe name must contain
    pub name: Option<String>,
    /// Term the description must contain
    pub description: Option<String>,
    /// Term at least one ingredient name must contain
    pub ingredient: Option<String>,
}

impl RecipeFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.ingredient.is_none()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(name) = &self.name {
            if !contains_ignore_case(&recipe.name, name) {
                return false;
            }
        }
        if let Some(description) = &self.description {
            if !contains_ignore_case(&recipe.description, description) {
                return false;
            }
        }
        if let Some(ingredient) = &self.ingredient {
            let any_ingredient = recipe
                .ingredients
                .iter()
                .any(|i| contains_ignore_case(&i.name, ingredient));
            if !any_ingredient {
                return false;
            }
        }
        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
