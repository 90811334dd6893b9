use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::id::RecipeId;

/// A quantity of one named ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    /// Name of the ingredient
    #[serde(default)]
    pub name: String,
    /// Amount needed, denominated for the recipe's base serving count
    #[serde(default)]
    pub amount: f64,
    /// Free-form unit of the amount, e.g. "g" or "cups"
    #[serde(default)]
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Ingredient {
            name: name.into(),
            amount: amount.max(0.0),
            unit: unit.into(),
        }
    }
}

/// A recipe with its identity, metadata, ingredient list and picture links.
///
/// Every field tolerates being absent on the wire; missing fields decode to
/// their zero values and get normalized on the way into a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    /// Identity of the recipe. Assigned by the store; client-sent values
    /// are ignored on create and update.
    #[serde(default)]
    pub id: RecipeId,
    /// Name of the recipe
    #[serde(default)]
    pub name: String,
    /// Free-form preparation text
    #[serde(default)]
    pub description: String,
    /// Serving count the ingredient amounts are denominated for
    #[serde(default)]
    pub servings: i32,
    /// Ingredients in display order
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Names of the pictures attached to this recipe, in attachment order.
    /// Maintained by the store; client-sent values are ignored on create
    /// and update.
    #[serde(default, rename = "pictureLinks")]
    pub picture_links: Vec<String>,
}

impl Recipe {
    /// A recipe without an identity yet; stores assign one on add.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        servings: i32,
        ingredients: Vec<Ingredient>,
    ) -> Self {
        Recipe {
            id: RecipeId::invalid(),
            name: name.into(),
            description: description.into(),
            servings,
            ingredients,
            picture_links: Vec::new(),
        }
    }

    /// Returns a copy of this recipe scaled to `target_servings`.
    ///
    /// Every ingredient amount is multiplied by `target_servings / servings`
    /// and the copy reports `target_servings` as its serving count, so
    /// scaling is idempotent on the result. Non-positive targets mean "no
    /// scaling requested" and return an unscaled copy. `self` is never
    /// modified.
    ///
    /// Amounts scale in `f64` with no rounding applied, so chains of
    /// re-scales can drift by an ulp and are not guaranteed to invert
    /// exactly.
    pub fn scaled_to(&self, target_servings: i32) -> Recipe {
        if target_servings <= 0 || self.servings <= 0 {
            return self.clone();
        }

        let factor = f64::from(target_servings) / f64::from(self.servings);
        let ingredients = self
            .ingredients
            .iter()
            .map(|ingredient| Ingredient {
                name: ingredient.name.clone(),
                amount: ingredient.amount * factor,
                unit: ingredient.unit.clone(),
            })
            .collect();

        Recipe {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            servings: target_servings,
            ingredients,
            picture_links: self.picture_links.clone(),
        }
    }

    /// Repairs a client-supplied recipe so the stored form always satisfies
    /// the model invariants: a non-positive serving count becomes 1 and
    /// negative ingredient amounts become 0.
    pub fn normalized(mut self) -> Recipe {
        if self.servings <= 0 {
            self.servings = 1;
        }
        for ingredient in &mut self.ingredients {
            if ingredient.amount < 0.0 {
                ingredient.amount = 0.0;
            }
        }
        self
    }
}

/// Listing of recipe identifiers, the response shape of the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeList {
    pub recipes: Vec<RecipeId>,
}
