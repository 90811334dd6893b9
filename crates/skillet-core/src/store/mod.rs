pub mod memory;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::filter::RecipeFilter;
use crate::id::RecipeId;
use crate::picture::RecipePicture;
use crate::recipe::Recipe;

/// Contract every recipe storage backend implements.
///
/// Recipes and pictures are stored as whole values: `update` replaces the
/// entire recipe and `delete` also drops the pictures attached to it. The
/// `id` field of an incoming recipe is never trusted; `add` assigns a fresh
/// identifier and `update` pins the stored recipe to the addressed one.
/// `picture_links` is store-owned the same way: `add` starts a recipe with
/// no links, `update` keeps the stored ones, and only the picture calls
/// change them, so the links always name pictures the store actually holds.
/// Backends normalize incoming recipes (see [`Recipe::normalized`]) so
/// stored data always satisfies the model invariants.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Number of stored recipes.
    async fn num(&self) -> Result<u64, StoreError>;

    /// Identifiers of all recipes matching `filter`, ordered by identifier.
    async fn ids(&self, filter: &RecipeFilter) -> Result<Vec<RecipeId>, StoreError>;

    /// The recipe stored under `id`, if any.
    async fn get(&self, id: &RecipeId) -> Result<Option<Recipe>, StoreError>;

    /// A uniformly random recipe, or `None` when the store is empty.
    async fn random(&self) -> Result<Option<Recipe>, StoreError>;

    /// The picture called `name` of recipe `id`, if any.
    async fn picture(&self, id: &RecipeId, name: &str) -> Result<Option<RecipePicture>, StoreError>;

    /// Stores a new recipe and returns the identifier assigned to it. The
    /// recipe starts without pictures; submitted links are dropped.
    async fn add(&self, recipe: Recipe) -> Result<RecipeId, StoreError>;

    /// Replaces the recipe stored under `id`, keeping its picture links.
    /// Returns `false` when no such recipe exists.
    async fn update(&self, id: &RecipeId, recipe: Recipe) -> Result<bool, StoreError>;

    /// Removes the recipe stored under `id` together with its pictures.
    /// Returns `false` when no such recipe exists.
    async fn delete(&self, id: &RecipeId) -> Result<bool, StoreError>;

    /// Attaches a picture to its recipe and records the name in the recipe's
    /// picture links. Returns `false` when the recipe does not exist.
    async fn add_picture(&self, picture: RecipePicture) -> Result<bool, StoreError>;

    /// Detaches the picture called `name` from recipe `id`. Returns `false`
    /// when no such picture exists.
    async fn remove_picture(&self, id: &RecipeId, name: &str) -> Result<bool, StoreError>;
}
