pub mod error;
pub mod filter;
pub mod id;
pub mod picture;
pub mod recipe;
pub mod store;

pub use error::StoreError;
pub use filter::RecipeFilter;
pub use id::RecipeId;
pub use picture::RecipePicture;
pub use recipe::{Ingredient, Recipe, RecipeList};
pub use store::{memory::InMemoryStore, RecipeStore};
