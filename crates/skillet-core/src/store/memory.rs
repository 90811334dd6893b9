use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use rand::Rng;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::filter::RecipeFilter;
use crate::id::RecipeId;
use crate::picture::RecipePicture;
use crate::recipe::Recipe;
use crate::store::RecipeStore;

#[derive(Debug, Default)]
struct Collection {
    recipes: BTreeMap<RecipeId, Recipe>,
    pictures: HashMap<RecipeId, BTreeMap<String, RecipePicture>>,
}

/// Reference [`RecipeStore`] backend keeping everything in process memory.
///
/// One readers-writer lock guards the whole collection: reads run
/// concurrently, mutations are exclusive, and no reader ever observes a
/// half-applied update. Recipes live in a `BTreeMap` so `ids` comes back in
/// a stable lexicographic order. This backend never raises a [`StoreError`];
/// the error channel exists for backends that actually do I/O.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collection: RwLock<Collection>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStore for InMemoryStore {
    async fn num(&self) -> Result<u64, StoreError> {
        let collection = self.collection.read().await;
        Ok(collection.recipes.len() as u64)
    }

    async fn ids(&self, filter: &RecipeFilter) -> Result<Vec<RecipeId>, StoreError> {
        let collection = self.collection.read().await;
        Ok(collection
            .recipes
            .values()
            .filter(|recipe| filter.matches(recipe))
            .map(|recipe| recipe.id.clone())
            .collect())
    }

    async fn get(&self, id: &RecipeId) -> Result<Option<Recipe>, StoreError> {
        let collection = self.collection.read().await;
        Ok(collection.recipes.get(id).cloned())
    }

    async fn random(&self) -> Result<Option<Recipe>, StoreError> {
        let collection = self.collection.read().await;
        if collection.recipes.is_empty() {
            return Ok(None);
        }
        let index = rand::thread_rng().gen_range(0..collection.recipes.len());
        Ok(collection.recipes.values().nth(index).cloned())
    }

    async fn picture(
        &self,
        id: &RecipeId,
        name: &str,
    ) -> Result<Option<RecipePicture>, StoreError> {
        let collection = self.collection.read().await;
        Ok(collection
            .pictures
            .get(id)
            .and_then(|pictures| pictures.get(name))
            .cloned())
    }

    async fn add(&self, recipe: Recipe) -> Result<RecipeId, StoreError> {
        let id = RecipeId::fresh();
        let mut stored = recipe.normalized();
        stored.id = id.clone();
        stored.picture_links.clear();

        let mut collection = self.collection.write().await;
        collection.recipes.insert(id.clone(), stored);
        tracing::debug!(%id, "added recipe");
        Ok(id)
    }

    async fn update(&self, id: &RecipeId, recipe: Recipe) -> Result<bool, StoreError> {
        let mut collection = self.collection.write().await;
        match collection.recipes.get_mut(id) {
            Some(stored) => {
                let mut replacement = recipe.normalized();
                replacement.id = id.clone();
                // The picture index only changes through the picture calls,
                // so the links keep mirroring the pictures actually held.
                replacement.picture_links = stored.picture_links.clone();
                *stored = replacement;
                tracing::debug!(%id, "updated recipe");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &RecipeId) -> Result<bool, StoreError> {
        let mut collection = self.collection.write().await;
        if collection.recipes.remove(id).is_none() {
            return Ok(false);
        }
        collection.pictures.remove(id);
        tracing::debug!(%id, "deleted recipe and its pictures");
        Ok(true)
    }

    async fn add_picture(&self, picture: RecipePicture) -> Result<bool, StoreError> {
        let mut collection = self.collection.write().await;
        match collection.recipes.get_mut(&picture.id) {
            Some(recipe) => {
                if !recipe.picture_links.contains(&picture.name) {
                    recipe.picture_links.push(picture.name.clone());
                }
            }
            None => return Ok(false),
        }
        tracing::debug!(id = %picture.id, name = %picture.name, "attached picture");
        collection
            .pictures
            .entry(picture.id.clone())
            .or_default()
            .insert(picture.name.clone(), picture);
        Ok(true)
    }

    async fn remove_picture(&self, id: &RecipeId, name: &str) -> Result<bool, StoreError> {
        let mut collection = self.collection.write().await;
        let removed = collection
            .pictures
            .get_mut(id)
            .is_some_and(|pictures| pictures.remove(name).is_some());
        if !removed {
            return Ok(false);
        }
        if let Some(recipe) = collection.recipes.get_mut(id) {
            recipe.picture_links.retain(|link| link != name);
        }
        tracing::debug!(%id, %name, "detached picture");
        Ok(true)
    }
}
