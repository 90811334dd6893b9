//! Behavioral tests for the reference in-memory store.
//!
//! These pin the storage contract every backend has to honor: fresh
//! server-assigned identifiers, sentinel-free not-found signaling, filter
//! semantics, picture cascade on delete, and copy-on-scale reads.

use skillet_core::{
    InMemoryStore, Ingredient, Recipe, RecipeFilter, RecipeId, RecipePicture, RecipeStore,
};
use std::collections::HashSet;
use std::sync::Arc;

fn pancakes() -> Recipe {
    Recipe::new(
        "Pancakes",
        "Mix and fry.",
        2,
        vec![
            Ingredient::new("flour", 200.0, "g"),
            Ingredient::new("milk", 300.0, "ml"),
        ],
    )
}

fn soup() -> Recipe {
    Recipe::new(
        "Potato Soup",
        "Hearty and warm.",
        4,
        vec![Ingredient::new("potatoes", 500.0, "g")],
    )
}

fn filter_by_name(name: &str) -> RecipeFilter {
    RecipeFilter {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_empty_store_has_nothing() {
    let store = InMemoryStore::new();

    assert_eq!(store.num().await.unwrap(), 0);
    assert!(store.ids(&RecipeFilter::default()).await.unwrap().is_empty());
    assert!(store.random().await.unwrap().is_none());
    assert!(store
        .get(&RecipeId::parse("anything"))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_add_then_get_round_trips() {
    let store = InMemoryStore::new();

    let id = store.add(pancakes()).await.unwrap();
    assert!(!id.is_invalid());

    let stored = store.get(&id).await.unwrap().expect("recipe should exist");
    assert_eq!(stored.id, id);

    let mut expected = pancakes();
    expected.id = id;
    assert_eq!(stored, expected);
}

#[tokio::test]
async fn test_add_ignores_client_sent_id() {
    let store = InMemoryStore::new();

    let mut recipe = pancakes();
    recipe.id = RecipeId::parse("client-chosen");
    let id = store.add(recipe).await.unwrap();

    assert_ne!(id, RecipeId::parse("client-chosen"));
    assert!(store
        .get(&RecipeId::parse("client-chosen"))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_add_starts_without_pictures() {
    let store = InMemoryStore::new();

    let mut recipe = pancakes();
    recipe.picture_links = vec!["phantom".to_string()];
    let id = store.add(recipe).await.unwrap();

    let stored = store.get(&id).await.unwrap().unwrap();
    assert!(stored.picture_links.is_empty());
    assert!(store.picture(&id, "phantom").await.unwrap().is_none());
}

#[tokio::test]
async fn test_add_assigns_distinct_ids() {
    let store = InMemoryStore::new();

    let first = store.add(pancakes()).await.unwrap();
    let second = store.add(pancakes()).await.unwrap();

    assert_ne!(first, second);
    assert_eq!(store.num().await.unwrap(), 2);
}

#[tokio::test]
async fn test_add_normalizes_invalid_servings_and_amounts() {
    let store = InMemoryStore::new();

    let mut recipe = pancakes();
    recipe.servings = 0;
    recipe.ingredients[0].amount = -5.0;

    let id = store.add(recipe).await.unwrap();
    let stored = store.get(&id).await.unwrap().unwrap();
    assert_eq!(stored.servings, 1);
    assert_eq!(stored.ingredients[0].amount, 0.0);
}

#[tokio::test]
async fn test_scaling_leaves_stored_recipe_untouched() {
    let store = InMemoryStore::new();
    let id = store.add(pancakes()).await.unwrap();

    let before = store.get(&id).await.unwrap().unwrap();
    let scaled = before.scaled_to(8);
    assert_eq!(scaled.servings, 8);

    let after = store.get(&id).await.unwrap().unwrap();
    assert_eq!(after.servings, 2);
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_update_replaces_the_whole_recipe() {
    let store = InMemoryStore::new();
    let id = store.add(pancakes()).await.unwrap();

    assert!(store.update(&id, soup()).await.unwrap());

    let stored = store.get(&id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Potato Soup");
    assert_eq!(stored.servings, 4);
    assert_eq!(stored.ingredients.len(), 1);
    assert_eq!(store.num().await.unwrap(), 1);
}

#[tokio::test]
async fn test_update_pins_the_addressed_id() {
    let store = InMemoryStore::new();
    let id = store.add(pancakes()).await.unwrap();

    let mut replacement = soup();
    replacement.id = RecipeId::parse("someone-else");
    assert!(store.update(&id, replacement).await.unwrap());

    let stored = store.get(&id).await.unwrap().unwrap();
    assert_eq!(stored.id, id);
}

#[tokio::test]
async fn test_update_keeps_the_stored_picture_links() {
    let store = InMemoryStore::new();
    let id = store.add(pancakes()).await.unwrap();
    assert!(store
        .add_picture(RecipePicture::new(id.clone(), "front", "aaa"))
        .await
        .unwrap());

    let mut replacement = soup();
    replacement.picture_links = vec!["phantom".to_string()];
    assert!(store.update(&id, replacement).await.unwrap());

    let stored = store.get(&id).await.unwrap().unwrap();
    assert_eq!(stored.picture_links, vec!["front"]);
    let picture = store.picture(&id, "front").await.unwrap().unwrap();
    assert_eq!(picture.picture, "aaa");
}

#[tokio::test]
async fn test_update_unknown_id_is_a_signaled_noop() {
    let store = InMemoryStore::new();
    store.add(pancakes()).await.unwrap();

    assert!(!store
        .update(&RecipeId::parse("missing"), soup())
        .await
        .unwrap());
    assert_eq!(store.num().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_then_get_finds_nothing() {
    let store = InMemoryStore::new();
    let id = store.add(pancakes()).await.unwrap();

    assert!(store.delete(&id).await.unwrap());
    assert!(store.get(&id).await.unwrap().is_none());
    assert_eq!(store.num().await.unwrap(), 0);

    assert!(!store.delete(&id).await.unwrap());
}

#[tokio::test]
async fn test_delete_cascades_to_pictures() {
    let store = InMemoryStore::new();
    let id = store.add(pancakes()).await.unwrap();
    assert!(store
        .add_picture(RecipePicture::new(id.clone(), "front", "base64data"))
        .await
        .unwrap());

    assert!(store.delete(&id).await.unwrap());
    assert!(store.picture(&id, "front").await.unwrap().is_none());
}

#[tokio::test]
async fn test_random_on_nonempty_store_returns_a_member() {
    let store = InMemoryStore::new();
    let a = store.add(pancakes()).await.unwrap();
    let b = store.add(soup()).await.unwrap();

    for _ in 0..10 {
        let picked = store.random().await.unwrap().expect("store is not empty");
        assert!(picked.id == a || picked.id == b);
    }
}

#[tokio::test]
async fn test_ids_with_empty_filter_returns_all_in_order() {
    let store = InMemoryStore::new();
    let mut added: Vec<RecipeId> = Vec::new();
    for _ in 0..5 {
        added.push(store.add(pancakes()).await.unwrap());
    }
    added.sort();

    let ids = store.ids(&RecipeFilter::default()).await.unwrap();
    assert_eq!(ids, added);
}

#[tokio::test]
async fn test_ids_filters_by_name_substring() {
    let store = InMemoryStore::new();
    let soup_id = store.add(soup()).await.unwrap();
    store.add(pancakes()).await.unwrap();

    let ids = store.ids(&filter_by_name("soup")).await.unwrap();
    assert_eq!(ids, vec![soup_id]);

    let ids = store.ids(&filter_by_name("SOUP")).await.unwrap();
    assert_eq!(ids.len(), 1);

    assert!(store.ids(&filter_by_name("pizza")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_ids_combines_filters_as_logical_and() {
    let store = InMemoryStore::new();
    let soup_id = store.add(soup()).await.unwrap();
    store.add(pancakes()).await.unwrap();

    let both = RecipeFilter {
        name: Some("soup".to_string()),
        ingredient: Some("potato".to_string()),
        ..Default::default()
    };
    assert_eq!(store.ids(&both).await.unwrap(), vec![soup_id]);

    let contradiction = RecipeFilter {
        name: Some("soup".to_string()),
        ingredient: Some("flour".to_string()),
        ..Default::default()
    };
    assert!(store.ids(&contradiction).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_picture_lookup_and_link_ordering() {
    let store = InMemoryStore::new();
    let id = store.add(pancakes()).await.unwrap();

    assert!(store
        .add_picture(RecipePicture::new(id.clone(), "front", "aaa"))
        .await
        .unwrap());
    assert!(store
        .add_picture(RecipePicture::new(id.clone(), "side", "bbb"))
        .await
        .unwrap());

    let stored = store.get(&id).await.unwrap().unwrap();
    assert_eq!(stored.picture_links, vec!["front", "side"]);

    let picture = store.picture(&id, "side").await.unwrap().unwrap();
    assert_eq!(picture.picture, "bbb");
    assert!(store.picture(&id, "back").await.unwrap().is_none());
}

#[tokio::test]
async fn test_reattaching_a_picture_replaces_it_without_duplicate_links() {
    let store = InMemoryStore::new();
    let id = store.add(pancakes()).await.unwrap();

    store
        .add_picture(RecipePicture::new(id.clone(), "front", "old"))
        .await
        .unwrap();
    store
        .add_picture(RecipePicture::new(id.clone(), "front", "new"))
        .await
        .unwrap();

    let stored = store.get(&id).await.unwrap().unwrap();
    assert_eq!(stored.picture_links, vec!["front"]);
    let picture = store.picture(&id, "front").await.unwrap().unwrap();
    assert_eq!(picture.picture, "new");
}

#[tokio::test]
async fn test_picture_mutations_on_unknown_targets_are_noops() {
    let store = InMemoryStore::new();
    let id = store.add(pancakes()).await.unwrap();

    assert!(!store
        .add_picture(RecipePicture::new(RecipeId::parse("missing"), "front", "x"))
        .await
        .unwrap());
    assert!(!store.remove_picture(&id, "front").await.unwrap());
}

#[tokio::test]
async fn test_remove_picture_drops_the_link() {
    let store = InMemoryStore::new();
    let id = store.add(pancakes()).await.unwrap();
    store
        .add_picture(RecipePicture::new(id.clone(), "front", "aaa"))
        .await
        .unwrap();
    store
        .add_picture(RecipePicture::new(id.clone(), "side", "bbb"))
        .await
        .unwrap();

    assert!(store.remove_picture(&id, "front").await.unwrap());

    let stored = store.get(&id).await.unwrap().unwrap();
    assert_eq!(stored.picture_links, vec!["side"]);
    assert!(store.picture(&id, "front").await.unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_settle_to_a_consistent_count() {
    let store = Arc::new(InMemoryStore::new());

    let mut handles = Vec::new();
    for i in 0..32 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .add(Recipe::new(format!("Recipe {i}"), "", 2, Vec::new()))
                .await
                .unwrap()
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    assert_eq!(ids.len(), 32);
    assert_eq!(store.num().await.unwrap(), 32);
}
