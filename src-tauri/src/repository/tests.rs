//! Repository Integration Tests
//!
//! Exercise every store against a temporary data directory.

use crate::domain::{
    AddOutcome, CustomRecipe, DomainError, ExternalKind, ExternalRecord,
    FavoriteState, RecipeDraft, Theme,
};
use crate::repository::{
    CustomRecipeRepository, DataPaths, FavoritesRepository, Repository, SearchableRepository,
    SettingsRepository, ShoppingListRepository,
};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn setup_paths() -> (TempDir, DataPaths) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let paths = DataPaths::new(tmp.path().join("data"), Some(tmp.path().join("resources")));
    (tmp, paths)
}

fn read_json(path: std::path::PathBuf) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("Missing file")).expect("Bad JSON")
}

fn mojito() -> ExternalRecord {
    ExternalRecord::from_value(json!({
        "idDrink": "11000",
        "strDrink": "Mojito",
        "strCategory": "Cocktail"
    }))
    .unwrap()
}

fn draft(name: &str) -> RecipeDraft {
    RecipeDraft {
        name: name.to_string(),
        ingredients: vec!["Water".to_string()],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_toggle_favorite_twice_restores_membership() {
    let (_tmp, paths) = setup_paths();
    let repo = FavoritesRepository::load(ExternalKind::Cocktail, &paths).await;

    let state = repo.toggle("11000", mojito()).await.unwrap();
    assert_eq!(state, FavoriteState::Favorited);
    assert!(repo.contains("11000").await);
    let saved = read_json(paths.data_file("cocktails.json"));
    assert_eq!(saved["11000"], mojito().into_value());

    let state = repo.toggle("11000", mojito()).await.unwrap();
    assert_eq!(state, FavoriteState::NotFavorited);
    assert!(!repo.contains("11000").await);
    assert_eq!(read_json(paths.data_file("cocktails.json")), json!({}));
}

#[tokio::test]
async fn test_missing_favorites_file_loads_bundled_default() {
    let (tmp, paths) = setup_paths();
    let bundled = json!({
        "52772": {"idMeal": "52772", "strMeal": "Teriyaki Chicken Casserole"},
        "52771": {"idMeal": "52771", "strMeal": "Spicy Arrabiata Penne"}
    });
    fs::create_dir_all(tmp.path().join("resources/data")).unwrap();
    fs::write(
        tmp.path().join("resources/data/meals.json"),
        serde_json::to_string_pretty(&bundled).unwrap(),
    )
    .unwrap();

    let repo = FavoritesRepository::load(ExternalKind::Meal, &paths).await;
    assert_eq!(repo.ids().await, vec!["52772", "52771"]);
    let favorite = repo.find_by_id("52771".to_string()).await.unwrap().unwrap();
    assert_eq!(favorite.record.into_value(), bundled["52771"]);
    // Nothing is written until the first mutation
    assert!(!paths.data_file("meals.json").exists());
}

#[tokio::test]
async fn test_malformed_favorites_file_falls_back() {
    let (_tmp, paths) = setup_paths();
    fs::create_dir_all(&paths.data_dir).unwrap();
    fs::write(paths.data_file("cocktails.json"), "{ not json").unwrap();

    let repo = FavoritesRepository::load(ExternalKind::Cocktail, &paths).await;
    assert!(repo.ids().await.is_empty());
}

#[tokio::test]
async fn test_favorite_search_and_delete() {
    let (_tmp, paths) = setup_paths();
    let repo = FavoritesRepository::load(ExternalKind::Cocktail, &paths).await;
    repo.toggle("11000", mojito()).await.unwrap();

    let hits = repo.search("moj").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "11000");
    assert!(repo.search("martini").await.unwrap().is_empty());

    repo.delete("11000".to_string()).await.unwrap();
    assert!(matches!(
        repo.delete("11000".to_string()).await,
        Err(DomainError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_create_custom_recipe_copies_image() {
    let (tmp, paths) = setup_paths();
    let picked = tmp.path().join("photo.png");
    fs::write(&picked, b"png-bytes").unwrap();

    let repo = CustomRecipeRepository::load(&paths).await.unwrap();
    let created = repo
        .create_from_draft(RecipeDraft {
            image_path: Some(picked.to_string_lossy().into_owned()),
            ..draft("Tea")
        })
        .await
        .unwrap();

    let stored = created.image_path.clone().expect("Image should be stored");
    assert!(stored.starts_with(&*paths.images_dir().to_string_lossy()));
    assert!(stored.ends_with(".png"));
    assert_eq!(fs::read(&stored).unwrap(), b"png-bytes");

    let saved = read_json(paths.data_file("my_recipes.json"));
    assert_eq!(saved[0]["name"], "Tea");
    assert_eq!(saved[0]["id"], created.id.to_string());
}

#[tokio::test]
async fn test_create_custom_recipe_requires_name() {
    let (_tmp, paths) = setup_paths();
    let repo = CustomRecipeRepository::load(&paths).await.unwrap();
    let err = repo.create_from_draft(draft("  ")).await.unwrap_err();
    assert_eq!(err.to_string(), "Name is required");
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_middle_recipe_keeps_order() {
    let (_tmp, paths) = setup_paths();
    let repo = CustomRecipeRepository::load(&paths).await.unwrap();
    let a = repo.create_from_draft(draft("A")).await.unwrap();
    let b = repo.create_from_draft(draft("B")).await.unwrap();
    let c = repo.create_from_draft(draft("C")).await.unwrap();

    repo.delete(b.id).await.unwrap();

    let saved: Vec<CustomRecipe> =
        serde_json::from_value(read_json(paths.data_file("my_recipes.json"))).unwrap();
    let ids: Vec<_> = saved.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![a.id, c.id]);
    assert!(repo.find_by_id(b.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_removes_owned_image() {
    let (tmp, paths) = setup_paths();
    let picked = tmp.path().join("photo.jpg");
    fs::write(&picked, b"jpg").unwrap();

    let repo = CustomRecipeRepository::load(&paths).await.unwrap();
    let created = repo
        .create_from_draft(RecipeDraft {
            image_path: Some(picked.to_string_lossy().into_owned()),
            ..draft("Toast")
        })
        .await
        .unwrap();
    let stored = created.image_path.clone().unwrap();

    repo.delete(created.id).await.unwrap();
    assert!(!std::path::Path::new(&stored).exists());
    // The user's original is untouched
    assert!(picked.exists());
}

#[tokio::test]
async fn test_recipes_sharing_a_picked_image_keep_their_own_copies() {
    let (tmp, paths) = setup_paths();
    let picked = tmp.path().join("photo.png");
    fs::write(&picked, b"png").unwrap();

    let repo = CustomRecipeRepository::load(&paths).await.unwrap();
    let first = repo
        .create_from_draft(RecipeDraft {
            image_path: Some(picked.to_string_lossy().into_owned()),
            ..draft("First")
        })
        .await
        .unwrap();
    // Picking the first recipe's stored picture again still copies it
    let second = repo
        .create_from_draft(RecipeDraft {
            image_path: first.image_path.clone(),
            ..draft("Second")
        })
        .await
        .unwrap();

    let first_image = first.image_path.clone().unwrap();
    let second_image = second.image_path.clone().unwrap();
    assert_ne!(first_image, second_image);

    repo.delete(first.id).await.unwrap();
    assert!(!std::path::Path::new(&first_image).exists());
    assert_eq!(fs::read(&second_image).unwrap(), b"png");
}

#[tokio::test]
async fn test_downloaded_image_is_attached_without_copy() {
    let (_tmp, paths) = setup_paths();
    let repo = CustomRecipeRepository::load(&paths).await.unwrap();
    let downloaded = repo.images().store_bytes(b"jpg", "jpg").await.unwrap();

    let created = repo
        .create_from_draft(RecipeDraft {
            image_path: Some(downloaded.to_string_lossy().into_owned()),
            ..draft("Imported")
        })
        .await
        .unwrap();
    assert_eq!(created.image_path.as_deref(), Some(&*downloaded.to_string_lossy()));
}

#[tokio::test]
async fn test_delete_with_corrupt_file_keeps_loaded_recipes() {
    let (_tmp, paths) = setup_paths();
    let repo = CustomRecipeRepository::load(&paths).await.unwrap();
    let a = repo.create_from_draft(draft("A")).await.unwrap();
    let b = repo.create_from_draft(draft("B")).await.unwrap();

    fs::write(paths.data_file("my_recipes.json"), "{ truncated").unwrap();

    repo.delete(a.id).await.unwrap();
    let c = repo.create_from_draft(draft("C")).await.unwrap();

    let saved: Vec<CustomRecipe> =
        serde_json::from_value(read_json(paths.data_file("my_recipes.json"))).unwrap();
    let ids: Vec<_> = saved.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![b.id, c.id]);
}

#[tokio::test]
async fn test_delete_with_missing_file_keeps_loaded_recipes() {
    let (_tmp, paths) = setup_paths();
    let repo = CustomRecipeRepository::load(&paths).await.unwrap();
    let a = repo.create_from_draft(draft("A")).await.unwrap();
    let b = repo.create_from_draft(draft("B")).await.unwrap();

    fs::remove_file(paths.data_file("my_recipes.json")).unwrap();

    repo.delete(a.id).await.unwrap();
    let names: Vec<_> = repo.list().await.unwrap().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["B"]);
    assert!(repo.find_by_id(b.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_legacy_recipes_get_ids_on_load() {
    let (_tmp, paths) = setup_paths();
    fs::create_dir_all(&paths.data_dir).unwrap();
    let legacy = json!([
        {"name": "Old one", "category": "", "ingredients": [], "instructions": "", "image_path": null},
        {"name": "Old two", "category": "", "ingredients": [], "instructions": "", "image_path": null}
    ]);
    fs::write(paths.data_file("my_recipes.json"), legacy.to_string()).unwrap();

    let repo = CustomRecipeRepository::load(&paths).await.unwrap();
    let recipes = repo.list().await.unwrap();
    assert_eq!(recipes.len(), 2);
    assert!(recipes.iter().all(|r| r.has_id()));
    assert_ne!(recipes[0].id, recipes[1].id);

    let saved = read_json(paths.data_file("my_recipes.json"));
    assert_eq!(saved[1]["id"], recipes[1].id.to_string());
}

#[tokio::test]
async fn test_delete_matches_against_reloaded_file() {
    let (_tmp, paths) = setup_paths();
    let first = CustomRecipeRepository::load(&paths).await.unwrap();
    let kept = first.create_from_draft(draft("Kept")).await.unwrap();

    // Another writer appends behind the first repository's back
    let second = CustomRecipeRepository::load(&paths).await.unwrap();
    let added = second.create_from_draft(draft("Added elsewhere")).await.unwrap();

    first.delete(added.id).await.unwrap();
    let names: Vec<_> = first.list().await.unwrap().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Kept"]);
    assert!(first.find_by_id(kept.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_search_custom_recipes_by_name() {
    let (_tmp, paths) = setup_paths();
    let repo = CustomRecipeRepository::load(&paths).await.unwrap();
    repo.create_from_draft(draft("Chicken Soup")).await.unwrap();
    repo.create_from_draft(draft("Beef Stew")).await.unwrap();

    let hits = repo.search("CHICK").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Chicken Soup");
}

#[tokio::test]
async fn test_shopping_list_add_duplicate_and_reload() {
    let (_tmp, paths) = setup_paths();
    let repo = ShoppingListRepository::load(&paths).await;

    assert_eq!(repo.add("Lime").await.unwrap(), AddOutcome::Added);
    assert_eq!(repo.add("Lime").await.unwrap(), AddOutcome::AlreadyPresent);
    assert_eq!(repo.add("Mint").await.unwrap(), AddOutcome::Added);

    let reloaded = ShoppingListRepository::load(&paths).await;
    assert_eq!(reloaded.list().await, vec!["Lime", "Mint"]);

    assert!(reloaded.remove("Lime").await.unwrap());
    assert!(!reloaded.remove("Lime").await.unwrap());
    assert_eq!(read_json(paths.data_file("shopping_list.json")), json!(["Mint"]));
}

#[tokio::test]
async fn test_settings_preserve_unknown_keys() {
    let (_tmp, paths) = setup_paths();
    fs::create_dir_all(&paths.data_dir).unwrap();
    fs::write(
        paths.data_file("settings.json"),
        r#"{"theme": "light", "last_tab": "recipes"}"#,
    )
    .unwrap();

    let repo = SettingsRepository::load(&paths).await;
    assert_eq!(repo.get().await.theme, Theme::Light);

    repo.set_theme(Theme::Dark).await.unwrap();
    let saved = read_json(paths.data_file("settings.json"));
    assert_eq!(saved, json!({"theme": "dark", "last_tab": "recipes"}));
}

#[tokio::test]
async fn test_malformed_settings_default_to_system() {
    let (_tmp, paths) = setup_paths();
    fs::create_dir_all(&paths.data_dir).unwrap();
    fs::write(paths.data_file("settings.json"), "[1, 2").unwrap();

    let repo = SettingsRepository::load(&paths).await;
    assert_eq!(repo.get().await.theme, Theme::System);
}
