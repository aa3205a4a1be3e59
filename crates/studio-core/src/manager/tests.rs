//! Tests for the manager module.

use tempfile::TempDir;

use super::*;
use crate::{
    models::{CollectionId, CollectionKind, ItemPayload, PositionUpdate},
    params::{CreateStudio, RenameStudio, Slug},
    reorder::is_dense,
};

/// Helper function to create a test manager
async fn create_test_manager() -> (TempDir, Manager) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let manager = ManagerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create manager");
    (temp_dir, manager)
}

async fn create_lumen(manager: &Manager) {
    manager
        .create_studio(&CreateStudio {
            slug: "lumen".to_string(),
            name: "Lumen Photography".to_string(),
        })
        .await
        .expect("Failed to create studio");
}

fn stage(name: &str) -> ItemPayload {
    ItemPayload::PipelineStage {
        name: name.to_string(),
        color: None,
    }
}

#[tokio::test]
async fn test_builder_creates_nested_directories() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("a").join("b").join("studio.db");

    let manager = ManagerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .unwrap();

    assert!(db_path.exists());
    assert_eq!(manager.database_path(), db_path.as_path());
    assert_eq!(manager.retry_policy(), RetryPolicy::default());
}

#[tokio::test]
async fn test_builder_rejects_zero_attempts() {
    let temp_dir = TempDir::new().unwrap();
    let result = ManagerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_retry_policy(RetryPolicy::default().with_max_attempts(0))
        .build()
        .await;

    assert!(matches!(result, Err(StudioError::Configuration { .. })));
}

#[tokio::test]
async fn test_studio_lifecycle() {
    let (_temp_dir, manager) = create_test_manager().await;
    create_lumen(&manager).await;

    let studios = manager.list_studios().await.unwrap();
    assert_eq!(studios.len(), 1);
    assert_eq!(studios[0].slug, "lumen");

    let renamed = manager
        .rename_studio(&RenameStudio {
            slug: "lumen".to_string(),
            name: "Lumen Studio".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(renamed.name, "Lumen Studio");

    let deleted = manager
        .delete_studio(&Slug {
            slug: "lumen".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(deleted.name, "Lumen Studio");
    assert!(manager.list_studios().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_missing_studio() {
    let (_temp_dir, manager) = create_test_manager().await;

    let result = manager
        .delete_studio(&Slug {
            slug: "ghost".to_string(),
        })
        .await;

    assert!(matches!(result, Err(StudioError::StudioNotFound { slug }) if slug == "ghost"));
}

#[tokio::test]
async fn test_show_studio_includes_every_collection() {
    let (_temp_dir, manager) = create_test_manager().await;
    create_lumen(&manager).await;

    let stages = CollectionId::new("lumen", CollectionKind::PipelineStage);
    manager.add_item(&stages, stage("Lead")).await.unwrap();

    let overview = manager
        .show_studio(&Slug {
            slug: "lumen".to_string(),
        })
        .await
        .unwrap()
        .expect("studio exists");

    assert_eq!(overview.collections.len(), CollectionKind::ALL.len());
    assert_eq!(overview.collections[0].id, stages);
    assert_eq!(overview.collections[0].items.len(), 1);
    assert!(overview.collections[1..].iter().all(|c| c.items.is_empty()));

    let missing = manager
        .show_studio(&Slug {
            slug: "ghost".to_string(),
        })
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_add_reorder_and_remove_keep_positions_dense() {
    let (_temp_dir, manager) = create_test_manager().await;
    create_lumen(&manager).await;
    let stages = CollectionId::new("lumen", CollectionKind::PipelineStage);

    let mut ids = Vec::new();
    for name in ["Lead", "Contacted", "Booked", "Delivered"] {
        let item = manager.add_item(&stages, stage(name)).await.unwrap();
        assert_eq!(item.position as usize, ids.len());
        ids.push(item.id);
    }

    // Drag Lead onto Booked
    let updates = vec![
        PositionUpdate::new(&ids[1], 0),
        PositionUpdate::new(&ids[2], 1),
        PositionUpdate::new(&ids[0], 2),
        PositionUpdate::new(&ids[3], 3),
    ];
    manager.reorder_items(&stages, &updates).await.unwrap();

    let items = manager.get_items(&stages).await.unwrap();
    let titles: Vec<_> = items.iter().map(|item| item.payload.title()).collect();
    assert_eq!(titles, ["Contacted", "Booked", "Lead", "Delivered"]);
    assert!(is_dense(&items));

    manager.remove_item(&stages, &ids[2]).await.unwrap();

    let items = manager.get_items(&stages).await.unwrap();
    let titles: Vec<_> = items.iter().map(|item| item.payload.title()).collect();
    assert_eq!(titles, ["Contacted", "Lead", "Delivered"]);
    assert!(is_dense(&items));
}

#[tokio::test]
async fn test_update_item_keeps_position() {
    let (_temp_dir, manager) = create_test_manager().await;
    create_lumen(&manager).await;
    let stages = CollectionId::new("lumen", CollectionKind::PipelineStage);

    manager.add_item(&stages, stage("Lead")).await.unwrap();
    let second = manager.add_item(&stages, stage("Booked")).await.unwrap();

    let updated = manager
        .update_item(
            &stages,
            &second.id,
            ItemPayload::PipelineStage {
                name: "Confirmed".to_string(),
                color: Some("green".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, second.id);
    assert_eq!(updated.position, 1);
    assert_eq!(updated.payload.title(), "Confirmed");

    let fetched = manager.get_item(&stages, &second.id).await.unwrap().unwrap();
    assert_eq!(fetched.payload, updated.payload);
}

#[tokio::test]
async fn test_items_are_scoped_per_collection() {
    let (_temp_dir, manager) = create_test_manager().await;
    create_lumen(&manager).await;
    let stages = CollectionId::new("lumen", CollectionKind::PipelineStage);
    let phones = CollectionId::new("lumen", CollectionKind::PhoneNumber);

    let lead = manager.add_item(&stages, stage("Lead")).await.unwrap();
    let phone = manager
        .add_item(
            &phones,
            ItemPayload::PhoneNumber {
                number: "555-0100".to_string(),
                label: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(lead.position, 0);
    assert_eq!(phone.position, 0);
    assert!(manager.get_item(&phones, &lead.id).await.unwrap().is_none());

    let result = manager.remove_item(&phones, &lead.id).await;
    assert!(matches!(result, Err(StudioError::ItemNotFound { .. })));
}
