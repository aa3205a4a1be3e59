use studio_core::{
    reorder::is_dense, CollectionId, CollectionKind, Database, ItemPayload, PositionUpdate,
    StudioError,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn phones() -> CollectionId {
    CollectionId::new("lumen", CollectionKind::PhoneNumber)
}

fn phone(number: &str) -> ItemPayload {
    ItemPayload::PhoneNumber {
        number: number.to_string(),
        label: None,
    }
}

/// Creates the `lumen` studio with one phone per number.
fn seed_phones(db: &mut Database, numbers: &[&str]) -> Vec<String> {
    db.create_studio("lumen", "Lumen Photography")
        .expect("Failed to create studio");
    numbers
        .iter()
        .map(|number| {
            db.add_item(&phones(), &phone(number))
                .expect("Failed to add item")
                .id
        })
        .collect()
}

fn numbers(db: &Database) -> Vec<String> {
    db.get_items(&phones())
        .expect("Failed to get items")
        .into_iter()
        .map(|item| item.payload.title().to_string())
        .collect()
}

#[test]
fn test_database_initialization_is_repeatable() {
    let temp_file = NamedTempFile::new().unwrap();
    {
        let mut db = Database::new(temp_file.path()).unwrap();
        db.create_studio("lumen", "Lumen").unwrap();
    }

    let db = Database::new(temp_file.path()).unwrap();
    assert_eq!(db.list_studios().unwrap().len(), 1);
}

#[test]
fn test_create_studio_validates_slug() {
    let (_temp_file, mut db) = create_test_db();

    for slug in ["", "Lumen", "lumen studio", "lumen_studio"] {
        let result = db.create_studio(slug, "Lumen");
        assert!(
            matches!(result, Err(StudioError::InvalidInput { ref field, .. }) if field == "slug"),
            "{slug:?} should be rejected"
        );
    }
    assert!(db.create_studio("lumen-2", "Lumen").is_ok());
}

#[test]
fn test_duplicate_slug_is_rejected() {
    let (_temp_file, mut db) = create_test_db();
    db.create_studio("lumen", "Lumen").unwrap();

    let result = db.create_studio("lumen", "Other");
    assert!(matches!(result, Err(StudioError::InvalidInput { .. })));
    assert_eq!(db.get_studio("lumen").unwrap().unwrap().name, "Lumen");
}

#[test]
fn test_items_need_an_existing_studio() {
    let (_temp_file, mut db) = create_test_db();

    let result = db.add_item(&phones(), &phone("555-0100"));
    assert!(matches!(result, Err(StudioError::StudioNotFound { .. })));
    assert!(matches!(
        db.get_items(&phones()),
        Err(StudioError::StudioNotFound { .. })
    ));
}

#[test]
fn test_add_item_rejects_payload_of_another_kind() {
    let (_temp_file, mut db) = create_test_db();
    seed_phones(&mut db, &[]);

    let result = db.add_item(
        &phones(),
        &ItemPayload::SocialLink {
            platform: "Instagram".to_string(),
            url: "https://instagram.com/lumen".to_string(),
        },
    );
    assert!(
        matches!(result, Err(StudioError::InvalidInput { ref field, .. }) if field == "payload")
    );
}

#[test]
fn test_add_item_appends_at_len() {
    let (_temp_file, mut db) = create_test_db();
    let ids = seed_phones(&mut db, &["555-0100", "555-0101", "555-0102"]);

    let items = db.get_items(&phones()).unwrap();
    assert_eq!(items.len(), 3);
    assert!(is_dense(&items));
    assert!(ids.iter().all(|id| id.starts_with("ph_")));
}

#[test]
fn test_reorder_rewrites_all_positions() {
    let (_temp_file, mut db) = create_test_db();
    let ids = seed_phones(&mut db, &["A", "B", "C"]);

    db.reorder_items(
        &phones(),
        &[
            PositionUpdate::new(&ids[2], 0),
            PositionUpdate::new(&ids[0], 1),
            PositionUpdate::new(&ids[1], 2),
        ],
    )
    .unwrap();

    assert_eq!(numbers(&db), ["C", "A", "B"]);
    assert!(is_dense(&db.get_items(&phones()).unwrap()));
}

#[test]
fn test_position_rewrites_keep_item_timestamps() {
    let (_temp_file, mut db) = create_test_db();
    let ids = seed_phones(&mut db, &["A", "B", "C"]);
    let before = db.get_items(&phones()).unwrap();

    db.reorder_items(
        &phones(),
        &[
            PositionUpdate::new(&ids[1], 0),
            PositionUpdate::new(&ids[2], 1),
            PositionUpdate::new(&ids[0], 2),
        ],
    )
    .unwrap();
    db.remove_item(&phones(), &ids[1]).unwrap();

    for item in db.get_items(&phones()).unwrap() {
        let original = before.iter().find(|b| b.id == item.id).unwrap();
        assert_eq!(item.updated_at, original.updated_at, "{}", item.id);
        assert_eq!(item.created_at, original.created_at, "{}", item.id);
    }
}

#[test]
fn test_invalid_reorders_write_nothing() {
    let (_temp_file, mut db) = create_test_db();
    let ids = seed_phones(&mut db, &["A", "B", "C"]);

    let invalid: Vec<Vec<PositionUpdate>> = vec![
        // missing an item
        vec![PositionUpdate::new(&ids[1], 0), PositionUpdate::new(&ids[0], 1)],
        // duplicated position
        vec![
            PositionUpdate::new(&ids[1], 0),
            PositionUpdate::new(&ids[0], 0),
            PositionUpdate::new(&ids[2], 1),
        ],
        // gap
        vec![
            PositionUpdate::new(&ids[1], 0),
            PositionUpdate::new(&ids[0], 1),
            PositionUpdate::new(&ids[2], 3),
        ],
        // unknown id
        vec![
            PositionUpdate::new(&ids[1], 0),
            PositionUpdate::new(&ids[0], 1),
            PositionUpdate::new("ph_999", 2),
        ],
        // id of another kind
        vec![
            PositionUpdate::new(&ids[1], 0),
            PositionUpdate::new(&ids[0], 1),
            PositionUpdate::new(ids[2].replace("ph_", "ps_"), 2),
        ],
    ];

    for positions in invalid {
        let result = db.reorder_items(&phones(), &positions);
        assert!(
            matches!(result, Err(StudioError::InvalidInput { ref field, .. }) if field == "positions"),
            "{positions:?} should be rejected"
        );
        assert_eq!(numbers(&db), ["A", "B", "C"]);
    }
}

#[test]
fn test_remove_recompacts_positions() {
    let (_temp_file, mut db) = create_test_db();
    let ids = seed_phones(&mut db, &["A", "B", "C", "D", "E"]);

    db.remove_item(&phones(), &ids[1]).unwrap();
    assert_eq!(numbers(&db), ["A", "C", "D", "E"]);
    assert!(is_dense(&db.get_items(&phones()).unwrap()));

    db.remove_item(&phones(), &ids[4]).unwrap();
    db.remove_item(&phones(), &ids[0]).unwrap();
    assert_eq!(numbers(&db), ["C", "D"]);
    assert!(is_dense(&db.get_items(&phones()).unwrap()));
}

#[test]
fn test_removed_ids_are_never_reused() {
    let (_temp_file, mut db) = create_test_db();
    let ids = seed_phones(&mut db, &["A"]);

    db.remove_item(&phones(), &ids[0]).unwrap();
    let next = db.add_item(&phones(), &phone("B")).unwrap();

    assert_ne!(next.id, ids[0]);
    assert_eq!(next.position, 0);
}

#[test]
fn test_remove_missing_item() {
    let (_temp_file, mut db) = create_test_db();
    seed_phones(&mut db, &["A"]);

    for id in ["ph_999", "garbage", "ps_1"] {
        let result = db.remove_item(&phones(), id);
        assert!(matches!(result, Err(StudioError::ItemNotFound { .. })));
    }
    assert_eq!(numbers(&db), ["A"]);
}

#[test]
fn test_update_item_keeps_position() {
    let (_temp_file, mut db) = create_test_db();
    let ids = seed_phones(&mut db, &["A", "B"]);

    let updated = db
        .update_item(
            &phones(),
            &ids[1],
            &ItemPayload::PhoneNumber {
                number: "555-0199".to_string(),
                label: Some("Bookings".to_string()),
            },
        )
        .unwrap();

    assert_eq!(updated.position, 1);
    assert_eq!(numbers(&db), ["A", "555-0199"]);
}

#[test]
fn test_delete_studio_cascades_to_items() {
    let (_temp_file, mut db) = create_test_db();
    seed_phones(&mut db, &["A", "B"]);
    db.create_studio("other", "Other").unwrap();
    let other = CollectionId::new("other", CollectionKind::PhoneNumber);
    db.add_item(&other, &phone("C")).unwrap();

    db.delete_studio("lumen").unwrap();

    assert!(db.get_studio("lumen").unwrap().is_none());
    assert_eq!(db.get_items(&other).unwrap().len(), 1);

    // A recreated studio starts with empty lists.
    db.create_studio("lumen", "Lumen again").unwrap();
    assert!(db.get_items(&phones()).unwrap().is_empty());
}

#[test]
fn test_rename_missing_studio() {
    let (_temp_file, mut db) = create_test_db();
    let result = db.rename_studio("ghost", "Ghost");
    assert!(matches!(result, Err(StudioError::StudioNotFound { .. })));
}
