// ABOUTME: Integration tests for database state, reset and startup seeding
// ABOUTME: Covers file-backed persistence so seeding only runs on empty tables

use bikelinks_core::{BrandCreateInput, LinkInput};
use bikelinks_storage::{DbState, TableCounts, IN_MEMORY_PATH};
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::TempDir;

async fn create_test_db() -> DbState {
    DbState::init_in_memory().await.unwrap()
}

#[tokio::test]
async fn test_database_state_after_seed() {
    let db = create_test_db().await;

    let state = db.maintenance.database_state().await.unwrap();

    assert_eq!(state.counts.brands, 5);
    assert_eq!(state.counts.categories, 10);
    assert_eq!(state.counts.links, 10);

    assert_eq!(state.sequences.get("brands"), Some(&5));
    assert_eq!(state.sequences.get("categories"), Some(&10));
    assert_eq!(state.sequences.get("links"), Some(&10));

    assert_eq!(state.schemas.brands.len(), 3);
    assert_eq!(state.schemas.categories.len(), 3);
    assert_eq!(state.schemas.links.len(), 8);

    let id_column = &state.schemas.links[0];
    assert_eq!(id_column.name, "id");
    assert_eq!(id_column.column_type, "INTEGER");
    assert_eq!(id_column.pk, 1);

    let clicks = state
        .schemas
        .links
        .iter()
        .find(|c| c.name == "clicks")
        .unwrap();
    assert_eq!(clicks.dflt_value.as_deref(), Some("0"));

    // Raw data is ordered by id, not by name
    let brand_ids: Vec<_> = state.data.brands.iter().map(|b| b.id).collect();
    assert_eq!(brand_ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(state.data.brands[0].name, "Shimano");
    assert_eq!(state.data.links[0].title, "Shimano B2B Portal");
}

#[tokio::test]
async fn test_database_state_serializes_schema_type_field() {
    let db = create_test_db().await;

    let state = db.maintenance.database_state().await.unwrap();
    let json = serde_json::to_value(&state).unwrap();

    assert_eq!(json["counts"]["links"], 10);
    assert_eq!(json["schemas"]["brands"][1]["name"], "name");
    assert_eq!(json["schemas"]["brands"][1]["type"], "TEXT");
    assert_eq!(json["schemas"]["brands"][1]["notnull"], 1);
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_reset_restores_seed_data_and_sequences() {
    let db = create_test_db().await;

    db.brand_storage
        .create_brand(BrandCreateInput {
            name: "Cannondale".to_string(),
        })
        .await
        .unwrap();
    db.link_storage.record_click(1).await.unwrap();
    db.link_storage.delete_link(2).await.unwrap();
    db.brand_storage.delete_brand(5).await.unwrap();

    db.maintenance.reset_database().await.unwrap();

    let state = db.maintenance.database_state().await.unwrap();
    assert_eq!(state.counts.brands, 5);
    assert_eq!(state.counts.categories, 10);
    assert_eq!(state.counts.links, 10);
    assert_eq!(state.sequences.get("brands"), Some(&5));
    assert_eq!(state.sequences.get("links"), Some(&10));
    assert!(state.data.links.iter().all(|l| l.clicks == 0));
    assert!(state.data.brands.iter().all(|b| b.name != "Cannondale"));

    // Ids restart right after the seed rows
    let created = db
        .brand_storage
        .create_brand(BrandCreateInput {
            name: "Cannondale".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 6);
}

#[tokio::test]
async fn test_reset_is_repeatable() {
    let db = create_test_db().await;

    db.maintenance.reset_database().await.unwrap();
    db.maintenance.reset_database().await.unwrap();

    let links = db.link_storage.list_links().await.unwrap();
    assert_eq!(links.len(), 10);
    assert_eq!(links[0].link.title, "Giant B2B");
}

#[tokio::test]
async fn test_seed_if_empty_leaves_populated_tables_alone() {
    let db = create_test_db().await;

    let report = db.maintenance.seed_if_empty().await.unwrap();

    assert!(report.is_empty());
    assert_eq!(db.link_storage.list_links().await.unwrap().len(), 10);
}

#[tokio::test]
async fn test_seed_if_empty_refills_only_empty_tables() {
    let db = create_test_db().await;

    sqlx::query("DELETE FROM links")
        .execute(&db.pool)
        .await
        .unwrap();

    let report = db.maintenance.seed_if_empty().await.unwrap();

    assert!(!report.categories_seeded);
    assert!(!report.brands_seeded);
    assert_eq!(report.links_seeded, 10);
    assert_eq!(db.brand_storage.list_brands().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_seed_skips_links_whose_brand_is_missing() {
    let db = create_test_db().await;

    // Removing Trek cascades its two links; the other tables keep their rows
    db.brand_storage.delete_brand(3).await.unwrap();
    sqlx::query("DELETE FROM links")
        .execute(&db.pool)
        .await
        .unwrap();

    let report = db.maintenance.seed_if_empty().await.unwrap();

    assert!(!report.brands_seeded);
    assert_eq!(report.links_seeded, 8);
}

#[tokio::test]
async fn test_file_database_persists_and_is_not_reseeded() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("bike-shop.db");

    {
        let db = DbState::init_with_path(&db_path, 2).await.unwrap();
        db.link_storage
            .create_link(LinkInput {
                brand_id: 1,
                category_id: 1,
                title: "Extra".to_string(),
                url: "https://example.com/extra".to_string(),
                description: None,
            })
            .await
            .unwrap();
        db.link_storage.record_click(1).await.unwrap();
        db.close().await;
    }

    assert!(db_path.exists());

    let db = DbState::init_with_path(&db_path, 2).await.unwrap();
    let links = db.link_storage.list_links().await.unwrap();
    assert_eq!(links.len(), 11);

    let clicked = links.iter().find(|l| l.link.id == 1).unwrap();
    assert_eq!(clicked.link.clicks, 1);
    db.close().await;
}

#[tokio::test]
async fn test_in_memory_path_opens_private_database() {
    let db = DbState::init_with_path(Path::new(IN_MEMORY_PATH), 5)
        .await
        .unwrap();

    let state = db.maintenance.database_state().await.unwrap();
    assert_eq!(state.counts.links, 10);
}

#[tokio::test]
async fn test_reset_rolls_back_on_failure() {
    let db = create_test_db().await;

    db.brand_storage
        .create_brand(BrandCreateInput {
            name: "Cannondale".to_string(),
        })
        .await
        .unwrap();
    db.link_storage.record_click(1).await.unwrap();

    sqlx::query(
        "CREATE TRIGGER block_seed_link BEFORE INSERT ON links \
         WHEN NEW.title = 'Giant Bicycles' \
         BEGIN SELECT RAISE(ABORT, 'seed link blocked'); END",
    )
    .execute(&db.pool)
    .await
    .unwrap();

    let before = db.maintenance.database_state().await.unwrap();

    assert!(db.maintenance.reset_database().await.is_err());

    let after = db.maintenance.database_state().await.unwrap();
    assert_eq!(
        after.counts,
        TableCounts {
            brands: 6,
            categories: 10,
            links: 10
        }
    );
    assert_eq!(after.sequences.get("brands"), Some(&6));
    assert_eq!(after.sequences, before.sequences);
    assert_eq!(after.data, before.data);
    assert!(after.data.brands.iter().any(|b| b.name == "Cannondale"));

    let clicked = after.data.links.iter().find(|l| l.id == 1).unwrap();
    assert_eq!(clicked.clicks, 1);
}

#[tokio::test]
async fn test_database_state_counts_match_data() {
    let db = create_test_db().await;

    db.brand_storage.delete_brand(3).await.unwrap();
    db.link_storage
        .create_link(LinkInput {
            brand_id: 1,
            category_id: 2,
            title: "Shimano Consumer".to_string(),
            url: "https://bike.shimano.com".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let state = db.maintenance.database_state().await.unwrap();
    assert_eq!(state.counts.brands, state.data.brands.len() as i64);
    assert_eq!(state.counts.categories, state.data.categories.len() as i64);
    assert_eq!(state.counts.links, state.data.links.len() as i64);
    assert_eq!(state.sequences.get("links"), Some(&11));
}
