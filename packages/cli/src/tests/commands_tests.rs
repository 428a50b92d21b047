use crate::commands::{database_state, reset_database};
use crate::config::Config;
use bikelinks_storage::DbState;
use pretty_assertions::assert_eq;
use std::net::{IpAddr, Ipv4Addr};
use tempfile::TempDir;

fn test_config(temp_dir: &TempDir) -> Config {
    Config {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 3000,
        database_path: temp_dir.path().join("bike-shop.db"),
        cors_origin: None,
        max_connections: 2,
    }
}

#[tokio::test]
async fn test_state_command_on_fresh_database() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);

    let state = database_state(&config).await.unwrap();

    assert_eq!(state.counts.brands, 5);
    assert_eq!(state.counts.categories, 10);
    assert_eq!(state.counts.links, 10);
    assert!(config.database_path.exists());
}

#[tokio::test]
async fn test_reset_command_restores_seed_data() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);

    {
        let db = DbState::init_with_path(&config.database_path, 1)
            .await
            .unwrap();
        db.brand_storage.delete_brand(1).await.unwrap();
        db.close().await;
    }

    let counts = reset_database(&config).await.unwrap();

    assert_eq!(counts.brands, 5);
    assert_eq!(counts.categories, 10);
    assert_eq!(counts.links, 10);

    let state = database_state(&config).await.unwrap();
    assert_eq!(state.data.brands[0].name, "Shimano");
    assert_eq!(state.sequences.get("brands"), Some(&5));
}
