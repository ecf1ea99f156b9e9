use std::env;

use serial_test::serial;
use students_api::config::db::{DbKind, RuntimeEnv};
use students_api::db::require_db;
use students_api::infra::db::connect_db;
use students_api::infra::state::build_state;
use students_api::repos::students;

use crate::support::factory::unique_fields;

#[tokio::test]
async fn in_memory_databases_are_isolated() -> Result<(), Box<dyn std::error::Error>> {
    let first = build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteMemory)
        .build()
        .await?;
    let second = build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteMemory)
        .build()
        .await?;

    students::create(require_db(&first)?, unique_fields("CS")).await?;

    assert_eq!(students::list(require_db(&first)?).await?.len(), 1);
    assert!(students::list(require_db(&second)?).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn bootstrap_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteMemory)
        .build()
        .await?;
    let db = require_db(&state)?;

    migration::migrate(db, migration::MigrationCommand::Up).await?;
    assert_eq!(migration::count_applied_migrations(db).await?, 1);
    Ok(())
}

// Mutates SQLITE_DB_DIR, so it runs alone.
#[tokio::test]
#[serial]
async fn sqlite_file_persists_across_connections() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let nested = dir.path().join("nested");
    env::set_var("SQLITE_DB_DIR", &nested);

    let state = build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteFile)
        .build()
        .await?;
    let created = students::create(require_db(&state)?, unique_fields("CS")).await?;
    drop(state);

    assert!(nested.join("students_test.sqlite").exists());

    let reopened = connect_db(RuntimeEnv::Test, DbKind::SqliteFile).await?;
    let found = students::find_by_id(&reopened, created.id).await?;
    env::remove_var("SQLITE_DB_DIR");

    assert_eq!(found, Some(created));
    Ok(())
}
