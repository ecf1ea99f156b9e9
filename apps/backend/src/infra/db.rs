use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, sqlite_dir, DbKind, RuntimeEnv};
use crate::error::AppError;

fn connect_options(url: &str, kind: DbKind) -> ConnectOptions {
    let mut opt = ConnectOptions::new(url);
    opt.acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    // SQLite allows one writer; an in-memory database additionally exists
    // only on the connection that created it, so the pool must never
    // open a second one or drop the first.
    if kind.is_sqlite() {
        opt.min_connections(1)
            .max_connections(1)
            .idle_timeout(Duration::from_secs(24 * 60 * 60))
            .max_lifetime(Duration::from_secs(24 * 60 * 60));
    } else {
        opt.min_connections(1).max_connections(10);
    }
    opt
}

/// Open a connection pool for the given runtime and engine.
/// This function does NOT run any migrations.
pub async fn connect_db(env: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let url = db_url(env, kind)?;
    if kind == DbKind::SqliteFile {
        std::fs::create_dir_all(sqlite_dir()).map_err(|e| {
            AppError::config(format!("cannot create SQLite directory: {e}"))
        })?;
    }
    let conn = Database::connect(connect_options(&url, kind)).await?;
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(env: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(env, kind).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    info!(db_kind = ?kind, runtime_env = ?env, "database ready");
    Ok(conn)
}
