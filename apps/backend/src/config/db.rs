use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Runtime environment; selects database names and safety rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    /// Test runtime - enforces the `_test` database name suffix
    Test,
}

/// Which database engine backs the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    /// Private in-memory SQLite database; lives as long as the pool.
    SqliteMemory,
}

impl DbKind {
    /// Reads `STUDENTS_DB_KIND`, defaulting to Postgres when unset.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("STUDENTS_DB_KIND") {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(DbKind::Postgres),
            Err(e) => Err(AppError::config(format!(
                "failed to read STUDENTS_DB_KIND: {e}"
            ))),
        }
    }

    pub fn is_sqlite(self) -> bool {
        matches!(self, DbKind::SqliteFile | DbKind::SqliteMemory)
    }
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite_file" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "sqlite_memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!(
                "Unsupported database kind '{other}' (expected postgres, sqlite-file or sqlite-memory)"
            ))),
        }
    }
}

/// Builds a database URL from environment variables based on runtime and engine
pub fn db_url(env: RuntimeEnv, kind: DbKind) -> Result<String, AppError> {
    match kind {
        DbKind::Postgres => {
            let host = var_or("POSTGRES_HOST", "localhost");
            let port = var_or("POSTGRES_PORT", "5432");
            let db_name = pg_db_name(env)?;
            let username = must_var("APP_DB_USER")?;
            let password = must_var("APP_DB_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteFile => {
            let dir = sqlite_dir();
            let file = match env {
                RuntimeEnv::Prod => "students.sqlite",
                RuntimeEnv::Test => "students_test.sqlite",
            };
            Ok(format!(
                "sqlite://{}/{file}?mode=rwc",
                dir.trim_end_matches('/')
            ))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Directory holding SQLite database files (`SQLITE_DB_DIR`, default `./data`).
pub fn sqlite_dir() -> String {
    var_or("SQLITE_DB_DIR", "./data")
}

fn pg_db_name(env: RuntimeEnv) -> Result<String, AppError> {
    match env {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let db_name = must_var("TEST_DB")?;
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test runtime requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
