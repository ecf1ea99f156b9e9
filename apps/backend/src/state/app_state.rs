use sea_orm::DatabaseConnection;

/// Application state shared by every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection pool (optional for test scenarios)
    db: Option<DatabaseConnection>,
}

impl AppState {
    /// Create a new AppState with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    /// Create an AppState without a database connection
    pub fn new_without_db() -> Self {
        Self { db: None }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
