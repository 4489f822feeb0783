//! Application state for Axum handlers.

use roster_repository::DatabasePool;
use roster_service::UserService;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    /// Pool behind the SQLite store, probed by `/ready`. `None` for the
    /// in-memory store.
    pub database: Option<Arc<DatabasePool>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self {
            user_service,
            database: None,
        }
    }

    /// Attaches the database pool checked by the readiness endpoint.
    #[must_use]
    pub fn with_database(mut self, database: Arc<DatabasePool>) -> Self {
        self.database = Some(database);
        self
    }
}
