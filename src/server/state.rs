//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::config::Config;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool handle and the
/// configuration is reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Configuration loaded at startup, including token settings, the super admin
    /// account and the backup and image directories.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Loaded application configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}
