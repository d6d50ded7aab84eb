use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::stores::{UserRoleStore, UserStore};

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created once and shared across coordinators,
/// keeping coordinator signatures stable.
pub struct AppData {
    pub db: DatabaseConnection,
    pub user_store: Arc<UserStore>,
    pub user_role_store: Arc<UserRoleStore>,
}

impl AppData {
    /// Wire up the stores over an already connected (and migrated)
    /// database.
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::debug!("Creating stores...");

        let user_store = Arc::new(UserStore::new());
        let user_role_store = Arc::new(UserRoleStore::new());

        tracing::debug!("Stores created");

        Self {
            db,
            user_store,
            user_role_store,
        }
    }
}
