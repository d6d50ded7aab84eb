// Common test utilities for integration tests

use std::sync::Arc;

use migration::{MigratorTrait, UserMigrator};
use sea_orm::{Database, DatabaseConnection};
use useradmin_backend::app_data::AppData;
use useradmin_backend::coordinators::UserCoordinator;
use useradmin_backend::types::internal::NewUserProfile;

/// Creates a test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    UserMigrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates app data and a coordinator over a fresh in-memory database
pub async fn setup_coordinator() -> (Arc<AppData>, UserCoordinator) {
    let db = setup_test_db().await;
    let app_data = Arc::new(AppData::init(db));
    let coordinator = UserCoordinator::new(Arc::clone(&app_data));

    (app_data, coordinator)
}

pub fn profile(username: &str, full_name: &str) -> NewUserProfile {
    NewUserProfile {
        username: username.to_string(),
        is_active: true,
        full_name: full_name.to_string(),
        designation: "Officer".to_string(),
        email_address: format!("{}@example.com", username),
        mobile_number: "555-0100".to_string(),
    }
}
