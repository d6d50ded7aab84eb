use migration::{MigratorTrait, UserMigrator};
use sea_orm::{Database, DatabaseConnection};

use crate::errors::InternalError;

/// Database settings loaded from the environment.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub database_url: String,
}

impl DatabaseSettings {
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://useradmin.db?mode=rwc".to_string());

        Self { database_url }
    }
}

/// Connect to the database. Does NOT run migrations - call
/// `migrate_database` separately.
pub async fn init_database(settings: &DatabaseSettings) -> Result<DatabaseConnection, InternalError> {
    let db = Database::connect(&settings.database_url)
        .await
        .map_err(|e| InternalError::database("connect_database", e))?;

    tracing::debug!("Connected to database: {}", settings.database_url);

    Ok(db)
}

/// Run all pending migrations on the provided connection.
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    UserMigrator::up(db, None)
        .await
        .map_err(|e| InternalError::database("run_migrations", e))?;

    tracing::debug!("Database migrations completed");

    Ok(())
}
