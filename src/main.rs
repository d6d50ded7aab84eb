use std::sync::Arc;

use useradmin_backend::app_data::AppData;
use useradmin_backend::config::{init_database, init_logging, migrate_database, DatabaseSettings};
use useradmin_backend::coordinators::UserCoordinator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let settings = DatabaseSettings::from_env();
    let db = init_database(&settings).await?;
    migrate_database(&db).await?;

    let app_data = Arc::new(AppData::init(db));
    let _user_coordinator = UserCoordinator::new(app_data);

    tracing::info!("useradmin backend ready; schema is up to date");

    Ok(())
}
