mod database;
mod logging;

pub use database::{init_database, migrate_database, DatabaseSettings};
pub use logging::{init_logging, LoggingConfig, LoggingError};
