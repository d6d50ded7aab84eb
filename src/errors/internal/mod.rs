use thiserror::Error;

pub mod credential;
pub mod database;
pub mod user;

pub use credential::CredentialError;
pub use database::DatabaseError;
pub use user::UserError;

/// Internal error type for store and coordinator operations
///
/// Hybrid design separates infrastructure errors (shared) from domain
/// errors (store-specific).
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    User(#[from] UserError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }
}
