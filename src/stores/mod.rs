// Stores layer - Data access and repository pattern
pub mod user_role_store;
pub mod user_store;

pub use user_role_store::UserRoleStore;
pub use user_store::UserStore;

/// SQLite reports constraint violations in the error text; SeaORM does
/// not expose a stable variant for them across drivers.
pub(crate) fn is_unique_violation(e: &sea_orm::DbErr) -> bool {
    e.to_string().contains("UNIQUE")
}
