pub use sea_orm_migration::prelude::*;

mod m20260401_000001_create_user_tables;

pub struct UserMigrator;

#[async_trait::async_trait]
impl MigratorTrait for UserMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260401_000001_create_user_tables::Migration),
        ]
    }
}
