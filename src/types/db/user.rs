use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    pub is_active: bool,
    pub full_name: String,
    pub designation: String,
    pub email_address: String,
    pub mobile_number: String,
    /// PHC-format digest. The only persisted form of a password.
    pub password_hash: String,
    /// Discriminant of `UserType`. Set at creation, never updated.
    pub user_type: i32,
    pub password_change_required: bool,

    // Audit fields (epoch seconds)
    pub created_by: i64,
    pub modified_by: Option<i64>,
    pub date_created: i64,
    pub date_modified: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
