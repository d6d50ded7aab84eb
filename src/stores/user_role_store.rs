use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::{InternalError, UserError};
use crate::stores::is_unique_violation;
use crate::types::db::user_role::{self, Entity as UserRole};

/// UserRoleStore manages the many-to-many user/role assignment rows.
///
/// Assignments have no mutable state of their own: they are inserted
/// when a role is granted and deleted by id when it is revoked.
pub struct UserRoleStore;

impl UserRoleStore {
    pub fn new() -> Self {
        Self
    }

    /// Load the live assignments for a user, ordered by assignment id
    /// so repeated reads are deterministic.
    pub async fn load_for_user<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: i64,
    ) -> Result<Vec<user_role::Model>, InternalError> {
        UserRole::find()
            .filter(user_role::Column::UserId.eq(user_id))
            .order_by_asc(user_role::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("load_user_roles", e))
    }

    /// Delete every live assignment for the user except the retained
    /// ids. Deleting zero rows is success, not an error.
    pub async fn delete_for_user_except<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: i64,
        retained_assignment_ids: &[i64],
    ) -> Result<u64, InternalError> {
        let mut delete = UserRole::delete_many().filter(user_role::Column::UserId.eq(user_id));
        if !retained_assignment_ids.is_empty() {
            delete = delete.filter(
                user_role::Column::Id.is_not_in(retained_assignment_ids.iter().copied()),
            );
        }

        let result = delete
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_user_roles", e))?;

        Ok(result.rows_affected)
    }

    /// Insert one assignment row. A duplicate `(user_id, role_id)` pair
    /// trips the unique index and is reported as a typed error.
    pub async fn insert<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: i64,
        role_id: i64,
        actor_id: i64,
        now: i64,
    ) -> Result<user_role::Model, InternalError> {
        let new_assignment = user_role::ActiveModel {
            user_id: Set(user_id),
            role_id: Set(role_id),
            created_by: Set(actor_id),
            created_at: Set(now),
            ..Default::default()
        };

        new_assignment.insert(conn).await.map_err(|e| {
            if is_unique_violation(&e) {
                UserError::DuplicateRoleAssignment { user_id, role_id }.into()
            } else {
                InternalError::database("insert_user_role", e)
            }
        })
    }
}
