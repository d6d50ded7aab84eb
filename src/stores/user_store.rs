use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set, Unchanged,
};

use crate::errors::{InternalError, UserError};
use crate::stores::is_unique_violation;
use crate::types::db::user::{self, Entity as User};
use crate::types::internal::{NewUserProfile, ProfileChanges, UserChanges, UserType};

/// UserStore manages the identity rows of the users table.
///
/// Every method takes the connection explicitly so the same call works
/// on a plain connection or inside a caller-owned transaction. Writes
/// are changeset-based: only the fields a caller may touch are ever
/// `Set`, so `id`, `user_type`, and (outside `update_password`) the
/// password hash can never be altered by accident.
pub struct UserStore;

impl UserStore {
    pub fn new() -> Self {
        Self
    }

    /// Load a user by id.
    pub async fn load<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: i64,
    ) -> Result<user::Model, InternalError> {
        let found = User::find_by_id(user_id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("load_user", e))?;

        found.ok_or_else(|| UserError::NotFound { user_id }.into())
    }

    pub async fn find_by_username<C: ConnectionTrait>(
        &self,
        conn: &C,
        username: &str,
    ) -> Result<Option<user::Model>, InternalError> {
        User::find()
            .filter(user::Column::Username.eq(username))
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_user_by_username", e))
    }

    /// Insert a new user row and return it with the generated id.
    ///
    /// New accounts always start as `UserType::None` with a forced
    /// password change pending.
    pub async fn insert<C: ConnectionTrait>(
        &self,
        conn: &C,
        profile: &NewUserProfile,
        password_hash: String,
        actor_id: i64,
        now: i64,
    ) -> Result<user::Model, InternalError> {
        let new_user = user::ActiveModel {
            username: Set(profile.username.clone()),
            is_active: Set(profile.is_active),
            full_name: Set(profile.full_name.clone()),
            designation: Set(profile.designation.clone()),
            email_address: Set(profile.email_address.clone()),
            mobile_number: Set(profile.mobile_number.clone()),
            password_hash: Set(password_hash),
            user_type: Set(UserType::None.as_i32()),
            password_change_required: Set(true),
            created_by: Set(actor_id),
            modified_by: Set(None),
            date_created: Set(now),
            date_modified: Set(now),
            ..Default::default()
        };

        new_user.insert(conn).await.map_err(|e| {
            if is_unique_violation(&e) {
                UserError::DuplicateUsername(profile.username.clone()).into()
            } else {
                InternalError::database("insert_user", e)
            }
        })
    }

    /// Persist the self-service profile fields plus audit columns.
    ///
    /// Leaves username, active flag, email, password, and user type
    /// untouched.
    pub async fn update_profile<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: i64,
        changes: &ProfileChanges,
        actor_id: i64,
        now: i64,
    ) -> Result<(), InternalError> {
        let changeset = user::ActiveModel {
            id: Unchanged(user_id),
            full_name: Set(changes.full_name.clone()),
            designation: Set(changes.designation.clone()),
            mobile_number: Set(changes.mobile_number.clone()),
            modified_by: Set(Some(actor_id)),
            date_modified: Set(now),
            ..Default::default()
        };

        changeset
            .update(conn)
            .await
            .map_err(|e| Self::map_update_err("update_user_profile", user_id, e))?;

        Ok(())
    }

    /// Persist a new password hash plus audit columns; nothing else.
    ///
    /// Also clears the forced-change flag, since the user has now
    /// rotated the credential.
    pub async fn update_password<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: i64,
        password_hash: String,
        actor_id: i64,
        now: i64,
    ) -> Result<(), InternalError> {
        let changeset = user::ActiveModel {
            id: Unchanged(user_id),
            password_hash: Set(password_hash),
            password_change_required: Set(false),
            modified_by: Set(Some(actor_id)),
            date_modified: Set(now),
            ..Default::default()
        };

        changeset
            .update(conn)
            .await
            .map_err(|e| Self::map_update_err("update_user_password", user_id, e))?;

        Ok(())
    }

    /// Full-row update used by the role-reconciliation path, executed
    /// under the caller's transaction. Never touches password or user
    /// type.
    pub async fn update<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: i64,
        changes: &UserChanges,
        actor_id: i64,
        now: i64,
    ) -> Result<(), InternalError> {
        let changeset = user::ActiveModel {
            id: Unchanged(user_id),
            username: Set(changes.username.clone()),
            is_active: Set(changes.is_active),
            full_name: Set(changes.full_name.clone()),
            designation: Set(changes.designation.clone()),
            email_address: Set(changes.email_address.clone()),
            mobile_number: Set(changes.mobile_number.clone()),
            modified_by: Set(Some(actor_id)),
            date_modified: Set(now),
            ..Default::default()
        };

        changeset.update(conn).await.map_err(|e| {
            if is_unique_violation(&e) {
                UserError::DuplicateUsername(changes.username.clone()).into()
            } else {
                Self::map_update_err("update_user", user_id, e)
            }
        })?;

        Ok(())
    }

    fn map_update_err(operation: &str, user_id: i64, e: DbErr) -> InternalError {
        if matches!(e, DbErr::RecordNotUpdated) {
            UserError::NotFound { user_id }.into()
        } else {
            InternalError::database(operation, e)
        }
    }
}
