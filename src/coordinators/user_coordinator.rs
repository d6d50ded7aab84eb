use std::sync::Arc;

use chrono::Utc;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::app_data::AppData;
use crate::errors::{CredentialError, DatabaseError, InternalError, UserError};
use crate::services::password::{generate_temporary_password, hash_password, verify_password};
use crate::services::role_diff::{reconcile, AssignmentRef};
use crate::stores::{UserRoleStore, UserStore};
use crate::types::db::{user, user_role};
use crate::types::internal::{
    CreatedUser, NewUserProfile, ProfileChanges, RequestContext, UserChanges,
};

/// Coordinates user lifecycle mutations.
///
/// Owns the database connection and is the only place transactions are
/// opened, committed, or rolled back. Each multi-entity mutation runs
/// under one `DatabaseTransaction` passed by reference into the stores;
/// every store call returns a `Result` checked in sequence, and the
/// first failure after `begin` rolls the whole unit back.
///
/// Failure policy: `NotFound`, `IncorrectPassword`, and the duplicate
/// username pre-check are detected before any transaction opens and
/// surface typed. Anything that fails after `begin` is logged with its
/// step identity and reported uniformly as `UserError::MutationFailed`.
pub struct UserCoordinator {
    db: DatabaseConnection,
    user_store: Arc<UserStore>,
    user_role_store: Arc<UserRoleStore>,
}

impl UserCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: app_data.db.clone(),
            user_store: Arc::clone(&app_data.user_store),
            user_role_store: Arc::clone(&app_data.user_role_store),
        }
    }

    /// Create a user with an initial role set, atomically.
    ///
    /// The account is created with a generated temporary password
    /// (returned once in `CreatedUser`) and flagged for a forced change
    /// on first login. Requested role duplicates are not collapsed: a
    /// duplicate insert aborts the whole mutation.
    pub async fn add_user(
        &self,
        ctx: &RequestContext,
        profile: NewUserProfile,
        role_ids: &[i64],
    ) -> Result<CreatedUser, InternalError> {
        if self
            .user_store
            .find_by_username(&self.db, &profile.username)
            .await?
            .is_some()
        {
            return Err(UserError::DuplicateUsername(profile.username).into());
        }

        let temporary_password = generate_temporary_password();
        let password_hash = hash_password(&temporary_password)?;
        let now = Utc::now().timestamp();

        let txn = self.begin().await?;
        let created = match self
            .apply_add_user(&txn, ctx, &profile, password_hash, role_ids, now)
            .await
        {
            Ok(created) => created,
            Err(e) => {
                tracing::warn!(
                    request_id = %ctx.request_id,
                    username = %profile.username,
                    error = %e,
                    "add_user aborted, rolling back"
                );
                Self::abort(txn).await;
                return Err(UserError::MutationFailed.into());
            }
        };
        if let Err(source) = txn.commit().await {
            tracing::warn!(
                request_id = %ctx.request_id,
                error = %DatabaseError::TransactionCommit { source },
                "add_user commit failed"
            );
            return Err(UserError::MutationFailed.into());
        }

        tracing::info!(
            request_id = %ctx.request_id,
            user_id = created.id,
            roles = role_ids.len(),
            "user created"
        );

        Ok(CreatedUser {
            id: created.id,
            temporary_password,
        })
    }

    async fn apply_add_user(
        &self,
        txn: &DatabaseTransaction,
        ctx: &RequestContext,
        profile: &NewUserProfile,
        password_hash: String,
        role_ids: &[i64],
        now: i64,
    ) -> Result<user::Model, InternalError> {
        let created = self
            .user_store
            .insert(txn, profile, password_hash, ctx.actor_id, now)
            .await?;
        self.insert_assignments(txn, created.id, role_ids, ctx.actor_id, now)
            .await?;

        Ok(created)
    }

    /// Update a user's row and reconcile their role assignments against
    /// the desired set, atomically.
    ///
    /// Returns `NotFound` before any transaction is opened when the
    /// target does not exist. After commit, exactly the retained plus
    /// newly added roles are live; retained assignments keep their ids.
    pub async fn update_user_and_roles(
        &self,
        ctx: &RequestContext,
        user_id: i64,
        changes: UserChanges,
        role_ids: &[i64],
    ) -> Result<(), InternalError> {
        self.user_store.load(&self.db, user_id).await?;

        let now = Utc::now().timestamp();

        let txn = self.begin().await?;
        if let Err(e) = self
            .apply_update_user(&txn, ctx, user_id, &changes, role_ids, now)
            .await
        {
            tracing::warn!(
                request_id = %ctx.request_id,
                user_id,
                error = %e,
                "update_user_and_roles aborted, rolling back"
            );
            Self::abort(txn).await;
            return Err(UserError::MutationFailed.into());
        }
        if let Err(source) = txn.commit().await {
            tracing::warn!(
                request_id = %ctx.request_id,
                user_id,
                error = %DatabaseError::TransactionCommit { source },
                "update_user_and_roles commit failed"
            );
            return Err(UserError::MutationFailed.into());
        }

        tracing::info!(request_id = %ctx.request_id, user_id, "user and roles updated");

        Ok(())
    }

    async fn apply_update_user(
        &self,
        txn: &DatabaseTransaction,
        ctx: &RequestContext,
        user_id: i64,
        changes: &UserChanges,
        role_ids: &[i64],
        now: i64,
    ) -> Result<(), InternalError> {
        self.user_store
            .update(txn, user_id, changes, ctx.actor_id, now)
            .await?;

        let current: Vec<AssignmentRef> = self
            .user_role_store
            .load_for_user(txn, user_id)
            .await?
            .iter()
            .map(|row| AssignmentRef {
                assignment_id: row.id,
                role_id: row.role_id,
            })
            .collect();
        let diff = reconcile(&current, role_ids);

        self.user_role_store
            .delete_for_user_except(txn, user_id, &diff.retained_assignment_ids())
            .await?;
        self.insert_assignments(txn, user_id, &diff.to_add, ctx.actor_id, now)
            .await?;

        Ok(())
    }

    /// Fold the per-role inserts into one result: success only when
    /// every insert succeeded, stopping at the first failure. Partial
    /// work is discarded by the surrounding transaction.
    async fn insert_assignments(
        &self,
        txn: &DatabaseTransaction,
        user_id: i64,
        role_ids: &[i64],
        actor_id: i64,
        now: i64,
    ) -> Result<Vec<user_role::Model>, InternalError> {
        let mut inserted = Vec::with_capacity(role_ids.len());
        for &role_id in role_ids {
            inserted.push(
                self.user_role_store
                    .insert(txn, user_id, role_id, actor_id, now)
                    .await?,
            );
        }

        Ok(inserted)
    }

    /// Persist the self-service profile fields. Single-row write; no
    /// explicit transaction needed.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        user_id: i64,
        changes: ProfileChanges,
    ) -> Result<(), InternalError> {
        self.user_store.load(&self.db, user_id).await?;

        let now = Utc::now().timestamp();
        self.user_store
            .update_profile(&self.db, user_id, &changes, ctx.actor_id, now)
            .await?;

        tracing::info!(request_id = %ctx.request_id, user_id, "profile updated");

        Ok(())
    }

    /// Rotate a user's password after verifying the current one.
    ///
    /// `NotFound` and `IncorrectPassword` are detected before any write.
    /// A stored digest that fails to parse is reported as a credential
    /// error distinct from a mismatch; either way nothing is written.
    pub async fn change_password(
        &self,
        user_id: i64,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), InternalError> {
        let user = self.user_store.load(&self.db, user_id).await?;

        if !verify_password(current_password, &user.password_hash)? {
            return Err(CredentialError::IncorrectPassword.into());
        }

        let new_hash = hash_password(new_password)?;
        let now = Utc::now().timestamp();
        self.user_store
            .update_password(&self.db, user_id, new_hash, user_id, now)
            .await?;

        tracing::info!(user_id, "password changed");

        Ok(())
    }

    /// Load a user together with their live role ids.
    pub async fn load_user_with_roles(
        &self,
        user_id: i64,
    ) -> Result<(user::Model, Vec<i64>), InternalError> {
        let user = self.user_store.load(&self.db, user_id).await?;
        let role_ids = self
            .user_role_store
            .load_for_user(&self.db, user_id)
            .await?
            .iter()
            .map(|row| row.role_id)
            .collect();

        Ok((user, role_ids))
    }

    async fn begin(&self) -> Result<DatabaseTransaction, InternalError> {
        self.db
            .begin()
            .await
            .map_err(|source| DatabaseError::TransactionBegin { source }.into())
    }

    /// Roll back and swallow any rollback error: the caller already has
    /// a failure to report, and a dropped transaction rolls back anyway.
    async fn abort(txn: DatabaseTransaction) {
        if let Err(source) = txn.rollback().await {
            tracing::error!(error = %DatabaseError::TransactionRollback { source }, "rollback failed");
        }
    }
}
