use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("User not found: {user_id}")]
    NotFound { user_id: i64 },

    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("Role {role_id} is already assigned to user {user_id}")]
    DuplicateRoleAssignment { user_id: i64, role_id: i64 },

    /// Uniform signal for any failure inside a transactional mutation.
    /// The failing step is logged, never surfaced to the caller.
    #[error("Failed to process request")]
    MutationFailed,
}
