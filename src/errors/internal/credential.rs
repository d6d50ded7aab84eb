use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialError {
    /// Supplied current password does not match the stored digest.
    #[error("Current password is incorrect")]
    IncorrectPassword,

    /// Stored digest could not be parsed as a PHC string. Distinct from
    /// a mismatch: this means the stored credential is corrupt, not that
    /// the caller supplied the wrong password.
    #[error("Stored password hash is malformed: {message}")]
    MalformedHash { message: String },

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
