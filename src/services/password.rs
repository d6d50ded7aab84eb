use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::Rng;

use crate::errors::CredentialError;

/// Hash a plaintext password with Argon2id into a PHC string.
///
/// A fresh random salt is generated per call, so hashing the same input
/// twice produces different digests that both verify.
pub fn hash_password(plaintext: &str) -> Result<String, CredentialError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| CredentialError::HashingFailed(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC digest.
///
/// Returns `Ok(false)` on a genuine mismatch. A digest that cannot be
/// parsed is `Err(MalformedHash)` so callers can tell a corrupt stored
/// credential apart from a wrong password. The comparison itself is
/// constant-time via the argon2 crate.
pub fn verify_password(plaintext: &str, hash: &str) -> Result<bool, CredentialError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| CredentialError::MalformedHash {
        message: e.to_string(),
    })?;

    match Argon2::default().verify_password(plaintext.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(CredentialError::MalformedHash {
            message: e.to_string(),
        }),
    }
}

/// Generate a cryptographically secure temporary password
///
/// Used at account creation: the generated password is returned to the
/// caller once and the account is flagged for a forced change on first
/// login.
pub fn generate_temporary_password() -> String {
    const PASSWORD_LENGTH: usize = 20;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789\
                             !@#$%^&*()_+-=[]{}|;:,.<>?";

    let mut rng = rand::rng();
    (0..PASSWORD_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hash = hash_password("correct horse battery staple").expect("hashing failed");

        assert!(verify_password("correct horse battery staple", &hash).unwrap());
        assert!(!verify_password("correct horse battery stable", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_salted_per_call() {
        let first = hash_password("same-input").expect("hashing failed");
        let second = hash_password("same-input").expect("hashing failed");

        // Different digests, both verify against the original plaintext
        assert_ne!(first, second);
        assert!(verify_password("same-input", &first).unwrap());
        assert!(verify_password("same-input", &second).unwrap());
    }

    #[test]
    fn test_hash_output_is_phc_format() {
        let hash = hash_password("anything").expect("hashing failed");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_malformed_hash_is_an_error_not_a_mismatch() {
        let result = verify_password("whatever", "not-a-phc-string");

        match result {
            Err(CredentialError::MalformedHash { .. }) => {}
            other => panic!("Expected MalformedHash, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_password_round_trips() {
        let hash = hash_password("").expect("hashing failed");
        assert!(verify_password("", &hash).unwrap());
        assert!(!verify_password("x", &hash).unwrap());
    }

    #[test]
    fn test_generate_temporary_password_length() {
        let password = generate_temporary_password();
        assert_eq!(password.len(), 20);
    }

    #[test]
    fn test_generate_temporary_password_contains_valid_characters() {
        let password = generate_temporary_password();

        assert!(password.chars().all(|c| {
            c.is_ascii_alphanumeric() || "!@#$%^&*()_+-=[]{}|;:,.<>?".contains(c)
        }));
    }

    #[test]
    fn test_generate_temporary_password_uniqueness() {
        let password1 = generate_temporary_password();
        let password2 = generate_temporary_password();

        assert_ne!(password1, password2);
    }
}
