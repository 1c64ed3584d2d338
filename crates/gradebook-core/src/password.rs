use std::sync::LazyLock;

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::errors::AppError;

/// Digest checked when a login names no account, so the miss costs one bcrypt
/// verification like a wrong password does.
static DUMMY_DIGEST: LazyLock<Option<String>> =
    LazyLock::new(|| hash("gradebook-no-such-account", DEFAULT_COST).ok());

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}

/// Verifies `password` against `digest`, or against a fixed digest when `digest` is
/// `None`. The `None` case always yields `false`.
pub fn verify_password_or_dummy(password: &str, digest: Option<&str>) -> Result<bool, AppError> {
    match digest {
        Some(digest) => verify_password(password, digest),
        None => {
            if let Some(dummy) = DUMMY_DIGEST.as_deref() {
                let _ = verify(password, dummy);
            }
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext() {
        let hash = hash_password("testpassword123").unwrap();
        assert!(!hash.is_empty());
        assert_ne!(hash, "testpassword123");
    }

    #[test]
    fn test_verify_password_correct() {
        let hash = hash_password("correctpassword").unwrap();
        assert!(verify_password("correctpassword", &hash).unwrap());
    }

    #[test]
    fn test_verify_password_incorrect() {
        let hash = hash_password("correctpassword").unwrap();
        assert!(!verify_password("wrongpassword", &hash).unwrap());
    }

    #[test]
    fn test_same_password_different_hashes() {
        let first = hash_password("same").unwrap();
        let second = hash_password("same").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("same", &first).unwrap());
        assert!(verify_password("same", &second).unwrap());
    }

    #[test]
    fn test_verify_against_malformed_digest_is_error() {
        assert!(verify_password("anything", "not-a-bcrypt-digest").is_err());
    }

    #[test]
    fn test_verify_or_dummy_without_digest_is_false() {
        assert!(!verify_password_or_dummy("gradebook-no-such-account", None).unwrap());
        assert!(!verify_password_or_dummy("anything", None).unwrap());
    }

    #[test]
    fn test_verify_or_dummy_with_digest() {
        let digest = hash_password("secret1").unwrap();
        assert!(verify_password_or_dummy("secret1", Some(&digest)).unwrap());
        assert!(!verify_password_or_dummy("secret2", Some(&digest)).unwrap());
    }

    #[test]
    fn test_missing_account_costs_a_verification() {
        use std::time::Instant;

        let digest = hash_password("secret1").unwrap();
        // first call builds the dummy digest
        verify_password_or_dummy("warmup", None).unwrap();

        let start = Instant::now();
        verify_password_or_dummy("wrong", Some(&digest)).unwrap();
        let known = start.elapsed();

        let start = Instant::now();
        verify_password_or_dummy("wrong", None).unwrap();
        let unknown = start.elapsed();

        assert!(
            unknown * 4 >= known,
            "unknown account took {:?}, known account took {:?}",
            unknown,
            known
        );
    }
}
