use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{AppError, AppResult};

pub struct PasswordService;

impl PasswordService {
    /// Hash a password using Argon2 with a fresh random salt
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

        Ok(hash.to_string())
    }

    /// Verify a password against a stored hash
    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(format!("Invalid password hash: {}", e)))?;

        let result = Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok();

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_not_plaintext_and_verifies() {
        let hash = PasswordService::hash_password("p1").unwrap();

        assert!(!hash.is_empty());
        assert_ne!(hash, "p1");
        assert!(hash.starts_with("$argon2"));
        assert!(PasswordService::verify_password("p1", &hash).unwrap());
        assert!(!PasswordService::verify_password("p2", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        let first = PasswordService::hash_password("p1").unwrap();
        let second = PasswordService::hash_password("p1").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn garbage_hash_is_an_internal_error() {
        let err = PasswordService::verify_password("p1", "not-a-phc-string").unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
