//! Password hashing with Argon2

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Invalid hash parameters: {0}")]
    InvalidParams(String),
    #[error("Hash error: {0}")]
    HashError(String),
}

/// One-way credential transform. Implementations must salt every call.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<Vec<u8>, PasswordError>;

    /// Returns `false` for a mismatch and for a hash it cannot parse.
    fn verify(&self, password: &str, hash: &[u8]) -> bool;
}

/// Argon2id hasher producing PHC strings (`$argon2id$v=19$m=...`).
#[derive(Clone, Default)]
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl PasswordService {
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, PasswordError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| PasswordError::InvalidParams(e.to_string()))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl PasswordHasher for PasswordService {
    fn hash(&self, password: &str) -> Result<Vec<u8>, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string().into_bytes())
            .map_err(|e| PasswordError::HashError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &[u8]) -> bool {
        let Ok(encoded) = std::str::from_utf8(hash) else {
            return false;
        };
        let Ok(parsed_hash) = PasswordHash::new(encoded) else {
            return false;
        };
        // Cost parameters come from the PHC string, not from `self`.
        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> PasswordService {
        PasswordService::new(1024, 1, 1).unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = fast_hasher();
        let hash = hasher.hash("correct horse").unwrap();

        assert!(hasher.verify("correct horse", &hash));
        assert!(!hasher.verify("wrong horse", &hash));
    }

    #[test]
    fn test_hash_never_contains_plaintext() {
        let hash = fast_hasher().hash("plaintext-secret").unwrap();
        let encoded = String::from_utf8(hash).unwrap();
        assert!(encoded.starts_with("$argon2id$"));
        assert!(!encoded.contains("plaintext-secret"));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let hasher = fast_hasher();
        let a = hasher.hash("same").unwrap();
        let b = hasher.hash("same").unwrap();
        assert_ne!(a, b);
        assert!(hasher.verify("same", &a));
        assert!(hasher.verify("same", &b));
    }

    #[test]
    fn test_malformed_hash_is_mismatch() {
        let hasher = fast_hasher();
        assert!(!hasher.verify("x", b""));
        assert!(!hasher.verify("x", b"not-a-phc-string"));
        assert!(!hasher.verify("x", &[0xff, 0xfe, 0x00]));
    }

    #[test]
    fn test_verify_uses_params_from_hash() {
        let hash = fast_hasher().hash("pw").unwrap();
        let stronger = PasswordService::new(2048, 2, 1).unwrap();
        assert!(stronger.verify("pw", &hash));
    }

    #[test]
    fn test_rejects_invalid_params() {
        assert!(matches!(
            PasswordService::new(1, 0, 0),
            Err(PasswordError::InvalidParams(_))
        ));
    }
}
