use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand_core::OsRng;
use tracing::error;

use crate::error::ApiError;

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// Hashes and verifies passwords on the blocking pool.
#[derive(Clone)]
pub struct Passwords {
    argon2: Argon2<'static>,
}

impl Passwords {
    pub fn new(params: HashParams) -> Result<Self, argon2::Error> {
        let params = Params::new(params.memory_kib, params.iterations, params.parallelism, None)?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Produce a PHC string with a fresh random salt.
    pub async fn hash(&self, password: String) -> Result<String, ApiError> {
        let argon2 = self.argon2.clone();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
        })
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal("password hashing task failed".into())
        })?
        .map_err(|e| ApiError::Internal(format!("could not hash password: {e}")))
    }

    /// `Ok(false)` on mismatch; `Err` only if the stored hash is unreadable.
    pub async fn verify(&self, password: String, hash: String) -> Result<bool, ApiError> {
        let argon2 = self.argon2.clone();
        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&hash)
                .map_err(|e| ApiError::Internal(format!("stored password hash is invalid: {e}")))?;
            Ok::<_, ApiError>(argon2.verify_password(password.as_bytes(), &parsed).is_ok())
        })
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal("password verification task failed".into())
        })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap() -> Passwords {
        Passwords::new(HashParams {
            memory_kib: 64,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_hash_then_verify() {
        let passwords = cheap();
        let hash = passwords.hash("pw1".into()).await.unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert_ne!(hash, "pw1");
        assert!(passwords.verify("pw1".into(), hash.clone()).await.unwrap());
        assert!(!passwords.verify("pw2".into(), hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_salts_differ() {
        let passwords = cheap();
        let a = passwords.hash("same".into()).await.unwrap();
        let b = passwords.hash("same".into()).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_corrupt_hash_is_internal_error() {
        let err = cheap().verify("pw".into(), "not-a-hash".into()).await.unwrap_err();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn test_invalid_params_rejected() {
        assert!(
            Passwords::new(HashParams {
                memory_kib: 1,
                iterations: 1,
                parallelism: 1,
            })
            .is_err()
        );
    }
}
