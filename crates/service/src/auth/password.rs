//! Password hashing with Argon2id.
//!
//! Hashing is deliberately slow, so both operations run on the blocking pool.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use configs::AuthConfig;
use rand::rngs::OsRng;

use crate::errors::ServiceError;

#[derive(Debug, Clone)]
pub struct PasswordService {
    params: Params,
}

impl PasswordService {
    pub fn new(cfg: &AuthConfig) -> Result<Self, ServiceError> {
        let params = Params::new(cfg.memory_kib, cfg.iterations, cfg.parallelism, None)
            .map_err(|e| ServiceError::Hash(e.to_string()))?;
        Ok(Self { params })
    }

    fn hasher(params: Params) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
    }

    /// PHC-formatted hash with a fresh random salt.
    pub async fn hash(&self, password: &str) -> Result<String, ServiceError> {
        let params = self.params.clone();
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Self::hasher(params)
                .hash_password(password.as_bytes(), &salt)
                .map(|h| h.to_string())
                .map_err(|e| ServiceError::Hash(e.to_string()))
        })
        .await
        .map_err(|e| ServiceError::Hash(e.to_string()))?
    }

    /// `Ok(false)` on mismatch. The parameters embedded in `hash` are used, not ours.
    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool, ServiceError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&hash).map_err(|e| ServiceError::Hash(e.to_string()))?;
            Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
        })
        .await
        .map_err(|e| ServiceError::Hash(e.to_string()))?
    }
}
