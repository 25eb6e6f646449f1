use std::fmt::Display;

use thiserror::Error;

/// Business errors shared by every service; the HTTP layer maps each variant to one status.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    /// Unknown identity and wrong password are deliberately the same error.
    #[error("invalid credentials")]
    Unauthorized,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("hashing error: {0}")]
    Hash(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn storage(e: impl Display) -> Self { Self::Storage(e.to_string()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::Conflict(_) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Unauthorized => 1004,
            ServiceError::Hash(_) => 1101,
            ServiceError::Storage(_) => 1200,
        }
    }

    /// Message safe to show to clients. Internal failures are not described.
    pub fn public_message(&self) -> String {
        match self {
            ServiceError::Validation(m) | ServiceError::Conflict(m) | ServiceError::NotFound(m) => m.clone(),
            ServiceError::Unauthorized => "invalid credentials".into(),
            ServiceError::Storage(_) | ServiceError::Hash(_) => "internal server error".into(),
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, ServiceError::Storage(_) | ServiceError::Hash(_))
    }
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Validation(m) => ServiceError::Validation(m),
            models::errors::ModelError::Db(m) => ServiceError::Storage(m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn internal_details_are_not_public() {
        let e = ServiceError::storage("connection refused (os error 111)");
        assert!(e.is_internal());
        assert_eq!(e.public_message(), "internal server error");
        assert!(e.to_string().contains("connection refused"));
    }

    #[test]
    fn model_errors_convert() {
        let v: ServiceError = ModelError::Validation("name required".into()).into();
        assert!(matches!(v, ServiceError::Validation(ref m) if m == "name required"));
        let d: ServiceError = ModelError::Db("boom".into()).into();
        assert_eq!(d.code(), 1200);
    }

    #[test]
    fn not_found_message() {
        assert_eq!(ServiceError::not_found("Rider").public_message(), "Rider not found");
    }
}
