//! Transaction helpers for the SeaORM repositories.
use sea_orm::{DatabaseTransaction, DbErr, SqlErr};
use tracing::error;

use crate::errors::ServiceError;

/// Commit when `outcome` is `Ok`, otherwise roll back and return the original error.
pub(crate) async fn settle<T>(txn: DatabaseTransaction, outcome: Result<T, DbErr>) -> Result<T, DbErr> {
    match outcome {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rb) = txn.rollback().await {
                error!(error = %rb, "transaction rollback failed");
            }
            Err(e)
        }
    }
}

/// Unique violations become `Conflict`; everything else is a storage failure.
pub(crate) fn map_write_err(e: DbErr, conflict_message: &str) -> ServiceError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::warn!(%detail, "unique constraint violated");
            ServiceError::Conflict(conflict_message.to_string())
        }
        _ => {
            error!(error = %e, "database write failed");
            ServiceError::storage(e)
        }
    }
}
