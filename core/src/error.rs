/*
 * SPDX-FileCopyrightText: 2025 Roster Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation failed for `{field}`: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error("integrity constraint violated: {0}")]
    Integrity(#[source] DbErr),
    #[error("{entity} {id} is still referenced and cannot be deleted")]
    Protected { entity: &'static str, id: Uuid },
    #[error("fixture rejected: {0}")]
    Fixture(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl ModelError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

/// Classifies a write failure: constraint violations the application tier did
/// not catch (missing relation, duplicate unique value) become `Integrity`.
pub fn write_error(err: DbErr) -> ModelError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) | Some(SqlErr::UniqueConstraintViolation(_)) => {
            ModelError::Integrity(err)
        }
        _ => ModelError::Database(err),
    }
}

/// Classifies a delete failure: a foreign key violation here means a
/// protect-on-delete reference raced past the application-tier check.
pub fn delete_error(entity: &'static str, id: Uuid, err: DbErr) -> ModelError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => ModelError::Protected { entity, id },
        _ => ModelError::Database(err),
    }
}
