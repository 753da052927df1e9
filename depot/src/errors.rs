use crate::db::errors::DbError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use utoipa::ToSchema;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Malformed path or query parameter
    #[error("{message}")]
    BadRequest { message: String },

    /// Requested resource not found
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: String, id: String },

    /// Natural key is already taken by another row
    #[error("{resource} with {field} {value} already exists")]
    AlreadyExists { resource: String, field: String, value: String },

    /// Write rejected because a foreign key points at a missing row
    #[error("{resource}: {field} does not reference an existing record")]
    InvalidReference { resource: String, field: String },

    /// Delete rejected because other rows still reference the record
    #[error("{resource} with ID {id} is still referenced by other records")]
    InUse { resource: String, id: String },

    /// Request body could not be bound or failed validation
    #[error("{message}")]
    Unprocessable { message: String },

    /// Generic internal service error
    #[error("Failed to {operation}")]
    Internal { operation: String },

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Snake-cased HTTP reason, e.g. `not_found` or `conflict`
    #[schema(example = "not_found")]
    pub code: String,
    /// Human readable description of the failure
    #[schema(example = "Seller with ID 7 not found")]
    pub message: String,
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::AlreadyExists { .. } | Error::InvalidReference { .. } | Error::InUse { .. } => StatusCode::CONFLICT,
            Error::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Database(db_err) => match db_err {
                DbError::NotFound => StatusCode::NOT_FOUND,
                DbError::UniqueViolation { .. } => StatusCode::CONFLICT,
                DbError::ForeignKeyViolation { .. } => StatusCode::CONFLICT,
                DbError::CheckViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                DbError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::Internal { .. } | Error::Other(_) => "Internal server error".to_string(),
            Error::Database(db_err) => match db_err {
                DbError::NotFound => "Resource not found".to_string(),
                DbError::UniqueViolation { table, .. } => match table.as_deref() {
                    Some(table) => format!("A record with the same unique key already exists in {table}"),
                    None => "Resource already exists".to_string(),
                },
                DbError::ForeignKeyViolation { .. } => "Invalid reference to related resource".to_string(),
                DbError::CheckViolation { .. } => "Invalid data provided".to_string(),
                DbError::Other(_) => "Database error occurred".to_string(),
            },
            other => other.to_string(),
        }
    }

    /// The machine-readable `code` of the error envelope.
    pub fn code(&self) -> String {
        let status = self.status_code();
        status
            .canonical_reason()
            .unwrap_or("unknown_error")
            .to_lowercase()
            .replace([' ', '-'], "_")
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details for debugging - different log levels based on severity
        match &self {
            Error::Database(DbError::Other(_)) | Error::Internal { .. } | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Database(_) => {
                tracing::warn!("Database constraint error: {}", self);
            }
            Error::AlreadyExists { .. } | Error::InvalidReference { .. } | Error::InUse { .. } => {
                tracing::warn!("Conflict error: {}", self);
            }
            Error::BadRequest { .. } | Error::NotFound { .. } | Error::Unprocessable { .. } => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let status = self.status_code();
        let body = ErrorBody {
            code: self.code(),
            message: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: Error) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_envelope() {
        let (status, body) = body_of(Error::NotFound {
            resource: "Seller".to_string(),
            id: "7".to_string(),
        })
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, "not_found");
        assert_eq!(body.message, "Seller with ID 7 not found");
    }

    #[tokio::test]
    async fn test_conflicts_map_to_409() {
        let (status, body) = body_of(Error::AlreadyExists {
            resource: "Section".to_string(),
            field: "section_number".to_string(),
            value: "3".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.code, "conflict");
        assert_eq!(body.message, "Section with section_number 3 already exists");

        let (status, _) = body_of(Error::InvalidReference {
            resource: "Seller".to_string(),
            field: "locality_id".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = body_of(Error::Database(DbError::UniqueViolation {
            constraint: Some("sellers_cid_key".to_string()),
            table: Some("sellers".to_string()),
            message: "duplicate key value violates unique constraint".to_string(),
        }))
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_unprocessable_code() {
        let (status, body) = body_of(Error::Unprocessable {
            message: "missing field `cid`".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.code, "unprocessable_entity");
        assert_eq!(body.message, "missing field `cid`");

        let (status, body) = body_of(Error::Database(DbError::CheckViolation {
            constraint: Some("product_batches_quantity_check".to_string()),
            table: Some("product_batches".to_string()),
            message: "new row violates check constraint".to_string(),
        }))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.message, "Invalid data provided");
    }

    #[tokio::test]
    async fn test_internal_errors_hide_details() {
        let (status, body) = body_of(Error::Other(anyhow::anyhow!("connection refused on 10.0.0.3"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "internal_server_error");
        assert_eq!(body.message, "Internal server error");

        let (_, body) = body_of(Error::Database(DbError::Other(anyhow::anyhow!("relation does not exist")))).await;
        assert_eq!(body.message, "Database error occurred");
    }

    #[test]
    fn test_bad_request_code() {
        let err = Error::BadRequest {
            message: "invalid id".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "bad_request");
    }
}
