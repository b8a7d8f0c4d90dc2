use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Failures from the storage layer.
///
/// The first three variants cover the bootstrap sequence (open, declare,
/// flush); `Query` covers row access once the schema is in place.
#[derive(Debug, ThisError)]
pub enum StorageError {
    #[error("failed to open database {}: {source}", .path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: SqlxError,
    },

    #[error("failed to declare asset schema in {}: {source}", .path.display())]
    SchemaDeclarationFailed {
        path: PathBuf,
        #[source]
        source: SqlxError,
    },

    #[error("failed to commit asset schema to {}: {source}", .path.display())]
    CommitFailed {
        path: PathBuf,
        #[source]
        source: SqlxError,
    },

    #[error("database error: {0}")]
    Query(#[from] SqlxError),
}

/// Errors surfaced through the HTTP layer.
#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("asset not found")]
    NotFound,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            ApiError::NotFound => {
                let body = ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: "No asset with that id.".to_string(),
                };
                (StatusCode::NOT_FOUND, body)
            }
            ApiError::Storage(_) => {
                // internal detail stays out of the response body
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
