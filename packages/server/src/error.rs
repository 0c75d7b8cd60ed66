use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_typed_multipart::TypedMultipartError;
use lectern_common::storage::StorageError;
use sea_orm::DbErr;
use serde::Serialize;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields!";
pub const STORAGE_FAILURE_MESSAGE: &str = "Failed to upload to storage. Please try again.";
pub const DATABASE_FAILURE_MESSAGE: &str = "Failed to save video details to the database.";
pub const UNEXPECTED_FAILURE_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Error payload returned by every endpoint on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Fixed, user-facing description of where the request failed.
    #[schema(example = "Missing required fields!")]
    pub error: &'static str,
}

/// Application-level error type.
///
/// Variants only say where a request failed. The carried detail is logged
/// and never sent to the client.
#[derive(Debug)]
pub enum AppError {
    /// One or more of `video`, `title`, `courseId`, `uploaderId` is absent.
    MissingFields,
    /// The object store write failed.
    Storage(String),
    /// Creating the video row or bumping the course counter failed.
    Persistence(String),
    Unexpected(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::MissingFields => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: MISSING_FIELDS_MESSAGE,
                },
            ),
            AppError::Storage(detail) => {
                tracing::error!("Error uploading to object storage: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: STORAGE_FAILURE_MESSAGE,
                    },
                )
            }
            AppError::Persistence(detail) => {
                tracing::error!("Error saving to database: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: DATABASE_FAILURE_MESSAGE,
                    },
                )
            }
            AppError::Unexpected(detail) => {
                tracing::error!("Unexpected error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: UNEXPECTED_FAILURE_MESSAGE,
                    },
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Persistence(err.to_string())
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<TypedMultipartError> for AppError {
    fn from(err: TypedMultipartError) -> Self {
        match err {
            // Not a multipart request at all: none of the fields were sent.
            TypedMultipartError::InvalidRequest { .. } => {
                tracing::warn!("Rejected non-multipart upload: {err}");
                AppError::MissingFields
            }
            other => AppError::Unexpected(other.to_string()),
        }
    }
}
