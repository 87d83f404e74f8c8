use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

pub type AppResult<T> = Result<T, AppError>;

/// Body returned for any failure whose detail must stay server-side.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No file uploaded")]
    MissingFile,

    #[error("No file selected")]
    EmptyFilename,

    #[error("File type {extension} not supported. Please upload PDF, DOC, or DOCX files.")]
    UnsupportedFileType { extension: String },

    #[error("Failed to read multipart field: {message}")]
    InvalidMultipart { message: String },

    #[error("File too large: upload exceeds limit of {limit_mb}MB")]
    FileTooLarge { limit_mb: usize },

    #[error("Error reading PDF: {message}")]
    Extraction { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingFile => "MISSING_FILE",
            AppError::EmptyFilename => "EMPTY_FILENAME",
            AppError::UnsupportedFileType { .. } => "UNSUPPORTED_FILE_TYPE",
            AppError::InvalidMultipart { .. } => "INVALID_MULTIPART",
            AppError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            AppError::Extraction { .. } => "EXTRACTION_ERROR",
            AppError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFile => StatusCode::BAD_REQUEST,
            AppError::EmptyFilename => StatusCode::BAD_REQUEST,
            AppError::UnsupportedFileType { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidMultipart { .. } => StatusCode::BAD_REQUEST,
            AppError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Extraction { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Caller-side input problems, reported with a 4xx status.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::MissingFile
                | AppError::EmptyFilename
                | AppError::UnsupportedFileType { .. }
                | AppError::InvalidMultipart { .. }
                | AppError::FileTooLarge { .. }
        )
    }

    /// Message placed in the response body. Internal errors are opaque.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Internal { .. } => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();

        match &self {
            AppError::Internal { message } => {
                tracing::error!(
                    error_code = error_code,
                    status_code = %status,
                    error_message = %message,
                    "Unhandled error while processing request"
                );
            }
            AppError::Extraction { message } => {
                tracing::error!(
                    error_code = error_code,
                    status_code = %status,
                    error_message = %message,
                    "PDF extraction failed"
                );
            }
            other => {
                tracing::warn!(
                    error_code = error_code,
                    status_code = %status,
                    error_message = %other,
                    "Rejected upload request"
                );
            }
        }

        let body = Json(ErrorResponse {
            error: self.public_message(),
        });

        (status, body).into_response()
    }
}

// Anything not classified above is an unhandled error; keep the whole chain
// for the log.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal {
            message: format!("{:?}", err),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal {
            message: format!("IO error: {:?}", err),
        }
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal {
            message: format!("Background task failed: {}", err),
        }
    }
}

impl AppError {
    pub fn unsupported_file_type(extension: impl Into<String>) -> Self {
        AppError::UnsupportedFileType {
            extension: extension.into(),
        }
    }

    pub fn invalid_multipart(message: impl Into<String>) -> Self {
        AppError::InvalidMultipart {
            message: message.into(),
        }
    }

    pub fn extraction(message: impl Into<String>) -> Self {
        AppError::Extraction {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal {
            message: message.into(),
        }
    }
}
