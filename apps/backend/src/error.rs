//! Caller-facing error type for the action surface.
//!
//! `AppError` is what room actions return. Domain errors convert into it
//! with their `ErrorCode`; invariant violations collapse to a generic
//! internal fault and are logged with full detail instead of being
//! returned to the caller.

use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::errors::{DomainError, ErrorCode};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

/// Wire shape of an error response.
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub detail: String,
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Internal { .. } => ErrorCode::Internal,
            AppError::Config { .. } => ErrorCode::Internal,
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn body(&self) -> ErrorBody {
        let detail = match self {
            // Internal faults never leak their diagnostic detail.
            AppError::Internal { .. } | AppError::Config { .. } => {
                "Internal server error".to_string()
            }
            AppError::Validation { detail, .. } => detail.clone(),
            AppError::NotFound { detail, .. } => detail.clone(),
        };
        ErrorBody {
            code: self.code().to_string(),
            detail,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let code = ErrorCode::from(&err);
        match err {
            DomainError::Validation(_, detail) => AppError::Validation { code, detail },
            DomainError::NotFound(_, detail) => AppError::NotFound { code, detail },
            DomainError::Invariant(kind, detail) => {
                error!(kind = ?kind, detail = %detail, "invariant violation");
                AppError::Internal { detail }
            }
        }
    }
}
