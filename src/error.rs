use serde::Serialize;
use thiserror::Error;

/// Standard error type for login-audit operations.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The requested record does not exist within the caller's authorized
    /// scope. Covers both "no such row" and "row belongs to another site" —
    /// the two are intentionally indistinguishable.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl AuditError {
    /// Get the fixed machine-readable code for this error.
    ///
    /// The human message is plain text; localizing it is the caller's job.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuditError::NotFound(_) => "NOT_FOUND",
            AuditError::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Convert into the structured detail handed to presentation layers.
    pub fn detail(&self) -> ErrorDetail {
        ErrorDetail {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

/// Error detail for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
