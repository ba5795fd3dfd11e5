use anyhow::Error as AnyhowError;
use sqlx::Error as SqlxError;
use std::io::Error as IoError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    SqlxError(#[from] SqlxError),

    #[error("{0}")]
    IoError(#[from] IoError),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Database connection already released")]
    ConnectionClosed,

    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Driver-level faults: connection, query syntax, constraint violations.
    pub fn is_database(&self) -> bool {
        matches!(self, AppError::SqlxError(_))
    }
}

impl From<AnyhowError> for AppError {
    fn from(err: AnyhowError) -> Self {
        AppError::InternalError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlx_errors_are_database_errors() {
        let err = AppError::from(SqlxError::RowNotFound);

        assert!(err.is_database());
        assert!(err.to_string().starts_with("Database error: "));
    }

    #[test]
    fn other_errors_are_generic() {
        let io = AppError::from(IoError::other("stdin closed"));
        let closed = AppError::ConnectionClosed;
        let internal = AppError::from(anyhow::anyhow!("boom"));

        assert!(!io.is_database());
        assert!(!closed.is_database());
        assert_eq!(internal.to_string(), "boom");
        assert_eq!(io.to_string(), "stdin closed");
    }
}
