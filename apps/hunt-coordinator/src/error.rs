use thiserror::Error;

use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::errors::ErrorCode;

/// Failure categories every caller of the coordinator can branch on.
///
/// No category is fatal: mutating actions leave state untouched and report,
/// polling swallows `TransientIo` and retries on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    TransientIo,
    Conflict,
    Config,
    Internal,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Game service unavailable: {detail}")]
    TransientIo { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { code: ErrorCode, detail: String },
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation { .. } => ErrorKind::Validation,
            AppError::NotFound { .. } => ErrorKind::NotFound,
            AppError::Conflict { .. } => ErrorKind::Conflict,
            AppError::TransientIo { .. } => ErrorKind::TransientIo,
            AppError::Config { .. } => ErrorKind::Config,
            AppError::Internal { .. } => ErrorKind::Internal,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. }
            | AppError::NotFound { code, .. }
            | AppError::Conflict { code, .. }
            | AppError::TransientIo { code, .. }
            | AppError::Internal { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Conflict { detail, .. }
            | AppError::TransientIo { detail, .. }
            | AppError::Config { detail }
            | AppError::Internal { detail, .. } => detail,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn transient(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::TransientIo {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            code: ErrorCode::Internal,
            detail: detail.into(),
        }
    }

    /// Map a non-success HTTP status from the game service onto the taxonomy.
    pub fn from_service_status(status: u16, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        match status {
            404 => Self::not_found(ErrorCode::NotFound, detail),
            400 | 422 => Self::invalid(ErrorCode::ValidationError, detail),
            409 => Self::conflict(ErrorCode::Conflict, detail),
            408 | 504 => Self::transient(ErrorCode::ServiceTimeout, detail),
            500..=599 => Self::transient(ErrorCode::ServiceUnavailable, detail),
            _ => Self::internal(format!("unexpected status {status}: {detail}")),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::InvalidPlayerCount => ErrorCode::InvalidPlayerCount,
                    ValidationKind::InvalidAllianceCount => ErrorCode::InvalidAllianceCount,
                    ValidationKind::InvalidAssignment => ErrorCode::InvalidAssignment,
                    ValidationKind::EmptyAlliance => ErrorCode::EmptyAlliance,
                    ValidationKind::VpLengthMismatch => ErrorCode::VpLengthMismatch,
                    ValidationKind::VpBelowMinimum => ErrorCode::VpBelowMinimum,
                    ValidationKind::VpSumMismatch => ErrorCode::VpSumMismatch,
                    ValidationKind::OutOfTurn => ErrorCode::OutOfTurn,
                    ValidationKind::InvalidTarget => ErrorCode::InvalidTarget,
                };
                AppError::invalid(code, detail)
            }
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                    ConflictKind::RoundNotStarted => ErrorCode::RoundNotStarted,
                    ConflictKind::AlreadySubmitted => ErrorCode::AlreadySubmitted,
                    ConflictKind::AlreadyConfirmed => ErrorCode::AlreadyConfirmed,
                    ConflictKind::BarrierNotSatisfied => ErrorCode::BarrierNotSatisfied,
                    ConflictKind::ActionInFlight => ErrorCode::ActionInFlight,
                };
                AppError::conflict(code, detail)
            }
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Session => ErrorCode::SessionNotFound,
                    NotFoundKind::Alliance => ErrorCode::AllianceNotFound,
                    NotFoundKind::Player => ErrorCode::PlayerNotFound,
                };
                AppError::not_found(code, detail)
            }
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AppError::transient(ErrorCode::ServiceTimeout, format!("request timed out: {e}"))
        } else if e.is_decode() {
            AppError::Internal {
                code: ErrorCode::DecodeError,
                detail: format!("undecodable response: {e}"),
            }
        } else if let Some(status) = e.status() {
            AppError::from_service_status(status.as_u16(), e.to_string())
        } else {
            AppError::transient(ErrorCode::ServiceUnavailable, format!("request failed: {e}"))
        }
    }
}

impl From<url::ParseError> for AppError {
    fn from(e: url::ParseError) -> Self {
        AppError::config(format!("invalid game service URL: {e}"))
    }
}
