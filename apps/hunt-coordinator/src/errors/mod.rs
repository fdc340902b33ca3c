//! Error handling for the hunt coordinator.

pub mod domain;
pub mod error_code;

pub use domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
pub use error_code::ErrorCode;

#[cfg(test)]
mod tests_error_mapping;
