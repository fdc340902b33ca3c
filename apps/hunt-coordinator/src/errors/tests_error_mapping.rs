// Unit tests for error mapping - pure domain logic without any transport
use crate::error::ErrorKind;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation() {
    let de = DomainError::validation(ValidationKind::VpSumMismatch, "sum 19 != 20");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::VpSumMismatch);
    assert_eq!(app.kind(), ErrorKind::Validation);
    assert_eq!(app.detail(), "sum 19 != 20");

    let turn = DomainError::validation(ValidationKind::OutOfTurn, "it is P2's turn");
    let app: AppError = turn.into();
    assert_eq!(app.code(), ErrorCode::OutOfTurn);
}

#[test]
fn maps_conflicts() {
    let dup = DomainError::conflict(ConflictKind::AlreadySubmitted, "P1 already moved");
    let app: AppError = dup.into();
    assert_eq!(app.code().as_str(), "ALREADY_SUBMITTED");
    assert_eq!(app.kind(), ErrorKind::Conflict);

    let busy = DomainError::conflict(ConflictKind::ActionInFlight, "redistribute pending");
    let app: AppError = busy.into();
    assert_eq!(app.code().as_str(), "ACTION_IN_FLIGHT");
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Session, "no session");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "SESSION_NOT_FOUND");
    assert!(app.is_not_found());

    let player = DomainError::not_found(NotFoundKind::Player, "no player P9");
    let app: AppError = player.into();
    assert_eq!(app.code(), ErrorCode::PlayerNotFound);
}

#[test]
fn maps_service_statuses() {
    assert_eq!(
        AppError::from_service_status(404, "Player not found.").kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        AppError::from_service_status(400, "Weapon not in hand.").kind(),
        ErrorKind::Validation
    );
    assert_eq!(
        AppError::from_service_status(409, "dup").kind(),
        ErrorKind::Conflict
    );
    assert_eq!(
        AppError::from_service_status(503, "busy").kind(),
        ErrorKind::TransientIo
    );
    assert_eq!(
        AppError::from_service_status(504, "slow").code(),
        ErrorCode::ServiceTimeout
    );
    assert_eq!(
        AppError::from_service_status(302, "moved").kind(),
        ErrorKind::Internal
    );
}

#[test]
fn config_errors_carry_config_code() {
    let app = AppError::config("HUNT_STATUS_POLL_MS must be > 0");
    assert_eq!(app.code(), ErrorCode::ConfigError);
    assert_eq!(app.kind(), ErrorKind::Config);
    assert_eq!(
        app.to_string(),
        "Configuration error: HUNT_STATUS_POLL_MS must be > 0"
    );
}
