//! Error codes for the hunt coordinator.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and are what the console prints
//! next to a failed action.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Setup validation
    /// Fewer than two players requested
    InvalidPlayerCount,
    /// Alliance count outside 1..=players
    InvalidAllianceCount,
    /// Player or alliance index out of range in the assignment draft
    InvalidAssignment,
    /// An alliance ended up with no members
    EmptyAlliance,

    // Round validation
    /// Proposed VP vector length differs from the alliance size
    VpLengthMismatch,
    /// Some proposed VP value is below one
    VpBelowMinimum,
    /// Proposed VP total differs from the alliance total
    VpSumMismatch,
    /// Move submitted by a player whose turn it is not
    OutOfTurn,
    /// Move targets a position not on the battlefield
    InvalidTarget,
    /// General validation error
    ValidationError,

    // Not found
    /// No session exists on the game service
    SessionNotFound,
    /// Alliance name unknown to the session
    AllianceNotFound,
    /// Player name unknown to the session
    PlayerNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Action not valid in the current phase
    PhaseMismatch,
    /// Round has not been started
    RoundNotStarted,
    /// Player already submitted a move this round
    AlreadySubmitted,
    /// Alliance already confirmed its redistribution
    AlreadyConfirmed,
    /// A completion barrier is not yet satisfied
    BarrierNotSatisfied,
    /// Another mutating action is still pending
    ActionInFlight,
    /// Generic conflict
    Conflict,

    // Transport
    /// Game service could not be reached
    ServiceUnavailable,
    /// Game service did not answer in time
    ServiceTimeout,
    /// Game service answered with a body that could not be decoded
    DecodeError,

    /// Configuration error
    ConfigError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::InvalidAllianceCount => "INVALID_ALLIANCE_COUNT",
            Self::InvalidAssignment => "INVALID_ASSIGNMENT",
            Self::EmptyAlliance => "EMPTY_ALLIANCE",

            Self::VpLengthMismatch => "VP_LENGTH_MISMATCH",
            Self::VpBelowMinimum => "VP_BELOW_MINIMUM",
            Self::VpSumMismatch => "VP_SUM_MISMATCH",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::InvalidTarget => "INVALID_TARGET",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::AllianceNotFound => "ALLIANCE_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::RoundNotStarted => "ROUND_NOT_STARTED",
            Self::AlreadySubmitted => "ALREADY_SUBMITTED",
            Self::AlreadyConfirmed => "ALREADY_CONFIRMED",
            Self::BarrierNotSatisfied => "BARRIER_NOT_SATISFIED",
            Self::ActionInFlight => "ACTION_IN_FLIGHT",
            Self::Conflict => "CONFLICT",

            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::ServiceTimeout => "SERVICE_TIMEOUT",
            Self::DecodeError => "DECODE_ERROR",

            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
