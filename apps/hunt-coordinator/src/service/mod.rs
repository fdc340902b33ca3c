//! The remote game service: owns monster stats, combat math and persistence.
//!
//! The coordinator only ever talks to it through [`GameService`]; the HTTP
//! implementation lives in [`http`].

pub mod dto;
pub mod http;

use async_trait::async_trait;

use crate::domain::state::{AllianceName, GameOverStatus, GameSession, PlayerId, RoundOutcome, Weapon};
use crate::error::AppError;

pub use http::HttpGameService;

/// Operations the game service exposes.
///
/// Mutating operations are only invoked by the session controller, one at a time.
#[async_trait]
pub trait GameService: Send + Sync {
    /// Create the remote session. `alliances` partitions `player_names`; none is empty.
    async fn create_session(
        &self,
        player_names: &[PlayerId],
        alliances: &[Vec<PlayerId>],
    ) -> Result<(), AppError>;

    /// Full snapshot. `NotFound` when no session exists.
    async fn get_status(&self) -> Result<GameSession, AppError>;

    /// Replace an alliance's VP vector. The service re-validates conservation.
    async fn redistribute(&self, alliance: &AllianceName, new_vps: &[i64]) -> Result<(), AppError>;

    /// Fix the turn order for the round and return the fresh snapshot.
    async fn start_round(&self) -> Result<GameSession, AppError>;

    async fn submit_move(&self, player: &PlayerId, position: u32, weapon: &str)
        -> Result<(), AppError>;

    async fn resolve_round(&self) -> Result<RoundOutcome, AppError>;

    async fn game_over(&self) -> Result<GameOverStatus, AppError>;

    async fn player_weapons(&self, player: &PlayerId) -> Result<Vec<Weapon>, AppError>;

    async fn reset_session(&self) -> Result<(), AppError>;
}
