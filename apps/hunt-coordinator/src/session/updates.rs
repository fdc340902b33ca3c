use crate::domain::game_transition::SessionTransition;
use crate::domain::state::{GameOverStatus, GameSession};

/// What a poller fetched.
#[derive(Debug, Clone)]
pub enum SyncPayload {
    Status(GameSession),
    GameOver(GameOverStatus),
}

/// A poller result, tagged with the controller epoch read when the fetch began.
///
/// The controller drops updates whose epoch is no longer current: they were
/// fetched before a mutation, a reset, or a poller restart.
#[derive(Debug, Clone)]
pub struct SyncUpdate {
    pub epoch: u64,
    pub payload: SyncPayload,
}

impl SyncUpdate {
    pub fn status(epoch: u64, session: GameSession) -> Self {
        Self {
            epoch,
            payload: SyncPayload::Status(session),
        }
    }

    pub fn game_over(epoch: u64, status: GameOverStatus) -> Self {
        Self {
            epoch,
            payload: SyncPayload::GameOver(status),
        }
    }
}

/// What applying one update did to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateEffect {
    /// Snapshot replaced; carries the round-level edges it produced.
    Status(Vec<SessionTransition>),
    /// Session moved to `GameOver`.
    GameOver(GameOverStatus),
    /// Service reports the game still running.
    StillRunning,
    /// Stale or out-of-phase update, nothing changed.
    Discarded,
}
