//! What a single player sees at their console.
//!
//! Derived from the mirrored snapshot on every call; never cached.

use crate::domain::state::{GameSession, PlayerId};
use crate::domain::turns::is_players_turn;

/// Per-player prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerPrompt {
    /// No snapshot yet: the session has not been created or not fetched.
    WaitingForSession,
    /// Session exists but the round has not started.
    WaitingForRound,
    /// Player already submitted this round.
    Submitted,
    /// Round running, another player is up.
    WaitingForTurn { turn_order: Vec<PlayerId> },
    /// Player may submit now.
    YourTurn,
}

impl PlayerPrompt {
    pub fn derive(session: Option<&GameSession>, player: &str) -> Self {
        let Some(session) = session else {
            return PlayerPrompt::WaitingForSession;
        };
        if !session.round_started {
            return PlayerPrompt::WaitingForRound;
        }
        if session.has_submitted(player) {
            return PlayerPrompt::Submitted;
        }
        if is_players_turn(session, player) {
            return PlayerPrompt::YourTurn;
        }
        PlayerPrompt::WaitingForTurn {
            turn_order: session.turn_order.clone(),
        }
    }

    pub fn is_my_turn(&self) -> bool {
        matches!(self, PlayerPrompt::YourTurn)
    }
}
