//! Domain layer: pure session rules and types.

pub mod game_transition;
pub mod kill_log;
pub mod phase_gate;
pub mod player_view;
pub mod setup;
pub mod state;
pub mod turns;
pub mod vp;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_game_transition;
#[cfg(test)]
mod tests_props_kill_log;
#[cfg(test)]
mod tests_props_phase_gate;
#[cfg(test)]
mod tests_props_turns;
#[cfg(test)]
mod tests_props_vp;

// Re-exports for ergonomics
pub use game_transition::{derive_session_transitions, SessionTransition, SessionView};
pub use phase_gate::{moves_barrier_satisfied, vp_barrier_satisfied, BarrierProgress};
pub use player_view::PlayerPrompt;
pub use setup::{AllianceDraft, SetupCounts};
pub use state::{
    Alliance, AllianceName, GameOverStatus, GameSession, KillEvent, Loot, Monster, Phase,
    PlayerId, RoundOutcome, Weapon,
};
pub use turns::is_my_turn;
pub use vp::VpProposal;
