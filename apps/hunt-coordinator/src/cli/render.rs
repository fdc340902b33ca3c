//! Plain-text views of the controller state.

use crate::domain::game_transition::SessionTransition;
use crate::domain::player_view::PlayerPrompt;
use crate::domain::state::{GameSession, Monster, Phase, Weapon};
use crate::error::AppError;
use crate::session::{Action, SessionController, UpdateEffect};

fn monster_line(m: &Monster) -> String {
    let loot = m.loot.map(|l| l.as_str()).unwrap_or("-");
    format!(
        "  [{}] {:<12} {:>3}/{:<3} loot: {}",
        m.position, m.name, m.health, m.max_health, loot
    )
}

/// Everything the game master needs to see for the current snapshot.
pub fn session_summary(session: &GameSession) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!(
        "Round started: {}",
        if session.round_started { "yes" } else { "no" }
    ));
    if !session.turn_order.is_empty() {
        let order: Vec<String> = session
            .turn_order
            .iter()
            .map(|p| {
                if session.has_submitted(p) {
                    format!("{p}*")
                } else {
                    p.clone()
                }
            })
            .collect();
        lines.push(format!("Turn order: {}", order.join(" -> ")));
    }
    lines.push("Alliances:".to_string());
    for a in &session.alliances {
        let members: Vec<String> = a
            .members
            .iter()
            .zip(&a.vp_distribution)
            .map(|(m, vp)| format!("{m}={vp}"))
            .collect();
        lines.push(format!(
            "  {} (total {}): {}",
            a.name,
            a.total_vp(),
            members.join(", ")
        ));
    }
    lines.push("Battlefield:".to_string());
    lines.extend(session.battlefield.iter().map(monster_line));
    lines.push(format!("Reserve: {} monster(s)", session.reserve.len()));
    if let Some(winner) = &session.winning_alliance {
        lines.push(format!("Winner: {winner}"));
    }
    lines
}

pub fn controller_summary(controller: &SessionController) -> Vec<String> {
    let mut lines = vec![format!("Phase: {}", controller.phase())];
    if let Some(draft) = controller.draft() {
        for (player, alliance) in draft.player_names().iter().zip(draft.assignment()) {
            lines.push(format!("  {player} -> Alliance {}", alliance + 1));
        }
    }
    if let Some(progress) = controller.vp_progress() {
        if controller.phase() == Phase::VpRedistribution {
            lines.push(format!(
                "Redistributions: {}/{}",
                progress.done, progress.total
            ));
        }
    }
    if let Some(progress) = controller.moves_progress() {
        lines.push(format!("Moves: {}/{}", progress.done, progress.total));
    }
    if let Some(session) = controller.snapshot() {
        lines.extend(session_summary(session));
    }
    if let Some(outcome) = controller.outcome() {
        let avg = outcome
            .average_vp
            .map(|v| format!(" (average VP {v:.1})"))
            .unwrap_or_default();
        lines.push(format!(
            "Game over. Winner: {}{avg}",
            outcome.winning_alliance.as_deref().unwrap_or("unknown")
        ));
    }
    lines.push(format!("Allowed: {}", actions_line(&controller.allowed_actions())));
    lines
}

pub fn actions_line(actions: &[Action]) -> String {
    actions
        .iter()
        .map(|a| a.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn prompt_line(player: &str, prompt: &PlayerPrompt) -> String {
    match prompt {
        PlayerPrompt::WaitingForSession => format!("{player}: waiting for the session"),
        PlayerPrompt::WaitingForRound => format!("{player}: waiting for the round to start"),
        PlayerPrompt::Submitted => format!("{player}: move submitted"),
        PlayerPrompt::WaitingForTurn { turn_order } => {
            format!("{player}: waiting; order {}", turn_order.join(" -> "))
        }
        PlayerPrompt::YourTurn => format!("{player}: your turn"),
    }
}

pub fn weapons_line(player: &str, weapons: &[Weapon]) -> String {
    if weapons.is_empty() {
        return format!("{player}: no weapons");
    }
    let list: Vec<String> = weapons
        .iter()
        .map(|w| format!("{} ({})", w.name, w.attack))
        .collect();
    format!("{player}: {}", list.join(", "))
}

pub fn error_line(err: &AppError) -> String {
    format!("error [{}]: {}", err.code(), err.detail())
}

/// Lines worth printing after a poller update, if any.
pub fn update_lines(effect: &UpdateEffect) -> Vec<String> {
    match effect {
        UpdateEffect::Status(transitions) => transitions
            .iter()
            .map(|t| match t {
                SessionTransition::RoundStarted => "Round started".to_string(),
                SessionTransition::TurnBecame { player } => format!("Turn: {player}"),
                SessionTransition::MovesComplete => {
                    "All moves in; ready to resolve".to_string()
                }
                SessionTransition::RoundCleared => "Round cleared".to_string(),
            })
            .collect(),
        UpdateEffect::GameOver(status) => vec![format!(
            "Game over. Winner: {}",
            status.winning_alliance.as_deref().unwrap_or("unknown")
        )],
        UpdateEffect::StillRunning | UpdateEffect::Discarded => Vec::new(),
    }
}
