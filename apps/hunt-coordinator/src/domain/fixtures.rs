//! Hand-built sessions shared by the domain unit tests.

use crate::domain::state::{Alliance, GameSession, Loot, Monster, PlayerId};

pub fn ids(names: &[&str]) -> Vec<PlayerId> {
    names.iter().map(|s| s.to_string()).collect()
}

pub fn alliance(name: &str, members: &[&str], vp: &[i64]) -> Alliance {
    Alliance {
        name: name.to_string(),
        members: ids(members),
        vp_distribution: vp.to_vec(),
    }
}

pub fn monster(position: u32, name: &str, health: u32, loot: Option<Loot>) -> Monster {
    Monster {
        position,
        name: name.to_string(),
        health,
        max_health: health,
        loot,
    }
}

/// Two alliances of two players, 10 VP each, round not started.
pub fn four_player_session() -> GameSession {
    GameSession {
        alliances: vec![
            alliance("Alliance 1", &["P1", "P2"], &[10, 10]),
            alliance("Alliance 2", &["P3", "P4"], &[10, 10]),
        ],
        battlefield: vec![
            monster(1, "zombie", 3, Some(Loot::Poison)),
            monster(2, "bat", 1, None),
            monster(3, "icequeen", 6, Some(Loot::Ice)),
        ],
        reserve: vec![monster(1, "goblin", 2, Some(Loot::Grenade))],
        ..GameSession::default()
    }
}

/// `four_player_session` with a round running in the given order.
pub fn started_session(order: &[&str]) -> GameSession {
    GameSession {
        round_started: true,
        turn_order: ids(order),
        ..four_player_session()
    }
}
