use std::collections::BTreeSet;
use std::fmt;

/// Players are identified by the name the game service knows them by (`P1`, `P2`, ...).
pub type PlayerId = String;
/// Alliances are identified by the unique name the game service assigned.
pub type AllianceName = String;

/// Overall session progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Choosing player and alliance counts.
    Setup,
    /// Assigning every player to an alliance.
    AllianceAssignment,
    /// Alliances redistribute their VP pools; gated on every alliance confirming.
    VpRedistribution,
    /// Players submit moves in turn order; gated on every player submitting.
    RoundInProgress,
    /// Round resolved, kills announced.
    RoundResolved,
    /// Win condition reported by the game service.
    GameOver,
}

impl Phase {
    /// Phases in which a remote session exists and is mirrored by polling.
    pub fn is_console(self) -> bool {
        matches!(
            self,
            Phase::VpRedistribution | Phase::RoundInProgress | Phase::RoundResolved
        )
    }

    /// The win condition only moves the session out of the round phases.
    pub fn accepts_game_over(self) -> bool {
        matches!(self, Phase::RoundInProgress | Phase::RoundResolved)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::AllianceAssignment => "alliance_assignment",
            Phase::VpRedistribution => "vp_redistribution",
            Phase::RoundInProgress => "round_in_progress",
            Phase::RoundResolved => "round_resolved",
            Phase::GameOver => "game_over",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weapon dropped by a monster when it is killed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Loot {
    Poison,
    Ice,
    DualSword,
    Grenade,
    Dynamite,
}

impl Loot {
    /// Name as used by the game service and in weapon lists.
    pub fn as_str(self) -> &'static str {
        match self {
            Loot::Poison => "Poison",
            Loot::Ice => "Ice",
            Loot::DualSword => "Dual Sword",
            Loot::Grenade => "Grenade",
            Loot::Dynamite => "Dynamite",
        }
    }
}

impl fmt::Display for Loot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A monster on the battlefield or waiting in the reserve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monster {
    /// 1-based slot, unique within its zone.
    pub position: u32,
    /// Slug naming the monster (`zombie`, `icequeen`, ...).
    pub name: String,
    pub health: u32,
    /// Always `>= health`.
    pub max_health: u32,
    pub loot: Option<Loot>,
}

/// One kill reported by the game service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KillEvent {
    /// `None` when the monster died from poison.
    pub killer: Option<PlayerId>,
    pub monster_slug: String,
}

impl KillEvent {
    pub fn by(killer: impl Into<PlayerId>, monster_slug: impl Into<String>) -> Self {
        Self {
            killer: Some(killer.into()),
            monster_slug: monster_slug.into(),
        }
    }

    pub fn poison(monster_slug: impl Into<String>) -> Self {
        Self {
            killer: None,
            monster_slug: monster_slug.into(),
        }
    }
}

/// A named group of players sharing one conserved VP pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alliance {
    pub name: AllianceName,
    /// Fixed after assignment.
    pub members: Vec<PlayerId>,
    /// Parallel to `members`; every value is at least one.
    pub vp_distribution: Vec<i64>,
}

impl Alliance {
    /// Widened so service-supplied values cannot overflow.
    pub fn total_vp(&self) -> i128 {
        self.vp_distribution.iter().map(|&v| i128::from(v)).sum()
    }
}

/// A weapon in a player's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weapon {
    pub name: String,
    pub attack: i64,
}

/// Mirrored copy of the remote session, as last fetched from the game service.
///
/// The phase is not part of the remote state; the controller owns it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSession {
    pub round_started: bool,
    /// Permutation of all players, fixed at round start. Empty between rounds.
    pub turn_order: Vec<PlayerId>,
    /// Players that already submitted this round; always a subset of `turn_order`.
    pub submitted_moves: BTreeSet<PlayerId>,
    pub alliances: Vec<Alliance>,
    pub kill_history: Vec<KillEvent>,
    pub battlefield: Vec<Monster>,
    pub reserve: Vec<Monster>,
    pub winning_alliance: Option<AllianceName>,
}

impl GameSession {
    pub fn alliance(&self, name: &str) -> Option<&Alliance> {
        self.alliances.iter().find(|a| a.name == name)
    }

    /// All players in alliance order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerId> {
        self.alliances.iter().flat_map(|a| a.members.iter())
    }

    pub fn player_count(&self) -> usize {
        self.alliances.iter().map(|a| a.members.len()).sum()
    }

    pub fn has_player(&self, player: &str) -> bool {
        self.players().any(|p| p == player)
    }

    pub fn has_submitted(&self, player: &str) -> bool {
        self.submitted_moves.contains(player)
    }

    pub fn battlefield_monster(&self, position: u32) -> Option<&Monster> {
        self.battlefield.iter().find(|m| m.position == position)
    }
}

/// Win-condition status as reported by the game service.
#[derive(Debug, Clone, PartialEq)]
pub struct GameOverStatus {
    pub over: bool,
    pub winning_alliance: Option<AllianceName>,
    /// Average VP of the winning alliance, when the service reports it.
    pub average_vp: Option<f64>,
}

impl GameOverStatus {
    pub fn ongoing() -> Self {
        Self {
            over: false,
            winning_alliance: None,
            average_vp: None,
        }
    }
}

/// Result of resolving a round.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoundOutcome {
    /// Kills in the order the game service reported them.
    pub kill_announcements: Vec<KillEvent>,
}
