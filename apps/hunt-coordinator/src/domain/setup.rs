//! Session setup: player/alliance counts and the assignment draft.

use crate::domain::state::PlayerId;
use crate::errors::domain::{DomainError, ValidationKind};

pub const MIN_PLAYERS: usize = 2;

/// Player name for a 0-based index (`P1`, `P2`, ...).
pub fn player_name(idx: usize) -> PlayerId {
    format!("P{}", idx + 1)
}

/// Display label for a 0-based alliance index.
pub fn alliance_label(idx: usize) -> String {
    format!("Alliance {}", idx + 1)
}

/// Validated player and alliance counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupCounts {
    players: usize,
    alliances: usize,
}

impl SetupCounts {
    pub fn new(players: usize, alliances: usize) -> Result<Self, DomainError> {
        if players < MIN_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!("need at least {MIN_PLAYERS} players, got {players}"),
            ));
        }
        if alliances < 1 || alliances > players {
            return Err(DomainError::validation(
                ValidationKind::InvalidAllianceCount,
                format!("alliances must be between 1 and {players}, got {alliances}"),
            ));
        }
        Ok(Self { players, alliances })
    }

    pub fn players(&self) -> usize {
        self.players
    }

    pub fn alliances(&self) -> usize {
        self.alliances
    }
}

/// Which alliance each player belongs to, edited before the session is created.
///
/// Every player starts in the first alliance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllianceDraft {
    counts: SetupCounts,
    assignment: Vec<usize>,
}

impl AllianceDraft {
    pub fn new(counts: SetupCounts) -> Self {
        Self {
            counts,
            assignment: vec![0; counts.players()],
        }
    }

    /// Alliance index per player index.
    pub fn assignment(&self) -> &[usize] {
        &self.assignment
    }

    pub fn assign(&mut self, player_idx: usize, alliance_idx: usize) -> Result<(), DomainError> {
        if alliance_idx >= self.counts.alliances() {
            return Err(DomainError::validation(
                ValidationKind::InvalidAssignment,
                format!(
                    "alliance #{} does not exist (have {})",
                    alliance_idx + 1,
                    self.counts.alliances()
                ),
            ));
        }
        let slot = self.assignment.get_mut(player_idx).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidAssignment,
                format!("player #{} does not exist", player_idx + 1),
            )
        })?;
        *slot = alliance_idx;
        Ok(())
    }

    pub fn player_names(&self) -> Vec<PlayerId> {
        (0..self.counts.players()).map(player_name).collect()
    }

    /// Members per alliance, in alliance index order. Fails on the first empty alliance.
    pub fn alliance_groups(&self) -> Result<Vec<Vec<PlayerId>>, DomainError> {
        let mut groups: Vec<Vec<PlayerId>> = vec![Vec::new(); self.counts.alliances()];
        for (player_idx, &alliance_idx) in self.assignment.iter().enumerate() {
            groups[alliance_idx].push(player_name(player_idx));
        }
        if let Some(empty) = groups.iter().position(Vec::is_empty) {
            return Err(DomainError::validation(
                ValidationKind::EmptyAlliance,
                format!("{} is empty", alliance_label(empty)),
            ));
        }
        Ok(groups)
    }
}
