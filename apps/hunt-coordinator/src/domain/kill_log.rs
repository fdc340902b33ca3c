//! Human-readable kill announcements.

use std::fmt;

use crate::domain::state::KillEvent;

impl fmt::Display for KillEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.killer {
            Some(killer) => write!(f, "{killer} killed {}", self.monster_slug),
            None => write!(f, "{} died from poison", self.monster_slug),
        }
    }
}

/// One line per event, in the order the game service reported them.
///
/// Never reorders, deduplicates, or drops events; two identical kills give
/// two identical lines.
pub fn render(events: &[KillEvent]) -> Vec<String> {
    events.iter().map(ToString::to_string).collect()
}
