//! VP redistribution rules.
//!
//! A proposal is acceptable when it keeps the alliance size, gives every
//! member at least one VP, and preserves the alliance total.

use crate::errors::domain::{DomainError, ValidationKind};

/// Smallest VP a member may hold after redistribution.
pub const MIN_VP: i64 = 1;

fn total(values: &[i64]) -> i128 {
    values.iter().map(|&v| i128::from(v)).sum()
}

/// Check a proposal, naming the first rule it breaks.
pub fn check(original: &[i64], proposed: &[i64]) -> Result<(), DomainError> {
    if original.len() != proposed.len() {
        return Err(DomainError::validation(
            ValidationKind::VpLengthMismatch,
            format!(
                "expected {} VP values, got {}",
                original.len(),
                proposed.len()
            ),
        ));
    }
    if let Some((idx, v)) = proposed.iter().enumerate().find(|(_, v)| **v < MIN_VP) {
        return Err(DomainError::validation(
            ValidationKind::VpBelowMinimum,
            format!("member #{} would hold {v} VP; each member needs at least {MIN_VP}", idx + 1),
        ));
    }
    let (before, after) = (total(original), total(proposed));
    if before != after {
        return Err(DomainError::validation(
            ValidationKind::VpSumMismatch,
            format!("total must remain {before}, proposal sums to {after}"),
        ));
    }
    Ok(())
}

/// Pure, total predicate: is `proposed` a valid redistribution of `original`?
pub fn validate(original: &[i64], proposed: &[i64]) -> bool {
    check(original, proposed).is_ok()
}

/// An in-progress edit of one alliance's VP vector.
///
/// Validity is recomputed on every edit, so `is_confirmable` always reflects
/// the current values rather than the state at some earlier submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VpProposal {
    original: Vec<i64>,
    proposed: Vec<i64>,
    valid: bool,
}

impl VpProposal {
    /// Start from the alliance's current distribution (which is trivially valid).
    pub fn new(original: Vec<i64>) -> Self {
        let proposed = original.clone();
        let valid = validate(&original, &proposed);
        Self {
            original,
            proposed,
            valid,
        }
    }

    /// Replace the value for member `idx`. Out-of-range indices are ignored.
    pub fn set(&mut self, idx: usize, value: i64) {
        if let Some(slot) = self.proposed.get_mut(idx) {
            *slot = value;
        }
        self.valid = validate(&self.original, &self.proposed);
    }

    /// Replace the whole proposed vector.
    pub fn set_all(&mut self, values: Vec<i64>) {
        self.proposed = values;
        self.valid = validate(&self.original, &self.proposed);
    }

    pub fn is_confirmable(&self) -> bool {
        self.valid
    }

    pub fn proposed(&self) -> &[i64] {
        &self.proposed
    }

    pub fn problem(&self) -> Option<DomainError> {
        check(&self.original, &self.proposed).err()
    }
}
