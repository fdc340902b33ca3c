use std::fmt;

/// Something the caller may do next, as reported by `allowed_actions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    ConfigureCounts,
    EditAssignment,
    ConfirmAssignment,
    ConfirmRedistribution,
    StartRound,
    SubmitMove,
    ResolveRound,
    StartNextRound,
    Refresh,
    Reset,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::ConfigureCounts => "configure_counts",
            Action::EditAssignment => "edit_assignment",
            Action::ConfirmAssignment => "confirm_assignment",
            Action::ConfirmRedistribution => "confirm_redistribution",
            Action::StartRound => "start_round",
            Action::SubmitMove => "submit_move",
            Action::ResolveRound => "resolve_round",
            Action::StartNextRound => "start_next_round",
            Action::Refresh => "refresh",
            Action::Reset => "reset",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game service calls that change remote state. At most one is pending at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutatingAction {
    CreateSession,
    Redistribute,
    StartRound,
    SubmitMove,
    ResolveRound,
    Reset,
}

impl MutatingAction {
    pub fn as_str(self) -> &'static str {
        match self {
            MutatingAction::CreateSession => "create_session",
            MutatingAction::Redistribute => "redistribute",
            MutatingAction::StartRound => "start_round",
            MutatingAction::SubmitMove => "submit_move",
            MutatingAction::ResolveRound => "resolve_round",
            MutatingAction::Reset => "reset",
        }
    }
}

impl fmt::Display for MutatingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
