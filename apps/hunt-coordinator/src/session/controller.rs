//! Session state machine.
//!
//! The controller is the single owner of the phase, the mirrored snapshot and
//! all ephemeral client state, and the only caller of mutating game service
//! operations. Pollers run in the background and forward what they fetch over
//! a channel; nothing they deliver is applied until the owner calls
//! [`SessionController::pump`] or awaits [`SessionController::next_update`].
//!
//! Phase changes come only from controller actions, startup reconciliation
//! and the win condition. A status poll overwrites the snapshot and never
//! moves the phase.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::PollIntervals;
use crate::domain::game_transition::{derive_session_transitions, SessionTransition, SessionView};
use crate::domain::phase_gate::{
    moves_barrier_satisfied, moves_progress, vp_barrier_satisfied, vp_progress, BarrierProgress,
};
use crate::domain::player_view::PlayerPrompt;
use crate::domain::setup::{AllianceDraft, SetupCounts};
use crate::domain::state::{AllianceName, GameOverStatus, GameSession, KillEvent, Phase, Weapon};
use crate::domain::{kill_log, turns, vp};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::service::GameService;
use crate::session::actions::{Action, MutatingAction};
use crate::session::updates::{SyncPayload, SyncUpdate, UpdateEffect};
use crate::sync::polling::{spawn_poller, PollerHandle};

pub struct SessionController {
    service: Arc<dyn GameService>,
    intervals: PollIntervals,
    phase: Phase,
    snapshot: Option<GameSession>,
    draft: Option<AllianceDraft>,
    done_alliances: BTreeSet<AllianceName>,
    last_round_kills: Vec<KillEvent>,
    outcome: Option<GameOverStatus>,
    in_flight: Option<MutatingAction>,
    status_poller: Option<PollerHandle>,
    game_over_poller: Option<PollerHandle>,
    epoch: Arc<AtomicU64>,
    updates_tx: mpsc::UnboundedSender<SyncUpdate>,
    updates_rx: mpsc::UnboundedReceiver<SyncUpdate>,
}

impl SessionController {
    pub fn new(service: Arc<dyn GameService>, intervals: PollIntervals) -> Self {
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();
        Self {
            service,
            intervals,
            phase: Phase::Setup,
            snapshot: None,
            draft: None,
            done_alliances: BTreeSet::new(),
            last_round_kills: Vec::new(),
            outcome: None,
            in_flight: None,
            status_poller: None,
            game_over_poller: None,
            epoch: Arc::new(AtomicU64::new(0)),
            updates_tx,
            updates_rx,
        }
    }

    // ----- read side -----

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn snapshot(&self) -> Option<&GameSession> {
        self.snapshot.as_ref()
    }

    pub fn draft(&self) -> Option<&AllianceDraft> {
        self.draft.as_ref()
    }

    pub fn done_alliances(&self) -> &BTreeSet<AllianceName> {
        &self.done_alliances
    }

    pub fn outcome(&self) -> Option<&GameOverStatus> {
        self.outcome.as_ref()
    }

    pub fn in_flight(&self) -> Option<MutatingAction> {
        self.in_flight
    }

    pub fn pollers_running(&self) -> bool {
        self.status_poller.is_some() || self.game_over_poller.is_some()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    pub fn vp_progress(&self) -> Option<BarrierProgress> {
        self.snapshot
            .as_ref()
            .map(|s| vp_progress(&s.alliances, &self.done_alliances))
    }

    pub fn moves_progress(&self) -> Option<BarrierProgress> {
        self.snapshot
            .as_ref()
            .filter(|s| s.round_started)
            .map(moves_progress)
    }

    /// Starting point for editing an alliance's VP vector.
    pub fn vp_proposal(&self, alliance: &str) -> Option<vp::VpProposal> {
        self.snapshot
            .as_ref()?
            .alliance(alliance)
            .map(|a| vp::VpProposal::new(a.vp_distribution.clone()))
    }

    pub fn is_my_turn(&self, player: &str) -> bool {
        self.phase == Phase::RoundInProgress
            && self
                .snapshot
                .as_ref()
                .is_some_and(|s| turns::is_players_turn(s, player))
    }

    pub fn player_prompt(&self, player: &str) -> PlayerPrompt {
        PlayerPrompt::derive(self.snapshot.as_ref(), player)
    }

    /// Kill lines from the most recently resolved round.
    pub fn last_round_log(&self) -> Vec<String> {
        kill_log::render(&self.last_round_kills)
    }

    /// Every kill of the session, as mirrored from the service.
    pub fn kill_history_log(&self) -> Vec<String> {
        self.snapshot
            .as_ref()
            .map(|s| kill_log::render(&s.kill_history))
            .unwrap_or_default()
    }

    /// Actions the caller may take right now.
    pub fn allowed_actions(&self) -> Vec<Action> {
        if self.in_flight.is_some() {
            return vec![Action::Refresh];
        }
        let mut actions = Vec::new();
        match self.phase {
            Phase::Setup => actions.push(Action::ConfigureCounts),
            Phase::AllianceAssignment => {
                actions.push(Action::EditAssignment);
                if self
                    .draft
                    .as_ref()
                    .is_some_and(|d| d.alliance_groups().is_ok())
                {
                    actions.push(Action::ConfirmAssignment);
                }
            }
            Phase::VpRedistribution => {
                if let Some(s) = &self.snapshot {
                    if vp_barrier_satisfied(&s.alliances, &self.done_alliances) {
                        actions.push(Action::StartRound);
                    } else {
                        actions.push(Action::ConfirmRedistribution);
                    }
                }
                actions.push(Action::Refresh);
            }
            Phase::RoundInProgress => {
                if let Some(s) = &self.snapshot {
                    if moves_barrier_satisfied(&s.turn_order, &s.submitted_moves) {
                        actions.push(Action::ResolveRound);
                    } else {
                        actions.push(Action::SubmitMove);
                    }
                }
                actions.push(Action::Refresh);
            }
            Phase::RoundResolved => {
                actions.push(Action::StartNextRound);
                actions.push(Action::Refresh);
            }
            Phase::GameOver => {}
        }
        actions.push(Action::Reset);
        actions
    }

    // ----- startup -----

    /// Startup reconciliation: adopt an existing remote session if there is one.
    ///
    /// Only acts from `Setup`. A failed fetch leaves the controller in `Setup`.
    pub async fn connect(&mut self) -> Phase {
        if self.phase != Phase::Setup {
            debug!(phase = %self.phase, "Reconciliation skipped; session already active");
            return self.phase;
        }
        match self.service.get_status().await {
            Ok(session) => {
                let phase = if session.round_started {
                    Phase::RoundInProgress
                } else {
                    Phase::VpRedistribution
                };
                info!(
                    phase = %phase,
                    alliances = session.alliances.len(),
                    "Resumed existing session"
                );
                self.done_alliances.clear();
                self.phase = phase;
                self.apply_status(session);
                self.start_pollers();
            }
            Err(e) if e.is_not_found() => {
                info!("No session on the game service; starting at setup");
            }
            Err(e) => {
                warn!(code = %e.code(), error = %e, "Reconciliation failed; starting at setup");
            }
        }
        self.phase
    }

    // ----- setup -----

    pub fn configure(&mut self, players: usize, alliances: usize) -> Result<(), AppError> {
        self.require_phase(Phase::Setup, "configure")?;
        let counts = SetupCounts::new(players, alliances)?;
        self.draft = Some(AllianceDraft::new(counts));
        self.phase = Phase::AllianceAssignment;
        info!(players, alliances, "Transition: -> AllianceAssignment");
        Ok(())
    }

    pub fn assign(&mut self, player_idx: usize, alliance_idx: usize) -> Result<(), AppError> {
        self.require_phase(Phase::AllianceAssignment, "assign")?;
        let draft = self.draft.as_mut().ok_or_else(|| {
            AppError::from(DomainError::conflict(
                ConflictKind::PhaseMismatch,
                "no assignment draft",
            ))
        })?;
        draft.assign(player_idx, alliance_idx)?;
        Ok(())
    }

    /// Create the remote session from the draft and enter VP redistribution.
    pub async fn confirm_assignment(&mut self) -> Result<(), AppError> {
        self.require_phase(Phase::AllianceAssignment, "confirm assignment")?;
        let (names, groups) = {
            let draft = self.draft.as_ref().ok_or_else(|| {
                AppError::from(DomainError::conflict(
                    ConflictKind::PhaseMismatch,
                    "no assignment draft",
                ))
            })?;
            (draft.player_names(), draft.alliance_groups()?)
        };

        self.begin(MutatingAction::CreateSession)?;
        let result = self.service.create_session(&names, &groups).await;
        self.finish();
        result?;

        info!(
            players = names.len(),
            alliances = groups.len(),
            "Session created"
        );
        self.draft = None;
        self.enter_vp_redistribution();
        self.refresh_after("create_session").await;
        self.start_pollers();
        Ok(())
    }

    // ----- rounds -----

    /// Confirm one alliance's redistribution and record it as done.
    pub async fn confirm_redistribution(
        &mut self,
        alliance: &str,
        proposed: &[i64],
    ) -> Result<BarrierProgress, AppError> {
        self.require_phase(Phase::VpRedistribution, "redistribute")?;
        if self.done_alliances.contains(alliance) {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyConfirmed,
                format!("{alliance} already confirmed its redistribution"),
            )
            .into());
        }
        {
            let session = self.require_snapshot()?;
            let current = session.alliance(alliance).ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Alliance, format!("unknown alliance {alliance}"))
            })?;
            vp::check(&current.vp_distribution, proposed)?;
        }

        let name: AllianceName = alliance.to_string();
        self.begin(MutatingAction::Redistribute)?;
        let result = self.service.redistribute(&name, proposed).await;
        self.finish();
        result?;

        self.done_alliances.insert(name);
        self.refresh_after("redistribute").await;
        let progress = self
            .vp_progress()
            .unwrap_or(BarrierProgress { done: 0, total: 0 });
        info!(
            alliance,
            done = progress.done,
            total = progress.total,
            "Redistribution confirmed"
        );
        Ok(progress)
    }

    /// Start the round once every alliance has confirmed.
    pub async fn start_round(&mut self) -> Result<(), AppError> {
        self.require_phase(Phase::VpRedistribution, "start round")?;
        {
            let session = self.require_snapshot()?;
            if !vp_barrier_satisfied(&session.alliances, &self.done_alliances) {
                let progress = vp_progress(&session.alliances, &self.done_alliances);
                return Err(DomainError::conflict(
                    ConflictKind::BarrierNotSatisfied,
                    format!(
                        "{} of {} alliances have confirmed their redistribution",
                        progress.done, progress.total
                    ),
                )
                .into());
            }
        }

        self.begin(MutatingAction::StartRound)?;
        let result = self.service.start_round().await;
        self.finish();
        let session = result?;

        self.phase = Phase::RoundInProgress;
        info!(turn_order = ?session.turn_order, "Transition: -> RoundInProgress");
        self.apply_status(session);
        Ok(())
    }

    /// Submit a move for `player`, enforcing turn order against the mirrored snapshot.
    pub async fn submit_move(
        &mut self,
        player: &str,
        position: u32,
        weapon: &str,
    ) -> Result<(), AppError> {
        self.require_phase(Phase::RoundInProgress, "submit move")?;
        {
            let session = self.require_snapshot()?;
            if !session.has_player(player) {
                return Err(DomainError::not_found(
                    NotFoundKind::Player,
                    format!("{player} is not part of this session"),
                )
                .into());
            }
            turns::require_turn(session, player)?;
            if session.battlefield_monster(position).is_none() {
                return Err(DomainError::validation(
                    ValidationKind::InvalidTarget,
                    format!("no monster at battlefield position {position}"),
                )
                .into());
            }
        }

        let player_id = player.to_string();
        self.begin(MutatingAction::SubmitMove)?;
        let result = self.service.submit_move(&player_id, position, weapon).await;
        self.finish();
        result?;

        info!(player, position, weapon, "Move submitted");
        if let Some(session) = self.snapshot.as_mut() {
            session.submitted_moves.insert(player_id);
        }
        self.refresh_after("submit_move").await;
        Ok(())
    }

    /// Resolve the round once every player has submitted. Returns the kill lines.
    pub async fn resolve_round(&mut self) -> Result<Vec<String>, AppError> {
        self.require_phase(Phase::RoundInProgress, "resolve round")?;
        {
            let session = self.require_snapshot()?;
            if !moves_barrier_satisfied(&session.turn_order, &session.submitted_moves) {
                let progress = moves_progress(session);
                return Err(DomainError::conflict(
                    ConflictKind::BarrierNotSatisfied,
                    format!(
                        "{} of {} players have submitted a move",
                        progress.done, progress.total
                    ),
                )
                .into());
            }
        }

        self.begin(MutatingAction::ResolveRound)?;
        let result = self.service.resolve_round().await;
        self.finish();
        let outcome = result?;

        self.last_round_kills = outcome.kill_announcements;
        self.phase = Phase::RoundResolved;
        let lines = kill_log::render(&self.last_round_kills);
        info!(kills = lines.len(), "Transition: -> RoundResolved");

        self.refresh_after("resolve_round").await;
        match self.service.game_over().await {
            Ok(status) if status.over => self.enter_game_over(status),
            Ok(_) => {}
            Err(e) => warn!(code = %e.code(), error = %e, "Win-condition check failed after resolve"),
        }
        Ok(lines)
    }

    /// Leave the resolved round and start collecting redistributions again.
    pub fn start_next_round(&mut self) -> Result<(), AppError> {
        self.require_phase(Phase::RoundResolved, "start next round")?;
        self.enter_vp_redistribution();
        Ok(())
    }

    // ----- housekeeping -----

    /// Reset the remote session and every piece of client state.
    ///
    /// If the service refuses, nothing changes locally.
    pub async fn reset(&mut self) -> Result<(), AppError> {
        self.begin(MutatingAction::Reset)?;
        let result = self.service.reset_session().await;
        self.finish();
        result?;

        self.stop_pollers();
        self.phase = Phase::Setup;
        self.snapshot = None;
        self.draft = None;
        self.done_alliances.clear();
        self.last_round_kills.clear();
        self.outcome = None;
        self.bump_epoch();
        while self.updates_rx.try_recv().is_ok() {}
        info!("Session reset; Transition: -> Setup");
        Ok(())
    }

    /// One-shot status fetch. Unlike polling, the error reaches the caller.
    pub async fn refresh(&mut self) -> Result<(), AppError> {
        let session = self.service.get_status().await?;
        self.apply_status(session);
        Ok(())
    }

    pub async fn player_weapons(&self, player: &str) -> Result<Vec<Weapon>, AppError> {
        self.service.player_weapons(&player.to_string()).await
    }

    /// Apply every queued poller update without waiting.
    pub fn pump(&mut self) -> Vec<UpdateEffect> {
        let mut effects = Vec::new();
        while let Ok(update) = self.updates_rx.try_recv() {
            effects.push(self.apply_update(update));
        }
        effects
    }

    /// Wait for the next poller update and apply it. Cancel-safe.
    pub async fn next_update(&mut self) -> UpdateEffect {
        match self.updates_rx.recv().await {
            Some(update) => self.apply_update(update),
            None => UpdateEffect::Discarded,
        }
    }

    // ----- internals -----

    fn require_phase(&self, expected: Phase, action: &str) -> Result<(), AppError> {
        if self.phase != expected {
            return Err(DomainError::conflict(
                ConflictKind::PhaseMismatch,
                format!("cannot {action} during {}; expected {expected}", self.phase),
            )
            .into());
        }
        Ok(())
    }

    fn require_snapshot(&self) -> Result<&GameSession, AppError> {
        self.snapshot.as_ref().ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Session,
                "no session snapshot yet; refresh first",
            )
            .into()
        })
    }

    fn begin(&mut self, action: MutatingAction) -> Result<(), AppError> {
        if let Some(pending) = self.in_flight {
            return Err(DomainError::conflict(
                ConflictKind::ActionInFlight,
                format!("{pending} is still pending; cannot {action}"),
            )
            .into());
        }
        self.in_flight = Some(action);
        self.bump_epoch();
        debug!(action = %action, "Mutating call started");
        Ok(())
    }

    fn finish(&mut self) {
        if let Some(action) = self.in_flight.take() {
            debug!(action = %action, "Mutating call finished");
        }
        self.bump_epoch();
    }

    fn bump_epoch(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }

    fn enter_vp_redistribution(&mut self) {
        self.done_alliances.clear();
        self.phase = Phase::VpRedistribution;
        info!("Transition: -> VpRedistribution");
    }

    fn enter_game_over(&mut self, status: GameOverStatus) {
        info!(
            winner = status.winning_alliance.as_deref().unwrap_or("unknown"),
            average_vp = status.average_vp,
            "Transition: -> GameOver"
        );
        if let Some(session) = self.snapshot.as_mut() {
            session.winning_alliance = status.winning_alliance.clone();
        }
        self.outcome = Some(status);
        self.phase = Phase::GameOver;
        self.stop_pollers();
        self.bump_epoch();
    }

    /// Best-effort status fetch after a successful mutation; the next poll catches up on failure.
    async fn refresh_after(&mut self, action: &'static str) {
        match self.service.get_status().await {
            Ok(session) => {
                self.apply_status(session);
            }
            Err(e) => warn!(
                action,
                code = %e.code(),
                error = %e,
                "Status refresh after mutation failed; keeping previous snapshot"
            ),
        }
    }

    fn apply_status(&mut self, session: GameSession) -> Vec<SessionTransition> {
        if let Some(abandoned) = self.in_flight.take() {
            warn!(action = %abandoned, "Abandoned call reconciled by a fresh status");
        }
        let before = self
            .snapshot
            .as_ref()
            .map(SessionView::of)
            .unwrap_or_default();
        let after = SessionView::of(&session);
        let transitions = derive_session_transitions(&before, &after);
        for t in &transitions {
            match t {
                SessionTransition::TurnBecame { player } => debug!(player = %player, "Turn became"),
                other => info!(transition = ?other, "Round progressed"),
            }
        }
        let winning_alliance = self
            .snapshot
            .as_ref()
            .and_then(|s| s.winning_alliance.clone());
        self.snapshot = Some(GameSession {
            winning_alliance: session.winning_alliance.or(winning_alliance),
            ..session
        });
        transitions
    }

    fn apply_update(&mut self, update: SyncUpdate) -> UpdateEffect {
        let current = self.epoch();
        if update.epoch != current {
            debug!(
                update_epoch = update.epoch,
                current_epoch = current,
                "Discarding stale poll result"
            );
            return UpdateEffect::Discarded;
        }
        match update.payload {
            SyncPayload::Status(session) => {
                if !self.phase.is_console() {
                    debug!(phase = %self.phase, "Discarding status outside the session console");
                    return UpdateEffect::Discarded;
                }
                UpdateEffect::Status(self.apply_status(session))
            }
            SyncPayload::GameOver(status) => {
                if !status.over {
                    return UpdateEffect::StillRunning;
                }
                if !self.phase.accepts_game_over() {
                    debug!(phase = %self.phase, "Ignoring win condition outside a round");
                    return UpdateEffect::Discarded;
                }
                self.enter_game_over(status.clone());
                UpdateEffect::GameOver(status)
            }
        }
    }

    fn start_pollers(&mut self) {
        if self.status_poller.is_none() {
            let service = Arc::clone(&self.service);
            let epoch = Arc::clone(&self.epoch);
            let tx = self.updates_tx.clone();
            self.status_poller = Some(spawn_poller(
                "status",
                self.intervals.status,
                move || {
                    let service = Arc::clone(&service);
                    let started_at = epoch.load(Ordering::SeqCst);
                    async move { service.get_status().await.map(|s| (started_at, s)) }
                },
                move |(started_at, session)| {
                    if tx.send(SyncUpdate::status(started_at, session)).is_err() {
                        debug!("Controller gone; dropping status update");
                    }
                },
            ));
        }
        if self.game_over_poller.is_none() {
            let service = Arc::clone(&self.service);
            let epoch = Arc::clone(&self.epoch);
            let tx = self.updates_tx.clone();
            self.game_over_poller = Some(spawn_poller(
                "game_over",
                self.intervals.game_over,
                move || {
                    let service = Arc::clone(&service);
                    let started_at = epoch.load(Ordering::SeqCst);
                    async move { service.game_over().await.map(|s| (started_at, s)) }
                },
                move |(started_at, status)| {
                    if tx.send(SyncUpdate::game_over(started_at, status)).is_err() {
                        debug!("Controller gone; dropping win-condition update");
                    }
                },
            ));
        }
        self.bump_epoch();
    }

    fn stop_pollers(&mut self) {
        for handle in [self.status_poller.take(), self.game_over_poller.take()]
            .into_iter()
            .flatten()
        {
            handle.cancel();
        }
    }
}
