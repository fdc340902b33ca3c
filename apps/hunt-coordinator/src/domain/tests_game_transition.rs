use crate::domain::fixtures::{four_player_session, ids, started_session};
use crate::domain::game_transition::{derive_session_transitions, SessionTransition, SessionView};

fn view(round_started: bool, turn: Option<&str>, moves_complete: bool) -> SessionView {
    SessionView {
        round_started,
        turn: turn.map(str::to_string),
        moves_complete,
    }
}

#[test]
fn derive_transitions_empty_when_unchanged() {
    let v = view(true, Some("P2"), false);
    assert!(derive_session_transitions(&v, &v).is_empty());
    let idle = SessionView::default();
    assert!(derive_session_transitions(&idle, &idle).is_empty());
}

#[test]
fn round_start_also_announces_first_turn() {
    let before = view(false, None, false);
    let after = view(true, Some("P3"), false);
    assert_eq!(
        derive_session_transitions(&before, &after),
        vec![
            SessionTransition::RoundStarted,
            SessionTransition::TurnBecame {
                player: "P3".into()
            },
        ]
    );
}

#[test]
fn turn_handoff_is_edge_triggered() {
    let before = view(true, Some("P1"), false);
    let after = view(true, Some("P2"), false);
    assert_eq!(
        derive_session_transitions(&before, &after),
        vec![SessionTransition::TurnBecame {
            player: "P2".into()
        }]
    );
}

#[test]
fn last_submission_completes_moves() {
    let before = view(true, Some("P4"), false);
    let after = view(true, None, true);
    assert_eq!(
        derive_session_transitions(&before, &after),
        vec![SessionTransition::MovesComplete]
    );
}

#[test]
fn resolve_clears_round() {
    let before = view(true, None, true);
    let after = view(false, None, false);
    assert_eq!(
        derive_session_transitions(&before, &after),
        vec![SessionTransition::RoundCleared]
    );
}

#[test]
fn view_of_session_tracks_turn_order() {
    assert_eq!(SessionView::of(&four_player_session()), SessionView::default());

    let mut session = started_session(&["P2", "P1", "P4", "P3"]);
    assert_eq!(SessionView::of(&session), view(true, Some("P2"), false));

    session.submitted_moves = ids(&["P2", "P1"]).into_iter().collect();
    assert_eq!(SessionView::of(&session), view(true, Some("P4"), false));

    session.submitted_moves = ids(&["P1", "P2", "P3", "P4"]).into_iter().collect();
    assert_eq!(SessionView::of(&session), view(true, None, true));
}
