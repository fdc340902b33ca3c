//! Property tests for kill announcements.
//!
//! Properties tested:
//! - One line per event, in event order, duplicates kept
//! - Line text depends only on the event at that position

use proptest::prelude::*;

use crate::domain::kill_log::render;
use crate::domain::test_gens::kill_event;
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_render_preserves_order(events in prop::collection::vec(kill_event(), 0..24)) {
        let lines = render(&events);
        prop_assert_eq!(lines.len(), events.len());

        for (line, event) in lines.iter().zip(&events) {
            prop_assert_eq!(line, &event.to_string());
            match &event.killer {
                Some(killer) => {
                    prop_assert_eq!(line, &format!("{killer} killed {}", event.monster_slug))
                }
                None => prop_assert_eq!(line, &format!("{} died from poison", event.monster_slug)),
            }
        }
    }

    #[test]
    fn prop_render_is_prefix_stable(
        events in prop::collection::vec(kill_event(), 0..24),
        split in any::<prop::sample::Index>(),
    ) {
        let cut = if events.is_empty() { 0 } else { split.index(events.len() + 1) };
        let (head, tail) = events.split_at(cut);
        let mut joined = render(head);
        joined.extend(render(tail));
        prop_assert_eq!(joined, render(&events));
    }
}
