//! Property tests for gallery navigation invariants.
//!
//! Uses proptest to verify:
//! 1. Cyclic closure — `len` advances return to the start
//! 2. Retreat/advance are inverses
//! 3. Jump accepts exactly `[0, len)` and leaves state alone otherwise
//! 4. Render marks exactly one item active (zero when empty)
//! 5. The index stays in range under any action sequence

use nebulanet_core::dataset::ObservationRecord;
use nebulanet_core::gallery::{Gallery, GalleryItem};
use nebulanet_core::paths::ImagePaths;
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn gallery_of(len: usize) -> Gallery {
    let paths = ImagePaths::default();
    Gallery::new(
        (0..len)
            .map(|i| GalleryItem::new(format!("obs_{i}"), ObservationRecord::default(), &paths))
            .collect(),
    )
}

/// Non-empty gallery with a random starting position.
fn arb_positioned_gallery() -> impl Strategy<Value = Gallery> {
    (1usize..40)
        .prop_flat_map(|len| (Just(len), 0..len))
        .prop_map(|(len, start)| {
            let mut g = gallery_of(len);
            g.jump_to(start as i64);
            g
        })
}

#[derive(Debug, Clone)]
enum Action {
    Advance,
    Retreat,
    Jump(i64),
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Advance),
        Just(Action::Retreat),
        (-50i64..50).prop_map(Action::Jump),
    ]
}

// ── 1. Cyclic closure ────────────────────────────────────────────────

proptest! {
    #[test]
    fn advance_len_times_is_identity(mut g in arb_positioned_gallery()) {
        let start = g.active_index();
        for _ in 0..g.len() {
            g.advance();
        }
        prop_assert_eq!(g.active_index(), start);
    }

    #[test]
    fn retreat_len_times_is_identity(mut g in arb_positioned_gallery()) {
        let start = g.active_index();
        for _ in 0..g.len() {
            g.retreat();
        }
        prop_assert_eq!(g.active_index(), start);
    }
}

// ── 2. Inverses ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn retreat_then_advance_is_identity(mut g in arb_positioned_gallery()) {
        let start = g.active_index();
        g.retreat();
        g.advance();
        prop_assert_eq!(g.active_index(), start);
    }

    #[test]
    fn advance_then_retreat_is_identity(mut g in arb_positioned_gallery()) {
        let start = g.active_index();
        g.advance();
        g.retreat();
        prop_assert_eq!(g.active_index(), start);
    }
}

// ── 3. Jump policy ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn jump_in_range_lands_exactly(len in 1usize..40, target_seed in any::<usize>()) {
        let mut g = gallery_of(len);
        let target = target_seed % len;
        let outcome = g.jump_to(target as i64);
        prop_assert!(!outcome.is_rejected());
        prop_assert_eq!(g.active_index(), Some(target));
    }

    #[test]
    fn jump_out_of_range_is_rejected(
        mut g in arb_positioned_gallery(),
        offset in 0i64..1000,
        negative in any::<bool>(),
    ) {
        let before = g.active_index();
        let target = if negative { -1 - offset } else { g.len() as i64 + offset };
        prop_assert!(g.jump_to(target).is_rejected());
        prop_assert_eq!(g.active_index(), before);
    }

    #[test]
    fn empty_gallery_never_moves(actions in prop::collection::vec(arb_action(), 0..30)) {
        let mut g = gallery_of(0);
        for action in actions {
            match action {
                Action::Advance => g.advance(),
                Action::Retreat => g.retreat(),
                Action::Jump(i) => {
                    prop_assert!(g.jump_to(i).is_rejected());
                }
            }
            prop_assert_eq!(g.active_index(), None);
        }
    }
}

// ── 4 & 5. Render and range invariants ───────────────────────────────

proptest! {
    #[test]
    fn render_marks_exactly_one_active(
        len in 0usize..40,
        actions in prop::collection::vec(arb_action(), 0..30),
    ) {
        let mut g = gallery_of(len);
        for action in actions {
            match action {
                Action::Advance => g.advance(),
                Action::Retreat => g.retreat(),
                Action::Jump(i) => {
                    g.jump_to(i);
                }
            }
            let view = g.render();
            prop_assert_eq!(view.slides().len(), len);
            prop_assert_eq!(view.active_count(), usize::from(len > 0));
            if let Some(idx) = g.active_index() {
                prop_assert!(idx < len);
                prop_assert_eq!(view.active().map(|s| s.index), Some(idx));
            }
        }
    }
}
