// Property-based tests for day selection
// Random click sequences must keep the selection invariants

#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::{april_grid, selectable_indices, DISABLED_INDICES};
use proptest::prelude::*;
use regular_calendar::models::card::{CardInput, CardOutcome, CardState, NavDirection};
use regular_calendar::models::day_grid::CELL_COUNT;
use regular_calendar::models::selection::{Selection, SelectionChange};

fn any_input() -> impl Strategy<Value = CardInput> {
    prop_oneof![
        4 => (0..CELL_COUNT + 5).prop_map(fixtures::click),
        1 => prop_oneof![Just(NavDirection::Prev), Just(NavDirection::Next)]
            .prop_map(CardInput::Navigate),
    ]
}

proptest! {
    /// Property: clicks on disabled cells never change the selection
    #[test]
    fn prop_disabled_clicks_are_ignored(
        prefix in prop::collection::vec(0..CELL_COUNT, 0..10),
        disabled in prop::sample::select(DISABLED_INDICES.to_vec()),
    ) {
        let grid = april_grid();
        let mut selection = Selection::new();
        for idx in prefix {
            selection.toggle(&grid, idx);
        }

        let before = selection;
        prop_assert_eq!(selection.toggle(&grid, disabled), SelectionChange::Ignored);
        prop_assert_eq!(selection, before);
    }

    /// Property: the selection is always empty or a single selectable cell
    #[test]
    fn prop_at_most_one_selected(inputs in prop::collection::vec(any_input(), 0..40)) {
        let mut state = CardState::new(april_grid());
        for input in inputs {
            state.handle(input);
            let grid = state.grid();
            let selected: Vec<usize> = (0..CELL_COUNT)
                .filter(|idx| state.selection().is_selected(*idx))
                .collect();
            prop_assert!(selected.len() <= 1);
            if let Some(idx) = state.selection().selected() {
                prop_assert!(grid.is_selectable(idx));
            }
        }
    }

    /// Property: clicking the selected cell clears it
    #[test]
    fn prop_second_click_deselects(
        idx in prop::sample::select(selectable_indices()),
        other in prop::sample::select(selectable_indices()),
    ) {
        let grid = april_grid();
        let mut selection = Selection::new();
        selection.toggle(&grid, other);

        selection.toggle(&grid, idx);
        prop_assert_eq!(selection.selected(), Some(idx));
        prop_assert_eq!(selection.toggle(&grid, idx), SelectionChange::Cleared(idx));
        prop_assert_eq!(selection.selected(), None);
    }

    /// Property: navigation never touches the selection
    #[test]
    fn prop_navigation_is_cosmetic(
        idx in prop::sample::select(selectable_indices()),
        forward in any::<bool>(),
    ) {
        let mut state = CardState::new(april_grid());
        state.handle(fixtures::click(idx));

        let direction = if forward { NavDirection::Next } else { NavDirection::Prev };
        prop_assert_eq!(state.handle(CardInput::Navigate(direction)), CardOutcome::Nudge(direction));
        prop_assert_eq!(state.selection().selected(), Some(idx));
    }
}
