//! Property-based tests for the pure state core.
//!
//! Tests validate:
//! 1. The filter keeps exactly the matching records, in order
//! 2. Pages accumulate in arrival order and an empty page ends pagination
//! 3. At most one card is expanded after any toggle sequence
//! 4. The last-card observer fires once per entry into view
//! 5. Word wrapping never exceeds the width

use launchdeck::model::{LaunchId, LaunchRecord};
use launchdeck::source::{FetchedPage, PageResult};
use launchdeck::state::{filter_indices, AppState, PaginationState, SelectionState};
use launchdeck::view_state::{wrap_words, LastCardObserver, ObservedCard};
use proptest::prelude::*;

fn records_from(names: &[String]) -> Vec<LaunchRecord> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| LaunchRecord::new(LaunchId::new(i as u32 + 1), name.clone()))
        .collect()
}

// ===== Property 1: Filter =====

proptest! {
    #[test]
    fn filter_keeps_exactly_matching_records_in_order(
        names in prop::collection::vec("[a-cA-C ]{0,8}", 0..40),
        term in "[a-cA-C]{1,3}",
    ) {
        let records = records_from(&names);
        let visible = filter_indices(&records, &term);

        let expected: Vec<usize> = names
            .iter()
            .enumerate()
            .filter(|(_, name)| name.to_lowercase().contains(&term.to_lowercase()))
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(visible, expected);
    }

    #[test]
    fn blank_term_keeps_everything(
        names in prop::collection::vec("[a-z]{0,8}", 0..40),
        blank in "[ ]{0,3}",
    ) {
        let records = records_from(&names);
        prop_assert_eq!(filter_indices(&records, &blank), (0..names.len()).collect::<Vec<_>>());
    }

    #[test]
    fn filter_is_case_insensitive(
        names in prop::collection::vec("[a-zA-Z]{0,8}", 0..20),
        term in "[a-z]{1,3}",
    ) {
        let records = records_from(&names);
        prop_assert_eq!(
            filter_indices(&records, &term),
            filter_indices(&records, &term.to_uppercase())
        );
    }
}

// ===== Property 2: Accumulation =====

proptest! {
    #[test]
    fn pages_accumulate_until_first_empty_page(
        page_sizes in prop::collection::vec(0usize..6, 1..8),
    ) {
        let mut state = PaginationState::new(5);
        let mut expected: Vec<u32> = Vec::new();
        let mut next_id = 1u32;
        let mut exhausted = false;

        for size in page_sizes {
            let Some(request) = state.take_request() else {
                prop_assert!(exhausted, "only an exhausted controller refuses");
                break;
            };
            let records: Vec<LaunchRecord> = (0..size)
                .map(|_| {
                    let record = LaunchRecord::new(LaunchId::new(next_id), format!("M{next_id}"));
                    next_id += 1;
                    record
                })
                .collect();
            expected.extend(records.iter().map(|r| r.id().get()));
            state.complete(PageResult { request, outcome: Ok(FetchedPage::new(records)) });

            if size == 0 {
                exhausted = true;
                prop_assert!(!state.has_more());
                prop_assert!(!state.on_last_card_visible());
            } else {
                prop_assert!(state.on_last_card_visible());
            }
        }

        let ids: Vec<u32> = state.records().iter().map(|r| r.id().get()).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn record_count_never_decreases(
        outcomes in prop::collection::vec(prop::option::of(1usize..4), 1..10),
    ) {
        let mut state = AppState::new(3);
        let mut last_len = 0;

        for outcome in outcomes {
            state.load_more();
            let Some(request) = state.take_request() else { continue };
            let outcome = match outcome {
                Some(n) => Ok(FetchedPage::new(
                    (0..n).map(|i| LaunchRecord::new(LaunchId::new(i as u32), "x")).collect(),
                )),
                None => Err(launchdeck::model::FetchError::Status {
                    url: "http://test".to_string(),
                    status: 500,
                }),
            };
            state.apply_page_result(PageResult { request, outcome });

            prop_assert!(state.records().len() >= last_len);
            prop_assert!(!state.pagination().is_loading());
            last_len = state.records().len();
        }
    }
}

// ===== Property 3: Single expansion =====

proptest! {
    #[test]
    fn at_most_one_card_expanded(toggles in prop::collection::vec(1u32..6, 0..30)) {
        let mut selection = SelectionState::new();
        let mut model: Option<u32> = None;

        for id in toggles {
            selection.toggle_details(LaunchId::new(id));
            model = if model == Some(id) { None } else { Some(id) };

            let expanded: Vec<u32> = (1..6)
                .filter(|&n| selection.is_expanded(LaunchId::new(n)))
                .collect();
            prop_assert!(expanded.len() <= 1);
            prop_assert_eq!(selection.expanded().map(|id| id.get()), model);
        }
    }
}

// ===== Property 4: Observer =====

proptest! {
    #[test]
    fn observer_fires_once_per_entry(visibility in prop::collection::vec(any::<bool>(), 0..30)) {
        let mut observer = LastCardObserver::new();
        observer.attach(Some(ObservedCard {
            id: LaunchId::new(1),
            position: 0,
            generation: 1,
        }));

        let mut previous = false;
        for in_view in visibility {
            let fired = observer.observe(in_view, false);
            prop_assert_eq!(fired, in_view && !previous);
            previous = in_view;
        }
    }
}

// ===== Property 5: Wrapping =====

proptest! {
    #[test]
    fn wrapped_lines_fit_width(
        words in prop::collection::vec("[a-z]{1,12}", 0..30),
        width in 1usize..40,
    ) {
        let text = words.join(" ");
        for line in wrap_words(&text, width) {
            prop_assert!(line.chars().count() <= width, "{:?} exceeds {}", line, width);
        }
    }

    #[test]
    fn wrapping_keeps_every_word_character(
        words in prop::collection::vec("[a-z]{1,12}", 0..30),
        width in 1usize..40,
    ) {
        let text = words.join(" ");
        let joined: String = wrap_words(&text, width).concat().split_whitespace().collect();
        let original: String = text.split_whitespace().collect();
        prop_assert_eq!(joined, original);
    }
}
