// tests/integration_tests/disclosure_test.rs
use super::common::EIGHT_LETTERS;
use textlens::{
    ALWAYS_VISIBLE, DensityView, DisclosureState, compute_frequency_table, density_view,
    has_overflow, ordered_entries, renderable_entries, toggle_disclosure,
};

#[test]
fn test_most_frequent_letter_comes_first() {
    let table = compute_frequency_table("aabbbcc");
    let entries = ordered_entries(&table);
    let order: Vec<(char, usize)> = entries.iter().map(|e| (e.letter, e.count)).collect();
    assert_eq!(order, vec![('b', 3), ('a', 2), ('c', 2)]);
}

#[test]
fn test_entries_are_sorted_by_percent_descending() {
    let table = compute_frequency_table("The quick brown fox jumps over the lazy dog");
    let entries = renderable_entries(&table, DisclosureState::EXPANDED);
    assert!(
        entries
            .windows(2)
            .all(|pair| pair[0].percent >= pair[1].percent)
    );
    assert_eq!(entries.len(), 26);
}

#[test]
fn test_eight_entries_collapsed_then_expanded() {
    let table = compute_frequency_table(EIGHT_LETTERS);
    assert!(has_overflow(&table));

    let collapsed = renderable_entries(&table, DisclosureState::default());
    assert_eq!(collapsed.iter().filter(|e| e.visible).count(), ALWAYS_VISIBLE);
    assert!(collapsed.iter().take(ALWAYS_VISIBLE).all(|e| e.visible));
    assert!(collapsed.iter().skip(ALWAYS_VISIBLE).all(|e| !e.visible));

    let expanded = renderable_entries(&table, toggle_disclosure(DisclosureState::default()));
    assert!(expanded.iter().all(|e| e.visible));

    let letters: Vec<char> = expanded.iter().map(|e| e.letter).collect();
    assert_eq!(letters, vec!['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H']);
}

#[test]
fn test_rendered_values_are_derived_independently() {
    // 'a' is 2 of 3 characters: 66.666...%
    let table = compute_frequency_table("aab");
    let entries = renderable_entries(&table, DisclosureState::default());
    let first = &entries[0];
    assert_eq!(first.letter, 'A');
    assert_eq!(first.rounded_percent, 67);
    assert_eq!(first.floored_percent, 66);
    assert_eq!(first.formatted_percent, "66 (66.67%)");
}

#[test]
fn test_percent_stays_within_bounds() {
    let table = compute_frequency_table("zzzz");
    let entries = renderable_entries(&table, DisclosureState::default());
    assert_eq!(entries[0].percent, 100.0);
    assert_eq!(entries[0].rounded_percent, 100);
    assert_eq!(entries[0].formatted_percent, "100 (100.00%)");
}

#[test]
fn test_density_view_states() {
    assert_eq!(
        density_view(&compute_frequency_table(""), DisclosureState::default()),
        DensityView::NoCharacters
    );
    let view = density_view(&compute_frequency_table("a b"), DisclosureState::default());
    assert_eq!(view.visible_entries().len(), 2);
}
