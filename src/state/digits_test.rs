use super::*;

fn typed(digits: &str) -> DigitGroup {
    let mut group = DigitGroup::new();
    for (i, c) in digits.chars().enumerate() {
        group.input(i, &c.to_string());
    }
    group
}

// =============================================================
// CellKey mapping
// =============================================================

#[test]
fn cell_key_maps_navigation_keys() {
    assert_eq!(CellKey::from_browser("Backspace", false), CellKey::Backspace);
    assert_eq!(CellKey::from_browser("ArrowLeft", false), CellKey::Left);
    assert_eq!(CellKey::from_browser("ArrowRight", false), CellKey::Right);
    assert_eq!(CellKey::from_browser("Enter", false), CellKey::Enter);
}

#[test]
fn cell_key_maps_single_characters() {
    assert_eq!(CellKey::from_browser("7", false), CellKey::Char('7'));
    assert_eq!(CellKey::from_browser("x", false), CellKey::Char('x'));
    assert_eq!(CellKey::from_browser("Tab", false), CellKey::Other);
}

#[test]
fn cell_key_leaves_command_chords_alone() {
    assert_eq!(CellKey::from_browser("v", true), CellKey::Other);
    assert_eq!(CellKey::from_browser("Backspace", true), CellKey::Backspace);
}

// =============================================================
// Typing
// =============================================================

#[test]
fn typing_four_digits_reads_back_and_parks_focus_on_last_cell() {
    let group = typed("4071");
    assert_eq!(group.value(), "4071");
    assert!(is_complete_code(&group.value()));
    assert_eq!(group.focus(), CODE_LENGTH - 1);
}

#[test]
fn typing_partial_code_moves_focus_to_next_cell() {
    let group = typed("40");
    assert_eq!(group.value(), "40");
    assert_eq!(group.focus(), 2);
    assert!(!is_complete_code(&group.value()));
}

#[test]
fn input_keeps_only_last_digit_of_multi_character_value() {
    let mut group = DigitGroup::new();
    group.input(0, "12a3b");
    assert_eq!(group.cell(0), Some('3'));
    assert!(group.is_filled(0));
    assert_eq!(group.focus(), 1);
}

#[test]
fn input_without_digits_empties_cell_and_keeps_focus() {
    let mut group = typed("12");
    group.input(1, "x");
    assert_eq!(group.cell(1), None);
    assert!(!group.is_filled(1));
    assert_eq!(group.focus(), 1);
}

#[test]
fn input_out_of_range_is_ignored() {
    let mut group = DigitGroup::new();
    assert_eq!(group.input(9, "5"), CellOutcome::default());
    assert_eq!(group.value(), "");
}

#[test]
fn non_digit_characters_are_rejected_at_key_level() {
    let mut group = DigitGroup::new();
    let outcome = group.key_down(0, CellKey::Char('e'));
    assert!(outcome.prevent_default);
    assert!(!outcome.submit);
    let outcome = group.key_down(0, CellKey::Char('5'));
    assert!(!outcome.prevent_default);
}

// =============================================================
// Backspace
// =============================================================

#[test]
fn backspace_on_filled_cell_clears_it_in_place() {
    let mut group = typed("123");
    let outcome = group.key_down(1, CellKey::Backspace);
    assert!(outcome.prevent_default);
    assert_eq!(group.cell(1), None);
    assert_eq!(group.cell(2), Some('3'));
    assert_eq!(group.focus(), 1);
}

#[test]
fn backspace_on_empty_cell_clears_previous_and_moves_back() {
    let mut group = typed("12");
    let outcome = group.key_down(2, CellKey::Backspace);
    assert!(outcome.prevent_default);
    assert_eq!(group.cell(1), None);
    assert_eq!(group.focus(), 1);
}

#[test]
fn backspace_on_empty_first_cell_is_left_to_platform() {
    let mut group = DigitGroup::new();
    assert_eq!(group.key_down(0, CellKey::Backspace), CellOutcome::default());
    assert_eq!(group.focus(), 0);
}

#[test]
fn backspacing_through_full_group_empties_it_with_focus_on_first_cell() {
    let mut group = typed("9876");
    for _ in 0..(CODE_LENGTH * 2) {
        let at = group.focus();
        group.key_down(at, CellKey::Backspace);
    }
    assert_eq!(group.value(), "");
    assert_eq!(group.focus(), 0);
}

// =============================================================
// Arrows and Enter
// =============================================================

#[test]
fn arrows_move_between_neighbours_without_wrapping() {
    let mut group = DigitGroup::new();
    assert!(!group.key_down(0, CellKey::Left).prevent_default);
    assert_eq!(group.focus(), 0);

    group.key_down(0, CellKey::Right);
    assert_eq!(group.focus(), 1);

    assert!(!group.key_down(CODE_LENGTH - 1, CellKey::Right).prevent_default);
    group.key_down(2, CellKey::Left);
    assert_eq!(group.focus(), 1);
}

#[test]
fn enter_submits_only_from_last_cell() {
    let mut group = typed("1234");
    assert!(!group.key_down(1, CellKey::Enter).submit);
    assert!(group.key_down(CODE_LENGTH - 1, CellKey::Enter).submit);
}

// =============================================================
// Paste
// =============================================================

#[test]
fn paste_takes_first_four_digits_and_ignores_noise() {
    let mut group = DigitGroup::new();
    let outcome = group.paste("a1-2 b3x4567");
    assert!(outcome.prevent_default);
    assert_eq!(group.value(), "1234");
    assert_eq!(group.focus(), CODE_LENGTH - 1);
}

#[test]
fn paste_short_run_overwrites_leading_cells_and_focuses_first_empty() {
    let mut group = DigitGroup::from_values(["9", "9", "", ""], 0);
    group.paste("5");
    assert_eq!(group.cell(0), Some('5'));
    assert_eq!(group.cell(1), Some('9'));
    assert_eq!(group.focus(), 2);
}

#[test]
fn paste_without_digits_changes_nothing() {
    let mut group = typed("12");
    group.paste("abc");
    assert_eq!(group.value(), "12");
    assert_eq!(group.focus(), 2);
}

// =============================================================
// Clear / load
// =============================================================

#[test]
fn clear_empties_cells_and_resets_focus() {
    let mut group = typed("1234");
    group.clear();
    assert_eq!(group.value(), "");
    assert!((0..CODE_LENGTH).all(|i| !group.is_filled(i)));
    assert_eq!(group.focus(), 0);
}

#[test]
fn from_values_sanitizes_and_clamps_focus() {
    let group = DigitGroup::from_values(["1", "x", "23"], 10);
    assert_eq!(group.cell(0), Some('1'));
    assert_eq!(group.cell(1), None);
    assert_eq!(group.cell(2), Some('3'));
    assert_eq!(group.cell(3), None);
    assert_eq!(group.focus(), CODE_LENGTH - 1);
    assert_eq!(group.value(), "13");
}

#[test]
fn complete_code_requires_exactly_four_digits() {
    assert!(is_complete_code("0123"));
    assert!(!is_complete_code("123"));
    assert!(!is_complete_code("12345"));
    assert!(!is_complete_code("12a4"));
}
