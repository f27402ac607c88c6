//! Segmented digit-entry model behind the guess input widget.
//!
//! DESIGN
//! ======
//! The DOM cells stay the source of truth: each browser event loads the cell
//! values into a `DigitGroup`, applies one transition, and writes the result
//! back (values, filled markers, focus). Keeping the transitions here lets the
//! focus/backspace/paste rules run under plain unit tests.

#[cfg(test)]
#[path = "digits_test.rs"]
mod digits_test;

/// Number of cells in a code (and digits in a guess or secret).
pub const CODE_LENGTH: usize = 4;

const LAST_CELL: usize = CODE_LENGTH - 1;

/// Keyboard keys the widget reacts to, already stripped of browser details.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKey {
    Backspace,
    Left,
    Right,
    Enter,
    /// A printable character typed without a command modifier.
    Char(char),
    /// Anything else (Tab, shortcuts, function keys).
    Other,
}

impl CellKey {
    /// Map a `KeyboardEvent.key` value to a widget key.
    ///
    /// `command` is true when Ctrl/Meta/Alt is held; such chords are left
    /// to the platform so copy/paste shortcuts keep working.
    #[must_use]
    pub fn from_browser(key: &str, command: bool) -> Self {
        match key {
            "Backspace" => Self::Backspace,
            "ArrowLeft" => Self::Left,
            "ArrowRight" => Self::Right,
            "Enter" => Self::Enter,
            _ if command => Self::Other,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// What the host should do with the triggering event after a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellOutcome {
    /// Suppress the platform's default handling of the event.
    pub prevent_default: bool,
    /// Invoke the active submit action (subject to it being enabled).
    pub submit: bool,
}

impl CellOutcome {
    const HANDLED: Self = Self { prevent_default: true, submit: false };
}

/// Ordered single-digit cells plus the index of the focused cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DigitGroup {
    cells: [Option<char>; CODE_LENGTH],
    focus: usize,
}

impl DigitGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a group from raw cell values as read from the page.
    ///
    /// Each value keeps only its last digit; missing trailing values are empty.
    #[must_use]
    pub fn from_values<I, S>(values: I, focus: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut group = Self { focus: focus.min(LAST_CELL), ..Self::default() };
        for (slot, value) in group.cells.iter_mut().zip(values) {
            *slot = last_digit(value.as_ref());
        }
        group
    }

    /// Digit held by cell `index`, if any.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    /// Whether cell `index` holds a digit.
    #[must_use]
    pub fn is_filled(&self, index: usize) -> bool {
        self.cell(index).is_some()
    }

    #[must_use]
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Concatenation of the filled cells, in order.
    #[must_use]
    pub fn value(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    /// Empty every cell and move focus back to the first one.
    pub fn clear(&mut self) {
        self.cells = [None; CODE_LENGTH];
        self.focus = 0;
    }

    /// Apply a value change in cell `index`.
    ///
    /// Only the last digit of `raw` survives, which absorbs multi-character
    /// input landing in one cell. A digit advances focus; an empty result
    /// leaves focus where it is.
    pub fn input(&mut self, index: usize, raw: &str) -> CellOutcome {
        if index >= CODE_LENGTH {
            return CellOutcome::default();
        }
        self.cells[index] = last_digit(raw);
        self.focus = if self.cells[index].is_some() {
            (index + 1).min(LAST_CELL)
        } else {
            index
        };
        CellOutcome::default()
    }

    /// Apply a key press while cell `index` has focus.
    pub fn key_down(&mut self, index: usize, key: CellKey) -> CellOutcome {
        if index >= CODE_LENGTH {
            return CellOutcome::default();
        }
        match key {
            CellKey::Backspace => {
                if self.cells[index].is_some() {
                    self.cells[index] = None;
                    self.focus = index;
                    CellOutcome::HANDLED
                } else if index > 0 {
                    self.cells[index - 1] = None;
                    self.focus = index - 1;
                    CellOutcome::HANDLED
                } else {
                    CellOutcome::default()
                }
            }
            CellKey::Left if index > 0 => {
                self.focus = index - 1;
                CellOutcome::HANDLED
            }
            CellKey::Right if index < LAST_CELL => {
                self.focus = index + 1;
                CellOutcome::HANDLED
            }
            CellKey::Enter if index == LAST_CELL => CellOutcome { prevent_default: true, submit: true },
            CellKey::Char(c) if !c.is_ascii_digit() => CellOutcome::HANDLED,
            _ => CellOutcome::default(),
        }
    }

    /// Distribute pasted text across the cells from the first one.
    ///
    /// Non-digits are skipped and anything past the fourth digit is dropped.
    /// Focus lands on the first empty cell, or the last cell when all are full.
    pub fn paste(&mut self, text: &str) -> CellOutcome {
        for (slot, digit) in self.cells.iter_mut().zip(text.chars().filter(char::is_ascii_digit)) {
            *slot = Some(digit);
        }
        self.focus = self.cells.iter().position(Option::is_none).unwrap_or(LAST_CELL);
        CellOutcome::HANDLED
    }
}

fn last_digit(raw: &str) -> Option<char> {
    raw.chars().rev().find(char::is_ascii_digit)
}

/// Whether `guess` is exactly `CODE_LENGTH` ASCII digits.
#[must_use]
pub fn is_complete_code(guess: &str) -> bool {
    guess.len() == CODE_LENGTH && guess.bytes().all(|b| b.is_ascii_digit())
}
