//! Append-only round history for one player.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use serde::{Deserialize, Serialize};

/// One recorded round: the guess and the score it earned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub guess: String,
    pub bulls: u8,
    pub cows: u8,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(guess: impl Into<String>, bulls: u8, cows: u8) -> Self {
        Self { guess: guess.into(), bulls, cows }
    }

    /// Guess digits separated by single spaces, as shown in a history row.
    #[must_use]
    pub fn spaced_guess(&self) -> String {
        let mut out = String::with_capacity(self.guess.len() * 2);
        for (i, c) in self.guess.chars().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }
}

/// Rounds in chronological order. Entries are never edited or removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True until the first append; the view shows its placeholder row then.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }
}

impl FromIterator<HistoryEntry> for HistoryLog {
    fn from_iter<T: IntoIterator<Item = HistoryEntry>>(iter: T) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
