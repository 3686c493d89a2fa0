//! The shared pool of letter copies still unaccounted for.

use letters::{Letter, LetterCounts, LetterTable};
use serde::Serialize;

/// Remaining copies of each letter anywhere in the game. This is an upper
/// bound the agent tracks itself, so it never goes below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterSupply {
    initial: LetterCounts,
    remaining: LetterCounts,
}

impl LetterSupply {
    pub fn new(table: &LetterTable) -> Self {
        Self {
            initial: table.frequency,
            remaining: table.frequency,
        }
    }

    /// Refills every letter to its global frequency.
    pub fn initialize(&mut self) {
        self.remaining = self.initial;
    }

    /// Takes one copy of `letter` out of the pool. Removing a letter that
    /// is already exhausted is a no-op; returns whether a copy was removed.
    pub fn remove(&mut self, letter: Letter) -> bool {
        self.remaining.remove(letter)
    }

    pub fn get(&self, letter: Letter) -> u8 {
        self.remaining.get(letter)
    }

    pub fn counts(&self) -> &LetterCounts {
        &self.remaining
    }

    pub fn total(&self) -> u32 {
        self.remaining.total()
    }
}
