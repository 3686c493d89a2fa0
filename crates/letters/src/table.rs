//! Per-letter supply limits and point values.

use crate::counts::LetterCounts;
use crate::letter::Letter;
use serde::{Deserialize, Serialize};

/// The fixed tables the game is played with: how many copies of each letter
/// exist, what each letter is worth, and the bonus for long words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterTable {
    pub frequency: LetterCounts,
    pub points: LetterCounts,
    #[serde(default = "default_bingo_length")]
    pub bingo_length: usize,
    #[serde(default = "default_bingo_bonus")]
    pub bingo_bonus: u32,
}

fn default_bingo_length() -> usize {
    7
}

fn default_bingo_bonus() -> u32 {
    50
}

impl LetterTable {
    /// English Scrabble tile counts (no blanks) and point values, with the
    /// 50 point bonus for words of seven or more letters.
    pub fn scrabble() -> Self {
        Self {
            frequency: LetterCounts::new([
                9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, 6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1,
            ]),
            points: LetterCounts::new([
                1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
            ]),
            bingo_length: default_bingo_length(),
            bingo_bonus: default_bingo_bonus(),
        }
    }

    /// A table with the given frequencies, every letter worth one point and
    /// no long-word bonus.
    pub fn with_frequency(frequency: LetterCounts) -> Self {
        Self {
            frequency,
            points: LetterCounts::new([1; Letter::COUNT]),
            bingo_length: usize::MAX,
            bingo_bonus: 0,
        }
    }

    pub fn frequency(&self, letter: Letter) -> u8 {
        self.frequency.get(letter)
    }

    pub fn points(&self, letter: Letter) -> u32 {
        self.points.get(letter) as u32
    }

    /// Score of a word given its letter counts.
    pub fn score_counts(&self, counts: &LetterCounts) -> u32 {
        let base: u32 = counts
            .iter()
            .map(|(letter, count)| self.points(letter) * count as u32)
            .sum();
        if counts.total() as usize >= self.bingo_length {
            base + self.bingo_bonus
        } else {
            base
        }
    }

    /// Score of a word. Characters that are not letters score nothing.
    pub fn word_score(&self, word: &str) -> u32 {
        let counts: LetterCounts = word.chars().filter_map(Letter::from_char).collect();
        self.score_counts(&counts)
    }
}

impl Default for LetterTable {
    fn default() -> Self {
        Self::scrabble()
    }
}
