use crate::letter::Letter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A count per letter symbol. Used for word signatures and for the
/// shared letter supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Letter, u8>", into = "BTreeMap<Letter, u8>")]
pub struct LetterCounts([u8; Letter::COUNT]);

impl LetterCounts {
    pub fn new(counts: [u8; Letter::COUNT]) -> Self {
        Self(counts)
    }

    /// Counts the letters of `word`. Returns `None` if it contains anything
    /// other than ASCII letters.
    pub fn from_word(word: &str) -> Option<Self> {
        let mut counts = Self::default();
        for c in word.chars() {
            counts.add(Letter::from_char(c)?);
        }
        Some(counts)
    }

    pub fn get(&self, letter: Letter) -> u8 {
        self.0[letter.index()]
    }

    pub fn set(&mut self, letter: Letter, count: u8) {
        self.0[letter.index()] = count;
    }

    pub fn add(&mut self, letter: Letter) {
        let slot = &mut self.0[letter.index()];
        *slot = slot.saturating_add(1);
    }

    /// Removes one copy of `letter`, floored at zero. Returns whether a copy
    /// was there to remove.
    pub fn remove(&mut self, letter: Letter) -> bool {
        let slot = &mut self.0[letter.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    pub fn total(&self) -> u32 {
        self.0.iter().map(|&c| c as u32).sum()
    }

    /// True if no letter appears more often here than in `limit`.
    pub fn fits_within(&self, limit: &LetterCounts) -> bool {
        self.0.iter().zip(limit.0.iter()).all(|(need, have)| need <= have)
    }

    /// Letters with a non-zero count, paired with the count.
    pub fn iter(&self) -> impl Iterator<Item = (Letter, u8)> + '_ {
        Letter::all()
            .map(|letter| (letter, self.get(letter)))
            .filter(|(_, count)| *count > 0)
    }

    pub fn as_array(&self) -> &[u8; Letter::COUNT] {
        &self.0
    }
}

impl From<BTreeMap<Letter, u8>> for LetterCounts {
    fn from(map: BTreeMap<Letter, u8>) -> Self {
        let mut counts = Self::default();
        for (letter, count) in map {
            counts.set(letter, count);
        }
        counts
    }
}

impl From<LetterCounts> for BTreeMap<Letter, u8> {
    fn from(counts: LetterCounts) -> Self {
        counts.iter().collect()
    }
}

impl FromIterator<Letter> for LetterCounts {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut counts = Self::default();
        for letter in iter {
            counts.add(letter);
        }
        counts
    }
}

impl fmt::Display for LetterCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(letter, count)| format!("{}:{}", letter, count))
            .collect();
        write!(f, "{{{}}}", parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn test_from_word() {
        let counts = LetterCounts::from_word("Banana").unwrap();
        assert_eq!(counts.get(letter('A')), 3);
        assert_eq!(counts.get(letter('N')), 2);
        assert_eq!(counts.get(letter('B')), 1);
        assert_eq!(counts.total(), 6);
        assert_eq!(LetterCounts::from_word("can't"), None);
    }

    #[test]
    fn test_remove_floors_at_zero() {
        let mut counts = LetterCounts::from_word("A").unwrap();
        assert!(counts.remove(letter('A')));
        assert!(!counts.remove(letter('A')));
        assert_eq!(counts.get(letter('A')), 0);
    }

    #[test]
    fn test_fits_within() {
        let limit = LetterCounts::from_word("AAB").unwrap();
        assert!(LetterCounts::from_word("AB").unwrap().fits_within(&limit));
        assert!(LetterCounts::from_word("AA").unwrap().fits_within(&limit));
        assert!(!LetterCounts::from_word("BB").unwrap().fits_within(&limit));
        assert!(!LetterCounts::from_word("ABC").unwrap().fits_within(&limit));
    }

    #[test]
    fn test_yaml_map() {
        let counts: LetterCounts = serde_yaml::from_str("A: 2\nB: 1\n").unwrap();
        assert_eq!(counts, LetterCounts::from_word("AAB").unwrap());
        assert_eq!(counts.to_string(), "{A:2 B:1}");
    }
}
