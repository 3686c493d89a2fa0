use crate::counts::LetterCounts;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dictionary word in canonical upper case, paired with its letter-count
/// signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub counts: LetterCounts,
}

impl Word {
    /// Normalizes `raw` (trimmed, upper case) and computes its signature.
    /// Returns `None` for empty input or input with non-letter characters.
    pub fn new(raw: &str) -> Option<Self> {
        let text = raw.trim().to_ascii_uppercase();
        if text.is_empty() {
            return None;
        }
        let counts = LetterCounts::from_word(&text)?;
        Some(Self { text, counts })
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
