use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the 26 letter symbols, stored as its alphabet index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    pub const COUNT: usize = 26;

    pub fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Letter(index as u8))
        } else {
            None
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_uppercase();
        if c.is_ascii_uppercase() {
            Some(Letter(c as u8 - b'A'))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Iterates `A` through `Z`.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..Self::COUNT as u8).map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Letter::from_char(c).ok_or_else(|| format!("not a letter: {:?}", c))
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.to_char()
    }
}

impl FromStr for Letter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Letter::try_from(c),
            _ => Err(format!("expected a single letter, got {:?}", s)),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Parses a letter list such as "AEK", "a,e,k" or "A E K".
pub fn parse_letters(s: &str) -> Result<Vec<Letter>, String> {
    s.chars()
        .filter(|c| !(c.is_whitespace() || *c == ','))
        .map(Letter::try_from)
        .collect()
}
