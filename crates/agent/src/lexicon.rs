//! Legal-word lexicon: the raw word list filtered against the global
//! letter supply, plus an in-memory cache of filtered lexicons.

use crate::error::{Error, Result};
use letters::io::wordlist::read_wordlist;
use letters::{LetterTable, Word};
use sha2::{Digest, Sha256};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error};

/// Where raw words come from.
pub trait WordSource {
    fn load(&self) -> Result<Vec<String>>;

    /// Short description for log output.
    fn describe(&self) -> String;
}

/// A newline-delimited word list on disk.
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileWordSource {
    fn load(&self) -> Result<Vec<String>> {
        read_wordlist(&self.path).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Words held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticWordSource {
    words: Vec<String>,
}

impl StaticWordSource {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordSource for StaticWordSource {
    fn load(&self) -> Result<Vec<String>> {
        Ok(self.words.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory words", self.words.len())
    }
}

/// The words that can be built from the full letter supply.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: Vec<Word>,
    max_word_score: u32,
}

impl Lexicon {
    /// Keeps each raw entry that normalizes to a word whose letter counts fit
    /// within `table.frequency`. Everything else is dropped silently.
    /// Duplicates keep their first position.
    pub fn build<I, S>(raw: I, table: &LetterTable) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut words = Vec::new();
        let mut max_word_score = 0;

        for entry in raw {
            let word = match Word::new(entry.as_ref()) {
                Some(w) => w,
                None => continue,
            };
            if !word.counts.fits_within(&table.frequency) {
                continue;
            }
            if seen.insert(word.text.clone()) {
                max_word_score = max_word_score.max(table.score_counts(&word.counts));
                words.push(word);
            }
        }

        Self {
            words,
            max_word_score,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Highest single-word score in the lexicon, zero when empty.
    pub fn max_word_score(&self) -> u32 {
        self.max_word_score
    }

    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_ascii_uppercase();
        self.words.iter().any(|w| w.text == word)
    }
}

/// True if `word` could be built from the full letter supply alone.
pub fn is_legal(word: &str, table: &LetterTable) -> bool {
    Word::new(word).is_some_and(|w| w.counts.fits_within(&table.frequency))
}

pub type CacheKey = [u8; 32];

/// SHA-256 over the raw entries and the letter table.
pub fn cache_key<S: AsRef<str>>(raw: &[S], table: &LetterTable) -> CacheKey {
    let mut hasher = Sha256::new();
    hasher.update((raw.len() as u64).to_le_bytes());
    for entry in raw {
        let bytes = entry.as_ref().as_bytes();
        hasher.update((bytes.len() as u64).to_le_bytes());
        hasher.update(bytes);
    }
    hasher.update(table.frequency.as_array());
    hasher.update(table.points.as_array());
    hasher.update((table.bingo_length as u64).to_le_bytes());
    hasher.update(table.bingo_bonus.to_le_bytes());
    hasher.finalize().into()
}

/// Filtered lexicons keyed by the content hash of their inputs, so a word
/// list is filtered once however many games are played with it.
#[derive(Debug, Default)]
pub struct LexiconCache {
    entries: HashMap<CacheKey, Arc<Lexicon>>,
}

impl LexiconCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build<S: AsRef<str>>(&mut self, raw: &[S], table: &LetterTable) -> Arc<Lexicon> {
        let key = cache_key(raw, table);
        if let Some(lexicon) = self.entries.get(&key) {
            debug!(words = lexicon.len(), "lexicon cache hit");
            return Arc::clone(lexicon);
        }
        let lexicon = Arc::new(Lexicon::build(raw, table));
        debug!(raw = raw.len(), legal = lexicon.len(), "built lexicon");
        self.entries.insert(key, Arc::clone(&lexicon));
        lexicon
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Loads and filters the word list. An unreadable source is logged and
/// yields an empty lexicon; the agent keeps bidding on letter values alone.
pub fn load_lexicon(
    source: &dyn WordSource,
    table: &LetterTable,
    cache: &mut LexiconCache,
) -> Arc<Lexicon> {
    match source.load() {
        Ok(raw) => cache.get_or_build(&raw, table),
        Err(e) => {
            error!(source = %source.describe(), error = %e, "word list unavailable, using empty lexicon");
            Arc::new(Lexicon::empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use letters::LetterCounts;

    fn ab_table() -> LetterTable {
        let frequency: LetterCounts = serde_yaml::from_str("{A: 2, B: 1}").unwrap();
        LetterTable::with_frequency(frequency)
    }

    fn texts(lexicon: &Lexicon) -> Vec<&str> {
        lexicon.words().iter().map(|w| w.text.as_str()).collect()
    }

    #[test]
    fn test_legal_lexicon_example() {
        let lexicon = Lexicon::build(["AA", "AB", "BB", "ABA"], &ab_table());
        assert_eq!(texts(&lexicon), vec!["AA", "AB"]);
    }

    #[test]
    fn test_case_normalized_and_deduplicated() {
        let lexicon = Lexicon::build(["ab", "AB", " Aa ", "a-b", ""], &ab_table());
        assert_eq!(texts(&lexicon), vec!["AB", "AA"]);
        assert!(lexicon.contains("ab"));
        assert!(!lexicon.contains("BB"));
    }

    #[test]
    fn test_is_legal() {
        let table = ab_table();
        assert!(is_legal("ba", &table));
        assert!(!is_legal("bab", &table));
        assert!(!is_legal("c", &table));
        assert!(!is_legal("ZYZZYVA", &LetterTable::scrabble()));
        assert!(is_legal("QUIZ", &LetterTable::scrabble()));
    }

    #[test]
    fn test_max_word_score() {
        let table = LetterTable::scrabble();
        let lexicon = Lexicon::build(["cat", "quiz", "methoxybenzenes"], &table);
        assert_eq!(lexicon.max_word_score(), 91);
        assert_eq!(Lexicon::empty().max_word_score(), 0);
    }

    #[test]
    fn test_cache_reuses_identical_content() {
        let table = ab_table();
        let mut cache = LexiconCache::new();
        let first = cache.get_or_build(&["AA", "AB"], &table);
        let second = cache.get_or_build(&["AA".to_string(), "AB".to_string()], &table);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);

        let other = cache.get_or_build(&["AA", "AB"], &LetterTable::scrabble());
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_cache_key_separates_entries() {
        let table = ab_table();
        assert_ne!(cache_key(&["AB", "A"], &table), cache_key(&["A", "BA"], &table));
        assert_ne!(cache_key(&["AB"], &table), cache_key(&["A", "B"], &table));
    }

    #[test]
    fn test_unreadable_source_gives_empty_lexicon() {
        let source = FileWordSource::new("no/such/wordlist.txt");
        assert!(matches!(source.load(), Err(Error::Io { .. })));

        let mut cache = LexiconCache::new();
        let lexicon = load_lexicon(&source, &ab_table(), &mut cache);
        assert!(lexicon.is_empty());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_file_source() {
        let path = std::env::temp_dir().join(format!("lexicon-test-{}.txt", std::process::id()));
        std::fs::write(&path, "# words\nAA\nbb\nab\n").unwrap();
        let mut cache = LexiconCache::new();
        let lexicon = load_lexicon(&FileWordSource::new(&path), &ab_table(), &mut cache);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(texts(&lexicon), vec!["AA", "AB"]);
    }
}
