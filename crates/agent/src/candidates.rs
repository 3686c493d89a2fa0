//! Words still buildable from the current letter supply.

use crate::lexicon::Lexicon;
use crate::supply::LetterSupply;
use letters::{Letter, Word};
use std::sync::Arc;
use tracing::trace;

/// The subset of the lexicon that fits within the supply. Rebuilt at the
/// start of each round, then only ever shrinks until the next rebuild.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    lexicon: Arc<Lexicon>,
    /// Indices into `lexicon`, in lexicon order.
    live: Vec<usize>,
}

impl CandidateSet {
    /// A set holding the whole lexicon.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        let live = (0..lexicon.len()).collect();
        Self { lexicon, live }
    }

    /// Resets to the full legal lexicon.
    pub fn rebuild(&mut self) {
        self.live = (0..self.lexicon.len()).collect();
    }

    /// Drops every word that needs more of some letter than `supply` has.
    /// Returns how many words were removed.
    pub fn refine(&mut self, supply: &LetterSupply) -> usize {
        let before = self.live.len();
        let lexicon = &self.lexicon;
        self.live
            .retain(|&i| lexicon.words()[i].counts.fits_within(supply.counts()));
        let removed = before - self.live.len();
        trace!(removed, remaining = self.live.len(), "refined candidates");
        removed
    }

    /// Like `refine`, but only checks `letter`. Valid when `letter` is the
    /// only supply entry that changed since the set was last refined.
    pub fn refine_letter(&mut self, letter: Letter, supply: &LetterSupply) -> usize {
        let before = self.live.len();
        let available = supply.get(letter);
        let lexicon = &self.lexicon;
        self.live
            .retain(|&i| lexicon.words()[i].counts.get(letter) <= available);
        let removed = before - self.live.len();
        trace!(%letter, removed, remaining = self.live.len(), "refined candidates");
        removed
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> + '_ {
        self.live.iter().map(move |&i| &self.lexicon.words()[i])
    }

    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_ascii_uppercase();
        self.iter().any(|w| w.text == word)
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }
}
