//! Expected word value over the remaining candidates.

use crate::candidates::CandidateSet;
use letters::{LetterTable, Word};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Likelihood-weighted mean word score; `0.0` when there are no
    /// candidates.
    pub expected_value: f64,
    pub sum_prob: f64,
    pub sum_weighted: f64,
    pub candidates: usize,
}

/// Unnormalized weight of a word: the product of the global frequency of
/// each of its letters, divided by its length. Common letters make a word
/// easier to assemble; it is not a probability.
pub fn likelihood(word: &Word, table: &LetterTable) -> f64 {
    if word.is_empty() {
        return 0.0;
    }
    let product: f64 = word
        .counts
        .iter()
        .map(|(letter, count)| (table.frequency(letter) as f64).powi(count as i32))
        .product();
    product / word.len() as f64
}

pub fn estimate(candidates: &CandidateSet, table: &LetterTable) -> Estimate {
    let mut sum_prob = 0.0;
    let mut sum_weighted = 0.0;
    let mut count = 0;

    for word in candidates.iter() {
        let weight = likelihood(word, table);
        sum_prob += weight;
        sum_weighted += weight * table.score_counts(&word.counts) as f64;
        count += 1;
    }

    let expected_value = if sum_prob > 0.0 {
        sum_weighted / sum_prob
    } else {
        0.0
    };

    Estimate {
        expected_value,
        sum_prob,
        sum_weighted,
        candidates: count,
    }
}
