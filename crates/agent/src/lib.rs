mod agent;
pub mod candidates;
pub mod error;
pub mod estimator;
pub mod lexicon;
pub mod policy;
pub mod strategy;
pub mod supply;
mod trace;

pub use agent::{render_letters, Agent, BidRequest, GameState};
pub use candidates::CandidateSet;
pub use error::{Error, Result};
pub use estimator::{estimate, likelihood, Estimate};
pub use lexicon::{
    is_legal, load_lexicon, FileWordSource, Lexicon, LexiconCache, StaticWordSource, WordSource,
};
pub use policy::{compute_bid, BidBreakdown, BudgetState};
pub use strategy::{CreditRule, Strategy, StrategyKind};
pub use supply::LetterSupply;
pub use trace::BidTrace;

use letters::{Letter, LetterTable};

/// Every letter copy in `table`, shuffled.
pub fn shuffled_bag(table: &LetterTable, rng: &mut impl rand::Rng) -> Vec<Letter> {
    use rand::seq::SliceRandom;

    let mut bag = Vec::with_capacity(table.frequency.total() as usize);
    for (letter, count) in table.frequency.iter() {
        bag.extend(std::iter::repeat(letter).take(count as usize));
    }
    bag.shuffle(rng);
    bag
}

#[cfg(test)]
mod tests {
    use super::*;
    use letters::LetterCounts;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shuffled_bag_matches_frequencies() {
        let table = LetterTable::scrabble();
        let mut rng = StdRng::seed_from_u64(1);
        let bag = shuffled_bag(&table, &mut rng);
        assert_eq!(bag.len(), 98);
        let counts: LetterCounts = bag.iter().copied().collect();
        assert_eq!(counts, table.frequency);
    }
}
