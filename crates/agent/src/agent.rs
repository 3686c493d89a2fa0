//! The bidding agent: one value owning all per-game state.

use crate::candidates::CandidateSet;
use crate::estimator::estimate;
use crate::lexicon::{load_lexicon, Lexicon, LexiconCache, WordSource};
use crate::policy::{compute_bid, BudgetState};
use crate::strategy::Strategy;
use crate::supply::LetterSupply;
use crate::trace::BidTrace;
use letters::{AuctionRecord, Letter, LetterTable};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What the game asks the agent when a letter goes up for auction.
#[derive(Debug, Clone, Copy)]
pub struct BidRequest<'a> {
    pub letter: Letter,
    /// Every auction resolved so far, oldest first.
    pub history: &'a [AuctionRecord],
    pub total_rounds: usize,
    /// The agent's remaining points. Bids never exceed this.
    pub secret_score: u32,
}

/// State that lives for one game.
#[derive(Debug, Clone)]
pub struct GameState {
    pub player_id: usize,
    pub num_players: usize,
    pub lexicon: Arc<Lexicon>,
    pub threshold: Option<u32>,
    pub supply: LetterSupply,
    pub candidates: CandidateSet,
    pub budget: BudgetState,
    /// Secret letters plus letters won this round.
    pub my_letters: Vec<Letter>,
    /// Letters won at auction this round, per player.
    pub player_letters: Vec<Vec<Letter>>,
}

impl GameState {
    fn new(
        player_id: usize,
        num_players: usize,
        lexicon: Arc<Lexicon>,
        table: &LetterTable,
        strategy: &Strategy,
    ) -> Self {
        let threshold = strategy.bid_threshold.or_else(|| {
            if lexicon.is_empty() {
                None
            } else {
                Some(lexicon.max_word_score())
            }
        });
        Self {
            player_id,
            num_players,
            threshold,
            supply: LetterSupply::new(table),
            candidates: CandidateSet::new(Arc::clone(&lexicon)),
            lexicon,
            budget: BudgetState::default(),
            my_letters: Vec::new(),
            player_letters: vec![Vec::new(); num_players],
        }
    }
}

pub struct Agent {
    strategy: Strategy,
    table: LetterTable,
    source: Box<dyn WordSource>,
    cache: LexiconCache,
    game: GameState,
}

impl Agent {
    pub fn new(strategy: Strategy, table: LetterTable, source: impl WordSource + 'static) -> Self {
        let game = GameState::new(0, 0, Arc::new(Lexicon::empty()), &table, &strategy);
        Self {
            strategy,
            table,
            source: Box::new(source),
            cache: LexiconCache::new(),
            game,
        }
    }

    /// Loads the lexicon (filtered once per distinct word list) and resets
    /// all game state.
    pub fn start_game(&mut self, player_id: usize, num_players: usize) {
        let lexicon = load_lexicon(self.source.as_ref(), &self.table, &mut self.cache);
        self.game = GameState::new(player_id, num_players, lexicon, &self.table, &self.strategy);
        info!(
            strategy = %self.strategy.name,
            player_id,
            num_players,
            lexicon = self.game.lexicon.len(),
            threshold = ?self.game.threshold,
            "starting game"
        );
    }

    /// Refills the supply, restores the full candidate set, takes the
    /// secret letters out of the supply and resets the round's spending.
    pub fn start_round(&mut self, secret_letters: &[Letter]) {
        let game = &mut self.game;
        game.supply.initialize();
        game.candidates.rebuild();
        game.my_letters = secret_letters.to_vec();
        game.player_letters = vec![Vec::new(); game.num_players];
        for &letter in secret_letters {
            game.supply.remove(letter);
        }
        game.candidates.refine(&game.supply);
        game.budget.start_round();
        debug!(
            secret = %render_letters(secret_letters),
            candidates = game.candidates.len(),
            "starting round"
        );
    }

    pub fn bid(&mut self, request: &BidRequest<'_>) -> u32 {
        self.bid_with_trace(request).bid
    }

    pub fn bid_with_trace(&mut self, request: &BidRequest<'_>) -> BidTrace {
        let game = &mut self.game;
        let credited_previous = game.budget.credit_previous(
            self.strategy.credit_rule,
            request.history,
            request.total_rounds,
            game.player_id,
        );

        let estimate = estimate(&game.candidates, &self.table);
        let breakdown = compute_bid(
            &self.strategy,
            self.table.points(request.letter),
            estimate.expected_value,
            game.budget.spent,
            game.threshold,
            request.secret_score,
        );
        let spent = game.budget.spent;
        game.budget.record_bid(breakdown.bid);

        debug!(
            letter = %request.letter,
            candidates = estimate.candidates,
            expected_value = estimate.expected_value,
            spent,
            bid = breakdown.bid,
            "bid"
        );

        BidTrace {
            letter: request.letter,
            strategy: self.strategy.name.clone(),
            credited_previous,
            spent,
            threshold: game.threshold,
            secret_score: request.secret_score,
            estimate,
            breakdown,
            bid: breakdown.bid,
        }
    }

    /// Feeds a resolved auction back in: the letter leaves the supply
    /// whoever won it.
    pub fn on_auction_result(&mut self, winner: usize, letter: Letter) {
        let game = &mut self.game;
        match game.player_letters.get_mut(winner) {
            Some(letters) => letters.push(letter),
            None => warn!(winner, num_players = game.num_players, "auction winner out of range"),
        }
        if winner == game.player_id {
            game.my_letters.push(letter);
        }
        if game.supply.remove(letter) {
            game.candidates.refine_letter(letter, &game.supply);
        }
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn table(&self) -> &LetterTable {
        &self.table
    }

    pub fn state(&self) -> &GameState {
        &self.game
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.game.lexicon
    }

    pub fn supply(&self) -> &LetterSupply {
        &self.game.supply
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.game.candidates
    }

    pub fn budget(&self) -> &BudgetState {
        &self.game.budget
    }

    pub fn bid_threshold(&self) -> Option<u32> {
        self.game.threshold
    }

    pub fn my_letters(&self) -> &[Letter] {
        &self.game.my_letters
    }

    pub fn player_letters(&self) -> &[Vec<Letter>] {
        &self.game.player_letters
    }
}

pub fn render_letters(letters: &[Letter]) -> String {
    letters.iter().map(|l| l.to_char()).collect()
}
