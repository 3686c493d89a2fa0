//! Turning an expected value into a bounded bid, and the spend bookkeeping
//! around it.

use crate::strategy::{CreditRule, Strategy};
use letters::AuctionRecord;
use serde::{Deserialize, Serialize};

/// Running spend for the current round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetState {
    /// Bids credited as paid so far this round.
    pub spent: u32,
    /// The agent's bid in the auction before this one.
    pub prev_bid: u32,
    /// Auctions bid on so far this round.
    pub auctions: usize,
}

impl BudgetState {
    pub fn start_round(&mut self) {
        self.spent = 0;
        self.auctions = 0;
    }

    /// Payment is booked one auction late: if the agent won the previous
    /// auction, its previous bid is added to `spent`. Which history entry
    /// counts as "previous" depends on `rule`. Returns whether a credit was
    /// applied.
    pub fn credit_previous(
        &mut self,
        rule: CreditRule,
        history: &[AuctionRecord],
        total_rounds: usize,
        player_id: usize,
    ) -> bool {
        if history.is_empty() {
            return false;
        }
        let index = match rule {
            CreditRule::AuctionIndex => self.auctions.checked_sub(1),
            CreditRule::TotalRounds => total_rounds.checked_sub(1),
        };
        let won = index
            .and_then(|i| history.get(i))
            .is_some_and(|record| record.winner == player_id);
        if won {
            self.spent = self.spent.saturating_add(self.prev_bid);
        }
        won
    }

    pub fn record_bid(&mut self, bid: u32) {
        self.prev_bid = bid;
        self.auctions += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidBreakdown {
    /// `floor(expected_value * bid_fraction)`.
    pub base: i64,
    /// `letter_points / letter_divisor`.
    pub adjustment: i64,
    /// Tightest of the remaining threshold, `max_bid` and the secret score.
    pub cap: u32,
    pub bid: u32,
}

/// Computes a bid in `[0, min(secret_score, threshold - spent, max_bid)]`.
/// A `None` threshold means only the secret score and `max_bid` apply.
pub fn compute_bid(
    strategy: &Strategy,
    letter_points: u32,
    expected_value: f64,
    spent: u32,
    threshold: Option<u32>,
    secret_score: u32,
) -> BidBreakdown {
    // `as` maps NaN to zero and saturates at the integer bounds.
    let base = (expected_value * strategy.bid_fraction).floor() as i64;
    let adjustment = (letter_points / strategy.letter_divisor.max(1)) as i64;

    let mut cap = secret_score;
    if let Some(threshold) = threshold {
        cap = cap.min(threshold.saturating_sub(spent));
    }
    if let Some(max_bid) = strategy.max_bid {
        cap = cap.min(max_bid);
    }

    let bid = base.saturating_add(adjustment).clamp(0, cap as i64) as u32;
    BidBreakdown {
        base,
        adjustment,
        cap,
        bid,
    }
}
