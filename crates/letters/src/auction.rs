use crate::letter::Letter;
use serde::{Deserialize, Serialize};

/// The outcome of one sealed-bid letter auction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionRecord {
    pub letter: Letter,
    /// Bids indexed by player id.
    pub bids: Vec<u32>,
    pub winner: usize,
    /// What the winner pays: the second-highest bid.
    pub price: u32,
}

impl AuctionRecord {
    /// Resolves a second-price sealed-bid auction. The highest bid wins, ties
    /// going to the lowest player id, and the winner pays the second-highest
    /// bid (zero when there is only one bidder). Returns `None` if nobody bid.
    pub fn resolve(letter: Letter, bids: Vec<u32>) -> Option<Self> {
        let (winner, &high) = bids
            .iter()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))?;
        let price = bids
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != winner)
            .map(|(_, &bid)| bid)
            .max()
            .unwrap_or(0)
            .min(high);
        Some(Self {
            letter,
            bids,
            winner,
            price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn test_second_price() {
        let record = AuctionRecord::resolve(letter('E'), vec![3, 9, 5]).unwrap();
        assert_eq!(record.winner, 1);
        assert_eq!(record.price, 5);
    }

    #[test]
    fn test_tie_goes_to_lowest_id() {
        let record = AuctionRecord::resolve(letter('E'), vec![2, 7, 7]).unwrap();
        assert_eq!(record.winner, 1);
        assert_eq!(record.price, 7);
    }

    #[test]
    fn test_single_bidder_pays_nothing() {
        let record = AuctionRecord::resolve(letter('Q'), vec![4]).unwrap();
        assert_eq!(record.winner, 0);
        assert_eq!(record.price, 0);
        assert_eq!(AuctionRecord::resolve(letter('Q'), Vec::new()), None);
    }
}
