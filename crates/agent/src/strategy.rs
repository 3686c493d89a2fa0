//! Bidding strategy profiles.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the agent finds out whether it won the previous auction, and so
/// whether its previous bid counts toward spending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditRule {
    /// Look up `history[auctions bid this round - 1]`, once at least one
    /// auction has been bid on this round.
    AuctionIndex,
    /// Look up `history[total_rounds - 1]`.
    TotalRounds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub name: String,
    /// Share of the expected word value offered for a letter, in `[0, 1]`.
    pub bid_fraction: f64,
    /// The letter's own points divided by this are added to the bid.
    pub letter_divisor: u32,
    /// Hard ceiling on any single bid.
    #[serde(default)]
    pub max_bid: Option<u32>,
    /// Ceiling on cumulative spend. Derived from the lexicon when absent.
    #[serde(default)]
    pub bid_threshold: Option<u32>,
    pub credit_rule: CreditRule,
}

impl Strategy {
    pub fn conservative() -> Self {
        Self {
            name: "conservative".into(),
            bid_fraction: 0.1,
            letter_divisor: 3,
            max_bid: None,
            bid_threshold: None,
            credit_rule: CreditRule::AuctionIndex,
        }
    }

    pub fn aggressive() -> Self {
        Self {
            name: "aggressive".into(),
            bid_fraction: 0.5,
            letter_divisor: 2,
            max_bid: Some(12),
            bid_threshold: None,
            credit_rule: CreditRule::TotalRounds,
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let strategy: Strategy = serde_yaml::from_str(yaml)?;
        strategy.validate()?;
        Ok(strategy)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.bid_fraction.is_finite() || !(0.0..=1.0).contains(&self.bid_fraction) {
            return Err(Error::Strategy(format!(
                "{}: bid_fraction must be within [0, 1], got {}",
                self.name, self.bid_fraction
            )));
        }
        if self.letter_divisor == 0 {
            return Err(Error::Strategy(format!(
                "{}: letter_divisor must be positive",
                self.name
            )));
        }
        Ok(())
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::conservative()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Conservative,
    Aggressive,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Conservative, StrategyKind::Aggressive];

    pub fn strategy(self) -> Strategy {
        match self {
            StrategyKind::Conservative => Strategy::conservative(),
            StrategyKind::Aggressive => Strategy::aggressive(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Conservative => "conservative",
            StrategyKind::Aggressive => "aggressive",
        }
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" => Ok(StrategyKind::Conservative),
            "aggressive" => Ok(StrategyKind::Aggressive),
            other => Err(Error::Strategy(format!("unknown strategy {:?}", other))),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_strategy() {
        let yaml = "
name: custom
bid_fraction: 0.25
letter_divisor: 4
credit_rule: auction_index
";
        let s = Strategy::from_yaml(yaml).unwrap();
        assert_eq!(s.bid_fraction, 0.25);
        assert_eq!(s.letter_divisor, 4);
        assert_eq!(s.max_bid, None);
        assert_eq!(s.bid_threshold, None);
        assert_eq!(s.credit_rule, CreditRule::AuctionIndex);
    }

    #[test]
    fn test_rejects_bad_values() {
        let yaml = "name: x\nbid_fraction: 1.5\nletter_divisor: 2\ncredit_rule: total_rounds\n";
        assert!(matches!(Strategy::from_yaml(yaml), Err(Error::Strategy(_))));

        let yaml = "name: x\nbid_fraction: 0.5\nletter_divisor: 0\ncredit_rule: total_rounds\n";
        assert!(matches!(Strategy::from_yaml(yaml), Err(Error::Strategy(_))));

        let yaml = "name: x\nbid_fraction: 0.5\n";
        assert!(matches!(Strategy::from_yaml(yaml), Err(Error::Yaml(_))));
    }

    #[test]
    fn test_builtins_are_valid() {
        for kind in StrategyKind::ALL {
            let s = kind.strategy();
            assert!(s.validate().is_ok());
            assert_eq!(s.name, kind.name());
            assert_eq!(kind.name().parse::<StrategyKind>().unwrap(), kind);
        }
        assert!("reckless".parse::<StrategyKind>().is_err());
    }
}
