//! Tracing for bid computation
use crate::estimator::Estimate;
use crate::policy::BidBreakdown;
use letters::Letter;
use serde::{Deserialize, Serialize};

/// Everything that went into one bid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidTrace {
    /// The letter under auction
    pub letter: Letter,
    /// Strategy that produced the bid
    pub strategy: String,
    /// Whether the previous bid was credited to spending before this one
    pub credited_previous: bool,
    /// Spending credited before this bid
    pub spent: u32,
    /// Ceiling on cumulative spend, if any
    pub threshold: Option<u32>,
    pub secret_score: u32,
    /// Expected value over the current candidates
    pub estimate: Estimate,
    /// How the bid was assembled
    pub breakdown: BidBreakdown,
    /// The final bid
    pub bid: u32,
}
