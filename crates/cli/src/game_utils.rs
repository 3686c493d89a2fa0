use agent::{render_letters, Agent, BidRequest, BidTrace, Error, Strategy, StrategyKind, WordSource};
use letters::{AuctionRecord, Letter, LetterTable};
use rand::Rng;
use serde::Serialize;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Resolves a strategy argument: a built-in name, or a path to a YAML file.
pub fn load_strategy(arg: &str) -> Result<Strategy, Error> {
    if let Ok(kind) = arg.parse::<StrategyKind>() {
        return Ok(kind.strategy());
    }
    let yaml = fs::read_to_string(arg).map_err(|source| Error::Io {
        path: Path::new(arg).to_path_buf(),
        source,
    })?;
    Strategy::from_yaml(&yaml)
}

/// An opponent that bids a random amount up to an eighth of its score.
#[derive(Debug, Clone, Default)]
pub struct RandomBidder;

impl RandomBidder {
    pub fn bid(&self, secret_score: u32, rng: &mut impl Rng) -> u32 {
        rng.gen_range(0..=secret_score / 8)
    }
}

pub enum Player {
    Agent(Box<Agent>),
    Random(RandomBidder),
}

impl Player {
    pub fn agent(strategy: Strategy, table: LetterTable, source: impl WordSource + 'static) -> Self {
        Player::Agent(Box::new(Agent::new(strategy, table, source)))
    }

    pub fn name(&self) -> String {
        match self {
            Player::Agent(agent) => agent.strategy().name.clone(),
            Player::Random(_) => "random".to_string(),
        }
    }

    pub fn start_game(&mut self, player_id: usize, num_players: usize) {
        if let Player::Agent(agent) = self {
            agent.start_game(player_id, num_players);
        }
    }

    pub fn start_round(&mut self, secret_letters: &[Letter]) {
        if let Player::Agent(agent) = self {
            agent.start_round(secret_letters);
        }
    }

    pub fn bid(&mut self, request: &BidRequest<'_>, rng: &mut impl Rng) -> u32 {
        match self {
            Player::Agent(agent) => agent.bid(request),
            Player::Random(bidder) => bidder.bid(request.secret_score, rng),
        }
    }

    pub fn on_auction_result(&mut self, record: &AuctionRecord) {
        if let Player::Agent(agent) = self {
            agent.on_auction_result(record.winner, record.letter);
        }
    }
}

/// Per-player totals over a simulation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlayerSummary {
    pub player: usize,
    pub name: String,
    pub games: usize,
    pub letters_won: usize,
    pub points_spent: u64,
    pub points_left: u64,
}

impl PlayerSummary {
    pub fn per_game(&self, total: u64) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            total as f64 / self.games as f64
        }
    }
}

pub fn format_summary_table(summaries: &[PlayerSummary]) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "{:<4} {:<14} {:>12} {:>12} {:>12}",
        "ID", "Player", "Letters/gm", "Spent/gm", "Left/gm"
    )
    .unwrap();
    writeln!(out, "{}", "-".repeat(58)).unwrap();
    for s in summaries {
        writeln!(
            out,
            "{:<4} {:<14} {:>12.2} {:>12.2} {:>12.2}",
            s.player,
            s.name,
            s.per_game(s.letters_won as u64),
            s.per_game(s.points_spent),
            s.per_game(s.points_left),
        )
        .unwrap();
    }
    out
}

pub fn format_table_header() -> String {
    format!(
        "{:<4} {:<6} {:>10} {:>10} {:>6} {:>6} {:>6} {:>5}\n{}\n",
        "#",
        "Letter",
        "Candidates",
        "EV",
        "Spent",
        "Cap",
        "Bid",
        "Won",
        "-".repeat(60)
    )
}

pub fn format_row(idx: usize, trace: &BidTrace, won: Option<bool>) -> String {
    let won = match won {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    };
    format!(
        "{:<4} {:<6} {:>10} {:>10.2} {:>6} {:>6} {:>6} {:>5}",
        idx,
        trace.letter.to_char(),
        trace.estimate.candidates,
        trace.estimate.expected_value,
        trace.spent,
        trace.breakdown.cap,
        trace.bid,
        won
    )
}

pub fn format_full_trace(trace: &BidTrace) -> String {
    let mut out = String::new();
    writeln!(out, "\n=== Bid for {} ({}) ===", trace.letter, trace.strategy).unwrap();
    writeln!(out, "Candidates:      {}", trace.estimate.candidates).unwrap();
    writeln!(out, "Sum likelihood:  {:.3}", trace.estimate.sum_prob).unwrap();
    writeln!(out, "Expected value:  {:.3}", trace.estimate.expected_value).unwrap();
    writeln!(out, "Base term:       {}", trace.breakdown.base).unwrap();
    writeln!(out, "Letter term:     {}", trace.breakdown.adjustment).unwrap();
    writeln!(
        out,
        "Previous bid:    {}",
        if trace.credited_previous {
            "won, credited"
        } else {
            "not credited"
        }
    )
    .unwrap();
    writeln!(out, "Spent:           {}", trace.spent).unwrap();
    match trace.threshold {
        Some(t) => writeln!(out, "Threshold:       {}", t).unwrap(),
        None => writeln!(out, "Threshold:       none").unwrap(),
    }
    writeln!(out, "Secret score:    {}", trace.secret_score).unwrap();
    writeln!(out, "Cap:             {}", trace.breakdown.cap).unwrap();
    writeln!(out, "BID:             {}", trace.bid).unwrap();
    out
}

/// Parses prior auctions written as letters, each optionally followed by
/// `+` when the agent won it: "K+ E D" or "K+,E,D".
pub fn parse_history(s: &str) -> Result<Vec<(Letter, bool)>, String> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (letter, won) = match part.strip_suffix('+') {
                Some(rest) => (rest, true),
                None => (part, false),
            };
            Ok((letter.parse::<Letter>()?, won))
        })
        .collect()
}

pub fn letters_string(letters: &[Letter]) -> String {
    if letters.is_empty() {
        "-".to_string()
    } else {
        render_letters(letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_history() {
        let history = parse_history("K+, e d+").unwrap();
        let rendered: Vec<(char, bool)> = history.iter().map(|(l, w)| (l.to_char(), *w)).collect();
        assert_eq!(rendered, vec![('K', true), ('E', false), ('D', true)]);
        assert!(parse_history("KE").is_err());
        assert!(parse_history("").unwrap().is_empty());
    }

    #[test]
    fn test_load_builtin_strategy() {
        assert_eq!(load_strategy("aggressive").unwrap(), Strategy::aggressive());
        assert!(matches!(load_strategy("no/such/file.yaml"), Err(Error::Io { .. })));
    }

    #[test]
    fn test_random_bidder_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            assert!(RandomBidder.bid(100, &mut rng) <= 12);
        }
        assert_eq!(RandomBidder.bid(7, &mut rng), 0);
    }

    #[test]
    fn test_letters_string() {
        assert_eq!(letters_string(&[]), "-");
        let parsed = letters::letter::parse_letters("QZ").unwrap();
        assert_eq!(letters_string(&parsed), "QZ");
    }
}
