use agent::{shuffled_bag, Agent, BidRequest, StaticWordSource, Strategy};
use letters::io::wordlist::parse_wordlist;
use letters::{AuctionRecord, Letter, LetterTable};
use rand::rngs::StdRng;
use rand::SeedableRng;

const WORDS: &str = "
# small sample
AT
CAT
DOG
GOD
QUIZ
ZOO
EEL
BEE
TREE
STREET
ADDED
RETAINS
JINX
OXEN
TOTEM
";

fn new_agents() -> Vec<Agent> {
    [Strategy::conservative(), Strategy::aggressive()]
        .into_iter()
        .map(|strategy| {
            let source = StaticWordSource::new(parse_wordlist(WORDS));
            Agent::new(strategy, LetterTable::scrabble(), source)
        })
        .collect()
}

/// Two agents play full games against each other; every observable
/// invariant is checked after each step.
#[test]
fn agents_respect_invariants_over_full_games() {
    let table = LetterTable::scrabble();
    let mut agents = new_agents();
    let num_players = agents.len();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut scores = vec![100u32; num_players];
        let mut history: Vec<AuctionRecord> = Vec::new();
        let total_rounds = 2;

        for (id, agent) in agents.iter_mut().enumerate() {
            agent.start_game(id, num_players);
        }

        for _round in 0..total_rounds {
            let mut bag = shuffled_bag(&table, &mut rng);
            for agent in agents.iter_mut() {
                let secret: Vec<Letter> = bag.split_off(bag.len() - 4);
                agent.start_round(&secret);
                let lexicon = agent.lexicon();
                let after_reset = agent.candidates().len();
                let expected = lexicon
                    .words()
                    .iter()
                    .filter(|w| w.counts.fits_within(agent.supply().counts()))
                    .count();
                assert_eq!(after_reset, expected);
            }

            for _ in 0..8 * num_players {
                let letter = match bag.pop() {
                    Some(l) => l,
                    None => break,
                };
                let before: Vec<usize> = agents.iter().map(|a| a.candidates().len()).collect();

                let bids: Vec<u32> = agents
                    .iter_mut()
                    .enumerate()
                    .map(|(id, agent)| {
                        let trace = agent.bid_with_trace(&BidRequest {
                            letter,
                            history: &history,
                            total_rounds,
                            secret_score: scores[id],
                        });
                        assert!(trace.bid <= scores[id]);
                        if let Some(threshold) = trace.threshold {
                            assert!(trace.bid <= threshold.saturating_sub(trace.spent));
                        }
                        if let Some(max_bid) = agent.strategy().max_bid {
                            assert!(trace.bid <= max_bid);
                        }
                        trace.bid
                    })
                    .collect();

                let record = AuctionRecord::resolve(letter, bids).unwrap();
                scores[record.winner] -= record.price;
                for agent in agents.iter_mut() {
                    agent.on_auction_result(record.winner, letter);
                }
                history.push(record);

                for (agent, before) in agents.iter().zip(before) {
                    assert!(agent.candidates().len() <= before);
                    for word in agent.candidates().iter() {
                        assert!(word.counts.fits_within(agent.supply().counts()));
                    }
                }
            }
        }
    }
}

#[test]
fn winner_letters_are_tracked_for_everyone() {
    let mut agents = new_agents();
    for (id, agent) in agents.iter_mut().enumerate() {
        agent.start_game(id, 2);
        agent.start_round(&[Letter::from_char('T').unwrap()]);
    }
    let o = Letter::from_char('O').unwrap();
    for agent in agents.iter_mut() {
        agent.on_auction_result(1, o);
    }
    for agent in &agents {
        assert_eq!(agent.player_letters()[1], vec![o]);
        assert!(agent.player_letters()[0].is_empty());
        assert_eq!(agent.supply().get(o), 7);
    }
    assert_eq!(agents[0].my_letters().len(), 1);
    assert_eq!(agents[1].my_letters().len(), 2);
}
