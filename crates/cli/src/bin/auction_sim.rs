/// Play simulated letter-auction games between bidding strategies and
/// random bidders, and compare how they spend.
use agent::{shuffled_bag, BidRequest, FileWordSource};
use clap::{Parser, ValueEnum};
use cli::game_utils::{
    format_summary_table, letters_string, load_strategy, Player, PlayerSummary, RandomBidder,
};
use cli::logging::init_logging;
use letters::{AuctionRecord, Letter, LetterTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulate letter-auction games between bidders")]
struct Args {
    /// Word list, one word per line
    #[arg(short, long, env = "WORDLIST", default_value = "files/wordlist.txt")]
    wordlist: PathBuf,

    /// Strategy for each agent: a built-in name or a YAML file (repeatable)
    #[arg(short, long = "strategy", default_values = ["conservative", "aggressive"])]
    strategies: Vec<String>,

    /// Number of random bidders to add
    #[arg(short, long, default_value_t = 2)]
    random_bidders: usize,

    #[arg(short, long, default_value_t = 10)]
    games: usize,

    /// Rounds per game
    #[arg(long, default_value_t = 1)]
    rounds: usize,

    /// Secret letters dealt to each player per round
    #[arg(long, default_value_t = 4)]
    secret_letters: usize,

    /// Auctions per player per round
    #[arg(long, default_value_t = 8)]
    auctions_per_player: usize,

    #[arg(long, default_value_t = 100)]
    starting_score: u32,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[arg(short, long)]
    verbose: bool,
}

fn play_game(
    players: &mut [Player],
    args: &Args,
    table: &LetterTable,
    rng: &mut StdRng,
    summaries: &mut [PlayerSummary],
) {
    let num_players = players.len();
    for (id, player) in players.iter_mut().enumerate() {
        player.start_game(id, num_players);
    }

    let mut scores = vec![args.starting_score; num_players];
    let mut history: Vec<AuctionRecord> = Vec::new();
    let mut won: Vec<Vec<Letter>> = vec![Vec::new(); num_players];

    for round in 0..args.rounds {
        let mut bag = shuffled_bag(table, rng);
        for player in players.iter_mut() {
            let take = args.secret_letters.min(bag.len());
            let secret = bag.split_off(bag.len() - take);
            player.start_round(&secret);
        }

        for _ in 0..args.auctions_per_player * num_players {
            let letter = match bag.pop() {
                Some(l) => l,
                None => break,
            };
            let bids: Vec<u32> = players
                .iter_mut()
                .enumerate()
                .map(|(id, player)| {
                    let request = BidRequest {
                        letter,
                        history: &history,
                        total_rounds: args.rounds,
                        secret_score: scores[id],
                    };
                    player.bid(&request, &mut *rng).min(scores[id])
                })
                .collect();

            let record = match AuctionRecord::resolve(letter, bids) {
                Some(r) => r,
                None => break,
            };
            debug!(round, %letter, winner = record.winner, price = record.price, "auction");
            scores[record.winner] -= record.price;
            summaries[record.winner].points_spent += record.price as u64;
            won[record.winner].push(letter);
            for player in players.iter_mut() {
                player.on_auction_result(&record);
            }
            history.push(record);
        }
    }

    for (id, summary) in summaries.iter_mut().enumerate() {
        summary.games += 1;
        summary.letters_won += won[id].len();
        summary.points_left += scores[id] as u64;
        info!(player = id, letters = %letters_string(&won[id]), score = scores[id], "game over");
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let table = LetterTable::scrabble();
    let mut players = Vec::new();
    for arg in &args.strategies {
        match load_strategy(arg) {
            Ok(strategy) => players.push(Player::agent(
                strategy,
                table.clone(),
                FileWordSource::new(&args.wordlist),
            )),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    players.extend((0..args.random_bidders).map(|_| Player::Random(RandomBidder)));

    if players.is_empty() {
        eprintln!("Error: no players.");
        return ExitCode::FAILURE;
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::thread_rng().gen()),
    };

    let mut summaries: Vec<PlayerSummary> = players
        .iter()
        .enumerate()
        .map(|(id, p)| PlayerSummary {
            player: id,
            name: p.name(),
            ..Default::default()
        })
        .collect();

    for _ in 0..args.games {
        play_game(&mut players, &args, &table, &mut rng, &mut summaries);
    }

    match args.format {
        OutputFormat::Table => {
            println!("{} games, {} players\n", args.games, players.len());
            print!("{}", format_summary_table(&summaries));
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&summaries) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        OutputFormat::Yaml => match serde_yaml::to_string(&summaries) {
            Ok(s) => print!("{}", s),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }
    ExitCode::SUCCESS
}
