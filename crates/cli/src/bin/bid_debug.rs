/// Show how an agent arrives at its bid for one letter.
use agent::{Agent, BidRequest, FileWordSource};
use clap::Parser;
use cli::game_utils::{
    format_full_trace, format_row, format_table_header, letters_string, load_strategy,
    parse_history,
};
use cli::logging::init_logging;
use letters::letter::parse_letters;
use letters::{AuctionRecord, Letter, LetterTable};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The letter under auction
    letter: Letter,

    /// Word list, one word per line
    #[arg(short, long, env = "WORDLIST", default_value = "files/wordlist.txt")]
    wordlist: PathBuf,

    /// Built-in strategy name or YAML file
    #[arg(short, long, default_value = "conservative")]
    strategy: String,

    /// The agent's secret letters (e.g. "AEKT")
    #[arg(long, default_value = "")]
    secret: String,

    /// Earlier auctions this round; `+` marks ones the agent won (e.g. "K+ E D")
    #[arg(long, default_value = "")]
    history: String,

    /// Remaining secret score
    #[arg(long, default_value_t = 100)]
    score: u32,

    #[arg(long, default_value_t = 2)]
    players: usize,

    /// Total rounds in the game
    #[arg(long, default_value_t = 1)]
    rounds: usize,

    /// Print the final trace as JSON
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> Result<(), String> {
    let strategy = load_strategy(&args.strategy).map_err(|e| e.to_string())?;
    let secret = parse_letters(&args.secret)?;
    let prior = parse_history(&args.history)?;
    let players = args.players.max(2);

    let mut agent = Agent::new(
        strategy,
        LetterTable::scrabble(),
        FileWordSource::new(&args.wordlist),
    );
    agent.start_game(0, players);
    agent.start_round(&secret);

    println!("Strategy: {}", agent.strategy().name);
    println!("Lexicon: {} words", agent.lexicon().len());
    println!("Secret letters: {}", letters_string(&secret));
    println!("Candidates after secret letters: {}\n", agent.candidates().len());
    print!("{}", format_table_header());

    let mut history: Vec<AuctionRecord> = Vec::new();
    let mut score = args.score;
    for (idx, (letter, won)) in prior.iter().enumerate() {
        let trace = agent.bid_with_trace(&BidRequest {
            letter: *letter,
            history: &history,
            total_rounds: args.rounds,
            secret_score: score,
        });
        println!("{}", format_row(idx + 1, &trace, Some(*won)));

        let winner = if *won { 0 } else { 1 };
        let mut bids = vec![0; players];
        bids[0] = trace.bid;
        if *won {
            score -= trace.bid;
        }
        history.push(AuctionRecord {
            letter: *letter,
            bids,
            winner,
            price: if *won { trace.bid } else { 0 },
        });
        agent.on_auction_result(winner, *letter);
    }

    let trace = agent.bid_with_trace(&BidRequest {
        letter: args.letter,
        history: &history,
        total_rounds: args.rounds,
        secret_score: score,
    });
    println!("{}", format_row(prior.len() + 1, &trace, None));

    if args.json {
        let json = serde_json::to_string_pretty(&trace).map_err(|e| e.to_string())?;
        println!("{}", json);
    } else {
        print!("{}", format_full_trace(&trace));
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
