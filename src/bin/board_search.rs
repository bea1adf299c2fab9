//! Command line front end for the board search.
//!
//! Runs the built in example when no hands are given:
//!
//! ```text
//! board_search
//! board_search --p1 6CAH --p2 9H2C --p3 KS8D --flop 3,1,2 --turn 2,1,3 --river 1,3,2
//! board_search --input search.json --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rs_board_search::core::Hand;
use rs_board_search::search::{
    BoardSearch, RankOracle, RankingPattern, SearchConfig, SearchInput, SearchResult,
    StagePatterns, Street,
};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "board_search",
    about = "Find every board consistent with how three hands ranked on each street",
    long_about = "Given three players' hole cards and the relative order of their hands after\n\
                  the flop, turn and river, list every board that produces that order.\n\
                  Pattern values are lower-is-stronger, e.g. 3,1,2 means P2 leads, then P3."
)]
struct Args {
    /// JSON file with `hands` and `hand_ranks`
    #[arg(short = 'i', long = "input", conflicts_with_all = ["p1", "p2", "p3"])]
    input: Option<PathBuf>,

    /// P1 hole cards, e.g. 6CAH
    #[arg(long, requires_all = ["p2", "p3", "flop", "turn", "river"])]
    p1: Option<Hand>,

    /// P2 hole cards
    #[arg(long, requires = "p1")]
    p2: Option<Hand>,

    /// P3 hole cards
    #[arg(long, requires = "p1")]
    p3: Option<Hand>,

    /// Flop pattern, e.g. 3,1,2
    #[arg(long, requires = "p1", allow_hyphen_values = true)]
    flop: Option<RankingPattern<i64>>,

    /// Turn pattern
    #[arg(long, requires = "p1", allow_hyphen_values = true)]
    turn: Option<RankingPattern<i64>>,

    /// River pattern
    #[arg(long, requires = "p1", allow_hyphen_values = true)]
    river: Option<RankingPattern<i64>>,

    /// Print the whole result as JSON
    #[arg(long)]
    json: bool,

    /// Only print how many boards each phase accepted
    #[arg(long = "counts-only")]
    counts_only: bool,

    /// Score every candidate on the calling thread
    #[arg(long)]
    sequential: bool,

    #[command(flatten)]
    tracing: TracingArgs,
}

/// CLI arguments for controlling tracing/logging output.
#[derive(clap::Args, Debug, Clone)]
struct TracingArgs {
    /// Increase logging verbosity (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbosity: u8,

    /// Suppress all output except warnings and errors
    #[arg(short = 'q', long = "quiet", global = true)]
    quiet: bool,

    /// Log output format: compact, pretty, or json
    #[arg(long = "log-format", default_value = "compact", global = true)]
    log_format: LogFormat,
}

/// Available log output formats.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl TracingArgs {
    /// `RUST_LOG` wins if set, otherwise -q is warn, default info, -v debug
    /// and -vv trace.
    fn init_tracing(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            let level = if self.quiet {
                "warn"
            } else {
                match self.verbosity {
                    0 => "info",
                    1 => "debug",
                    _ => "trace",
                }
            };
            EnvFilter::new(format!("{level},rs_board_search={level}"))
        };

        // Logs go to stderr so stdout stays clean for the boards.
        let registry = tracing_subscriber::registry().with(filter);
        match self.log_format {
            LogFormat::Compact => registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init(),
            LogFormat::Pretty => registry
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .init(),
            LogFormat::Json => registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init(),
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] rs_board_search::search::InputError),

    #[error(transparent)]
    Card(#[from] rs_board_search::core::CardError),

    #[error(transparent)]
    Search(#[from] rs_board_search::search::SearchError),

    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

fn load_input(args: &Args) -> Result<SearchInput, CliError> {
    if let Some(path) = &args.input {
        return Ok(SearchInput::load(path)?);
    }
    match (args.p1, args.p2, args.p3, args.flop, args.turn, args.river) {
        (Some(p1), Some(p2), Some(p3), Some(flop), Some(turn), Some(river)) => {
            let hands = rs_board_search::search::SeatHands { p1, p2, p3 };
            Ok(SearchInput {
                hands,
                hand_ranks: StagePatterns { flop, turn, river },
            })
        }
        _ => {
            info!("No hands given, running the built in example");
            Ok(SearchInput::example()?)
        }
    }
}

fn print_result(args: &Args, result: &SearchResult) -> Result<(), CliError> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    for stats in &result.stats {
        println!(
            "Possible {} count: {} (of {} candidates)",
            stats.street, stats.accepted, stats.candidates
        );
    }
    if !args.counts_only {
        for board in result.boards(Street::River) {
            println!("{board}");
        }
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), CliError> {
    let input = load_input(args)?;
    let config = if args.sequential {
        SearchConfig::sequential()
    } else {
        SearchConfig::default()
    };

    info!(
        p1 = %input.hands.p1,
        p2 = %input.hands.p2,
        p3 = %input.hands.p3,
        "Searching for boards"
    );
    let search: BoardSearch<RankOracle, i64> = input.into_search().with_config(config);
    let result = search.run()?;
    print_result(args, &result)
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.tracing.init_tracing();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Board search failed");
            ExitCode::FAILURE
        }
    }
}
