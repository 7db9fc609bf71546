use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use solo_chess::agent::{ComputerPlayer, HumanPlayer};
use solo_chess::config::{Difficulty, EngineConfig};
use solo_chess::game::Game;
use solo_chess::orchestrator::Orchestrator;

/// Play chess against the computer in your terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Engine configuration file (TOML); overrides --difficulty
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Difficulty::Normal)]
    difficulty: Difficulty,

    /// Start from this position instead of the initial one
    #[arg(long)]
    fen: Option<String>,

    /// Seed the engine for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Log search details (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Show the board from black's side
    #[arg(long)]
    flip: bool,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .format_timestamp(None)
        .init();

    if let Err(err) = run(args) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => args.difficulty.config(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    log::debug!("engine config: {:?}", config);

    let mut game = match &args.fen {
        Some(fen) => Game::from_fen(fen)?,
        None => Game::new(),
    };
    game.set_flipped(args.flip);

    let name = match args.config {
        Some(_) => "Computer".to_string(),
        None => format!("Computer ({})", args.difficulty.name()),
    };

    println!("Type 'help' for commands.");
    let mut games_played = 0u64;
    loop {
        // the human player holds the stdin lock, so players live for one game
        let human = Box::new(HumanPlayer::stdio("You".to_string()));
        let mut engine_config = config.clone();
        engine_config.seed = config.seed.map(|seed| seed.wrapping_add(games_played));
        let computer = Box::new(ComputerPlayer::new(engine_config, name.clone()));

        let mut orchestrator = Orchestrator::new(game.clone(), human, computer, io::stdout());
        let result = orchestrator.run()?;
        log::info!("Game {} finished: {:?}", games_played + 1, result);
        drop(orchestrator);

        games_played += 1;
        if !ask("Play again? [y/N] ")? {
            break;
        }
    }
    Ok(())
}

fn ask(question: &str) -> io::Result<bool> {
    print!("{}", question);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
