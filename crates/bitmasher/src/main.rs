//! BitMasher
//!
//! Main entry point for the game.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};

use bm_core::config::GameConfig;
use bm_core::error::{GameResult, OptionsError};
use bm_core::interface::SystemClock;
use bm_core::{GameRng, new_game, run_session};
use bm_ui::{
    Console, StartMenuChoice, Terminal, lose_sequence_for, run_start_menu,
    show_generation_warning,
};

/// BitMasher, a text adventure where you play an antivirus
#[derive(Parser, Debug)]
#[command(name = "bitmasher")]
#[command(author, version, about = "BitMasher - rid a computer of a RANSOMWARE", long_about = None)]
struct Args {
    /// Seed for the random number generator, to replay a run
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Options file to load instead of ~/.bitmasherrc
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Skip every print, scan and battle delay
    #[arg(long = "fast")]
    fast: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if !atty::is(atty::Stream::Stdout) {
        eprintln!("ERROR: stdout is not a terminal");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they do not mix with the game screen. `RUST_LOG`
/// overrides the level picked from `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.target(env_logger::Target::Stderr);
    if let Err(e) = builder.try_init() {
        eprintln!("WARN: failed to initialise logging: {e}");
    }
}

/// A missing default rc file just means defaults; a missing explicit one
/// is an error.
fn load_config(args: &Args) -> Result<GameConfig, OptionsError> {
    let config = match &args.config {
        Some(path) => GameConfig::load_from_file(path)?,
        None => match GameConfig::default_path() {
            Some(path) if path.is_file() => {
                log::info!("loading options from {}", path.display());
                GameConfig::load_from_file(&path)?
            }
            _ => GameConfig::default(),
        },
    };

    Ok(if args.fast {
        config.without_delays()
    } else {
        config
    })
}

/// Menu, session, ending, and back to the menu until the player EXITs
fn run(args: &Args) -> GameResult<()> {
    let config = load_config(args)?;

    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    log::info!("random seed: {}", rng.seed());

    let mut terminal = Terminal::stdio(Console::new(), &config);
    let clock = SystemClock::new();

    loop {
        if run_start_menu(&mut terminal)? == StartMenuChoice::Exit {
            terminal.play_exit_sequence();
            return Ok(());
        }

        let generated = new_game(&config, &mut rng)?;
        if generated.is_partial() {
            show_generation_warning(&mut terminal, &generated)?;
        }

        let outcome = run_session(&mut terminal, &clock, &mut rng, &config, generated)?;
        log::info!("session ended: {outcome:?}");

        if let Some(funny) = lose_sequence_for(outcome) {
            terminal.play_lose_sequence(funny, &mut rng)?;
        }
    }
}
