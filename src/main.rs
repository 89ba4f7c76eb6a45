//! Tic-Tac-Tix: 3D tic-tac-toe in the terminal.
//!
//! ## Usage
//!
//! - `tictactix` - Play against the computer
//! - `tictactix play --size 4 --computer-first` - Play on a bigger cube, computer opens
//! - `tictactix demo` - Watch the computer play itself
//! - `tictactix winners` - List recorded winners
//!
//! Set `RUST_LOG=debug` to trace every move on stderr.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use tictactix::console::Session;
use tictactix::constants::{DEFAULT_DIMENSION, DEFAULT_WINNERS_FILE};
use tictactix::game::{Game, Winner};
use tictactix::history::WinnerLog;
use tictactix::opponent::computer_move;
use tictactix::render::{PlayerNames, render};

/// Tic-tac-toe on an n×n×n cube
#[derive(Parser)]
#[command(name = "tictactix")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    options: GameOptions,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer
    Play,
    /// Let the computer play both sides
    Demo,
    /// Print the recorded winners
    Winners,
}

#[derive(Args)]
struct GameOptions {
    /// Board dimension n (the cube is n×n×n)
    #[arg(long, short, global = true, default_value_t = DEFAULT_DIMENSION)]
    size: usize,

    /// Seed for the computer's random moves
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Let the computer make the first move
    #[arg(long, global = true)]
    computer_first: bool,

    /// Name recorded when you win
    #[arg(long, global = true, default_value = "Player")]
    name: String,

    /// Winners list location
    #[arg(long, global = true, default_value = DEFAULT_WINNERS_FILE)]
    winners_file: PathBuf,
}

impl GameOptions {
    fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = &cli.options;

    match cli.command {
        Some(Commands::Play) | None => run_play(options),
        Some(Commands::Demo) => run_demo(options),
        Some(Commands::Winners) => run_winners(options),
    }
}

fn run_play(options: &GameOptions) -> Result<()> {
    let log = WinnerLog::new(&options.winners_file);
    match log.load() {
        Ok(names) if names.is_empty() => println!("No recorded winners yet."),
        Ok(names) => println!("Past winners: {}", names.join(", ")),
        Err(e) => warn!(error = %e, "could not read winners"),
    }

    let game = Game::new(options.size, !options.computer_first)?;
    let names = PlayerNames::new(options.name.clone(), "Computer");
    let stdin = io::stdin();
    let mut session = Session::new(game, stdin.lock(), io::stdout(), options.rng())
        .with_names(names)
        .with_log(log);

    match session.run()? {
        Winner::Player(_) | Winner::Tie => println!("*** GAME OVER ***"),
        Winner::Undecided => {}
    }
    Ok(())
}

fn run_demo(options: &GameOptions) -> Result<()> {
    let mut game = Game::new(options.size, !options.computer_first)?;
    let mut rng = options.rng();
    let names = PlayerNames::new("Computer X", "Computer O");

    println!("{}", render(&game, &names));
    while !game.is_game_over() {
        let player = game.current_player();
        let Some(coord) = computer_move(&mut game, &mut rng) else {
            break;
        };
        println!("{} plays {coord}", names.name(player));
    }
    println!("{}", render(&game, &names));
    Ok(())
}

fn run_winners(options: &GameOptions) -> Result<()> {
    let names = WinnerLog::new(&options.winners_file).load()?;
    if names.is_empty() {
        println!("No recorded winners yet.");
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}
