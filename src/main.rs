mod console;
mod engine;
mod levels;
mod menu;
mod minesweeper;
mod pacman;
mod snake;
mod sokoban;
mod tetris;
mod wordle;
mod words;

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use rand::Rng;

use levels::LevelSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Game {
    Snake,
    Tetris,
    Pacman,
    Minesweeper,
    Wordle,
    Sokoban,
}

impl Game {
    /// CLI spelling of the variant, as `clap` expects it.
    pub fn name(self) -> &'static str {
        match self {
            Game::Snake => "snake",
            Game::Tetris => "tetris",
            Game::Pacman => "pacman",
            Game::Minesweeper => "minesweeper",
            Game::Wordle => "wordle",
            Game::Sokoban => "sokoban",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Game::Snake => "Snake",
            Game::Tetris => "Tetris",
            Game::Pacman => "Pac-Man",
            Game::Minesweeper => "Minesweeper",
            Game::Wordle => "Wordle",
            Game::Sokoban => "Sokoban",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Game::Snake => "Eat, grow, don't bite yourself",
            Game::Tetris => "Stack falling pieces, clear lines",
            Game::Pacman => "Clear the maze, dodge the ghosts",
            Game::Minesweeper => "Flag the mines, reveal the rest",
            Game::Wordle => "Guess the five-letter word",
            Game::Sokoban => "Push every box onto a target",
        }
    }
}

#[derive(Parser)]
#[command(name = "ludus")]
#[command(about = "A collection of terminal arcade games", long_about = None)]
struct Args {
    /// Game to launch directly; shows the menu when omitted
    #[arg(value_enum, value_name = "GAME")]
    game: Option<Game>,

    /// Path to a sokoban level pack (XSB format)
    #[arg(long, value_name = "FILE")]
    levels: Option<PathBuf>,

    /// RNG seed, for reproducible runs of the randomized games
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

fn load_levels(path: Option<&PathBuf>) -> LevelSet {
    match path {
        Some(path) => match LevelSet::from_file(path) {
            Ok(levels) => levels,
            Err(e) => {
                eprintln!("Error loading levels: {}", e);
                process::exit(1);
            }
        },
        None => LevelSet::builtin(),
    }
}

fn main() {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().r#gen());

    let result = match args.game {
        Some(Game::Snake) => snake::run(seed),
        Some(Game::Tetris) => tetris::run(seed),
        Some(Game::Pacman) => pacman::run(seed),
        Some(Game::Minesweeper) => minesweeper::run(seed),
        Some(Game::Wordle) => wordle::run(seed),
        Some(Game::Sokoban) => sokoban::run(load_levels(args.levels.as_ref())),
        None => menu::run(args.seed, args.levels),
    };

    // Session guards have dropped by the time an error lands here, so the
    // terminal is restored before anything is printed.
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
