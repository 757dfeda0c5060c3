use std::env;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use crate::console::{self, Key, Screen, Session, Style};
use crate::Game;

const GAMES: [Game; 6] = [
    Game::Snake,
    Game::Tetris,
    Game::Pacman,
    Game::Minesweeper,
    Game::Wordle,
    Game::Sokoban,
];

enum Action {
    Launch(Game),
    Quit,
}

/// Launcher loop. The terminal session is re-entered on every iteration so
/// the child game gets a clean terminal while it runs.
pub fn run(seed: Option<u64>, levels: Option<PathBuf>) -> io::Result<()> {
    let mut selected = 0usize;
    let mut notice: Option<String> = None;

    loop {
        let action = {
            let _session = Session::enter()?;
            let mut screen = Screen::new()?;
            select(&mut screen, &mut selected, notice.take())?
        };

        match action {
            Action::Quit => return Ok(()),
            Action::Launch(game) => {
                let status = launch(game, seed, &levels)?;
                if !status.success() {
                    notice = Some(format!("{} exited abnormally ({status})", game.title()));
                }
            }
        }
    }
}

fn select(screen: &mut Screen, selected: &mut usize, notice: Option<String>) -> io::Result<Action> {
    loop {
        draw(screen, *selected, notice.as_deref());
        screen.present()?;

        match console::wait_key()? {
            Key::Up => *selected = (*selected + GAMES.len() - 1) % GAMES.len(),
            Key::Down => *selected = (*selected + 1) % GAMES.len(),
            Key::Enter | Key::Space => return Ok(Action::Launch(GAMES[*selected])),
            Key::Char('q') | Key::Char('Q') | Key::Esc | Key::CtrlC => return Ok(Action::Quit),
            _ => {}
        }
    }
}

/// Spawn the current executable with the game name as its argument and
/// wait for it to finish. Seed and level-pack options pass through.
fn launch(game: Game, seed: Option<u64>, levels: &Option<PathBuf>) -> io::Result<ExitStatus> {
    let exe = env::current_exe()?;
    let mut command = Command::new(exe);
    command.arg(game.name());
    if let Some(seed) = seed {
        command.arg("--seed").arg(seed.to_string());
    }
    if let Some(levels) = levels {
        command.arg("--levels").arg(levels);
    }
    command.status()
}

fn draw(screen: &mut Screen, selected: usize, notice: Option<&str>) {
    screen.clear();

    let ui = Style::new();
    screen.print_centered(2, "L U D U S", ui.bold());
    screen.print_centered(3, "A terminal arcade collection", ui.dim());

    let width = screen.width() as i32;
    for x in 2..width - 2 {
        screen.put(x, 5, '─', ui.dim());
    }

    let start_y = 7;
    for (i, game) in GAMES.iter().enumerate() {
        let y = start_y + i as i32;
        let line = format!(" {:>2}. {:<12} {}", i + 1, game.title(), game.description());
        if i == selected {
            screen.put(4, y, '▶', ui.bold());
            screen.print(6, y, &line, ui.reverse().bold());
        } else {
            screen.print(6, y, &line, ui);
        }
    }

    if let Some(notice) = notice {
        screen.print_centered(start_y + GAMES.len() as i32 + 2, notice, ui.dim());
    }

    let footer_y = screen.height() as i32 - 2;
    screen.print_centered(footer_y, "↑↓ Navigate | ENTER Select | Q Quit", ui.dim());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_menu_names_match_cli_values() {
        // `launch` passes `Game::name()` back to our own argument parser.
        for game in GAMES {
            assert_eq!(Game::from_str(game.name(), false), Ok(game));
        }
    }

    #[test]
    fn test_cursor_wraps_both_ways() {
        let up = |i: usize| (i + GAMES.len() - 1) % GAMES.len();
        let down = |i: usize| (i + 1) % GAMES.len();

        assert_eq!(up(0), GAMES.len() - 1);
        assert_eq!(down(GAMES.len() - 1), 0);
        assert_eq!(up(down(3)), 3);
    }
}
