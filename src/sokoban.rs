use std::io;

use crossterm::style::Color;

use crate::console::{self, Key, Screen, Session, Style};
use crate::engine::{Direction, Engine};
use crate::levels::{Coord, LevelSet, Tile};

/// Engine commands the front-end can issue. Key bindings live here, not
/// in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Move(Direction),
    Undo,
    Restart,
    NextLevel,
    Quit,
}

impl Command {
    fn from_key(key: Key) -> Option<Command> {
        match key {
            Key::Up | Key::Char('w') | Key::Char('W') => Some(Command::Move(Direction::Up)),
            Key::Down | Key::Char('s') | Key::Char('S') => Some(Command::Move(Direction::Down)),
            Key::Left | Key::Char('a') | Key::Char('A') => Some(Command::Move(Direction::Left)),
            Key::Right | Key::Char('d') | Key::Char('D') => Some(Command::Move(Direction::Right)),
            Key::Char('u') | Key::Char('U') => Some(Command::Undo),
            Key::Char('r') | Key::Char('R') => Some(Command::Restart),
            Key::Char('n') | Key::Char('N') => Some(Command::NextLevel),
            Key::Char('q') | Key::Char('Q') | Key::Esc | Key::CtrlC => Some(Command::Quit),
            _ => None,
        }
    }
}

pub fn run(levels: LevelSet) -> io::Result<()> {
    let mut engine = Engine::new(levels);
    let _session = Session::enter()?;
    let mut screen = Screen::new()?;

    loop {
        draw(&mut screen, &engine);
        screen.present()?;

        match Command::from_key(console::wait_key()?) {
            Some(Command::Quit) => return Ok(()),
            Some(Command::Move(dir)) => {
                engine.attempt_move(dir);
            }
            Some(Command::Undo) => {
                engine.undo();
            }
            Some(Command::Restart) => engine.restart(),
            Some(Command::NextLevel) => {
                engine.next_level();
            }
            None => {}
        }
    }
}

fn draw(screen: &mut Screen, engine: &Engine) {
    screen.clear();

    let ui = Style::new();
    screen.print_centered(1, "S O K O B A N", ui.bold());

    let hud = match engine.level_name() {
        Some(name) => format!(
            "{}  ({}/{})  Moves: {}  Pushes: {}",
            name,
            engine.level_index() + 1,
            engine.level_count(),
            engine.move_count(),
            engine.push_count()
        ),
        None => format!(
            "Level: {}/{}  Moves: {}  Pushes: {}",
            engine.level_index() + 1,
            engine.level_count(),
            engine.move_count(),
            engine.push_count()
        ),
    };
    screen.print_centered(3, &hud, ui);

    // Board cells are drawn two columns wide for a squarer aspect ratio.
    let start_y = 5;
    let start_x = (screen.width() as i32 - engine.width() as i32 * 2) / 2;

    for y in 0..engine.height() {
        for x in 0..engine.width() {
            let pos = Coord::new(x, y);
            let sx = start_x + x as i32 * 2;
            let sy = start_y + y as i32;

            let is_player = engine.player() == pos;
            let is_box = engine.boxes().contains(&pos);
            let is_target = engine.targets().contains(&pos);

            let (ch, style) = if engine.tile(pos) == Tile::Wall {
                ('█', Style::new().fg(Color::White))
            } else if is_player && is_target {
                ('@', Style::new().fg(Color::Red).bold())
            } else if is_player {
                ('@', Style::new().fg(Color::Yellow).bold())
            } else if is_box && is_target {
                ('●', Style::new().fg(Color::Green).bold())
            } else if is_box {
                ('●', Style::new().fg(Color::Cyan))
            } else if is_target {
                ('·', Style::new().fg(Color::Green))
            } else {
                (' ', Style::new())
            };
            screen.put(sx, sy, ch, style);
        }
    }

    let help_y = start_y + engine.height() as i32 + 2;
    screen.print_centered(help_y, "↑↓←→/WASD: Move  U: Undo  R: Restart", ui.dim());
    screen.print_centered(help_y + 1, "N: Next Level  Q: Quit", ui.dim());

    if engine.is_solved() {
        let last = engine.level_index() + 1 == engine.level_count();
        screen.print_centered(help_y + 3, "★ LEVEL COMPLETE! ★", ui.bold().reverse());
        let hint = if last {
            "All levels done — you win!"
        } else {
            "Press N for next level"
        };
        screen.print_centered(help_y + 4, hint, ui);
    }
}
