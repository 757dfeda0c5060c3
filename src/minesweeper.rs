use std::io;
use std::time::Instant;

use crossterm::style::Color;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::console::{self, Key, Screen, Session, Style};

/// (label, width, height, mines)
const DIFFICULTIES: [(&str, i16, i16, usize); 3] = [
    ("Easy (8x8, 10 mines)", 8, 8, 10),
    ("Medium (10x10, 15 mines)", 10, 10, 15),
    ("Hard (16x16, 40 mines)", 16, 16, 40),
];

struct Minesweeper {
    width: i16,
    height: i16,
    mine_count: usize,
    mines: Vec<bool>,
    revealed: Vec<bool>,
    flags: Vec<bool>,
    numbers: Vec<u8>,
    cursor: (i16, i16),
    first_click: bool,
    game_over: bool,
    won: bool,
    rng: ChaCha8Rng,
}

impl Minesweeper {
    fn new(width: i16, height: i16, mine_count: usize, seed: u64) -> Self {
        let len = width as usize * height as usize;
        Minesweeper {
            width,
            height,
            mine_count,
            mines: vec![false; len],
            revealed: vec![false; len],
            flags: vec![false; len],
            numbers: vec![0; len],
            cursor: (width / 2, height / 2),
            first_click: true,
            game_over: false,
            won: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn reset(&mut self) {
        let len = self.width as usize * self.height as usize;
        self.mines = vec![false; len];
        self.revealed = vec![false; len];
        self.flags = vec![false; len];
        self.numbers = vec![0; len];
        self.cursor = (self.width / 2, self.height / 2);
        self.first_click = true;
        self.game_over = false;
        self.won = false;
    }

    fn idx(&self, x: i16, y: i16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn in_bounds(&self, x: i16, y: i16) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Place mines everywhere except the first-clicked cell, so the first
    /// reveal can never lose.
    fn place_mines(&mut self, avoid: (i16, i16)) {
        let mut open: Vec<(i16, i16)> = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .filter(|&pos| pos != avoid)
            .collect();
        open.shuffle(&mut self.rng);
        for &(x, y) in &open[..self.mine_count] {
            let idx = self.idx(x, y);
            self.mines[idx] = true;
        }
        self.compute_numbers();
    }

    fn compute_numbers(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = self.idx(x, y);
                if self.mines[idx] {
                    continue;
                }
                self.numbers[idx] = self.count_adjacent_mines(x, y);
            }
        }
    }

    fn count_adjacent_mines(&self, x: i16, y: i16) -> u8 {
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (nx, ny) = (x + dx, y + dy);
                if self.in_bounds(nx, ny) && self.mines[self.idx(nx, ny)] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Reveal a cell. Flagged and already-revealed cells are untouched;
    /// zero cells flood outward with an explicit stack.
    fn reveal(&mut self, x: i16, y: i16) {
        let mut stack = vec![(x, y)];
        while let Some((x, y)) = stack.pop() {
            if !self.in_bounds(x, y) {
                continue;
            }
            let idx = self.idx(x, y);
            if self.revealed[idx] || self.flags[idx] {
                continue;
            }
            self.revealed[idx] = true;
            if self.mines[idx] {
                self.game_over = true;
                return;
            }
            if self.numbers[idx] == 0 {
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        if dx != 0 || dy != 0 {
                            stack.push((x + dx, y + dy));
                        }
                    }
                }
            }
        }
    }

    fn toggle_flag(&mut self, x: i16, y: i16) {
        let idx = self.idx(x, y);
        if !self.revealed[idx] {
            self.flags[idx] = !self.flags[idx];
        }
    }

    fn flag_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// Won once every safe cell is revealed. Flags are irrelevant.
    fn check_win(&self) -> bool {
        self.mines
            .iter()
            .zip(&self.revealed)
            .all(|(&mine, &revealed)| mine || revealed)
    }

    fn reveal_at_cursor(&mut self) {
        let (x, y) = self.cursor;
        if self.first_click {
            self.place_mines((x, y));
            self.first_click = false;
        }
        self.reveal(x, y);
        if !self.game_over && self.check_win() {
            self.won = true;
        }
    }

    fn move_cursor(&mut self, dx: i16, dy: i16) {
        let (x, y) = self.cursor;
        let nx = (x + dx).clamp(0, self.width - 1);
        let ny = (y + dy).clamp(0, self.height - 1);
        self.cursor = (nx, ny);
    }
}

/// Difficulty picker shown before the board. Returns `None` on quit.
fn pick_difficulty(screen: &mut Screen) -> io::Result<Option<(i16, i16, usize)>> {
    let mut selected = 0usize;
    loop {
        screen.clear();
        let ui = Style::new();
        screen.print_centered(2, "MINESWEEPER - Select Difficulty", ui.bold());
        for (i, (name, _, _, _)) in DIFFICULTIES.iter().enumerate() {
            let y = 5 + i as i32 * 2;
            if i == selected {
                screen.print_centered(y, &format!("▶ {name}"), ui.reverse());
            } else {
                screen.print_centered(y, name, ui);
            }
        }
        screen.print_centered(
            5 + DIFFICULTIES.len() as i32 * 2 + 1,
            "↑↓: Select  ENTER: Start  Q: Quit",
            ui.dim(),
        );
        screen.present()?;

        match console::wait_key()? {
            Key::Up => selected = selected.saturating_sub(1),
            Key::Down => selected = (selected + 1).min(DIFFICULTIES.len() - 1),
            Key::Enter => {
                let (_, w, h, m) = DIFFICULTIES[selected];
                return Ok(Some((w, h, m)));
            }
            Key::Char('q') | Key::Char('Q') | Key::Esc | Key::CtrlC => return Ok(None),
            _ => {}
        }
    }
}

pub fn run(seed: u64) -> io::Result<()> {
    let _session = Session::enter()?;
    let mut screen = Screen::new()?;

    let Some((width, height, mines)) = pick_difficulty(&mut screen)? else {
        return Ok(());
    };
    let mut game = Minesweeper::new(width, height, mines, seed);
    let mut started_at: Option<Instant> = None;

    loop {
        let elapsed = started_at.map_or(0, |t| t.elapsed().as_secs());
        draw(&mut screen, &game, elapsed);
        screen.present()?;

        match console::wait_key()? {
            Key::Char('q') | Key::Char('Q') | Key::Esc | Key::CtrlC => return Ok(()),
            Key::Char('r') | Key::Char('R') => {
                game.reset();
                started_at = None;
            }
            _ if game.game_over || game.won => {}
            Key::Up | Key::Char('w') | Key::Char('W') => game.move_cursor(0, -1),
            Key::Down | Key::Char('s') | Key::Char('S') => game.move_cursor(0, 1),
            Key::Left | Key::Char('a') | Key::Char('A') => game.move_cursor(-1, 0),
            Key::Right | Key::Char('d') | Key::Char('D') => game.move_cursor(1, 0),
            Key::Space | Key::Enter => {
                if game.first_click {
                    started_at = Some(Instant::now());
                }
                game.reveal_at_cursor();
            }
            Key::Char('f') | Key::Char('F') => {
                let (x, y) = game.cursor;
                game.toggle_flag(x, y);
            }
            _ => {}
        }
    }
}

fn number_color(n: u8) -> Color {
    match n {
        1 | 4 => Color::Blue,
        2 => Color::Green,
        3 | 5 => Color::Red,
        6 => Color::Cyan,
        _ => Color::White,
    }
}

fn draw(screen: &mut Screen, game: &Minesweeper, elapsed: u64) {
    screen.clear();

    let ui = Style::new();
    screen.print_centered(1, "M I N E S W E E P E R", ui.bold());
    let remaining = game.mine_count.saturating_sub(game.flag_count());
    let stats = format!(
        "Mines left: {}  Flags: {}  Time: {}s",
        remaining,
        game.flag_count(),
        elapsed
    );
    screen.print_centered(3, &stats, ui);

    // Cells are three columns wide, plus a spacer.
    let cell_width = 4;
    let start_y = 5;
    let start_x = (screen.width() as i32 - game.width as i32 * cell_width) / 2;

    for y in 0..game.height {
        for x in 0..game.width {
            let idx = game.idx(x, y);
            let sx = start_x + x as i32 * cell_width;
            let sy = start_y + y as i32;

            let (ch, mut style) = if game.game_over && game.mines[idx] {
                ('*', Style::new().fg(Color::Red).bold())
            } else if game.revealed[idx] {
                match game.numbers[idx] {
                    0 => (' ', ui),
                    n => (
                        char::from_digit(n as u32, 10).unwrap_or('?'),
                        Style::new().fg(number_color(n)),
                    ),
                }
            } else if game.flags[idx] {
                ('⚑', Style::new().fg(Color::Yellow))
            } else {
                ('░', ui)
            };

            if (x, y) == game.cursor && !game.game_over && !game.won {
                style = style.reverse();
            }
            screen.put(sx, sy, ' ', style);
            screen.put(sx + 1, sy, ch, style);
            screen.put(sx + 2, sy, ' ', style);
        }
    }

    let help_y = start_y + game.height as i32 + 2;
    screen.print_centered(help_y, "↑↓←→/WASD: Move  SPACE/ENTER: Reveal", ui.dim());
    screen.print_centered(help_y + 1, "F: Flag  R: Restart  Q: Quit", ui.dim());

    if game.won {
        screen.print_centered(
            help_y + 3,
            &format!("★ YOU WIN! Time: {elapsed}s ★"),
            ui.bold().reverse(),
        );
    } else if game.game_over {
        screen.print_centered(help_y + 3, "GAME OVER! Press R to restart", ui.bold().reverse());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_board() -> Minesweeper {
        Minesweeper::new(8, 8, 10, 42)
    }

    #[test]
    fn test_first_click_is_never_a_mine() {
        for seed in 0..20 {
            let mut game = Minesweeper::new(8, 8, 10, seed);
            game.cursor = (3, 3);
            game.reveal_at_cursor();
            assert!(!game.game_over, "seed {seed} placed a mine under the cursor");
            assert_eq!(game.mines.iter().filter(|&&m| m).count(), 10);
        }
    }

    #[test]
    fn test_numbers_count_adjacent_mines() {
        let mut game = empty_board();
        let idx = game.idx(1, 1);
        game.mines[idx] = true;
        game.compute_numbers();

        assert_eq!(game.numbers[game.idx(0, 0)], 1);
        assert_eq!(game.numbers[game.idx(2, 2)], 1);
        assert_eq!(game.numbers[game.idx(3, 3)], 0);
        // Mine cells keep a zero, they are never displayed as numbers.
        assert_eq!(game.numbers[game.idx(1, 1)], 0);
    }

    #[test]
    fn test_zero_cell_floods() {
        let mut game = empty_board();
        // One mine in the corner; revealing the far corner floods the
        // whole board except the mine's neighborhood border cells.
        let idx = game.idx(0, 0);
        game.mines[idx] = true;
        game.compute_numbers();
        game.first_click = false;

        game.reveal(7, 7);

        assert!(!game.game_over);
        assert!(!game.revealed[game.idx(0, 0)]);
        assert!(game.revealed[game.idx(1, 1)]);
        assert!(game.revealed[game.idx(7, 0)]);
        assert!(game.check_win());
    }

    #[test]
    fn test_flood_stops_at_numbers() {
        let mut game = empty_board();
        // A wall of mines down column 3 splits the board.
        for y in 0..8 {
            let idx = game.idx(3, y);
            game.mines[idx] = true;
        }
        game.compute_numbers();
        game.first_click = false;

        game.reveal(0, 0);

        // The flood reveals up to the numbered border, not past the wall.
        assert!(game.revealed[game.idx(2, 4)]);
        assert!(!game.revealed[game.idx(3, 4)]);
        assert!(!game.revealed[game.idx(4, 4)]);
    }

    #[test]
    fn test_revealing_mine_ends_game() {
        let mut game = empty_board();
        let idx = game.idx(5, 5);
        game.mines[idx] = true;
        game.compute_numbers();
        game.first_click = false;

        game.reveal(5, 5);

        assert!(game.game_over);
        assert!(!game.won);
    }

    #[test]
    fn test_flag_blocks_reveal() {
        let mut game = empty_board();
        let idx = game.idx(5, 5);
        game.mines[idx] = true;
        game.compute_numbers();
        game.first_click = false;

        game.toggle_flag(5, 5);
        game.reveal(5, 5);
        assert!(!game.game_over);
        assert!(!game.revealed[game.idx(5, 5)]);

        game.toggle_flag(5, 5);
        assert!(!game.flags[game.idx(5, 5)]);
    }

    #[test]
    fn test_flag_on_revealed_cell_is_ignored() {
        let mut game = empty_board();
        let mine = game.idx(0, 0);
        game.mines[mine] = true;
        game.compute_numbers();
        game.first_click = false;

        game.reveal(1, 1);
        game.toggle_flag(1, 1);
        assert!(!game.flags[game.idx(1, 1)]);
    }

    #[test]
    fn test_win_ignores_flags() {
        let mut game = empty_board();
        let mine = game.idx(0, 0);
        game.mines[mine] = true;
        game.compute_numbers();

        // Reveal every safe cell by hand, no flags placed.
        for y in 0..8 {
            for x in 0..8 {
                let idx = game.idx(x, y);
                if !game.mines[idx] {
                    game.revealed[idx] = true;
                }
            }
        }
        assert!(game.check_win());
    }

    #[test]
    fn test_cursor_clamps_to_board() {
        let mut game = empty_board();
        game.cursor = (0, 0);
        game.move_cursor(-1, -1);
        assert_eq!(game.cursor, (0, 0));

        game.cursor = (7, 7);
        game.move_cursor(1, 1);
        assert_eq!(game.cursor, (7, 7));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut game = empty_board();
        game.cursor = (2, 2);
        game.reveal_at_cursor();
        assert!(!game.first_click);

        game.reset();

        assert!(game.first_click);
        assert!(!game.game_over);
        assert!(game.mines.iter().all(|&m| !m));
        assert!(game.revealed.iter().all(|&r| !r));
        assert_eq!(game.cursor, (4, 4));
    }
}
