use std::io;
use std::time::{Duration, Instant};

use crossterm::style::Color;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::console::{self, Key, Screen, Session, Style};

const BOARD_WIDTH: i16 = 10;
const BOARD_HEIGHT: i16 = 20;
const INPUT_POLL: Duration = Duration::from_millis(10);

/// Score per cleared line count, multiplied by the level.
const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Wall-kick offsets tried in order when a rotation collides.
const KICK_OFFSETS: [(i16, i16); 6] = [(0, 0), (-1, 0), (1, 0), (0, -1), (-1, -1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Per-piece rotation tables; each rotation lists its four block
    /// offsets.
    fn rotations(self) -> &'static [[(i16, i16); 4]] {
        match self {
            PieceKind::I => &[
                [(0, 0), (1, 0), (2, 0), (3, 0)],
                [(0, 0), (0, 1), (0, 2), (0, 3)],
            ],
            PieceKind::O => &[[(0, 0), (1, 0), (0, 1), (1, 1)]],
            PieceKind::T => &[
                [(1, 0), (0, 1), (1, 1), (2, 1)],
                [(0, 0), (0, 1), (1, 1), (0, 2)],
                [(0, 0), (1, 0), (2, 0), (1, 1)],
                [(1, 0), (0, 1), (1, 1), (1, 2)],
            ],
            PieceKind::S => &[
                [(1, 0), (2, 0), (0, 1), (1, 1)],
                [(0, 0), (0, 1), (1, 1), (1, 2)],
            ],
            PieceKind::Z => &[
                [(0, 0), (1, 0), (1, 1), (2, 1)],
                [(1, 0), (0, 1), (1, 1), (0, 2)],
            ],
            PieceKind::J => &[
                [(0, 0), (0, 1), (1, 1), (2, 1)],
                [(0, 0), (1, 0), (0, 1), (0, 2)],
                [(0, 0), (1, 0), (2, 0), (2, 1)],
                [(1, 0), (1, 1), (0, 2), (1, 2)],
            ],
            PieceKind::L => &[
                [(2, 0), (0, 1), (1, 1), (2, 1)],
                [(0, 0), (0, 1), (0, 2), (1, 2)],
                [(0, 0), (1, 0), (2, 0), (0, 1)],
                [(0, 0), (1, 0), (1, 1), (1, 2)],
            ],
        }
    }

    fn width(self) -> i16 {
        self.rotations()[0]
            .iter()
            .map(|&(x, _)| x)
            .max()
            .unwrap_or(0)
            + 1
    }

    fn color(self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::O => Color::Yellow,
            PieceKind::T => Color::Magenta,
            PieceKind::S => Color::Green,
            PieceKind::Z => Color::Red,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::White,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Piece {
    kind: PieceKind,
    rotation: usize,
    x: i16,
    y: i16,
}

impl Piece {
    fn spawn(kind: PieceKind) -> Piece {
        Piece {
            kind,
            rotation: 0,
            x: BOARD_WIDTH / 2 - kind.width() / 2,
            y: 0,
        }
    }

    fn blocks(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.kind.rotations()[self.rotation]
            .iter()
            .map(move |&(dx, dy)| (self.x + dx, self.y + dy))
    }

    fn rotated(&self, clockwise: bool) -> Piece {
        let count = self.kind.rotations().len();
        let rotation = if clockwise {
            (self.rotation + 1) % count
        } else {
            (self.rotation + count - 1) % count
        };
        Piece { rotation, ..*self }
    }
}

struct TetrisGame {
    grid: [[Option<PieceKind>; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    current: Piece,
    next: PieceKind,
    hold: Option<PieceKind>,
    can_hold: bool,
    score: u32,
    lines: u32,
    level: u32,
    drop_timer: f64,
    game_over: bool,
    rng: ChaCha8Rng,
}

impl TetrisGame {
    fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let first = Self::random_kind(&mut rng);
        let next = Self::random_kind(&mut rng);
        TetrisGame {
            grid: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: Piece::spawn(first),
            next,
            hold: None,
            can_hold: true,
            score: 0,
            lines: 0,
            level: 1,
            drop_timer: 0.0,
            game_over: false,
            rng,
        }
    }

    fn random_kind(rng: &mut ChaCha8Rng) -> PieceKind {
        PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
    }

    /// A piece position is valid when every block is within the side and
    /// bottom bounds and no block overlaps a locked cell. Blocks above
    /// the top edge are allowed.
    fn is_valid(&self, piece: &Piece) -> bool {
        piece.blocks().all(|(x, y)| {
            if x < 0 || x >= BOARD_WIDTH || y >= BOARD_HEIGHT {
                return false;
            }
            y < 0 || self.grid[y as usize][x as usize].is_none()
        })
    }

    fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        let moved = Piece {
            x: self.current.x + dx,
            y: self.current.y + dy,
            ..self.current
        };
        if self.is_valid(&moved) {
            self.current = moved;
            true
        } else {
            false
        }
    }

    /// Rotate with wall kicks: the first non-colliding offset wins, else
    /// the rotation fails and nothing changes.
    fn rotate(&mut self, clockwise: bool) {
        let rotated = self.current.rotated(clockwise);
        for (dx, dy) in KICK_OFFSETS {
            let kicked = Piece {
                x: rotated.x + dx,
                y: rotated.y + dy,
                ..rotated
            };
            if self.is_valid(&kicked) {
                self.current = kicked;
                return;
            }
        }
    }

    /// Descend one row, scoring +1 if the piece actually moved.
    fn soft_drop(&mut self) {
        if self.try_move(0, 1) {
            self.score += 1;
        }
    }

    /// Drop to the floor (+2 per cell) and lock immediately.
    fn hard_drop(&mut self) {
        let mut distance = 0u32;
        while self.try_move(0, 1) {
            distance += 1;
        }
        self.score += distance * 2;
        self.lock_and_spawn();
    }

    /// Swap the falling piece with the hold slot, at most once per piece.
    fn hold_piece(&mut self) {
        if !self.can_hold {
            return;
        }
        let held = self.current.kind;
        match self.hold.take() {
            Some(kind) => self.current = Piece::spawn(kind),
            None => self.spawn_piece(),
        }
        self.hold = Some(held);
        self.can_hold = false;
    }

    fn spawn_piece(&mut self) {
        self.current = Piece::spawn(self.next);
        self.next = Self::random_kind(&mut self.rng);
        self.can_hold = true;
        if !self.is_valid(&self.current) {
            self.game_over = true;
        }
    }

    fn lock_and_spawn(&mut self) {
        let cells: Vec<(i16, i16)> = self.current.blocks().collect();
        for (x, y) in cells {
            if (0..BOARD_HEIGHT).contains(&y) {
                self.grid[y as usize][x as usize] = Some(self.current.kind);
            }
        }

        let cleared = self.clear_lines();
        if cleared > 0 {
            self.lines += cleared;
            self.score += LINE_SCORES[cleared as usize] * self.level;
            self.level = self.lines / 10 + 1;
        }

        self.spawn_piece();

        if self.grid[0].iter().any(|cell| cell.is_some()) {
            self.game_over = true;
        }
    }

    fn clear_lines(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = BOARD_HEIGHT as usize - 1;
        loop {
            if self.grid[y].iter().all(|cell| cell.is_some()) {
                for row in (1..=y).rev() {
                    self.grid[row] = self.grid[row - 1];
                }
                self.grid[0] = [None; BOARD_WIDTH as usize];
                cleared += 1;
                // Re-check the same row after the shift.
            } else if y == 0 {
                break;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Where the current piece would land on a hard drop.
    fn ghost(&self) -> Piece {
        let mut ghost = self.current;
        loop {
            let below = Piece {
                y: ghost.y + 1,
                ..ghost
            };
            if self.is_valid(&below) {
                ghost = below;
            } else {
                return ghost;
            }
        }
    }

    fn drop_delay(&self) -> f64 {
        (1.0 - (self.level as f64 - 1.0) * 0.05).max(0.1)
    }

    fn update(&mut self, dt: f64) {
        if self.game_over {
            return;
        }
        self.drop_timer += dt;
        if self.drop_timer >= self.drop_delay() {
            self.drop_timer = 0.0;
            if !self.try_move(0, 1) {
                self.lock_and_spawn();
            }
        }
    }
}

pub fn run(seed: u64) -> io::Result<()> {
    let mut game = TetrisGame::new(seed);
    let _session = Session::enter()?;
    let mut screen = Screen::new()?;
    let mut paused = false;
    let mut last_frame = Instant::now();

    loop {
        if let Some(key) = console::poll_key(INPUT_POLL)? {
            match key {
                Key::Char('q') | Key::Char('Q') | Key::Esc | Key::CtrlC => return Ok(()),
                Key::Char('p') | Key::Char('P') => paused = !paused,
                _ if paused || game.game_over => {}
                Key::Left => {
                    game.try_move(-1, 0);
                }
                Key::Right => {
                    game.try_move(1, 0);
                }
                Key::Down => game.soft_drop(),
                Key::Up => game.rotate(true),
                Key::Char('z') | Key::Char('Z') => game.rotate(false),
                Key::Space => game.hard_drop(),
                Key::Char('c') | Key::Char('C') => game.hold_piece(),
                _ => {}
            }
        }

        let dt = last_frame.elapsed().as_secs_f64();
        last_frame = Instant::now();
        if !paused {
            game.update(dt);
        }

        draw(&mut screen, &game, paused);
        screen.present()?;
    }
}

const BOARD_LEFT: i32 = 5;
const BOARD_TOP: i32 = 3;

fn draw(screen: &mut Screen, game: &TetrisGame, paused: bool) {
    screen.clear();

    let ui = Style::new();
    screen.print_centered(1, "T E T R I S", ui.bold());

    // Board frame; cells are two columns wide.
    for y in 0..=BOARD_HEIGHT as i32 {
        screen.put(BOARD_LEFT - 1, BOARD_TOP + y, '│', ui);
        screen.put(BOARD_LEFT + BOARD_WIDTH as i32 * 2, BOARD_TOP + y, '│', ui);
    }
    for x in 0..BOARD_WIDTH as i32 * 2 {
        screen.put(BOARD_LEFT + x, BOARD_TOP + BOARD_HEIGHT as i32, '─', ui);
    }
    screen.put(BOARD_LEFT - 1, BOARD_TOP + BOARD_HEIGHT as i32, '└', ui);
    screen.put(
        BOARD_LEFT + BOARD_WIDTH as i32 * 2,
        BOARD_TOP + BOARD_HEIGHT as i32,
        '┘',
        ui,
    );

    for y in 0..BOARD_HEIGHT {
        for x in 0..BOARD_WIDTH {
            if let Some(kind) = game.grid[y as usize][x as usize] {
                draw_cell(screen, x, y, '█', Style::new().fg(kind.color()));
            }
        }
    }

    if !game.game_over {
        let ghost = game.ghost();
        if ghost.y != game.current.y {
            for (x, y) in ghost.blocks() {
                if y >= 0 {
                    draw_cell(screen, x, y, ':', ui.dim());
                }
            }
        }
        for (x, y) in game.current.blocks() {
            if y >= 0 {
                draw_cell(screen, x, y, '█', Style::new().fg(game.current.kind.color()).bold());
            }
        }
    }

    let info_x = BOARD_LEFT + BOARD_WIDTH as i32 * 2 + 4;
    screen.print(info_x, BOARD_TOP, "NEXT:", ui.bold());
    draw_preview(screen, info_x, BOARD_TOP + 1, Some(game.next));
    screen.print(info_x + 12, BOARD_TOP, "HOLD:", ui.bold());
    draw_preview(screen, info_x + 12, BOARD_TOP + 1, game.hold);

    screen.print(info_x, BOARD_TOP + 6, &format!("SCORE: {:06}", game.score), ui);
    screen.print(info_x, BOARD_TOP + 7, &format!("LINES: {:03}", game.lines), ui);
    screen.print(info_x, BOARD_TOP + 8, &format!("LEVEL: {:02}", game.level), ui);

    let help = [
        "←→: Move   ↓: Soft drop",
        "↑/Z: Rotate cw/ccw",
        "Space: Hard drop  C: Hold",
        "P: Pause  Q: Quit",
    ];
    for (i, line) in help.iter().enumerate() {
        screen.print(info_x, BOARD_TOP + 11 + i as i32, line, ui.dim());
    }

    if game.game_over {
        screen.print_centered(
            BOARD_TOP + BOARD_HEIGHT as i32 / 2,
            "GAME OVER! Press Q to quit",
            Style::new().fg(Color::Red).bold(),
        );
    } else if paused {
        screen.print_centered(
            BOARD_TOP + BOARD_HEIGHT as i32 / 2,
            "PAUSED - Press P to continue",
            ui.bold(),
        );
    }
}

fn draw_cell(screen: &mut Screen, x: i16, y: i16, ch: char, style: Style) {
    let sx = BOARD_LEFT + x as i32 * 2;
    let sy = BOARD_TOP + y as i32;
    screen.put(sx, sy, ch, style);
    screen.put(sx + 1, sy, ch, style);
}

fn draw_preview(screen: &mut Screen, x: i32, y: i32, kind: Option<PieceKind>) {
    if let Some(kind) = kind {
        for &(dx, dy) in &kind.rotations()[0] {
            let style = Style::new().fg(kind.color());
            screen.put(x + dx as i32 * 2, y + dy as i32, '█', style);
            screen.put(x + dx as i32 * 2 + 1, y + dy as i32, '█', style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(kind: PieceKind) -> TetrisGame {
        let mut game = TetrisGame::new(7);
        game.current = Piece::spawn(kind);
        game
    }

    #[test]
    fn test_spawn_positions() {
        assert_eq!(Piece::spawn(PieceKind::I).x, 3);
        assert_eq!(Piece::spawn(PieceKind::O).x, 4);
        assert_eq!(Piece::spawn(PieceKind::T).x, 4);
        assert_eq!(Piece::spawn(PieceKind::T).y, 0);
    }

    #[test]
    fn test_side_bounds_block_movement() {
        let mut game = game_with(PieceKind::O);
        game.current.x = 0;
        assert!(!game.try_move(-1, 0));
        game.current.x = BOARD_WIDTH - 2;
        assert!(!game.try_move(1, 0));
        assert!(game.try_move(0, 1));
    }

    #[test]
    fn test_locked_cells_block_movement() {
        let mut game = game_with(PieceKind::O);
        game.current.x = 4;
        game.current.y = 10;
        game.grid[12][4] = Some(PieceKind::I);

        assert!(!game.try_move(0, 1));
    }

    #[test]
    fn test_rotation_kicks_to_first_free_offset() {
        let mut game = game_with(PieceKind::T);
        game.current.x = 4;
        game.current.y = 10;
        // Block the in-place rotation target; the (-1, 0) kick is free.
        game.grid[12][4] = Some(PieceKind::I);

        game.rotate(true);

        assert_eq!(game.current.rotation, 1);
        assert_eq!(game.current.x, 3);
        assert_eq!(game.current.y, 10);
    }

    #[test]
    fn test_rotation_fails_when_every_kick_collides() {
        let mut game = game_with(PieceKind::I);
        game.current.rotation = 1;
        game.current.x = 9;
        game.current.y = 10;

        game.rotate(true);

        // Horizontal I cannot fit against the right wall.
        assert_eq!(game.current.rotation, 1);
        assert_eq!(game.current.x, 9);
    }

    #[test]
    fn test_clear_lines_shifts_rows_down() {
        let mut game = game_with(PieceKind::O);
        game.grid[19] = [Some(PieceKind::I); 10];
        game.grid[18][3] = Some(PieceKind::T);

        let cleared = game.clear_lines();

        assert_eq!(cleared, 1);
        assert_eq!(game.grid[19][3], Some(PieceKind::T));
        assert!(game.grid[18].iter().all(|cell| cell.is_none()));
    }

    #[test]
    fn test_line_clear_scoring() {
        let mut game = game_with(PieceKind::O);
        // Bottom row full except the two columns the O will fill.
        for x in 0..10 {
            if x != 4 && x != 5 {
                game.grid[19][x] = Some(PieceKind::I);
                game.grid[18][x] = Some(PieceKind::I);
            }
        }
        game.current.x = 4;
        game.current.y = 18;

        game.hard_drop();

        assert_eq!(game.lines, 2);
        assert_eq!(game.score, LINE_SCORES[2]);
        assert!(game.grid[19].iter().all(|cell| cell.is_none()));
    }

    #[test]
    fn test_soft_drop_scores_per_cell() {
        let mut game = game_with(PieceKind::O);
        game.soft_drop();
        game.soft_drop();
        assert_eq!(game.score, 2);

        // At the floor no points accrue.
        game.current.y = 18;
        game.soft_drop();
        assert_eq!(game.score, 2);
    }

    #[test]
    fn test_hard_drop_scores_and_locks() {
        let mut game = game_with(PieceKind::O);
        game.current.y = 0;

        game.hard_drop();

        // O descends from y=0 to y=18: 18 cells at 2 points each.
        assert_eq!(game.score, 36);
        assert_eq!(game.grid[19][4], Some(PieceKind::O));
        assert_eq!(game.grid[19][5], Some(PieceKind::O));
    }

    #[test]
    fn test_hold_swaps_once_per_piece() {
        let mut game = game_with(PieceKind::T);
        let next = game.next;

        game.hold_piece();
        assert_eq!(game.hold, Some(PieceKind::T));
        // First hold pulls the next piece in.
        assert_eq!(game.current.kind, next);

        // Second hold in a row is refused.
        let current = game.current.kind;
        game.hold_piece();
        assert_eq!(game.current.kind, current);
        assert_eq!(game.hold, Some(PieceKind::T));
    }

    #[test]
    fn test_hold_resets_after_lock() {
        let mut game = game_with(PieceKind::T);
        game.hold_piece();
        assert!(!game.can_hold);

        game.hard_drop();
        assert!(game.can_hold);
    }

    #[test]
    fn test_spawn_collision_is_game_over() {
        let mut game = game_with(PieceKind::O);
        for y in 0..2 {
            game.grid[y] = [Some(PieceKind::I); 10];
        }

        game.spawn_piece();

        assert!(game.game_over);
    }

    #[test]
    fn test_drop_delay_floors_at_100ms() {
        let mut game = game_with(PieceKind::O);
        game.level = 1;
        assert_eq!(game.drop_delay(), 1.0);
        game.level = 10;
        assert!((game.drop_delay() - 0.55).abs() < 1e-9);
        game.level = 50;
        assert_eq!(game.drop_delay(), 0.1);
    }
}
