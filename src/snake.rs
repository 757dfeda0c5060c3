use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

use crossterm::style::Color;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::console::{self, Key, Screen, Session, Style};

const FIELD_WIDTH: i16 = 60;
const FIELD_HEIGHT: i16 = 25;
const BASE_STEP_SECS: f64 = 0.15;
const INPUT_POLL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    fn delta(self) -> (i16, i16) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }

    fn opposite(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

/// Snake game state, advanced one cell per `step`.
struct SnakeGame {
    // Head at the front.
    snake: VecDeque<(i16, i16)>,
    dir: Dir,
    next_dir: Dir,
    food: (i16, i16),
    score: u32,
    level: u32,
    food_eaten: u32,
    game_over: bool,
    rng: ChaCha8Rng,
}

impl SnakeGame {
    fn new(seed: u64) -> Self {
        let cx = FIELD_WIDTH / 2;
        let cy = FIELD_HEIGHT / 2;
        let mut game = SnakeGame {
            snake: VecDeque::from([(cx, cy), (cx - 1, cy), (cx - 2, cy)]),
            dir: Dir::Right,
            next_dir: Dir::Right,
            food: (0, 0),
            score: 0,
            level: 1,
            food_eaten: 0,
            game_over: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        game.spawn_food();
        game
    }

    /// Pick a random interior cell not occupied by the snake.
    fn spawn_food(&mut self) {
        loop {
            let x = self.rng.gen_range(2..FIELD_WIDTH - 2);
            let y = self.rng.gen_range(2..FIELD_HEIGHT - 2);
            if !self.snake.contains(&(x, y)) {
                self.food = (x, y);
                return;
            }
        }
    }

    /// Buffer a direction change for the next step. Reversing onto the
    /// neck is ignored.
    fn turn(&mut self, dir: Dir) {
        if dir != self.dir.opposite() {
            self.next_dir = dir;
        }
    }

    /// Seconds between steps, shrinking 10% per level.
    fn step_interval(&self) -> Duration {
        Duration::from_secs_f64(BASE_STEP_SECS * 0.9f64.powi(self.level as i32 - 1))
    }

    /// Advance the snake one cell.
    fn step(&mut self) {
        if self.game_over {
            return;
        }

        self.dir = self.next_dir;
        let (hx, hy) = self.snake[0];
        let (dx, dy) = self.dir.delta();
        let head = (hx + dx, hy + dy);

        let (nx, ny) = head;
        if nx <= 0 || nx >= FIELD_WIDTH - 1 || ny <= 0 || ny >= FIELD_HEIGHT - 1 {
            self.game_over = true;
            return;
        }
        // The tail cell still counts as occupied this step.
        if self.snake.contains(&head) {
            self.game_over = true;
            return;
        }

        if head == self.food {
            self.snake.push_front(head);
            self.score += 10;
            self.food_eaten += 1;
            if self.food_eaten % 5 == 0 {
                self.level += 1;
            }
            self.spawn_food();
        } else {
            self.snake.push_front(head);
            self.snake.pop_back();
        }
    }
}

pub fn run(seed: u64) -> io::Result<()> {
    let mut game = SnakeGame::new(seed);
    let _session = Session::enter()?;
    let mut screen = Screen::new()?;
    let mut paused = false;
    let mut last_step = Instant::now();

    loop {
        if let Some(key) = console::poll_key(INPUT_POLL)? {
            match key {
                Key::Char('q') | Key::Char('Q') | Key::Esc | Key::CtrlC => return Ok(()),
                Key::Space => {
                    paused = !paused;
                    last_step = Instant::now();
                }
                _ if paused => {}
                Key::Up | Key::Char('w') | Key::Char('W') => game.turn(Dir::Up),
                Key::Down | Key::Char('s') | Key::Char('S') => game.turn(Dir::Down),
                Key::Left | Key::Char('a') | Key::Char('A') => game.turn(Dir::Left),
                Key::Right | Key::Char('d') | Key::Char('D') => game.turn(Dir::Right),
                _ => {}
            }
        }

        if !paused && last_step.elapsed() >= game.step_interval() {
            game.step();
            last_step = Instant::now();
        }

        draw(&mut screen, &game, paused);
        screen.present()?;

        if game.game_over {
            // Any key leaves the game-over screen.
            console::wait_key()?;
            return Ok(());
        }
    }
}

fn draw(screen: &mut Screen, game: &SnakeGame, paused: bool) {
    screen.clear();

    let border = Style::new().fg(Color::Cyan);
    for x in 1..FIELD_WIDTH as i32 - 1 {
        screen.put(x, 0, '═', border);
        screen.put(x, FIELD_HEIGHT as i32 - 1, '═', border);
    }
    for y in 1..FIELD_HEIGHT as i32 - 1 {
        screen.put(0, y, '║', border);
        screen.put(FIELD_WIDTH as i32 - 1, y, '║', border);
    }
    screen.put(0, 0, '╔', border);
    screen.put(FIELD_WIDTH as i32 - 1, 0, '╗', border);
    screen.put(0, FIELD_HEIGHT as i32 - 1, '╚', border);
    screen.put(FIELD_WIDTH as i32 - 1, FIELD_HEIGHT as i32 - 1, '╝', border);

    for (i, &(x, y)) in game.snake.iter().enumerate() {
        if i == 0 {
            screen.put(x as i32, y as i32, '■', Style::new().fg(Color::Yellow).bold());
        } else {
            screen.put(x as i32, y as i32, '▓', Style::new().fg(Color::Green));
        }
    }

    let (fx, fy) = game.food;
    screen.put(fx as i32, fy as i32, '●', Style::new().fg(Color::Red).bold());

    let status = format!(
        " Score: {}  Length: {}  Level: {}  (↑↓←→/WASD, Space=Pause, Q=Quit)",
        game.score,
        game.snake.len(),
        game.level
    );
    screen.print(0, FIELD_HEIGHT as i32 + 1, &status, Style::new());

    if paused {
        screen.print_centered(
            FIELD_HEIGHT as i32 / 2,
            "*** PAUSED - Press Space to continue ***",
            Style::new().fg(Color::Yellow).bold(),
        );
    }

    if game.game_over {
        let y = FIELD_HEIGHT as i32 / 2;
        screen.print_centered(y, " GAME OVER ", Style::new().fg(Color::Red).bold().reverse());
        screen.print_centered(y + 2, &format!("Final Score: {}", game.score), Style::new());
        screen.print_centered(y + 3, "Press any key...", Style::new().dim());
    }
}
