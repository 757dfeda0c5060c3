use std::io;
use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::style::Color;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::console::{self, Key, Screen, Session, Style};

const PACMAN_MOVE_DELAY: f64 = 0.15;
const GHOST_MOVE_DELAY: f64 = 0.18;
const GHOST_FRIGHTENED_DELAY: f64 = 0.25;
const POWER_DURATION: f64 = 8.0;
const INPUT_POLL: Duration = Duration::from_millis(10);

/// Score for each ghost eaten during one power pellet; doubles per ghost.
const GHOST_EATEN_SCORES: [u32; 4] = [200, 400, 800, 1600];

/// `#` wall, `.` dot, `O` power pellet, `-` ghost house gate, `P` player
/// start, `G` ghost start. The gap rows on the left and right edges form
/// the wrap-around tunnel.
const MAZE_LAYOUT: [&str; 23] = [
    "####################",
    "#........##........#",
    "#.##.###.##.###.##.#",
    "#O##.###.##.###.##O#",
    "#..................#",
    "#.##.#.######.#.##.#",
    "#....#...##...#....#",
    "####.###.##.###.####",
    "####.#..........####",
    "####.#.##--##.#.####",
    "####.#.#    #.#.####",
    "       # GG #       ",
    "####.#.#    #.#.####",
    "####.#.######.#.####",
    "####.#...##...#.####",
    "#........##........#",
    "#.##.###.##.###.##.#",
    "#O.#.....P.....#.O.#",
    "##.#.#.######.#.#.##",
    "#....#...##...#....#",
    "#.######.##.######.#",
    "#..................#",
    "####################",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Wall,
    Dot,
    Pellet,
    Gate,
    Empty,
}

struct Maze {
    width: i16,
    height: i16,
    cells: Vec<Cell>,
    dots_remaining: u32,
}

impl Maze {
    /// Wrap an x coordinate through the horizontal tunnel.
    fn wrap_x(&self, x: i16) -> i16 {
        if x < 0 {
            self.width - 1
        } else if x >= self.width {
            0
        } else {
            x
        }
    }

    fn cell(&self, x: i16, y: i16) -> Cell {
        let x = self.wrap_x(x);
        if y < 0 || y >= self.height {
            return Cell::Wall;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    fn is_walkable(&self, x: i16, y: i16) -> bool {
        self.cell(x, y) != Cell::Wall
    }

    /// Eat whatever sits at (x, y). Returns the score gained and whether
    /// it was a power pellet.
    fn eat(&mut self, x: i16, y: i16) -> (u32, bool) {
        let x = self.wrap_x(x);
        let idx = y as usize * self.width as usize + x as usize;
        match self.cells[idx] {
            Cell::Dot => {
                self.cells[idx] = Cell::Empty;
                self.dots_remaining -= 1;
                (10, false)
            }
            Cell::Pellet => {
                self.cells[idx] = Cell::Empty;
                self.dots_remaining -= 1;
                (50, true)
            }
            _ => (0, false),
        }
    }
}

struct Player {
    start: (i16, i16),
    x: i16,
    y: i16,
    dir: Option<Dir>,
    next_dir: Option<Dir>,
    move_timer: f64,
}

impl Player {
    fn reset(&mut self) {
        self.x = self.start.0;
        self.y = self.start.1;
        self.dir = None;
        self.next_dir = None;
        self.move_timer = 0.0;
    }

    /// Advance one cell: apply a buffered turn if the turn is open, then
    /// keep moving in the current direction if that is open too.
    fn step(&mut self, maze: &Maze) {
        if let Some(next) = self.next_dir {
            let (dx, dy) = next.delta();
            if maze.is_walkable(self.x + dx, self.y + dy) {
                self.dir = Some(next);
            }
        }
        if let Some(dir) = self.dir {
            let (dx, dy) = dir.delta();
            if maze.is_walkable(self.x + dx, self.y + dy) {
                self.x = maze.wrap_x(self.x + dx);
                self.y += dy;
            }
        }
    }
}

struct Ghost {
    home: (i16, i16),
    color: Color,
    x: i16,
    y: i16,
    dir: Dir,
    frightened: bool,
    eaten: bool,
    move_timer: f64,
}

impl Ghost {
    fn new(home: (i16, i16), color: Color) -> Ghost {
        Ghost {
            home,
            color,
            x: home.0,
            y: home.1,
            dir: Dir::Up,
            frightened: false,
            eaten: false,
            move_timer: 0.0,
        }
    }

    fn reset(&mut self) {
        self.x = self.home.0;
        self.y = self.home.1;
        self.dir = Dir::Up;
        self.frightened = false;
        self.eaten = false;
    }

    fn apply(&mut self, dir: Dir, maze: &Maze) {
        let (dx, dy) = dir.delta();
        self.x = maze.wrap_x(self.x + dx);
        self.y += dy;
        self.dir = dir;
    }

    /// Greedy chase: pick the open direction that minimizes Manhattan
    /// distance to the player, never reversing. Reversing is the fallback
    /// when it is the only option (dead ends).
    fn chase_step(&mut self, target: (i16, i16), maze: &Maze) {
        let reverse = self.dir.opposite();
        let mut best: Option<(Dir, i16)> = None;

        for dir in Dir::ALL {
            if dir == reverse {
                continue;
            }
            let (dx, dy) = dir.delta();
            let nx = maze.wrap_x(self.x + dx);
            let ny = self.y + dy;
            if !maze.is_walkable(nx, ny) {
                continue;
            }
            let distance = (target.0 - nx).abs() + (target.1 - ny).abs();
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((dir, distance));
            }
        }

        if let Some((dir, _)) = best {
            self.apply(dir, maze);
            return;
        }
        for dir in Dir::ALL {
            let (dx, dy) = dir.delta();
            if maze.is_walkable(self.x + dx, self.y + dy) {
                self.apply(dir, maze);
                return;
            }
        }
    }

    /// Frightened ghosts wander randomly, still refusing to reverse.
    fn flee_step(&mut self, maze: &Maze, rng: &mut ChaCha8Rng) {
        let reverse = self.dir.opposite();
        let mut open = ArrayVec::<Dir, 4>::new();
        for dir in Dir::ALL {
            if dir == reverse {
                continue;
            }
            let (dx, dy) = dir.delta();
            if maze.is_walkable(self.x + dx, self.y + dy) {
                open.push(dir);
            }
        }
        if !open.is_empty() {
            let dir = open[rng.gen_range(0..open.len())];
            self.apply(dir, maze);
        }
    }

    /// Eaten ghosts head back to their spawn cell one axis at a time.
    /// Arriving revives them.
    fn home_step(&mut self, maze: &Maze) {
        if (self.x, self.y) == self.home {
            self.eaten = false;
            self.frightened = false;
            return;
        }
        let dx = self.home.0 - self.x;
        let dy = self.home.1 - self.y;
        if dx.abs() > dy.abs() {
            let step = dx.signum();
            if maze.is_walkable(self.x + step, self.y) {
                self.x = maze.wrap_x(self.x + step);
            }
        } else {
            let step = dy.signum();
            if maze.is_walkable(self.x, self.y + step) {
                self.y += step;
            }
        }
    }
}

struct PacmanGame {
    maze: Maze,
    player: Player,
    ghosts: Vec<Ghost>,
    score: u32,
    lives: u32,
    power_mode: bool,
    power_timer: f64,
    ghost_combo: usize,
    game_over: bool,
    level_complete: bool,
    rng: ChaCha8Rng,
}

impl PacmanGame {
    fn new(seed: u64) -> Self {
        let width = MAZE_LAYOUT[0].len() as i16;
        let height = MAZE_LAYOUT.len() as i16;
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        let mut dots = 0;
        let mut player_start = (0, 0);
        let mut ghost_starts = Vec::new();

        for (y, row) in MAZE_LAYOUT.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '#' => Cell::Wall,
                    '.' => {
                        dots += 1;
                        Cell::Dot
                    }
                    'O' => {
                        dots += 1;
                        Cell::Pellet
                    }
                    '-' => Cell::Gate,
                    'P' => {
                        player_start = (x as i16, y as i16);
                        Cell::Empty
                    }
                    'G' => {
                        ghost_starts.push((x as i16, y as i16));
                        Cell::Empty
                    }
                    _ => Cell::Empty,
                };
                cells.push(cell);
            }
        }

        // Four ghosts share the spawn cells, doubling up as needed.
        let ghost_colors = [Color::Red, Color::Magenta, Color::Cyan, Color::Green];
        let ghosts = (0..4)
            .map(|i| {
                let home = ghost_starts[i.min(ghost_starts.len() - 1)];
                Ghost::new(home, ghost_colors[i])
            })
            .collect();

        PacmanGame {
            maze: Maze {
                width,
                height,
                cells,
                dots_remaining: dots,
            },
            player: Player {
                start: player_start,
                x: player_start.0,
                y: player_start.1,
                dir: None,
                next_dir: None,
                move_timer: 0.0,
            },
            ghosts,
            score: 0,
            lives: 3,
            power_mode: false,
            power_timer: 0.0,
            ghost_combo: 0,
            game_over: false,
            level_complete: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn turn(&mut self, dir: Dir) {
        self.player.next_dir = Some(dir);
    }

    fn update(&mut self, dt: f64) {
        if self.game_over || self.level_complete {
            return;
        }

        self.player.move_timer += dt;
        if self.player.move_timer >= PACMAN_MOVE_DELAY {
            self.player.move_timer = 0.0;
            self.player.step(&self.maze);
        }

        let (gain, pellet) = self.maze.eat(self.player.x, self.player.y);
        self.score += gain;
        if pellet {
            self.power_mode = true;
            self.power_timer = POWER_DURATION;
            self.ghost_combo = 0;
            for ghost in &mut self.ghosts {
                if !ghost.eaten {
                    ghost.frightened = true;
                }
            }
        }

        if self.power_mode {
            self.power_timer -= dt;
            if self.power_timer <= 0.0 {
                self.power_mode = false;
                for ghost in &mut self.ghosts {
                    ghost.frightened = false;
                }
            }
        }

        let target = (self.player.x, self.player.y);
        for ghost in &mut self.ghosts {
            ghost.move_timer += dt;
            let delay = if ghost.frightened {
                GHOST_FRIGHTENED_DELAY
            } else {
                GHOST_MOVE_DELAY
            };
            if ghost.move_timer < delay {
                continue;
            }
            ghost.move_timer = 0.0;

            if ghost.eaten {
                ghost.home_step(&self.maze);
            } else if ghost.frightened {
                ghost.flee_step(&self.maze, &mut self.rng);
            } else {
                ghost.chase_step(target, &self.maze);
            }
        }

        self.check_collisions();

        if self.maze.dots_remaining == 0 {
            self.level_complete = true;
        }
    }

    fn check_collisions(&mut self) {
        let mut caught = false;
        for ghost in &mut self.ghosts {
            if (ghost.x, ghost.y) != (self.player.x, self.player.y) {
                continue;
            }
            if ghost.frightened && !ghost.eaten {
                ghost.eaten = true;
                ghost.frightened = false;
                self.score += GHOST_EATEN_SCORES[self.ghost_combo.min(3)];
                self.ghost_combo += 1;
            } else if !ghost.eaten {
                caught = true;
            }
        }
        if caught {
            self.lives -= 1;
            if self.lives == 0 {
                self.game_over = true;
            } else {
                self.reset_positions();
            }
        }
    }

    fn reset_positions(&mut self) {
        self.player.reset();
        for ghost in &mut self.ghosts {
            ghost.reset();
        }
        self.power_mode = false;
        self.power_timer = 0.0;
    }
}

pub fn run(seed: u64) -> io::Result<()> {
    let mut game = PacmanGame::new(seed);
    let _session = Session::enter()?;
    let mut screen = Screen::new()?;
    let mut paused = false;
    let mut last_frame = Instant::now();

    loop {
        if let Some(key) = console::poll_key(INPUT_POLL)? {
            match key {
                Key::Char('q') | Key::Char('Q') | Key::Esc | Key::CtrlC => return Ok(()),
                Key::Char('p') | Key::Char('P') => paused = !paused,
                _ if paused || game.game_over || game.level_complete => {}
                Key::Up | Key::Char('w') | Key::Char('W') => game.turn(Dir::Up),
                Key::Down | Key::Char('s') | Key::Char('S') => game.turn(Dir::Down),
                Key::Left | Key::Char('a') | Key::Char('A') => game.turn(Dir::Left),
                Key::Right | Key::Char('d') | Key::Char('D') => game.turn(Dir::Right),
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

const MAZE_LEFT: i32 = 2;
const MAZE_TOP: i32 = 2;

fn draw(screen: &mut Screen, game: &PacmanGame, paused: bool) {
    screen.clear();

    let ui = Style::new();
    screen.print(MAZE_LEFT, 0, "PAC-MAN", ui.bold());
    screen.print(20, 0, &format!("SCORE: {:05}", game.score), ui);
    screen.print(
        36,
        0,
        &format!("LIVES: {}", "● ".repeat(game.lives as usize)),
        Style::new().fg(Color::Yellow),
    );
    if game.power_mode {
        screen.print(
            20,
            1,
            &format!("POWER! {}s", game.power_timer as u32),
            Style::new().fg(Color::Blue).bold(),
        );
    }

    // Cells are two columns wide.
    for y in 0..game.maze.height {
        for x in 0..game.maze.width {
            let sx = MAZE_LEFT + x as i32 * 2;
            let sy = MAZE_TOP + y as i32;
            match game.maze.cell(x, y) {
                Cell::Wall => {
                    let style = Style::new().fg(Color::Blue);
                    screen.put(sx, sy, '█', style);
                    screen.put(sx + 1, sy, '█', style);
                }
                Cell::Dot => screen.put(sx + 1, sy, '·', ui),
                Cell::Pellet => screen.put(sx + 1, sy, 'o', ui.bold()),
                Cell::Gate => {
                    screen.put(sx, sy, '─', ui);
                    screen.put(sx + 1, sy, '─', ui);
                }
                Cell::Empty => {}
            }
        }
    }

    for ghost in &game.ghosts {
        let sx = MAZE_LEFT + ghost.x as i32 * 2;
        let sy = MAZE_TOP + ghost.y as i32;
        if ghost.eaten {
            // Just the eyes heading home.
            let style = Style::new().fg(Color::White).bold();
            screen.put(sx, sy, '"', style);
            screen.put(sx + 1, sy, '"', style);
        } else if ghost.frightened {
            screen.put(sx + 1, sy, 'B', Style::new().fg(Color::Blue).bold());
        } else {
            screen.put(sx + 1, sy, 'G', Style::new().fg(ghost.color).bold());
        }
    }

    screen.put(
        MAZE_LEFT + game.player.x as i32 * 2 + 1,
        MAZE_TOP + game.player.y as i32,
        'C',
        Style::new().fg(Color::Yellow).bold(),
    );

    let msg_y = MAZE_TOP + game.maze.height as i32 + 1;
    screen.print(MAZE_LEFT, msg_y, "Arrows/WASD: Move  P: Pause  Q: Quit", ui.dim());

    if game.game_over {
        screen.print_centered(msg_y + 1, "GAME OVER! Press Q to quit", Style::new().fg(Color::Red).bold());
    } else if game.level_complete {
        screen.print_centered(
            msg_y + 1,
            "LEVEL COMPLETE! Press Q to quit",
            Style::new().fg(Color::Yellow).bold(),
        );
    } else if paused {
        screen.print_centered(msg_y + 1, "PAUSED - Press P to continue", ui.bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maze_layout_parses() {
        let game = PacmanGame::new(1);
        assert_eq!(game.maze.width, 20);
        assert_eq!(game.maze.height, 23);
        assert_eq!(game.player.start, (9, 17));
        assert_eq!(game.ghosts.len(), 4);
        assert_eq!(game.ghosts[0].home, (9, 11));
        assert_eq!(game.ghosts[1].home, (10, 11));
        assert!(game.maze.dots_remaining > 100);
    }

    #[test]
    fn test_eating_dot_scores_ten() {
        let mut game = PacmanGame::new(1);
        let before = game.maze.dots_remaining;

        // The cell left of the player start holds a dot.
        let (gain, pellet) = game.maze.eat(8, 17);
        assert_eq!(gain, 10);
        assert!(!pellet);
        assert_eq!(game.maze.dots_remaining, before - 1);

        // Eating the same cell twice yields nothing.
        let (gain, _) = game.maze.eat(8, 17);
        assert_eq!(gain, 0);
    }

    #[test]
    fn test_power_pellet_frightens_ghosts() {
        let mut game = PacmanGame::new(1);
        game.player.x = 1;
        game.player.y = 3;
        game.update(0.0);

        assert_eq!(game.score, 50);
        assert!(game.power_mode);
        assert!(game.ghosts.iter().all(|g| g.frightened));
    }

    #[test]
    fn test_power_mode_expires() {
        let mut game = PacmanGame::new(1);
        game.player.x = 1;
        game.player.y = 3;
        game.update(0.0);
        assert!(game.power_mode);

        game.update(POWER_DURATION + 0.1);

        assert!(!game.power_mode);
        assert!(game.ghosts.iter().all(|g| !g.frightened));
    }

    #[test]
    fn test_tunnel_wraps_player() {
        let game = PacmanGame::new(1);
        // Row 11 runs open to both edges.
        assert!(game.maze.is_walkable(0, 11));
        assert!(game.maze.is_walkable(-1, 11));
        assert_eq!(game.maze.wrap_x(-1), 19);
        assert_eq!(game.maze.wrap_x(20), 0);

        let mut player = Player {
            start: (0, 11),
            x: 0,
            y: 11,
            dir: Some(Dir::Left),
            next_dir: None,
            move_timer: 0.0,
        };
        player.step(&game.maze);
        assert_eq!((player.x, player.y), (19, 11));
    }

    #[test]
    fn test_chase_closes_manhattan_distance() {
        let game = PacmanGame::new(1);
        let mut ghost = Ghost::new((1, 4), Color::Red);
        ghost.dir = Dir::Down;
        let target = (18, 4);

        let before = (target.0 - ghost.x).abs() + (target.1 - ghost.y).abs();
        ghost.chase_step(target, &game.maze);
        let after = (target.0 - ghost.x).abs() + (target.1 - ghost.y).abs();

        assert!(after < before);
    }

    #[test]
    fn test_chase_never_reverses_with_options() {
        let game = PacmanGame::new(1);
        // Row 4 is a long corridor; a ghost moving right will not pick
        // left even when the target sits behind it.
        let mut ghost = Ghost::new((10, 4), Color::Red);
        ghost.dir = Dir::Right;
        ghost.chase_step((1, 4), &game.maze);
        assert_ne!((ghost.x, ghost.y), (9, 4));
    }

    #[test]
    fn test_eating_frightened_ghost_doubles_combo() {
        let mut game = PacmanGame::new(1);
        for ghost in &mut game.ghosts {
            ghost.frightened = true;
        }
        game.ghosts[0].x = game.player.x;
        game.ghosts[0].y = game.player.y;
        game.check_collisions();
        assert_eq!(game.score, 200);
        assert!(game.ghosts[0].eaten);

        game.ghosts[1].x = game.player.x;
        game.ghosts[1].y = game.player.y;
        game.check_collisions();
        assert_eq!(game.score, 600);
        assert_eq!(game.ghost_combo, 2);
    }

    #[test]
    fn test_ghost_contact_costs_a_life() {
        let mut game = PacmanGame::new(1);
        game.player.x = 1;
        game.player.y = 1;
        game.ghosts[0].x = 1;
        game.ghosts[0].y = 1;

        game.check_collisions();

        assert_eq!(game.lives, 2);
        assert!(!game.game_over);
        // Everyone returns to their spawn cells.
        assert_eq!((game.player.x, game.player.y), game.player.start);
        assert_eq!((game.ghosts[0].x, game.ghosts[0].y), game.ghosts[0].home);
    }

    #[test]
    fn test_last_life_is_game_over() {
        let mut game = PacmanGame::new(1);
        game.lives = 1;
        game.ghosts[0].x = game.player.x;
        game.ghosts[0].y = game.player.y;

        game.check_collisions();

        assert!(game.game_over);
    }

    #[test]
    fn test_eaten_ghost_walks_home_and_revives() {
        let game = PacmanGame::new(1);
        let mut ghost = Ghost::new((9, 11), Color::Red);
        ghost.eaten = true;
        ghost.x = 9;
        ghost.y = 12;

        // One step short of home keeps it eaten.
        ghost.home_step(&game.maze);
        assert_eq!((ghost.x, ghost.y), (9, 11));
        assert!(ghost.eaten);

        // Arrival is noticed on the next step.
        ghost.home_step(&game.maze);
        assert!(!ghost.eaten);
    }

    #[test]
    fn test_clearing_all_dots_completes_level() {
        let mut game = PacmanGame::new(1);
        for cell in &mut game.maze.cells {
            if matches!(cell, Cell::Dot | Cell::Pellet) {
                *cell = Cell::Empty;
            }
        }
        game.maze.dots_remaining = 0;

        game.update(0.0);

        assert!(game.level_complete);
    }
}
