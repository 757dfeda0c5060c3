use std::io::{self, BufWriter, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

/// RAII guard for a full-screen terminal session.
///
/// Entering enables raw mode, switches to the alternate screen, and hides
/// the cursor. Dropping the guard restores the terminal, so it runs before
/// any error is printed to stderr.
pub struct Session {
    _private: (),
}

impl Session {
    pub fn enter() -> io::Result<Session> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(Session { _private: () })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = execute!(out, LeaveAlternateScreen, Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// Character style: colors plus a few attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub dim: bool,
    pub reverse: bool,
}

impl Style {
    pub fn new() -> Style {
        Style {
            fg: Color::Reset,
            bg: Color::Reset,
            bold: false,
            dim: false,
            reverse: false,
        }
    }

    pub fn fg(mut self, color: Color) -> Style {
        self.fg = color;
        self
    }

    pub fn bg(mut self, color: Color) -> Style {
        self.bg = color;
        self
    }

    pub fn bold(mut self) -> Style {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Style {
        self.dim = true;
        self
    }

    pub fn reverse(mut self) -> Style {
        self.reverse = true;
        self
    }
}

impl Default for Style {
    fn default() -> Style {
        Style::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    style: Style,
}

impl Cell {
    fn blank() -> Cell {
        Cell {
            ch: ' ',
            style: Style::new(),
        }
    }
}

/// Double-buffered screen of styled cells.
///
/// Games draw into the back buffer with [`put`](Screen::put) and
/// [`print`](Screen::print); [`present`](Screen::present) diffs against the
/// previously flushed frame and emits only what changed. Writes outside the
/// current size are clipped.
pub struct Screen {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    prev: Vec<Cell>,
}

impl Screen {
    pub fn new() -> io::Result<Screen> {
        let (width, height) = terminal::size()?;
        Ok(Screen::with_size(width, height))
    }

    fn with_size(width: u16, height: u16) -> Screen {
        let len = width as usize * height as usize;
        Screen {
            width,
            height,
            cells: vec![Cell::blank(); len],
            // Force a full first flush by making prev disagree everywhere.
            prev: vec![
                Cell {
                    ch: '\0',
                    style: Style::new(),
                };
                len
            ],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Clear the back buffer to blank cells.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::blank());
    }

    /// Draw a single character. Out-of-bounds coordinates are clipped.
    pub fn put(&mut self, x: i32, y: i32, ch: char, style: Style) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.cells[y as usize * self.width as usize + x as usize] = Cell { ch, style };
    }

    /// Draw a string starting at (x, y). Characters past the right edge
    /// are clipped.
    pub fn print(&mut self, x: i32, y: i32, text: &str, style: Style) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i as i32, y, ch, style);
        }
    }

    /// Draw a string centered horizontally on row y.
    pub fn print_centered(&mut self, y: i32, text: &str, style: Style) {
        let x = (self.width as i32 - text.chars().count() as i32) / 2;
        self.print(x, y, text, style);
    }

    /// Flush the back buffer to the terminal, emitting cursor moves and
    /// style changes only for cells that differ from the previous frame.
    pub fn present(&mut self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        let mut last_style: Option<Style> = None;
        let mut cursor: Option<(u16, u16)> = None;

        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y as usize * self.width as usize + x as usize;
                let cell = self.cells[idx];
                if cell == self.prev[idx] {
                    continue;
                }

                if cursor != Some((x, y)) {
                    queue!(out, MoveTo(x, y))?;
                }
                if last_style != Some(cell.style) {
                    apply_style(&mut out, cell.style)?;
                    last_style = Some(cell.style);
                }
                queue!(out, Print(cell.ch))?;
                cursor = Some((x + 1, y));
            }
        }

        queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
        out.flush()?;
        self.prev.copy_from_slice(&self.cells);
        Ok(())
    }
}

fn apply_style(out: &mut impl Write, style: Style) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(style.fg),
        SetBackgroundColor(style.bg)
    )?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if style.reverse {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Backspace,
    Esc,
    Char(char),
    CtrlC,
}

fn translate(key: KeyEvent) -> Option<Key> {
    // Raw mode disables the default SIGINT, so Ctrl-C must reach every
    // game loop as an explicit key.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') | KeyCode::Char('C') = key.code {
            return Some(Key::CtrlC);
        }
    }
    match key.code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Char(c) => Some(Key::Char(c)),
        _ => None,
    }
}

/// Wait up to `timeout` for a key press. Returns `Ok(None)` on timeout.
/// Repeat and release events are ignored.
pub fn poll_key(timeout: Duration) -> io::Result<Option<Key>> {
    let deadline = Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if !event::poll(remaining)? {
            return Ok(None);
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(key) = translate(key) {
                    return Ok(Some(key));
                }
            }
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
    }
}

/// Block until a key press arrives.
pub fn wait_key() -> io::Result<Key> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(key) = translate(key) {
                    return Ok(key);
                }
            }
        }
    }
}
