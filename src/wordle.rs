use std::collections::HashMap;
use std::io;

use crossterm::style::Color;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::console::{self, Key, Screen, Session, Style};
use crate::words::WORDS;

const WORD_LENGTH: usize = 5;
const MAX_ATTEMPTS: usize = 6;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Per-letter feedback on a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Feedback {
    /// Right letter, right position.
    Green,
    /// Right letter, wrong position.
    Yellow,
    /// Letter not in the word.
    Gray,
}

/// On-screen keyboard state. Only upgrades are applied: green sticks,
/// yellow never downgrades to gray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyState {
    Green,
    Yellow,
    Gray,
}

/// Score a guess against the target in two passes. Greens consume their
/// target letter first, so a repeated guess letter is only yellow while
/// unconsumed copies remain.
fn check_guess(guess: &str, target: &str) -> [Feedback; WORD_LENGTH] {
    let mut result = [Feedback::Gray; WORD_LENGTH];
    let mut target_chars: [Option<char>; WORD_LENGTH] = [None; WORD_LENGTH];
    let mut guess_chars: [Option<char>; WORD_LENGTH] = [None; WORD_LENGTH];
    for (i, (g, t)) in guess.chars().zip(target.chars()).enumerate() {
        guess_chars[i] = Some(g);
        target_chars[i] = Some(t);
    }

    for i in 0..WORD_LENGTH {
        if guess_chars[i] == target_chars[i] {
            result[i] = Feedback::Green;
            guess_chars[i] = None;
            target_chars[i] = None;
        }
    }
    for i in 0..WORD_LENGTH {
        let Some(g) = guess_chars[i] else { continue };
        if let Some(slot) = target_chars.iter_mut().find(|t| **t == Some(g)) {
            result[i] = Feedback::Yellow;
            *slot = None;
        }
    }
    result
}

struct WordleGame {
    target: &'static str,
    attempts: Vec<(String, [Feedback; WORD_LENGTH])>,
    current_guess: String,
    keyboard: HashMap<char, KeyState>,
    game_over: bool,
    won: bool,
    error: Option<&'static str>,
    rng: ChaCha8Rng,
}

impl WordleGame {
    fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let target = WORDS[rng.gen_range(0..WORDS.len())];
        WordleGame {
            target,
            attempts: Vec::new(),
            current_guess: String::new(),
            keyboard: HashMap::new(),
            game_over: false,
            won: false,
            error: None,
            rng,
        }
    }

    fn reset(&mut self) {
        self.target = WORDS[self.rng.gen_range(0..WORDS.len())];
        self.attempts.clear();
        self.current_guess.clear();
        self.keyboard.clear();
        self.game_over = false;
        self.won = false;
        self.error = None;
    }

    fn type_letter(&mut self, c: char) {
        if self.current_guess.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
            self.current_guess.push(c.to_ascii_uppercase());
            self.error = None;
        }
    }

    fn delete_letter(&mut self) {
        if self.current_guess.pop().is_some() {
            self.error = None;
        }
    }

    /// Submit the current guess. Words not in the dictionary show an
    /// error and do not consume an attempt.
    fn submit(&mut self) {
        if self.current_guess.len() != WORD_LENGTH {
            return;
        }
        if !WORDS.contains(&self.current_guess.as_str()) {
            self.error = Some("Not in word list! (use BACKSPACE to fix)");
            return;
        }

        let result = check_guess(&self.current_guess, self.target);
        self.update_keyboard(&self.current_guess.clone(), &result);
        let guess = std::mem::take(&mut self.current_guess);
        let won = guess == self.target;
        self.attempts.push((guess, result));

        if won {
            self.won = true;
            self.game_over = true;
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            self.game_over = true;
        }
    }

    fn update_keyboard(&mut self, guess: &str, result: &[Feedback; WORD_LENGTH]) {
        for (letter, feedback) in guess.chars().zip(result) {
            let entry = self.keyboard.get(&letter).copied();
            let new = match (feedback, entry) {
                (Feedback::Green, _) => KeyState::Green,
                (Feedback::Yellow, Some(KeyState::Green)) => KeyState::Green,
                (Feedback::Yellow, _) => KeyState::Yellow,
                (Feedback::Gray, None) => KeyState::Gray,
                (Feedback::Gray, Some(state)) => state,
            };
            self.keyboard.insert(letter, new);
        }
    }
}

pub fn run(seed: u64) -> io::Result<()> {
    let mut game = WordleGame::new(seed);
    let _session = Session::enter()?;
    let mut screen = Screen::new()?;

    loop {
        draw(&mut screen, &game);
        screen.present()?;

        match console::wait_key()? {
            Key::Char('q') | Key::Char('Q') | Key::Esc | Key::CtrlC if game.game_over => {
                return Ok(())
            }
            Key::Esc | Key::CtrlC => return Ok(()),
            Key::Char('n') | Key::Char('N') if game.game_over => game.reset(),
            _ if game.game_over => {}
            Key::Char(c) => game.type_letter(c),
            Key::Backspace => game.delete_letter(),
            Key::Enter => game.submit(),
            _ => {}
        }
    }
}

fn feedback_style(feedback: Feedback) -> Style {
    match feedback {
        Feedback::Green => Style::new().fg(Color::Black).bg(Color::Green).bold(),
        Feedback::Yellow => Style::new().fg(Color::Black).bg(Color::Yellow).bold(),
        Feedback::Gray => Style::new().fg(Color::White).dim(),
    }
}

fn draw(screen: &mut Screen, game: &WordleGame) {
    screen.clear();

    let ui = Style::new();
    screen.print_centered(1, "W O R D L E", ui.bold());

    let cell_width = 4;
    let start_y = 3;
    let x_offset = (screen.width() as i32 - (WORD_LENGTH * cell_width) as i32) / 2;

    for row in 0..MAX_ATTEMPTS {
        let y = start_y + row as i32 * 2;
        if let Some((guess, result)) = game.attempts.get(row) {
            for (i, (letter, feedback)) in guess.chars().zip(result).enumerate() {
                let x = x_offset + (i * cell_width) as i32;
                let style = feedback_style(*feedback);
                screen.put(x, y, ' ', style);
                screen.put(x + 1, y, letter, style);
                screen.put(x + 2, y, ' ', style);
            }
        } else if row == game.attempts.len() && !game.game_over {
            let typed: Vec<char> = game.current_guess.chars().collect();
            for i in 0..WORD_LENGTH {
                let x = x_offset + (i * cell_width) as i32;
                match typed.get(i) {
                    Some(&letter) => screen.put(x + 1, y, letter, ui.reverse()),
                    None => screen.put(x + 1, y, '_', ui.dim()),
                }
            }
        } else {
            for i in 0..WORD_LENGTH {
                let x = x_offset + (i * cell_width) as i32;
                screen.put(x + 1, y, '_', ui.dim());
            }
        }
    }

    // Keyboard rows, staggered like the real thing.
    let keyboard_y = start_y + MAX_ATTEMPTS as i32 * 2 + 1;
    for (row_idx, row) in KEYBOARD_ROWS.iter().enumerate() {
        let y = keyboard_y + row_idx as i32;
        let x_pos = (screen.width() as i32 - row.len() as i32 * 2) / 2 + row_idx as i32 * 2;
        for (col, letter) in row.chars().enumerate() {
            let x = x_pos + col as i32 * 2;
            match game.keyboard.get(&letter) {
                Some(KeyState::Green) => {
                    screen.put(x, y, letter, feedback_style(Feedback::Green))
                }
                Some(KeyState::Yellow) => {
                    screen.put(x, y, letter, feedback_style(Feedback::Yellow))
                }
                Some(KeyState::Gray) => screen.put(x, y, 'x', ui.dim()),
                None => screen.put(x, y, letter, ui),
            }
        }
    }

    let inst_y = keyboard_y + 4;
    if game.game_over {
        let msg = if game.won {
            format!("★ YOU WIN! The word was {}", game.target)
        } else {
            format!("Game over! The word was {}", game.target)
        };
        screen.print_centered(inst_y, &msg, ui.bold());
        screen.print_centered(inst_y + 1, "Press N for new game, Q to quit", ui.dim());
    } else {
        screen.print_centered(inst_y, "Type your guess and press ENTER", ui.dim());
        screen.print_centered(inst_y + 1, "BACKSPACE: Delete  ESC: Quit", ui.dim());
        if let Some(error) = game.error {
            screen.print_centered(inst_y + 2, error, Style::new().fg(Color::Red));
        }
    }
}
