use std::collections::BTreeSet;
use std::fmt;

use crate::levels::{Coord, Level, LevelSet, Tile};

/// A player movement intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The coordinate one step from `pos` in this direction.
    pub fn step(self, pos: Coord) -> Coord {
        let (dx, dy) = self.delta();
        Coord::new(pos.x + dx, pos.y + dy)
    }
}

/// Result of a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Player stepped onto empty floor.
    Moved,
    /// Player stepped forward and displaced a box.
    Pushed,
    /// The move was geometrically illegal; nothing changed.
    Blocked,
}

/// Result of an undo request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    Undone,
    NothingToUndo,
}

/// Result of a next-level request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Advanced,
    NotSolved,
    NoMoreLevels,
}

/// Requested level index is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLevelIndex {
    pub index: usize,
    pub level_count: usize,
}

impl fmt::Display for InvalidLevelIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "level index {} out of range (pack contains {} levels)",
            self.index, self.level_count
        )
    }
}

/// By-value copy of the mutable engine state, recorded before every
/// successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    player: Coord,
    boxes: BTreeSet<Coord>,
    move_count: u32,
    push_count: u32,
}

/// The box-pushing puzzle engine.
///
/// Owns the current board state and move history for one level session;
/// the level set itself is read-only. All operations are synchronous,
/// in-memory, and non-fatal: illegal intents are reported as outcome
/// variants and leave the state untouched.
pub struct Engine {
    levels: LevelSet,
    level_index: usize,
    player: Coord,
    boxes: BTreeSet<Coord>,
    move_count: u32,
    push_count: u32,
    history: Vec<Snapshot>,
}

impl Engine {
    /// Create an engine over a level set, with the first level loaded.
    pub fn new(levels: LevelSet) -> Self {
        let mut engine = Engine {
            levels,
            level_index: 0,
            player: Coord::new(0, 0),
            boxes: BTreeSet::new(),
            move_count: 0,
            push_count: 0,
            history: Vec::new(),
        };
        // A LevelSet is non-empty by construction, so index 0 is valid.
        engine.apply_level(0);
        engine
    }

    fn level(&self) -> &Level {
        self.levels.get(self.level_index).unwrap_or_else(|| {
            unreachable!("current level index is valid by construction")
        })
    }

    fn apply_level(&mut self, index: usize) {
        let level = self.levels.get(index).unwrap_or_else(|| {
            unreachable!("apply_level called with validated index")
        });
        self.player = level.player();
        self.boxes = level.boxes().clone();
        self.level_index = index;
        self.move_count = 0;
        self.push_count = 0;
        self.history.clear();
    }

    /// Load a level by index, resetting counters and history. Fails with
    /// no side effect if the index is out of range.
    pub fn load_level(&mut self, index: usize) -> Result<(), InvalidLevelIndex> {
        if index >= self.levels.len() {
            return Err(InvalidLevelIndex {
                index,
                level_count: self.levels.len(),
            });
        }
        self.apply_level(index);
        Ok(())
    }

    /// Attempt to move the player one cell.
    ///
    /// Stepping into a wall, pushing a box into a wall, or pushing a box
    /// into another box all leave the state unchanged and return
    /// [`MoveOutcome::Blocked`]. Successful moves record a history
    /// snapshot first.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveOutcome {
        let dest = direction.step(self.player);
        if self.level().tile(dest) == Tile::Wall {
            return MoveOutcome::Blocked;
        }

        if self.boxes.contains(&dest) {
            let beyond = direction.step(dest);
            if self.level().tile(beyond) == Tile::Wall || self.boxes.contains(&beyond) {
                return MoveOutcome::Blocked;
            }
            self.push_snapshot();
            self.boxes.remove(&dest);
            self.boxes.insert(beyond);
            self.player = dest;
            self.move_count += 1;
            self.push_count += 1;
            MoveOutcome::Pushed
        } else {
            self.push_snapshot();
            self.player = dest;
            self.move_count += 1;
            MoveOutcome::Moved
        }
    }

    fn push_snapshot(&mut self) {
        self.history.push(Snapshot {
            player: self.player,
            boxes: self.boxes.clone(),
            move_count: self.move_count,
            push_count: self.push_count,
        });
    }

    /// Restore the state recorded before the most recent successful move.
    /// May revert a solved level back to unsolved.
    pub fn undo(&mut self) -> UndoOutcome {
        match self.history.pop() {
            Some(snapshot) => {
                self.player = snapshot.player;
                self.boxes = snapshot.boxes;
                self.move_count = snapshot.move_count;
                self.push_count = snapshot.push_count;
                UndoOutcome::Undone
            }
            None => UndoOutcome::NothingToUndo,
        }
    }

    /// Reload the current level, discarding all progress and history.
    pub fn restart(&mut self) {
        self.apply_level(self.level_index);
    }

    /// True iff the box set equals the target set exactly.
    pub fn is_solved(&self) -> bool {
        self.boxes == *self.level().targets()
    }

    /// Advance to the next level. Requires the current level to be solved
    /// and a next level to exist; otherwise a no-op.
    pub fn next_level(&mut self) -> AdvanceOutcome {
        if !self.is_solved() {
            return AdvanceOutcome::NotSolved;
        }
        if self.level_index + 1 >= self.levels.len() {
            return AdvanceOutcome::NoMoreLevels;
        }
        self.apply_level(self.level_index + 1);
        AdvanceOutcome::Advanced
    }

    pub fn width(&self) -> i16 {
        self.level().width()
    }

    pub fn height(&self) -> i16 {
        self.level().height()
    }

    /// The static tile at a coordinate; out-of-bounds reads as wall.
    pub fn tile(&self, pos: Coord) -> Tile {
        self.level().tile(pos)
    }

    pub fn player(&self) -> Coord {
        self.player
    }

    pub fn boxes(&self) -> &BTreeSet<Coord> {
        &self.boxes
    }

    pub fn targets(&self) -> &BTreeSet<Coord> {
        self.level().targets()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn push_count(&self) -> u32 {
        self.push_count
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn level_name(&self) -> Option<&str> {
        self.level().name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_from(text: &str) -> Engine {
        Engine::new(LevelSet::from_text(text).unwrap())
    }

    // Player at (1,1), box at (2,1), target at (3,1).
    const ONE_PUSH: &str = "####\n\
                            #@$.\n\
                            ####";

    #[test]
    fn test_push_onto_target_solves() {
        let mut engine = engine_from(ONE_PUSH);
        assert!(!engine.is_solved());

        let outcome = engine.attempt_move(Direction::Right);

        assert_eq!(outcome, MoveOutcome::Pushed);
        assert_eq!(engine.player(), Coord::new(2, 1));
        assert!(engine.boxes().contains(&Coord::new(3, 1)));
        assert!(engine.is_solved());
        assert_eq!(engine.move_count(), 1);
        assert_eq!(engine.push_count(), 1);
    }

    #[test]
    fn test_move_into_wall_blocked() {
        let mut engine = engine_from(ONE_PUSH);

        let outcome = engine.attempt_move(Direction::Left);

        assert_eq!(outcome, MoveOutcome::Blocked);
        assert_eq!(engine.player(), Coord::new(1, 1));
        assert_eq!(engine.move_count(), 0);
        assert_eq!(engine.push_count(), 0);
        assert_eq!(engine.undo(), UndoOutcome::NothingToUndo);
    }

    #[test]
    fn test_push_into_wall_blocked() {
        // Box directly against the right wall.
        let mut engine = engine_from(
            "#####\n\
             # @$#\n\
             # . #\n\
             #####",
        );
        let boxes_before = engine.boxes().clone();

        let outcome = engine.attempt_move(Direction::Right);

        assert_eq!(outcome, MoveOutcome::Blocked);
        assert_eq!(engine.player(), Coord::new(2, 1));
        assert_eq!(*engine.boxes(), boxes_before);
        assert_eq!(engine.move_count(), 0);
        assert_eq!(engine.push_count(), 0);
        assert_eq!(engine.undo(), UndoOutcome::NothingToUndo);
    }

    #[test]
    fn test_push_past_board_edge_blocked() {
        // Ragged row: the box sits on the last cell of its row, so the
        // cell beyond it is out of bounds.
        let mut engine = engine_from(
            "####\n\
             #.@$\n\
             ####",
        );

        assert_eq!(engine.attempt_move(Direction::Right), MoveOutcome::Blocked);
        assert_eq!(engine.player(), Coord::new(2, 1));
        assert_eq!(engine.move_count(), 0);
    }

    #[test]
    fn test_push_into_box_blocked() {
        // Two boxes in a row with one free cell beyond them.
        let mut engine = engine_from(
            "#######\n\
             #@$$ .#\n\
             #    .#\n\
             #######",
        );
        let boxes_before = engine.boxes().clone();

        let outcome = engine.attempt_move(Direction::Right);

        assert_eq!(outcome, MoveOutcome::Blocked);
        assert_eq!(engine.player(), Coord::new(1, 1));
        assert_eq!(*engine.boxes(), boxes_before);
        assert_eq!(engine.undo(), UndoOutcome::NothingToUndo);
    }

    #[test]
    fn test_plain_move_counts_no_push() {
        let mut engine = engine_from(
            "#####\n\
             #@  #\n\
             #$.##\n\
             #####",
        );

        assert_eq!(engine.attempt_move(Direction::Right), MoveOutcome::Moved);
        assert_eq!(engine.move_count(), 1);
        assert_eq!(engine.push_count(), 0);
    }

    #[test]
    fn test_box_count_invariant() {
        let mut engine = engine_from(
            "######\n\
             # $  #\n\
             #@$ .#\n\
             #   .#\n\
             ######",
        );
        let expected = engine.targets().len();

        for dir in [
            Direction::Right,
            Direction::Right,
            Direction::Up,
            Direction::Down,
            Direction::Left,
        ] {
            engine.attempt_move(dir);
            assert_eq!(engine.boxes().len(), expected);
        }
        engine.undo();
        assert_eq!(engine.boxes().len(), expected);
        engine.restart();
        assert_eq!(engine.boxes().len(), expected);
    }

    #[test]
    fn test_solved_requires_exact_set_equality() {
        // Two targets, one box already placed; the second box starts off
        // target.
        let mut engine = engine_from(
            "######\n\
             #@$.*#\n\
             ######",
        );
        assert!(!engine.is_solved());

        engine.attempt_move(Direction::Right);
        assert!(engine.is_solved());
    }

    #[test]
    fn test_undo_is_exact_inverse() {
        let mut engine = engine_from(
            "######\n\
             #    #\n\
             # $$ #\n\
             # @  #\n\
             # .. #\n\
             ######",
        );
        let initial_player = engine.player();
        let initial_boxes = engine.boxes().clone();

        let moves = [
            Direction::Right,
            Direction::Up,
            Direction::Left,
            Direction::Up,
        ];
        let mut successful = 0;
        for dir in moves {
            if engine.attempt_move(dir) != MoveOutcome::Blocked {
                successful += 1;
            }
        }
        assert!(successful > 0);

        for _ in 0..successful {
            assert_eq!(engine.undo(), UndoOutcome::Undone);
        }

        assert_eq!(engine.player(), initial_player);
        assert_eq!(*engine.boxes(), initial_boxes);
        assert_eq!(engine.move_count(), 0);
        assert_eq!(engine.push_count(), 0);
        assert_eq!(engine.undo(), UndoOutcome::NothingToUndo);
    }

    #[test]
    fn test_undo_reverts_solved_state() {
        let mut engine = engine_from(ONE_PUSH);

        engine.attempt_move(Direction::Right);
        assert!(engine.is_solved());

        assert_eq!(engine.undo(), UndoOutcome::Undone);
        assert!(!engine.is_solved());
        assert_eq!(engine.player(), Coord::new(1, 1));
        assert!(engine.boxes().contains(&Coord::new(2, 1)));
        assert_eq!(engine.move_count(), 0);
        assert_eq!(engine.push_count(), 0);
    }

    #[test]
    fn test_restart_restores_initial_state() {
        let mut engine = engine_from(
            "######\n\
             #@$ .#\n\
             ######",
        );
        let initial_player = engine.player();
        let initial_boxes = engine.boxes().clone();

        engine.attempt_move(Direction::Right);
        engine.attempt_move(Direction::Right);
        engine.restart();

        assert_eq!(engine.player(), initial_player);
        assert_eq!(*engine.boxes(), initial_boxes);
        assert_eq!(engine.move_count(), 0);
        assert_eq!(engine.push_count(), 0);
        assert_eq!(engine.undo(), UndoOutcome::NothingToUndo);
    }

    #[test]
    fn test_load_level_out_of_range() {
        let mut engine = engine_from(ONE_PUSH);

        engine.attempt_move(Direction::Right);
        let before_player = engine.player();

        let err = engine.load_level(5).unwrap_err();
        assert_eq!(err.index, 5);
        assert_eq!(err.level_count, 1);
        // No side effect on failure.
        assert_eq!(engine.player(), before_player);
        assert_eq!(engine.move_count(), 1);
    }

    #[test]
    fn test_next_level_requires_solve() {
        let pack = "####\n\
                    #@$.\n\
                    ####\n\
                    \n\
                    #####\n\
                    #@$.#\n\
                    #####\n";
        let mut engine = engine_from(pack);

        assert_eq!(engine.next_level(), AdvanceOutcome::NotSolved);
        assert_eq!(engine.level_index(), 0);

        engine.attempt_move(Direction::Right);
        assert_eq!(engine.next_level(), AdvanceOutcome::Advanced);
        assert_eq!(engine.level_index(), 1);
        assert_eq!(engine.move_count(), 0);
        assert_eq!(engine.undo(), UndoOutcome::NothingToUndo);

        engine.attempt_move(Direction::Right);
        assert!(engine.is_solved());
        assert_eq!(engine.next_level(), AdvanceOutcome::NoMoreLevels);
        assert_eq!(engine.level_index(), 1);
    }

    #[test]
    fn test_restart_allowed_mid_solve() {
        let mut engine = engine_from(ONE_PUSH);

        engine.attempt_move(Direction::Right);
        assert!(engine.is_solved());

        engine.restart();
        assert!(!engine.is_solved());
        assert_eq!(engine.player(), Coord::new(1, 1));
    }

    #[test]
    fn test_scenario_from_rows() {
        // rows ["####", "#@$.", "####"]: push right solves in one move.
        let mut engine = engine_from("####\n#@$.\n####");

        assert_eq!(engine.attempt_move(Direction::Right), MoveOutcome::Pushed);
        assert!(engine.boxes().contains(&Coord::new(3, 1)));
        assert_eq!(engine.player(), Coord::new(2, 1));
        assert!(engine.is_solved());
        assert_eq!(engine.move_count(), 1);
        assert_eq!(engine.push_count(), 1);
    }

    #[test]
    fn test_builtin_first_level_playable() {
        let mut engine = Engine::new(LevelSet::builtin());

        assert_eq!(engine.level_count(), 10);
        assert_eq!(engine.level_index(), 0);
        // Level 1: box at (2,3), player at (3,3), target at (2,4).
        // Walk around and push the box down onto the target.
        assert_eq!(engine.attempt_move(Direction::Up), MoveOutcome::Moved);
        assert_eq!(engine.attempt_move(Direction::Left), MoveOutcome::Moved);
        assert_eq!(engine.attempt_move(Direction::Down), MoveOutcome::Pushed);
        assert!(engine.is_solved());
    }
}
