use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// A grid coordinate, stored and compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Coord {
    pub x: i16,
    pub y: i16,
}

impl Coord {
    pub fn new(x: i16, y: i16) -> Self {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A static board cell. Boxes, targets, and the player are tracked
/// separately from the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
}

/// Error type for level parsing and loading.
#[derive(Debug)]
pub enum LevelError {
    /// IO error when reading from file
    Io(io::Error),
    /// Invalid level content
    InvalidLevel(String),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Io(err) => write!(f, "IO error: {}", err),
            LevelError::InvalidLevel(msg) => write!(f, "Invalid level: {}", msg),
        }
    }
}

impl From<io::Error> for LevelError {
    fn from(err: io::Error) -> Self {
        LevelError::Io(err)
    }
}

impl From<String> for LevelError {
    fn from(err: String) -> Self {
        LevelError::InvalidLevel(err)
    }
}

/// An immutable, validated Sokoban level.
///
/// Invariants guaranteed after parsing: exactly one player start, at least
/// one box, and exactly as many targets as boxes. Ragged rows are padded
/// with floor to the widest row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    name: Option<String>,
    width: i16,
    height: i16,
    tiles: Vec<Tile>,
    player: Coord,
    boxes: BTreeSet<Coord>,
    targets: BTreeSet<Coord>,
}

impl Level {
    /// Parse a single level from text rows.
    ///
    /// Glyphs:
    /// - `#` = wall
    /// - ` ` = floor
    /// - `.` = target
    /// - `$` = box
    /// - `*` = box on target
    /// - `@` = player
    /// - `+` = player on target
    pub fn from_text(name: Option<String>, text: &str) -> Result<Self, LevelError> {
        let lines: Vec<&str> = text.lines().collect();

        if lines.is_empty() {
            return Err(LevelError::InvalidLevel("empty level".to_string()));
        }

        let height = lines.len();
        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);

        let mut tiles = vec![Tile::Floor; width * height];
        let mut player = None;
        let mut boxes = BTreeSet::new();
        let mut targets = BTreeSet::new();

        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let pos = Coord::new(x as i16, y as i16);
                match ch {
                    '#' => tiles[y * width + x] = Tile::Wall,
                    ' ' => {}
                    '.' => {
                        targets.insert(pos);
                    }
                    '$' => {
                        boxes.insert(pos);
                    }
                    '*' => {
                        boxes.insert(pos);
                        targets.insert(pos);
                    }
                    '@' => {
                        if player.is_some() {
                            return Err(LevelError::InvalidLevel(
                                "multiple players found".to_string(),
                            ));
                        }
                        player = Some(pos);
                    }
                    '+' => {
                        if player.is_some() {
                            return Err(LevelError::InvalidLevel(
                                "multiple players found".to_string(),
                            ));
                        }
                        player = Some(pos);
                        targets.insert(pos);
                    }
                    _ => {
                        return Err(LevelError::InvalidLevel(format!(
                            "invalid character '{}' at position ({}, {})",
                            ch, x, y
                        )));
                    }
                }
            }
        }

        let player = player
            .ok_or_else(|| LevelError::InvalidLevel("no player found".to_string()))?;

        if boxes.is_empty() {
            return Err(LevelError::InvalidLevel("no boxes found".to_string()));
        }
        if boxes.len() != targets.len() {
            return Err(LevelError::InvalidLevel(format!(
                "target count ({}) does not match box count ({})",
                targets.len(),
                boxes.len()
            )));
        }

        Ok(Level {
            name,
            width: width as i16,
            height: height as i16,
            tiles,
            player,
            boxes,
            targets,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn width(&self) -> i16 {
        self.width
    }

    pub fn height(&self) -> i16 {
        self.height
    }

    /// Get the static tile at a coordinate. Out-of-bounds coordinates
    /// read as walls.
    pub fn tile(&self, pos: Coord) -> Tile {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            return Tile::Wall;
        }
        self.tiles[pos.y as usize * self.width as usize + pos.x as usize]
    }

    pub fn player(&self) -> Coord {
        self.player
    }

    pub fn boxes(&self) -> &BTreeSet<Coord> {
        &self.boxes
    }

    pub fn targets(&self) -> &BTreeSet<Coord> {
        &self.targets
    }
}

/// An immutable collection of levels, passed into the engine at
/// construction. Guaranteed non-empty.
#[derive(Debug)]
pub struct LevelSet {
    levels: Vec<Level>,
}

/// The ten built-in levels, ordered from tutorial to challenge.
const BUILTIN_PACK: &str = "\
; Level 1
  ####
###  #
#    #
# $@ #
# .  #
######

; Level 2
#####
#   #
#$  #
# $@#
#. .#
#####

; Level 3
######
#    #
# $$ #
# @  #
# .. #
######

; Level 4
 #####
 #   #
## # #
#  $ #
# @$ #
# .. #
######

; Level 5
######
#    #
# $  #
# $  #
#. . #
#  @ #
######

; Level 6
 #####
##   #
# $$ ##
# @   #
# . . #
#######

; Level 7
#######
#     #
# $@$ #
#  #  #
# . . #
#######

; Level 8
 ######
##    #
# $$  #
# $   #
#. .  #
#  .@ #
#######

; Level 9
  #####
###   #
#  $  #
# $$  ##
# . .  #
## .@  #
 ######

; Level 10
 ######
##    #
# $$  #
# $   #
# .#. #
##. @ #
 ######
";

impl LevelSet {
    /// The built-in level pack.
    pub fn builtin() -> Self {
        Self::from_text(BUILTIN_PACK).expect("built-in level pack is valid")
    }

    /// Parse a multi-level pack from text.
    ///
    /// Levels are separated by blank lines. Lines starting with `;` are
    /// comments; a comment directly before a level titles it.
    pub fn from_text(contents: &str) -> Result<Self, LevelError> {
        let mut levels = Vec::new();
        let mut current = String::new();
        let mut pending_name: Option<String> = None;

        let mut flush = |current: &mut String,
                         pending_name: &mut Option<String>,
                         levels: &mut Vec<Level>|
         -> Result<(), LevelError> {
            if !current.is_empty() {
                let level = Level::from_text(pending_name.take(), current.trim_end())?;
                levels.push(level);
                current.clear();
            }
            Ok(())
        };

        for line in contents.lines() {
            if let Some(comment) = line.trim_start().strip_prefix(';') {
                flush(&mut current, &mut pending_name, &mut levels)?;
                let comment = comment.trim();
                if !comment.is_empty() {
                    pending_name = Some(comment.to_string());
                }
                continue;
            }

            if line.trim().is_empty() {
                flush(&mut current, &mut pending_name, &mut levels)?;
                continue;
            }

            current.push_str(line);
            current.push('\n');
        }

        flush(&mut current, &mut pending_name, &mut levels)?;

        if levels.is_empty() {
            return Err(LevelError::InvalidLevel(
                "no levels found in pack".to_string(),
            ));
        }

        Ok(LevelSet { levels })
    }

    /// Parse a level pack from a text file.
    pub fn from_file(path: &Path) -> Result<Self, LevelError> {
        let contents = fs::read_to_string(path)?;
        Self::from_text(&contents)
    }

    /// Get the nth level (0-indexed).
    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    /// Get the number of levels. Always at least 1.
    pub fn len(&self) -> usize {
        self.levels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_level() {
        let input = "####\n\
                     #@$.#\n\
                     ####";
        let level = Level::from_text(None, input).unwrap();

        assert_eq!(level.width(), 5);
        assert_eq!(level.height(), 3);
        assert_eq!(level.player(), Coord::new(1, 1));
        assert!(level.boxes().contains(&Coord::new(2, 1)));
        assert!(level.targets().contains(&Coord::new(3, 1)));
        assert_eq!(level.tile(Coord::new(0, 0)), Tile::Wall);
        assert_eq!(level.tile(Coord::new(1, 1)), Tile::Floor);
    }

    #[test]
    fn test_parse_all_glyphs() {
        // One of each: wall, floor, target, box, box-on-target,
        // player-on-target.
        let input = "#####\n\
                     #+* #\n\
                     #$. #\n\
                     #####";
        let level = Level::from_text(None, input).unwrap();

        assert_eq!(level.player(), Coord::new(1, 1));
        assert_eq!(level.boxes().len(), 2);
        assert_eq!(level.targets().len(), 3);
        assert!(level.targets().contains(&Coord::new(1, 1)));
        assert!(level.targets().contains(&Coord::new(2, 1)));
        assert!(level.boxes().contains(&Coord::new(2, 1)));
    }

    #[test]
    fn test_ragged_rows_pad_with_floor() {
        let input = "####\n\
                     #@$.#\n\
                     ######";
        let level = Level::from_text(None, input).unwrap();

        assert_eq!(level.width(), 6);
        // Cells past the end of a short row read as floor.
        assert_eq!(level.tile(Coord::new(5, 1)), Tile::Floor);
        assert_eq!(level.tile(Coord::new(4, 0)), Tile::Floor);
    }

    #[test]
    fn test_out_of_bounds_is_wall() {
        let input = "####\n\
                     #@$.#\n\
                     #####";
        let level = Level::from_text(None, input).unwrap();

        assert_eq!(level.tile(Coord::new(-1, 0)), Tile::Wall);
        assert_eq!(level.tile(Coord::new(0, -1)), Tile::Wall);
        assert_eq!(level.tile(Coord::new(99, 1)), Tile::Wall);
        assert_eq!(level.tile(Coord::new(1, 99)), Tile::Wall);
    }

    #[test]
    fn test_no_player() {
        let input = "####\n\
                     #$.#\n\
                     ####";
        let result = Level::from_text(None, input);
        assert!(matches!(result, Err(LevelError::InvalidLevel(_))));
    }

    #[test]
    fn test_multiple_players() {
        let input = "#####\n\
                     #@@$#\n\
                     #.  #\n\
                     #####";
        assert!(Level::from_text(None, input).is_err());
    }

    #[test]
    fn test_count_mismatch() {
        let more_targets = "####\n\
                            #..#\n\
                            #$@#\n\
                            ####";
        assert!(Level::from_text(None, more_targets).is_err());

        let more_boxes = "####\n\
                          #$$#\n\
                          #.@#\n\
                          ####";
        assert!(Level::from_text(None, more_boxes).is_err());
    }

    #[test]
    fn test_no_boxes() {
        let input = "####\n\
                     #@ #\n\
                     ####";
        assert!(Level::from_text(None, input).is_err());
    }

    #[test]
    fn test_unknown_glyph() {
        let input = "####\n\
                     #@X#\n\
                     ####";
        let result = Level::from_text(None, input);
        assert!(matches!(result, Err(LevelError::InvalidLevel(_))));
    }

    #[test]
    fn test_multi_level_pack_with_comments() {
        let pack = "; First\n\
                    ####\n\
                    #@$.#\n\
                    ####\n\
                    \n\
                    ; Second\n\
                    #####\n\
                    #@$.#\n\
                    #####\n";
        let set = LevelSet::from_text(pack).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap().name(), Some("First"));
        assert_eq!(set.get(1).unwrap().name(), Some("Second"));
        assert_eq!(set.get(0).unwrap().width(), 5);
        assert_eq!(set.get(1).unwrap().width(), 5);
    }

    #[test]
    fn test_empty_pack() {
        assert!(LevelSet::from_text("").is_err());
        assert!(LevelSet::from_text("; only comments\n\n").is_err());
    }

    #[test]
    fn test_invalid_level_in_pack() {
        let pack = "####\n\
                    #@$.#\n\
                    ####\n\
                    \n\
                    ####\n\
                    #@@#\n\
                    ####\n";
        assert!(LevelSet::from_text(pack).is_err());
    }

    #[test]
    fn test_from_file_no_file() {
        let result = LevelSet::from_file(Path::new("nonexistent_file.xsb"));
        assert!(matches!(result, Err(LevelError::Io(_))));
    }

    #[test]
    fn test_builtin_pack() {
        let set = LevelSet::builtin();
        assert_eq!(set.len(), 10);

        for i in 0..set.len() {
            let level = set.get(i).unwrap();
            assert!(!level.boxes().is_empty(), "level {} has no boxes", i + 1);
            assert_eq!(level.boxes().len(), level.targets().len());
            assert_eq!(level.name(), Some(format!("Level {}", i + 1).as_str()));
        }
    }
}
