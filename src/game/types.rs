use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Direction the snake head travels in. `y` grows downward.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// One tile of the grid, addressed in cell units.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Pixel rectangle covered by this tile.
    pub fn to_rect(self, tile_size: i32) -> Rect {
        Rect::new(self.x * tile_size, self.y * tile_size, tile_size, tile_size)
    }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Interiors overlap. Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// Ruleset picked in the menu, fixed for a whole play session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Walls kill.
    Classic,
    /// The grid wraps around like a torus.
    Free,
    /// Walls kill and a fixed block sits in the middle of the board.
    Obstacle,
}

impl Mode {
    pub fn all() -> [Mode; 3] {
        [Mode::Classic, Mode::Free, Mode::Obstacle]
    }

    pub fn walls_kill(self) -> bool {
        !matches!(self, Mode::Free)
    }

    pub fn has_obstacle(self) -> bool {
        matches!(self, Mode::Obstacle)
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Classic => "Classic",
            Mode::Free => "Free",
            Mode::Obstacle => "Obstacle",
        }
    }

    /// Digit shown next to the mode in the menu.
    pub fn menu_index(self) -> u8 {
        match self {
            Mode::Classic => 1,
            Mode::Free => 2,
            Mode::Obstacle => 3,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for Mode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Mode::Classic),
            2 => Ok(Mode::Free),
            3 => Ok(Mode::Obstacle),
            other => Err(other),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" | "1" => Ok(Mode::Classic),
            "free" | "2" => Ok(Mode::Free),
            "obstacle" | "3" => Ok(Mode::Obstacle),
            other => Err(format!("unknown mode '{other}', expected classic, free or obstacle")),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Lifecycle {
    Menu,
    Playing,
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }

    #[test]
    fn test_cell_offset() {
        let c = Cell::new(5, 5);
        assert_eq!(c.offset(Direction::Up), Cell::new(5, 4));
        assert_eq!(c.offset(Direction::Down), Cell::new(5, 6));
        assert_eq!(c.offset(Direction::Left), Cell::new(4, 5));
        assert_eq!(c.offset(Direction::Right), Cell::new(6, 5));
    }

    #[test]
    fn test_rect_touching_edges_do_not_intersect() {
        let obstacle = Rect::new(160, 160, 80, 80);
        // Tile (7, 8) ends exactly where the obstacle starts
        assert!(!Cell::new(7, 8).to_rect(20).intersects(&obstacle));
        assert!(Cell::new(8, 8).to_rect(20).intersects(&obstacle));
        assert!(Cell::new(11, 11).to_rect(20).intersects(&obstacle));
        assert!(!Cell::new(12, 11).to_rect(20).intersects(&obstacle));
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        let empty = Rect::new(0, 0, 0, 10);
        assert!(!empty.intersects(&Rect::new(0, 0, 10, 10)));
    }

    #[test]
    fn test_mode_from_menu_digit() {
        assert_eq!(Mode::try_from(1), Ok(Mode::Classic));
        assert_eq!(Mode::try_from(2), Ok(Mode::Free));
        assert_eq!(Mode::try_from(3), Ok(Mode::Obstacle));
        assert_eq!(Mode::try_from(0), Err(0));
        assert_eq!(Mode::try_from(4), Err(4));
        for mode in Mode::all() {
            assert_eq!(Mode::try_from(mode.menu_index()), Ok(mode));
        }
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("Free".parse::<Mode>(), Ok(Mode::Free));
        assert_eq!("obstacle".parse::<Mode>(), Ok(Mode::Obstacle));
        assert!("arcade".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mode_rules() {
        assert!(Mode::Classic.walls_kill());
        assert!(!Mode::Free.walls_kill());
        assert!(Mode::Obstacle.walls_kill());
        assert!(Mode::Obstacle.has_obstacle());
        assert!(!Mode::Classic.has_obstacle());
    }
}
