use crate::config::Settings;

use super::types::{Cell, Mode, Rect};

/// Fixed geometry of the playfield: grid size, tile size, start cell and
/// the obstacle block used by [`Mode::Obstacle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    tile_size: i32,
    start: Cell,
    obstacle: Rect,
}

impl Board {
    pub fn new(width: i32, height: i32, tile_size: i32, start: Cell, obstacle: Rect) -> Self {
        Self { width, height, tile_size, start, obstacle }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.grid_width(),
            settings.grid_height(),
            settings.tile_size,
            settings.start_cell,
            settings.obstacle_rect(),
        )
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn obstacle(&self) -> Rect {
        self.obstacle
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Torus wrap, applied to each axis independently.
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell::new(cell.x.rem_euclid(self.width), cell.y.rem_euclid(self.height))
    }

    pub fn hits_obstacle(&self, cell: Cell) -> bool {
        cell.to_rect(self.tile_size).intersects(&self.obstacle)
    }

    /// Cells food may never occupy under `mode`, regardless of the snake.
    pub fn is_blocked(&self, cell: Cell, mode: Mode) -> bool {
        mode.has_obstacle() && self.hits_obstacle(cell)
    }

    /// Every in-bounds cell not covered by `snake` or blocked, row by row.
    pub fn free_cells(&self, snake: &[Cell], mode: Mode) -> Vec<Cell> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Cell::new(x, y)))
            .filter(|c| !snake.contains(c) && !self.is_blocked(*c, mode))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::from_settings(&Settings::default())
    }

    #[test]
    fn test_contains() {
        let b = board();
        assert!(b.contains(Cell::new(0, 0)));
        assert!(b.contains(Cell::new(19, 19)));
        assert!(!b.contains(Cell::new(-1, 0)));
        assert!(!b.contains(Cell::new(0, 20)));
        assert!(!b.contains(Cell::new(20, 5)));
    }

    #[test]
    fn test_wrap_each_axis() {
        let b = board();
        assert_eq!(b.wrap(Cell::new(-1, 5)), Cell::new(19, 5));
        assert_eq!(b.wrap(Cell::new(20, 5)), Cell::new(0, 5));
        assert_eq!(b.wrap(Cell::new(5, -1)), Cell::new(5, 19));
        assert_eq!(b.wrap(Cell::new(5, 20)), Cell::new(5, 0));
        assert_eq!(b.wrap(Cell::new(7, 7)), Cell::new(7, 7));
    }

    #[test]
    fn test_obstacle_covers_center_block() {
        let b = board();
        let covered: Vec<Cell> = (0..20)
            .flat_map(|y| (0..20).map(move |x| Cell::new(x, y)))
            .filter(|c| b.hits_obstacle(*c))
            .collect();
        assert_eq!(covered.len(), 16);
        assert!(covered.iter().all(|c| (8..12).contains(&c.x) && (8..12).contains(&c.y)));
    }

    #[test]
    fn test_obstacle_only_blocks_in_obstacle_mode() {
        let b = board();
        let center = Cell::new(9, 9);
        assert!(b.is_blocked(center, Mode::Obstacle));
        assert!(!b.is_blocked(center, Mode::Classic));
        assert!(!b.is_blocked(center, Mode::Free));
    }

    #[test]
    fn test_free_cells_excludes_snake_and_obstacle() {
        let b = board();
        let snake = [Cell::new(5, 5), Cell::new(4, 5)];
        let classic = b.free_cells(&snake, Mode::Classic);
        assert_eq!(classic.len(), 400 - 2);
        let obstacle = b.free_cells(&snake, Mode::Obstacle);
        assert_eq!(obstacle.len(), 400 - 2 - 16);
        assert!(!obstacle.contains(&Cell::new(5, 5)));
        assert!(!obstacle.contains(&Cell::new(10, 10)));
    }

    #[test]
    fn test_free_cells_full_board() {
        let b = Board::new(2, 1, 20, Cell::new(0, 0), Rect::new(0, 0, 0, 0));
        let snake = [Cell::new(0, 0), Cell::new(1, 0)];
        assert!(b.free_cells(&snake, Mode::Classic).is_empty());
    }
}
