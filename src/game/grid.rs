use super::direction::Direction;
use super::snake::Snake;

/// One grid-aligned position, addressed by (column, row).
///
/// Coordinates are signed so that a head moved past an edge is representable
/// and can be judged out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighboring cell one step in `direction`.
    pub fn neighbor(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.step();
        self.offset(dx, dy)
    }
}

/// Fixed-size discrete coordinate space the game is played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.x < self.width as i32
            && cell.y >= 0
            && cell.y < self.height as i32
    }

    pub fn center(&self) -> Cell {
        Cell::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Cell::new(x, y)))
    }

    /// Cells not occupied by the snake body. Food is placed by a uniform
    /// random choice over this sequence.
    pub fn free_cells<'a>(&'a self, snake: &'a Snake) -> impl Iterator<Item = Cell> + 'a {
        self.cells().filter(move |cell| !snake.occupies(*cell))
    }
}
