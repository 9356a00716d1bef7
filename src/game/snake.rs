use super::direction::Direction;
use super::grid::Cell;

/// The snake: body cells with the head at index 0, plus steering state.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, head first.
    pub body: Vec<Cell>,
    /// Direction of the most recent move.
    pub direction: Direction,
    /// Steering input waiting to be applied at the next advance.
    pub pending_direction: Option<Direction>,
    /// Number of upcoming advances that skip tail removal (shop growth).
    pub pending_growth: usize,
}

impl Snake {
    /// A straight snake of `length` cells with its head at `head`, laid out
    /// opposite to its facing so the first move is forward.
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.step();
        let body = (0..length as i32)
            .map(|i| head.offset(-dx * i, -dy * i))
            .collect();

        Self {
            body,
            direction,
            pending_direction: None,
            pending_growth: 0,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Store a steering input for the next advance. Reversals are judged
    /// against the direction actually moved last, not an earlier pending
    /// input, so two quick keypresses cannot fold the snake onto itself.
    /// Returns whether the input was accepted.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.direction.is_reverse_of(direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    /// The cell the head would enter on the next advance, with any pending
    /// steering taken into account.
    pub fn next_head(&self) -> Cell {
        let direction = self.pending_direction.unwrap_or(self.direction);
        self.head().neighbor(direction)
    }

    /// Whether entering `cell` would hit the body. The tail cell is vacated
    /// on a non-growing advance and is not an obstacle then; on a growing
    /// advance it stays put and is.
    pub fn would_bite(&self, cell: Cell, growing: bool) -> bool {
        let obstacles = if growing {
            &self.body[..]
        } else {
            &self.body[..self.body.len() - 1]
        };
        obstacles.contains(&cell)
    }

    /// Commit one move: apply pending steering, prepend the new head, and
    /// drop the tail unless this advance grows the snake.
    pub fn advance(&mut self, growing: bool) -> Cell {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
        let new_head = self.head().neighbor(self.direction);
        self.body.insert(0, new_head);
        if !growing {
            self.body.pop();
        }
        new_head
    }
}
