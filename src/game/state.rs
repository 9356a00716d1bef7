use std::time::Duration;

use super::grid::{Cell, Grid};
use super::shop::Shop;
use super::snake::Snake;

/// What ended the round. The UI shows a generic game-over message either way;
/// the distinction exists for the engine and its tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    Wall,
    SelfHit,
}

/// Lifecycle of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    GameOver,
}

/// The full aggregate the game loop owns and mutates. The renderer only
/// reads it; the input handler never touches it directly.
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    /// `None` only when the board is full, which ends the round.
    pub food: Option<Cell>,
    pub score: u32,
    pub phase: Phase,
    pub cause: Option<CollisionKind>,
    /// Game-time instant at which the shield wears off, if one is active.
    pub shield_until: Option<Duration>,
    pub shop: Shop,
}

impl GameState {
    pub fn new(grid: Grid, snake: Snake, food: Option<Cell>, shop: Shop) -> Self {
        Self {
            grid,
            snake,
            food,
            score: 0,
            phase: Phase::Running,
            cause: None,
            shield_until: None,
            shop,
        }
    }

    pub fn offer_open(&self) -> bool {
        self.shop.open.is_some()
    }

    pub fn shield_active(&self, elapsed: Duration) -> bool {
        self.shield_until.is_some_and(|until| elapsed < until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;

    fn state() -> GameState {
        let grid = Grid::new(20, 20);
        let snake = Snake::new(grid.center(), Direction::Right, 3);
        GameState::new(grid, snake, Some(Cell::new(2, 2)), Shop::new(Duration::from_secs(60)))
    }

    #[test]
    fn fresh_state_is_running_with_zero_score() {
        let state = state();
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.cause, None);
        assert!(!state.offer_open());
    }

    #[test]
    fn shield_window() {
        let mut state = state();
        assert!(!state.shield_active(Duration::from_secs(5)));

        state.shield_until = Some(Duration::from_secs(10));
        assert!(state.shield_active(Duration::from_secs(9)));
        assert!(!state.shield_active(Duration::from_secs(10)));
    }
}
