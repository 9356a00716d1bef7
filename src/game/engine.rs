use std::time::Duration;

use rand::rngs::ThreadRng;
use rand::seq::IteratorRandom;

use super::config::GameConfig;
use super::direction::Direction;
use super::grid::{Cell, Grid};
use super::shop::{Offer, Shop};
use super::snake::Snake;
use super::state::{CollisionKind, GameState, Phase};

/// What one tick did, for the caller to react to (stopwatch, high score).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub ate_food: bool,
    pub collision: Option<CollisionKind>,
    /// A shop overlay opened this tick; the stopwatch must stop.
    pub offer_opened: bool,
    /// A stale overlay timed out this tick; `Some(resume)` says whether the
    /// stopwatch should start again.
    pub offer_auto_closed: Option<bool>,
}

/// Outcome of a shop purchase attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Effect applied and overlay closed; `resume` as for auto-close.
    Bought { resume: bool },
    /// Not enough points; the overlay stays up with a notice.
    Denied,
    /// No overlay is open.
    NoOffer,
}

/// Owns the rules: movement, collisions, food, scoring, and the shop.
/// The event loop drives it; the renderer never calls into it.
pub struct GameEngine {
    config: GameConfig,
    rng: ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// A fresh round: centered snake facing Right, random food, score 0,
    /// offer schedule restarted. Calling this on an already-fresh round
    /// produces the same snake, score, and phase again.
    pub fn reset(&mut self) -> GameState {
        let grid = Grid::new(self.config.grid_width, self.config.grid_height);
        let snake = Snake::new(grid.center(), Direction::Right, self.config.initial_snake_length);
        let food = self.spawn_food(&grid, &snake);
        let shop = Shop::new(self.config.offer_interval());
        GameState::new(grid, snake, food, shop)
    }

    /// One simulation step. `elapsed` is the stopwatch reading, which is the
    /// timing authority for the shield and the offer schedule. Ticks while
    /// Paused, after GameOver, or under an open overlay move nothing.
    pub fn tick(&mut self, state: &mut GameState, elapsed: Duration) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if let Some(until) = state.shield_until {
            if elapsed >= until {
                state.shield_until = None;
            }
        }

        if let Some(open) = &state.shop.open {
            if open.opened_at.elapsed() >= self.config.offer_timeout() {
                outcome.offer_auto_closed = self.close_offer(state);
            }
            return outcome;
        }

        if state.phase != Phase::Running {
            return outcome;
        }

        let new_head = state.snake.next_head();
        let eats = state.food == Some(new_head);
        let growing = eats || state.snake.pending_growth > 0;

        if !state.grid.in_bounds(new_head) {
            state.phase = Phase::GameOver;
            state.cause = Some(CollisionKind::Wall);
            outcome.collision = Some(CollisionKind::Wall);
            return outcome;
        }

        if state.snake.would_bite(new_head, growing) && !state.shield_active(elapsed) {
            state.phase = Phase::GameOver;
            state.cause = Some(CollisionKind::SelfHit);
            outcome.collision = Some(CollisionKind::SelfHit);
            return outcome;
        }

        if !eats && state.snake.pending_growth > 0 {
            state.snake.pending_growth -= 1;
        }
        state.snake.advance(growing);

        if eats {
            state.score += self.config.food_points;
            outcome.ate_food = true;
            state.food = self.spawn_food(&state.grid, &state.snake);
            if state.food.is_none() {
                // Board is full: nothing left to eat, the round is over.
                state.phase = Phase::GameOver;
            }
        }

        if state.shop.offer_due(elapsed) {
            state.shop.open_offer(self.config.offer_interval(), false);
            outcome.offer_opened = true;
        }

        outcome
    }

    /// Forward a steering input. Ignored after GameOver and under an open
    /// overlay; reversals are rejected by the snake itself. Returns whether
    /// the input was accepted, which is what starts the stopwatch.
    pub fn steer(&self, state: &mut GameState, direction: Direction) -> bool {
        if state.phase == Phase::GameOver || state.offer_open() {
            return false;
        }
        state.snake.steer(direction)
    }

    /// Running ↔ Paused. Returns the new phase, or `None` when ignored
    /// (after GameOver).
    pub fn toggle_pause(&self, state: &mut GameState) -> Option<Phase> {
        state.phase = match state.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::GameOver => return None,
        };
        Some(state.phase)
    }

    /// Spend points on an offer from the open overlay.
    pub fn buy(&mut self, state: &mut GameState, offer: Offer, elapsed: Duration) -> PurchaseOutcome {
        let Some(open) = &mut state.shop.open else {
            return PurchaseOutcome::NoOffer;
        };

        if state.score < offer.cost() {
            open.denied = Some(offer);
            return PurchaseOutcome::Denied;
        }

        state.score -= offer.cost();
        match offer {
            Offer::Grow => state.snake.pending_growth += self.config.grow_amount,
            Offer::Shield => {
                state.shield_until = Some(elapsed + self.config.shield_duration());
            }
        }

        let resume = self
            .close_offer(state)
            .unwrap_or(false);
        PurchaseOutcome::Bought { resume }
    }

    /// Dismiss the overlay. `Some(true)` means the game was not paused when
    /// the overlay appeared, so the stopwatch should resume.
    pub fn close_offer(&self, state: &mut GameState) -> Option<bool> {
        let open = state.shop.open.take()?;
        Some(!open.was_paused && state.phase == Phase::Running)
    }

    fn spawn_food(&mut self, grid: &Grid, snake: &Snake) -> Option<Cell> {
        grid.free_cells(snake).choose(&mut self.rng)
    }
}
