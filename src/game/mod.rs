//! Game rules: the grid, the snake, the tick engine, and the point shop.
//!
//! Everything here is plain in-memory state with no terminal or async
//! dependencies, so it is driven the same way by the event loop and by tests.

pub mod config;
pub mod direction;
pub mod engine;
pub mod grid;
pub mod shop;
pub mod snake;
pub mod state;

pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, PurchaseOutcome, TickOutcome};
pub use grid::{Cell, Grid};
pub use shop::{Offer, Shop};
pub use snake::Snake;
pub use state::{CollisionKind, GameState, Phase};
