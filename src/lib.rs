//! Terminal Snake.
//!
//! A single-player grid snake with pause/restart, a pause-aware stopwatch,
//! and a periodic point shop, split the classic way:
//! - game rules with no I/O (game module)
//! - key-to-intent translation (input module)
//! - read-only TUI projection (render module)
//! - session stopwatch and high score (metrics module)
//! - the async event loop tying them together (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
