use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for one game. The grid size is a fixed default rather than a
/// user-facing knob; `small()` exists for tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    pub initial_snake_length: usize,
    /// Points awarded per food eaten.
    pub food_points: u32,
    /// In-game seconds between shop offers.
    pub offer_interval_secs: u64,
    /// Wall-clock seconds before an unanswered offer closes itself.
    pub offer_timeout_secs: u64,
    /// In-game seconds a purchased shield lasts.
    pub shield_duration_secs: u64,
    /// Segments added by the growth purchase.
    pub grow_amount: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            initial_snake_length: 3,
            food_points: 10,
            offer_interval_secs: 60,
            offer_timeout_secs: 12,
            shield_duration_secs: 10,
            grow_amount: 2,
        }
    }
}

impl GameConfig {
    /// A cramped grid for exercising collisions in tests.
    pub fn small() -> Self {
        Self {
            grid_width: 10,
            grid_height: 10,
            ..Default::default()
        }
    }

    pub fn offer_interval(&self) -> Duration {
        Duration::from_secs(self.offer_interval_secs)
    }

    pub fn offer_timeout(&self) -> Duration {
        Duration::from_secs(self.offer_timeout_secs)
    }

    pub fn shield_duration(&self) -> Duration {
        Duration::from_secs(self.shield_duration_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_and_scoring() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.food_points, 10);
    }

    #[test]
    fn durations() {
        let config = GameConfig::default();
        assert_eq!(config.offer_interval(), Duration::from_secs(60));
        assert_eq!(config.shield_duration(), Duration::from_secs(10));
    }
}
