use std::time::{Duration, Instant};

/// What the point shop sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// Two extra segments, applied as pending growth over the next ticks.
    Grow,
    /// Self-collision immunity for a stretch of game time.
    Shield,
}

impl Offer {
    pub const ALL: [Offer; 2] = [Offer::Grow, Offer::Shield];

    pub fn cost(&self) -> u32 {
        match self {
            Offer::Grow => 20,
            Offer::Shield => 25,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Offer::Grow => "Grow +2",
            Offer::Shield => "Shield (10s)",
        }
    }

    /// Offer bound to a digit key while the overlay is open ('1', '2', ...).
    pub fn from_index(index: u8) -> Option<Offer> {
        match index {
            1 => Some(Offer::Grow),
            2 => Some(Offer::Shield),
            _ => None,
        }
    }
}

/// An offer overlay currently on screen. Gameplay and the stopwatch are
/// frozen while it is open.
#[derive(Debug, Clone)]
pub struct OpenOffer {
    /// Whether the player had already paused when the overlay appeared, so
    /// dismissal knows whether to resume.
    pub was_paused: bool,
    /// Wall-clock open time, for the auto-close timeout.
    pub opened_at: Instant,
    /// Last purchase refused for lack of points, for the on-screen notice.
    pub denied: Option<Offer>,
}

/// Offer scheduling state, driven by game time so pausing delays offers.
#[derive(Debug, Clone)]
pub struct Shop {
    /// Game-time threshold at which the next overlay opens.
    pub next_offer_at: Duration,
    pub open: Option<OpenOffer>,
}

impl Shop {
    pub fn new(interval: Duration) -> Self {
        Self {
            next_offer_at: interval,
            open: None,
        }
    }

    /// True when `elapsed` game time has crossed the threshold and no
    /// overlay is already up.
    pub fn offer_due(&self, elapsed: Duration) -> bool {
        self.open.is_none() && elapsed >= self.next_offer_at
    }

    pub fn open_offer(&mut self, interval: Duration, was_paused: bool) {
        // Step past the threshold so one long overlay cannot queue a burst
        // of back-to-back offers.
        self.next_offer_at += interval;
        self.open = Some(OpenOffer {
            was_paused,
            opened_at: Instant::now(),
            denied: None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_due_at_threshold() {
        let shop = Shop::new(Duration::from_secs(60));
        assert!(!shop.offer_due(Duration::from_secs(59)));
        assert!(shop.offer_due(Duration::from_secs(60)));
        assert!(shop.offer_due(Duration::from_secs(61)));
    }

    #[test]
    fn open_offer_advances_threshold() {
        let mut shop = Shop::new(Duration::from_secs(60));
        shop.open_offer(Duration::from_secs(60), false);

        assert_eq!(shop.next_offer_at, Duration::from_secs(120));
        assert!(!shop.offer_due(Duration::from_secs(61)));
        assert!(shop.open.is_some());
    }

    #[test]
    fn digit_bindings() {
        assert_eq!(Offer::from_index(1), Some(Offer::Grow));
        assert_eq!(Offer::from_index(2), Some(Offer::Shield));
        assert_eq!(Offer::from_index(3), None);
        assert_eq!(Offer::from_index(0), None);
    }

    #[test]
    fn costs() {
        assert_eq!(Offer::Grow.cost(), 20);
        assert_eq!(Offer::Shield.cost(), 25);
    }
}
