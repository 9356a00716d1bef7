use std::time::{Duration, Instant};

/// Pause-aware stopwatch plus session stats.
///
/// The clock starts on the first accepted steering input after a (re)start
/// and only accrues while the game is actually running, so paused time and
/// time under the shop overlay do not count. Its reading is the timing
/// authority for the shield and the offer schedule.
pub struct GameMetrics {
    /// Game time accrued before the current running stretch.
    banked: Duration,
    /// Start of the current running stretch, `None` while stopped.
    running_since: Option<Instant>,
    /// Set once the first steering input has been accepted this round.
    started: bool,
    pub high_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            banked: Duration::ZERO,
            running_since: None,
            started: false,
            high_score: 0,
            games_played: 0,
        }
    }

    pub fn elapsed(&self) -> Duration {
        let running = self
            .running_since
            .map_or(Duration::ZERO, |since| since.elapsed());
        self.banked + running
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// First steering input of the round. Marks the clock as started but
    /// does not begin accrual; the caller resumes it only when the game is
    /// actually running, so a first move made while Paused stays at zero.
    pub fn start(&mut self) {
        self.started = true;
    }

    /// Stop accruing; banked time is kept. Idempotent.
    pub fn pause(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.banked += since.elapsed();
        }
    }

    /// Resume accruing. Does nothing before the round's first steering
    /// input. Idempotent.
    pub fn resume(&mut self) {
        if self.started && self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    /// Back to zero, waiting for the next first move.
    pub fn restart(&mut self) {
        self.banked = Duration::ZERO;
        self.running_since = None;
        self.started = false;
    }

    pub fn record_game_over(&mut self, final_score: u32) {
        self.pause();
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    /// Stopwatch reading as mm:ss.
    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed().as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_waits_for_the_first_move() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(metrics.elapsed(), Duration::ZERO);
        assert!(!metrics.started());

        // Resume before the first move must not start the clock either.
        metrics.resume();
        assert_eq!(metrics.elapsed(), Duration::ZERO);

        metrics.start();
        metrics.resume();
        std::thread::sleep(Duration::from_millis(30));
        assert!(metrics.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn starting_alone_does_not_accrue() {
        let mut metrics = GameMetrics::new();
        metrics.start();
        std::thread::sleep(Duration::from_millis(30));

        assert!(metrics.started());
        assert_eq!(metrics.elapsed(), Duration::ZERO);

        metrics.resume();
        std::thread::sleep(Duration::from_millis(20));
        assert!(metrics.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn paused_time_does_not_count() {
        let mut metrics = GameMetrics::new();
        metrics.start();
        metrics.resume();
        std::thread::sleep(Duration::from_millis(20));
        metrics.pause();

        let frozen = metrics.elapsed();
        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(metrics.elapsed(), frozen);

        metrics.resume();
        std::thread::sleep(Duration::from_millis(20));
        assert!(metrics.elapsed() > frozen);
    }

    #[test]
    fn restart_zeroes_the_clock() {
        let mut metrics = GameMetrics::new();
        metrics.start();
        metrics.resume();
        std::thread::sleep(Duration::from_millis(20));

        metrics.restart();
        assert_eq!(metrics.elapsed(), Duration::ZERO);
        assert!(!metrics.started());

        // Repeated restarts from the fresh state stay at zero.
        metrics.restart();
        assert_eq!(metrics.elapsed(), Duration::ZERO);
    }

    #[test]
    fn mm_ss_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.banked = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.banked = Duration::ZERO;
        assert_eq!(metrics.format_time(), "00:00");

        metrics.banked = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn high_score_only_goes_up() {
        let mut metrics = GameMetrics::new();

        metrics.record_game_over(10);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.record_game_over(5);
        assert_eq!(metrics.high_score, 10);

        metrics.record_game_over(15);
        assert_eq!(metrics.high_score, 15);
        assert_eq!(metrics.games_played, 3);
    }
}
