use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, GameEngine, GameState, Offer, Phase, PurchaseOutcome};
use crate::input::{InputHandler, Intent};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Delay between simulation ticks. The sole timing authority for movement;
/// there is no speed-up logic.
const TICK_INTERVAL: Duration = Duration::from_millis(100);
/// Redraw cadence (~30 fps), decoupled from the simulation.
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// Owns the event loop: one task multiplexing key events, the tick timer,
/// and the render timer. Key events become intents that are queued and
/// applied atomically at the start of the next tick, before the move, so a
/// tick never sees half-applied input. Only quit takes effect immediately.
pub struct App {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input: InputHandler,
    /// Intents accumulated since the previous tick.
    pending: Vec<Intent>,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            pending: Vec::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.event_loop(&mut terminal).await;

        self.restore_terminal(&mut terminal)?;

        result
    }

    async fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let mut events = EventStream::new();
        let mut tick_timer = interval(TICK_INTERVAL);
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                maybe_event = events.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = tick_timer.tick() => {
                    self.on_tick();
                }

                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Key releases are not input.
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input.translate(key) {
                Intent::Quit => self.should_quit = true,
                Intent::Ignored => {}
                intent => self.pending.push(intent),
            }
        }
    }

    /// One tick: drain the intent queue in arrival order, then advance the
    /// simulation.
    fn on_tick(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        for intent in pending {
            self.apply_intent(intent);
        }

        let outcome = self.engine.tick(&mut self.state, self.metrics.elapsed());

        if outcome.offer_opened {
            self.metrics.pause();
        }
        if outcome.offer_auto_closed == Some(true) {
            self.metrics.resume();
        }
        if self.state.phase == Phase::GameOver
            && (outcome.collision.is_some() || outcome.ate_food)
        {
            self.metrics.record_game_over(self.state.score);
        }
    }

    fn apply_intent(&mut self, intent: Intent) {
        match intent {
            Intent::Steer(direction) => {
                if self.engine.steer(&mut self.state, direction) {
                    self.metrics.start();
                    // Steering is accepted while Paused, but paused time
                    // must not count: the clock only runs once unpaused.
                    if self.state.phase == Phase::Running {
                        self.metrics.resume();
                    }
                }
            }
            Intent::TogglePause => {
                if self.state.offer_open() {
                    self.dismiss_offer();
                } else {
                    match self.engine.toggle_pause(&mut self.state) {
                        Some(Phase::Paused) => self.metrics.pause(),
                        Some(Phase::Running) => self.metrics.resume(),
                        _ => {}
                    }
                }
            }
            Intent::Restart => self.restart(),
            Intent::Select(index) => {
                if let Some(offer) = Offer::from_index(index) {
                    let elapsed = self.metrics.elapsed();
                    if let PurchaseOutcome::Bought { resume: true } =
                        self.engine.buy(&mut self.state, offer, elapsed)
                    {
                        self.metrics.resume();
                    }
                }
            }
            Intent::Dismiss => {
                if self.state.offer_open() {
                    self.dismiss_offer();
                } else {
                    // Esc outside the overlay quits.
                    self.should_quit = true;
                }
            }
            Intent::Quit => self.should_quit = true,
            Intent::Ignored => {}
        }
    }

    fn dismiss_offer(&mut self) {
        if self.engine.close_offer(&mut self.state) == Some(true) {
            self.metrics.resume();
        }
    }

    /// Restart is valid in any phase and idempotent.
    fn restart(&mut self) {
        self.state = self.engine.reset();
        self.metrics.restart();
    }

    fn restore_terminal(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    #[test]
    fn fresh_app_is_running_with_zero_score() {
        let app = App::new(GameConfig::default());
        assert_eq!(app.state.phase, Phase::Running);
        assert_eq!(app.state.score, 0);
        assert!(!app.metrics.started());
    }

    #[test]
    fn restart_resets_round_state() {
        let mut app = App::new(GameConfig::default());
        app.state.score = 40;
        app.state.phase = Phase::GameOver;
        app.metrics.start();

        app.restart();

        assert_eq!(app.state.score, 0);
        assert_eq!(app.state.phase, Phase::Running);
        assert!(!app.metrics.started());
        assert_eq!(app.metrics.elapsed(), Duration::ZERO);
    }

    #[test]
    fn queued_steer_applies_at_the_tick_and_starts_the_clock() {
        let mut app = App::new(GameConfig::default());
        let head = app.state.snake.head();
        app.pending.push(Intent::Steer(Direction::Down));

        app.on_tick();

        assert!(app.metrics.started());
        assert_eq!(app.state.snake.direction, Direction::Down);
        assert_ne!(app.state.snake.head(), head);
    }

    #[test]
    fn rejected_reversal_does_not_start_the_clock() {
        let mut app = App::new(GameConfig::default());
        // Initial direction is Right; Left is the reverse.
        app.pending.push(Intent::Steer(Direction::Left));

        app.on_tick();

        assert!(!app.metrics.started());
        assert_eq!(app.state.snake.direction, Direction::Right);
    }

    #[test]
    fn first_move_while_paused_keeps_the_clock_at_zero() {
        let mut app = App::new(GameConfig::default());
        app.pending.push(Intent::TogglePause);
        app.on_tick();

        app.pending.push(Intent::Steer(Direction::Down));
        app.on_tick();

        assert!(app.metrics.started());
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(app.metrics.elapsed(), Duration::ZERO);

        // Unpausing releases the clock.
        app.pending.push(Intent::TogglePause);
        app.on_tick();
        std::thread::sleep(Duration::from_millis(20));
        assert!(app.metrics.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn pause_intent_freezes_the_snake() {
        let mut app = App::new(GameConfig::default());
        app.pending.push(Intent::TogglePause);

        app.on_tick();
        let head = app.state.snake.head();
        app.on_tick();

        assert_eq!(app.state.phase, Phase::Paused);
        assert_eq!(app.state.snake.head(), head);
    }

    #[test]
    fn dismiss_without_overlay_quits() {
        let mut app = App::new(GameConfig::default());
        app.pending.push(Intent::Dismiss);

        app.on_tick();

        assert!(app.should_quit);
    }
}
