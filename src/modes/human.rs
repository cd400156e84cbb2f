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
use tokio::time::{MissedTickBehavior, interval};
use tracing::{error, info};

use crate::game::{GameConfig, Session, SessionStatus};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Keyboard play in the terminal
///
/// One session tick per frame; the session's own gating decides when the
/// snake actually moves. Raw mode delivers Ctrl+C as a key event.
pub struct HumanMode {
    config: GameConfig,
    session: Session,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    frame_duration: Duration,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, frame_duration: Duration) -> Result<Self> {
        let session = Session::new(&config).context("Failed to start game session")?;

        Ok(Self {
            config,
            session,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            frame_duration: frame_duration.max(Duration::from_millis(1)),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut frame_timer = interval(self.frame_duration);
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.quit(),
                    }
                }

                _ = frame_timer.tick() => {
                    self.advance();
                    let snapshot = self.session.snapshot();
                    self.metrics.update(snapshot.status);
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &self.metrics);
                    }).context("Failed to draw frame")?;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Turn(direction) => {
                self.session.request_direction(direction);
            }
            KeyAction::Restart => self.restart(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    fn advance(&mut self) {
        let result = self.session.tick();
        if result.terminated {
            self.metrics.on_game_over(self.session.score(), result.status);
        }
    }

    fn restart(&mut self) {
        if self.session.status() == SessionStatus::Running {
            self.session.request_end();
            self.metrics
                .on_game_over(self.session.score(), SessionStatus::Ended);
        }
        // A fresh session; the seed, if any, replays the same food sequence
        match Session::new(&self.config) {
            Ok(session) => {
                self.session = session;
                self.metrics.on_game_start();
                info!("game restarted");
            }
            Err(err) => {
                error!(error = %err, "failed to restart session");
                self.should_quit = true;
            }
        }
    }

    fn quit(&mut self) {
        self.session.request_end();
        self.should_quit = true;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
