//! Main TUI application state and logic

use crate::algorithm::Family;
use crate::recorder::RecordError;
use crate::replay::{PlaybackState, TickOutcome};
use crate::session::Session;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    pub session: Session,

    /// Narration log scroll offset
    pub narration_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(session: Session) -> Self {
        App {
            session,
            narration_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            match self.session.tick(Instant::now()) {
                Some(TickOutcome::Applied) => {
                    self.status_message = "Playing...".to_string();
                    self.narration_scroll = usize::MAX;
                }
                Some(TickOutcome::Completed) => {
                    self.status_message = "Playback complete".to_string();
                    self.narration_scroll = usize::MAX;
                }
                Some(TickOutcome::Stale) | None => {}
            }

            // Use poll with timeout so ticks fire while no key is pressed
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[0]);

        // Left column: visualization (top) | narration (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[0]);

        let algorithm = self.session.algorithm();
        let display = self.session.display();

        if algorithm.family() == Family::Graph {
            super::panes::render_graph_pane(
                frame,
                left_rows[0],
                &self.session.input().graph,
                &display,
                algorithm,
            );
        } else {
            super::panes::render_array_pane(frame, left_rows[0], &display, algorithm.name());
        }

        super::panes::render_narration_pane(
            frame,
            left_rows[1],
            self.session.replayer().applied(),
            &display.narration,
            &mut self.narration_scroll,
        );

        super::panes::render_stats_pane(
            frame,
            columns[1],
            &super::panes::StatsRenderData {
                algorithm,
                input: self.session.input(),
                display: &display,
                entry: self.session.catalog_entry(),
                speed: self.session.replayer().speed(),
            },
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            display.position,
            display.total,
            display.state,
        );
    }

    /// Report the result of an action that re-records the sequence
    fn rerecorded(&mut self, result: Result<(), RecordError>, message: String) {
        self.status_message = match result {
            Ok(()) => message,
            Err(e) => format!("Error: {}", e),
        };
        self.narration_scroll = 0;
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        let now = Instant::now();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = (0..n)
                    .take_while(|_| self.session.step_forward().is_ok())
                    .count();
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.narration_scroll = usize::MAX;
            }
            KeyCode::Left => match self.session.step_backward() {
                Ok(()) => {
                    self.status_message = "Stepped backward".to_string();
                    self.narration_scroll = usize::MAX;
                }
                Err(e) => self.status_message = format!("Cannot step backward: {}", e),
            },
            KeyCode::Right => match self.session.step_forward() {
                Ok(()) => {
                    self.status_message = "Stepped forward".to_string();
                    self.narration_scroll = usize::MAX;
                }
                Err(e) => self.status_message = format!("Cannot step forward: {}", e),
            },
            KeyCode::Up => {
                self.narration_scroll = self.narration_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.narration_scroll = self.narration_scroll.saturating_add(1);
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = now;
                    self.session.toggle(now);
                    self.status_message = match self.session.replayer().state() {
                        PlaybackState::Playing => "Playing...".to_string(),
                        _ => "Paused".to_string(),
                    };
                }
            }
            KeyCode::Enter => {
                self.session.jump_to_end();
                self.status_message = "Jumped to end".to_string();
                self.narration_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.session.jump_to_start();
                self.status_message = "Jumped to start".to_string();
                self.narration_scroll = 0;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let result = self.session.reset();
                self.rerecorded(result, "Reset".to_string());
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                let result = self.session.randomize();
                self.rerecorded(result, "New random input".to_string());
            }
            KeyCode::Tab => {
                let result = self.session.next_algorithm();
                let message = format!("Selected {}", self.session.algorithm());
                self.rerecorded(result, message);
            }
            KeyCode::BackTab => {
                let result = self.session.prev_algorithm();
                let message = format!("Selected {}", self.session.algorithm());
                self.rerecorded(result, message);
            }
            KeyCode::Char('v') | KeyCode::Char('V') => {
                let result = self.session.toggle_variant();
                let message = format!("Selected {}", self.session.algorithm());
                self.rerecorded(result, message);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let speed = self.session.replayer().speed().faster();
                self.session.set_speed(speed, now);
                self.status_message = format!("Speed: {} per step", speed);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let speed = self.session.replayer().speed().slower();
                self.session.set_speed(speed, now);
                self.status_message = format!("Speed: {} per step", speed);
            }
            KeyCode::Char(',') | KeyCode::Char('.') if self.session.algorithm().uses_target() => {
                let delta = if key.code == KeyCode::Char('.') { 1 } else { -1 };
                let target = self.session.input().target + delta;
                let result = self.session.set_target(target);
                let message = format!("Target: {}", self.session.input().target);
                self.rerecorded(result, message);
            }
            KeyCode::Char('[') | KeyCode::Char(']') if self.session.algorithm().uses_window() => {
                let window = self.session.input().window;
                let window = if key.code == KeyCode::Char(']') {
                    window + 1
                } else {
                    window.saturating_sub(1)
                };
                let result = self.session.set_window(window);
                let message = format!("Window: {}", self.session.input().window);
                self.rerecorded(result, message);
            }
            _ => {}
        }
    }
}
