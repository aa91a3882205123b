//! Main TUI application state and logic

use crate::crane::engine::{Crane, CraneMode};
use crate::crane::errors::CraneError;
use crate::parser::instruction::MoveInstruction;
use crate::ui::panes::{
    render_moves_pane, render_status_bar, render_yard_pane, MovesScrollState, StatusRenderData,
    YardRenderData,
};
use crate::yard::Yard;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Delay between steps in auto-play mode
const PLAY_INTERVAL: Duration = Duration::from_millis(500);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Yard,
    Moves,
}

impl FocusedPane {
    /// Move focus to the other pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Yard => FocusedPane::Moves,
            FocusedPane::Moves => FocusedPane::Yard,
        }
    }
}

/// The main application state
pub struct App {
    /// The crane whose run is being replayed
    pub crane: Crane,

    /// The moves of the run, in order
    pub instructions: Vec<MoveInstruction>,

    /// Mode the run was executed in
    pub mode: CraneMode,

    /// Error that aborted the run, if any
    pub run_error: Option<CraneError>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll state
    pub yard_scroll: usize,
    pub moves_scroll: MovesScrollState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app for a crane that has already executed `instructions`
    pub fn new(
        crane: Crane,
        instructions: Vec<MoveInstruction>,
        mode: CraneMode,
        run_error: Option<CraneError>,
    ) -> Self {
        let executed = run_error
            .as_ref()
            .and_then(CraneError::step)
            .map_or(instructions.len(), |step| step - 1);
        let recorded = crane.total_snapshots().saturating_sub(1);

        let status_message = match &run_error {
            Some(err) => format!("Run stopped: {}", err),
            None if recorded < executed => format!(
                "History full: replay covers {} of {} moves",
                recorded, executed
            ),
            None => String::from("Ready!"),
        };

        App {
            crane,
            instructions,
            mode,
            run_error,
            focused_pane: FocusedPane::Moves,
            yard_scroll: 0,
            moves_scroll: MovesScrollState::new(),
            should_quit: false,
            status_message,
            is_playing: false,
            last_play_time: Instant::now(),
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

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= PLAY_INTERVAL {
                if self.crane.step_forward().is_ok() {
                    self.status_message = "Playing...".to_string();
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
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
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Yard (left) | Moves (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[0]);

        let empty = Yard::default();
        let yard = self.crane.yard().unwrap_or(&empty);
        let last_move = self.crane.current_snapshot().and_then(|s| s.instruction);
        let current_step = self.crane.history_position();

        render_yard_pane(
            frame,
            columns[0],
            YardRenderData { yard, last_move },
            self.focused_pane == FocusedPane::Yard,
            &mut self.yard_scroll,
        );

        render_moves_pane(
            frame,
            columns[1],
            &self.instructions,
            current_step,
            self.run_error.as_ref().and_then(CraneError::step),
            self.focused_pane == FocusedPane::Moves,
            &mut self.moves_scroll,
        );

        render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                current_step,
                total_steps: self.crane.total_snapshots().saturating_sub(1),
                mode: self.mode,
                has_error: self.run_error.is_some(),
                is_playing: self.is_playing,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1);
                let mut stepped = 0;
                for _ in 0..n {
                    if self.crane.step_forward().is_err() {
                        break;
                    }
                    stepped += 1;
                }
                self.status_message = format!("Stepped forward {} move(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                let result = self.crane.step_backward();
                self.report_step(result, "Stepped backward", "Cannot step backward");
            }
            KeyCode::Right => {
                self.is_playing = false;
                let result = self.crane.step_forward();
                self.report_step(result, "Stepped forward", "Cannot step forward");
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Yard => {
                    self.yard_scroll = self.yard_scroll.saturating_add(1);
                }
                FocusedPane::Moves => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.moves_scroll.target_line_row {
                        self.moves_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Yard => {
                    self.yard_scroll = self.yard_scroll.saturating_sub(1);
                }
                FocusedPane::Moves => {
                    if let Some(row) = self.moves_scroll.target_line_row {
                        self.moves_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(PLAY_INTERVAL)
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                let result = self.crane.jump_to_end();
                self.report_step(result, "Jumped to end", "Cannot jump to end");
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                let result = self.crane.rewind_to_start();
                self.report_step(result, "Jumped to start", "Cannot jump to start");
            }
            _ => {}
        }
    }

    fn report_step(&mut self, result: Result<(), CraneError>, ok: &str, failed: &str) {
        self.status_message = match result {
            Ok(()) => ok.to_string(),
            Err(CraneError::History { message }) => format!("{}: {}", failed, message),
            Err(e) => format!("Error: {}", e),
        };
    }
}
