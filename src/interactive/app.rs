//! TUI application state and logic

use super::rendering::{self, ScreenLayout};
use crate::input::{Change, InputEvent, Outcome, dispatch};
use crate::session::{Session, Settlement};
use crate::submission::{Pipeline, SolverService};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::info;

/// How often the loop wakes up to collect solver replies
const TICK: Duration = Duration::from_millis(100);

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<S> {
    pub session: Session,
    pipeline: Pipeline<S>,
    pub messages: Vec<Message>,
    pub solver_label: String,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: SolverService + 'static> App<S> {
    #[must_use]
    pub fn new(service: S, solver_label: impl Into<String>) -> Self {
        Self {
            session: Session::new(),
            pipeline: Pipeline::new(service),
            messages: vec![
                Message {
                    text: "Type a guess and press Enter to get suggestions.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Click a letter to cycle gray → yellow → green.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            solver_label: solver_label.into(),
            should_quit: false,
        }
    }

    /// Feed one grid event through the dispatcher
    pub fn apply(&mut self, event: InputEvent) -> Outcome {
        let outcome = dispatch(&mut self.session, &mut self.pipeline, event);

        if let Outcome::Changed(Change::Submitted { row, advanced, .. }) = outcome {
            let note = if advanced { "" } else { " (last row)" };
            self.add_message(
                &format!("Guess {} sent to solver{note}", row + 1),
                MessageStyle::Info,
            );
        }
        outcome
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game();
            }
            _ => {
                if let Some(event) = InputEvent::from_key(&key) {
                    self.apply(event);
                }
            }
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent, screen: &ScreenLayout) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(event) = screen.hit(mouse.column, mouse.row) {
            self.apply(event);
        }
    }

    /// Settle every solver reply that has arrived; returns true if any did
    pub fn poll_solver(&mut self) -> bool {
        let completions = self.pipeline.drain();
        let any = !completions.is_empty();

        for completion in completions {
            match self.session.settle(completion) {
                Settlement::Applied { count, .. } => {
                    self.add_message(&format!("{count} candidates found"), MessageStyle::Success);
                }
                Settlement::Failed { message, .. } => {
                    self.add_message(&format!("Solver error: {message}"), MessageStyle::Error);
                }
                Settlement::Stale { .. } => {}
            }
        }
        any
    }

    pub fn new_game(&mut self) {
        info!("starting new game");
        self.session.reset();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: SolverService + 'static>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: SolverService + 'static>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        let area = terminal.draw(|f| rendering::ui(f, &app))?.area;
        let screen = rendering::layout(area);

        app.poll_solver();

        if event::poll(TICK)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key(key),
                Event::Mouse(mouse) => app.on_mouse(mouse, &screen),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
