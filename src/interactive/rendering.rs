//! TUI rendering with ratatui
//!
//! The screen geometry is computed by [`layout`] so that mouse clicks can be
//! hit-tested against exactly the rectangles that were drawn.

use super::app::{App, MessageStyle};
use crate::core::Tag;
use crate::grid::{COLS, Cell, ROWS};
use crate::input::InputEvent;
use crate::submission::SolverService;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// On-screen keyboard, top to bottom
pub const KEYBOARD_ROWS: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &["ENTER", "Z", "X", "C", "V", "B", "N", "M", "⌫"],
];

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const KEY_WIDTH: u16 = 5;
const WIDE_KEY_WIDTH: u16 = 7;
const KEY_HEIGHT: u16 = 3;
const GAP: u16 = 1;

const GREEN: Color = Color::Rgb(0x6a, 0xaa, 0x64);
const YELLOW: Color = Color::Rgb(0xc9, 0xb4, 0x58);
const GRAY: Color = Color::Rgb(0x78, 0x7c, 0x7e);

/// Where everything goes on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub board: Rect,
    pub cells: [[Rect; COLS]; ROWS],
    pub keyboard: Rect,
    pub keys: Vec<(Rect, &'static str)>,
    pub suggestions: Rect,
    pub messages: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    /// Input event for a left click at terminal position (`x`, `y`)
    #[must_use]
    pub fn hit(&self, x: u16, y: u16) -> Option<InputEvent> {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, rect) in cells.iter().enumerate() {
                if contains(*rect, x, y) {
                    return Some(InputEvent::ClickCell { row, col });
                }
            }
        }

        self.keys
            .iter()
            .find(|(rect, _)| contains(*rect, x, y))
            .and_then(|(_, label)| InputEvent::from_label(label))
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    !rect.is_empty() && x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

fn inner(rect: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(rect)
}

/// Compute the screen layout for a terminal of size `area`
#[must_use]
pub fn layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board and keyboard
            Constraint::Percentage(40), // Suggestions and messages
        ])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ROWS as u16 * CELL_HEIGHT + 2),
            Constraint::Length(KEYBOARD_ROWS.len() as u16 * KEY_HEIGHT + 2),
            Constraint::Min(0),
        ])
        .split(main_chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_chunks[1]);

    let board = left[0];
    let keyboard = left[1];

    ScreenLayout {
        header: chunks[0],
        board,
        cells: cell_rects(inner(board)),
        keyboard,
        keys: key_rects(inner(keyboard)),
        suggestions: right[0],
        messages: right[1],
        status: chunks[2],
    }
}

fn cell_rects(area: Rect) -> [[Rect; COLS]; ROWS] {
    let row_width = COLS as u16 * CELL_WIDTH + (COLS as u16 - 1) * GAP;
    let x0 = area.x + area.width.saturating_sub(row_width) / 2;

    let mut cells = [[Rect::default(); COLS]; ROWS];
    for (row, rects) in cells.iter_mut().enumerate() {
        for (col, rect) in rects.iter_mut().enumerate() {
            let candidate = Rect::new(
                x0 + col as u16 * (CELL_WIDTH + GAP),
                area.y + row as u16 * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            );
            *rect = candidate.intersection(area);
        }
    }
    cells
}

fn key_width(label: &str) -> u16 {
    if label.chars().count() > 1 {
        WIDE_KEY_WIDTH
    } else {
        KEY_WIDTH
    }
}

fn key_rects(area: Rect) -> Vec<(Rect, &'static str)> {
    let mut keys = Vec::new();
    for (index, labels) in KEYBOARD_ROWS.iter().enumerate() {
        let row_width: u16 = labels.iter().map(|l| key_width(l)).sum::<u16>()
            + (labels.len() as u16).saturating_sub(1) * GAP;
        let mut x = area.x + area.width.saturating_sub(row_width) / 2;
        let y = area.y + index as u16 * KEY_HEIGHT;

        for &label in *labels {
            let width = key_width(label);
            let rect = Rect::new(x, y, width, KEY_HEIGHT).intersection(area);
            if !rect.is_empty() {
                keys.push((rect, label));
            }
            x += width + GAP;
        }
    }
    keys
}

/// Main UI rendering function
pub fn ui<S: SolverService + 'static>(f: &mut Frame, app: &App<S>) {
    let screen = layout(f.area());

    render_header(f, screen.header);
    render_board(f, app, &screen);
    render_keyboard(f, &screen);
    render_suggestions(f, app, screen.suggestions);
    render_messages(f, app, screen.messages);
    render_status(f, app, screen.status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE ASSISTANT")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn tag_color(tag: Tag) -> Color {
    match tag {
        Tag::Correct => GREEN,
        Tag::Present => YELLOW,
        Tag::Absent => GRAY,
    }
}

fn render_board<S: SolverService + 'static>(f: &mut Frame, app: &App<S>, screen: &ScreenLayout) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    f.render_widget(block, screen.board);

    let cursor = app.session.cursor();
    for (row, cells) in app.session.board().rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let rect = screen.cells[row][col];
            if rect.is_empty() {
                continue;
            }
            let active_row = row == cursor.row();
            let at_cursor = active_row && col == cursor.col();
            f.render_widget(cell_widget(cell, active_row, at_cursor), rect);
        }
    }
}

fn cell_widget(cell: &Cell, active_row: bool, at_cursor: bool) -> Paragraph<'static> {
    let (border_type, border_color) = if at_cursor {
        (BorderType::Thick, Color::Yellow)
    } else if active_row {
        (BorderType::Plain, Color::White)
    } else {
        (BorderType::Plain, Color::DarkGray)
    };

    let style = match cell.letter {
        Some(_) => Style::default()
            .fg(Color::White)
            .bg(tag_color(cell.tag))
            .add_modifier(Modifier::BOLD),
        None => Style::default(),
    };

    let text = cell
        .letter
        .map(|c| c.to_ascii_uppercase().to_string())
        .unwrap_or_default();

    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(border_color)),
        )
}

fn render_keyboard(f: &mut Frame, screen: &ScreenLayout) {
    let block = Block::default()
        .title(" Keyboard ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    f.render_widget(block, screen.keyboard);

    for &(rect, label) in &screen.keys {
        let key = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(key, rect);
    }
}

fn render_suggestions<S: SolverService + 'static>(f: &mut Frame, app: &App<S>, area: Rect) {
    let candidates = app.session.candidates();
    let title = if app.session.is_pending() {
        " Suggestions ⏳ ".to_string()
    } else {
        format!(" Suggestions ({}) ", candidates.len())
    };

    let items: Vec<ListItem> = if candidates.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "Submit a guess to see candidates",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        candidates
            .iter()
            .map(|word| ListItem::new(format!("• {}", word.to_uppercase())))
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_messages<S: SolverService + 'static>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S: SolverService + 'static>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(35),
            Constraint::Percentage(45),
        ])
        .split(area);

    let cursor = app.session.cursor();
    let row_text = format!("Guess {}/{ROWS}", cursor.row() + 1);
    f.render_widget(Paragraph::new(row_text).alignment(Alignment::Center), chunks[0]);

    let (solver_text, solver_color) = if app.session.is_pending() {
        (
            format!("Solver: waiting on #{}…", app.session.latest_seq()),
            Color::Yellow,
        )
    } else if let Some(error) = app.session.last_error() {
        (format!("Solver: {error}"), Color::Red)
    } else {
        (format!("Solver: {}", app.solver_label), Color::DarkGray)
    };
    let solver = Paragraph::new(solver_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(solver_color));
    f.render_widget(solver, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Ctrl+N: New | Enter: Submit | Click cell: color")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> ScreenLayout {
        layout(Rect::new(0, 0, 120, 45))
    }

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn every_cell_is_clickable() {
        let screen = screen();
        for row in 0..ROWS {
            for col in 0..COLS {
                let (x, y) = center(screen.cells[row][col]);
                assert_eq!(screen.hit(x, y), Some(InputEvent::ClickCell { row, col }));
            }
        }
    }

    #[test]
    fn every_key_is_clickable() {
        let screen = screen();
        let total: usize = KEYBOARD_ROWS.iter().map(|r| r.len()).sum();
        assert_eq!(screen.keys.len(), total);

        for &(rect, label) in &screen.keys {
            let (x, y) = center(rect);
            assert_eq!(screen.hit(x, y), InputEvent::from_label(label), "{label}");
        }
    }

    #[test]
    fn cells_do_not_overlap_keys() {
        let screen = screen();
        for cells in &screen.cells {
            for cell in cells {
                assert!(screen.keys.iter().all(|(key, _)| cell.intersection(*key).is_empty()));
            }
        }
    }

    #[test]
    fn header_and_status_are_not_clickable() {
        let screen = screen();
        let (x, y) = center(screen.header);
        assert_eq!(screen.hit(x, y), None);
        let (x, y) = center(screen.status);
        assert_eq!(screen.hit(x, y), None);
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let screen = layout(Rect::new(0, 0, 10, 5));
        let _ = screen.hit(3, 3);
    }
}
