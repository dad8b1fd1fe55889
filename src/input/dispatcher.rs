//! Applies input events to the session
//!
//! Every rejected event is a silent no-op: the caller gets
//! `Outcome::Ignored` with the reason, never an error.

use super::InputEvent;
use crate::core::Tag;
use crate::session::Session;
use crate::submission::Submitter;
use tracing::debug;

/// State change produced by an accepted event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    LetterSet { row: usize, col: usize, letter: char },
    LetterCleared { row: usize, col: usize },
    StatusCycled { row: usize, col: usize, tag: Tag },
    /// Row handed to the submitter; `advanced` is false on the last row
    Submitted { row: usize, seq: u64, advanced: bool },
}

/// Why an event had no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    NotALetter,
    RowFull,
    RowEmpty,
    RowIncomplete,
    AlreadySubmitted,
    InactiveRow,
    EmptyCell,
}

/// Result of dispatching one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed(Change),
    Ignored(Ignored),
}

impl Outcome {
    /// True if the presentation layer should redraw
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }
}

/// Apply one input event
///
/// A valid `Submit` packages the active row into a ticket, hands it to
/// `submitter` and advances the cursor to the next row without waiting for
/// the solver. On the last row the cursor stays put and the row remains
/// editable.
pub fn dispatch<T: Submitter + ?Sized>(
    session: &mut Session,
    submitter: &mut T,
    event: InputEvent,
) -> Outcome {
    let outcome = match event {
        InputEvent::Letter(ch) => type_letter(session, ch),
        InputEvent::Backspace => erase(session),
        InputEvent::Submit => submit(session, submitter),
        InputEvent::ClickCell { row, col } => click(session, row, col),
    };

    match outcome {
        Outcome::Changed(change) => debug!(?event, ?change, "input applied"),
        Outcome::Ignored(reason) => debug!(?event, ?reason, "input ignored"),
    }
    outcome
}

fn type_letter(session: &mut Session, ch: char) -> Outcome {
    if !ch.is_ascii_alphabetic() {
        return Outcome::Ignored(Ignored::NotALetter);
    }

    let (board, cursor) = session.grid_mut();
    if !cursor.can_insert() {
        return Outcome::Ignored(Ignored::RowFull);
    }

    let (row, col) = (cursor.row(), cursor.col());
    let letter = ch.to_ascii_lowercase();
    board.set_letter(row, col, letter);
    cursor.advance_col();

    Outcome::Changed(Change::LetterSet { row, col, letter })
}

fn erase(session: &mut Session) -> Outcome {
    let (board, cursor) = session.grid_mut();
    if cursor.col() == 0 {
        return Outcome::Ignored(Ignored::RowEmpty);
    }

    cursor.retreat_col();
    let (row, col) = (cursor.row(), cursor.col());
    board.clear_letter(row, col);

    Outcome::Changed(Change::LetterCleared { row, col })
}

fn submit<T: Submitter + ?Sized>(session: &mut Session, submitter: &mut T) -> Outcome {
    let row = session.cursor().row();
    if !session.board().is_row_complete(row) {
        return Outcome::Ignored(Ignored::RowIncomplete);
    }

    let Some(ticket) = session.issue_ticket() else {
        return Outcome::Ignored(Ignored::AlreadySubmitted);
    };
    let seq = ticket.seq;
    submitter.submit(ticket);

    let (_, cursor) = session.grid_mut();
    let advanced = cursor.advance_row();

    Outcome::Changed(Change::Submitted { row, seq, advanced })
}

fn click(session: &mut Session, row: usize, col: usize) -> Outcome {
    let (board, cursor) = session.grid_mut();
    if row != cursor.row() {
        return Outcome::Ignored(Ignored::InactiveRow);
    }
    // Only filled cells carry a status; this also rejects col >= COLS
    if col >= cursor.col() {
        return Outcome::Ignored(Ignored::EmptyCell);
    }

    match board.cycle_status(row, col) {
        Some(tag) => Outcome::Changed(Change::StatusCycled { row, col, tag }),
        None => Outcome::Ignored(Ignored::EmptyCell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{COLS, ROWS};
    use crate::submission::SolveTicket;

    fn run(session: &mut Session, tickets: &mut Vec<SolveTicket>, events: &[InputEvent]) {
        for &event in events {
            dispatch(session, tickets, event);
        }
    }

    fn word(text: &str) -> Vec<InputEvent> {
        text.chars().map(InputEvent::Letter).collect()
    }

    fn assert_contiguous(session: &Session) {
        let cursor = session.cursor();
        let row = session.board().row(cursor.row()).unwrap();
        for (col, cell) in row.iter().enumerate() {
            assert_eq!(cell.is_filled(), col < cursor.col(), "col {col}");
            if col >= cursor.col() {
                assert_eq!(cell.tag, Tag::Absent, "col {col}");
            }
        }
    }

    #[test]
    fn letters_fill_left_to_right_lowercased() {
        let mut session = Session::new();
        let mut tickets: Vec<SolveTicket> = Vec::new();

        let outcome = dispatch(&mut session, &mut tickets, InputEvent::Letter('C'));
        assert_eq!(
            outcome,
            Outcome::Changed(Change::LetterSet { row: 0, col: 0, letter: 'c' })
        );
        run(&mut session, &mut tickets, &word("RA"));

        assert_eq!(session.board().row_letters(0), ["c", "r", "a", "", ""]);
        assert_eq!(session.cursor().col(), 3);
        assert_contiguous(&session);
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut session = Session::new();
        let mut tickets: Vec<SolveTicket> = Vec::new();
        for ch in ['1', ' ', 'é', '⌫'] {
            assert_eq!(
                dispatch(&mut session, &mut tickets, InputEvent::Letter(ch)),
                Outcome::Ignored(Ignored::NotALetter)
            );
        }
        assert_eq!(session.cursor().col(), 0);
    }

    #[test]
    fn full_row_ignores_letters() {
        let mut session = Session::new();
        let mut tickets: Vec<SolveTicket> = Vec::new();
        run(&mut session, &mut tickets, &word("crane"));
        let before = session.clone();

        assert_eq!(
            dispatch(&mut session, &mut tickets, InputEvent::Letter('x')),
            Outcome::Ignored(Ignored::RowFull)
        );
        assert_eq!(session.board(), before.board());
        assert_eq!(session.cursor(), before.cursor());
    }

    #[test]
    fn backspace_clears_and_resets_status() {
        let mut session = Session::new();
        let mut tickets: Vec<SolveTicket> = Vec::new();
        run(&mut session, &mut tickets, &word("cra"));
        dispatch(&mut session, &mut tickets, InputEvent::ClickCell { row: 0, col: 2 });

        let outcome = dispatch(&mut session, &mut tickets, InputEvent::Backspace);
        assert_eq!(outcome, Outcome::Changed(Change::LetterCleared { row: 0, col: 2 }));
        assert_eq!(session.cursor().col(), 2);
        assert_contiguous(&session);

        // Retyping the column starts from absent again
        dispatch(&mut session, &mut tickets, InputEvent::Letter('a'));
        assert_eq!(session.board().cell(0, 2).unwrap().tag, Tag::Absent);
    }

    #[test]
    fn backspace_on_empty_row_is_ignored() {
        let mut session = Session::new();
        let mut tickets: Vec<SolveTicket> = Vec::new();
        assert_eq!(
            dispatch(&mut session, &mut tickets, InputEvent::Backspace),
            Outcome::Ignored(Ignored::RowEmpty)
        );
        assert_eq!(session.board(), Session::new().board());
    }

    #[test]
    fn column_stays_in_bounds_for_mixed_sequences() {
        let mut session = Session::new();
        let mut tickets: Vec<SolveTicket> = Vec::new();
        let pattern = [
            InputEvent::Letter('a'),
            InputEvent::Backspace,
            InputEvent::Backspace,
            InputEvent::Letter('b'),
            InputEvent::Letter('c'),
            InputEvent::Letter('d'),
            InputEvent::Letter('e'),
            InputEvent::Letter('f'),
            InputEvent::Letter('g'),
            InputEvent::Letter('h'),
            InputEvent::Backspace,
        ];
        for &event in pattern.iter().cycle().take(200) {
            dispatch(&mut session, &mut tickets, event);
            assert!(session.cursor().col() <= COLS);
            assert_contiguous(&session);
        }
    }

    #[test]
    fn click_cycles_status_on_active_filled_cell() {
        let mut session = Session::new();
        let mut tickets: Vec<SolveTicket> = Vec::new();
        run(&mut session, &mut tickets, &word("crane"));

        let click = InputEvent::ClickCell { row: 0, col: 2 };
        assert_eq!(
            dispatch(&mut session, &mut tickets, click),
            Outcome::Changed(Change::StatusCycled { row: 0, col: 2, tag: Tag::Present })
        );
        assert_eq!(
            dispatch(&mut session, &mut tickets, click),
            Outcome::Changed(Change::StatusCycled { row: 0, col: 2, tag: Tag::Correct })
        );
        assert_eq!(session.board().cell(0, 2).unwrap().letter, Some('a'));
    }

    #[test]
    fn click_rejects_other_rows_and_empty_cells() {
        let mut session = Session::new();
        let mut tickets: Vec<SolveTicket> = Vec::new();
        run(&mut session, &mut tickets, &word("cr"));

        assert_eq!(
            dispatch(&mut session, &mut tickets, InputEvent::ClickCell { row: 1, col: 0 }),
            Outcome::Ignored(Ignored::InactiveRow)
        );
        assert_eq!(
            dispatch(&mut session, &mut tickets, InputEvent::ClickCell { row: 0, col: 2 }),
            Outcome::Ignored(Ignored::EmptyCell)
        );
        assert_eq!(
            dispatch(&mut session, &mut tickets, InputEvent::ClickCell { row: 0, col: 99 }),
            Outcome::Ignored(Ignored::EmptyCell)
        );
        assert_contiguous(&session);
    }

    #[test]
    fn incomplete_row_is_not_submitted() {
        let mut session = Session::new();
        let mut tickets: Vec<SolveTicket> = Vec::new();
        run(&mut session, &mut tickets, &word("cran"));

        assert_eq!(
            dispatch(&mut session, &mut tickets, InputEvent::Submit),
            Outcome::Ignored(Ignored::RowIncomplete)
        );
        assert!(tickets.is_empty());
        assert_eq!(session.cursor().row(), 0);
    }

    #[test]
    fn submit_hands_off_and_advances() {
        let mut session = Session::new();
        let mut tickets: Vec<SolveTicket> = Vec::new();
        run(&mut session, &mut tickets, &word("crane"));

        assert_eq!(
            dispatch(&mut session, &mut tickets, InputEvent::Submit),
            Outcome::Changed(Change::Submitted { row: 0, seq: 1, advanced: true })
        );
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].request.letters, ["c", "r", "a", "n", "e"]);
        assert_eq!(tickets[0].request.statuses, [Tag::Absent; 5]);
        assert_eq!((session.cursor().row(), session.cursor().col()), (1, 0));
    }

    #[test]
    fn submitted_rows_are_frozen() {
        let mut session = Session::new();
        let mut tickets: Vec<SolveTicket> = Vec::new();
        run(&mut session, &mut tickets, &word("crane"));
        dispatch(&mut session, &mut tickets, InputEvent::Submit);
        let frozen = *session.board().row(0).unwrap();

        run(
            &mut session,
            &mut tickets,
            &[
                InputEvent::Backspace,
                InputEvent::ClickCell { row: 0, col: 0 },
                InputEvent::ClickCell { row: 0, col: 4 },
                InputEvent::Letter('x'),
                InputEvent::Backspace,
                InputEvent::Backspace,
            ],
        );

        assert_eq!(session.board().row(0).unwrap(), &frozen);
    }

    #[test]
    fn last_row_stays_active_and_rejects_duplicate_submit() {
        let mut session = Session::new();
        let mut tickets: Vec<SolveTicket> = Vec::new();
        for _ in 0..ROWS {
            run(&mut session, &mut tickets, &word("crane"));
            dispatch(&mut session, &mut tickets, InputEvent::Submit);
        }

        assert_eq!(tickets.len(), ROWS);
        assert_eq!(session.cursor().row(), ROWS - 1);
        assert_eq!(session.cursor().col(), COLS);

        assert_eq!(
            dispatch(&mut session, &mut tickets, InputEvent::Submit),
            Outcome::Ignored(Ignored::AlreadySubmitted)
        );
        assert_eq!(tickets.len(), ROWS);

        // Changing a letter makes it a new guess
        run(
            &mut session,
            &mut tickets,
            &[InputEvent::Backspace, InputEvent::Letter('t'), InputEvent::Submit],
        );
        assert_eq!(tickets.len(), ROWS + 1);
        assert_eq!(tickets[ROWS].request.letters, ["c", "r", "a", "n", "t"]);
        assert_eq!(tickets[ROWS].row, ROWS - 1);
    }

    #[test]
    fn outcome_reports_change() {
        assert!(Outcome::Changed(Change::LetterCleared { row: 0, col: 0 }).is_changed());
        assert!(!Outcome::Ignored(Ignored::RowEmpty).is_changed());
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn accepted_input_is_logged_at_debug() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut session = Session::new();
            let mut tickets: Vec<SolveTicket> = Vec::new();
            dispatch(&mut session, &mut tickets, InputEvent::Letter('c'));
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("input applied"), "{output}");
        assert!(output.contains("DEBUG"), "{output}");
    }
}
