//! Session state: board, cursor, candidate list and submission ledger
//!
//! A `Session` is created once per game and mutated only by the input
//! dispatcher and by [`Session::settle`]. Nothing here does I/O.

use crate::grid::{Board, COLS, Cell, Cursor};
use crate::submission::{Completion, SolveRequest, SolveTicket};
use tracing::{debug, info};

/// Letters and statuses of a row at the moment it was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowSnapshot {
    row: usize,
    cells: [Cell; COLS],
}

/// What [`Session::settle`] did with a completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// Candidate list replaced
    Applied { seq: u64, count: usize },
    /// Latest request failed; candidates kept
    Failed { seq: u64, message: String },
    /// A newer request was issued since; completion discarded
    Stale { seq: u64, latest: u64 },
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    board: Board,
    cursor: Cursor,
    candidates: Vec<String>,
    issued: u64,
    pending: bool,
    last_submitted: Option<RowSnapshot>,
    last_error: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh game
    ///
    /// The submission counter keeps running, so replies to requests made
    /// before the reset can never be applied to the new game.
    pub fn reset(&mut self) {
        *self = Self {
            issued: self.issued,
            ..Self::default()
        };
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Candidate words from the latest successful submission
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// True while the most recent submission has not been settled
    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Message of the most recent failed submission, cleared on success
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Sequence number of the most recently issued submission (0 if none)
    #[inline]
    #[must_use]
    pub const fn latest_seq(&self) -> u64 {
        self.issued
    }

    pub(crate) fn grid_mut(&mut self) -> (&mut Board, &mut Cursor) {
        (&mut self.board, &mut self.cursor)
    }

    fn active_snapshot(&self) -> Option<RowSnapshot> {
        let row = self.cursor.row();
        self.board
            .row(row)
            .map(|cells| RowSnapshot { row, cells: *cells })
    }

    /// Package the active row into a ticket
    ///
    /// Returns `None` if the row is incomplete or is unchanged since it was
    /// last submitted.
    pub(crate) fn issue_ticket(&mut self) -> Option<SolveTicket> {
        let row = self.cursor.row();
        if !self.board.is_row_complete(row) {
            return None;
        }

        let snapshot = self.active_snapshot()?;
        if self.last_submitted == Some(snapshot) {
            debug!(row, "row unchanged since last submission");
            return None;
        }

        self.issued += 1;
        self.pending = true;
        self.last_submitted = Some(snapshot);

        let request = SolveRequest::new(
            self.board.row_letters(row),
            self.board.row_pattern(row).tags().to_vec(),
        );

        Some(SolveTicket {
            seq: self.issued,
            row,
            request,
        })
    }

    /// Apply a solver completion
    ///
    /// Only the completion for the latest issued submission is applied;
    /// anything older is discarded. The board is never touched. A failure
    /// forgets the submitted snapshot so the same row can be sent again.
    pub fn settle(&mut self, completion: Completion) -> Settlement {
        let Completion { seq, row, result } = completion;

        if seq != self.issued {
            debug!(seq, latest = self.issued, "discarding stale solver response");
            return Settlement::Stale {
                seq,
                latest: self.issued,
            };
        }

        self.pending = false;
        match result {
            Ok(words) => {
                info!(seq, row, count = words.len(), "candidates updated");
                let count = words.len();
                self.candidates = words;
                self.last_error = None;
                Settlement::Applied { seq, count }
            }
            Err(e) => {
                let message = e.to_string();
                self.last_submitted = None;
                self.last_error = Some(message.clone());
                Settlement::Failed { seq, message }
            }
        }
    }
}
