//! Active row / insertion column tracking

use super::{COLS, ROWS};

/// Position of the next input
///
/// `col == COLS` means the active row is full and has no insertion point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    row: usize,
    col: usize,
}

impl Cursor {
    #[must_use]
    pub const fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    #[inline]
    #[must_use]
    pub const fn can_insert(&self) -> bool {
        self.col < COLS
    }

    /// True once the cursor sits on the last row
    #[inline]
    #[must_use]
    pub const fn on_last_row(&self) -> bool {
        self.row == ROWS - 1
    }

    pub fn advance_col(&mut self) {
        self.col = (self.col + 1).min(COLS);
    }

    pub fn retreat_col(&mut self) {
        self.col = self.col.saturating_sub(1);
    }

    /// Move to the start of the next row; returns false on the last row
    pub fn advance_row(&mut self) -> bool {
        if self.on_last_row() {
            return false;
        }
        self.row += 1;
        self.col = 0;
        true
    }
}
