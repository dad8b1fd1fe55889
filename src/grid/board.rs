//! Letter and status matrix

use super::{COLS, ROWS};
use crate::core::{Pattern, Tag};

/// One board cell: an optional lowercase letter and its match status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub tag: Tag,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        self.letter.is_some()
    }
}

/// The fixed 6×5 board
///
/// Out-of-range coordinates are ignored by every mutator and yield `None`
/// from accessors; the board never panics on bad input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row)?.get(col)
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut(row)?.get_mut(col)
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Cell; COLS]> {
        self.cells.get(row)
    }

    /// Iterate over the rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLS]> {
        self.cells.iter()
    }

    /// Place a letter; the cell's status is left as it is
    pub fn set_letter(&mut self, row: usize, col: usize, ch: char) {
        if let Some(cell) = self.cell_mut(row, col) {
            cell.letter = Some(ch);
        }
    }

    /// Empty a cell and reset its status to `absent`
    pub fn clear_letter(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.cell_mut(row, col) {
            *cell = Cell::default();
        }
    }

    /// Advance a cell's status one step, returning the new status
    pub fn cycle_status(&mut self, row: usize, col: usize) -> Option<Tag> {
        let cell = self.cell_mut(row, col)?;
        cell.tag = cell.tag.next();
        Some(cell.tag)
    }

    /// True iff all five cells of `row` hold a letter
    #[must_use]
    pub fn is_row_complete(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(Cell::is_filled))
    }

    /// Letters of a row as strings, empty cells as `""`
    #[must_use]
    pub fn row_letters(&self, row: usize) -> Vec<String> {
        self.row(row)
            .map(|cells| {
                cells
                    .iter()
                    .map(|c| c.letter.map(String::from).unwrap_or_default())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Statuses of a row as a pattern
    #[must_use]
    pub fn row_pattern(&self, row: usize) -> Pattern {
        self.row(row)
            .map(|cells| Pattern::new(cells.map(|c| c.tag)))
            .unwrap_or_default()
    }
}
