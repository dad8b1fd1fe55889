//! Formatting utilities for terminal output

use crate::core::Tag;
use crate::grid::Cell;
use colored::{ColoredString, Colorize};

/// Placeholder shown for an empty cell
pub const EMPTY_CELL: char = '·';

/// Uppercase letter of a cell, or the placeholder
#[must_use]
pub fn cell_char(cell: &Cell) -> char {
    cell.letter.map_or(EMPTY_CELL, |c| c.to_ascii_uppercase())
}

/// Emoji squares for a row's statuses
#[must_use]
pub fn row_emoji(cells: &[Cell]) -> String {
    cells.iter().map(|c| c.tag.emoji()).collect()
}

/// A cell as ` X ` on its tag color
#[must_use]
pub fn colored_cell(cell: &Cell) -> ColoredString {
    let text = format!(" {} ", cell_char(cell));
    if !cell.is_filled() {
        return text.dimmed();
    }
    match cell.tag {
        Tag::Correct => text.black().on_green().bold(),
        Tag::Present => text.black().on_yellow().bold(),
        Tag::Absent => text.white().on_bright_black().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(letter: Option<char>, tag: Tag) -> Cell {
        Cell { letter, tag }
    }

    #[test]
    fn cell_char_uppercases_or_placeholder() {
        assert_eq!(cell_char(&cell(Some('c'), Tag::Absent)), 'C');
        assert_eq!(cell_char(&Cell::default()), EMPTY_CELL);
    }

    #[test]
    fn row_emoji_follows_tags() {
        let cells = [
            cell(Some('c'), Tag::Correct),
            cell(Some('r'), Tag::Present),
            cell(Some('a'), Tag::Absent),
        ];
        assert_eq!(row_emoji(&cells), "🟩🟨⬜");
    }

    #[test]
    fn colored_cell_keeps_text() {
        let shown = colored_cell(&cell(Some('e'), Tag::Correct));
        assert_eq!(&*shown, " E ");
    }
}
