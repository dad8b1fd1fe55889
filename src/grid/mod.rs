//! Guess grid: the 6×5 board of cells and the input cursor
//!
//! Both are passive data holders. All decisions about when they may be
//! mutated live in the input dispatcher.

mod board;
mod cursor;

pub use board::{Board, Cell};
pub use cursor::Cursor;

/// Number of guess rows on the board
pub const ROWS: usize = 6;

/// Number of letters per guess
pub const COLS: usize = 5;
