//! Terminal output formatting
//!
//! Display utilities for the line-mode front ends.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_candidates, print_settlement};
