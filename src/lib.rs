//! Wordle Assistant
//!
//! Enter guesses into a six-row grid, mark each letter gray, yellow or green,
//! and let an external solver service suggest the words that still fit.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assistant::input::{InputEvent, dispatch};
//! use wordle_assistant::session::Session;
//! use wordle_assistant::submission::SolveTicket;
//!
//! let mut session = Session::new();
//! let mut tickets: Vec<SolveTicket> = Vec::new();
//!
//! for ch in "crane".chars() {
//!     dispatch(&mut session, &mut tickets, InputEvent::Letter(ch));
//! }
//! dispatch(&mut session, &mut tickets, InputEvent::ClickCell { row: 0, col: 2 });
//! dispatch(&mut session, &mut tickets, InputEvent::Submit);
//!
//! assert_eq!(tickets.len(), 1);
//! assert_eq!(session.cursor().row(), 1);
//! ```

// Core domain types
pub mod core;

// Board and cursor
pub mod grid;

// Session state
pub mod session;

// Input events and dispatch
pub mod input;

// Solver contract, transport and background pipeline
pub mod submission;

// Solver endpoint configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
