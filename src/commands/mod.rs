//! Command implementations

pub mod query;
pub mod simple;

pub use query::{build_request, run_query};
pub use simple::{LineCommand, guess_events, parse_line, run_simple};
