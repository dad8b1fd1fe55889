//! Submission pipeline and the solver service contract
//!
//! A completed row becomes a [`SolveTicket`]. Tickets are handed to a
//! [`Submitter`]; the production submitter is [`Pipeline`], which runs
//! requests against a [`SolverService`] on one background worker thread
//! and reports a [`Completion`] back to the input loop.

mod contract;
mod http;
mod pipeline;

pub use contract::{SolveRequest, SolveResponse, SolverError, SolverService, StatusNames};
pub use http::HttpSolver;
pub use pipeline::{Completion, Pipeline, SolveTicket, Submitter};
