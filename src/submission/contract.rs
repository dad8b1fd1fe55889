//! Request/response types for the external solver

use crate::core::Tag;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row's letters and statuses, as sent to the solver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    pub letters: Vec<String>,
    pub statuses: Vec<Tag>,
    /// Reserved by the service; always empty
    pub must_include: String,
}

impl SolveRequest {
    #[must_use]
    pub fn new(letters: Vec<String>, statuses: Vec<Tag>) -> Self {
        Self {
            letters,
            statuses,
            must_include: String::new(),
        }
    }
}

/// Candidate words returned by the solver, in service order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveResponse {
    pub matches: Vec<String>,
}

/// Vocabulary used for statuses on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StatusNames {
    /// `absent` / `present` / `correct`
    #[default]
    Tags,
    /// `gray` / `yellow` / `green`
    Colors,
}

impl StatusNames {
    #[must_use]
    pub const fn encode(self, tag: Tag) -> &'static str {
        match self {
            Self::Tags => tag.name(),
            Self::Colors => tag.color_name(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("invalid solver URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("solver request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("solver responded with status {0}")]
    Status(u16),
    #[error("could not decode solver response: {0}")]
    Decode(String),
    #[error("{0}")]
    Service(String),
}

/// Anything that can turn a row into candidate words
///
/// Implementations block until the answer is known; [`super::Pipeline`]
/// keeps that off the input thread.
pub trait SolverService: Send + Sync {
    /// Resolve one request into its ordered candidate list
    ///
    /// # Errors
    ///
    /// Returns `SolverError` on any transport or service failure.
    fn solve(&self, request: &SolveRequest) -> Result<Vec<String>, SolverError>;
}
