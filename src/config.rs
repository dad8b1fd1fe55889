//! Solver endpoint configuration

use crate::submission::StatusNames;
use std::time::Duration;

/// Endpoint used when neither `--api-url` nor `WORDGUESS_APP_API_URL` is set
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/process";

/// Environment variable that overrides the solver endpoint
pub const API_URL_ENV: &str = "WORDGUESS_APP_API_URL";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// How to reach the solver service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub status_names: StatusNames,
}

impl SolverConfig {
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_status_names(mut self, status_names: StatusNames) -> Self {
        self.status_names = status_names;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            status_names: StatusNames::default(),
        }
    }
}
