//! HTTP transport for the solver service

use super::contract::{SolveRequest, SolveResponse, SolverError, SolverService, StatusNames};
use crate::config::SolverConfig;
use reqwest::Url;
use reqwest::blocking::Client;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest<'a> {
    letters: &'a [String],
    statuses: Vec<&'static str>,
    must_include: &'a str,
}

/// Solver reached with a JSON `POST`
#[derive(Debug, Clone)]
pub struct HttpSolver {
    client: Client,
    url: Url,
    status_names: StatusNames,
}

impl HttpSolver {
    /// Build a client for the configured endpoint
    ///
    /// # Errors
    ///
    /// Returns `SolverError::InvalidUrl` if the URL does not parse or is not
    /// http(s), and `SolverError::Transport` if the client cannot be built.
    pub fn new(config: &SolverConfig) -> Result<Self, SolverError> {
        let url = Url::parse(&config.api_url).map_err(|e| SolverError::InvalidUrl {
            url: config.api_url.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(SolverError::InvalidUrl {
                url: config.api_url.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            url,
            status_names: config.status_names,
        })
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

impl SolverService for HttpSolver {
    fn solve(&self, request: &SolveRequest) -> Result<Vec<String>, SolverError> {
        let body = WireRequest {
            letters: &request.letters,
            statuses: request
                .statuses
                .iter()
                .map(|&tag| self.status_names.encode(tag))
                .collect(),
            must_include: &request.must_include,
        };

        debug!(url = %self.url, letters = ?request.letters, "posting row to solver");
        let response = self.client.post(self.url.clone()).json(&body).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SolverError::Status(status.as_u16()));
        }

        let text = response.text()?;
        let decoded: SolveResponse =
            serde_json::from_str(&text).map_err(|e| SolverError::Decode(e.to_string()))?;
        Ok(decoded.matches)
    }
}
