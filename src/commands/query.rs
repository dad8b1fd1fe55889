//! One-shot solver query
//!
//! Sends a single word and pattern to the solver and prints the reply.

use crate::core::{Pattern, Word};
use crate::output::print_candidates;
use crate::submission::{SolveRequest, SolverService};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Build the request for one guess
#[must_use]
pub fn build_request(word: &Word, pattern: Pattern) -> SolveRequest {
    SolveRequest::new(
        word.chars().iter().map(|&c| String::from(c)).collect(),
        pattern.tags().to_vec(),
    )
}

/// Query the solver once and print the candidates
///
/// # Errors
///
/// Returns an error if the word or pattern is invalid or the solver fails.
pub fn run_query<S: SolverService>(service: &S, word: &str, pattern: &str) -> Result<Vec<String>> {
    let word = Word::new(word).with_context(|| format!("Invalid word '{word}'"))?;
    let pattern: Pattern = pattern.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let request = build_request(&word, pattern);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Invalid spinner template")?,
    );
    spinner.set_message(format!(
        "Asking solver about {} {}",
        word.text().to_uppercase(),
        pattern.to_emoji()
    ));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = service.solve(&request);
    spinner.finish_and_clear();

    let matches = result.context("Solver request failed")?;
    print_candidates(&matches);
    Ok(matches)
}
