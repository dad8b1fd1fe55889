//! Display functions for the line-mode front ends

use super::formatters::{colored_cell, row_emoji};
use crate::session::{Session, Settlement};
use colored::Colorize;

/// Print every row up to and including the active one
pub fn print_board(session: &Session) {
    let active = session.cursor().row();
    println!();
    for (index, row) in session.board().rows().enumerate().take(active + 1) {
        let cells: String = row.iter().map(|c| colored_cell(c).to_string()).collect();
        let marker = if index == active { "▶".cyan() } else { " ".normal() };
        println!("  {marker} {cells}  {}", row_emoji(row));
    }
    println!();
}

/// Print the candidate list
pub fn print_candidates(candidates: &[String]) {
    if candidates.is_empty() {
        println!("{}", "No candidates returned.".yellow());
        return;
    }

    println!(
        "\n💡 {} ({})",
        "Suggestions:".bright_cyan().bold(),
        candidates.len()
    );
    for chunk in candidates.chunks(8) {
        let line: Vec<String> = chunk.iter().map(|w| w.to_uppercase()).collect();
        println!("   {}", line.join("  ").bright_white());
    }
    println!();
}

/// Print what happened to a solver response
pub fn print_settlement(settlement: &Settlement, session: &Session) {
    match settlement {
        Settlement::Applied { .. } => print_candidates(session.candidates()),
        Settlement::Failed { message, .. } => {
            println!("{} {message}", "❌ Solver failed:".red().bold());
            println!("   Previous suggestions kept.\n");
        }
        Settlement::Stale { .. } => {}
    }
}
