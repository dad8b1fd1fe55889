//! Simple interactive CLI mode
//!
//! Text-based front end without the TUI. Each guess line is replayed through
//! the input dispatcher exactly as key presses and cell clicks would be.

use crate::core::{Pattern, Tag, Word};
use crate::grid::COLS;
use crate::input::{Change, Ignored, InputEvent, Outcome, dispatch};
use crate::output::{print_board, print_settlement};
use crate::session::Session;
use crate::submission::{Pipeline, SolverService};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::time::Duration;

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Quit,
    New,
    Board,
    Guess { word: Word, pattern: Pattern },
    Invalid(String),
}

/// Parse a line like `crane gy--g`, `crane`, `new` or `quit`
///
/// A guess without a pattern is all gray.
#[must_use]
pub fn parse_line(line: &str) -> LineCommand {
    let mut parts = line.split_whitespace();
    let Some(first) = parts.next() else {
        return LineCommand::Invalid("Empty input".to_string());
    };

    match first.to_lowercase().as_str() {
        "quit" | "q" | "exit" => return LineCommand::Quit,
        "new" | "n" => return LineCommand::New,
        "board" | "b" => return LineCommand::Board,
        _ => {}
    }

    let word = match Word::new(first) {
        Ok(word) => word,
        Err(e) => return LineCommand::Invalid(e.to_string()),
    };

    let pattern = match parts.next() {
        None => Pattern::default(),
        Some(text) => match Pattern::from_str(text) {
            Some(pattern) => pattern,
            None => {
                return LineCommand::Invalid(format!(
                    "Invalid pattern '{text}'! Use G/Y/- or 🟩🟨⬜"
                ));
            }
        },
    };

    if parts.next().is_some() {
        return LineCommand::Invalid("Expected: WORD [PATTERN]".to_string());
    }

    LineCommand::Guess { word, pattern }
}

/// Input events that enter `word` with `pattern` on the active row and submit it
///
/// Any letters already on the row are erased first.
#[must_use]
pub fn guess_events(session: &Session, word: &Word, pattern: Pattern) -> Vec<InputEvent> {
    let row = session.cursor().row();
    let mut events = vec![InputEvent::Backspace; session.cursor().col()];

    events.extend(word.chars().iter().map(|&c| InputEvent::Letter(c)));

    for (col, &tag) in pattern.tags().iter().enumerate().take(COLS) {
        let clicks = Tag::Absent.steps_to(tag);
        events.extend(std::iter::repeat_n(InputEvent::ClickCell { row, col }, clicks));
    }

    events.push(InputEvent::Submit);
    events
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: SolverService + 'static>(service: S, timeout: Duration) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Wordle Assistant - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter each guess followed by its feedback pattern, e.g. 'crane gy--g':\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬜ for gray (not in word, the default)\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'board' to show the board\n");

    let mut pipeline = Pipeline::new(service);
    let mut session = Session::new();

    loop {
        let turn = session.cursor().row() + 1;
        let Some(input) = get_user_input(&format!("Guess {turn}"))? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match parse_line(&input) {
            LineCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineCommand::New => {
                session.reset();
                println!("\n🔄 New game started!\n");
            }
            LineCommand::Board => print_board(&session),
            LineCommand::Invalid(message) => println!("❌ {message}\n"),
            LineCommand::Guess { word, pattern } => {
                let mut submitted = None;
                for event in guess_events(&session, &word, pattern) {
                    match dispatch(&mut session, &mut pipeline, event) {
                        Outcome::Changed(Change::Submitted { seq, advanced, .. }) => {
                            submitted = Some((seq, advanced));
                        }
                        Outcome::Ignored(Ignored::AlreadySubmitted) => {
                            println!("{}", "That row was already submitted.".yellow());
                        }
                        _ => {}
                    }
                }

                let Some((seq, advanced)) = submitted else {
                    continue;
                };

                print_board(&session);
                await_reply(&pipeline, &mut session, seq, timeout);

                if !advanced {
                    println!(
                        "{}",
                        "All six rows used; further guesses replace the last row.".bright_black()
                    );
                }
            }
        }
    }
}

/// Wait for the reply to `seq`, settling anything that arrives before it
fn await_reply<S: SolverService + 'static>(
    pipeline: &Pipeline<S>,
    session: &mut Session,
    seq: u64,
    timeout: Duration,
) {
    // Transport timeout plus slack for the worker thread
    let deadline = timeout + Duration::from_secs(1);
    while let Some(completion) = pipeline.wait(deadline) {
        let done = completion.seq == seq;
        let settlement = session.settle(completion);
        print_settlement(&settlement, session);
        if done {
            return;
        }
    }
    println!("{}", "⌛ No reply from the solver yet.".yellow());
}

/// Prompt and read one trimmed line; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
