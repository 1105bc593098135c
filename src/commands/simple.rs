//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Each line is either a command or four
//! words to submit, given as board numbers or the words themselves.

use crate::config::GameConfig;
use crate::core::{CategoryIndex, GROUP_SIZE, Puzzle, Word};
use crate::engine::{Outcome, Rejection, Session, Submitted};
use crate::output::display::{print_board, print_category_row, print_header, print_result};
use crate::output::formatters::{DIFFICULTY, category_color};
use crate::output::share::share_text;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use std::thread;
use tracing::debug;

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Shuffle,
    Deselect,
    New,
    Help,
    Share,
    Guess(Vec<String>),
}

/// Parse one line of input
///
/// Guess tokens are split on commas when present, otherwise on whitespace,
/// so multi-word entries like `ICE CREAM` can be typed as `ice cream, ...`.
#[must_use]
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let command = match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "shuffle" | "s" => Command::Shuffle,
        "deselect" | "d" | "clear" => Command::Deselect,
        "new" | "n" | "restart" => Command::New,
        "help" | "h" | "?" => Command::Help,
        "share" => Command::Share,
        _ => {
            let tokens: Vec<String> = if input.contains(',') {
                input
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect()
            } else {
                input.split_whitespace().map(str::to_string).collect()
            };
            Command::Guess(tokens)
        }
    };

    Some(command)
}

/// Turn a token into a pool word
///
/// Numbers are 1-based board positions. Anything else, or a number past the
/// end of the board, is matched against the pool text ignoring case.
#[must_use]
pub fn resolve_token(pool: &[Word], token: &str) -> Option<Word> {
    let by_position = token
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| pool.get(index));
    if let Some(word) = by_position {
        return Some(word.clone());
    }

    let word = Word::new(token).ok()?;
    pool.contains(&word).then_some(word)
}

/// Drop the selection; an empty selection is not an error
///
/// # Errors
///
/// Returns the `Rejection` if the game is over or a reveal is pending.
pub fn deselect<R: Rng>(session: &mut Session<'_, R>) -> Result<(), Rejection> {
    match session.clear_selection() {
        Ok(()) | Err(Rejection::NothingSelected) => Ok(()),
        Err(rejection) => Err(rejection),
    }
}

/// Select the given tokens and submit them
///
/// Any previous selection is dropped first, and again if the submit is
/// refused.
///
/// # Errors
///
/// Returns a message if the tokens are not four distinct board words or the
/// session refuses the submit.
pub fn submit_tokens<R: Rng>(
    session: &mut Session<'_, R>,
    tokens: &[String],
) -> Result<Submitted, String> {
    if tokens.len() != GROUP_SIZE {
        return Err(format!(
            "Enter exactly {GROUP_SIZE} words, got {}",
            tokens.len()
        ));
    }

    let mut words = Vec::with_capacity(GROUP_SIZE);
    for token in tokens {
        let word = resolve_token(session.pool(), token)
            .ok_or_else(|| format!("'{token}' is not on the board"))?;
        if words.contains(&word) {
            return Err(format!("'{word}' was entered twice"));
        }
        words.push(word);
    }

    deselect(session).map_err(|r| r.to_string())?;

    let selected = words.iter().try_for_each(|word| session.toggle(word).map(|_| ()));
    let submitted = selected.and_then(|()| session.submit());

    submitted.or_else(|rejection| {
        deselect(session).map_err(|r| r.to_string())?;
        Err(rejection.to_string())
    })
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(puzzle: &Puzzle, config: &GameConfig) -> Result<()> {
    let mut session = Session::new(puzzle, config.max_mistakes, config.rng());

    print_header(puzzle);
    print_help();
    print_board(&session);

    loop {
        let Some(input) = get_user_input("\nGuess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        let Some(command) = parse_command(&input) else {
            continue;
        };
        debug!(?command, "simple mode input");

        match command {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Help => print_help(),
            Command::Share => println!(
                "\n{}",
                share_text(puzzle, session.history(), session.max_mistakes())
            ),
            Command::Shuffle => match session.shuffle() {
                Ok(()) => print_board(&session),
                Err(rejection) => println!("{}", rejection.to_string().red()),
            },
            Command::Deselect => match deselect(&mut session) {
                Ok(()) => print_board(&session),
                Err(rejection) => println!("{}", rejection.to_string().red()),
            },
            Command::New => match session.restart() {
                Ok(()) => {
                    println!("\n🔄 New game started!");
                    print_board(&session);
                }
                Err(rejection) => println!("{}", rejection.to_string().red()),
            },
            Command::Guess(tokens) => {
                if session.outcome().is_finished() {
                    println!("{}", "The game is over. Type 'new' or 'quit'.".yellow());
                    continue;
                }

                match submit_tokens(&mut session, &tokens) {
                    Ok(Submitted::Revealing(pending)) => {
                        thread::sleep(config.reveal_delay);
                        if session.complete_reveal().is_some() {
                            println!("\n{} ", "✓ Correct!".green().bold());
                            print_category_row(puzzle, pending.category);
                        }
                    }
                    Ok(Submitted::Missed { one_away, .. }) => {
                        if one_away {
                            println!("{}", "One away...".bright_yellow().bold());
                        } else {
                            println!("{}", "✗ Not a group".red());
                        }
                    }
                    Err(message) => {
                        println!("{}", message.red());
                        continue;
                    }
                }

                print_board(&session);
                if session.outcome() != Outcome::Playing {
                    print_result(&session);
                    println!("Type 'new' to play again or 'quit' to exit.");
                }
            }
        }
    }
}

fn print_help() {
    println!("\nFind four groups of four words that share something in common.");
    println!("Enter four words as board numbers or text, e.g. '1 5 9 13' or 'mall, wax, cut, allen'.");
    println!("Commands: 'shuffle', 'deselect', 'new', 'share', 'help', 'quit'");
    println!("Category colours, easiest first:");
    for line in legend_lines() {
        println!("  {line}");
    }
}

/// One coloured square and difficulty label per category
fn legend_lines() -> Vec<String> {
    CategoryIndex::ALL
        .into_iter()
        .zip(DIFFICULTY)
        .map(|(index, label)| format!("{} {label}", "■".color(category_color(index))))
        .collect()
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
