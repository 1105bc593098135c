//! Display functions for command results

use super::formatters::{category_color, category_text_color, create_progress_bar, mistake_dots};
use super::share::share_text;
use crate::commands::{DecodeResult, EncodeResult, PuzzleListing, SimulationResult};
use crate::core::{CATEGORY_COUNT, CategoryIndex, Puzzle};
use crate::engine::{Outcome, Session};
use colored::Colorize;
use rand::Rng;

/// Print the puzzle header
pub fn print_header(puzzle: &Puzzle) {
    println!("\n{}", "═".repeat(60).cyan());
    let title = if puzzle.title().is_empty() {
        "UNTITLED".to_string()
    } else {
        puzzle.title().to_uppercase()
    };
    if puzzle.author().is_empty() {
        println!(" {}", title.bright_yellow().bold());
    } else {
        println!(
            " {} by {}",
            title.bright_yellow().bold(),
            puzzle.author().to_uppercase()
        );
    }
    println!("{}", "═".repeat(60).cyan());
}

/// Print a finished category row
pub fn print_category_row(puzzle: &Puzzle, index: CategoryIndex) {
    let category = puzzle.category(index);
    let words: Vec<&str> = category.words().iter().map(|w| w.text()).collect();
    let row = format!(" {:<32} {}", category.name().to_uppercase(), words.join(", "));
    println!(
        "{}",
        row.color(category_text_color(index))
            .on_color(category_color(index))
            .bold()
    );
}

/// Print solved rows, the numbered pool and the mistake budget
pub fn print_board<R: Rng>(session: &Session<'_, R>) {
    let puzzle = session.puzzle();

    println!();
    for index in session.revealed() {
        print_category_row(puzzle, index);
    }

    for (row, chunk) in session.pool().chunks(4).enumerate() {
        let cells: Vec<String> = chunk
            .iter()
            .enumerate()
            .map(|(col, word)| {
                let label = format!("{:>2}. {:<14}", row * 4 + col + 1, word.text());
                if session.is_selected(word) {
                    label.reversed().bold().to_string()
                } else {
                    label
                }
            })
            .collect();
        println!(" {}", cells.join(" "));
    }

    println!(
        "\n Mistakes remaining: {}",
        mistake_dots(session.remaining_mistakes(), session.max_mistakes()).bright_white()
    );
}

/// Print the end-of-game banner and share text
pub fn print_result<R: Rng>(session: &Session<'_, R>) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match session.outcome() {
        Outcome::Won => println!("{}", "    🎉  You won, congrats!  🎉".bright_green().bold()),
        Outcome::Lost => println!("{}", "    Not quite, better luck next time!".bright_white()),
        Outcome::Playing => {}
    }
    println!("{}", "═".repeat(60).bright_cyan());

    println!(
        "\n{}\n",
        share_text(session.puzzle(), session.history(), session.max_mistakes())
    );
}

/// Print the built-in puzzle list
pub fn print_puzzle_list(listings: &[PuzzleListing]) {
    println!("\n{}", "Built-in puzzles".bright_cyan().bold());
    for listing in listings {
        println!(
            "\n  {}. {} by {}",
            listing.number,
            listing.title.to_uppercase().bright_yellow().bold(),
            listing.author.to_uppercase()
        );
        println!("     {}", listing.encoded.bright_black());
    }
    println!();
}

/// Print an encoded puzzle
pub fn print_encode_result(result: &EncodeResult) {
    println!("\n{} {}", "✓".green().bold(), "Puzzle is valid".green());
    for (index, category) in CategoryIndex::ALL.into_iter().zip(result.puzzle.categories()) {
        println!(
            "  {} {}",
            "■".color(category_color(index)),
            category.name().to_uppercase()
        );
    }
    println!("\n{}\n{}\n", "options=".bright_black(), result.encoded);
}

/// Print a decoded puzzle as options JSON
///
/// The JSON goes to stdout on its own so it can be redirected into a file and
/// passed back to `encode`; the summary goes to stderr.
pub fn print_decode_result(result: &DecodeResult) {
    eprintln!(
        "{} {} by {}",
        "✓".green().bold(),
        result.puzzle.title().to_uppercase().bright_yellow().bold(),
        result.puzzle.author().to_uppercase()
    );
    println!("{}", result.json);
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}",
        "SIMULATION:".bright_cyan().bold(),
        result.title.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Random guesser:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Won / lost:       {} / {}",
        result.won.to_string().green(),
        result.lost.to_string().red()
    );
    println!("   Average guesses:  {:.2}", result.average_guesses);
    println!("   One away hints:   {}", result.one_aways);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Categories solved:".bright_cyan().bold());
    for (solved, &count) in result.solved_distribution.iter().enumerate() {
        let pct = percent(count, result.games);
        let bar = create_progress_bar(pct, 100.0, 40);
        let label = if solved == CATEGORY_COUNT {
            "all".to_string()
        } else {
            solved.to_string()
        };
        println!("   {label:>3}: {} {count:6} ({pct:5.1}%)", bar.green());
    }

    println!("\n💥 {}", "Mistakes made:".bright_cyan().bold());
    let mut mistakes: Vec<_> = result.mistake_distribution.iter().collect();
    mistakes.sort_unstable();
    for (&made, &count) in mistakes {
        let pct = percent(count, result.games);
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {made:>3}: {} {count:6} ({pct:5.1}%)", bar.red());
    }
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
