//! Simulate command
//!
//! Plays many sessions with a random guesser to gauge how forgiving a puzzle
//! is. Games run in parallel; each one owns its session and shares only the
//! puzzle.

use crate::config::GameConfig;
use crate::core::{CATEGORY_COUNT, GROUP_SIZE, Puzzle};
use crate::engine::{Outcome, Rejection, Session, Submitted};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Give up on a game after this many refused submits in a row
const MAX_RETRIES: usize = 1_000;

/// Result of a single simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub outcome: Outcome,
    pub mistakes: usize,
    pub solved: usize,
    pub guesses: usize,
    pub one_aways: usize,
}

/// Aggregate statistics over all simulated games
#[derive(Debug)]
pub struct SimulationResult {
    pub title: String,
    pub games: usize,
    pub won: usize,
    pub lost: usize,
    pub average_guesses: f64,
    pub one_aways: usize,
    pub solved_distribution: [usize; CATEGORY_COUNT + 1],
    pub mistake_distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.won as f64 / self.games as f64
        }
    }
}

/// Play one game picking four random pool words each turn
pub fn play_random<R: Rng>(puzzle: &Puzzle, max_mistakes: usize, rng: &mut R) -> GameRecord {
    let mut session = Session::new(puzzle, max_mistakes, StdRng::seed_from_u64(rng.random()));
    let mut one_aways = 0;
    let mut retries = 0;

    while session.outcome() == Outcome::Playing && retries < MAX_RETRIES {
        let picks: Vec<_> = session
            .pool()
            .choose_multiple(rng, GROUP_SIZE)
            .cloned()
            .collect();
        let selected = picks
            .iter()
            .try_for_each(|word| session.toggle(word).map(|_| ()));

        match selected.and_then(|()| session.submit()) {
            Ok(Submitted::Revealing(_)) => {
                session.complete_reveal();
                retries = 0;
            }
            Ok(Submitted::Missed { one_away, .. }) => {
                one_aways += usize::from(one_away);
                retries = 0;
            }
            Err(Rejection::AlreadyGuessed | Rejection::Incomplete) => {
                match session.clear_selection() {
                    Ok(()) | Err(Rejection::NothingSelected) => retries += 1,
                    Err(rejection) => {
                        warn!(%rejection, "could not clear selection, abandoning game");
                        break;
                    }
                }
            }
            Err(rejection) => {
                warn!(%rejection, "unexpected refusal, abandoning game");
                break;
            }
        }
    }

    let progress = session.progress();
    GameRecord {
        outcome: session.outcome(),
        mistakes: progress.mistakes,
        solved: progress.solved.len(),
        guesses: session.history().len(),
        one_aways,
    }
}

/// Run `games` random-guesser sessions on `puzzle`
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_simulation(puzzle: &Puzzle, config: &GameConfig, games: usize) -> SimulationResult {
    println!("🎲 Simulating {games} games...");

    let pb = ProgressBar::new(games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("static progress template")
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let records: Vec<GameRecord> = (0..games as u64)
        .into_par_iter()
        .map(|n| {
            let mut rng = config.rng_for(n);
            let record = play_random(puzzle, config.max_mistakes, &mut rng);
            pb.inc(1);
            record
        })
        .collect();
    pb.finish_with_message("Complete!");

    summarize(puzzle.title(), &records, start.elapsed())
}

/// Fold game records into statistics
#[must_use]
pub fn summarize(title: &str, records: &[GameRecord], duration: Duration) -> SimulationResult {
    let games = records.len();
    let won = records.iter().filter(|r| r.outcome == Outcome::Won).count();
    let lost = records.iter().filter(|r| r.outcome == Outcome::Lost).count();

    let mut solved_distribution = [0; CATEGORY_COUNT + 1];
    let mut mistake_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for record in records {
        solved_distribution[record.solved.min(CATEGORY_COUNT)] += 1;
        *mistake_distribution.entry(record.mistakes).or_insert(0) += 1;
    }

    let total_guesses: usize = records.iter().map(|r| r.guesses).sum();
    let average_guesses = if games > 0 {
        total_guesses as f64 / games as f64
    } else {
        0.0
    };

    let seconds = duration.as_secs_f64();
    SimulationResult {
        title: title.to_string(),
        games,
        won,
        lost,
        average_guesses,
        one_aways: records.iter().map(|r| r.one_aways).sum(),
        solved_distribution,
        mistake_distribution,
        duration,
        games_per_second: if seconds > 0.0 {
            games as f64 / seconds
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::builtin;

    #[test]
    fn random_game_finishes() {
        let puzzle = builtin::puzzle(1).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..20 {
            let record = play_random(&puzzle, 4, &mut rng);
            assert!(record.outcome.is_finished());
            assert!(record.mistakes <= 4);
            assert_eq!(record.guesses, record.mistakes + record.solved);
            if record.outcome == Outcome::Won {
                assert_eq!(record.solved, 4);
            } else {
                assert_eq!(record.mistakes, 4);
            }
        }
    }

    #[test]
    fn generous_budget_always_wins() {
        // With 4 words left the only possible pick is the last category
        let puzzle = builtin::puzzle(2).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let record = play_random(&puzzle, 10_000, &mut rng);
        assert_eq!(record.outcome, Outcome::Won);
    }

    #[test]
    fn repeated_picks_are_retried() {
        // A large budget makes repeat picks common; each one must be cleared and retried
        let puzzle = builtin::puzzle(1).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..3 {
            let record = play_random(&puzzle, 10_000, &mut rng);
            assert_eq!(record.outcome, Outcome::Won);
            assert_eq!(record.solved, 4);
            assert_eq!(record.guesses, record.mistakes + 4);
        }
    }

    #[test]
    fn simulation_counts_add_up() {
        let puzzle = builtin::puzzle(3).unwrap();
        let config = GameConfig::new(4, 0, Some(1));
        let result = run_simulation(&puzzle, &config, 50);

        assert_eq!(result.games, 50);
        assert_eq!(result.won + result.lost, 50);
        assert_eq!(result.solved_distribution.iter().sum::<usize>(), 50);
        assert_eq!(result.mistake_distribution.values().sum::<usize>(), 50);
        assert!((0.0..=1.0).contains(&result.win_rate()));
    }

    #[test]
    fn simulation_is_repeatable_with_seed() {
        let puzzle = builtin::puzzle(1).unwrap();
        let config = GameConfig::new(4, 0, Some(99));
        let a = run_simulation(&puzzle, &config, 30);
        let b = run_simulation(&puzzle, &config, 30);
        assert_eq!(a.won, b.won);
        assert_eq!(a.solved_distribution, b.solved_distribution);
    }

    #[test]
    fn summarize_empty() {
        let result = summarize("t", &[], Duration::ZERO);
        assert_eq!(result.games, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }
}
