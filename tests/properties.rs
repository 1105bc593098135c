//! Property-based tests for session mechanics.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use clusters::core::{CATEGORY_COUNT, CategoryIndex, GROUP_SIZE, Guess, Puzzle, Word};
use clusters::engine::{
    Outcome, Pool, Rejection, Session, Submitted, common_category_count, evaluate, mistake_count,
    visible_pool,
};
use clusters::puzzles::builtin;

fn puzzle() -> Puzzle {
    builtin::puzzle(1).unwrap()
}

fn solution(puzzle: &Puzzle, index: usize) -> Guess {
    Guess::new(puzzle.categories()[index].words().clone())
}

/// Strategy: a subset of categories as a 4-bit mask.
fn solved_mask() -> impl Strategy<Value = u8> {
    0..16u8
}

/// Strategy: four distinct positions on a full board.
fn pick_strategy() -> impl Strategy<Value = Vec<usize>> {
    Just((0..16).collect::<Vec<usize>>())
        .prop_shuffle()
        .prop_map(|v| v[..GROUP_SIZE].to_vec())
}

fn submit_words(session: &mut Session<'_, StdRng>, words: &[Word]) -> Result<Submitted, Rejection> {
    for word in words {
        session.toggle(word)?;
    }
    session.submit()
}

proptest! {
    // 1. The pool holds exactly the words of unrevealed categories
    #[test]
    fn pool_is_unrevealed_words(seed in any::<u64>(), mask in solved_mask()) {
        let puzzle = puzzle();
        let history: Vec<Guess> = (0..CATEGORY_COUNT)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| solution(&puzzle, i))
            .collect();

        let mut rng = StdRng::seed_from_u64(seed);
        let pool = visible_pool(&puzzle, &history, &mut rng);

        let unrevealed = CATEGORY_COUNT - mask.count_ones() as usize;
        prop_assert_eq!(pool.len(), unrevealed * GROUP_SIZE);
        for word in &pool {
            let index = puzzle.index_of(word).unwrap();
            prop_assert!(mask & (1 << index.get()) == 0);
        }
        let mut sorted = pool.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), pool.len());
    }

    // 2. Shuffling never changes membership
    #[test]
    fn shuffle_keeps_members(deal_seed in any::<u64>(), shuffle_seed in any::<u64>()) {
        let puzzle = puzzle();
        let mut pool = Pool::deal(&puzzle, &[], &mut StdRng::seed_from_u64(deal_seed));
        let mut before = pool.words().to_vec();

        pool.shuffle(&mut StdRng::seed_from_u64(shuffle_seed));
        let mut after = pool.words().to_vec();

        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    // 3. A guess always shares at least one category and is correct only at four
    #[test]
    fn common_count_bounds(picks in pick_strategy(), seed in any::<u64>()) {
        let puzzle = puzzle();
        let pool = visible_pool(&puzzle, &[], &mut StdRng::seed_from_u64(seed));
        let words: Vec<Word> = picks.iter().map(|&i| pool[i].clone()).collect();
        let guess = Guess::from_selection(&words).unwrap();

        let common = common_category_count(&puzzle, &guess);
        prop_assert!((1..=GROUP_SIZE).contains(&common));
        prop_assert_eq!(evaluate(&puzzle, &guess).is_correct(), common == GROUP_SIZE);
    }

    // 4. Each accepted incorrect submit costs exactly one mistake; repeats cost nothing
    #[test]
    fn mistakes_increment_once(picks in pick_strategy(), seed in any::<u64>()) {
        let puzzle = puzzle();
        let mut session = Session::new(&puzzle, 4, StdRng::seed_from_u64(seed));
        let words: Vec<Word> = picks.iter().map(|&i| session.pool()[i].clone()).collect();

        match submit_words(&mut session, &words).unwrap() {
            Submitted::Missed { .. } => {
                prop_assert_eq!(session.progress().mistakes, 1);
                prop_assert_eq!(
                    submit_words(&mut session, &words).unwrap_err(),
                    Rejection::AlreadyGuessed
                );
                prop_assert_eq!(session.progress().mistakes, 1);
                prop_assert_eq!(session.history().len(), 1);
            }
            Submitted::Revealing(_) => {
                prop_assert!(session.complete_reveal().is_some());
                prop_assert_eq!(session.progress().mistakes, 0);
                prop_assert_eq!(session.pool().len(), 12);
            }
        }
    }

    // 5. Solving the categories in any order wins
    #[test]
    fn any_order_wins(
        order in Just((0..CATEGORY_COUNT).collect::<Vec<usize>>()).prop_shuffle(),
        seed in any::<u64>(),
    ) {
        let puzzle = puzzle();
        let mut session = Session::new(&puzzle, 4, StdRng::seed_from_u64(seed));

        for (step, &index) in order.iter().enumerate() {
            let words = puzzle.categories()[index].words().clone();
            let submitted = submit_words(&mut session, &words).unwrap();
            prop_assert!(matches!(submitted, Submitted::Revealing(_)));

            let revealed = session.complete_reveal().unwrap();
            prop_assert_eq!(revealed.category, CategoryIndex::new(index as u8).unwrap());
            prop_assert_eq!(session.pool().len(), (CATEGORY_COUNT - step - 1) * GROUP_SIZE);
        }

        prop_assert_eq!(session.outcome(), Outcome::Won);
        let revealed: Vec<usize> = session.revealed().iter().map(|i| i.get()).collect();
        prop_assert_eq!(revealed, order);
    }

    // 6. Random play keeps the counters consistent
    #[test]
    fn random_play_is_consistent(seed in any::<u64>(), max_mistakes in 1..6usize) {
        let puzzle = puzzle();
        let mut session = Session::new(&puzzle, max_mistakes, StdRng::seed_from_u64(seed));
        let mut picker = StdRng::seed_from_u64(seed.rotate_left(17));

        for _ in 0..200 {
            if session.outcome().is_finished() {
                break;
            }
            let words: Vec<Word> = {
                use rand::seq::IndexedRandom;
                session.pool().choose_multiple(&mut picker, GROUP_SIZE).cloned().collect()
            };
            match submit_words(&mut session, &words) {
                Ok(Submitted::Revealing(_)) => {
                    session.complete_reveal();
                }
                Ok(Submitted::Missed { .. }) => {}
                Err(_) => {
                    let _ = session.clear_selection();
                }
            }

            let progress = session.progress();
            prop_assert!(progress.mistakes <= max_mistakes);
            prop_assert_eq!(progress.mistakes, mistake_count(&puzzle, session.history()));
            prop_assert_eq!(session.history().len(), progress.mistakes + progress.solved.len());
            if session.outcome() == Outcome::Playing {
                prop_assert_eq!(
                    session.pool().len(),
                    (CATEGORY_COUNT - progress.solved.len()) * GROUP_SIZE
                );
            }
        }

        if session.outcome() == Outcome::Lost {
            prop_assert_eq!(session.revealed().len(), CATEGORY_COUNT);
            prop_assert!(session.pool().is_empty());
        }
    }
}
