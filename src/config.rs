//! Game configuration
//!
//! Settings shared by every front end. The CLI fills this from its flags.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

/// Default mistake budget
pub const DEFAULT_MAX_MISTAKES: usize = 4;

/// Default pause between highlighting a correct guess and removing it
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(500);

/// Settings for a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Incorrect guesses allowed before the game is lost (at least 1)
    pub max_mistakes: usize,
    /// How long a correct guess stays highlighted before it is removed
    pub reveal_delay: Duration,
    /// Fixed shuffle seed; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_mistakes: DEFAULT_MAX_MISTAKES,
            reveal_delay: DEFAULT_REVEAL_DELAY,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(max_mistakes: usize, reveal_delay_ms: u64, seed: Option<u64>) -> Self {
        Self {
            max_mistakes: max_mistakes.max(1),
            reveal_delay: Duration::from_millis(reveal_delay_ms),
            seed,
        }
    }

    /// Random source for shuffling
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Random source for the `n`-th of many independent games
    #[must_use]
    pub fn rng_for(&self, n: u64) -> StdRng {
        self.seed.map_or_else(StdRng::from_os_rng, |seed| {
            StdRng::seed_from_u64(seed.wrapping_add(n))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_mistakes, 4);
        assert_eq!(config.reveal_delay, Duration::from_millis(500));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn zero_mistakes_clamped() {
        assert_eq!(GameConfig::new(0, 0, None).max_mistakes, 1);
        assert_eq!(GameConfig::new(6, 0, None).max_mistakes, 6);
    }

    #[test]
    fn seeded_rng_is_repeatable() {
        let config = GameConfig::new(4, 500, Some(9));
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);

        let c: u64 = config.rng_for(1).random();
        let d: u64 = config.rng_for(2).random();
        assert_ne!(c, d);
    }
}
