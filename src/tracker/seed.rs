//! Seeders for the days before today.
//!
//! The weekly series only ever learns today's count from the counter, so the
//! six earlier days have to come from somewhere at mount time. A [`SeriesSeed`]
//! supplies them, which keeps the tracker free of hardcoded randomness.

use rand::RngExt;

/// Supplies cup counts for the days preceding today.
pub trait SeriesSeed {
    /// Count for the day `days_ago` days before today (1 = yesterday).
    fn count_for(&mut self, days_ago: usize) -> u32;
}

/// Every earlier day starts at zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroSeed;

impl SeriesSeed for ZeroSeed {
    fn count_for(&mut self, _days_ago: usize) -> u32 {
        0
    }
}

/// Uniform random counts in `0..=max_cups`. Useful for demos.
#[derive(Debug, Clone, Copy)]
pub struct RandomSeed {
    pub max_cups: u32,
}

impl RandomSeed {
    pub fn new(max_cups: u32) -> Self {
        Self { max_cups }
    }
}

impl SeriesSeed for RandomSeed {
    fn count_for(&mut self, _days_ago: usize) -> u32 {
        let mut rng = rand::rng();
        rng.random_range(0..=self.max_cups)
    }
}

/// Counts taken from a supplied history, oldest first, yesterday last.
///
/// Days not covered by the history are zero.
#[derive(Debug, Clone, Default)]
pub struct HistorySeed {
    counts: Vec<u32>,
}

impl HistorySeed {
    pub fn new(counts: Vec<u32>) -> Self {
        Self { counts }
    }
}

impl SeriesSeed for HistorySeed {
    fn count_for(&mut self, days_ago: usize) -> u32 {
        if days_ago == 0 {
            return 0;
        }
        self.counts
            .len()
            .checked_sub(days_ago)
            .and_then(|i| self.counts.get(i))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed() {
        let mut seed = ZeroSeed;
        assert!((1..=6).all(|d| seed.count_for(d) == 0));
    }

    #[test]
    fn test_random_seed_stays_in_range() {
        let mut seed = RandomSeed::new(4);
        for _ in 0..200 {
            assert!(seed.count_for(1) <= 4);
        }
        let mut never = RandomSeed::new(0);
        assert_eq!(never.count_for(3), 0);
    }

    #[test]
    fn test_history_seed_aligns_to_yesterday() {
        let mut seed = HistorySeed::new(vec![5, 6, 7]);
        assert_eq!(seed.count_for(1), 7);
        assert_eq!(seed.count_for(2), 6);
        assert_eq!(seed.count_for(3), 5);
        assert_eq!(seed.count_for(4), 0);
        assert_eq!(seed.count_for(6), 0);
    }

    #[test]
    fn test_history_seed_empty() {
        let mut seed = HistorySeed::default();
        assert_eq!(seed.count_for(1), 0);
    }
}
