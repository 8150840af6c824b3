//! Today's coffee count and the weekly series it feeds.
//!
//! The counter and the last sample of the series are always written together
//! from the freshly computed value, so they cannot fall out of step between
//! renders.

pub mod seed;
pub mod series;

use chrono::NaiveDate;
use tracing::debug;

pub use seed::{HistorySeed, RandomSeed, SeriesSeed, ZeroSeed};
pub use series::{DaySample, WeeklySeries, WEEK_LEN};

/// Default `chrono` format for day labels (`Mon`, `Tue`, ...).
pub const DEFAULT_LABEL_FORMAT: &str = "%a";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tracker {
    today_count: u32,
    series: WeeklySeries,
}

impl Tracker {
    /// Start a fresh day at zero cups with the previous six days seeded.
    pub fn mount(today: NaiveDate, label_format: &str, seed: &mut dyn SeriesSeed) -> Self {
        let series = WeeklySeries::initialize(today, label_format, 0, seed);
        debug!(?today, "weekly series initialized");
        Self {
            today_count: 0,
            series,
        }
    }

    pub fn today_count(&self) -> u32 {
        self.today_count
    }

    pub fn series(&self) -> &WeeklySeries {
        &self.series
    }

    pub fn can_decrement(&self) -> bool {
        self.today_count > 0
    }

    /// Add a cup. Returns the new count.
    pub fn increment(&mut self) -> u32 {
        self.set_count(self.today_count.saturating_add(1));
        debug!(count = self.today_count, "increment");
        self.today_count
    }

    /// Remove a cup. Returns `None` and leaves state alone when already at zero.
    pub fn decrement(&mut self) -> Option<u32> {
        if !self.can_decrement() {
            debug!("decrement ignored at zero");
            return None;
        }
        self.set_count(self.today_count - 1);
        debug!(count = self.today_count, "decrement");
        Some(self.today_count)
    }

    fn set_count(&mut self, count: u32) {
        self.today_count = count;
        self.series.set_today(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> Tracker {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        Tracker::mount(today, DEFAULT_LABEL_FORMAT, &mut ZeroSeed)
    }

    fn assert_in_sync(t: &Tracker) {
        assert_eq!(t.series().len(), WEEK_LEN);
        assert_eq!(t.series()[WEEK_LEN - 1].count, t.today_count());
    }

    #[test]
    fn test_mount_starts_at_zero_in_sync() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let mut seed = RandomSeed::new(4);
        let t = Tracker::mount(today, DEFAULT_LABEL_FORMAT, &mut seed);
        assert_eq!(t.today_count(), 0);
        assert!(!t.can_decrement());
        assert_in_sync(&t);
    }

    #[test]
    fn test_increment_updates_last_sample() {
        let mut t = fresh();
        for expected in 1..=5 {
            let old = t.today_count();
            assert_eq!(t.increment(), expected);
            assert_eq!(t.today_count(), old + 1);
            assert_in_sync(&t);
        }
    }

    #[test]
    fn test_decrement_at_zero_is_noop() {
        let mut t = fresh();
        let before = t.clone();
        assert_eq!(t.decrement(), None);
        assert_eq!(t, before);
    }

    #[test]
    fn test_only_today_changes() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let mut seed = HistorySeed::new(vec![3, 1, 4, 1, 5, 9]);
        let mut t = Tracker::mount(today, DEFAULT_LABEL_FORMAT, &mut seed);
        let earlier: Vec<_> = t.series().iter().take(WEEK_LEN - 1).cloned().collect();
        t.increment();
        t.increment();
        t.decrement();
        let after: Vec<_> = t.series().iter().take(WEEK_LEN - 1).cloned().collect();
        assert_eq!(after, earlier);
        assert_eq!(t.series().today().count, 1);
    }

    #[test]
    fn test_scenario_up_and_down() {
        let mut t = fresh();
        t.increment();
        t.increment();
        t.increment();
        assert_eq!(t.today_count(), 3);
        assert_eq!(t.series()[6].count, 3);

        assert_eq!(t.decrement(), Some(2));
        assert_eq!(t.series()[6].count, 2);

        t.decrement();
        t.decrement();
        assert_eq!(t.today_count(), 0);
        assert_eq!(t.decrement(), None);
        assert_eq!(t.today_count(), 0);
        assert_in_sync(&t);
    }

    #[test]
    fn test_never_negative_over_action_sequences() {
        // Walk every sequence of 8 presses (bit set = increment).
        for pattern in 0u32..256 {
            let mut t = fresh();
            for bit in 0..8 {
                let before = t.today_count();
                if pattern & (1 << bit) != 0 {
                    t.increment();
                    assert_eq!(t.today_count(), before + 1);
                } else if before == 0 {
                    assert_eq!(t.decrement(), None);
                    assert_eq!(t.today_count(), 0);
                } else {
                    assert_eq!(t.decrement(), Some(before - 1));
                }
                assert_in_sync(&t);
            }
        }
    }
}
