use crate::tracker::seed::SeriesSeed;
use chrono::{Duration, NaiveDate};

/// Number of days shown in the weekly series, today included.
pub const WEEK_LEN: usize = 7;

/// One day's label and cup count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySample {
    pub label: String,
    pub count: u32,
}

/// The trailing seven days, oldest first, today last.
///
/// Backed by a fixed array so the length cannot drift. Only today's count
/// can be changed after initialization, and only from inside the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySeries {
    days: [DaySample; WEEK_LEN],
}

impl WeeklySeries {
    /// Build the seven samples ending at `today`.
    ///
    /// Earlier days are filled from `seed`; today starts at `today_count`.
    pub fn initialize(
        today: NaiveDate,
        label_format: &str,
        today_count: u32,
        seed: &mut dyn SeriesSeed,
    ) -> Self {
        let days = std::array::from_fn(|i| {
            let days_ago = WEEK_LEN - 1 - i;
            let date = today - Duration::days(days_ago as i64);
            let count = if days_ago == 0 {
                today_count
            } else {
                seed.count_for(days_ago)
            };
            DaySample {
                label: date.format(label_format).to_string(),
                count,
            }
        });
        Self { days }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DaySample> {
        self.days.iter()
    }

    /// Today's sample.
    pub fn today(&self) -> &DaySample {
        &self.days[WEEK_LEN - 1]
    }

    /// Highest count in the week.
    pub fn max_count(&self) -> u32 {
        self.days.iter().map(|d| d.count).max().unwrap_or(0)
    }

    pub(super) fn set_today(&mut self, count: u32) {
        self.days[WEEK_LEN - 1].count = count;
    }
}

impl std::ops::Index<usize> for WeeklySeries {
    type Output = DaySample;

    fn index(&self, index: usize) -> &DaySample {
        &self.days[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::seed::{HistorySeed, ZeroSeed};

    #[test]
    fn test_labels_end_today() {
        // 2026-10-18 is a Sunday
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let series = WeeklySeries::initialize(today, "%a", 0, &mut ZeroSeed);
        let labels: Vec<_> = series.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }

    #[test]
    fn test_seeded_counts_oldest_first() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let mut seed = HistorySeed::new(vec![1, 2, 3, 4, 5, 6]);
        let series = WeeklySeries::initialize(today, "%a", 9, &mut seed);
        let counts: Vec<_> = series.iter().map(|d| d.count).collect();
        assert_eq!(counts, [1, 2, 3, 4, 5, 6, 9]);
        assert_eq!(series.today().count, 9);
        assert_eq!(series.max_count(), 9);
    }

    #[test]
    fn test_custom_label_format() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
        let series = WeeklySeries::initialize(today, "%d", 0, &mut ZeroSeed);
        assert_eq!(series[0].label, "28");
        assert_eq!(series[6].label, "03");
    }
}
