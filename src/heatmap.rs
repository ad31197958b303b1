use chrono::{Datelike, NaiveDate};
use rand::Rng;

/// Days of the month that always get a burst of activity.
const SPIKE_DAYS: [u32; 4] = [10, 15, 22, 28];
const FIRST_DAY_COUNT: u32 = 3;
const WEEKEND_ACTIVE_CHANCE: f64 = 0.6;

pub const DAY_LABELS_SHORT: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];
pub const DAY_LABELS_FULL: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
pub const LEGEND_COUNTS: [u32; 5] = [0, 1, 3, 5, 7];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u32,
}

impl ContributionDay {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count }
    }

    pub fn weekday_index(&self) -> usize {
        self.date.weekday().num_days_from_sunday() as usize
    }

    pub fn level(&self) -> u8 {
        intensity_level(self.count)
    }

    pub fn describe(&self) -> String {
        let plural = if self.count == 1 { "" } else { "s" };
        format!(
            "{} \u{2014} {} contribution{plural}",
            self.date.format("%b %-d"),
            self.count
        )
    }
}

/// Bucket used for the cell colour: 0, 1-2, 3-4, 5-6, 7+.
pub fn intensity_level(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=4 => 2,
        5..=6 => 3,
        _ => 4,
    }
}

/// One record per calendar day of `year`/`month`, busier on weekdays and
/// spiking on a few fixed dates. An invalid month yields no days.
pub fn generate_month<R: Rng>(rng: &mut R, year: i32, month: u32) -> Vec<ContributionDay> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|date| date.month() == month)
        .map(|date| {
            let weekend = date.weekday().num_days_from_sunday() % 6 == 0;
            let mut count = if !weekend {
                rng.gen_range(1..=6)
            } else if rng.gen_bool(WEEKEND_ACTIVE_CHANCE) {
                rng.gen_range(1..=3)
            } else {
                0
            };

            if SPIKE_DAYS.contains(&date.day()) {
                count = rng.gen_range(5..=8);
            }
            if date.day() == 1 {
                count = FIRST_DAY_COUNT;
            }

            ContributionDay::new(date, count)
        })
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContributionStats {
    pub total: u32,
    pub active_days: usize,
    pub days: usize,
    pub longest_streak: usize,
}

impl ContributionStats {
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mut stats = Self::default();
        let mut streak = 0;

        for count in counts {
            stats.days += 1;
            stats.total += count;

            if count > 0 {
                stats.active_days += 1;
                streak += 1;
                stats.longest_streak = stats.longest_streak.max(streak);
            } else {
                streak = 0;
            }
        }

        stats
    }

    pub fn from_days(days: &[ContributionDay]) -> Self {
        Self::from_counts(days.iter().map(|day| day.count))
    }
}

/// Lays days out as Sunday-first weeks; slots before the first day and
/// after the last are `None`.
pub fn weeks(days: &[ContributionDay]) -> Vec<[Option<&ContributionDay>; 7]> {
    let mut weeks = Vec::new();
    let mut current: [Option<&ContributionDay>; 7] = [None; 7];
    let mut filled = false;

    for day in days {
        let column = day.weekday_index();
        current[column] = Some(day);
        filled = true;

        if column == 6 {
            weeks.push(current);
            current = [None; 7];
            filled = false;
        }
    }

    if filled {
        weeks.push(current);
    }

    weeks
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, day).expect("valid February date")
    }

    #[test]
    fn stats_for_literal_sequence() {
        let stats = ContributionStats::from_counts([3, 0, 2, 2, 0]);

        assert_eq!(stats.total, 7);
        assert_eq!(stats.active_days, 3);
        assert_eq!(stats.days, 5);
        assert_eq!(stats.longest_streak, 2);
    }

    #[test]
    fn stats_for_empty_and_all_active_runs() {
        assert_eq!(ContributionStats::from_counts([]), ContributionStats::default());

        let stats = ContributionStats::from_counts([1, 1, 1, 1]);
        assert_eq!(stats.longest_streak, 4);
        assert_eq!(stats.active_days, 4);
    }

    #[test]
    fn february_has_one_record_per_day() {
        let days = generate_month(&mut SmallRng::seed_from_u64(1), 2026, 2);

        assert_eq!(days.len(), 28);
        assert_eq!(days.first().map(|day| day.date), Some(date(1)));
        assert_eq!(days.last().map(|day| day.date), Some(date(28)));
    }

    #[test]
    fn generated_counts_follow_the_day_rules() {
        for seed in 0..32 {
            let days = generate_month(&mut SmallRng::seed_from_u64(seed), 2026, 2);

            for day in &days {
                let dom = day.date.day();
                let weekend = matches!(day.weekday_index(), 0 | 6);

                if dom == 1 {
                    assert_eq!(day.count, 3);
                } else if SPIKE_DAYS.contains(&dom) {
                    assert!((5..=8).contains(&day.count), "spike day {dom} had {}", day.count);
                } else if weekend {
                    assert!(day.count <= 3);
                } else {
                    assert!((1..=6).contains(&day.count));
                }
            }
        }
    }

    #[test]
    fn same_seed_generates_same_month() {
        let first = generate_month(&mut SmallRng::seed_from_u64(99), 2026, 2);
        let second = generate_month(&mut SmallRng::seed_from_u64(99), 2026, 2);

        assert_eq!(first, second);
    }

    #[test]
    fn invalid_month_generates_nothing() {
        assert!(generate_month(&mut SmallRng::seed_from_u64(1), 2026, 13).is_empty());
    }

    #[test]
    fn intensity_buckets() {
        let levels: Vec<u8> = [0, 1, 2, 3, 4, 5, 6, 7, 12].into_iter().map(intensity_level).collect();

        assert_eq!(levels, [0, 1, 1, 2, 2, 3, 3, 4, 4]);
        let legend: Vec<u8> = LEGEND_COUNTS.into_iter().map(intensity_level).collect();
        assert_eq!(legend, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn february_2026_fills_four_full_weeks() {
        let days: Vec<ContributionDay> = (1..=28).map(|day| ContributionDay::new(date(day), 1)).collect();

        let grid = weeks(&days);

        assert_eq!(grid.len(), 4);
        assert!(grid.iter().all(|week| week.iter().all(Option::is_some)));
        assert_eq!(grid[0][0].map(|day| day.date), Some(date(1)));
    }

    #[test]
    fn leading_and_trailing_slots_are_blank() {
        // January 2026 starts on a Thursday and ends on a Saturday.
        let days: Vec<ContributionDay> = (1..=31)
            .map(|day| {
                let date = NaiveDate::from_ymd_opt(2026, 1, day).expect("valid January date");
                ContributionDay::new(date, 0)
            })
            .collect();

        let grid = weeks(&days);

        assert_eq!(grid.len(), 5);
        assert!(grid[0][..4].iter().all(Option::is_none));
        assert_eq!(grid[0][4].map(|day| day.date.day()), Some(1));
        assert_eq!(grid[4][6].map(|day| day.date.day()), Some(31));
    }

    #[test]
    fn describe_pluralizes() {
        assert_eq!(ContributionDay::new(date(15), 1).describe(), "Feb 15 \u{2014} 1 contribution");
        assert_eq!(ContributionDay::new(date(3), 0).describe(), "Feb 3 \u{2014} 0 contributions");
    }
}
