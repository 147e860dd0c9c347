//! Leaf date arithmetic: day counts, window enumeration, and gap-tolerant
//! grouping of sorted dates into runs.
//!
//! Day counts are inclusive-both-ends for totals and run lengths, and
//! exclusive (days strictly between two dates) for gap decisions. Mixing
//! the two conventions is where the off-by-one bugs live, so every caller
//! in this crate goes through these two functions.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::ValidityWindow;

/// Inclusive-both-ends day count; argument order does not matter.
pub fn days_between_inclusive(a: NaiveDate, b: NaiveDate) -> i64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    (hi - lo).num_days() + 1
}

/// Count of days strictly between two dates: 0 for equal or adjacent days.
pub fn gap_days(earlier: NaiveDate, later: NaiveDate) -> i64 {
    ((later - earlier).num_days() - 1).max(0)
}

/// Every date in `[window.start, window.end]`, ascending.
pub fn enumerate_days(window: &ValidityWindow) -> Vec<NaiveDate> {
    let mut days = Vec::with_capacity(window.total_days() as usize);
    let mut cursor = window.start;
    while cursor <= window.end {
        days.push(cursor);
        cursor += Duration::days(1);
    }
    days
}

/// A maximal stretch of qualifying days under a gap tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Inclusive calendar span of the run, bridged gap days included.
    pub length_days: u32,
    /// Days this run contributes after any per-run cap; always
    /// `<= length_days`.
    pub counted_days: u32,
}

impl Run {
    fn uncapped(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        let length_days = days_between_inclusive(start_date, end_date) as u32;
        Self {
            start_date,
            end_date,
            length_days,
            counted_days: length_days,
        }
    }

    /// Caps this run's contribution, counted from the run's start.
    pub(crate) fn capped(mut self, cap: u32) -> Self {
        self.counted_days = self.length_days.min(cap);
        self
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Groups dates into maximal runs, treating gaps of `gap_tolerance_days`
/// or fewer missing days as part of the same run.
///
/// Input order does not matter and duplicate dates are idempotent. Runs
/// come back uncapped (`counted_days == length_days`); per-run caps are
/// the accrual calculator's business.
pub fn group_into_runs(dates: &[NaiveDate], gap_tolerance_days: u32) -> Vec<Run> {
    let mut sorted = dates.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut runs = Vec::new();
    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return runs;
    };

    let mut start = first;
    let mut last = first;
    for date in iter {
        if gap_days(last, date) > i64::from(gap_tolerance_days) {
            runs.push(Run::uncapped(start, last));
            start = date;
        }
        last = date;
    }
    runs.push(Run::uncapped(start, last));
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_counts_use_distinct_conventions() {
        let jan1 = date(2024, 1, 1);
        let jan3 = date(2024, 1, 3);
        assert_eq!(days_between_inclusive(jan1, jan3), 3);
        assert_eq!(days_between_inclusive(jan3, jan1), 3);
        assert_eq!(days_between_inclusive(jan1, jan1), 1);
        assert_eq!(gap_days(jan1, jan3), 1);
        assert_eq!(gap_days(jan1, date(2024, 1, 2)), 0);
        assert_eq!(gap_days(jan1, jan1), 0);
    }

    #[test]
    fn grouping_empty_input_yields_no_runs() {
        assert!(group_into_runs(&[], 0).is_empty());
    }
}
