use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, Result};

/// Inclusive day bounds outside which ledger entries are not considered,
/// e.g. a visa's issue and expiry dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ValidityWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(EngineError::InvalidRange(format!(
                "window start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Inclusive-both-ends day count of the window.
    pub fn total_days(&self) -> i64 {
        crate::calendar::days_between_inclusive(self.start, self.end)
    }

    /// Effective evaluation window `[start, min(end, as_of)]`, or `None`
    /// when `as_of` falls before the window entirely.
    pub fn clamp_to(&self, as_of: NaiveDate) -> Option<ValidityWindow> {
        if as_of < self.start {
            return None;
        }
        Some(ValidityWindow {
            start: self.start,
            end: self.end.min(as_of),
        })
    }
}
