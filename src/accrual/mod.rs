//! Capped run-based day counting from vessel state logs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::{group_into_runs, Run};
use crate::domain::{AccrualRule, DayRecord};

/// Result of a standby accrual evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualOutcome {
    /// Qualifying runs, ascending by start date, each already capped.
    pub runs: Vec<Run>,
    pub total_counted_days: u32,
}

/// Groups qualifying days into runs and sums the capped per-run counts.
///
/// The cap resets at the start of every run: a regulation crediting only
/// the first K days of an uninterrupted stint must credit up to K again
/// once a gap beyond tolerance breaks the stint. A cap of zero is legal
/// and credits nothing.
pub fn evaluate_accrual(ledger: &[DayRecord], rule: &AccrualRule) -> AccrualOutcome {
    let qualifying: Vec<NaiveDate> = ledger
        .iter()
        .filter(|record| rule.qualifies(record.state))
        .map(|record| record.date)
        .collect();

    let runs: Vec<Run> = group_into_runs(&qualifying, rule.gap_tolerance_days)
        .into_iter()
        .map(|run| run.capped(rule.cap_per_run))
        .collect();
    let total_counted_days = runs.iter().map(|run| run.counted_days).sum();

    debug!(
        qualifying_days = qualifying.len(),
        runs = runs.len(),
        total_counted_days,
        "accrual evaluated"
    );
    AccrualOutcome {
        runs,
        total_counted_days,
    }
}
