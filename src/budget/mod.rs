//! Day-budget evaluation for visa and residency compliance.
//!
//! Handles both rule shapes: a fixed allowance across an entire validity
//! window, and a rolling cap over a sliding trailing window (the
//! 90-days-in-any-180 pattern).

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{BudgetRule, ValidityWindow};
use crate::errors::{EngineError, Result};

/// Verdict of a budget evaluation as of a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetOutcome {
    /// For fixed rules, all qualifying days in the window; for rolling
    /// rules, qualifying days in the trailing window ending at `as_of`.
    pub days_used: u32,
    pub days_allowed: u32,
    pub days_remaining: u32,
    pub compliant: bool,
    /// Dates at which the rule was exceeded, ascending. Empty iff
    /// `compliant`.
    pub violations: Vec<NaiveDate>,
}

impl BudgetOutcome {
    pub fn is_exhausted(&self) -> bool {
        self.days_remaining == 0
    }
}

/// Evaluates a day budget against a ledger of qualifying dates.
///
/// Ledger dates outside `[window.start, min(window.end, as_of)]` never
/// count. An empty ledger is valid and compliant.
pub fn evaluate_budget(
    ledger_dates: &BTreeSet<NaiveDate>,
    window: &ValidityWindow,
    rule: &BudgetRule,
    as_of: NaiveDate,
) -> Result<BudgetOutcome> {
    // BTreeSet iteration keeps the filtered dates sorted ascending.
    let filtered: Vec<NaiveDate> = match window.clamp_to(as_of) {
        Some(effective) => ledger_dates
            .iter()
            .copied()
            .filter(|date| effective.contains(*date))
            .collect(),
        None => Vec::new(),
    };

    let outcome = match *rule {
        BudgetRule::Fixed { allowed_days } => evaluate_fixed(&filtered, allowed_days),
        BudgetRule::Rolling {
            allowed_days,
            window_days,
        } => {
            if window_days == 0 {
                return Err(EngineError::InvalidParameter(
                    "rolling window length must be positive".into(),
                ));
            }
            evaluate_rolling(&filtered, allowed_days, window_days, as_of)
        }
    };

    debug!(
        ledger_days = filtered.len(),
        days_used = outcome.days_used,
        compliant = outcome.compliant,
        "budget evaluated"
    );
    Ok(outcome)
}

fn evaluate_fixed(filtered: &[NaiveDate], allowed_days: u32) -> BudgetOutcome {
    let days_used = filtered.len() as u32;
    let violations: Vec<NaiveDate> = filtered
        .iter()
        .copied()
        .skip(allowed_days as usize)
        .collect();
    BudgetOutcome {
        days_used,
        days_allowed: allowed_days,
        days_remaining: allowed_days.saturating_sub(days_used),
        compliant: days_used <= allowed_days,
        violations,
    }
}

fn evaluate_rolling(
    filtered: &[NaiveDate],
    allowed_days: u32,
    window_days: u32,
    as_of: NaiveDate,
) -> BudgetOutcome {
    // Trailing window at date d is [d - window_days + 1, d].
    let span = Duration::days(i64::from(window_days) - 1);

    // One ascending pass with a moving lower bound: O(n) over the ledger
    // instead of rescanning the whole window at every date.
    let mut violations = Vec::new();
    let mut lower = 0usize;
    for (upper, &date) in filtered.iter().enumerate() {
        let window_start = date - span;
        while filtered[lower] < window_start {
            lower += 1;
        }
        let in_window = (upper - lower + 1) as u32;
        if in_window > allowed_days {
            violations.push(date);
        }
    }

    // "Days used as of now": ledger dates in the trailing window ending at
    // as_of. The filter step already bounded the dates above by as_of.
    let report_start = as_of - span;
    let days_used = filtered.iter().filter(|&&date| date >= report_start).count() as u32;

    BudgetOutcome {
        days_used,
        days_allowed: allowed_days,
        days_remaining: allowed_days.saturating_sub(days_used),
        compliant: violations.is_empty(),
        violations,
    }
}
