use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::day_record::VesselState;

/// Compliance rule for a day budget over a validity window.
///
/// Rule parameters come from business configuration (a region-to-rule
/// lookup lives outside this crate); the calculators only apply them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BudgetRule {
    /// Total qualifying days within the validity window must not exceed
    /// the allowance.
    Fixed { allowed_days: u32 },
    /// At every date, qualifying days within the trailing window of
    /// `window_days` days must not exceed the allowance.
    Rolling { allowed_days: u32, window_days: u32 },
}

impl BudgetRule {
    pub fn fixed(allowed_days: u32) -> Self {
        BudgetRule::Fixed { allowed_days }
    }

    pub fn rolling(allowed_days: u32, window_days: u32) -> Self {
        BudgetRule::Rolling {
            allowed_days,
            window_days,
        }
    }

    /// The common "90 days in any 180" residency pattern.
    pub fn rolling_90_in_180() -> Self {
        BudgetRule::rolling(90, 180)
    }

    pub fn allowed_days(&self) -> u32 {
        match *self {
            BudgetRule::Fixed { allowed_days } => allowed_days,
            BudgetRule::Rolling { allowed_days, .. } => allowed_days,
        }
    }
}

/// Parameters for capped run-based day counting from state logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualRule {
    /// Day states that count toward the accrual.
    pub qualifying_states: BTreeSet<VesselState>,
    /// Maximum days credited per uninterrupted run, counted from the
    /// run's start. Zero is legal and credits nothing.
    pub cap_per_run: u32,
    /// Gaps of this many missing days or fewer stay within one run.
    pub gap_tolerance_days: u32,
}

impl AccrualRule {
    pub fn new(
        qualifying_states: impl IntoIterator<Item = VesselState>,
        cap_per_run: u32,
        gap_tolerance_days: u32,
    ) -> Self {
        Self {
            qualifying_states: qualifying_states.into_iter().collect(),
            cap_per_run,
            gap_tolerance_days,
        }
    }

    pub fn qualifies(&self, state: VesselState) -> bool {
        self.qualifying_states.contains(&state)
    }
}
