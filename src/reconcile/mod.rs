//! Day-by-day reconciliation of two independently recorded ledgers.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::VesselState;

/// Classification of a single day in the comparison range. Derived on
/// every invocation, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonDay {
    pub date: NaiveDate,
    pub party_a: Option<VesselState>,
    pub party_b: Option<VesselState>,
    pub excluded: bool,
    pub matched: bool,
}

/// Aggregate audit statistics plus the per-day breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    pub per_day: Vec<ComparisonDay>,
    pub matching_days: u32,
    /// Non-excluded days where party A reported a state.
    pub compared_days: u32,
    /// Both parties reported, states differ.
    pub discrepancies: u32,
    pub missing_from_a: u32,
    pub missing_from_b: u32,
    /// `matching_days / compared_days`; exactly 0.0 when nothing was
    /// compared.
    pub match_rate: f64,
}

impl ReconciliationReport {
    pub fn has_findings(&self) -> bool {
        self.discrepancies > 0 || self.missing_from_a > 0 || self.missing_from_b > 0
    }
}

/// Compares party A's reported days against party B's records over the
/// supplied date range.
///
/// Exclusion is asymmetric on purpose: only party A's state decides
/// whether a day is exempt from comparison (A is the primary reporting
/// party, and e.g. its leave days are not subject to audit). Both ledgers
/// must already share one state vocabulary; nothing is normalized here.
pub fn compare_ledgers(
    window_dates: &[NaiveDate],
    party_a: &BTreeMap<NaiveDate, VesselState>,
    party_b: &BTreeMap<NaiveDate, VesselState>,
    excluded_states: &BTreeSet<VesselState>,
) -> ReconciliationReport {
    let mut per_day = Vec::with_capacity(window_dates.len());
    let mut matching_days = 0u32;
    let mut compared_days = 0u32;
    let mut discrepancies = 0u32;
    let mut missing_from_a = 0u32;
    let mut missing_from_b = 0u32;

    for &date in window_dates {
        let a = party_a.get(&date).copied();
        let b = party_b.get(&date).copied();
        let excluded = a.is_some_and(|state| excluded_states.contains(&state));
        let matched = !excluded && a.is_some() && a == b;

        if !excluded {
            match (a, b) {
                (Some(state_a), Some(state_b)) => {
                    compared_days += 1;
                    if state_a == state_b {
                        matching_days += 1;
                    } else {
                        discrepancies += 1;
                    }
                }
                (Some(_), None) => {
                    compared_days += 1;
                    missing_from_b += 1;
                }
                (None, Some(_)) => missing_from_a += 1,
                (None, None) => {}
            }
        }

        per_day.push(ComparisonDay {
            date,
            party_a: a,
            party_b: b,
            excluded,
            matched,
        });
    }

    let match_rate = if compared_days == 0 {
        0.0
    } else {
        f64::from(matching_days) / f64::from(compared_days)
    };

    debug!(
        range_days = window_dates.len(),
        compared_days, matching_days, discrepancies, "ledgers compared"
    );
    ReconciliationReport {
        per_day,
        matching_days,
        compared_days,
        discrepancies,
        missing_from_a,
        missing_from_b,
        match_rate,
    }
}
