use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Closed vocabulary of day states recorded in vessel logbooks.
///
/// Both parties of a reconciliation must already use this vocabulary; the
/// calculators never translate between state sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VesselState {
    Underway,
    AtAnchor,
    InPort,
    OnLeave,
    InYard,
}

impl VesselState {
    /// Every state in the vocabulary, in declaration order.
    pub fn all() -> [VesselState; 5] {
        [
            VesselState::Underway,
            VesselState::AtAnchor,
            VesselState::InPort,
            VesselState::OnLeave,
            VesselState::InYard,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VesselState::Underway => "underway",
            VesselState::AtAnchor => "at-anchor",
            VesselState::InPort => "in-port",
            VesselState::OnLeave => "on-leave",
            VesselState::InYard => "in-yard",
        }
    }
}

impl fmt::Display for VesselState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VesselState {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VesselState::all()
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| EngineError::InvalidParameter(format!("unknown vessel state: {s}")))
    }
}

/// One logbook entry: the recorded state for a single calendar day.
///
/// A ledger holds at most one record per date per subject; enforcing that
/// is the data layer's job, the calculators simply assume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub state: VesselState,
}

impl DayRecord {
    pub fn new(date: NaiveDate, state: VesselState) -> Self {
        Self { date, state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_round_trips_through_str() {
        for state in VesselState::all() {
            assert_eq!(state.as_str().parse::<VesselState>().unwrap(), state);
        }
        assert!("ashore".parse::<VesselState>().is_err());
    }
}
