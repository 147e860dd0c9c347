//! Day-indexed domain types shared by every calculator.

pub mod day_record;
pub mod rules;
pub mod window;

pub use day_record::{DayRecord, VesselState};
pub use rules::{AccrualRule, BudgetRule};
pub use window::ValidityWindow;
