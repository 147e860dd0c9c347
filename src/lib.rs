#![doc(test(attr(deny(warnings))))]

//! Seatime Core provides the temporal compliance calculators behind crew
//! day tracking: visa/residency day budgets, capped standby accrual from
//! vessel state logs, and day-by-day reconciliation of two ledgers.
//!
//! Every operation is a pure function over day-indexed data supplied by the
//! caller; the crate performs no I/O and holds no state between calls.

pub mod accrual;
pub mod budget;
pub mod calendar;
pub mod domain;
pub mod errors;
pub mod reconcile;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Seatime Core tracing initialized.");
    });
}
