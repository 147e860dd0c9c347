//! Rule parameters travel as business configuration, and calculator
//! outputs travel to the dashboard as JSON; both must round-trip cleanly.

use chrono::NaiveDate;
use seatime_core::accrual::evaluate_accrual;
use seatime_core::domain::{AccrualRule, BudgetRule, DayRecord, VesselState};
use serde_json::json;

fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn budget_rules_serialize_with_a_kind_tag() {
    let rolling = serde_json::to_value(BudgetRule::rolling_90_in_180()).unwrap();
    assert_eq!(
        rolling,
        json!({ "kind": "rolling", "allowed_days": 90, "window_days": 180 })
    );

    let fixed: BudgetRule =
        serde_json::from_value(json!({ "kind": "fixed", "allowed_days": 30 })).unwrap();
    assert_eq!(fixed, BudgetRule::fixed(30));
}

#[test]
fn vessel_states_use_the_kebab_case_logbook_vocabulary() {
    let value = serde_json::to_value(VesselState::AtAnchor).unwrap();
    assert_eq!(value, json!("at-anchor"));

    let record: DayRecord =
        serde_json::from_value(json!({ "date": "2024-01-01", "state": "in-port" })).unwrap();
    assert_eq!(record, DayRecord::new(sample_date(2024, 1, 1), VesselState::InPort));
}

#[test]
fn accrual_rules_round_trip() {
    let rule = AccrualRule::new([VesselState::AtAnchor, VesselState::InPort], 14, 1);
    let encoded = serde_json::to_string(&rule).unwrap();
    let decoded: AccrualRule = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, rule);
}

#[test]
fn accrual_outcomes_serialize_for_the_dashboard() {
    let ledger = vec![
        DayRecord::new(sample_date(2024, 1, 1), VesselState::AtAnchor),
        DayRecord::new(sample_date(2024, 1, 2), VesselState::AtAnchor),
    ];
    let rule = AccrualRule::new([VesselState::AtAnchor], 14, 0);
    let outcome = evaluate_accrual(&ledger, &rule);

    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["total_counted_days"], json!(2));
    assert_eq!(value["runs"][0]["start_date"], json!("2024-01-01"));
    assert_eq!(value["runs"][0]["counted_days"], json!(2));
}
