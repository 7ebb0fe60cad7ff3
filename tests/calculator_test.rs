// ==========================================
// Calculator engine integration tests
// ==========================================
// Covers: cook/thaw durations, backward-chained schedule
// derivation for fresh and frozen birds, advisory predicates,
// serialized schedule shape.
// ==========================================

use chrono::{Duration, NaiveDate, NaiveDateTime};
use turkey_timer::config::{OVEN_PREHEAT_MINUTES, REST_MINUTES};
use turkey_timer::{
    compute_cook_minutes, compute_schedule, compute_thaw_hours, has_enough_thaw_time,
    is_cooking_imminent, TurkeyStatus,
};

// ==========================================
// Test helpers
// ==========================================

/// Thanksgiving dinner anchor used throughout: 2024-11-28 15:00.
fn serving_time() -> NaiveDateTime {
    ymd_hm(2024, 11, 28, 15, 0)
}

fn ymd_hm(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

// ==========================================
// Cook & thaw durations
// ==========================================

#[test]
fn test_cook_minutes_include_preheat() {
    assert_eq!(compute_cook_minutes(16.0), 238.0); // 16 * 13 + 30
    assert_eq!(compute_cook_minutes(8.0), 134.0); // minimum weight
    assert_eq!(compute_cook_minutes(30.0), 420.0); // maximum weight
}

#[test]
fn test_thaw_hours_scale_with_weight() {
    assert_eq!(compute_thaw_hours(16.0), 96.0);
    assert_eq!(compute_thaw_hours(8.0), 48.0);
    assert_eq!(compute_thaw_hours(30.0), 180.0);
}

#[test]
fn test_total_cook_time_identity_over_weight_range() {
    for w in 8..=30 {
        let weight = w as f64;
        let schedule = compute_schedule(weight, TurkeyStatus::Fresh, serving_time());
        assert_eq!(schedule.total_cook_time_minutes, weight * 13.0 + 30.0);
        assert_eq!(
            schedule.total_cook_time_minutes,
            schedule.cook_time_minutes + 30.0
        );
        assert_eq!(schedule.cook_time_minutes, compute_cook_minutes(weight) - 30.0);
    }
}

// ==========================================
// Schedule derivation
// ==========================================

#[test]
fn test_fresh_16lb_schedule() {
    let schedule = compute_schedule(16.0, TurkeyStatus::Fresh, serving_time());

    assert_eq!(schedule.serving_time, serving_time());
    assert_eq!(schedule.total_cook_time_minutes, 238.0);
    assert_eq!(schedule.cook_time_minutes, 208.0);
    assert_eq!(schedule.preheat_time_minutes, 30.0);
    assert_eq!(schedule.rest_time_minutes, 25.0);
    assert_eq!(schedule.thaw_time_hours, 0.0);
    assert_eq!(schedule.start_thawing, None);

    // Backward chain: 3:00 PM serving
    // remove from oven: 3:00 PM - 25 min = 2:35 PM
    assert_eq!(schedule.remove_from_oven, ymd_hm(2024, 11, 28, 14, 35));
    // put in oven: 2:35 PM - 208 min (3h 28m) = 11:07 AM
    assert_eq!(schedule.put_in_oven, ymd_hm(2024, 11, 28, 11, 7));
    // start preheat: 11:07 AM - 30 min = 10:37 AM
    assert_eq!(schedule.start_preheat, ymd_hm(2024, 11, 28, 10, 37));
}

#[test]
fn test_frozen_16lb_schedule_adds_thaw_window() {
    let schedule = compute_schedule(16.0, TurkeyStatus::Frozen, serving_time());

    assert_eq!(schedule.serving_time, serving_time());
    assert_eq!(schedule.thaw_time_hours, 96.0);

    // Oven-side chain is identical to the fresh case
    assert_eq!(schedule.start_preheat, ymd_hm(2024, 11, 28, 10, 37));

    // start thawing = start preheat - 96 h
    assert_eq!(
        schedule.start_thawing,
        Some(schedule.start_preheat - Duration::hours(96))
    );
    assert_eq!(schedule.start_thawing, Some(ymd_hm(2024, 11, 24, 10, 37)));
}

#[test]
fn test_chained_subtraction_invariants() {
    for status in [TurkeyStatus::Fresh, TurkeyStatus::Frozen] {
        let schedule = compute_schedule(21.0, status, serving_time());

        assert_eq!(
            schedule.remove_from_oven,
            schedule.serving_time - Duration::minutes(REST_MINUTES as i64)
        );
        assert_eq!(
            schedule.put_in_oven,
            schedule.remove_from_oven - Duration::minutes(schedule.cook_time_minutes as i64)
        );
        assert_eq!(
            schedule.start_preheat,
            schedule.put_in_oven - Duration::minutes(OVEN_PREHEAT_MINUTES as i64)
        );
        match status {
            TurkeyStatus::Frozen => assert_eq!(
                schedule.start_thawing,
                Some(schedule.start_preheat - Duration::hours(schedule.thaw_time_hours as i64))
            ),
            TurkeyStatus::Fresh => assert_eq!(schedule.start_thawing, None),
        }
    }
}

#[test]
fn test_8lb_fresh_schedule() {
    let schedule = compute_schedule(8.0, TurkeyStatus::Fresh, serving_time());

    assert_eq!(schedule.total_cook_time_minutes, 134.0); // 8 * 13 + 30
    assert_eq!(schedule.cook_time_minutes, 104.0);
    assert_eq!(schedule.start_thawing, None);
}

#[test]
fn test_30lb_frozen_schedule() {
    let schedule = compute_schedule(30.0, TurkeyStatus::Frozen, serving_time());

    assert_eq!(schedule.total_cook_time_minutes, 420.0); // 30 * 13 + 30
    assert_eq!(schedule.thaw_time_hours, 180.0); // 30 * 6
    assert!(schedule.start_thawing.is_some());
    assert_eq!(schedule.first_action(), schedule.start_thawing.unwrap());
}

// ==========================================
// Advisory predicates
// ==========================================

#[test]
fn test_thaw_start_in_the_past_leaves_enough_time() {
    let start_thawing = ymd_hm(2024, 11, 24, 10, 0);
    let now = ymd_hm(2024, 11, 28, 10, 0);
    assert!(has_enough_thaw_time(start_thawing, now));
}

#[test]
fn test_thaw_start_in_the_future_is_too_late() {
    let start_thawing = ymd_hm(2024, 11, 28, 10, 0);
    let now = ymd_hm(2024, 11, 24, 10, 0);
    assert!(!has_enough_thaw_time(start_thawing, now));
    // equal timestamps also count as not enough
    assert!(!has_enough_thaw_time(start_thawing, start_thawing));
}

#[test]
fn test_cooking_imminent_within_the_hour() {
    let now = ymd_hm(2024, 11, 28, 10, 0);
    assert!(is_cooking_imminent(now + Duration::minutes(30), now));
}

#[test]
fn test_cooking_not_imminent_two_hours_out() {
    let now = ymd_hm(2024, 11, 28, 10, 0);
    assert!(!is_cooking_imminent(now + Duration::hours(2), now));
}

#[test]
fn test_cooking_not_imminent_once_start_has_passed() {
    let now = ymd_hm(2024, 11, 28, 10, 0);
    assert!(!is_cooking_imminent(now - Duration::hours(2), now));
}

// ==========================================
// Serialized shape consumed by the UI
// ==========================================

#[test]
fn test_schedule_serializes_with_camel_case_fields() {
    let schedule = compute_schedule(16.0, TurkeyStatus::Fresh, serving_time());
    let json = serde_json::to_value(&schedule).unwrap();

    assert_eq!(json["totalCookTimeMinutes"], 238.0);
    assert_eq!(json["cookTimeMinutes"], 208.0);
    assert_eq!(json["thawTimeHours"], 0.0);
    assert!(json["startThawing"].is_null());
    assert_eq!(json["removeFromOven"], "2024-11-28T14:35:00");
}
