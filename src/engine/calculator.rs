// ==========================================
// Turkey Timer - timeline calculator
// ==========================================
// Pure backward-chained schedule math plus two point-in-time
// advisory predicates.
// Input: validated weight/status/serving time
// Output: Schedule (see domain::schedule for the chaining order)
// ==========================================
// No validation here: callers guarantee inputs are in-domain via
// engine::validator. Out-of-domain values yield arithmetically
// consistent but meaningless timestamps, never an error.
// ==========================================

use chrono::{Duration, Local, NaiveDateTime};
use tracing::instrument;

use crate::config::{
    COOK_MINUTES_PER_POUND, OVEN_PREHEAT_MINUTES, REST_MINUTES, THAW_HOURS_PER_POUND,
};
use crate::domain::schedule::Schedule;
use crate::domain::types::TurkeyStatus;

// ==========================================
// Duration helpers
// ==========================================

// Fractional minutes/hours are carried to whole seconds so that
// fractional weights subtract cleanly; integer weights stay exact.
fn minutes(m: f64) -> Duration {
    Duration::seconds((m * 60.0).round() as i64)
}

fn hours(h: f64) -> Duration {
    Duration::seconds((h * 3600.0).round() as i64)
}

/// Ambient wall-clock "now" in local time.
///
/// The advisory predicates take the current time as an explicit
/// parameter; this is the default the UI boundary passes in.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

// ==========================================
// Core calculations
// ==========================================

/// Total cook time in minutes, preheat included.
///
/// `weight_lbs × 13 + 30`. The oven-only duration used for the
/// put-in-oven timestamp excludes the preheat share.
pub fn compute_cook_minutes(weight_lbs: f64) -> f64 {
    weight_lbs * COOK_MINUTES_PER_POUND + OVEN_PREHEAT_MINUTES
}

/// Refrigerator thaw time in hours for a frozen bird.
///
/// `weight_lbs × 6`.
pub fn compute_thaw_hours(weight_lbs: f64) -> f64 {
    weight_lbs * THAW_HOURS_PER_POUND
}

/// Build the full cooking timeline by subtracting backward from the
/// serving time.
///
/// Subtraction order is fixed: rest, then oven-only cook, then
/// preheat, then (frozen only) thaw. Each timestamp anchors the next,
/// and every intermediate timestamp is an observable output, so the
/// chain must not be collapsed into a single combined offset.
///
/// For a fresh bird `start_thawing` is `None` and `thaw_time_hours`
/// is exactly 0.
#[instrument]
pub fn compute_schedule(
    weight_lbs: f64,
    status: TurkeyStatus,
    serving_time: NaiveDateTime,
) -> Schedule {
    let cook_time_minutes = weight_lbs * COOK_MINUTES_PER_POUND;

    let remove_from_oven = serving_time - minutes(REST_MINUTES);
    let put_in_oven = remove_from_oven - minutes(cook_time_minutes);
    let start_preheat = put_in_oven - minutes(OVEN_PREHEAT_MINUTES);

    let (thaw_time_hours, start_thawing) = if status.is_frozen() {
        let thaw = compute_thaw_hours(weight_lbs);
        (thaw, Some(start_preheat - hours(thaw)))
    } else {
        (0.0, None)
    };

    tracing::debug!(
        %put_in_oven,
        %start_preheat,
        ?start_thawing,
        "derived cooking timeline"
    );

    Schedule {
        serving_time,
        remove_from_oven,
        put_in_oven,
        start_preheat,
        start_thawing,
        total_cook_time_minutes: cook_time_minutes + OVEN_PREHEAT_MINUTES,
        cook_time_minutes,
        preheat_time_minutes: OVEN_PREHEAT_MINUTES,
        rest_time_minutes: REST_MINUTES,
        thaw_time_hours,
    }
}

// ==========================================
// Advisory predicates
// ==========================================

/// Whether the thaw window has already opened.
///
/// True iff `start_thawing` is strictly before `now` - the computed
/// thaw-start deadline is not still ahead. Equal timestamps count as
/// not enough time.
pub fn has_enough_thaw_time(start_thawing: NaiveDateTime, now: NaiveDateTime) -> bool {
    start_thawing < now
}

/// Whether cooking has to start within the next hour.
///
/// False once `start_cooking` has passed, and false when a full hour
/// or more remains. The hour difference truncates toward zero, so
/// 59 minutes out is imminent while exactly 60 minutes out is not.
pub fn is_cooking_imminent(start_cooking: NaiveDateTime, now: NaiveDateTime) -> bool {
    now < start_cooking && (start_cooking - now).num_hours() < 1
}
