// ==========================================
// Turkey Timer - schedule domain model
// ==========================================
// The complete backward-derived timeline. Built fresh on every
// calculation; replaced wholesale whenever an input changes.
// ==========================================

use chrono::NaiveDateTime;
use serde::Serialize;

// ==========================================
// Schedule - derived cooking timeline
// ==========================================
// Timestamps are chained by successive subtraction from the
// serving time:
//   remove_from_oven = serving_time - rest
//   put_in_oven      = remove_from_oven - oven-only cook
//   start_preheat    = put_in_oven - preheat
//   start_thawing    = start_preheat - thaw   (frozen only)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub serving_time: NaiveDateTime,             // anchor (echo of input)
    pub remove_from_oven: NaiveDateTime,         // start of the rest period
    pub put_in_oven: NaiveDateTime,              // start of active cooking
    pub start_preheat: NaiveDateTime,            // oven warm-up start
    pub start_thawing: Option<NaiveDateTime>,    // None for a fresh bird
    pub total_cook_time_minutes: f64,            // oven-only cook + preheat
    pub cook_time_minutes: f64,                  // oven-only, excludes preheat
    pub preheat_time_minutes: f64,
    pub rest_time_minutes: f64,
    pub thaw_time_hours: f64,                    // 0 for a fresh bird
}

impl Schedule {
    /// The moment the cook has to act first: thaw start when frozen,
    /// preheat start otherwise.
    pub fn first_action(&self) -> NaiveDateTime {
        self.start_thawing.unwrap_or(self.start_preheat)
    }
}
