// ==========================================
// Turkey Timer - input validator
// ==========================================
// Guards the boundary in front of the calculator: weight range,
// status membership, serving-time futurity.
// All checks run unconditionally so the form can surface every
// failing field at once; results are data, never Err or panic.
// ==========================================

use chrono::NaiveDateTime;
use tracing::instrument;

use crate::config::{MAX_TURKEY_WEIGHT, MIN_TURKEY_WEIGHT};
use crate::domain::types::{InputField, TurkeyStatus};
use crate::domain::validation::{FieldCheck, ValidationError, ValidationReport};

/// Check the turkey weight.
///
/// `None` is a form value that failed to parse as a number; NaN and
/// infinities are rejected the same way. Numeric values must fall in
/// `[MIN_TURKEY_WEIGHT, MAX_TURKEY_WEIGHT]`, bounds included.
pub fn validate_weight(weight: Option<f64>) -> FieldCheck {
    match weight {
        Some(w) if w.is_finite() => {
            if (MIN_TURKEY_WEIGHT..=MAX_TURKEY_WEIGHT).contains(&w) {
                FieldCheck::valid()
            } else {
                FieldCheck::invalid(ValidationError::weight_out_of_range())
            }
        }
        _ => FieldCheck::invalid(ValidationError::NotANumber),
    }
}

/// Check the serving time against the current time.
///
/// `None` is a form value that failed to parse as a date. A parsed
/// timestamp must be strictly after `now`; "exactly now" fails.
pub fn validate_serving_time(serving_time: Option<NaiveDateTime>, now: NaiveDateTime) -> FieldCheck {
    match serving_time {
        None => FieldCheck::invalid(ValidationError::InvalidDate),
        Some(t) if t > now => FieldCheck::valid(),
        Some(_) => FieldCheck::invalid(ValidationError::NotInFuture),
    }
}

/// Validate the whole form.
///
/// Runs the weight, status, and serving-time checks independently
/// (no short-circuit) and keys each failure under its own field.
/// `status` is the raw form string; exactly "fresh" and "frozen"
/// are accepted.
#[instrument(ret)]
pub fn validate_inputs(
    weight: Option<f64>,
    status: &str,
    serving_time: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> ValidationReport {
    let mut report = ValidationReport::valid();

    report.absorb(InputField::Weight, validate_weight(weight));

    if status.parse::<TurkeyStatus>().is_err() {
        report.push(InputField::Status, ValidationError::UnknownStatus);
    }

    report.absorb(
        InputField::ServingTime,
        validate_serving_time(serving_time, now),
    );

    report
}
