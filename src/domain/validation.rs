// ==========================================
// Turkey Timer - validation result types
// ==========================================
// Validation failures are data, not control flow: the validator
// never panics and never returns Err. Every failure carries a
// user-facing message keyed by the form field it belongs to.
// ==========================================

use serde::ser::Serializer;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::config::{MAX_TURKEY_WEIGHT, MIN_TURKEY_WEIGHT};
use crate::domain::types::InputField;

// ==========================================
// ValidationError
// ==========================================
/// Field-level validation failure.
///
/// The Display string is the message shown next to the form field,
/// so wording changes here are user-visible.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    // Input-shape errors: wrong semantic type
    #[error("Weight must be a valid number")]
    NotANumber,

    #[error("Serving time must be a valid date")]
    InvalidDate,

    // Domain-constraint errors: right shape, business rule violated
    #[error("Weight must be between {min} and {max} pounds")]
    WeightOutOfRange { min: f64, max: f64 },

    #[error("Status must be \"fresh\" or \"frozen\"")]
    UnknownStatus,

    #[error("Serving time must be in the future")]
    NotInFuture,
}

impl ValidationError {
    /// Out-of-range error carrying the configured weight bounds.
    pub fn weight_out_of_range() -> Self {
        ValidationError::WeightOutOfRange {
            min: MIN_TURKEY_WEIGHT,
            max: MAX_TURKEY_WEIGHT,
        }
    }
}

// Serialized as the message string, not as an enum structure.
impl Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// ==========================================
// FieldCheck - single-field result
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldCheck {
    pub is_valid: bool,
    pub error: Option<ValidationError>,
}

impl FieldCheck {
    /// A passing check.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    /// A failing check with its message.
    pub fn invalid(error: ValidationError) -> Self {
        Self {
            is_valid: false,
            error: Some(error),
        }
    }
}

// ==========================================
// ValidationReport - aggregate result
// ==========================================
/// Result of validating the whole form.
///
/// `errors` holds one entry per failed field; `is_valid` is true
/// iff the map is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: BTreeMap<InputField, ValidationError>,
}

impl ValidationReport {
    /// A report with no failures.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: BTreeMap::new(),
        }
    }

    /// Record a failure for one field.
    pub fn push(&mut self, field: InputField, error: ValidationError) {
        self.errors.insert(field, error);
        self.is_valid = false;
    }

    /// Fold one field's check result into the report.
    pub fn absorb(&mut self, field: InputField, check: FieldCheck) {
        if let Some(error) = check.error {
            self.push(field, error);
        }
    }

    /// Message for a failed field, if any.
    pub fn error_message(&self, field: InputField) -> Option<String> {
        self.errors.get(&field).map(|e| e.to_string())
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::valid()
    }
}
