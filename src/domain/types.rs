// ==========================================
// Turkey Timer - domain type definitions
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// TurkeyStatus
// ==========================================
// Serialized form: lowercase (matches the form values sent by the UI)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurkeyStatus {
    Fresh,  // ready to cook, no thaw window
    Frozen, // requires a refrigerator thaw window first
}

impl TurkeyStatus {
    /// True for a frozen bird.
    pub fn is_frozen(&self) -> bool {
        matches!(self, TurkeyStatus::Frozen)
    }
}

impl fmt::Display for TurkeyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurkeyStatus::Fresh => write!(f, "fresh"),
            TurkeyStatus::Frozen => write!(f, "frozen"),
        }
    }
}

impl FromStr for TurkeyStatus {
    type Err = ();

    /// Accepts exactly "fresh" and "frozen"; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fresh" => Ok(TurkeyStatus::Fresh),
            "frozen" => Ok(TurkeyStatus::Frozen),
            _ => Err(()),
        }
    }
}

// ==========================================
// InputField
// ==========================================
// Key for field-level validation errors.
// Serialized form: camelCase (matches the UI form field names)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    Weight,
    Status,
    ServingTime,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Weight => write!(f, "weight"),
            InputField::Status => write!(f, "status"),
            InputField::ServingTime => write!(f, "servingTime"),
        }
    }
}
