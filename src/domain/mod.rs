// ==========================================
// Turkey Timer - domain model layer
// ==========================================
// Entities and types for the cooking timeline.
// No clock access, no I/O; everything here is a value type.
// ==========================================

pub mod schedule;
pub mod types;
pub mod validation;

// Re-export core types
pub use schedule::Schedule;
pub use types::{InputField, TurkeyStatus};
pub use validation::{FieldCheck, ValidationError, ValidationReport};
