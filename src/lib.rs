// ==========================================
// Turkey Timer - core library
// ==========================================
// Backward-chained cooking timeline: derive thaw/preheat/cook/rest
// timestamps from a desired serving time, plus input validation.
// The UI layer (form collection, rendering) lives outside this crate
// and consumes the types exported here.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities & types
pub mod domain;

// Engine layer - calculation & validation rules
pub mod engine;

// Config layer - fixed cooking constants
pub mod config;

// Logging
pub mod logging;

// ==========================================
// Re-exports of core types
// ==========================================

// Domain types
pub use domain::types::{InputField, TurkeyStatus};

// Domain entities
pub use domain::{FieldCheck, Schedule, ValidationError, ValidationReport};

// Engine
pub use engine::calculator::{
    compute_cook_minutes, compute_schedule, compute_thaw_hours, has_enough_thaw_time,
    is_cooking_imminent, now_local,
};
pub use engine::validator::{validate_inputs, validate_serving_time, validate_weight};

// ==========================================
// Crate constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Application name
pub const APP_NAME: &str = "Turkey Timer";
