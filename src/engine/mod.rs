// ==========================================
// Turkey Timer - engine layer
// ==========================================
// Pure business rules. No clock access except through explicit
// parameters; no shared state; safe to call concurrently.
// The calculator trusts its inputs - callers run the validator
// first, then hand validated values over.
// ==========================================

pub mod calculator;
pub mod validator;

// Re-export the engine surface
pub use calculator::{
    compute_cook_minutes, compute_schedule, compute_thaw_hours, has_enough_thaw_time,
    is_cooking_imminent, now_local,
};
pub use validator::{validate_inputs, validate_serving_time, validate_weight};
