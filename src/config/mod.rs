// ==========================================
// Turkey Timer - cooking constants
// ==========================================
// USDA-guideline cooking parameters for a 325°F oven.
// Fixed at build time; this is the only configuration
// surface of the core.
// ==========================================

/// Oven-only cook time per pound, at [`OVEN_TEMP_F`] (minutes).
pub const COOK_MINUTES_PER_POUND: f64 = 13.0;

/// Oven preheat duration (minutes).
pub const OVEN_PREHEAT_MINUTES: f64 = 30.0;

/// Rest duration between oven and carving (minutes).
pub const REST_MINUTES: f64 = 25.0;

/// Refrigerator thaw time per pound for a frozen bird (hours).
pub const THAW_HOURS_PER_POUND: f64 = 6.0;

/// Oven temperature the cook times are calibrated for (°F).
pub const OVEN_TEMP_F: i32 = 325;

/// Smallest supported turkey weight (pounds).
pub const MIN_TURKEY_WEIGHT: f64 = 8.0;

/// Largest supported turkey weight (pounds).
pub const MAX_TURKEY_WEIGHT: f64 = 30.0;
