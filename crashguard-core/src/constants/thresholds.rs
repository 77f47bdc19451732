//! Default Crash Confirmation Thresholds
//!
//! These feed `ThresholdPolicy::default()`. All four must be exceeded for a
//! window to be confirmed as a crash.

/// Peak acceleration magnitude a crash must exceed (m/s², strict `>`).
/// 
/// Roughly 1.8 g. Hard braking peaks around 1 g, potholes spike briefly
/// but rarely sustain a rotation as well.
pub const DEFAULT_MIN_G: f64 = 18.0;

/// Minimum number of flips a crash must reach (inclusive `>=`).
pub const DEFAULT_MIN_FLIPS: u32 = 2;

/// Window duration a crash must exceed (seconds, strict `>`).
pub const DEFAULT_MIN_DURATION_S: f64 = 1.0;

/// GPS displacement a crash must exceed (meters, strict `>`).
/// 
/// Consumer GPS fixes wander by 5-10 m while stationary.
pub const DEFAULT_MIN_DISTANCE_M: f64 = 15.0;
