//! Threshold Policy for Crash Confirmation
//!
//! The four cutoffs are plain configuration owned by whoever builds the
//! `CrashDetector`. They are never global, so tests and deployments with
//! different vehicles can run different policies side by side.
//!
//! ## Tuning
//!
//! | Threshold          | Default | Guards against                     |
//! |--------------------|---------|------------------------------------|
//! | `min_g`            | 18.0    | Pure vibration, potholes           |
//! | `min_flips`        | 2       | Impacts without rotation           |
//! | `min_duration_s`   | 1.0     | Brief jolts, dropped phones        |
//! | `min_distance_m`   | 15.0    | Stationary shaking, GPS jitter     |
//!
//! `min_flips` is inclusive; the others are strict.
//!
//! ## Loading from Config
//!
//! With the `serde` feature every field falls back to its default, so a
//! config file only needs the thresholds it changes:
//!
//! ```rust
//! # #[cfg(feature = "serde")]
//! # {
//! use crashguard_core::ThresholdPolicy;
//!
//! let policy: ThresholdPolicy = serde_json::from_str(r#"{"min_g": 25.0}"#).unwrap();
//! assert_eq!(policy.min_g, 25.0);
//! assert_eq!(policy.min_flips, 2);
//! # }
//! ```

use crate::constants::thresholds::{
    DEFAULT_MIN_DISTANCE_M, DEFAULT_MIN_DURATION_S, DEFAULT_MIN_FLIPS, DEFAULT_MIN_G,
};

/// Cutoffs a window must clear to be confirmed as a crash
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThresholdPolicy {
    /// Peak acceleration magnitude must be strictly greater than this
    pub min_g: f64,

    /// Flip count must be at least this
    pub min_flips: u32,

    /// Window duration in seconds must be strictly greater than this
    pub min_duration_s: f64,

    /// GPS displacement in meters must be strictly greater than this
    pub min_distance_m: f64,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            min_g: DEFAULT_MIN_G,
            min_flips: DEFAULT_MIN_FLIPS,
            min_duration_s: DEFAULT_MIN_DURATION_S,
            min_distance_m: DEFAULT_MIN_DISTANCE_M,
        }
    }
}

impl ThresholdPolicy {
    /// Set the impact threshold
    pub fn with_min_g(mut self, min_g: f64) -> Self {
        self.min_g = min_g;
        self
    }

    /// Set the rotation threshold
    pub fn with_min_flips(mut self, min_flips: u32) -> Self {
        self.min_flips = min_flips;
        self
    }

    /// Set the duration threshold
    pub fn with_min_duration_s(mut self, min_duration_s: f64) -> Self {
        self.min_duration_s = min_duration_s;
        self
    }

    /// Set the displacement threshold
    pub fn with_min_distance_m(mut self, min_distance_m: f64) -> Self {
        self.min_distance_m = min_distance_m;
        self
    }

    /// Impact criterion
    pub fn impact_exceeded(&self, max_g: f64) -> bool {
        max_g > self.min_g
    }

    /// Rotation criterion
    pub fn rotation_reached(&self, flips: u32) -> bool {
        flips >= self.min_flips
    }

    /// Duration criterion
    pub fn duration_exceeded(&self, duration_s: f64) -> bool {
        duration_s > self.min_duration_s
    }

    /// Displacement criterion
    pub fn displacement_exceeded(&self, distance_m: f64) -> bool {
        distance_m > self.min_distance_m
    }
}
