//! Crash Decision Engine
//!
//! ## Overview
//!
//! The engine turns one window of raw evidence into a verdict:
//!
//! ```text
//! CrashWindow ──► extract_motion_signals ──► max_g, flips
//!      │
//!      ├────────► haversine_distance ──────► dist
//!      │
//!      └────────► elapsed_secs ────────────► time
//!
//! (max_g, flips, dist, time) + ThresholdPolicy ──► CrashVerdict
//! ```
//!
//! ## Why AND Instead of a Score
//!
//! Each signal rules out a different false positive on its own:
//!
//! - **Impact** without rotation: road vibration, a dropped phone
//! - **Rotation** without impact: a phone being turned over in hand
//! - **Short duration**: a single pothole jolt
//! - **No displacement**: shaking while parked, GPS jitter
//!
//! A weighted score would let a very strong reading in one signal compensate
//! for a missing one, which is exactly the failure mode each guard exists
//! to prevent. All four must pass.
//!
//! ## Rounding
//!
//! Thresholds are checked against the unrounded values. The stats in the
//! verdict are rounded to one decimal for display only.
//!
//! ## Permissive vs Checked
//!
//! `analyze` never fails. Malformed windows (inverted timestamps, missing
//! fixes, empty sample lists) degrade into values that cannot clear the
//! thresholds. `analyze_checked` rejects inverted windows, half-specified
//! fixes and non-finite numbers instead.

use alloc::{string::String, vec::Vec};

use crate::{
    errors::{AnalysisError, AnalysisResult, FixPosition},
    format::format_message,
    geo::{haversine_distance, GeoPoint},
    motion::{extract_motion_signals, SensorSample},
    policy::ThresholdPolicy,
    time::{elapsed_secs, Timestamp},
};

/// Everything the engine needs for one analysis
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrashWindow {
    /// Accelerometer samples in temporal order
    #[cfg_attr(feature = "serde", serde(default))]
    pub sensor_data: Vec<SensorSample>,

    /// Fix taken when the window opened
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_unknown"))]
    pub gps_start: GeoPoint,

    /// Fix taken when the window closed
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_unknown"))]
    pub gps_end: GeoPoint,

    /// Window start, epoch milliseconds
    #[cfg_attr(feature = "serde", serde(default))]
    pub start_ts: Timestamp,

    /// Window end, epoch milliseconds
    #[cfg_attr(feature = "serde", serde(default))]
    pub end_ts: Timestamp,
}

#[cfg(feature = "serde")]
fn null_as_unknown<'de, D>(deserializer: D) -> Result<GeoPoint, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    Option::<GeoPoint>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl CrashWindow {
    /// Reject windows that the permissive path would silently degrade
    pub fn check(&self) -> AnalysisResult<()> {
        if self.end_ts < self.start_ts {
            return Err(AnalysisError::InvertedWindow {
                start_ts: self.start_ts,
                end_ts: self.end_ts,
            });
        }

        for (which, fix) in [(FixPosition::Start, &self.gps_start), (FixPosition::End, &self.gps_end)] {
            if fix.is_partial() {
                return Err(AnalysisError::PartialFix { which });
            }
            if fix.lat.into_iter().chain(fix.lon).any(|c| !c.is_finite()) {
                return Err(AnalysisError::NonFiniteCoordinate { which });
            }
        }

        if let Some(index) = self.sensor_data.iter().position(|s| !s.is_finite()) {
            return Err(AnalysisError::NonFiniteSample { index });
        }

        Ok(())
    }
}

/// Diagnostic numbers behind a verdict, rounded for display
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrashStats {
    /// Peak acceleration magnitude
    pub max_g: f64,
    /// Direction changes above 45°
    pub flips: u32,
    /// GPS displacement in meters
    pub dist: f64,
    /// Window duration in seconds
    pub time: f64,
}

/// Which of the four criteria passed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CriteriaReport {
    /// Peak magnitude exceeded `min_g`
    pub impact: bool,
    /// Flip count reached `min_flips`
    pub rotation: bool,
    /// Duration exceeded `min_duration_s`
    pub duration: bool,
    /// Displacement exceeded `min_distance_m`
    pub displacement: bool,
}

impl CriteriaReport {
    /// True only when every criterion passed
    pub fn all(&self) -> bool {
        self.impact && self.rotation && self.duration && self.displacement
    }
}

/// Outcome of one analysis
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CrashVerdict {
    /// All four criteria passed
    pub is_crash: bool,
    /// Summary line rendered from `is_crash` and `stats`
    pub message: String,
    /// Rounded diagnostic numbers
    pub stats: CrashStats,
    /// Per-criterion outcome, evaluated on unrounded values
    #[cfg_attr(feature = "serde", serde(skip))]
    pub criteria: CriteriaReport,
}

/// Stateless crash confirmation engine bound to one threshold policy
#[derive(Debug, Clone, Copy, Default)]
pub struct CrashDetector {
    policy: ThresholdPolicy,
}

impl CrashDetector {
    /// Create an engine with the given thresholds
    pub fn new(policy: ThresholdPolicy) -> Self {
        Self { policy }
    }

    /// Thresholds this engine applies
    pub fn policy(&self) -> &ThresholdPolicy {
        &self.policy
    }

    /// Analyze a window, degrading malformed input into "not a crash"
    pub fn analyze(&self, window: &CrashWindow) -> CrashVerdict {
        let motion = extract_motion_signals(&window.sensor_data);
        let duration_s = elapsed_secs(window.start_ts, window.end_ts);
        let distance_m = haversine_distance(&window.gps_start, &window.gps_end);

        let criteria = CriteriaReport {
            impact: self.policy.impact_exceeded(motion.max_magnitude),
            rotation: self.policy.rotation_reached(motion.flips),
            duration: self.policy.duration_exceeded(duration_s),
            displacement: self.policy.displacement_exceeded(distance_m),
        };
        let is_crash = criteria.all();

        let stats = CrashStats {
            max_g: round_tenth(motion.max_magnitude),
            flips: motion.flips,
            dist: round_tenth(distance_m),
            time: round_tenth(duration_s),
        };

        log_debug!(
            "Crash window analyzed: is_crash={} max_g={:.1} flips={} dist={:.1}m time={:.1}s samples={}",
            is_crash,
            stats.max_g,
            stats.flips,
            stats.dist,
            stats.time,
            window.sensor_data.len()
        );

        CrashVerdict {
            is_crash,
            message: format_message(is_crash, &stats),
            stats,
            criteria,
        }
    }

    /// Analyze a window after rejecting inverted, half-specified or non-finite input
    pub fn analyze_checked(&self, window: &CrashWindow) -> AnalysisResult<CrashVerdict> {
        if let Err(e) = window.check() {
            log_warn!("Rejected crash window: {}", e);
            return Err(e);
        }
        Ok(self.analyze(window))
    }
}

/// Analyze a window with the default threshold policy
pub fn analyze_crash(window: &CrashWindow) -> CrashVerdict {
    CrashDetector::default().analyze(window)
}

/// Round to one decimal on the exact binary value, ties to even
fn round_tenth(value: f64) -> f64 {
    alloc::format!("{:.1}", value).parse().unwrap_or(value)
}
