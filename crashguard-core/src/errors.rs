//! Error Types for Rejected Crash Windows
//!
//! The default analysis path never fails: missing GPS fixes count as zero
//! displacement, inverted timestamps give a negative duration, and an empty
//! sample list gives zero impact. All of those fail the thresholds, so a
//! malformed window can only ever produce "not a crash".
//!
//! Callers that would rather reject malformed windows than have them quietly
//! ignored use `CrashDetector::analyze_checked`, which returns these errors.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use crashguard_core::{AnalysisError, CrashDetector, CrashWindow};
//!
//! fn handle_window(window: &CrashWindow, detector: &CrashDetector) {
//!     match detector.analyze_checked(window) {
//!         Ok(verdict) => {
//!             // Forward verdict.is_crash to alert dispatch
//!         }
//!         Err(AnalysisError::InvertedWindow { .. }) => {
//!             // Device clock jumped backwards - resync before trusting windows
//!         }
//!         Err(AnalysisError::PartialFix { .. }) => {
//!             // GPS dropped one coordinate - payload assembly bug upstream
//!         }
//!         Err(_) => {
//!             // Non-finite numbers - sensor driver fault
//!         }
//!     }
//! }
//! ```
//!
//! ## Memory Layout
//!
//! Every variant carries only integers or a one-byte tag, so the enum is
//! `Copy` and fits in 24 bytes.

use thiserror_no_std::Error;

use crate::time::Timestamp;

/// Result type for checked analysis
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Which of the two bracketing GPS fixes an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixPosition {
    /// Fix taken at the start of the window
    Start,
    /// Fix taken at the end of the window
    End,
}

impl FixPosition {
    /// Field name as it appears in the wire payload
    pub const fn name(&self) -> &'static str {
        match self {
            FixPosition::Start => "gps_start",
            FixPosition::End => "gps_end",
        }
    }
}

impl core::fmt::Display for FixPosition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Reasons a window is rejected by checked analysis
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AnalysisError {
    /// Window ends before it starts
    #[error("Window ends before it starts: start_ts={start_ts}, end_ts={end_ts}")]
    InvertedWindow {
        /// Reported window start (ms)
        start_ts: Timestamp,
        /// Reported window end (ms)
        end_ts: Timestamp,
    },

    /// Exactly one of latitude/longitude present
    #[error("GPS fix {which} has only one coordinate")]
    PartialFix {
        /// Fix with the missing coordinate
        which: FixPosition,
    },

    /// Sample component is NaN or infinite
    #[error("Sensor sample {index} is not a finite vector")]
    NonFiniteSample {
        /// Position of the sample in the window
        index: usize,
    },

    /// Coordinate is NaN or infinite
    #[error("GPS fix {which} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Fix with the bad coordinate
        which: FixPosition,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for AnalysisError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvertedWindow { start_ts, end_ts } =>
                defmt::write!(fmt, "Inverted window {}..{}", start_ts, end_ts),
            Self::PartialFix { which } =>
                defmt::write!(fmt, "Partial fix {}", which.name()),
            Self::NonFiniteSample { index } =>
                defmt::write!(fmt, "Non-finite sample {}", index),
            Self::NonFiniteCoordinate { which } =>
                defmt::write!(fmt, "Non-finite coordinate {}", which.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_fix() {
        let err = AnalysisError::PartialFix { which: FixPosition::End };
        assert_eq!(err.to_string(), "GPS fix gps_end has only one coordinate");
    }

    #[test]
    fn inverted_window_message() {
        let err = AnalysisError::InvertedWindow { start_ts: 5000, end_ts: 1000 };
        assert!(err.to_string().contains("start_ts=5000"));
    }
}
