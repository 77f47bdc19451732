//! Crash confirmation engine for CrashGuard
//!
//! Decides whether a burst of accelerometer samples bracketed by two GPS
//! fixes describes a real vehicular crash. Four independent signals must
//! all clear their thresholds:
//!
//! - **Impact**: peak acceleration magnitude
//! - **Rotation**: number of abrupt direction changes ("flips")
//! - **Duration**: length of the chaotic window
//! - **Displacement**: great-circle distance between the two fixes
//!
//! The engine is stateless and performs no I/O, so it can run on any
//! number of threads and on `no_std` targets with an allocator.
//!
//! ```no_run
//! use crashguard_core::{CrashDetector, CrashWindow, GeoPoint, SensorSample};
//!
//! let window = CrashWindow {
//!     sensor_data: vec![
//!         SensorSample::new(0.0, 0.0, 9.8),
//!         SensorSample::new(25.0, 0.0, 0.0),
//!         SensorSample::new(0.0, 25.0, 0.0),
//!     ],
//!     gps_start: GeoPoint::new(37.0, -122.0),
//!     gps_end: GeoPoint::new(37.0003, -122.0),
//!     start_ts: 0,
//!     end_ts: 2000,
//! };
//!
//! let verdict = CrashDetector::default().analyze(&window);
//! if verdict.is_crash {
//!     // Hand off to alert dispatch
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

// Optional logging; compiles away without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod constants;
pub mod engine;
pub mod errors;
pub mod format;
pub mod geo;
pub mod motion;
pub mod policy;
pub mod time;

// Public API
pub use engine::{analyze_crash, CrashDetector, CrashStats, CrashVerdict, CrashWindow, CriteriaReport};
pub use errors::{AnalysisError, AnalysisResult, FixPosition};
pub use format::format_message;
pub use geo::{haversine_distance, GeoPoint};
pub use motion::{angle_between_deg, extract_motion_signals, MotionSignals, SensorSample};
pub use policy::ThresholdPolicy;
pub use time::Timestamp;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
