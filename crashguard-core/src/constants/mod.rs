//! Constants for CrashGuard Core
//!
//! Every numeric value the engine depends on lives here, grouped by domain
//! and named with its unit.
//!
//! ## Organization
//!
//! - **Physics**: Earth geometry and vector-angle limits
//! - **Thresholds**: Default crash confirmation cutoffs
//! - **Time**: Unit conversions for window timestamps

/// Physical constants used by the distance and motion calculations.
pub mod physics;

/// Default crash confirmation thresholds.
pub mod thresholds;

/// Time unit conversions.
pub mod time;

pub use physics::{EARTH_RADIUS_M, FLIP_ANGLE_DEG};

pub use thresholds::{
    DEFAULT_MIN_G, DEFAULT_MIN_FLIPS, DEFAULT_MIN_DURATION_S, DEFAULT_MIN_DISTANCE_M,
};

pub use time::MS_PER_SECOND;
