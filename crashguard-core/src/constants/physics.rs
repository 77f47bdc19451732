//! Physical Constants for CrashGuard
//!
//! Geometry constants used by the great-circle distance calculator and
//! the motion signal extractor.

// ===== EARTH GEOMETRY =====

/// Mean Earth radius (meters).
/// 
/// Radius of the sphere the haversine formula is evaluated on. Using a
/// sphere instead of the WGS-84 ellipsoid costs up to ~0.5% accuracy,
/// which is far below GPS noise at crash-window distances.
/// 
/// Source: IUGG mean radius R1
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

// ===== MOTION =====

/// Minimum angle between consecutive acceleration vectors that counts as a flip (degrees).
/// 
/// Normal driving (braking, cornering) tilts the measured acceleration by
/// well under 45° between samples. Rollovers and spins swing it further.
pub const FLIP_ANGLE_DEG: f64 = 45.0;

/// Standard gravity (m/s²).
/// 
/// A device lying still reads roughly this magnitude along one axis.
/// 
/// Source: CGPM 1901
pub const STANDARD_GRAVITY_M_PER_S2: f64 = 9.80665;
