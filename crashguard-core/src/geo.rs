//! Great-Circle Distance Between GPS Fixes
//!
//! ## Why Displacement Matters
//!
//! A phone shaken in a parked car can produce huge accelerations and plenty
//! of direction changes. What it cannot produce is movement across the map.
//! The distance between the fix taken when the chaos started and the fix
//! taken when it ended separates a vehicle that actually travelled from a
//! device rattling in place.
//!
//! ## Haversine Formula
//!
//! ```text
//! a = sin²(Δφ/2) + cos(φ1)·cos(φ2)·sin²(Δλ/2)
//! c = 2·atan2(√a, √(1−a))
//! d = R·c
//!
//! Where:
//! - φ = latitude (radians)
//! - λ = longitude (radians)
//! - R = mean Earth radius (6,371,000 m)
//! ```
//!
//! Haversine stays well conditioned for the tiny separations seen inside a
//! crash window (tens of meters), where the spherical law of cosines loses
//! precision to rounding.
//!
//! ## Missing Fixes
//!
//! GPS often has no fix at the moment of impact (tunnels, urban canyons,
//! cold start). A missing coordinate is not an error: the distance is
//! reported as `0.0`, which can never satisfy the displacement threshold.
//! GPS alone therefore never confirms a crash.

use crate::constants::physics::EARTH_RADIUS_M;

/// Geographic position in degrees; either coordinate may be unknown
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in degrees, `None` when the device had no fix
    #[cfg_attr(feature = "serde", serde(default))]
    pub lat: Option<f64>,

    /// Longitude in degrees, `None` when the device had no fix
    #[cfg_attr(feature = "serde", serde(default))]
    pub lon: Option<f64>,
}

impl GeoPoint {
    /// Fix with no coordinates at all
    pub const UNKNOWN: GeoPoint = GeoPoint { lat: None, lon: None };

    /// Fix with both coordinates known
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat: Some(lat), lon: Some(lon) }
    }

    /// Both coordinates, if both are present
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// True when exactly one coordinate is present
    pub fn is_partial(&self) -> bool {
        self.lat.is_some() != self.lon.is_some()
    }
}

/// Surface distance in meters between two fixes
///
/// Returns `0.0` when either fix is missing a coordinate. Coordinates are
/// not range-checked.
pub fn haversine_distance(start: &GeoPoint, end: &GeoPoint) -> f64 {
    let (Some((lat1, lon1)), Some((lat2, lon2))) = (start.coordinates(), end.coordinates()) else {
        return 0.0;
    };

    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let sin_dphi = libm::sin(d_phi / 2.0);
    let sin_dlambda = libm::sin(d_lambda / 2.0);
    let a = sin_dphi * sin_dphi + libm::cos(phi1) * libm::cos(phi2) * sin_dlambda * sin_dlambda;
    // Near-antipodal rounding can push a past 1.0
    let a = a.min(1.0);

    let c = 2.0 * libm::atan2(libm::sqrt(a), libm::sqrt(1.0 - a));

    EARTH_RADIUS_M * c
}
