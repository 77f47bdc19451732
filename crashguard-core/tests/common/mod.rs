//! Shared fixtures for crash engine integration tests
//!
//! Windows here are built so that every criterion sits comfortably away
//! from its default threshold unless a test deliberately moves one.

#![allow(dead_code)]

pub mod scenarios;

use crashguard_core::{CrashWindow, GeoPoint, SensorSample, Timestamp};

/// Fixed origin for generated windows (2024-01-01T00:00:00Z)
pub const BASE_TS: Timestamp = 1_704_067_200_000;

/// Build a window from sample triples and two fixes
pub fn window(
    samples: &[(f64, f64, f64)],
    start: GeoPoint,
    end: GeoPoint,
    duration_ms: i64,
) -> CrashWindow {
    CrashWindow {
        sensor_data: samples.iter().map(|&(x, y, z)| SensorSample::new(x, y, z)).collect(),
        gps_start: start,
        gps_end: end,
        start_ts: BASE_TS,
        end_ts: BASE_TS + duration_ms,
    }
}

/// Samples that rotate 90° per step `flips` times at the given magnitude
///
/// Produces `flips + 1` samples cycling through the x, y and z axes.
pub fn tumbling(magnitude: f64, flips: usize) -> Vec<SensorSample> {
    (0..=flips)
        .map(|i| match i % 3 {
            0 => SensorSample::new(magnitude, 0.0, 0.0),
            1 => SensorSample::new(0.0, magnitude, 0.0),
            _ => SensorSample::new(0.0, 0.0, magnitude),
        })
        .collect()
}

/// Point `meters` north of `origin` along the meridian
pub fn north_of(origin: GeoPoint, meters: f64) -> GeoPoint {
    let (lat, lon) = origin.coordinates().expect("origin must be a full fix");
    let dlat = (meters / crashguard_core::constants::EARTH_RADIUS_M).to_degrees();
    GeoPoint::new(lat + dlat, lon)
}
