//! Basic Crash Analysis Example
//!
//! Runs the default engine over three windows: a rollover, road vibration
//! and a phone shaken in a parked car.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_analysis
//! ```

use crashguard_core::{
    constants::physics::STANDARD_GRAVITY_M_PER_S2 as G,
    CrashDetector, CrashWindow, GeoPoint, SensorSample,
};

fn main() {
    println!("CrashGuard Basic Analysis Example");
    println!("=================================\n");

    let detector = CrashDetector::default();
    let policy = detector.policy();
    println!("Threshold policy:");
    println!("  Impact:       > {} m/s²", policy.min_g);
    println!("  Flips:        >= {}", policy.min_flips);
    println!("  Duration:     > {} s", policy.min_duration_s);
    println!("  Displacement: > {} m", policy.min_distance_m);
    println!();

    let origin = GeoPoint::new(37.0, -122.0);

    let windows = [
        (
            "Rollover",
            CrashWindow {
                sensor_data: vec![
                    SensorSample::new(0.0, 0.0, G),
                    SensorSample::new(25.0, 0.0, 0.0),
                    SensorSample::new(0.0, 25.0, 0.0),
                ],
                gps_start: origin,
                gps_end: GeoPoint::new(37.0003, -122.0),
                start_ts: 0,
                end_ts: 2000,
            },
        ),
        (
            "Road vibration",
            CrashWindow {
                sensor_data: vec![SensorSample::new(20.0, 0.0, 0.0); 10],
                gps_start: origin,
                gps_end: GeoPoint::new(37.001, -122.0),
                start_ts: 0,
                end_ts: 5000,
            },
        ),
        (
            "Parked shaking",
            CrashWindow {
                sensor_data: vec![
                    SensorSample::new(0.0, 0.0, G),
                    SensorSample::new(25.0, 0.0, 0.0),
                    SensorSample::new(0.0, 25.0, 0.0),
                ],
                gps_start: origin,
                gps_end: origin,
                start_ts: 0,
                end_ts: 2000,
            },
        ),
    ];

    for (name, window) in &windows {
        let verdict = detector.analyze(window);
        println!("{name}:");
        println!("  {}", verdict.message);
        println!(
            "  impact={} rotation={} duration={} displacement={}",
            verdict.criteria.impact,
            verdict.criteria.rotation,
            verdict.criteria.duration,
            verdict.criteria.displacement,
        );
        println!();
    }
}
