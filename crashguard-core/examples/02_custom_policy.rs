//! Custom Policy and Checked Analysis Example
//!
//! Loads a partial threshold policy from JSON, then shows how checked
//! analysis rejects windows the permissive path would quietly ignore.
//!
//! ```bash
//! cargo run --example 02_custom_policy
//! ```

use crashguard_core::{CrashDetector, CrashWindow, ThresholdPolicy};

fn main() {
    println!("CrashGuard Custom Policy Example");
    println!("================================\n");

    // Motorcycles see more rotation in normal riding
    let policy: ThresholdPolicy = match serde_json::from_str(r#"{"min_flips": 4, "min_g": 22.0}"#) {
        Ok(policy) => policy,
        Err(e) => {
            eprintln!("Bad policy: {e}");
            return;
        }
    };
    println!("Loaded policy: {policy:?}\n");

    let detector = CrashDetector::new(policy);

    let payload = r#"{
        "sensor_data": [
            {"x": 0.0, "y": 0.0, "z": 9.8},
            {"x": 30.0, "y": 0.0, "z": 0.0},
            {"x": 0.0, "y": 30.0, "z": 0.0},
            {"x": 0.0, "y": 0.0, "z": 30.0},
            {"x": 30.0, "y": 0.0, "z": 0.0}
        ],
        "gps_start": {"lat": 51.5, "lon": -0.12},
        "gps_end": {"lat": 51.5004, "lon": -0.12},
        "start_ts": 1700000000000,
        "end_ts": 1700000003000
    }"#;

    let mut window: CrashWindow = match serde_json::from_str(payload) {
        Ok(window) => window,
        Err(e) => {
            eprintln!("Bad payload: {e}");
            return;
        }
    };

    let verdict = detector.analyze(&window);
    println!("Permissive: {}", verdict.message);

    // Device clock jumped backwards
    window.end_ts = window.start_ts - 500;
    println!("Permissive (inverted): {}", detector.analyze(&window).message);
    match detector.analyze_checked(&window) {
        Ok(verdict) => println!("Checked (inverted): {}", verdict.message),
        Err(e) => println!("Checked (inverted): rejected - {e}"),
    }
}
