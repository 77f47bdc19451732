//! Named crash scenarios with their expected outcomes

use crashguard_core::{CrashWindow, GeoPoint};

use super::window;

/// Test scenario with its expected verdict
pub struct TestScenario {
    pub name: &'static str,
    pub window: CrashWindow,
    pub expect_crash: bool,
}

pub const PALO_ALTO: GeoPoint = GeoPoint::new(37.0, -122.0);

/// Rollover: resting, then two 90° swings at ~25 m/s², 33 m of travel, 2 s
pub fn rollover() -> CrashWindow {
    window(
        &[(0.0, 0.0, 9.8), (25.0, 0.0, 0.0), (0.0, 25.0, 0.0)],
        PALO_ALTO,
        GeoPoint::new(37.0003, -122.0),
        2000,
    )
}

/// Road vibration: strong but constant direction
pub fn vibration_only() -> CrashWindow {
    window(&[(20.0, 0.0, 0.0); 10], PALO_ALTO, GeoPoint::new(37.001, -122.0), 5000)
}

/// Rollover signature while parked
pub fn stationary_shaking() -> CrashWindow {
    let mut w = rollover();
    w.gps_end = w.gps_start;
    w
}

/// Phone dropped onto the floor: one spike, one swing, instant
pub fn dropped_phone() -> CrashWindow {
    window(&[(0.0, 0.0, 9.8), (30.0, 0.0, 0.0)], PALO_ALTO, PALO_ALTO, 200)
}

/// Rollover inside a tunnel, no fixes at all
pub fn tunnel_rollover() -> CrashWindow {
    let mut w = rollover();
    w.gps_start = GeoPoint::UNKNOWN;
    w.gps_end = GeoPoint::UNKNOWN;
    w
}

/// Every scenario with its expected outcome
pub fn all() -> Vec<TestScenario> {
    vec![
        TestScenario { name: "rollover", window: rollover(), expect_crash: true },
        TestScenario { name: "vibration_only", window: vibration_only(), expect_crash: false },
        TestScenario { name: "stationary_shaking", window: stationary_shaking(), expect_crash: false },
        TestScenario { name: "dropped_phone", window: dropped_phone(), expect_crash: false },
        TestScenario { name: "tunnel_rollover", window: tunnel_rollover(), expect_crash: false },
        TestScenario { name: "empty", window: CrashWindow::default(), expect_crash: false },
    ]
}
