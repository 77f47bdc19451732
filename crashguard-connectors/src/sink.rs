//! Alert sinks and verdict-to-alert glue

use crashguard_core::{CrashVerdict, GeoPoint, Timestamp};

use crate::{alert::CrashAlert, AlertError};

/// Destination for SOS alerts
pub trait AlertSink {
    /// Deliver one alert
    fn dispatch(&mut self, alert: &CrashAlert) -> Result<(), AlertError>;

    /// Delivery counters since creation
    fn stats(&self) -> DispatchStats;
}

/// Delivery statistics common to all sinks
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DispatchStats {
    /// Alerts delivered successfully
    pub alerts_sent: u64,
    /// Alerts that failed after all retries
    pub alerts_failed: u64,
    /// Last error message
    pub last_error: Option<String>,
}

impl DispatchStats {
    pub(crate) fn record(&mut self, result: &Result<(), AlertError>) {
        match result {
            Ok(()) => self.alerts_sent += 1,
            Err(e) => {
                self.alerts_failed += 1;
                self.last_error = Some(e.to_string());
            }
        }
    }
}

/// In-memory sink that keeps every alert it receives
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Alerts in dispatch order
    pub alerts: Vec<CrashAlert>,
    stats: DispatchStats,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AlertSink for RecordingSink {
    fn dispatch(&mut self, alert: &CrashAlert) -> Result<(), AlertError> {
        self.alerts.push(alert.clone());
        let result = Ok(());
        self.stats.record(&result);
        result
    }

    fn stats(&self) -> DispatchStats {
        self.stats.clone()
    }
}

/// Dispatch an alert when the verdict confirms a crash
///
/// Returns `Ok(true)` when an alert was sent, `Ok(false)` when the verdict
/// was not a crash or the position could not be located.
pub fn notify_if_crash<S: AlertSink + ?Sized>(
    sink: &mut S,
    device_id: &str,
    position: &GeoPoint,
    timestamp: Timestamp,
    verdict: &CrashVerdict,
) -> Result<bool, AlertError> {
    if !verdict.is_crash {
        return Ok(false);
    }

    let Some(alert) = CrashAlert::from_verdict(device_id, position, timestamp, verdict) else {
        log::warn!("Crash confirmed for {} but position is unknown; alert not sent", device_id);
        return Ok(false);
    };

    match sink.dispatch(&alert) {
        Ok(()) => {
            log::info!("Crash alert sent for {}", device_id);
            Ok(true)
        }
        Err(e) => {
            log::warn!("Crash alert FAILED for {}: {}", device_id, e);
            Err(e)
        }
    }
}
