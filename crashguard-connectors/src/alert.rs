//! SOS alert content
//!
//! Alerts are rendered as Telegram legacy Markdown:
//!
//! ```text
//! 🚨 *SOS ALERT*
//!
//! Device: truck-17
//! Latitude: 37.0003
//! Longitude: -122.0
//! Time: 1704067202000
//! Google Maps: https://www.google.com/maps/search/?api=1&query=37.0003,-122.0
//!
//! CRASH CONFIRMED! G:25.0 Flips:2 Dist:33.4m
//! ```

use crashguard_core::{CrashVerdict, GeoPoint, Timestamp};
use serde::{Deserialize, Serialize};

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Alert for one device at one position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrashAlert {
    /// Reporting device
    pub device_id: String,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Epoch milliseconds of the position
    pub timestamp: Timestamp,
    /// Verdict summary line, when the alert came from the crash engine
    pub summary: Option<String>,
}

impl CrashAlert {
    /// Manual distress alert raised by the device itself
    pub fn sos(device_id: impl Into<String>, lat: f64, lon: f64, timestamp: Timestamp) -> Self {
        Self {
            device_id: device_id.into(),
            lat,
            lon,
            timestamp,
            summary: None,
        }
    }

    /// Alert for a confirmed crash
    ///
    /// `None` when the verdict is not a crash or the position has no full fix,
    /// since an alert nobody can locate is not actionable.
    pub fn from_verdict(
        device_id: impl Into<String>,
        position: &GeoPoint,
        timestamp: Timestamp,
        verdict: &CrashVerdict,
    ) -> Option<Self> {
        if !verdict.is_crash {
            return None;
        }
        let (lat, lon) = position.coordinates()?;

        Some(Self {
            summary: Some(verdict.message.clone()),
            ..Self::sos(device_id, lat, lon, timestamp)
        })
    }

    /// Google Maps search link for the position
    pub fn maps_link(&self) -> String {
        format!("{}{:?},{:?}", MAPS_SEARCH_URL, self.lat, self.lon)
    }

    /// Message body in Telegram legacy Markdown
    pub fn render_markdown(&self) -> String {
        let mut text = format!(
            "🚨 *SOS ALERT*\n\n\
             Device: {}\n\
             Latitude: {:?}\n\
             Longitude: {:?}\n\
             Time: {}\n\
             Google Maps: {}",
            escape_markdown(&self.device_id),
            self.lat,
            self.lon,
            self.timestamp,
            self.maps_link(),
        );

        if let Some(summary) = &self.summary {
            text.push_str("\n\n");
            text.push_str(&escape_markdown(summary));
        }

        text
    }
}

/// Escape the characters legacy Markdown treats as entity delimiters
fn escape_markdown(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
