//! Alert Dispatch for Confirmed Crashes
//!
//! ## Overview
//!
//! `crashguard-core` only decides whether a window was a crash. This crate
//! turns a confirmed verdict into an SOS message and delivers it. The engine
//! never calls into this crate; the ingestion service wires the two
//! together:
//!
//! ```text
//! report ──► CrashDetector::analyze ──► CrashVerdict
//!                                          │ is_crash
//!                                          ▼
//!                          CrashAlert::from_verdict ──► AlertSink::dispatch
//! ```
//!
//! ## Sinks
//!
//! - **TelegramNotifier** (feature `telegram`): Bot API `sendMessage` over
//!   HTTPS with retries
//! - **RecordingSink**: keeps alerts in memory for tests and dry runs
//!
//! ## Configuration
//!
//! Credentials come from the environment and are never hard-coded:
//!
//! | Variable             | Meaning                         |
//! |----------------------|---------------------------------|
//! | `TELEGRAM_BOT_TOKEN` | Bot token issued by BotFather   |
//! | `TELEGRAM_CHAT_ID`   | Chat or channel receiving SOS   |
//!
//! A missing variable is reported as `AlertError::NotConfigured` so the
//! service can keep analyzing windows with alerting disabled.
//!
//! ## Example Usage
//!
//! ```no_run
//! use crashguard_connectors::{notify_if_crash, telegram::{TelegramConfig, TelegramNotifier}};
//! use crashguard_core::{analyze_crash, CrashWindow};
//!
//! # fn example(window: CrashWindow) -> Result<(), crashguard_connectors::AlertError> {
//! let mut telegram = TelegramNotifier::new(TelegramConfig::from_env()?)?;
//!
//! let verdict = analyze_crash(&window);
//! notify_if_crash(&mut telegram, "truck-17", &window.gps_end, window.end_ts, &verdict)?;
//! # Ok(())
//! # }
//! ```

pub mod alert;
pub mod sink;

#[cfg(feature = "telegram")]
pub mod telegram;

// Re-export common types
pub use alert::CrashAlert;
pub use sink::{notify_if_crash, AlertSink, DispatchStats, RecordingSink};

#[cfg(feature = "telegram")]
pub use telegram::{TelegramConfig, TelegramNotifier};

use thiserror::Error;

/// Alert dispatch errors
#[derive(Debug, Error)]
pub enum AlertError {
    /// Credentials or endpoint missing
    #[error("Alerting not configured: {0}")]
    NotConfigured(String),

    /// Network or transport failure
    #[error("Request failed: {0}")]
    Request(String),

    /// Remote API rejected the alert
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Response could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}
