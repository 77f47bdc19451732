//! Telegram Bot API Notifier
//!
//! ## Overview
//!
//! Delivers SOS alerts with the Bot API `sendMessage` method:
//!
//! ```text
//! POST {api_base}/bot{token}/sendMessage
//! Content-Type: application/x-www-form-urlencoded
//!
//! chat_id=...&text=...&parse_mode=Markdown
//! ```
//!
//! ## Retry Policy
//!
//! - **Transport errors**: retried (DNS, connection reset, timeout)
//! - **5xx / 429**: retried with exponential backoff
//! - **Other 4xx**: not retried; a bad token or chat id will not fix itself
//!
//! Backoff doubles from `retry_base_delay` on each attempt.
//!
//! ## Example Usage
//!
//! ```no_run
//! use crashguard_connectors::{AlertSink, CrashAlert};
//! use crashguard_connectors::telegram::{TelegramConfig, TelegramNotifier};
//!
//! # fn example() -> Result<(), crashguard_connectors::AlertError> {
//! let config = TelegramConfig::new("123456:ABC-DEF", "-100987654")
//!     .timeout_secs(5)
//!     .max_retries(3);
//! let mut telegram = TelegramNotifier::new(config)?;
//!
//! telegram.dispatch(&CrashAlert::sos("truck-17", 37.0003, -122.0, 1_704_067_202_000))?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::time::Duration;

use crate::{alert::CrashAlert, sink::DispatchStats, AlertError, AlertSink};

/// Environment variable holding the bot token
pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Environment variable holding the destination chat id
pub const CHAT_ID_ENV: &str = "TELEGRAM_CHAT_ID";

/// Public Bot API endpoint
pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Telegram configuration
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot token
    pub bot_token: String,
    /// Destination chat or channel id
    pub chat_id: String,
    /// Bot API base URL
    pub api_base: String,
    /// Request timeout
    pub timeout: Duration,
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry
    pub retry_base_delay: Duration,
}

impl TelegramConfig {
    /// Create configuration for a bot and chat
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            api_base: DEFAULT_API_BASE.into(),
            timeout: Duration::from_secs(10),
            max_retries: 2,
            retry_base_delay: Duration::from_millis(200),
        }
    }

    /// Read `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID` from the environment
    pub fn from_env() -> Result<Self, AlertError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup; blank values count as missing
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AlertError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| AlertError::NotConfigured(format!("{} is not set", key)))
        };

        Ok(Self::new(read(TOKEN_ENV)?, read(CHAT_ID_ENV)?))
    }

    /// Override the Bot API base URL
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Set the number of retries after the first attempt
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the delay before the first retry
    pub fn retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.bot_token)
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

/// Alert sink posting to a Telegram chat
pub struct TelegramNotifier {
    config: TelegramConfig,
    agent: ureq::Agent,
    stats: DispatchStats,
}

impl TelegramNotifier {
    /// Create a notifier after validating the configuration
    pub fn new(config: TelegramConfig) -> Result<Self, AlertError> {
        if !config.api_base.starts_with("http://") && !config.api_base.starts_with("https://") {
            return Err(AlertError::NotConfigured(
                "API base must start with http:// or https://".into(),
            ));
        }
        if config.bot_token.is_empty() || config.chat_id.is_empty() {
            return Err(AlertError::NotConfigured("bot token and chat id are required".into()));
        }

        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&format!("CrashGuard/{}", env!("CARGO_PKG_VERSION")))
            .build();

        Ok(Self {
            config,
            agent,
            stats: DispatchStats::default(),
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &TelegramConfig {
        &self.config
    }

    fn send_with_retry(&self, text: &str) -> Result<(), AlertError> {
        let url = self.config.send_message_url();
        let form = [
            ("chat_id", self.config.chat_id.as_str()),
            ("text", text),
            ("parse_mode", "Markdown"),
        ];
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                std::thread::sleep(self.backoff_delay(attempt));
            }

            match self.agent.post(&url).send_form(&form) {
                Ok(resp) => {
                    let body = resp
                        .into_string()
                        .map_err(|e| AlertError::Request(self.redact(&e.to_string())))?;
                    return check_api_reply(&body);
                }
                Err(ureq::Error::Status(code, resp)) => {
                    let error = AlertError::Server {
                        status: code,
                        message: resp.into_string().unwrap_or_default(),
                    };
                    if code >= 500 || code == 429 {
                        last_error = Some(error);
                        continue;
                    }
                    return Err(error);
                }
                Err(ureq::Error::Transport(e)) => {
                    last_error = Some(AlertError::Request(self.redact(&e.to_string())));
                    continue;
                }
            }
        }

        Err(last_error.unwrap_or_else(|| AlertError::Request("Unknown error".into())))
    }

    /// Delay before retry `attempt` (1-based), doubling and saturating
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 1u32 << attempt.saturating_sub(1).min(16);
        self.config.retry_base_delay.saturating_mul(factor)
    }

    /// Transport errors quote the request URL, which carries the token
    fn redact(&self, text: &str) -> String {
        text.replace(self.config.bot_token.as_str(), "<redacted>")
    }
}

/// Bot API replies `{"ok": false, ...}` for some failures even with HTTP 200
fn check_api_reply(body: &str) -> Result<(), AlertError> {
    if body.trim().is_empty() {
        return Ok(());
    }

    let reply: serde_json::Value =
        serde_json::from_str(body).map_err(|e| AlertError::Serialization(e.to_string()))?;

    match reply.get("ok").and_then(|ok| ok.as_bool()) {
        Some(false) => Err(AlertError::Server {
            status: 200,
            message: reply
                .get("description")
                .and_then(|d| d.as_str())
                .unwrap_or_default()
                .to_string(),
        }),
        _ => Ok(()),
    }
}

impl AlertSink for TelegramNotifier {
    fn dispatch(&mut self, alert: &CrashAlert) -> Result<(), AlertError> {
        let result = self.send_with_retry(&alert.render_markdown());
        self.stats.record(&result);
        result
    }

    fn stats(&self) -> DispatchStats {
        self.stats.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_config_builder() {
        let config = TelegramConfig::new("token", "42")
            .api_base("http://localhost:8081/")
            .timeout_secs(3)
            .max_retries(5);

        assert_eq!(config.api_base, "http://localhost:8081");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.send_message_url(), "http://localhost:8081/bottoken/sendMessage");
    }

    #[test]
    fn test_from_lookup() {
        let vars = env(&[(TOKEN_ENV, "123:abc"), (CHAT_ID_ENV, " -100 ")]);
        let config = TelegramConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.chat_id, "-100");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_missing_credentials() {
        let vars = env(&[(TOKEN_ENV, "123:abc")]);
        let err = TelegramConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, AlertError::NotConfigured(ref m) if m.contains(CHAT_ID_ENV)));

        let vars = env(&[(TOKEN_ENV, "  "), (CHAT_ID_ENV, "42")]);
        let err = TelegramConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, AlertError::NotConfigured(ref m) if m.contains(TOKEN_ENV)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let rendered = format!("{:?}", TelegramConfig::new("secret-token", "42"));
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_url_validation() {
        let result = TelegramNotifier::new(TelegramConfig::new("t", "c").api_base("ftp://x"));
        assert!(matches!(result, Err(AlertError::NotConfigured(_))));

        let result = TelegramNotifier::new(TelegramConfig::new("", "c"));
        assert!(result.is_err());

        assert!(TelegramNotifier::new(TelegramConfig::new("t", "c")).is_ok());
    }

    #[test]
    fn test_backoff_doubles_and_saturates() {
        let telegram = TelegramNotifier::new(
            TelegramConfig::new("t", "c").retry_base_delay(Duration::from_millis(100)),
        )
        .unwrap();
        assert_eq!(telegram.backoff_delay(1), Duration::from_millis(100));
        assert_eq!(telegram.backoff_delay(2), Duration::from_millis(200));
        assert_eq!(telegram.backoff_delay(4), Duration::from_millis(800));

        let telegram =
            TelegramNotifier::new(TelegramConfig::new("t", "c").retry_base_delay(Duration::MAX))
                .unwrap();
        assert_eq!(telegram.backoff_delay(3), Duration::MAX);
        assert_eq!(telegram.backoff_delay(u32::MAX), Duration::MAX);
    }

    #[test]
    fn test_redact_hides_token() {
        let telegram = TelegramNotifier::new(TelegramConfig::new("SECRET123:tok", "c")).unwrap();
        let text = telegram.redact("https://api.telegram.org/botSECRET123:tok/sendMessage: Connection Failed");

        assert!(!text.contains("SECRET123:tok"));
        assert!(text.contains("/bot<redacted>/sendMessage"));
    }

    #[test]
    fn test_api_reply_parsing() {
        assert!(check_api_reply("").is_ok());
        assert!(check_api_reply(r#"{"ok":true,"result":{}}"#).is_ok());

        let err = check_api_reply(r#"{"ok":false,"description":"Bad Request: chat not found"}"#).unwrap_err();
        assert!(matches!(err, AlertError::Server { status: 200, ref message } if message.contains("chat not found")));

        assert!(matches!(check_api_reply("<html>"), Err(AlertError::Serialization(_))));
    }
}
