//! Window timestamps
//!
//! Timestamps arrive from the device as epoch milliseconds. They are kept
//! signed so an inverted window (`end_ts < start_ts`) is representable and
//! yields a negative duration instead of wrapping.

use crate::constants::time::MS_PER_SECOND;

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = i64;

/// Elapsed seconds from `start_ts` to `end_ts`
///
/// Negative when the window is inverted. No clamping is applied.
pub fn elapsed_secs(start_ts: Timestamp, end_ts: Timestamp) -> f64 {
    end_ts.saturating_sub(start_ts) as f64 / MS_PER_SECOND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_whole_seconds() {
        assert_eq!(elapsed_secs(0, 2000), 2.0);
        assert_eq!(elapsed_secs(1_700_000_000_000, 1_700_000_001_500), 1.5);
    }

    #[test]
    fn inverted_window_is_negative() {
        assert_eq!(elapsed_secs(3000, 1000), -2.0);
    }

    #[test]
    fn extreme_values_saturate() {
        assert!(elapsed_secs(Timestamp::MIN, Timestamp::MAX).is_finite());
        assert!(elapsed_secs(Timestamp::MAX, Timestamp::MIN) < 0.0);
    }
}
