//! Human-readable verdict summaries
//!
//! The summary line goes straight into alert messages and logs:
//!
//! ```text
//! CRASH CONFIRMED! G:25.0 Flips:2 Dist:33.4m
//! Ignored: G:20.0 Flips:0 Dist:0.0m
//! ```

use alloc::{format, string::String};

use crate::engine::CrashStats;

/// Prefix for confirmed crashes
pub const CONFIRMED_PREFIX: &str = "CRASH CONFIRMED!";

/// Prefix for windows that did not clear every threshold
pub const IGNORED_PREFIX: &str = "Ignored:";

/// Render the summary line for a verdict
///
/// Depends only on its arguments. Reals are printed with one decimal.
pub fn format_message(is_crash: bool, stats: &CrashStats) -> String {
    let prefix = if is_crash { CONFIRMED_PREFIX } else { IGNORED_PREFIX };
    format!(
        "{} G:{:.1} Flips:{} Dist:{:.1}m",
        prefix, stats.max_g, stats.flips, stats.dist
    )
}
