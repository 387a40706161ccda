//! Runtime configuration from environment variables
//!
//! Every value falls back to a default when the variable is unset or invalid.
//! Each value is read by whoever owns it: the host reads the timings, each
//! widget reads its own watchlist.

use std::time::Duration;
use tracing::warn;

/// Symbols shown when `BLOCKVISTA_WATCHLIST` is not set
pub const DEFAULT_WATCHLIST: &str = "NIFTY 50,RELIANCE,TCS,INFY,HDFCBANK";

const DEFAULT_TICK_MS: u64 = 100;
const DEFAULT_REFRESH_SECS: u64 = 2;

/// Event poll timeout. Override with `BLOCKVISTA_TICK_MS`.
pub fn tick_rate() -> Duration {
    Duration::from_millis(parse_u64("BLOCKVISTA_TICK_MS", std::env::var("BLOCKVISTA_TICK_MS").ok(), DEFAULT_TICK_MS))
}

/// Widget refresh interval. Override with `BLOCKVISTA_REFRESH_SECS`.
pub fn refresh_interval() -> Duration {
    Duration::from_secs(parse_u64(
        "BLOCKVISTA_REFRESH_SECS",
        std::env::var("BLOCKVISTA_REFRESH_SECS").ok(),
        DEFAULT_REFRESH_SECS,
    ))
}

/// Watched symbols. Override with `BLOCKVISTA_WATCHLIST` (comma separated).
pub fn watchlist() -> Vec<String> {
    let raw = std::env::var("BLOCKVISTA_WATCHLIST").unwrap_or_else(|_| DEFAULT_WATCHLIST.to_string());
    let symbols = parse_watchlist(&raw);
    if symbols.is_empty() {
        warn!("BLOCKVISTA_WATCHLIST has no symbols, using default watchlist");
        return parse_watchlist(DEFAULT_WATCHLIST);
    }
    symbols
}

/// Accent color as `#rrggbb`. Override with `BLOCKVISTA_ACCENT`.
pub fn accent_hex() -> Option<String> {
    std::env::var("BLOCKVISTA_ACCENT").ok()
}

/// Positive integer value, or `default` when missing, malformed or zero
fn parse_u64(name: &str, value: Option<String>, default: u64) -> u64 {
    match value {
        None => default,
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(v) if v > 0 => v,
            _ => {
                warn!("Ignoring invalid {}={:?}, using {}", name, raw, default);
                default
            }
        },
    }
}

/// Split a comma separated list, trimming and upper-casing symbols
pub fn parse_watchlist(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase)
        .collect()
}
