//! Wall-clock access for message IDs and timestamps.
//!
//! Browser builds read `Date.now()`; non-browser builds (SSR, tests) read
//! the system clock so state logic behaves the same everywhere.

/// Current time in milliseconds since the Unix epoch.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |d| d.as_millis() as f64)
    }
}
