// Display-timezone timestamping.
//
// Timestamps shown to the dashboard are taken in a configurable IANA zone
// (DISPLAY_TZ, e.g. "Asia/Kolkata"). An unknown or empty zone name is not an
// error: it silently falls back to UTC.

use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;

/// Resolve an IANA zone name, falling back to UTC for unknown names.
pub fn resolve_tz(name: &str) -> Tz {
    name.parse::<Tz>().unwrap_or(Tz::UTC)
}

/// Current time in the named zone, as a timezone-aware timestamp.
pub fn now_in(name: &str) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&resolve_tz(name)).fixed_offset()
}
