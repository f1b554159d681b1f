use std::str::FromStr;

use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;

/// Fallback zone applied when no user preference is configured.
pub(crate) const DEFAULT_TIMEZONE: &str = "UTC";

/// Clock notation for rendered times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    TwelveHour,
    TwentyFourHour,
}

impl TimeFormat {
    /// Resolve a user preference string into a concrete format.
    ///
    /// Only `"24"` selects 24-hour notation; anything else, including an
    /// absent or unrecognized preference, falls back to 12-hour.
    pub fn resolve(preference: Option<&str>) -> Self {
        match preference.map(str::trim) {
            Some("24") => TimeFormat::TwentyFourHour,
            _ => TimeFormat::TwelveHour,
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            TimeFormat::TwelveHour => "%-I:%M %p %Z",
            TimeFormat::TwentyFourHour => "%H:%M %Z",
        }
    }
}

/// Resolve an optional user timezone preference to a concrete identifier.
///
/// A present, non-blank preference is passed through verbatim; otherwise the
/// process-wide default (`UTC`) applies. Validity is not checked here, that
/// happens when the zone is actually used for formatting.
pub fn resolve_user_timezone(preference: Option<&str>) -> String {
    match preference.map(str::trim) {
        Some(tz) if !tz.is_empty() => tz.to_string(),
        _ => DEFAULT_TIMEZONE.to_string(),
    }
}

/// Render an instant as a human-readable clock time in the given zone.
///
/// `timezone` is an IANA identifier (or `"local"` for the host zone,
/// case-insensitive). Returns `None` when the zone does not parse; callers
/// treat that as "no timestamp available" rather than an error.
///
/// The output is time-only (`8:31 PM EST` / `20:31 EST`), never a date.
pub fn format_user_time(instant: DateTime<Utc>, timezone: &str, format: TimeFormat) -> Option<String> {
    let trimmed = timezone.trim();
    if trimmed.eq_ignore_ascii_case("local") {
        let local = instant.with_timezone(&Local);
        return Some(local.format(format.pattern()).to_string());
    }
    let tz = Tz::from_str(trimmed).ok()?;
    let zoned = instant.with_timezone(&tz);
    Some(zoned.format(format.pattern()).to_string())
}
