use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::config::Config;
use crate::time::{DEFAULT_TIMEZONE, TimeFormat, format_user_time, resolve_user_timezone};

/// Channel-plugin envelope: `[<word> <anything>YYYY-MM-DD...`, e.g.
/// `[Discord alice 2026-01-28 20:31 EST] hi`.
static ENVELOPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\w+ .+\d{4}-\d{2}-\d{2}").expect("envelope pattern"));

/// Marker inserted by scheduled jobs that already announce the current time.
const SCHEDULED_TIME_MARKER: &str = "Current time: ";

/// Where a message's timestamp (if any) came from.
///
/// Classification is a heuristic over producer conventions, not a tag: a
/// format change in an upstream producer changes what lands in each bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageOrigin {
    /// No recognized timestamp; safe to stamp.
    Plain,
    /// Already wrapped in a channel sender/date envelope.
    ChannelEnvelope,
    /// Already carries a scheduled-job time annotation.
    ScheduledAnnotation,
}

/// Classify a message by the timestamp convention it already carries.
pub fn classify_origin(message: &str) -> MessageOrigin {
    if ENVELOPE_RE.is_match(message) {
        MessageOrigin::ChannelEnvelope
    } else if message.contains(SCHEDULED_TIME_MARKER) {
        MessageOrigin::ScheduledAnnotation
    } else {
        MessageOrigin::Plain
    }
}

/// Options for [`inject_timestamp`]. All fields are optional; defaults are
/// applied inside the injector (`UTC`, 12-hour clock, wall clock now), not
/// at construction.
#[derive(Debug, Clone, Default)]
pub struct TimestampOptions {
    /// IANA zone identifier (or `"local"`). Absent means `UTC`.
    pub timezone: Option<String>,
    /// User preference verbatim, expected `"12"` or `"24"`.
    pub time_format: Option<String>,
    /// Fixed instant for deterministic output; absent means now.
    pub now: Option<DateTime<Utc>>,
}

/// Prefix `message` with a bracketed clock time, unless it is blank or a
/// producer already stamped it.
///
/// The prefix is `[<time>] `, time-only, so it never matches the channel
/// envelope pattern; stamping the output of this function again would add a
/// second prefix. Callers stamp once per message.
///
/// Fails open: if the configured zone cannot be formatted the message is
/// returned unchanged rather than carrying a broken prefix.
pub fn inject_timestamp(message: &str, options: &TimestampOptions) -> String {
    if message.trim().is_empty() {
        return message.to_string();
    }
    if classify_origin(message) != MessageOrigin::Plain {
        return message.to_string();
    }

    let now = options.now.unwrap_or_else(Utc::now);
    let timezone = options.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE);
    let format = TimeFormat::resolve(options.time_format.as_deref());

    match format_user_time(now, timezone, format) {
        Some(stamp) if !stamp.is_empty() => format!("[{stamp}] {message}"),
        _ => message.to_string(),
    }
}

/// Project user-preference config into injector options.
///
/// The timezone preference goes through [`resolve_user_timezone`] so an
/// unset preference lands on the process default; the time-format
/// preference is carried verbatim and validated by the injector itself.
pub fn timestamp_opts_from_config(config: &Config) -> TimestampOptions {
    let defaults = &config.agents.defaults;
    TimestampOptions {
        timezone: Some(resolve_user_timezone(defaults.user_timezone.as_deref())),
        time_format: defaults.time_format.clone(),
        now: None,
    }
}
