//! Conditional timestamp prefixing for outbound agent messages.
//!
//! Channel plugins wrap inbound messages in a sender/date envelope and
//! scheduled jobs announce the clock themselves; everything else leaves the
//! gateway without any notion of "now". [`inject_timestamp`] closes that gap
//! by prepending `[<time>] ` to a message, and skips messages a producer has
//! already stamped.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use msgstamp::{TimestampOptions, inject_timestamp};
//!
//! let opts = TimestampOptions {
//!     timezone: Some("America/New_York".to_string()),
//!     time_format: Some("24".to_string()),
//!     now: Some(Utc.with_ymd_and_hms(2026, 1, 29, 1, 31, 0).unwrap()),
//! };
//! assert_eq!(inject_timestamp("Hello", &opts), "[20:31 EST] Hello");
//! ```

mod config;
mod error;
mod inject;
mod time;

pub use config::{AgentDefaults, AgentsConfig, Config};
pub use error::ConfigError;
pub use inject::{
    MessageOrigin, TimestampOptions, classify_origin, inject_timestamp,
    timestamp_opts_from_config,
};
pub use time::{TimeFormat, format_user_time, resolve_user_timezone};
