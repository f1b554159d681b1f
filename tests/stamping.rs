use std::fs;

use chrono::{DateTime, TimeZone, Utc};
use msgstamp::{
    Config, MessageOrigin, TimestampOptions, classify_origin, inject_timestamp,
    timestamp_opts_from_config,
};

fn fixed_now() -> DateTime<Utc> {
    // 2026-01-28 20:31 EST
    Utc.with_ymd_and_hms(2026, 1, 29, 1, 31, 0).unwrap()
}

fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("write config");
    (dir, path)
}

#[test]
fn stamps_a_plain_outbound_message() {
    let opts = TimestampOptions {
        timezone: Some("UTC".to_string()),
        time_format: Some("24".to_string()),
        now: Some(fixed_now()),
    };
    assert_eq!(inject_timestamp("Hello", &opts), "[01:31 UTC] Hello");
}

#[test]
fn config_preferences_flow_through_to_the_stamp() {
    let (_dir, path) = write_config(
        r#"
        [agents.defaults]
        user_timezone = "America/New_York"
        time_format = "24"
        "#,
    );
    let config = Config::from_path(&path).expect("load config");
    let mut opts = timestamp_opts_from_config(&config);
    opts.now = Some(fixed_now());
    assert_eq!(inject_timestamp("Hello", &opts), "[20:31 EST] Hello");
}

#[test]
fn gateway_style_camel_case_config_flows_through() {
    let (_dir, path) = write_config(
        r#"
        [agents.defaults]
        userTimezone = "America/New_York"
        timeFormat = "12"
        "#,
    );
    let config = Config::from_path(&path).expect("load config");
    let mut opts = timestamp_opts_from_config(&config);
    opts.now = Some(fixed_now());
    assert_eq!(inject_timestamp("Hello", &opts), "[8:31 PM EST] Hello");
}

#[test]
fn empty_config_stamps_in_utc_twelve_hour() {
    let (_dir, path) = write_config("");
    let config = Config::from_path(&path).expect("load config");
    let mut opts = timestamp_opts_from_config(&config);
    assert_eq!(opts.timezone.as_deref(), Some("UTC"));
    assert_eq!(opts.time_format, None);
    opts.now = Some(fixed_now());
    assert_eq!(inject_timestamp("Hello", &opts), "[1:31 AM UTC] Hello");
}

#[test]
fn already_stamped_messages_are_left_alone() {
    let opts = TimestampOptions {
        now: Some(fixed_now()),
        ..TimestampOptions::default()
    };
    for m in [
        "[Discord alice 2026-01-28 20:31 EST] hi",
        "[Signal bob 2026-02-01] ping",
        "Current time: 3pm. Do the thing.",
        "",
        "   \n",
    ] {
        assert_eq!(inject_timestamp(m, &opts), m);
    }
}

#[test]
fn stamp_is_time_only_and_does_not_read_as_an_envelope() {
    let opts = TimestampOptions {
        now: Some(fixed_now()),
        ..TimestampOptions::default()
    };
    let stamped = inject_timestamp("Hello", &opts);
    assert!(stamped.starts_with('['));
    assert!(!stamped.contains("2026-01-2"));
    assert_eq!(classify_origin(&stamped), MessageOrigin::Plain);
}

#[test]
fn wall_clock_default_produces_some_stamp() {
    let stamped = inject_timestamp("Hello", &TimestampOptions::default());
    assert!(stamped.ends_with("] Hello"), "got {stamped:?}");
    assert!(stamped.starts_with('['));
}
