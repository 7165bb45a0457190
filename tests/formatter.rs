//! Tests for the layered formatter.

use chipper::{Error, Formatter, TagFormatter, Trace, Transform};
use chrono::{NaiveDate, NaiveDateTime};

fn ts() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(7, 5, 3)
        .unwrap()
}

#[test]
fn default_tags_are_uppercased_and_comma_joined() {
    let formatter = Formatter::default();
    assert_eq!(formatter.format_tags(&["info", "general"]), "[INFO, GENERAL]");
}

#[test]
fn default_tag_formatter_trims() {
    let formatter = Formatter::default();
    assert_eq!(formatter.format_tags(&["  padded "]), "[PADDED]");
}

#[test]
fn default_layout() {
    let line = Formatter::default().format_message(
        "started",
        "main",
        &["info", "general"],
        ts(),
        &Trace::none(),
    );
    assert_eq!(line, "[2024-03-09 07:05:03][INFO, GENERAL] :started\n");
}

#[test]
fn trace_block_rendered_when_present() {
    let trace = Trace::new("src/db/pool.rs", 42, "db::pool");
    let line = Formatter::default().format_message("slow", "db", &["db"], ts(), &trace);
    assert_eq!(line, "[2024-03-09 07:05:03][pool.rs:42][DB] :slow\n");
}

#[test]
fn trace_block_empty_without_fields() {
    let formatter = Formatter::default();
    assert_eq!(formatter.format_trace(&Trace::none()), "");
}

#[test]
fn trace_with_module_template() {
    let formatter = Formatter::builder()
        .trace_template("({file}{line}{module})")
        .build()
        .unwrap();
    let trace = Trace::new("main.rs", 7, "app");
    assert_eq!(formatter.format_trace(&trace), "(main.rs:7:app)");
}

#[test]
fn custom_sub_templates_compose() {
    let formatter = Formatter::builder()
        .template("{datetime} {tags} | ")
        .tags_template("<{tags}>")
        .tag_template("#{tag}")
        .tag_delimiter(" ")
        .tag_transform(Transform::Lowercase)
        .date_template("d={date}")
        .date_format("%d/%m/%Y")
        .time_template("t={time}")
        .time_format("%H%M")
        .datetime_template("{date};{time}")
        .build()
        .unwrap();

    let line = formatter.format_message("msg", "h", &["Net", "IO"], ts(), &Trace::none());
    assert_eq!(line, "d=09/03/2024;t=0705 <#net #io> | msg\n");
}

#[test]
fn closure_tag_formatter() {
    let formatter = Formatter::builder()
        .tag_fn(|tag| format!("{}!", tag.len()))
        .build()
        .unwrap();
    assert_eq!(formatter.format_tags(&["abc", "de"]), "[3!, 2!]");
}

#[test]
fn tag_formatter_from_transform() {
    let formatter = Formatter::builder()
        .tag_formatter(TagFormatter::transform(Transform::Capitalize))
        .build()
        .unwrap();
    assert_eq!(formatter.format_tags(&["wARN"]), "[Warn]");
}

#[test]
fn exactly_one_trailing_newline() {
    let plain = Formatter::builder().template("{tags} ").build().unwrap();
    let with_newline = Formatter::builder().template("{tags}\n").build().unwrap();

    for formatter in [&plain, &with_newline] {
        for message in ["text", "text\n", "text\n\n", ""] {
            let line = formatter.format_message(message, "h", &["t"], ts(), &Trace::none());
            assert!(line.ends_with('\n'), "{line:?}");
            assert!(!line.ends_with("\n\n"), "{line:?}");
        }
    }
}

#[test]
fn rendering_is_idempotent() {
    let formatter = Formatter::default();
    let trace = Trace::new("a.rs", 1, "");
    let first = formatter.format_message("same", "h", &["x", "y"], ts(), &trace);
    let second = formatter.format_message("same", "h", &["x", "y"], ts(), &trace);
    assert_eq!(first, second);
}

#[test]
fn invalid_date_format_rejected() {
    let err = Formatter::builder().date_format("%Q").build().unwrap_err();
    assert!(matches!(err, Error::InvalidFormat { field: "date_format", .. }));
}

#[test]
fn offset_specifier_rejected_for_naive_time() {
    let err = Formatter::builder().time_format("%H %z").build().unwrap_err();
    assert!(matches!(err, Error::InvalidFormat { field: "time_format", .. }));
}

#[test]
fn unknown_placeholders_pass_through() {
    let formatter = Formatter::builder().template("{level}{tags} ").build().unwrap();
    let line = formatter.format_message("m", "h", &["t"], ts(), &Trace::none());
    assert_eq!(line, "{level}[T] m\n");
}

#[test]
fn transform_parses_aliases() {
    assert_eq!("upper".parse::<Transform>().unwrap(), Transform::Uppercase);
    assert_eq!("Lowercase".parse::<Transform>().unwrap(), Transform::Lowercase);
    assert_eq!("cap".parse::<Transform>().unwrap(), Transform::Capitalize);
    assert_eq!("none".parse::<Transform>().unwrap(), Transform::None);
    assert!(matches!(
        "shout".parse::<Transform>(),
        Err(Error::InvalidTransform(_))
    ));
}
