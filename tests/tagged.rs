//! Tests for tag-bound cursors and the name shorthand.

use chipper::tag::split_name;
use chipper::{Formatter, Handler, Log, MemorySink, Target};

fn capture(tags: &[&str], template: &str) -> (Log, MemorySink, MemorySink) {
    let sink = MemorySink::new("handler");
    let fallback = MemorySink::new("default");
    let formatter = || Formatter::builder().template(template).build().unwrap();
    let log = Log::builder()
        .handler(
            Handler::builder("handler")
                .tags(tags.iter().copied())
                .target(Target::sink(sink.clone()))
                .formatter(formatter())
                .build()
                .unwrap(),
        )
        .default_handler(
            Handler::builder("default")
                .tag("*")
                .target(Target::sink(fallback.clone()))
                .formatter(formatter())
                .build()
                .unwrap(),
        )
        .build();
    (log, sink, fallback)
}

#[test]
fn split_name_keeps_order_and_drops_empty_parts() {
    assert_eq!(split_name("general_info"), vec!["general", "info"]);
    assert_eq!(split_name("_a__b_"), vec!["a", "b"]);
    assert_eq!(split_name("single"), vec!["single"]);
    assert!(split_name("___").is_empty());
}

#[test]
fn named_shorthand_equals_explicit_log() {
    let (log, sink, fallback) = capture(&["info"], "{tags} ");

    log.named("general_info").log("started");
    let shorthand = (sink.contents(), fallback.contents());

    sink.clear();
    fallback.clear();
    log.log("started", &["general", "info"]);
    let explicit = (sink.contents(), fallback.contents());

    assert_eq!(shorthand, explicit);
    assert_eq!(shorthand.0, "[INFO] started\n");
    assert_eq!(shorthand.1, "[GENERAL] started\n");
}

#[test]
fn tagged_cursor_reuses_tags() {
    let (log, sink, _) = capture(&["db"], "{tags} ");
    let db = log.tagged(["db"]);

    db.log("one");
    db.log("two");

    assert_eq!(sink.writes(), vec!["[DB] one\n".to_string(), "[DB] two\n".to_string()]);
    assert_eq!(db.tags(), &["db".to_string()]);
}

#[test]
fn with_extends_tags() {
    let (log, sink, fallback) = capture(&["db"], "{tags} ");
    let cursor = log.tagged(["db"]).with("slow");

    cursor.try_log("query").unwrap();

    assert_eq!(sink.contents(), "[DB] query\n");
    assert_eq!(fallback.contents(), "[SLOW] query\n");
}

#[test]
fn trace_tag_captures_call_site() {
    let (log, sink, _) = capture(&["trace"], "{trace}{tags} ");

    let line = line!() + 1;
    log.tagged(["trace"]).log("here");

    assert_eq!(sink.contents(), format!("[tagged.rs:{line}][TRACE] here\n"));
}

#[test]
fn trace_reaches_default_handler_too() {
    let (log, _, fallback) = capture(&["other"], "{trace}{tags} ");

    let line = line!() + 1;
    log.tagged(["trace", "x"]).try_log("both").unwrap();

    assert_eq!(
        fallback.contents(),
        format!("[tagged.rs:{line}][TRACE, X] both\n")
    );
}

#[test]
fn without_trace_tag_no_trace_block() {
    let (log, sink, _) = capture(&["plain"], "{trace}{tags} ");
    log.tagged(["plain"]).log("quiet");
    assert_eq!(sink.contents(), "[PLAIN] quiet\n");
}

#[test]
fn log_traced_macro_records_module() {
    let sink = MemorySink::new("m");
    let log = Log::builder()
        .handler(
            Handler::builder("m")
                .tag("cache")
                .target(Target::sink(sink.clone()))
                .formatter(
                    Formatter::builder()
                        .template("{trace} ")
                        .trace_template("{module}")
                        .module_template("{module}")
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),
        )
        .build();

    chipper::log_traced!(log, "miss", "cache");

    assert_eq!(sink.contents(), "tagged miss\n");
}
