//! Tests for targets and sinks.

use chipper::{Error, MemorySink, Sink, Target};
use std::fs;
use std::io;
use tempfile::TempDir;

struct BrokenSink;

impl Sink for BrokenSink {
    fn name(&self) -> &str {
        "broken"
    }

    fn write(&self, _text: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }
}

#[test]
fn stdout_and_stderr_in_order_without_file() {
    let target = Target::builder().stdout(true).stderr(true).build().unwrap();
    assert_eq!(target.sink_names(), vec!["stdout", "stderr"]);
    target.log("to both streams").unwrap();
}

#[test]
fn no_sinks_drops_silently() {
    let target = Target::builder().build().unwrap();
    assert!(target.is_empty());
    target.log("nowhere").unwrap();
}

#[test]
fn file_sink_comes_first() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("order.log");

    let target = Target::builder()
        .stderr(true)
        .filename(path.to_string_lossy())
        .stdout(true)
        .build()
        .unwrap();

    let names = target.sink_names();
    assert_eq!(names.len(), 3);
    assert!(names[0].ends_with("order.log"));
    assert_eq!(&names[1..], &["stdout", "stderr"]);
}

#[test]
fn file_appends_newline_terminated_lines() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("app.log");
    fs::write(&path, "existing\n").unwrap();

    let target = Target::file(&path.to_string_lossy()).unwrap();
    target.log("one").unwrap();
    target.log("two\n").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "existing\none\ntwo\n");
}

#[test]
fn file_parent_directories_created() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("deeper").join("x.log");

    let target = Target::file(&path.to_string_lossy()).unwrap();
    target.log("made it").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "made it\n");
}

#[test]
fn unopenable_file_fails_construction() {
    let tmp = TempDir::new().unwrap();
    // A directory can't be opened for appending.
    let result = Target::file(&tmp.path().to_string_lossy());
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn failing_sink_does_not_block_others() {
    let before = MemorySink::new("before");
    let after = MemorySink::new("after");

    let target = Target::builder()
        .sink(before.clone())
        .sink(BrokenSink)
        .sink(after.clone())
        .build()
        .unwrap();

    let err = target.log("still delivered").unwrap_err();

    assert_eq!(before.contents(), "still delivered\n");
    assert_eq!(after.contents(), "still delivered\n");
    match err {
        Error::Write(failures) => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].sink, "broken");
            assert_eq!(failures[0].source.kind(), io::ErrorKind::BrokenPipe);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn memory_sink_clones_share_buffer() {
    let sink = MemorySink::new("m");
    let target = Target::sink(sink.clone());
    target.log("a").unwrap();
    target.log("b").unwrap();

    assert_eq!(sink.writes(), vec!["a\n".to_string(), "b\n".to_string()]);
    sink.clear();
    assert!(sink.is_empty());
}
