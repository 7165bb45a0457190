use chipper::{Formatter, Handler, Log, Target};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tempfile::TempDir;

fn handler(name: &str, tags: &[&str], target: Target) -> Handler {
    Handler::builder(name)
        .tags(tags.iter().copied())
        .target(target)
        .formatter(Formatter::default())
        .build()
        .expect("valid handler")
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Log::try_log");

    // Empty targets isolate routing and formatting from I/O.
    let silent = || Target::builder().build().expect("empty target");
    let log = Log::builder()
        .handler(handler("errors", &["error", "fatal"], silent()))
        .handler(handler("net", &["net", "tcp", "udp"], silent()))
        .handler(handler("db", &["db", "sql"], silent()))
        .default_handler(handler("default", &["*"], silent()))
        .build();

    group.bench_function("single_match", |b| {
        b.iter(|| log.try_log(black_box("request failed"), black_box(&["error"])));
    });

    group.bench_function("fan_out_and_default", |b| {
        b.iter(|| {
            log.try_log(
                black_box("request failed"),
                black_box(&["error", "net", "db", "unrouted"]),
            )
        });
    });

    group.finish();
}

fn bench_file_target(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let path = tmp.path().join("bench.log");
    let target = Target::file(&path.to_string_lossy()).expect("open bench log");

    c.bench_function("Target::log file", |b| {
        b.iter(|| target.log(black_box("[2025-01-15 14:30:00][INFO] :benchmark line\n")));
    });
}

criterion_group!(benches, bench_dispatch, bench_file_target);
criterion_main!(benches);
