#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let tags = chipper::tag::split_name(data);
    assert!(tags.iter().all(|t| !t.contains('_')));
});
