#![no_main]
use chipper::fmt::{FormatTemplate, FormatValues};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let template = FormatTemplate::parse(data);
    assert_eq!(template.as_str(), data);

    let values = FormatValues::new()
        .handler("fuzz")
        .tags("[INFO, NET]")
        .tag("INFO")
        .datetime("[2025-01-01 00:00:00]")
        .date("2025-01-01")
        .time("00:00:00")
        .trace("[main.rs:1]")
        .location("main.rs", ":1", ":app");
    let _ = template.render(&values);
});
