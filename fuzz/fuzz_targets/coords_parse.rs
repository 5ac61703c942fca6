//! Fuzz target for coords attribute parsing.
//!
//! This fuzzer feeds arbitrary UTF-8 attribute strings to both the lenient
//! and strict coordinate parsers, checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use maplight::geometry::parse::fuzz_parse_coords;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    fuzz_parse_coords(raw);
});
