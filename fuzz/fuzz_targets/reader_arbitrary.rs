#![no_main]
use std::io::Read;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut out = Vec::new();
    let n = lz5::Lz5Reader::new(data).read_to_end(&mut out).unwrap_or(0);
    assert_eq!(n, out.len());
});
