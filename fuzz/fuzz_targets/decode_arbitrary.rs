#![no_main]
use libfuzzer_sys::fuzz_target;
use lz5::{LzssDecoder, SliceSource};

fuzz_target!(|data: &[u8]| {
    // Every byte string is a valid stream. The first byte picks the read
    // size; decoding the rest must never panic and must agree across sizes.
    let Some((&sel, stream)) = data.split_first() else {
        return;
    };
    let whole = lz5::decompress_to_vec(stream);
    assert!(whole.len() <= stream.len() * 18);

    let chunk = usize::from(sel) + 1;
    let mut dec = LzssDecoder::new();
    let mut src = SliceSource::new(stream);
    let mut buf = vec![0u8; chunk];
    let mut out = Vec::with_capacity(whole.len());
    loop {
        let n = dec.read(&mut buf, &mut src);
        out.extend_from_slice(&buf[..n]);
        if n < chunk {
            break;
        }
    }
    assert_eq!(out, whole);
});
