// e2e/round_trip.rs: property-based decoding of encoder output
//
// Every stream the greedy encoder produces must decode to its input,
// regardless of how the caller slices its reads.

#[path = "../tests/support/encoder.rs"]
mod encoder;

use std::io::Read;

use lz5::{decompress_to_vec, LzssDecoder, Lz5Reader, SliceSource};
use proptest::prelude::*;

/// Text over a tiny alphabet so matches are frequent.
fn low_entropy() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(prop_oneof![Just(b' '), Just(b'a'), Just(b'b'), Just(b'\n')], 0..3000)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn arbitrary_bytes_round_trip(data in proptest::collection::vec(any::<u8>(), 0..2000)) {
        prop_assert_eq!(decompress_to_vec(&encoder::encode(&data)), data);
    }

    #[test]
    fn low_entropy_round_trip(data in low_entropy()) {
        prop_assert_eq!(decompress_to_vec(&encoder::encode(&data)), data);
    }

    #[test]
    fn chunked_reads_match_whole_decode(data in low_entropy(),
                                        chunk in 1usize..300) {
        let compressed = encoder::encode(&data);
        let mut dec = LzssDecoder::new();
        let mut src = SliceSource::new(&compressed);
        let mut out = Vec::new();
        let mut buf = vec![0u8; chunk];
        loop {
            let n = dec.read(&mut buf, &mut src);
            out.extend_from_slice(&buf[..n]);
            if n < chunk {
                break;
            }
        }
        prop_assert_eq!(out, data);
    }

    #[test]
    fn reader_adapter_round_trip(data in proptest::collection::vec(any::<u8>(), 0..1500)) {
        let compressed = encoder::encode(&data);
        let mut out = Vec::new();
        Lz5Reader::new(compressed.as_slice()).read_to_end(&mut out).unwrap();
        prop_assert_eq!(out, data);
    }

    #[test]
    fn arbitrary_input_never_panics(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        // Any byte string is a valid stream; output is bounded by 18 bytes per input byte.
        let out = decompress_to_vec(&data);
        prop_assert!(out.len() <= data.len() * 18);
    }
}
