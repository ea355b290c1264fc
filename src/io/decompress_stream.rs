//! Whole-stream decompression.
//!
//! [`decompress_stream`] decodes every byte a compressed reader yields into
//! any `impl Write`.  It is the layer that turns the decoder's silent
//! exhaustion into an error: when the archive recorded the decoded size
//! (`prefs.expected_size`), input that runs out early is reported as a
//! truncated stream, and bytes decoded past that size (padding in the final
//! run) are dropped.

use std::io::{self, Read, Write};

use crate::config::IO_BUFFER_SIZE;
use crate::displaylevel;
use crate::io::prefs::Prefs;
use crate::io::reader::{method_type, Lz5Reader};

const PROGRESS_STEP: u64 = 1 << 20;

/// Decodes `src` into `dst`, returning the number of decoded bytes.
///
/// In test mode the output is decoded and counted but not written.
///
/// # Errors
///
/// - `InvalidInput` if `prefs.method` is not a registered method.
/// - `UnexpectedEof` if `prefs.expected_size` is set and the input ends
///   before that many bytes were decoded.
/// - Any error from reading `src` or writing `dst`.
pub fn decompress_stream<R: Read, W: Write + ?Sized>(
    src: &mut R,
    dst: &mut W,
    prefs: &Prefs,
) -> io::Result<u64> {
    let mut reader = Lz5Reader::from_type(src, method_type(&prefs.method)?);
    let mut buf = vec![0u8; IO_BUFFER_SIZE];
    let mut total: u64 = 0;

    loop {
        let want = match prefs.expected_size {
            Some(limit) => (limit - total).min(buf.len() as u64) as usize,
            None => buf.len(),
        };
        if want == 0 {
            break;
        }

        let n = reader.read(&mut buf[..want])?;
        if n == 0 {
            break;
        }
        if !prefs.test_mode {
            dst.write_all(&buf[..n])?;
        }

        let before = total;
        total += n as u64;
        if total / PROGRESS_STEP != before / PROGRESS_STEP {
            displaylevel!(3, "\rDecoded : {} MiB   ", total >> 20);
        }
    }

    if let Some(limit) = prefs.expected_size {
        if total < limit {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("truncated stream: decoded {} of {} bytes", total, limit),
            ));
        }
    }

    dst.flush()?;
    displaylevel!(4, "\rdecoded {} bytes            \n", total);
    Ok(total)
}

/// Decodes an in-memory `-lz5-` stream.
///
/// Decoding stops at the end of `data`; the result may carry trailing
/// padding from the final run.
pub fn decompress_to_vec(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() * 2);
    let mut decoder = crate::lzss::LzssDecoder::new();
    let mut source = crate::source::SliceSource::new(data);
    let mut chunk = [0u8; crate::lzss::OUTPUT_BUFFER_SIZE];
    loop {
        let n = decoder.read(&mut chunk, &mut source);
        out.extend_from_slice(&chunk[..n]);
        if n < chunk.len() {
            break;
        }
    }
    out
}
