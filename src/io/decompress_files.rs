//! File-level decompression.
//!
//! - [`decompress_filename`]: one source/destination pair.
//! - [`decompress_multiple_filenames`]: a list of sources, destinations
//!   derived by stripping a suffix (e.g. `.lz5`).  Files are independent, so
//!   with more than one worker they are decoded in parallel on a rayon pool.
//!
//! A destination that fails mid-stream is removed rather than left
//! truncated.  On success the source modification time is copied onto
//! regular destination files (via `filetime`) unless disabled in [`Prefs`].

use std::fs;
use std::io;

use filetime::FileTime;
use rayon::prelude::*;

use crate::config::NB_WORKERS_MAX;
use crate::displaylevel;
use crate::io::decompress_stream::decompress_stream;
use crate::io::file_io::{is_special_path, open_dst_file, open_src_file, NUL_MARK};
use crate::io::prefs::Prefs;

/// Statistics returned by [`decompress_filename`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecompressStats {
    /// Decoded bytes produced (written, or discarded in test mode).
    pub decompressed_bytes: u64,
}

/// Derives the output name for `src` by removing `suffix`.
///
/// Returns `None` when `src` does not end with `suffix` or is nothing but it.
pub fn output_filename(src: &str, suffix: &str) -> Option<String> {
    src.strip_suffix(suffix)
        .filter(|stem| !stem.is_empty() && !stem.ends_with(|c: char| c == '/' || c == '\\'))
        .map(str::to_owned)
}

/// Decompresses `src` into `dst`.
///
/// `src` may be [`STDIN_MARK`](crate::io::STDIN_MARK); `dst` may be a stdout or null-device
/// sentinel.  In test mode `dst` is ignored and output is discarded.
pub fn decompress_filename(src: &str, dst: &str, prefs: &Prefs) -> io::Result<DecompressStats> {
    let src_mtime = if is_special_path(src) {
        None
    } else {
        fs::metadata(src).and_then(|m| m.modified()).ok()
    };
    let dst = if prefs.test_mode { NUL_MARK } else { dst };

    let mut input = open_src_file(src)?;
    let mut output = open_dst_file(dst, prefs)?;
    let is_regular = output.is_regular;

    let result = decompress_stream(&mut input, &mut output, prefs);
    drop(output);

    let decoded = match result {
        Ok(n) => n,
        Err(e) => {
            displaylevel!(1, "{}: {}\n", src, e);
            if is_regular {
                let _ = fs::remove_file(dst);
            }
            return Err(e);
        }
    };

    if is_regular && prefs.keep_mtime {
        if let Some(mtime) = src_mtime {
            if let Err(e) = filetime::set_file_mtime(dst, FileTime::from_system_time(mtime)) {
                displaylevel!(2, "{}: could not set modification time: {}\n", dst, e);
            }
        }
    }

    displaylevel!(2, "{:<30}: decoded {} bytes\n", src, decoded);
    Ok(DecompressStats { decompressed_bytes: decoded })
}

/// Decompresses every file in `srcs`, writing each to its name minus
/// `suffix`.
///
/// Sources without the suffix are skipped with a warning (unless in test
/// mode, which needs no destination name).  Returns the number of sources
/// that were skipped or failed.
pub fn decompress_multiple_filenames(
    srcs: &[String],
    suffix: &str,
    prefs: &Prefs,
) -> io::Result<usize> {
    let decode_one = |src: &String| -> bool {
        let dst = if prefs.test_mode {
            NUL_MARK.to_owned()
        } else {
            match output_filename(src, suffix) {
                Some(dst) => dst,
                None => {
                    displaylevel!(1, "{}: unknown suffix ({} expected) -- ignored\n", src, suffix);
                    return false;
                }
            }
        };
        decompress_filename(src, &dst, prefs).is_ok()
    };

    if prefs.nb_workers <= 1 || srcs.len() <= 1 {
        return Ok(srcs.iter().filter(|src| !decode_one(*src)).count());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(prefs.nb_workers.min(NB_WORKERS_MAX))
        .build()
        .map_err(|e| io::Error::other(format!("cannot start worker pool: {}", e)))?;
    displaylevel!(4, "decoding {} files on {} workers\n", srcs.len(), pool.current_num_threads());
    Ok(pool.install(|| srcs.par_iter().filter(|src| !decode_one(*src)).count()))
}
