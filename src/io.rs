//! std::io integration: reader adapter, stream and file decompression.
//!
//! The decoder core deals only in [`Source`](crate::source::Source) pulls and
//! destination slices.  This layer connects it to readers, writers and
//! paths, and is where truncated input becomes an error.

pub mod decompress_files;
pub mod decompress_stream;
pub mod file_io;
pub mod prefs;
pub mod reader;

pub use prefs::Prefs;
pub use reader::Lz5Reader;

// ── Special I/O sentinels ───────────────────────────────────────────────────
pub use file_io::{NUL_MARK, STDIN_MARK, STDOUT_MARK};

// ── Decompression API ───────────────────────────────────────────────────────
pub use decompress_files::{decompress_filename, decompress_multiple_filenames, DecompressStats};
pub use decompress_stream::{decompress_stream, decompress_to_vec};
