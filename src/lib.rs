// lz5r: streaming decoder for the LArc -lz5- LZSS compression method

pub mod config;
pub mod source;
pub mod lzss;
pub mod dispatch;
pub mod io;
pub mod cli;

// ── Version constants ─────────────────────────────────────────────────────────
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version string.
pub fn version_string() -> &'static str {
    VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use dispatch::{decoder_for_method, Decoder, DecoderType, LZ5_DECODER};
pub use io::{decompress_to_vec, Lz5Reader};
pub use lzss::LzssDecoder;
pub use source::{ReadSource, SliceSource, Source};
