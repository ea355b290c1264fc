//! LZSS decoder for the LArc `-lz5-` compression method.

pub mod decoder;
pub mod types;

pub use decoder::LzssDecoder;
pub use types::{OUTPUT_BUFFER_SIZE, RING_BUFFER_SIZE, RING_BUFFER_START, THRESHOLD};
