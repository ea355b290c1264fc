//! Method-identifier → decoder registry.
//!
//! Archive layers know a member's compression method only by its five-byte
//! identifier (`-lz5-`, ...).  Each supported method is described by a
//! [`DecoderType`] and the layer asks [`decoder_for_method`] for it, then
//! drives the resulting [`Decoder`] without knowing which one it got.

use crate::lzss::LzssDecoder;
use crate::source::Source;

/// A streaming decompressor for one compression method.
pub trait Decoder: Send {
    /// Returns the decoder to its start-of-stream state.
    fn init(&mut self);

    /// Fills `buf` with decoded bytes pulled through `source`.
    ///
    /// Returns the count written; less than `buf.len()` only once the
    /// compressed input is exhausted.
    fn read(&mut self, buf: &mut [u8], source: &mut dyn Source) -> usize;
}

impl Decoder for LzssDecoder {
    fn init(&mut self) {
        LzssDecoder::init(self)
    }

    fn read(&mut self, buf: &mut [u8], source: &mut dyn Source) -> usize {
        LzssDecoder::read(self, buf, source)
    }
}

/// Registration record for a compression method.
#[derive(Clone, Copy)]
pub struct DecoderType {
    /// Method identifier as stored in archive headers.
    pub name: &'static str,
    /// Size in bytes of the decoder state.
    pub state_size: usize,
    create: fn() -> Box<dyn Decoder>,
}

impl DecoderType {
    /// Allocates and initializes a decoder for this method.
    pub fn create(&self) -> Box<dyn Decoder> {
        (self.create)()
    }
}

impl std::fmt::Debug for DecoderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoderType")
            .field("name", &self.name)
            .field("state_size", &self.state_size)
            .finish()
    }
}

fn new_lzss() -> Box<dyn Decoder> {
    Box::new(LzssDecoder::new())
}

/// LArc `-lz5-`: 4 KiB-window LZSS.
pub static LZ5_DECODER: DecoderType = DecoderType {
    name: "-lz5-",
    state_size: core::mem::size_of::<LzssDecoder>(),
    create: new_lzss,
};

/// Every registered method.
pub static DECODER_TYPES: &[&DecoderType] = &[&LZ5_DECODER];

/// Looks up the decoder for a method identifier (exact match).
pub fn decoder_for_method(name: &str) -> Option<&'static DecoderType> {
    DECODER_TYPES.iter().copied().find(|t| t.name == name)
}

/// Identifier used when none is given.
pub const DEFAULT_METHOD: &str = "-lz5-";
