//! [`std::io::Read`] adapter over a compressed stream.
//!
//! [`Lz5Reader`] turns any reader of compressed bytes into a reader of
//! decoded bytes.  The compressed side is buffered internally, so the
//! one- and two-byte pulls the decoder makes stay cheap even on raw files.

use std::io::{self, BufReader, Read};

use crate::config::IO_BUFFER_SIZE;
use crate::dispatch::{decoder_for_method, Decoder, DecoderType, LZ5_DECODER};
use crate::source::ReadSource;

/// Resolves a method identifier, mapping unknown names to `InvalidInput`.
pub fn method_type(name: &str) -> io::Result<&'static DecoderType> {
    decoder_for_method(name).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unsupported compression method: {}", name),
        )
    })
}

/// Decoding reader.
///
/// A zero-length read marks the end of the compressed stream.  I/O errors
/// from the underlying reader are returned once all bytes decoded before
/// the failure have been delivered.
pub struct Lz5Reader<R> {
    decoder: Box<dyn Decoder>,
    source: ReadSource<BufReader<R>>,
}

impl<R: Read> Lz5Reader<R> {
    /// Reader for a `-lz5-` stream.
    pub fn new(inner: R) -> Self {
        Self::from_type(inner, &LZ5_DECODER)
    }

    /// Reader for the method named `method`.
    pub fn with_method(inner: R, method: &str) -> io::Result<Self> {
        Ok(Self::from_type(inner, method_type(method)?))
    }

    pub fn from_type(inner: R, ty: &DecoderType) -> Self {
        Lz5Reader {
            decoder: ty.create(),
            source: ReadSource::new(BufReader::with_capacity(IO_BUFFER_SIZE, inner)),
        }
    }

    pub fn get_ref(&self) -> &R {
        self.source.get_ref().get_ref()
    }

    /// Returns the compressed reader.  Input buffered ahead of the decoder
    /// is lost.
    pub fn into_inner(self) -> R {
        self.source.into_inner().into_inner()
    }
}

impl<R: Read> Read for Lz5Reader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.decoder.read(buf, &mut self.source);
        if n == 0 && !buf.is_empty() {
            if let Some(e) = self.source.take_error() {
                return Err(e);
            }
        }
        Ok(n)
    }
}

impl<R> std::fmt::Debug for Lz5Reader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lz5Reader").finish_non_exhaustive()
    }
}
