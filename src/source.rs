//! Compressed-input capability consumed by the decoders.
//!
//! A [`Source`] either fills the requested span completely or reports that
//! the compressed stream cannot supply that many bytes.  Decoders treat the
//! failure as end of input; they never retry.
//!
//! Implementations are provided for closures, in-memory slices
//! ([`SliceSource`]) and any [`std::io::Read`] ([`ReadSource`]).

use std::io::{self, Read};

/// Pull-based supplier of compressed bytes.
pub trait Source {
    /// Fills all of `buf` from the compressed stream.
    ///
    /// Returns `false` if fewer than `buf.len()` bytes are available.  The
    /// contents of `buf` are unspecified after a failure.
    fn fill(&mut self, buf: &mut [u8]) -> bool;
}

impl<F> Source for F
where
    F: FnMut(&mut [u8]) -> bool,
{
    #[inline]
    fn fill(&mut self, buf: &mut [u8]) -> bool {
        self(buf)
    }
}

/// Source over an in-memory compressed buffer.
///
/// A request that cannot be satisfied in full consumes nothing.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        SliceSource { data, pos: 0 }
    }

    /// Bytes handed out so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Bytes not yet handed out.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl Source for SliceSource<'_> {
    fn fill(&mut self, buf: &mut [u8]) -> bool {
        let end = self.pos + buf.len();
        if end > self.data.len() {
            return false;
        }
        buf.copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        true
    }
}

/// Source over any reader.
///
/// End of file is plain exhaustion.  Any other I/O error also fails the
/// request and is kept until [`ReadSource::take_error`] collects it; while
/// it is held, every fill fails without reading further.
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: R,
    error: Option<io::Error>,
}

impl<R: Read> ReadSource<R> {
    pub fn new(inner: R) -> Self {
        ReadSource { inner, error: None }
    }

    /// Returns and clears the non-EOF error that stopped filling.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Source for ReadSource<R> {
    fn fill(&mut self, buf: &mut [u8]) -> bool {
        // A failed read_exact leaves the stream position unknown.
        if self.error.is_some() {
            return false;
        }
        match self.inner.read_exact(buf) {
            Ok(()) => true,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => false,
            Err(e) => {
                self.error = Some(e);
                false
            }
        }
    }
}
