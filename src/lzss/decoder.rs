//! Incremental `-lz5-` decoder.
//!
//! The decoder works one *run* at a time: a bitmap byte and the eight
//! commands it describes are decoded into a small staging buffer, which
//! successive [`LzssDecoder::read`] calls drain before the next run is pulled
//! from the [`Source`].
//!
//! Every output byte is mirrored into a 4 KiB ring buffer, the dictionary for
//! copy commands.  Copy commands address the ring buffer by absolute position
//! and are never validated: an offset into filler or stale history silently
//! yields whatever bytes are there, as legacy archives expect.
//!
//! No allocation happens after construction.

use crate::source::Source;

use super::types::{
    copy_command, COMMANDS_PER_RUN, OUTPUT_BUFFER_SIZE, RING_BUFFER_FILL, RING_BUFFER_MASK,
    RING_BUFFER_SIZE, RING_BUFFER_START,
};

/// Decoder state for one `-lz5-` stream.
#[derive(Clone)]
pub struct LzssDecoder {
    ringbuf: [u8; RING_BUFFER_SIZE],
    ringbuf_pos: usize,
    outbuf: [u8; OUTPUT_BUFFER_SIZE],
    outbuf_pos: usize,
    outbuf_len: usize,
}

impl Default for LzssDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LzssDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LzssDecoder")
            .field("ringbuf_pos", &self.ringbuf_pos)
            .field("outbuf_pos", &self.outbuf_pos)
            .field("outbuf_len", &self.outbuf_len)
            .finish_non_exhaustive()
    }
}

impl LzssDecoder {
    /// Creates an initialized decoder.
    pub fn new() -> Self {
        LzssDecoder {
            ringbuf: [RING_BUFFER_FILL; RING_BUFFER_SIZE],
            ringbuf_pos: RING_BUFFER_START,
            outbuf: [0u8; OUTPUT_BUFFER_SIZE],
            outbuf_pos: 0,
            outbuf_len: 0,
        }
    }

    /// Resets the decoder to the start-of-stream state.
    pub fn init(&mut self) {
        self.ringbuf.fill(RING_BUFFER_FILL);
        self.ringbuf_pos = RING_BUFFER_START;
        self.outbuf_pos = 0;
        self.outbuf_len = 0;
    }

    /// The history dictionary.
    pub fn ring_buffer(&self) -> &[u8; RING_BUFFER_SIZE] {
        &self.ringbuf
    }

    /// Ring-buffer position the next output byte will be written to.
    pub fn ring_position(&self) -> usize {
        self.ringbuf_pos
    }

    /// Decoded bytes held back from the last run, not yet returned by `read`.
    pub fn pending(&self) -> usize {
        self.outbuf_len - self.outbuf_pos
    }

    #[inline(always)]
    fn output_byte(&mut self, b: u8) {
        self.outbuf[self.outbuf_len] = b;
        self.outbuf_len += 1;

        self.ringbuf[self.ringbuf_pos] = b;
        self.ringbuf_pos = (self.ringbuf_pos + 1) & RING_BUFFER_MASK;
    }

    // Byte at a time: the source range may overlap the bytes being written.
    #[inline(always)]
    fn output_block(&mut self, start: usize, len: usize) {
        for i in 0..len {
            let b = self.ringbuf[(start + i) & RING_BUFFER_MASK];
            self.output_byte(b);
        }
    }

    /// Decodes one run into the staging buffer.
    ///
    /// Returns `false` if the source ran dry; whatever the run produced
    /// before that point stays in the staging buffer.
    fn process_run<S: Source + ?Sized>(&mut self, source: &mut S) -> bool {
        self.outbuf_len = 0;

        let mut bitmap = [0u8; 1];
        if !source.fill(&mut bitmap) {
            return false;
        }
        let bitmap = bitmap[0];

        for bit in 0..COMMANDS_PER_RUN {
            if bitmap & (1 << bit) != 0 {
                let mut b = [0u8; 1];
                if !source.fill(&mut b) {
                    return false;
                }
                self.output_byte(b[0]);
            } else {
                let mut cmd = [0u8; 2];
                if !source.fill(&mut cmd) {
                    return false;
                }
                let (start, len) = copy_command(cmd[0], cmd[1]);
                self.output_block(start, len);
            }
        }

        true
    }

    /// Fills `buf` with decoded bytes, pulling compressed input from `source`
    /// as needed.
    ///
    /// Returns the number of bytes written.  A short count means the source
    /// is exhausted; once it is, further calls return 0.
    pub fn read<S: Source + ?Sized>(&mut self, buf: &mut [u8], source: &mut S) -> usize {
        let mut filled = 0;

        while filled < buf.len() {
            let bytes = self.pending().min(buf.len() - filled);
            buf[filled..filled + bytes]
                .copy_from_slice(&self.outbuf[self.outbuf_pos..self.outbuf_pos + bytes]);
            self.outbuf_pos += bytes;
            filled += bytes;

            if self.outbuf_pos >= self.outbuf_len {
                self.process_run(source);
                self.outbuf_pos = 0;
            }

            if self.outbuf_len == 0 {
                break;
            }
        }

        filled
    }
}
