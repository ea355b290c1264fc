//! Constants and bit-field helpers for the `-lz5-` LZSS format.
//!
//! The compressed stream is a sequence of *runs*: one bitmap byte followed by
//! eight commands, consumed low bit first.  A set bit is a literal byte; a
//! clear bit is a two-byte copy command:
//!
//! ```text
//!   c0 = oooo oooo     low 8 bits of the ring-buffer offset
//!   c1 = OOOO llll     high 4 bits of the offset, 4-bit length - THRESHOLD
//! ```

/// Size of the history ring buffer (the copy-command dictionary).
pub const RING_BUFFER_SIZE: usize = 4096;

/// Mask applied to ring-buffer indices; `RING_BUFFER_SIZE` is a power of two.
pub const RING_BUFFER_MASK: usize = RING_BUFFER_SIZE - 1;

/// Distance back from the end of the ring buffer at which writing starts.
pub const START_OFFSET: usize = 18;

/// Initial write cursor: `RING_BUFFER_SIZE - START_OFFSET`.
pub const RING_BUFFER_START: usize = RING_BUFFER_SIZE - START_OFFSET;

/// Byte the ring buffer is pre-filled with.
pub const RING_BUFFER_FILL: u8 = b' ';

/// Bias added to the raw 4-bit copy length, giving the range 3..=18.
pub const THRESHOLD: usize = 3;

/// Longest copy a single command can encode.
pub const MAX_COPY_LEN: usize = 0x0F + THRESHOLD;

/// Commands per run (one per bitmap bit).
pub const COMMANDS_PER_RUN: usize = 8;

/// Staging capacity: the most a single run can produce (8 maximal copies).
pub const OUTPUT_BUFFER_SIZE: usize = MAX_COPY_LEN * COMMANDS_PER_RUN;

/// Decodes a two-byte copy command into `(start, length)`.
///
/// `start` is an absolute ring-buffer position, not a distance.
#[inline(always)]
pub fn copy_command(c0: u8, c1: u8) -> (usize, usize) {
    let start = ((usize::from(c1) & 0xF0) << 4) | usize::from(c0);
    let len = (usize::from(c1) & 0x0F) + THRESHOLD;
    (start, len)
}
